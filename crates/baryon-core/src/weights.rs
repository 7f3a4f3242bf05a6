//! Numerically stable barycentric weight computation.
//!
//! The weight attached to node $x_i$ is the reciprocal
//! $w_i = \prod_{j \ne i} (x_i - x_j)^{-1}$.
//! Multiplying hundreds of raw differences overflows or underflows long
//! before the weights themselves leave the representable range, so every
//! difference is divided by a common power of ten chosen from the largest
//! pairwise distance, and the removed magnitude is restored once per row
//! after the product.

use ndarray::{Array1, ArrayView1};
use num_complex::ComplexFloat;
use num_traits::One;

use crate::scalar::Scalar;

/// Compute barycentric weights for a set of pairwise-distinct nodes.
///
/// A single node yields weight 1 (the reciprocal of the empty product), and
/// an empty view yields an empty weight vector. Duplicate nodes are a
/// precondition violation and produce non-finite weights rather than an
/// error.
pub fn barycentric_weights<T: Scalar>(nodes: ArrayView1<'_, T>) -> Array1<T> {
    let n = nodes.len();
    if n <= 1 {
        return Array1::from_elem(n, T::one());
    }

    // Common scale 10^(floor(log10 max|xi - xj|) / (n - 1)); its (n-1)th
    // power restores what the per-factor division removed.
    let mut max_abs = 0.0_f64;
    for i in 0..n {
        for j in 0..i {
            let d = (nodes[i] - nodes[j]).abs();
            if d > max_abs {
                max_abs = d;
            }
        }
    }
    let scale = 10.0_f64.powf(max_abs.log10().floor() / (n - 1) as f64);
    let scale_t = <T as From<f64>>::from(scale);
    let restore = <T as From<f64>>::from(scale.powi(n as i32 - 1));

    let row_weight = |i: usize| -> T {
        let mut prod = T::one();
        for j in 0..n {
            if j != i {
                prod = prod * ((nodes[i] - nodes[j]) / scale_t);
            }
        }
        T::one() / (prod * restore)
    };

    #[cfg(feature = "parallel")]
    let weights: Vec<T> = {
        use rayon::prelude::*;
        (0..n).into_par_iter().map(row_weight).collect()
    };
    #[cfg(not(feature = "parallel"))]
    let weights: Vec<T> = (0..n).map(row_weight).collect();

    Array1::from_vec(weights)
}
