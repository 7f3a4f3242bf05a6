//! Chebyshev node generation.
//!
//! Equispaced nodes make high-degree polynomial interpolation explode
//! (Runge's phenomenon); Chebyshev points cluster near the interval ends and
//! keep the problem well-conditioned at degrees in the hundreds. These are
//! the node sets the weight rescaling in [`crate::weights`] is exercised
//! hardest by.

use std::f64::consts::PI;

use ndarray::Array1;

/// Chebyshev points of the second kind mapped onto `[a, b]`.
///
/// $x_j = \cos(j\pi/(n-1))$ for $j = 0, \dots, n-1$, affinely mapped from
/// `[-1, 1]` to `[a, b]`. The points are ordered from `b` down to `a`, as
/// the cosine delivers them; barycentric interpolation does not require
/// sorted nodes. For `n == 1` the interval midpoint is returned.
pub fn chebyshev_nodes(n: usize, a: f64, b: f64) -> Array1<f64> {
    let centre = 0.5 * (a + b);
    let half_width = 0.5 * (b - a);
    if n == 1 {
        return Array1::from_elem(1, centre);
    }
    Array1::from_iter(
        (0..n).map(|j| centre + half_width * (j as f64 * PI / (n - 1) as f64).cos()),
    )
}
