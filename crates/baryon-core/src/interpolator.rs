//! Barycentric Lagrange interpolation with incremental node insertion.
//!
//! The interpolating polynomial through nodes $x_i$ with data $y_i$ is
//! evaluated in the barycentric form
//!
//! $p(t) = \frac{\sum_i \frac{w_i}{t - x_i} y_i}{\sum_i \frac{w_i}{t - x_i}}$
//!
//! where the weights $w_i$ depend only on the nodes. Evaluation is $O(n)$
//! per point once the weights are known, and adding nodes later is
//! supported: every weight depends on every node, so an insertion triggers a
//! full recomputation of the weight vector rather than an incremental (and
//! numerically unsafe) update.

use ndarray::{concatenate, Array, Array1, ArrayD, ArrayView2, Axis, Dimension, IxDyn};
use num_traits::Zero;

use crate::chebyshev::chebyshev_nodes;
use crate::error::InterpolationError;
use crate::scalar::Scalar;
use crate::weights::barycentric_weights;

/// Polynomial interpolator in barycentric form.
///
/// Owns the node coordinates, the optional data attached to them, and the
/// derived barycentric weights. The node set only grows over the lifetime of
/// the interpolator; values may be assigned late, replaced wholesale, or
/// extended together with new nodes.
///
/// Data may be scalar-valued (one number per node) or vector-valued (any
/// trailing shape per node), over a real or complex field; see [`Scalar`].
///
/// # Example
///
/// ```
/// use baryon_core::BarycentricInterpolator;
/// use ndarray::array;
///
/// let mut interp = BarycentricInterpolator::new(array![0.0, 1.0]).unwrap();
/// interp.set_values(array![1.0, 3.0]).unwrap();
///
/// // Nodes added later; weights are recomputed over the full set.
/// // (The data here stays linear, so the quadratic interpolant matches it.)
/// interp
///     .add_points_with_values(array![2.0], array![5.0])
///     .unwrap();
///
/// let y = interp.evaluate(&array![0.5, 1.5]).unwrap();
/// assert!((y[[0]] - 2.0).abs() < 1e-12);
/// assert!((y[[1]] - 4.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct BarycentricInterpolator<T: Scalar> {
    nodes: Array1<T>,
    weights: Array1<T>,
    values: Option<ArrayD<T>>,
}

impl<T: Scalar> BarycentricInterpolator<T> {
    /// Create an interpolator from its nodes alone; values are assigned
    /// later via [`set_values`](Self::set_values).
    ///
    /// Nodes must be pairwise distinct; duplicates are not detected and
    /// produce non-finite weights.
    ///
    /// # Errors
    ///
    /// [`InterpolationError::EmptyNodes`] if `nodes` is empty.
    pub fn new(nodes: Array1<T>) -> Result<Self, InterpolationError> {
        if nodes.is_empty() {
            return Err(InterpolationError::EmptyNodes);
        }
        let weights = barycentric_weights(nodes.view());
        Ok(Self {
            nodes,
            weights,
            values: None,
        })
    }

    /// Create an interpolator with nodes and data in one step.
    ///
    /// `values` may have any trailing shape; its leading axis must match the
    /// node count.
    pub fn with_values<D: Dimension>(
        nodes: Array1<T>,
        values: Array<T, D>,
    ) -> Result<Self, InterpolationError> {
        let mut interp = Self::new(nodes)?;
        interp.set_values(values)?;
        Ok(interp)
    }

    /// Create an interpolator with caller-supplied barycentric weights.
    ///
    /// Useful when analytically known weights (e.g. for Chebyshev points)
    /// should replace the computed ones. The weights are trusted; only their
    /// length is checked.
    pub fn with_weights(
        nodes: Array1<T>,
        weights: Array1<T>,
    ) -> Result<Self, InterpolationError> {
        if nodes.is_empty() {
            return Err(InterpolationError::EmptyNodes);
        }
        if weights.len() != nodes.len() {
            return Err(InterpolationError::ShapeMismatch {
                expected: nodes.len(),
                actual: weights.len(),
                context: "precomputed weights",
            });
        }
        Ok(Self {
            nodes,
            weights,
            values: None,
        })
    }

    /// Assign or replace the data attached to the nodes.
    ///
    /// The leading axis of `values` must equal the node count; trailing axes
    /// (if any) describe vector-valued data and may differ from a previous
    /// assignment.
    pub fn set_values<D: Dimension>(
        &mut self,
        values: Array<T, D>,
    ) -> Result<(), InterpolationError> {
        let values = values.into_dyn();
        let rows = values.shape().first().copied().unwrap_or(0);
        if values.ndim() == 0 || rows != self.nodes.len() {
            return Err(InterpolationError::ShapeMismatch {
                expected: self.nodes.len(),
                actual: rows,
                context: "value rows",
            });
        }
        self.values = Some(into_standard(values));
        Ok(())
    }

    /// Assign values whose node dimension is `axis` rather than the leading
    /// axis.
    ///
    /// The given axis is rotated to the front (the order of the remaining
    /// axes is preserved) and the result stored as usual.
    pub fn set_values_axis<D: Dimension>(
        &mut self,
        values: Array<T, D>,
        axis: usize,
    ) -> Result<(), InterpolationError> {
        let values = values.into_dyn();
        if axis >= values.ndim() {
            return Err(InterpolationError::InvalidAxis {
                axis,
                ndim: values.ndim(),
            });
        }
        let mut order: Vec<usize> = (0..values.ndim()).collect();
        order.remove(axis);
        order.insert(0, axis);
        self.set_values(values.permuted_axes(IxDyn(&order)))
    }

    /// Add nodes to an interpolator that does not track values.
    ///
    /// The full weight vector is recomputed over the union of old and new
    /// nodes.
    ///
    /// # Errors
    ///
    /// [`InterpolationError::MissingAppendValues`] if values are tracked;
    /// use [`add_points_with_values`](Self::add_points_with_values) so the
    /// value rows stay aligned with the nodes.
    pub fn add_points(&mut self, new_nodes: Array1<T>) -> Result<(), InterpolationError> {
        if self.values.is_some() {
            return Err(InterpolationError::MissingAppendValues(new_nodes.len()));
        }
        self.append_nodes(new_nodes);
        Ok(())
    }

    /// Add nodes together with their value rows.
    ///
    /// `new_values` must have one leading row per new node and the same
    /// trailing shape as the existing values. Nothing is mutated if any
    /// check fails.
    pub fn add_points_with_values<D: Dimension>(
        &mut self,
        new_nodes: Array1<T>,
        new_values: Array<T, D>,
    ) -> Result<(), InterpolationError> {
        let new_values = new_values.into_dyn();
        let values = self
            .values
            .as_ref()
            .ok_or(InterpolationError::UninitializedValues)?;

        let rows = new_values.shape().first().copied().unwrap_or(0);
        if new_values.ndim() == 0 || rows != new_nodes.len() {
            return Err(InterpolationError::ShapeMismatch {
                expected: new_nodes.len(),
                actual: rows,
                context: "appended value rows",
            });
        }
        if new_values.shape()[1..] != values.shape()[1..] {
            return Err(InterpolationError::TrailingShapeMismatch {
                expected: values.shape()[1..].to_vec(),
                actual: new_values.shape()[1..].to_vec(),
            });
        }

        let merged = concatenate(Axis(0), &[values.view(), new_values.view()])
            .expect("leading and trailing dimensions verified above");
        self.append_nodes(new_nodes);
        self.values = Some(merged);
        Ok(())
    }

    fn append_nodes(&mut self, new_nodes: Array1<T>) {
        if new_nodes.is_empty() {
            return;
        }
        let merged = concatenate(Axis(0), &[self.nodes.view(), new_nodes.view()])
            .expect("one-dimensional arrays always concatenate");
        self.weights = barycentric_weights(merged.view());
        self.nodes = merged;
    }

    /// Evaluate the interpolant at every point of `x`.
    ///
    /// The output has shape `x.shape() ++ trailing`, where `trailing` is the
    /// per-node shape of the values. A 0-D `x` therefore contributes no
    /// leading axes: the result is just the trailing shape (a 0-D array for
    /// scalar-valued data). See also [`evaluate_at`](Self::evaluate_at).
    ///
    /// A point that equals a node under exact floating comparison returns
    /// the stored row directly, with no 0/0 and no tolerance window. A
    /// tolerance would silently change results for intentionally
    /// close-but-distinct nodes.
    ///
    /// # Errors
    ///
    /// [`InterpolationError::UninitializedValues`] if no values have been
    /// assigned yet.
    pub fn evaluate<D: Dimension>(&self, x: &Array<T, D>) -> Result<ArrayD<T>, InterpolationError> {
        let values = self
            .values
            .as_ref()
            .ok_or(InterpolationError::UninitializedValues)?;
        let n = self.nodes.len();
        let trailing: Vec<usize> = values.shape()[1..].to_vec();
        let m: usize = trailing.iter().product();
        let rows = values
            .view()
            .into_shape_with_order((n, m))
            .expect("values are stored in standard layout");

        let points: Vec<T> = x.iter().copied().collect();

        #[cfg(feature = "parallel")]
        let per_point: Vec<Vec<T>> = {
            use rayon::prelude::*;
            points
                .par_iter()
                .map(|&t| evaluate_point(t, &self.nodes, &self.weights, &rows, m))
                .collect()
        };
        #[cfg(not(feature = "parallel"))]
        let per_point: Vec<Vec<T>> = points
            .iter()
            .map(|&t| evaluate_point(t, &self.nodes, &self.weights, &rows, m))
            .collect();

        let data: Vec<T> = per_point.into_iter().flatten().collect();

        let mut out_shape = x.shape().to_vec();
        out_shape.extend_from_slice(&trailing);
        Ok(ArrayD::from_shape_vec(IxDyn(&out_shape), data)
            .expect("output length equals point count times trailing size"))
    }

    /// Evaluate the interpolant at a single point.
    ///
    /// Returns an array with the trailing shape of the values (0-D for
    /// scalar-valued data).
    pub fn evaluate_at(&self, t: T) -> Result<ArrayD<T>, InterpolationError> {
        self.evaluate(&ndarray::arr0(t))
    }

    /// The interpolation nodes, in insertion order.
    pub fn nodes(&self) -> &Array1<T> {
        &self.nodes
    }

    /// The barycentric weights, one per node, always current for the full
    /// node set.
    pub fn weights(&self) -> &Array1<T> {
        &self.weights
    }

    /// The values attached to the nodes, if any have been assigned.
    pub fn values(&self) -> Option<&ArrayD<T>> {
        self.values.as_ref()
    }

    /// Number of interpolation nodes.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Degree of the interpolating polynomial (node count minus one).
    pub fn degree(&self) -> usize {
        self.nodes.len() - 1
    }
}

impl BarycentricInterpolator<f64> {
    /// Interpolator on `n` Chebyshev points of the second kind in `[a, b]`.
    ///
    /// No values are assigned; call [`set_values`](Self::set_values) before
    /// evaluating. See [`chebyshev_nodes`] for the node convention.
    pub fn chebyshev(n: usize, a: f64, b: f64) -> Result<Self, InterpolationError> {
        Self::new(chebyshev_nodes(n, a, b))
    }
}

/// One-shot barycentric interpolation.
///
/// Builds a transient interpolator over `nodes` and `values` and evaluates
/// it at `x`; equivalent to
/// `BarycentricInterpolator::with_values(nodes, values)?.evaluate(x)`.
/// Prefer constructing the interpolator once when evaluating the same node
/// set repeatedly, since the weight computation is $O(n^2)$.
pub fn barycentric_interpolate<T, Dv, Dx>(
    nodes: &Array1<T>,
    values: &Array<T, Dv>,
    x: &Array<T, Dx>,
) -> Result<ArrayD<T>, InterpolationError>
where
    T: Scalar,
    Dv: Dimension,
    Dx: Dimension,
{
    BarycentricInterpolator::with_values(nodes.clone(), values.clone())?.evaluate(x)
}

/// Evaluate one point against every node, one weighted sum and one
/// normalizing sum shared across all trailing components.
fn evaluate_point<T: Scalar>(
    t: T,
    nodes: &Array1<T>,
    weights: &Array1<T>,
    rows: &ArrayView2<'_, T>,
    m: usize,
) -> Vec<T> {
    // An exact node hit returns the stored row; the divided form below
    // would produce 0/0 there.
    for (i, &xi) in nodes.iter().enumerate() {
        if t == xi {
            return rows.row(i).to_vec();
        }
    }

    let mut denom = T::zero();
    let mut numer = vec![T::zero(); m];
    for (i, &xi) in nodes.iter().enumerate() {
        let c = weights[i] / (t - xi);
        denom = denom + c;
        for (acc, &v) in numer.iter_mut().zip(rows.row(i)) {
            *acc = *acc + c * v;
        }
    }
    numer.into_iter().map(|v| v / denom).collect()
}

/// Values are stored contiguously so evaluation can view them as a
/// `(nodes, components)` matrix without copying.
fn into_standard<T: Scalar>(values: ArrayD<T>) -> ArrayD<T> {
    if values.is_standard_layout() {
        values
    } else {
        values.as_standard_layout().into_owned()
    }
}
