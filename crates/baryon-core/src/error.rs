//! Error types for interpolator construction and use.

use thiserror::Error;

/// Errors raised when an interpolator contract is violated.
///
/// All variants are raised synchronously by the offending call, and a failed
/// mutation leaves the interpolator untouched: inputs are validated before
/// any state changes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InterpolationError {
    /// Construction was attempted with zero nodes.
    #[error("at least one interpolation node is required")]
    EmptyNodes,

    /// A leading dimension does not match the expected node count.
    #[error("{context}: expected leading dimension {expected}, got {actual}")]
    ShapeMismatch {
        expected: usize,
        actual: usize,
        context: &'static str,
    },

    /// Appended values disagree with the existing values in their trailing
    /// (per-node) shape.
    #[error("appended values have trailing shape {actual:?}, existing values have {expected:?}")]
    TrailingShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
    },

    /// Evaluation (or a value append) was requested before any values were
    /// assigned.
    #[error("no values have been assigned to the interpolation nodes")]
    UninitializedValues,

    /// Nodes were added without values while the interpolator tracks values.
    #[error("{0} node(s) added without values, but this interpolator tracks values")]
    MissingAppendValues(usize),

    /// An axis index is out of range for the given values array.
    #[error("axis {axis} is out of range for values with {ndim} dimension(s)")]
    InvalidAxis { axis: usize, ndim: usize },
}
