//! Scalar-field abstraction.
//!
//! Interpolation is generic over the number field the data lives in: real
//! problems use `f64`, complex problems use [`num_complex::Complex64`].
//! Mixed inputs (complex values over real nodes, say) are handled by
//! promoting everything to the wider field through the type parameter, which
//! is exact for `f64 → Complex64`.

use std::fmt::Debug;

use num_complex::ComplexFloat;

/// A scalar belonging to the field an interpolant is computed over.
///
/// Blanket-implemented for every type satisfying the bounds; in practice
/// that is `f64` and [`num_complex::Complex64`]. The [`ComplexFloat`] bound
/// supplies field arithmetic together with the magnitude (`abs`) used for
/// scale estimation, and `From<f64>` lets real scale factors be lifted into
/// the field.
pub trait Scalar:
    ComplexFloat<Real = f64> + From<f64> + Debug + Send + Sync + 'static
{
}

impl<T> Scalar for T where
    T: ComplexFloat<Real = f64> + From<f64> + Debug + Send + Sync + 'static
{
}
