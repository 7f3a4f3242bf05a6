//! # Baryon Core
//!
//! Barycentric Lagrange interpolation with incremental node insertion.
//!
//! The central type is [`BarycentricInterpolator`]: it owns a set of
//! interpolation nodes, the data attached to them (scalar- or vector-valued,
//! real or complex), and the derived barycentric weights. Nodes can be added
//! after construction; weights are always recomputed over the full node set
//! so that stale weights are never observable.
//!
//! ## Modules
//!
//! - [`interpolator`] — The interpolator itself and the one-shot
//!   [`barycentric_interpolate`] helper.
//! - [`weights`] — Numerically stable weight computation (rescaled products).
//! - [`chebyshev`] — Chebyshev node generation for well-conditioned
//!   high-degree interpolation.
//! - [`scalar`] — The scalar-field abstraction (`f64` or `Complex64`).
//! - [`error`] — Error types.
//!
//! ## Feature flags
//!
//! | Feature | Description | Default |
//! |---------|-------------|---------|
//! | `parallel` | Rayon-parallel weight recomputation and batch evaluation | yes |
//!
//! ## Example
//!
//! ```
//! use baryon_core::BarycentricInterpolator;
//! use ndarray::array;
//!
//! // Interpolate y = x² from three samples.
//! let interp = BarycentricInterpolator::with_values(
//!     array![0.0, 1.0, 2.0],
//!     array![0.0, 1.0, 4.0],
//! )
//! .unwrap();
//!
//! let y = interp.evaluate(&array![1.5]).unwrap();
//! assert!((y[[0]] - 2.25).abs() < 1e-12);
//! ```
//!
//! ## Concurrency
//!
//! An interpolator is plain data: mutation takes `&mut self`, evaluation takes
//! `&self`, so the borrow checker already rules out mutation during an
//! in-flight evaluation, and `BarycentricInterpolator<T>` is `Send + Sync`
//! for concurrent read-only use. With the `parallel` feature the weight
//! recomputation and batched evaluation fan out over Rayon internally; the
//! results are deterministic and the API is unchanged.

pub mod chebyshev;
pub mod error;
pub mod interpolator;
pub mod scalar;
pub mod weights;

pub use chebyshev::chebyshev_nodes;
pub use error::InterpolationError;
pub use interpolator::{barycentric_interpolate, BarycentricInterpolator};
pub use scalar::Scalar;
