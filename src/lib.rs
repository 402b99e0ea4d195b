//! Small, immutable **linear algebra** for engine code: vectors, square
//! matrices and orthonormal orientation frames.
//!
//! Every value is a `Copy` type that never changes after construction.
//! Operations return new values, and anything that can fail on bad input
//! (non-finite components, zero-length normalization, singular inversion,
//! degenerate frames) returns a [`MathResult`] instead of propagating NaN.
//!
//! Code that only needs "something with an x and a y" or "something that can
//! be added" can be written against the capability traits in [`traits`].
//!
//! # Features
//! #### Default
//! - **nalgebra**: lossless conversions to and from [`nalgebra`](https://nalgebra.org) types
//!
//! #### Optional
//! - **f64**: use f64 as [`Real`] instead of f32
//! - **serde**: `Serialize`/`Deserialize` for every value type, with validation on the way in
//!
//! ```
//! use engine_math::{Matrix4, Orientation, Vector3};
//!
//! let frame = Orientation::new(
//!     Vector3::new(0.0, 0.0, -1.0)?,
//!     Vector3::new(0.1, 1.0, 0.0)?, // slightly off, repaired
//! )?;
//! let view = Matrix4::view(&frame, &Vector3::new(0.0, 2.0, 5.0)?)?;
//! let eye_space = view.transform_point(&Vector3::new(0.0, 2.0, 0.0)?)?;
//! assert!((eye_space.z() + 5.0).abs() < 1e-5);
//! # Ok::<(), engine_math::MathError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod angle;
pub mod errors;
pub mod float_types;
pub mod matrix;
pub mod orientation;
pub mod traits;
pub mod vector;

#[cfg(feature = "nalgebra")]
pub mod nalgebra_interop;

pub use angle::{Degree, Radian};
pub use errors::{MathError, MathResult};
pub use float_types::Real;
pub use matrix::{Matrix3, Matrix4};
pub use orientation::Orientation;
pub use vector::{Vector2, Vector3, Vector4};

/// Everything needed to write code against the capability traits.
pub mod prelude {
    pub use crate::traits::{
        Addable, FourDimensional, ThreeDimensional, Transposable, TwoDimensional,
    };
    pub use crate::{
        Degree, MathError, MathResult, Matrix3, Matrix4, Orientation, Radian, Real, Vector2,
        Vector3, Vector4,
    };
}
