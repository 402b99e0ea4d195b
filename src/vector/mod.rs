//! Immutable fixed-size vectors.
//!
//! Uses a right-handed coordinate system. Every component is finite: the
//! public constructors validate their input and every operation returns a
//! fresh value.

mod vector2;
mod vector3;
mod vector4;

pub use vector2::Vector2;
pub use vector3::Vector3;
pub use vector4::Vector4;
