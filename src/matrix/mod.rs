//! Immutable square matrices.
//!
//! Each size is its own type, so mixing a [`Matrix3`] with a [`Matrix4`] is a
//! compile error rather than a runtime dimension check.

mod matrix3;
mod matrix4;

pub use matrix3::Matrix3;
pub use matrix4::Matrix4;
