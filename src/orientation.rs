//! Orthonormal orientation frames.
//!
//! An [`Orientation`] is the forward/up/right triple that audio listeners,
//! cameras and scene nodes hand around. Gameplay code rarely supplies exactly
//! perpendicular vectors, so construction repairs a skewed `up` by
//! Gram-Schmidt against `forward` and only rejects input that has no valid
//! frame at all: a zero vector, or `up` parallel to `forward`.

use crate::errors::{MathError, MathResult};
use crate::float_types::{Real, is_negligible, tolerance};
use crate::matrix::Matrix3;
use crate::vector::Vector3;
use std::fmt::Display;

/// Mutually perpendicular unit `forward`, `up` and `right` directions.
///
/// `right = forward × up`, so the default frame looking down -Z with +Y up
/// has +X on the right.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "OrientationRepr", into = "OrientationRepr")
)]
pub struct Orientation {
    forward: Vector3,
    up: Vector3,
    right: Vector3,
}

impl Orientation {
    /// Forward -Z, up +Y, right +X.
    pub const CANONICAL: Self = Self {
        forward: Vector3::raw(0.0, 0.0, -1.0),
        up: Vector3::UNIT_Y,
        right: Vector3::UNIT_X,
    };

    /// Build a frame from a view direction and an approximate up direction.
    ///
    /// Neither input has to be unit length, and `up` only has to be
    /// non-parallel to `forward`: the returned `up` is the component of the
    /// supplied one perpendicular to `forward`, renormalized.
    ///
    /// # Errors
    /// - [`MathError::DegenerateVector`] if either input is the zero vector.
    /// - [`MathError::NonOrthogonalizableInput`] if `forward` and `up` are
    ///   parallel (within tolerance), so no perpendicular exists.
    pub fn new(forward: Vector3, up: Vector3) -> MathResult<Self> {
        let f = forward.normalize_named("forward")?;
        let u = up.normalize_named("up")?;

        // |f × u| = sin θ for unit inputs
        let cross = f.cross(&u);
        if is_negligible(cross.magnitude(), 1.0) {
            return Err(MathError::NonOrthogonalizableInput { forward, up });
        }
        let right = cross.normalize_named("right")?;
        let repaired_up = right.cross(&f);

        let skew = f.dot(&u);
        if !is_negligible(skew, 1.0) {
            tracing::trace!(skew, "orientation up vector re-orthogonalized against forward");
        }

        Ok(Self {
            forward: f,
            up: repaired_up,
            right,
        })
    }

    /// Rebuild a frame from a rotation matrix laid out as
    /// [`to_matrix3`](Self::to_matrix3) produces it.
    ///
    /// Only the up and backward columns are read; right is re-derived.
    pub fn from_matrix3(m: &Matrix3) -> MathResult<Self> {
        let rows = m.to_rows();
        let up = Vector3::raw(rows[0][1], rows[1][1], rows[2][1]);
        let forward = Vector3::raw(-rows[0][2], -rows[1][2], -rows[2][2]);
        Self::new(forward, up)
    }

    #[inline]
    pub const fn forward(&self) -> Vector3 {
        self.forward
    }

    #[inline]
    pub const fn up(&self) -> Vector3 {
        self.up
    }

    #[inline]
    pub const fn right(&self) -> Vector3 {
        self.right
    }

    /// The rotation taking local axes to this frame: columns are right, up
    /// and the backward (-forward) direction, so local -Z maps to forward.
    pub const fn to_matrix3(&self) -> Matrix3 {
        Matrix3::from_columns(self.right, self.up, self.forward.negate())
    }

    pub fn approx_eq(&self, other: &Self) -> bool {
        self.forward.approx_eq(&other.forward)
            && self.up.approx_eq(&other.up)
            && self.right.approx_eq(&other.right)
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Self::CANONICAL
    }
}

impl Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "forward {}, up {}, right {}",
            self.forward, self.up, self.right
        )
    }
}

impl approx::AbsDiffEq for Orientation {
    type Epsilon = Real;

    fn default_epsilon() -> Real {
        tolerance()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Real) -> bool {
        approx::AbsDiffEq::abs_diff_eq(&self.forward, &other.forward, epsilon)
            && approx::AbsDiffEq::abs_diff_eq(&self.up, &other.up, epsilon)
            && approx::AbsDiffEq::abs_diff_eq(&self.right, &other.right, epsilon)
    }
}

/// Serialized form: only the two caller-facing directions. Deserializing
/// runs them back through [`Orientation::new`].
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct OrientationRepr {
    forward: Vector3,
    up: Vector3,
}

#[cfg(feature = "serde")]
impl TryFrom<OrientationRepr> for Orientation {
    type Error = MathError;
    fn try_from(repr: OrientationRepr) -> MathResult<Self> {
        Self::new(repr.forward, repr.up)
    }
}

#[cfg(feature = "serde")]
impl From<Orientation> for OrientationRepr {
    fn from(o: Orientation) -> Self {
        Self {
            forward: o.forward,
            up: o.up,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{AbsDiffEq, assert_abs_diff_eq};

    fn v(x: Real, y: Real, z: Real) -> Vector3 {
        Vector3::new(x, y, z).unwrap()
    }

    #[test]
    fn canonical_basis() {
        let o = Orientation::new(v(0.0, 0.0, -1.0), v(0.0, 1.0, 0.0)).unwrap();
        assert_eq!(o, Orientation::CANONICAL);
        assert_eq!(o, Orientation::default());
    }

    #[test]
    fn unnormalized_inputs_are_normalized() {
        let o = Orientation::new(v(0.0, 0.0, -8.0), v(0.0, 3.0, 0.0)).unwrap();
        assert_eq!(o, Orientation::CANONICAL);
    }

    #[test]
    fn zero_inputs_are_degenerate() {
        assert_eq!(
            Orientation::new(Vector3::ZERO, Vector3::UNIT_Y),
            Err(MathError::DegenerateVector { name: "forward" })
        );
        assert_eq!(
            Orientation::new(Vector3::UNIT_X, Vector3::ZERO),
            Err(MathError::DegenerateVector { name: "up" })
        );
    }

    #[test]
    fn anti_parallel_inputs_are_rejected() {
        let err = Orientation::new(v(0.0, 1.0, 0.0), v(0.0, -2.0, 0.0)).unwrap_err();
        assert!(matches!(err, MathError::NonOrthogonalizableInput { .. }));
    }

    #[test]
    fn matrix_round_trip() {
        let o = Orientation::new(v(1.0, 0.2, -1.0), v(0.1, 1.0, 0.0)).unwrap();
        let m = o.to_matrix3();
        assert_abs_diff_eq!(m.determinant(), 1.0, epsilon = 1e-5);
        assert_abs_diff_eq!(m * v(0.0, 0.0, -1.0), o.forward(), epsilon = 1e-6);
        let back = Orientation::from_matrix3(&m).unwrap();
        assert!(back.abs_diff_eq(&o, 1e-5));
    }

    #[test]
    fn display() {
        assert_eq!(
            Orientation::CANONICAL.to_string(),
            "forward (0, 0, -1), up (0, 1, 0), right (1, 0, 0)"
        );
    }
}
