//! Conversions to and from [`nalgebra`] for code that needs decompositions or
//! solvers this crate does not provide.
//!
//! Going into nalgebra is infallible. Coming back revalidates finiteness,
//! since nalgebra values are free to hold NaN.

use crate::errors::{MathError, MathResult};
use crate::float_types::Real;
use crate::matrix::{Matrix3, Matrix4};
use crate::orientation::Orientation;
use crate::vector::{Vector2, Vector3, Vector4};

impl From<Vector2> for nalgebra::Vector2<Real> {
    fn from(v: Vector2) -> Self {
        nalgebra::Vector2::new(v.x(), v.y())
    }
}

impl TryFrom<nalgebra::Vector2<Real>> for Vector2 {
    type Error = MathError;
    fn try_from(v: nalgebra::Vector2<Real>) -> MathResult<Self> {
        Self::new(v.x, v.y)
    }
}

impl From<Vector3> for nalgebra::Vector3<Real> {
    fn from(v: Vector3) -> Self {
        nalgebra::Vector3::new(v.x(), v.y(), v.z())
    }
}

impl TryFrom<nalgebra::Vector3<Real>> for Vector3 {
    type Error = MathError;
    fn try_from(v: nalgebra::Vector3<Real>) -> MathResult<Self> {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vector3> for nalgebra::Point3<Real> {
    fn from(v: Vector3) -> Self {
        nalgebra::Point3::new(v.x(), v.y(), v.z())
    }
}

impl TryFrom<nalgebra::Point3<Real>> for Vector3 {
    type Error = MathError;
    fn try_from(p: nalgebra::Point3<Real>) -> MathResult<Self> {
        Self::new(p.x, p.y, p.z)
    }
}

impl From<Vector4> for nalgebra::Vector4<Real> {
    fn from(v: Vector4) -> Self {
        nalgebra::Vector4::new(v.x(), v.y(), v.z(), v.w())
    }
}

impl TryFrom<nalgebra::Vector4<Real>> for Vector4 {
    type Error = MathError;
    fn try_from(v: nalgebra::Vector4<Real>) -> MathResult<Self> {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

impl From<Matrix3> for nalgebra::Matrix3<Real> {
    fn from(m: Matrix3) -> Self {
        let rows = m.to_rows();
        nalgebra::Matrix3::from_fn(|r, c| rows[r][c])
    }
}

impl TryFrom<nalgebra::Matrix3<Real>> for Matrix3 {
    type Error = MathError;
    fn try_from(m: nalgebra::Matrix3<Real>) -> MathResult<Self> {
        let mut rows = [[0.0; 3]; 3];
        for (r, row) in rows.iter_mut().enumerate() {
            for (c, value) in row.iter_mut().enumerate() {
                *value = m[(r, c)];
            }
        }
        Self::from_rows(rows)
    }
}

impl From<Matrix4> for nalgebra::Matrix4<Real> {
    fn from(m: Matrix4) -> Self {
        let rows = m.to_rows();
        nalgebra::Matrix4::from_fn(|r, c| rows[r][c])
    }
}

impl TryFrom<nalgebra::Matrix4<Real>> for Matrix4 {
    type Error = MathError;
    fn try_from(m: nalgebra::Matrix4<Real>) -> MathResult<Self> {
        let mut rows = [[0.0; 4]; 4];
        for (r, row) in rows.iter_mut().enumerate() {
            for (c, value) in row.iter_mut().enumerate() {
                *value = m[(r, c)];
            }
        }
        Self::from_rows(rows)
    }
}

impl From<Orientation> for nalgebra::Rotation3<Real> {
    fn from(o: Orientation) -> Self {
        nalgebra::Rotation3::from_matrix_unchecked(o.to_matrix3().into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn matrix_layout_is_preserved() {
        let ours = Matrix3::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 10.0]]).unwrap();
        let theirs: nalgebra::Matrix3<Real> = ours.into();
        assert_eq!(theirs[(0, 1)], 2.0);
        assert_eq!(theirs[(1, 0)], 4.0);
        assert_eq!(Matrix3::try_from(theirs).unwrap(), ours);
    }

    #[test]
    fn nan_is_rejected_on_the_way_back() {
        let v = nalgebra::Vector3::new(0.0, Real::NAN, 1.0);
        assert!(matches!(
            Vector3::try_from(v),
            Err(MathError::InvalidArgument { name: "y", .. })
        ));
        let mut m = nalgebra::Matrix4::<Real>::identity();
        m[(2, 3)] = Real::INFINITY;
        assert!(Matrix4::try_from(m).is_err());
    }

    #[test]
    fn orientation_rotation_maps_neg_z_to_forward() {
        let o = Orientation::new(
            Vector3::new(1.0, 0.0, -1.0).unwrap(),
            Vector3::new(0.0, 1.0, 0.0).unwrap(),
        )
        .unwrap();
        let rot: nalgebra::Rotation3<Real> = o.into();
        let mapped = rot * nalgebra::Vector3::new(0.0, 0.0, -1.0);
        let expected: nalgebra::Vector3<Real> = o.forward().into();
        assert_relative_eq!(mapped, expected, epsilon = 1e-6);
    }
}
