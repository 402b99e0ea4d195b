use crate::angle::Radian;
use crate::errors::{
    MathError, MathResult, ensure_all_finite, ensure_finite, ensure_in_range, rows_finite,
};
use crate::float_types::{PI, Real, is_negligible, tolerance};
use crate::matrix::Matrix3;
use crate::orientation::Orientation;
use crate::traits::{Addable, Transposable};
use crate::vector::{Vector3, Vector4};
use std::fmt::Display;
use std::ops::{Add, Mul};

/// An immutable 4×4 matrix with finite entries.
///
/// Row-major storage, column-vector convention. Affine transforms keep the
/// bottom row at `[0, 0, 0, 1]` and the translation in the last column.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "[[Real; 4]; 4]", into = "[[Real; 4]; 4]")
)]
pub struct Matrix4 {
    m: [[Real; 4]; 4],
}

impl Matrix4 {
    pub const IDENTITY: Self = Self::raw([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);
    pub const ZERO: Self = Self::raw([[0.0; 4]; 4]);

    pub fn from_rows(rows: [[Real; 4]; 4]) -> MathResult<Self> {
        ensure_all_finite("entry", rows.as_flattened())?;
        Ok(Self::raw(rows))
    }

    pub const fn from_columns(c0: Vector4, c1: Vector4, c2: Vector4, c3: Vector4) -> Self {
        Self::raw([
            [c0.x(), c1.x(), c2.x(), c3.x()],
            [c0.y(), c1.y(), c2.y(), c3.y()],
            [c0.z(), c1.z(), c2.z(), c3.z()],
            [c0.w(), c1.w(), c2.w(), c3.w()],
        ])
    }

    pub const fn from_row_vectors(r0: Vector4, r1: Vector4, r2: Vector4, r3: Vector4) -> Self {
        Self::raw([r0.to_array(), r1.to_array(), r2.to_array(), r3.to_array()])
    }

    #[inline]
    pub(crate) const fn raw(m: [[Real; 4]; 4]) -> Self {
        debug_assert!(rows_finite(&m));
        Self { m }
    }

    #[inline]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::ZERO
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Real> {
        self.m.get(row)?.get(col).copied()
    }

    pub fn row(&self, index: usize) -> Option<Vector4> {
        let [x, y, z, w] = *self.m.get(index)?;
        Some(Vector4::raw(x, y, z, w))
    }

    pub fn column(&self, index: usize) -> Option<Vector4> {
        if index >= 4 {
            return None;
        }
        Some(Vector4::raw(
            self.m[0][index],
            self.m[1][index],
            self.m[2][index],
            self.m[3][index],
        ))
    }

    #[inline]
    pub const fn to_rows(self) -> [[Real; 4]; 4] {
        self.m
    }

    /* -------- affine construction -------- */

    pub const fn from_matrix3_and_translation(r: Matrix3, t: Vector3) -> Self {
        let r = r.to_rows();
        Self::raw([
            [r[0][0], r[0][1], r[0][2], t.x()],
            [r[1][0], r[1][1], r[1][2], t.y()],
            [r[2][0], r[2][1], r[2][2], t.z()],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    #[inline]
    pub const fn translation(t: Vector3) -> Self {
        Self::from_matrix3_and_translation(Matrix3::IDENTITY, t)
    }

    #[inline]
    pub const fn rotation(r: Matrix3) -> Self {
        Self::from_matrix3_and_translation(r, Vector3::ZERO)
    }

    pub fn scaling(sx: Real, sy: Real, sz: Real) -> MathResult<Self> {
        Ok(Self::rotation(Matrix3::scaling(sx, sy, sz)?))
    }

    /// Upper-left 3×3 block.
    pub const fn to_matrix3(&self) -> Matrix3 {
        let m = &self.m;
        Matrix3::raw([
            [m[0][0], m[0][1], m[0][2]],
            [m[1][0], m[1][1], m[1][2]],
            [m[2][0], m[2][1], m[2][2]],
        ])
    }

    /// The translation held in the last column.
    pub const fn to_translation(&self) -> Vector3 {
        Vector3::raw(self.m[0][3], self.m[1][3], self.m[2][3])
    }

    /* -------- camera matrices -------- */

    /// View matrix for a camera at `eye` looking at `target`.
    ///
    /// The basis comes from [`Orientation::new`], so `up` only has to be
    /// roughly perpendicular to the view direction. Rows are right, up and
    /// the negated forward axis, i.e. the camera looks down its local -Z.
    pub fn look_at(eye: &Vector3, target: &Vector3, up: &Vector3) -> MathResult<Self> {
        let basis = Orientation::new(target.subtract(*eye), *up)?;
        Self::view(&basis, eye)
    }

    /// View matrix placing the camera at `eye` with the given orientation.
    pub fn view(orientation: &Orientation, eye: &Vector3) -> MathResult<Self> {
        let r = orientation.right();
        let u = orientation.up();
        let f = orientation.forward();
        Self::from_rows([
            [r.x(), r.y(), r.z(), -r.dot(eye)],
            [u.x(), u.y(), u.z(), -u.dot(eye)],
            [-f.x(), -f.y(), -f.z(), f.dot(eye)],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// OpenGL-style perspective projection (clip z in `[-1, 1]`).
    pub fn perspective(
        fov_y: impl Into<Radian>,
        aspect: Real,
        near: Real,
        far: Real,
    ) -> MathResult<Self> {
        let fov_y = fov_y.into().value();
        if fov_y <= 0.0 || fov_y >= PI {
            return Err(MathError::InvalidArgument {
                name: "fov_y",
                value: fov_y,
                reason: "must lie strictly between 0 and π radians",
            });
        }
        let aspect = ensure_finite("aspect", aspect)?;
        if aspect <= 0.0 {
            return Err(MathError::InvalidArgument {
                name: "aspect",
                value: aspect,
                reason: "must be positive",
            });
        }
        let near = ensure_finite("near", near)?;
        let far = ensure_finite("far", far)?;
        if near <= 0.0 {
            return Err(MathError::InvalidArgument {
                name: "near",
                value: near,
                reason: "must be positive",
            });
        }
        if far <= near {
            return Err(MathError::InvalidArgument {
                name: "far",
                value: far,
                reason: "must be greater than near",
            });
        }

        let f = 1.0 / (fov_y * 0.5).tan();
        let depth = near - far;
        Self::from_rows([
            [f / aspect, 0.0, 0.0, 0.0],
            [0.0, f, 0.0, 0.0],
            [0.0, 0.0, (far + near) / depth, 2.0 * far * near / depth],
            [0.0, 0.0, -1.0, 0.0],
        ])
    }

    /// OpenGL-style orthographic projection.
    pub fn orthographic(
        left: Real,
        right: Real,
        bottom: Real,
        top: Real,
        near: Real,
        far: Real,
    ) -> MathResult<Self> {
        ensure_all_finite("bound", &[left, right, bottom, top, near, far])?;
        let width = right - left;
        let height = top - bottom;
        let depth = far - near;
        for (name, extent) in [("right", width), ("top", height), ("far", depth)] {
            if extent == 0.0 {
                return Err(MathError::InvalidArgument {
                    name,
                    value: extent,
                    reason: "range is empty",
                });
            }
        }
        Self::from_rows([
            [2.0 / width, 0.0, 0.0, -(right + left) / width],
            [0.0, 2.0 / height, 0.0, -(top + bottom) / height],
            [0.0, 0.0, -2.0 / depth, -(far + near) / depth],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /* -------- products -------- */

    pub fn multiply(&self, other: &Self) -> Self {
        let mut out = [[0.0; 4]; 4];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = self.m[i][0] * other.m[0][j]
                    + self.m[i][1] * other.m[1][j]
                    + self.m[i][2] * other.m[2][j]
                    + self.m[i][3] * other.m[3][j];
            }
        }
        Self::raw(out)
    }

    pub fn mul_vector(&self, v: &Vector4) -> Vector4 {
        let [x, y, z, w] = self
            .m
            .map(|r| r[0] * v.x() + r[1] * v.y() + r[2] * v.z() + r[3] * v.w());
        Vector4::raw(x, y, z, w)
    }

    /// Transform a point (`w = 1`) and apply the perspective divide.
    pub fn transform_point(&self, p: &Vector3) -> MathResult<Vector3> {
        let h = self
            .m
            .map(|r| r[0] * p.x() + r[1] * p.y() + r[2] * p.z() + r[3]);
        ensure_in_range("point", &h)?;
        let [x, y, z, w] = h;
        if w == 0.0 {
            return Err(MathError::DegenerateVector { name: "w" });
        }
        if w == 1.0 {
            return Ok(Vector3::raw(x, y, z));
        }
        let divided = [x / w, y / w, z / w];
        ensure_in_range("point", &divided)?;
        Ok(Vector3::raw(divided[0], divided[1], divided[2]))
    }

    /// Transform a direction (`w = 0`), ignoring translation.
    pub fn transform_direction(&self, v: &Vector3) -> Vector3 {
        self.to_matrix3().mul_vector(v)
    }

    pub fn scale(&self, factor: Real) -> MathResult<Self> {
        let factor = ensure_finite("factor", factor)?;
        let scaled = self.m.map(|row| row.map(|e| e * factor));
        ensure_in_range("factor", scaled.as_flattened())?;
        Ok(Self::raw(scaled))
    }

    pub fn determinant(&self) -> Real {
        let Minors { s, c } = self.minors();
        s[0] * c[5] - s[1] * c[4] + s[2] * c[3] + s[3] * c[2] - s[4] * c[1] + s[5] * c[0]
    }

    /// The inverse matrix, or [`MathError::SingularMatrix`] using the same
    /// relative test as [`Matrix3::inverse`].
    pub fn inverse(&self) -> MathResult<Self> {
        let Minors { s, c } = self.minors();
        let det = s[0] * c[5] - s[1] * c[4] + s[2] * c[3] + s[3] * c[2] - s[4] * c[1]
            + s[5] * c[0];
        if !det.is_finite() {
            return Err(MathError::InvalidArgument {
                name: "determinant",
                value: det,
                reason: "overflows the scalar range",
            });
        }
        let bound: Real = (0..4)
            .filter_map(|i| self.row(i))
            .map(|r| r.magnitude())
            .product();
        if bound == 0.0 || is_negligible(det, bound) {
            return Err(MathError::SingularMatrix { determinant: det });
        }

        let a = &self.m;
        let inv_det = 1.0 / det;
        let adjugate = [
            [
                a[1][1] * c[5] - a[1][2] * c[4] + a[1][3] * c[3],
                -a[0][1] * c[5] + a[0][2] * c[4] - a[0][3] * c[3],
                a[3][1] * s[5] - a[3][2] * s[4] + a[3][3] * s[3],
                -a[2][1] * s[5] + a[2][2] * s[4] - a[2][3] * s[3],
            ],
            [
                -a[1][0] * c[5] + a[1][2] * c[2] - a[1][3] * c[1],
                a[0][0] * c[5] - a[0][2] * c[2] + a[0][3] * c[1],
                -a[3][0] * s[5] + a[3][2] * s[2] - a[3][3] * s[1],
                a[2][0] * s[5] - a[2][2] * s[2] + a[2][3] * s[1],
            ],
            [
                a[1][0] * c[4] - a[1][1] * c[2] + a[1][3] * c[0],
                -a[0][0] * c[4] + a[0][1] * c[2] - a[0][3] * c[0],
                a[3][0] * s[4] - a[3][1] * s[2] + a[3][3] * s[0],
                -a[2][0] * s[4] + a[2][1] * s[2] - a[2][3] * s[0],
            ],
            [
                -a[1][0] * c[3] + a[1][1] * c[1] - a[1][2] * c[0],
                a[0][0] * c[3] - a[0][1] * c[1] + a[0][2] * c[0],
                -a[3][0] * s[3] + a[3][1] * s[1] - a[3][2] * s[0],
                a[2][0] * s[3] - a[2][1] * s[1] + a[2][2] * s[0],
            ],
        ];
        let inverse = adjugate.map(|row| row.map(|e| e * inv_det));
        if !inverse.as_flattened().iter().all(|e| e.is_finite()) {
            return Err(MathError::SingularMatrix { determinant: det });
        }
        Ok(Self::raw(inverse))
    }

    // 2×2 minors of the top two rows (s) and bottom two rows (c).
    fn minors(&self) -> Minors {
        let a = &self.m;
        Minors {
            s: [
                a[0][0] * a[1][1] - a[1][0] * a[0][1],
                a[0][0] * a[1][2] - a[1][0] * a[0][2],
                a[0][0] * a[1][3] - a[1][0] * a[0][3],
                a[0][1] * a[1][2] - a[1][1] * a[0][2],
                a[0][1] * a[1][3] - a[1][1] * a[0][3],
                a[0][2] * a[1][3] - a[1][2] * a[0][3],
            ],
            c: [
                a[2][0] * a[3][1] - a[3][0] * a[2][1],
                a[2][0] * a[3][2] - a[3][0] * a[2][2],
                a[2][0] * a[3][3] - a[3][0] * a[2][3],
                a[2][1] * a[3][2] - a[3][1] * a[2][2],
                a[2][1] * a[3][3] - a[3][1] * a[2][3],
                a[2][2] * a[3][3] - a[3][2] * a[2][3],
            ],
        }
    }

    pub fn approx_eq(&self, other: &Self) -> bool {
        let eps = tolerance();
        self.m
            .as_flattened()
            .iter()
            .zip(other.m.as_flattened())
            .all(|(a, b)| (a - b).abs() <= eps)
    }
}

struct Minors {
    s: [Real; 6],
    c: [Real; 6],
}

impl Default for Matrix4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Addable<Matrix4> for Matrix4 {
    fn add(self, other: Matrix4) -> Matrix4 {
        let mut out = self.m;
        for (row, other_row) in out.iter_mut().zip(other.m) {
            for (cell, e) in row.iter_mut().zip(other_row) {
                *cell += e;
            }
        }
        Matrix4::raw(out)
    }
}

impl Transposable<Matrix4> for Matrix4 {
    fn transpose(self) -> Matrix4 {
        let mut out = self.m;
        for (i, row) in out.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = self.m[j][i];
            }
        }
        Matrix4::raw(out)
    }
}

impl Add for Matrix4 {
    type Output = Matrix4;
    fn add(self, rhs: Matrix4) -> Matrix4 {
        Addable::add(self, rhs)
    }
}

impl Mul for Matrix4 {
    type Output = Matrix4;
    fn mul(self, rhs: Matrix4) -> Matrix4 {
        self.multiply(&rhs)
    }
}

impl Mul<Vector4> for Matrix4 {
    type Output = Vector4;
    fn mul(self, rhs: Vector4) -> Vector4 {
        self.mul_vector(&rhs)
    }
}

impl From<Matrix3> for Matrix4 {
    fn from(r: Matrix3) -> Self {
        Self::rotation(r)
    }
}

impl TryFrom<[[Real; 4]; 4]> for Matrix4 {
    type Error = MathError;
    fn try_from(rows: [[Real; 4]; 4]) -> MathResult<Self> {
        Self::from_rows(rows)
    }
}

impl From<Matrix4> for [[Real; 4]; 4] {
    fn from(m: Matrix4) -> Self {
        m.to_rows()
    }
}

impl Display for Matrix4 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.m.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "[{}, {}, {}, {}]", row[0], row[1], row[2], row[3])?;
        }
        Ok(())
    }
}

impl approx::AbsDiffEq for Matrix4 {
    type Epsilon = Real;

    fn default_epsilon() -> Real {
        tolerance()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Real) -> bool {
        self.m
            .as_flattened()
            .iter()
            .zip(other.m.as_flattened())
            .all(|(a, b)| approx::AbsDiffEq::abs_diff_eq(a, b, epsilon))
    }
}

impl approx::RelativeEq for Matrix4 {
    fn default_max_relative() -> Real {
        <Real as approx::RelativeEq>::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: Real, max_relative: Real) -> bool {
        self.m
            .as_flattened()
            .iter()
            .zip(other.m.as_flattened())
            .all(|(a, b)| approx::RelativeEq::relative_eq(a, b, epsilon, max_relative))
    }
}

impl approx::UlpsEq for Matrix4 {
    fn default_max_ulps() -> u32 {
        <Real as approx::UlpsEq>::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Real, max_ulps: u32) -> bool {
        self.m
            .as_flattened()
            .iter()
            .zip(other.m.as_flattened())
            .all(|(a, b)| approx::UlpsEq::ulps_eq(a, b, epsilon, max_ulps))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::Degree;
    use approx::assert_abs_diff_eq;

    fn v3(x: Real, y: Real, z: Real) -> Vector3 {
        Vector3::new(x, y, z).unwrap()
    }

    fn sample() -> Matrix4 {
        Matrix4::from_rows([
            [2.0, 0.0, 0.0, 1.0],
            [0.0, 1.0, 3.0, 0.0],
            [1.0, 0.0, 1.0, 2.0],
            [0.0, 2.0, 0.0, 1.0],
        ])
        .unwrap()
    }

    #[test]
    fn translation_moves_points_not_directions() {
        let t = Matrix4::translation(v3(1.0, 2.0, 3.0));
        assert_eq!(t.transform_point(&v3(1.0, 1.0, 1.0)).unwrap(), v3(2.0, 3.0, 4.0));
        assert_eq!(t.transform_direction(&v3(1.0, 1.0, 1.0)), v3(1.0, 1.0, 1.0));
        assert_eq!(t.to_translation(), v3(1.0, 2.0, 3.0));
        assert_eq!(t.to_matrix3(), Matrix3::IDENTITY);
    }

    #[test]
    fn affine_inverse_round_trips_a_point() {
        let m = Matrix4::scaling(2.0, 3.0, 4.0)
            .unwrap()
            .multiply(&Matrix4::translation(v3(1.0, 2.0, 3.0)));
        let inv = m.inverse().unwrap();
        let p = v3(5.0, 6.0, 7.0);
        let q = inv.transform_point(&m.transform_point(&p).unwrap()).unwrap();
        assert_abs_diff_eq!(q, p, epsilon = 1e-5);
    }

    #[test]
    fn general_inverse() {
        let a = sample();
        let inv = a.inverse().unwrap();
        assert_abs_diff_eq!(a * inv, Matrix4::IDENTITY, epsilon = 1e-5);
        assert_abs_diff_eq!(inv * a, Matrix4::IDENTITY, epsilon = 1e-5);
        assert_abs_diff_eq!(a.determinant() * inv.determinant(), 1.0, epsilon = 1e-4);
    }

    #[test]
    fn singular_inverse_fails() {
        let mut rows = sample().to_rows();
        rows[3] = rows[0];
        let singular = Matrix4::from_rows(rows).unwrap();
        assert_eq!(singular.determinant(), 0.0);
        assert!(matches!(
            singular.inverse(),
            Err(MathError::SingularMatrix { .. })
        ));
    }

    #[test]
    fn transpose_swaps_rows_and_columns() {
        let a = sample();
        let t = a.transpose();
        for i in 0..4 {
            assert_eq!(a.row(i), t.column(i));
        }
        assert_eq!(t.transpose(), a);
    }

    #[test]
    fn row_and_column_builders_agree() {
        let a = sample();
        let rows = [0, 1, 2, 3].map(|i| a.row(i).unwrap());
        let cols = [0, 1, 2, 3].map(|i| a.column(i).unwrap());
        assert_eq!(Matrix4::from_row_vectors(rows[0], rows[1], rows[2], rows[3]), a);
        assert_eq!(Matrix4::from_columns(cols[0], cols[1], cols[2], cols[3]), a);
    }

    #[test]
    fn look_at_from_origin_down_negative_z_is_identity() {
        let view = Matrix4::look_at(&Vector3::ZERO, &v3(0.0, 0.0, -10.0), &Vector3::UNIT_Y).unwrap();
        assert_abs_diff_eq!(view, Matrix4::IDENTITY, epsilon = 1e-6);
    }

    #[test]
    fn look_at_moves_target_onto_negative_z() {
        let eye = v3(3.0, 4.0, 5.0);
        let target = v3(-1.0, 0.5, 2.0);
        let view = Matrix4::look_at(&eye, &target, &Vector3::UNIT_Y).unwrap();
        let local = view.transform_point(&target).unwrap();
        assert_abs_diff_eq!(local.x(), 0.0, epsilon = 1e-5);
        assert_abs_diff_eq!(local.y(), 0.0, epsilon = 1e-5);
        assert_abs_diff_eq!(local.z(), -eye.distance_to(&target), epsilon = 1e-4);
        assert_abs_diff_eq!(view.transform_point(&eye).unwrap(), Vector3::ZERO, epsilon = 1e-5);
    }

    #[test]
    fn look_at_rejects_degenerate_input() {
        let eye = v3(1.0, 1.0, 1.0);
        assert!(matches!(
            Matrix4::look_at(&eye, &eye, &Vector3::UNIT_Y),
            Err(MathError::DegenerateVector { .. })
        ));
        assert!(matches!(
            Matrix4::look_at(&Vector3::ZERO, &v3(0.0, 5.0, 0.0), &Vector3::UNIT_Y),
            Err(MathError::NonOrthogonalizableInput { .. })
        ));
    }

    #[test]
    fn perspective_maps_near_and_far_planes() {
        let p = Matrix4::perspective(Degree::RIGHT_ANGLE, 1.0, 1.0, 10.0).unwrap();
        let near = p.transform_point(&v3(0.0, 0.0, -1.0)).unwrap();
        let far = p.transform_point(&v3(0.0, 0.0, -10.0)).unwrap();
        assert_abs_diff_eq!(near.z(), -1.0, epsilon = 1e-5);
        assert_abs_diff_eq!(far.z(), 1.0, epsilon = 1e-5);
        // 90° fov: the frustum edge at depth 1 sits at y = 1
        let edge = p.transform_point(&v3(0.0, 1.0, -1.0)).unwrap();
        assert_abs_diff_eq!(edge.y(), 1.0, epsilon = 1e-5);
    }

    #[test]
    fn perspective_validates_arguments() {
        let fov = Degree::new(60.0).unwrap();
        assert!(Matrix4::perspective(fov, 0.0, 1.0, 10.0).is_err());
        assert!(Matrix4::perspective(fov, 1.0, 0.0, 10.0).is_err());
        assert!(Matrix4::perspective(fov, 1.0, 5.0, 5.0).is_err());
        assert!(Matrix4::perspective(fov, Real::NAN, 1.0, 10.0).is_err());
        assert!(Matrix4::perspective(Radian::HALF_TURN, 1.0, 1.0, 10.0).is_err());
        assert!(matches!(
            Matrix4::perspective(Degree::ZERO, 1.0, 1.0, 10.0),
            Err(MathError::InvalidArgument { name: "fov_y", .. })
        ));
    }

    #[test]
    fn orthographic_maps_box_to_unit_cube() {
        let o = Matrix4::orthographic(-2.0, 2.0, -1.0, 1.0, 0.5, 10.5).unwrap();
        let corner = o.transform_point(&v3(2.0, 1.0, -10.5)).unwrap();
        assert_abs_diff_eq!(corner, v3(1.0, 1.0, 1.0), epsilon = 1e-5);
        assert!(Matrix4::orthographic(1.0, 1.0, -1.0, 1.0, 0.0, 1.0).is_err());
    }

    #[test]
    fn transform_point_rejects_w_zero() {
        let p = Matrix4::perspective(Degree::RIGHT_ANGLE, 1.0, 1.0, 10.0).unwrap();
        assert!(matches!(
            p.transform_point(&Vector3::ZERO),
            Err(MathError::DegenerateVector { name: "w" })
        ));
    }
}
