use crate::angle::Radian;
use crate::errors::{
    MathError, MathResult, ensure_all_finite, ensure_finite, ensure_in_range, rows_finite,
};
use crate::float_types::{Real, is_negligible, tolerance};
use crate::traits::{Addable, Transposable};
use crate::vector::Vector3;
use std::fmt::Display;
use std::ops::{Add, Mul};

/// An immutable 3×3 matrix with finite entries.
///
/// Storage is row-major (`m[row][col]`) and vectors are columns, so
/// `a.multiply(b)` applied to `v` is `a * (b * v)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "[[Real; 3]; 3]", into = "[[Real; 3]; 3]")
)]
pub struct Matrix3 {
    m: [[Real; 3]; 3],
}

impl Matrix3 {
    pub const IDENTITY: Self = Self::raw([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
    pub const ZERO: Self = Self::raw([[0.0; 3]; 3]);

    /// Build from rows, rejecting NaN or infinite entries.
    pub fn from_rows(rows: [[Real; 3]; 3]) -> MathResult<Self> {
        ensure_all_finite("entry", rows.as_flattened())?;
        Ok(Self::raw(rows))
    }

    /// Build from basis vectors stored as columns.
    pub const fn from_columns(c0: Vector3, c1: Vector3, c2: Vector3) -> Self {
        Self::raw([
            [c0.x(), c1.x(), c2.x()],
            [c0.y(), c1.y(), c2.y()],
            [c0.z(), c1.z(), c2.z()],
        ])
    }

    pub const fn from_row_vectors(r0: Vector3, r1: Vector3, r2: Vector3) -> Self {
        Self::raw([r0.to_array(), r1.to_array(), r2.to_array()])
    }

    #[inline]
    pub(crate) const fn raw(m: [[Real; 3]; 3]) -> Self {
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

    /// Entry at (`row`, `col`), or `None` when out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<Real> {
        self.m.get(row)?.get(col).copied()
    }

    pub fn row(&self, index: usize) -> Option<Vector3> {
        let [x, y, z] = *self.m.get(index)?;
        Some(Vector3::raw(x, y, z))
    }

    pub fn column(&self, index: usize) -> Option<Vector3> {
        if index >= 3 {
            return None;
        }
        Some(Vector3::raw(
            self.m[0][index],
            self.m[1][index],
            self.m[2][index],
        ))
    }

    #[inline]
    pub const fn to_rows(self) -> [[Real; 3]; 3] {
        self.m
    }

    /// Row-by-column composition. Not commutative.
    pub fn multiply(&self, other: &Self) -> Self {
        Self::raw(self.product(other))
    }

    fn product(&self, other: &Self) -> [[Real; 3]; 3] {
        let mut out = [[0.0; 3]; 3];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = self.m[i][0] * other.m[0][j]
                    + self.m[i][1] * other.m[1][j]
                    + self.m[i][2] * other.m[2][j];
            }
        }
        out
    }

    pub fn mul_vector(&self, v: &Vector3) -> Vector3 {
        let m = &self.m;
        Vector3::raw(
            m[0][0] * v.x() + m[0][1] * v.y() + m[0][2] * v.z(),
            m[1][0] * v.x() + m[1][1] * v.y() + m[1][2] * v.z(),
            m[2][0] * v.x() + m[2][1] * v.y() + m[2][2] * v.z(),
        )
    }

    pub fn scale(&self, factor: Real) -> MathResult<Self> {
        let factor = ensure_finite("factor", factor)?;
        let scaled = self.m.map(|row| row.map(|e| e * factor));
        ensure_in_range("factor", scaled.as_flattened())?;
        Ok(Self::raw(scaled))
    }

    pub fn determinant(&self) -> Real {
        let m = &self.m;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// The inverse matrix.
    ///
    /// Fails with [`MathError::SingularMatrix`] when the determinant is
    /// negligible relative to the product of the row lengths (the largest
    /// value it can take), so uniformly scaled matrices are judged alike.
    pub fn inverse(&self) -> MathResult<Self> {
        let det = self.determinant();
        if !det.is_finite() {
            return Err(MathError::InvalidArgument {
                name: "determinant",
                value: det,
                reason: "overflows the scalar range",
            });
        }
        let bound: Real = (0..3)
            .filter_map(|i| self.row(i))
            .map(|r| r.magnitude())
            .product();
        if bound == 0.0 || is_negligible(det, bound) {
            return Err(MathError::SingularMatrix { determinant: det });
        }

        let m = &self.m;
        let inv_det = 1.0 / det;
        let adjugate = [
            [
                m[1][1] * m[2][2] - m[1][2] * m[2][1],
                m[0][2] * m[2][1] - m[0][1] * m[2][2],
                m[0][1] * m[1][2] - m[0][2] * m[1][1],
            ],
            [
                m[1][2] * m[2][0] - m[1][0] * m[2][2],
                m[0][0] * m[2][2] - m[0][2] * m[2][0],
                m[0][2] * m[1][0] - m[0][0] * m[1][2],
            ],
            [
                m[1][0] * m[2][1] - m[1][1] * m[2][0],
                m[0][1] * m[2][0] - m[0][0] * m[2][1],
                m[0][0] * m[1][1] - m[0][1] * m[1][0],
            ],
        ];
        let inverse = adjugate.map(|row| row.map(|e| e * inv_det));
        if !inverse.as_flattened().iter().all(|e| e.is_finite()) {
            return Err(MathError::SingularMatrix { determinant: det });
        }
        Ok(Self::raw(inverse))
    }

    /* -------- rotations & scaling -------- */

    pub fn rotation_x(angle: impl Into<Radian>) -> Self {
        let (s, c) = angle.into().sin_cos();
        Self::raw([[1.0, 0.0, 0.0], [0.0, c, -s], [0.0, s, c]])
    }

    pub fn rotation_y(angle: impl Into<Radian>) -> Self {
        let (s, c) = angle.into().sin_cos();
        Self::raw([[c, 0.0, s], [0.0, 1.0, 0.0], [-s, 0.0, c]])
    }

    pub fn rotation_z(angle: impl Into<Radian>) -> Self {
        let (s, c) = angle.into().sin_cos();
        Self::raw([[c, -s, 0.0], [s, c, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Right-handed rotation about `axis`; the axis need not be unit length.
    pub fn rotation_axis_angle(axis: &Vector3, angle: impl Into<Radian>) -> MathResult<Self> {
        let a = axis.normalize_named("axis")?;
        let (s, c) = angle.into().sin_cos();
        let omc = 1.0 - c;
        let (x, y, z) = (a.x(), a.y(), a.z());

        Ok(Self::raw([
            [c + x * x * omc, x * y * omc - z * s, x * z * omc + y * s],
            [y * x * omc + z * s, c + y * y * omc, y * z * omc - x * s],
            [z * x * omc - y * s, z * y * omc + x * s, c + z * z * omc],
        ]))
    }

    /// This matrix followed by a rotation about `axis` expressed in its own
    /// (local) frame: `self * rotation_axis_angle(axis, angle)`.
    pub fn rotate(self, angle: impl Into<Radian>, axis: &Vector3) -> MathResult<Self> {
        let product = self.product(&Self::rotation_axis_angle(axis, angle)?);
        ensure_in_range("matrix", product.as_flattened())?;
        Ok(Self::raw(product))
    }

    pub fn scaling(sx: Real, sy: Real, sz: Real) -> MathResult<Self> {
        Self::from_rows([[sx, 0.0, 0.0], [0.0, sy, 0.0], [0.0, 0.0, sz]])
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

impl Default for Matrix3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Addable<Matrix3> for Matrix3 {
    fn add(self, other: Matrix3) -> Matrix3 {
        let mut out = self.m;
        for (row, other_row) in out.iter_mut().zip(other.m) {
            for (cell, e) in row.iter_mut().zip(other_row) {
                *cell += e;
            }
        }
        Matrix3::raw(out)
    }
}

impl Transposable<Matrix3> for Matrix3 {
    fn transpose(self) -> Matrix3 {
        let m = &self.m;
        Matrix3::raw([
            [m[0][0], m[1][0], m[2][0]],
            [m[0][1], m[1][1], m[2][1]],
            [m[0][2], m[1][2], m[2][2]],
        ])
    }
}

impl Add for Matrix3 {
    type Output = Matrix3;
    fn add(self, rhs: Matrix3) -> Matrix3 {
        Addable::add(self, rhs)
    }
}

impl Mul for Matrix3 {
    type Output = Matrix3;
    fn mul(self, rhs: Matrix3) -> Matrix3 {
        self.multiply(&rhs)
    }
}

impl Mul<Vector3> for Matrix3 {
    type Output = Vector3;
    fn mul(self, rhs: Vector3) -> Vector3 {
        self.mul_vector(&rhs)
    }
}

impl TryFrom<[[Real; 3]; 3]> for Matrix3 {
    type Error = MathError;
    fn try_from(rows: [[Real; 3]; 3]) -> MathResult<Self> {
        Self::from_rows(rows)
    }
}

impl From<Matrix3> for [[Real; 3]; 3] {
    fn from(m: Matrix3) -> Self {
        m.to_rows()
    }
}

impl Display for Matrix3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.m.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "[{}, {}, {}]", row[0], row[1], row[2])?;
        }
        Ok(())
    }
}

impl approx::AbsDiffEq for Matrix3 {
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

impl approx::RelativeEq for Matrix3 {
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

impl approx::UlpsEq for Matrix3 {
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
