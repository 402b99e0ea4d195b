use crate::errors::{MathError, MathResult, ensure_finite, ensure_in_range};
use crate::float_types::{Real, tolerance};
use crate::traits::{Addable, FourDimensional, ThreeDimensional, TwoDimensional};
use crate::vector::Vector3;
use std::fmt::Display;
use std::ops::{Add, Neg, Sub};

/// An immutable 4D vector, mostly used as a homogeneous coordinate for
/// [`Matrix4`](crate::Matrix4) transforms.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "[Real; 4]", into = "[Real; 4]"))]
pub struct Vector4 {
    x: Real,
    y: Real,
    z: Real,
    w: Real,
}

impl Vector4 {
    pub const ZERO: Self = Self::raw(0.0, 0.0, 0.0, 0.0);
    pub const UNIT_X: Self = Self::raw(1.0, 0.0, 0.0, 0.0);
    pub const UNIT_Y: Self = Self::raw(0.0, 1.0, 0.0, 0.0);
    pub const UNIT_Z: Self = Self::raw(0.0, 0.0, 1.0, 0.0);
    pub const UNIT_W: Self = Self::raw(0.0, 0.0, 0.0, 1.0);

    pub fn new(x: Real, y: Real, z: Real, w: Real) -> MathResult<Self> {
        Ok(Self::raw(
            ensure_finite("x", x)?,
            ensure_finite("y", y)?,
            ensure_finite("z", z)?,
            ensure_finite("w", w)?,
        ))
    }

    /// `w = 1` for points, `w = 0` for directions.
    pub fn from_vector3(v: Vector3, w: Real) -> MathResult<Self> {
        Ok(Self::raw(v.x(), v.y(), v.z(), ensure_finite("w", w)?))
    }

    #[inline]
    pub(crate) const fn raw(x: Real, y: Real, z: Real, w: Real) -> Self {
        debug_assert!(x.is_finite() && y.is_finite() && z.is_finite() && w.is_finite());
        Self { x, y, z, w }
    }

    fn checked(name: &'static str, x: Real, y: Real, z: Real, w: Real) -> MathResult<Self> {
        ensure_in_range(name, &[x, y, z, w])?;
        Ok(Self::raw(x, y, z, w))
    }

    #[inline]
    pub const fn x(&self) -> Real {
        self.x
    }

    #[inline]
    pub const fn y(&self) -> Real {
        self.y
    }

    #[inline]
    pub const fn z(&self) -> Real {
        self.z
    }

    #[inline]
    pub const fn w(&self) -> Real {
        self.w
    }

    /// Drop `w` without a perspective divide.
    #[inline]
    pub const fn to_vector3(self) -> Vector3 {
        Vector3::raw(self.x, self.y, self.z)
    }

    #[inline]
    pub const fn to_array(self) -> [Real; 4] {
        [self.x, self.y, self.z, self.w]
    }

    #[inline]
    pub fn subtract(self, other: Self) -> Self {
        Addable::add(self, other.negate())
    }

    #[inline]
    pub fn negate(self) -> Self {
        Self::raw(-self.x, -self.y, -self.z, -self.w)
    }

    pub fn scale(self, factor: Real) -> MathResult<Self> {
        let factor = ensure_finite("factor", factor)?;
        Self::checked(
            "factor",
            self.x * factor,
            self.y * factor,
            self.z * factor,
            self.w * factor,
        )
    }

    #[inline]
    pub fn dot(&self, other: &Self) -> Real {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    #[inline]
    pub fn magnitude_squared(&self) -> Real {
        self.dot(self)
    }

    pub fn magnitude(&self) -> Real {
        let largest = self.largest_component();
        if largest == 0.0 {
            return 0.0;
        }
        largest * self.scaled_by_inverse(largest).magnitude_squared().sqrt()
    }

    pub fn normalize(self) -> MathResult<Self> {
        let largest = self.largest_component();
        if largest == 0.0 {
            return Err(MathError::DegenerateVector { name: "vector" });
        }
        let scaled = self.scaled_by_inverse(largest);
        Ok(scaled.scaled_by_inverse(scaled.magnitude_squared().sqrt()))
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0 && self.w == 0.0
    }

    pub fn lerp(&self, other: &Self, t: Real) -> MathResult<Self> {
        let t = ensure_finite("t", t)?;
        Self::checked(
            "t",
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
            self.z + (other.z - self.z) * t,
            self.w + (other.w - self.w) * t,
        )
    }

    pub fn approx_eq(&self, other: &Self) -> bool {
        let eps = tolerance();
        self.to_array()
            .iter()
            .zip(other.to_array())
            .all(|(a, b)| (a - b).abs() <= eps)
    }

    #[inline]
    fn largest_component(&self) -> Real {
        self.x
            .abs()
            .max(self.y.abs())
            .max(self.z.abs())
            .max(self.w.abs())
    }

    // divisor is always >= the largest component, so the result stays finite
    #[inline]
    fn scaled_by_inverse(self, divisor: Real) -> Self {
        Self::raw(
            self.x / divisor,
            self.y / divisor,
            self.z / divisor,
            self.w / divisor,
        )
    }
}

impl Addable<Vector4> for Vector4 {
    #[inline]
    fn add(self, other: Vector4) -> Vector4 {
        Vector4::raw(
            self.x + other.x,
            self.y + other.y,
            self.z + other.z,
            self.w + other.w,
        )
    }
}

impl TwoDimensional for Vector4 {
    fn x(&self) -> Real {
        self.x
    }
    fn y(&self) -> Real {
        self.y
    }
}

impl ThreeDimensional for Vector4 {
    fn z(&self) -> Real {
        self.z
    }
}

impl FourDimensional for Vector4 {
    fn w(&self) -> Real {
        self.w
    }
}

impl Add for Vector4 {
    type Output = Vector4;
    fn add(self, rhs: Vector4) -> Vector4 {
        Addable::add(self, rhs)
    }
}

impl Sub for Vector4 {
    type Output = Vector4;
    fn sub(self, rhs: Vector4) -> Vector4 {
        self.subtract(rhs)
    }
}

impl Neg for Vector4 {
    type Output = Vector4;
    fn neg(self) -> Vector4 {
        self.negate()
    }
}

impl TryFrom<[Real; 4]> for Vector4 {
    type Error = MathError;
    fn try_from([x, y, z, w]: [Real; 4]) -> MathResult<Self> {
        Self::new(x, y, z, w)
    }
}

impl From<Vector4> for [Real; 4] {
    fn from(v: Vector4) -> Self {
        v.to_array()
    }
}

impl Display for Vector4 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x, self.y, self.z, self.w)
    }
}

impl approx::AbsDiffEq for Vector4 {
    type Epsilon = Real;

    fn default_epsilon() -> Real {
        tolerance()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Real) -> bool {
        self.to_array()
            .iter()
            .zip(other.to_array().iter())
            .all(|(a, b)| approx::AbsDiffEq::abs_diff_eq(a, b, epsilon))
    }
}

impl approx::RelativeEq for Vector4 {
    fn default_max_relative() -> Real {
        <Real as approx::RelativeEq>::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: Real, max_relative: Real) -> bool {
        self.to_array()
            .iter()
            .zip(other.to_array().iter())
            .all(|(a, b)| approx::RelativeEq::relative_eq(a, b, epsilon, max_relative))
    }
}

impl approx::UlpsEq for Vector4 {
    fn default_max_ulps() -> u32 {
        <Real as approx::UlpsEq>::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Real, max_ulps: u32) -> bool {
        self.to_array()
            .iter()
            .zip(other.to_array().iter())
            .all(|(a, b)| approx::UlpsEq::ulps_eq(a, b, epsilon, max_ulps))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn homogeneous_round_trip_through_vector3() {
        let p = Vector3::new(1.0, 2.0, 3.0).unwrap();
        let h = Vector4::from_vector3(p, 1.0).unwrap();
        assert_eq!(h.w(), 1.0);
        assert_eq!(h.to_vector3(), p);
    }

    #[test]
    fn normalize() {
        let v = Vector4::new(1.0, 1.0, 1.0, 1.0).unwrap().normalize().unwrap();
        assert_relative_eq!(v.magnitude(), 1.0);
        assert_relative_eq!(v.x(), 0.5);
        assert!(Vector4::ZERO.normalize().is_err());
    }

    #[test]
    fn arithmetic() {
        let a = Vector4::new(1.0, 2.0, 3.0, 4.0).unwrap();
        assert_eq!(a + Vector4::UNIT_W, Vector4::new(1.0, 2.0, 3.0, 5.0).unwrap());
        assert_eq!(a.dot(&a), 30.0);
        assert!(a.lerp(&a, Real::NAN).is_err());
        assert_eq!(a.to_string(), "(1, 2, 3, 4)");
    }
}
