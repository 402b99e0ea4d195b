use crate::errors::{MathError, MathResult, ensure_finite, ensure_in_range};
use crate::float_types::{Real, tolerance};
use crate::traits::{Addable, TwoDimensional};
use std::fmt::Display;
use std::ops::{Add, Neg, Sub};

/// An immutable 2D vector with finite components.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "[Real; 2]", into = "[Real; 2]"))]
pub struct Vector2 {
    x: Real,
    y: Real,
}

impl Vector2 {
    pub const ZERO: Self = Self::raw(0.0, 0.0);
    pub const UNIT_X: Self = Self::raw(1.0, 0.0);
    pub const UNIT_Y: Self = Self::raw(0.0, 1.0);

    pub fn new(x: Real, y: Real) -> MathResult<Self> {
        Ok(Self::raw(ensure_finite("x", x)?, ensure_finite("y", y)?))
    }

    #[inline]
    pub(crate) const fn raw(x: Real, y: Real) -> Self {
        debug_assert!(x.is_finite() && y.is_finite());
        Self { x, y }
    }

    fn checked(name: &'static str, x: Real, y: Real) -> MathResult<Self> {
        ensure_in_range(name, &[x, y])?;
        Ok(Self::raw(x, y))
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
    pub const fn to_array(self) -> [Real; 2] {
        [self.x, self.y]
    }

    #[inline]
    pub fn subtract(self, other: Self) -> Self {
        Addable::add(self, other.negate())
    }

    #[inline]
    pub fn negate(self) -> Self {
        Self::raw(-self.x, -self.y)
    }

    pub fn scale(self, factor: Real) -> MathResult<Self> {
        let factor = ensure_finite("factor", factor)?;
        Self::checked("factor", self.x * factor, self.y * factor)
    }

    #[inline]
    pub fn dot(&self, other: &Self) -> Real {
        self.x * other.x + self.y * other.y
    }

    #[inline]
    pub fn magnitude_squared(&self) -> Real {
        self.dot(self)
    }

    pub fn magnitude(&self) -> Real {
        self.x.hypot(self.y)
    }

    /// A unit-length copy of this vector, or
    /// [`MathError::DegenerateVector`] for the zero vector.
    pub fn normalize(self) -> MathResult<Self> {
        let largest = self.x.abs().max(self.y.abs());
        if largest == 0.0 {
            return Err(MathError::DegenerateVector { name: "vector" });
        }
        let (x, y) = (self.x / largest, self.y / largest);
        let length = (x * x + y * y).sqrt();
        Ok(Self::raw(x / length, y / length))
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    pub fn lerp(&self, other: &Self, t: Real) -> MathResult<Self> {
        let t = ensure_finite("t", t)?;
        Self::checked(
            "t",
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }

    pub fn approx_eq(&self, other: &Self) -> bool {
        let eps = tolerance();
        (self.x - other.x).abs() <= eps && (self.y - other.y).abs() <= eps
    }
}

impl Addable<Vector2> for Vector2 {
    #[inline]
    fn add(self, other: Vector2) -> Vector2 {
        Vector2::raw(self.x + other.x, self.y + other.y)
    }
}

impl TwoDimensional for Vector2 {
    fn x(&self) -> Real {
        self.x
    }
    fn y(&self) -> Real {
        self.y
    }
}

impl Add for Vector2 {
    type Output = Vector2;
    fn add(self, rhs: Vector2) -> Vector2 {
        Addable::add(self, rhs)
    }
}

impl Sub for Vector2 {
    type Output = Vector2;
    fn sub(self, rhs: Vector2) -> Vector2 {
        self.subtract(rhs)
    }
}

impl Neg for Vector2 {
    type Output = Vector2;
    fn neg(self) -> Vector2 {
        self.negate()
    }
}

impl TryFrom<[Real; 2]> for Vector2 {
    type Error = MathError;
    fn try_from([x, y]: [Real; 2]) -> MathResult<Self> {
        Self::new(x, y)
    }
}

impl From<Vector2> for [Real; 2] {
    fn from(v: Vector2) -> Self {
        v.to_array()
    }
}

impl Display for Vector2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl approx::AbsDiffEq for Vector2 {
    type Epsilon = Real;

    fn default_epsilon() -> Real {
        tolerance()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Real) -> bool {
        approx::AbsDiffEq::abs_diff_eq(&self.x, &other.x, epsilon)
            && approx::AbsDiffEq::abs_diff_eq(&self.y, &other.y, epsilon)
    }
}

impl approx::RelativeEq for Vector2 {
    fn default_max_relative() -> Real {
        <Real as approx::RelativeEq>::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: Real, max_relative: Real) -> bool {
        approx::RelativeEq::relative_eq(&self.x, &other.x, epsilon, max_relative)
            && approx::RelativeEq::relative_eq(&self.y, &other.y, epsilon, max_relative)
    }
}

impl approx::UlpsEq for Vector2 {
    fn default_max_ulps() -> u32 {
        <Real as approx::UlpsEq>::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Real, max_ulps: u32) -> bool {
        approx::UlpsEq::ulps_eq(&self.x, &other.x, epsilon, max_ulps)
            && approx::UlpsEq::ulps_eq(&self.y, &other.y, epsilon, max_ulps)
    }
}
