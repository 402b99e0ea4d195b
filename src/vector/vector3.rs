use crate::angle::Radian;
use crate::errors::{MathError, MathResult, ensure_finite, ensure_in_range};
use crate::float_types::{Real, tolerance};
use crate::traits::{Addable, ThreeDimensional, TwoDimensional};
use crate::vector::Vector2;
use std::fmt::Display;
use std::ops::{Add, Neg, Sub};

/// An immutable 3D vector with finite components.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "[Real; 3]", into = "[Real; 3]"))]
pub struct Vector3 {
    x: Real,
    y: Real,
    z: Real,
}

impl Vector3 {
    pub const ZERO: Self = Self::raw(0.0, 0.0, 0.0);
    pub const UNIT_X: Self = Self::raw(1.0, 0.0, 0.0);
    pub const UNIT_Y: Self = Self::raw(0.0, 1.0, 0.0);
    pub const UNIT_Z: Self = Self::raw(0.0, 0.0, 1.0);

    /// Create a vector, rejecting NaN or infinite components.
    pub fn new(x: Real, y: Real, z: Real) -> MathResult<Self> {
        Ok(Self::raw(
            ensure_finite("x", x)?,
            ensure_finite("y", y)?,
            ensure_finite("z", z)?,
        ))
    }

    /// Extend a 2D vector with a `z` component.
    pub fn from_vector2(v: Vector2, z: Real) -> MathResult<Self> {
        Ok(Self::raw(v.x(), v.y(), ensure_finite("z", z)?))
    }

    /// Components already known to be finite.
    #[inline]
    pub(crate) const fn raw(x: Real, y: Real, z: Real) -> Self {
        debug_assert!(x.is_finite() && y.is_finite() && z.is_finite());
        Self { x, y, z }
    }

    // Computed components: an overflow is reported against `name`, never stored.
    fn checked(name: &'static str, x: Real, y: Real, z: Real) -> MathResult<Self> {
        ensure_in_range(name, &[x, y, z])?;
        Ok(Self::raw(x, y, z))
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

    /// Drop the `z` component.
    #[inline]
    pub const fn xy(&self) -> Vector2 {
        Vector2::raw(self.x, self.y)
    }

    #[inline]
    pub const fn to_array(self) -> [Real; 3] {
        [self.x, self.y, self.z]
    }

    /// `self - other`, defined as the sum with the negation of `other`.
    #[inline]
    pub fn subtract(self, other: Self) -> Self {
        Addable::add(self, other.negate())
    }

    #[inline]
    pub const fn negate(self) -> Self {
        Self::raw(-self.x, -self.y, -self.z)
    }

    /// Multiply every component by `factor`.
    pub fn scale(self, factor: Real) -> MathResult<Self> {
        let factor = ensure_finite("factor", factor)?;
        Self::checked("factor", self.x * factor, self.y * factor, self.z * factor)
    }

    #[inline]
    pub fn dot(&self, other: &Self) -> Real {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Right-handed cross product.
    ///
    /// The result is perpendicular to both inputs with magnitude
    /// `|a||b| sin θ`. It is the zero vector exactly when the inputs are
    /// parallel or either is zero, so callers that need a direction must
    /// check for that (e.g. via [`Vector3::normalize`]).
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        Self::raw(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    #[inline]
    pub fn magnitude_squared(&self) -> Real {
        self.dot(self)
    }

    /// Euclidean length, computed without intermediate overflow.
    pub fn magnitude(&self) -> Real {
        let largest = self.largest_component();
        if largest == 0.0 {
            return 0.0;
        }
        let (x, y, z) = (self.x / largest, self.y / largest, self.z / largest);
        largest * (x * x + y * y + z * z).sqrt()
    }

    /// A unit-length copy of this vector.
    ///
    /// Fails with [`MathError::DegenerateVector`] for the zero vector.
    pub fn normalize(self) -> MathResult<Self> {
        self.normalize_named("vector")
    }

    pub(crate) fn normalize_named(self, name: &'static str) -> MathResult<Self> {
        let largest = self.largest_component();
        if largest == 0.0 {
            return Err(MathError::DegenerateVector { name });
        }
        // Pre-scale so the squared length is in [1, 3] whatever the input size.
        let (x, y, z) = (self.x / largest, self.y / largest, self.z / largest);
        let length = (x * x + y * y + z * z).sqrt();
        Ok(Self::raw(x / length, y / length, z / length))
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }

    pub fn distance_to(&self, other: &Self) -> Real {
        self.subtract(*other).magnitude()
    }

    /// Unsigned angle between two non-zero vectors, in `[0, π]`.
    pub fn angle_to(&self, other: &Self) -> MathResult<Radian> {
        let a = self.normalize_named("self")?;
        let b = other.normalize_named("other")?;
        Radian::new(a.dot(&b).clamp(-1.0, 1.0).acos())
    }

    /// Rotate about `axis` (need not be unit length) by `angle`, right-handed.
    pub fn rotate(self, angle: impl Into<Radian>, axis: &Self) -> MathResult<Self> {
        let k = axis.normalize_named("axis")?;
        let (s, c) = angle.into().sin_cos();

        // Rodrigues: v cos θ + (k × v) sin θ + k (k · v)(1 - cos θ)
        let kxv = k.cross(&self);
        let kdv = k.dot(&self) * (1.0 - c);
        Self::checked(
            "vector",
            self.x * c + kxv.x * s + k.x * kdv,
            self.y * c + kxv.y * s + k.y * kdv,
            self.z * c + kxv.z * s + k.z * kdv,
        )
    }

    /// Linear interpolation: `t = 0` yields `self`, `t = 1` yields `other`.
    pub fn lerp(&self, other: &Self, t: Real) -> MathResult<Self> {
        let t = ensure_finite("t", t)?;
        Self::checked(
            "t",
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
            self.z + (other.z - self.z) * t,
        )
    }

    /// Component-wise comparison within [`tolerance`].
    pub fn approx_eq(&self, other: &Self) -> bool {
        let eps = tolerance();
        (self.x - other.x).abs() <= eps
            && (self.y - other.y).abs() <= eps
            && (self.z - other.z).abs() <= eps
    }

    #[inline]
    fn largest_component(&self) -> Real {
        self.x.abs().max(self.y.abs()).max(self.z.abs())
    }
}

impl Addable<Vector3> for Vector3 {
    #[inline]
    fn add(self, other: Vector3) -> Vector3 {
        Vector3::raw(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl TwoDimensional for Vector3 {
    fn x(&self) -> Real {
        self.x
    }
    fn y(&self) -> Real {
        self.y
    }
}

impl ThreeDimensional for Vector3 {
    fn z(&self) -> Real {
        self.z
    }
}

impl Add for Vector3 {
    type Output = Vector3;
    fn add(self, rhs: Vector3) -> Vector3 {
        Addable::add(self, rhs)
    }
}

impl Sub for Vector3 {
    type Output = Vector3;
    fn sub(self, rhs: Vector3) -> Vector3 {
        self.subtract(rhs)
    }
}

impl Neg for Vector3 {
    type Output = Vector3;
    fn neg(self) -> Vector3 {
        self.negate()
    }
}

impl TryFrom<[Real; 3]> for Vector3 {
    type Error = MathError;
    fn try_from([x, y, z]: [Real; 3]) -> MathResult<Self> {
        Self::new(x, y, z)
    }
}

impl From<Vector3> for [Real; 3] {
    fn from(v: Vector3) -> Self {
        v.to_array()
    }
}

impl Display for Vector3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl approx::AbsDiffEq for Vector3 {
    type Epsilon = Real;

    fn default_epsilon() -> Real {
        tolerance()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Real) -> bool {
        approx::AbsDiffEq::abs_diff_eq(&self.x, &other.x, epsilon)
            && approx::AbsDiffEq::abs_diff_eq(&self.y, &other.y, epsilon)
            && approx::AbsDiffEq::abs_diff_eq(&self.z, &other.z, epsilon)
    }
}

impl approx::RelativeEq for Vector3 {
    fn default_max_relative() -> Real {
        <Real as approx::RelativeEq>::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: Real, max_relative: Real) -> bool {
        approx::RelativeEq::relative_eq(&self.x, &other.x, epsilon, max_relative)
            && approx::RelativeEq::relative_eq(&self.y, &other.y, epsilon, max_relative)
            && approx::RelativeEq::relative_eq(&self.z, &other.z, epsilon, max_relative)
    }
}

impl approx::UlpsEq for Vector3 {
    fn default_max_ulps() -> u32 {
        <Real as approx::UlpsEq>::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Real, max_ulps: u32) -> bool {
        approx::UlpsEq::ulps_eq(&self.x, &other.x, epsilon, max_ulps)
            && approx::UlpsEq::ulps_eq(&self.y, &other.y, epsilon, max_ulps)
            && approx::UlpsEq::ulps_eq(&self.z, &other.z, epsilon, max_ulps)
    }
}
