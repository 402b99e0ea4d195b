//! Angle value types.
//!
//! Rotation factories take a [`Radian`]; anything convertible into one
//! (such as a [`Degree`]) is accepted through `impl Into<Radian>`.

use crate::errors::{MathError, MathResult, ensure_finite};
use crate::float_types::{PI, Real};
use std::fmt::Display;
use std::ops::Neg;

/// An angle measured in radians. Always finite.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Real", into = "Real"))]
pub struct Radian(Real);

/// An angle measured in degrees. Always finite.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Real", into = "Real"))]
pub struct Degree(Real);

impl Radian {
    pub const ZERO: Self = Self(0.0);
    pub const HALF_TURN: Self = Self(PI);

    pub fn new(value: Real) -> MathResult<Self> {
        Ok(Self(ensure_finite("radians", value)?))
    }

    #[inline]
    pub const fn value(self) -> Real {
        self.0
    }

    #[inline]
    pub fn sin_cos(self) -> (Real, Real) {
        self.0.sin_cos()
    }

    /// Fails with [`MathError::InvalidArgument`] when the angle is too large
    /// to express in degrees; the other direction only shrinks the value.
    pub fn to_degrees(self) -> MathResult<Degree> {
        Degree::new(self.0.to_degrees())
    }
}

impl Degree {
    pub const ZERO: Self = Self(0.0);
    pub const RIGHT_ANGLE: Self = Self(90.0);

    pub fn new(value: Real) -> MathResult<Self> {
        Ok(Self(ensure_finite("degrees", value)?))
    }

    #[inline]
    pub const fn value(self) -> Real {
        self.0
    }

    pub fn to_radians(self) -> Radian {
        Radian(self.0.to_radians())
    }
}

impl From<Degree> for Radian {
    fn from(degrees: Degree) -> Self {
        degrees.to_radians()
    }
}

impl TryFrom<Radian> for Degree {
    type Error = MathError;
    fn try_from(radians: Radian) -> MathResult<Self> {
        radians.to_degrees()
    }
}

impl Neg for Radian {
    type Output = Radian;
    fn neg(self) -> Radian {
        Radian(-self.0)
    }
}

impl Neg for Degree {
    type Output = Degree;
    fn neg(self) -> Degree {
        Degree(-self.0)
    }
}

impl TryFrom<Real> for Radian {
    type Error = MathError;
    fn try_from(value: Real) -> MathResult<Self> {
        Self::new(value)
    }
}

impl TryFrom<Real> for Degree {
    type Error = MathError;
    fn try_from(value: Real) -> MathResult<Self> {
        Self::new(value)
    }
}

impl From<Radian> for Real {
    fn from(angle: Radian) -> Real {
        angle.0
    }
}

impl From<Degree> for Real {
    fn from(angle: Degree) -> Real {
        angle.0
    }
}

impl Display for Radian {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} rad", self.0)
    }
}

impl Display for Degree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}°", self.0)
    }
}
