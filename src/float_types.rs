//! Scalar type and the crate-wide comparison tolerance.
//!
//! One tolerance drives every approximate decision in the crate: `approx_eq`,
//! the `approx` default epsilon, the singular-matrix test and the parallel
//! check in [`Orientation::new`](crate::Orientation::new). It is fixed the
//! first time it is read, from (in order) a runtime [`set_tolerance`] call,
//! the build-time `ENGINE_MATH_TOLERANCE` variable, or the per-precision
//! default.

use std::sync::OnceLock;

#[cfg(not(feature = "f64"))]
pub type Real = f32;
#[cfg(feature = "f64")]
pub type Real = f64;

#[cfg(not(feature = "f64"))]
pub const DEFAULT_TOLERANCE: Real = 1e-4;
#[cfg(feature = "f64")]
pub const DEFAULT_TOLERANCE: Real = 1e-8;

/// Where the active tolerance came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToleranceSource {
    Default,
    Environment,
    Runtime,
}

static TOLERANCE: OnceLock<(Real, ToleranceSource)> = OnceLock::new();

fn configured() -> (Real, ToleranceSource) {
    *TOLERANCE.get_or_init(|| {
        match option_env!("ENGINE_MATH_TOLERANCE").and_then(parse_tolerance) {
            Some(value) => {
                tracing::debug!(tolerance = value, "tolerance taken from ENGINE_MATH_TOLERANCE");
                (value, ToleranceSource::Environment)
            }
            None => (DEFAULT_TOLERANCE, ToleranceSource::Default),
        }
    })
}

/// Parse a tolerance setting. Negative, NaN and infinite values are refused;
/// anything below `Real::EPSILON` is raised to it.
pub fn parse_tolerance(text: &str) -> Option<Real> {
    let value: Real = text.trim().parse().ok()?;
    (value.is_finite() && value >= 0.0).then(|| value.max(Real::EPSILON))
}

/// The active tolerance.
#[inline]
pub fn tolerance() -> Real {
    configured().0
}

pub fn tolerance_source() -> ToleranceSource {
    configured().1
}

/// Fix the tolerance before first use. Later calls, and calls after the
/// tolerance has been read, are ignored.
///
/// Returns `true` if this call configured the value.
pub fn set_tolerance(value: Real) -> bool {
    if !value.is_finite() || value < 0.0 {
        return false;
    }
    let value = value.max(Real::EPSILON);
    let accepted = TOLERANCE.set((value, ToleranceSource::Runtime)).is_ok();
    if accepted {
        tracing::debug!(tolerance = value, "tolerance configured at runtime");
    }
    accepted
}

/// `|value| ≤ tolerance × scale`: negligible next to a quantity of size `scale`.
#[inline]
pub fn is_negligible(value: Real, scale: Real) -> bool {
    value.abs() <= tolerance() * scale
}

/// Returns true if `a` and `b` differ by no more than [`tolerance`].
#[inline]
pub fn approx_eq(a: Real, b: Real) -> bool {
    is_negligible(a - b, 1.0)
}

#[cfg(not(feature = "f64"))]
pub use core::f32::consts::{FRAC_PI_2, PI, TAU};
#[cfg(feature = "f64")]
pub use core::f64::consts::{FRAC_PI_2, PI, TAU};
