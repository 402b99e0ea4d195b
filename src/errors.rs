//! Math errors

use crate::float_types::Real;
use crate::vector::Vector3;

/// All the possible failures a math operation can report.
///
/// Every variant is raised at the offending call and never retried: the
/// operations are deterministic, so the same input always fails the same way.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum MathError {
    /// (InvalidArgument) A scalar was NaN, infinite, or outside the operation's domain
    #[error("(InvalidArgument) {name} = {value}: {reason}")]
    InvalidArgument {
        name: &'static str,
        value: Real,
        reason: &'static str,
    },
    /// (DegenerateVector) A direction was required but the vector has zero magnitude
    #[error("(DegenerateVector) {name} has zero magnitude")]
    DegenerateVector { name: &'static str },
    /// (NonOrthogonalizableInput) Orientation inputs are parallel, so no basis exists
    #[error("(NonOrthogonalizableInput) forward {forward} and up {up} are parallel")]
    NonOrthogonalizableInput { forward: Vector3, up: Vector3 },
    /// (SingularMatrix) The matrix has no inverse
    #[error("(SingularMatrix) determinant {determinant} is within tolerance of zero")]
    SingularMatrix { determinant: Real },
}

pub type MathResult<T> = Result<T, MathError>;

/// Reject NaN and infinite scalars.
#[inline]
pub(crate) fn ensure_finite(name: &'static str, value: Real) -> MathResult<Real> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(MathError::InvalidArgument {
            name,
            value,
            reason: "must be finite",
        })
    }
}

/// Reject a grid of scalars if any entry is NaN or infinite.
pub(crate) fn ensure_all_finite(name: &'static str, values: &[Real]) -> MathResult<()> {
    for &value in values {
        ensure_finite(name, value)?;
    }
    Ok(())
}

/// Reject a computed result whose components overflowed the scalar range.
///
/// `name` is the argument that drove the result out of range.
pub(crate) fn ensure_in_range(name: &'static str, values: &[Real]) -> MathResult<()> {
    match values.iter().find(|v| !v.is_finite()) {
        Some(&value) => Err(MathError::InvalidArgument {
            name,
            value,
            reason: "result overflows the scalar range",
        }),
        None => Ok(()),
    }
}

/// `const` check used by the internal matrix constructors.
pub(crate) const fn rows_finite<const N: usize>(m: &[[Real; N]; N]) -> bool {
    let mut i = 0;
    while i < N {
        let mut j = 0;
        while j < N {
            if !m[i][j].is_finite() {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finite_values_pass() {
        assert_eq!(ensure_finite("x", 2.5), Ok(2.5));
        assert!(ensure_all_finite("m", &[0.0, -1.0, Real::MAX]).is_ok());
    }

    #[test]
    fn nan_and_infinity_are_rejected() {
        assert!(matches!(
            ensure_finite("x", Real::NAN),
            Err(MathError::InvalidArgument { name: "x", .. })
        ));
        assert!(ensure_all_finite("m", &[1.0, Real::NEG_INFINITY]).is_err());
    }

    #[test]
    fn overflowed_results_are_reported() {
        assert!(ensure_in_range("factor", &[1.0, 2.0]).is_ok());
        let err = ensure_in_range("factor", &[1.0, Real::INFINITY]).unwrap_err();
        assert!(matches!(
            err,
            MathError::InvalidArgument { name: "factor", reason: "result overflows the scalar range", .. }
        ));
        assert!(rows_finite(&[[1.0, 0.0], [0.0, 1.0]]));
        assert!(!rows_finite(&[[1.0, 0.0], [Real::NAN, 1.0]]));
    }

    #[test]
    fn messages_name_the_variant() {
        let err = MathError::DegenerateVector { name: "axis" };
        assert_eq!(err.to_string(), "(DegenerateVector) axis has zero magnitude");

        let err = MathError::SingularMatrix { determinant: 0.0 };
        assert!(err.to_string().starts_with("(SingularMatrix)"));
    }
}
