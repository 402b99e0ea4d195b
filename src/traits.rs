//! Capability contracts shared by the vector and matrix types.
//!
//! Each trait describes one thing a type can do, independent of how it is
//! stored. Concrete types opt in by implementing them; generic code asks for
//! exactly the capabilities it needs:
//!
//! ```
//! use engine_math::{Vector3, traits::{Addable, ThreeDimensional}};
//!
//! fn sum_z<T: Addable<T> + ThreeDimensional + Copy>(a: T, b: T) -> f64 {
//!     a.add(b).z() as f64
//! }
//!
//! let a = Vector3::new(0.0, 0.0, 1.0).unwrap();
//! let b = Vector3::new(0.0, 0.0, 2.0).unwrap();
//! assert_eq!(sum_z(a, b), 3.0);
//! ```

use crate::float_types::Real;

/// A type that supports addition.
///
/// `add` returns a new value holding the component-wise sum and leaves both
/// operands untouched. For every implementor in this crate addition is
/// commutative and associative.
pub trait Addable<T> {
    fn add(self, other: T) -> T;
}

/// A type whose rows and columns can be swapped.
///
/// `transpose` is an involution: `m.transpose().transpose() == m` exactly,
/// since it only permutes components.
pub trait Transposable<T> {
    fn transpose(self) -> T;
}

/// A type made up of (at least) two scalar components.
pub trait TwoDimensional {
    fn x(&self) -> Real;
    fn y(&self) -> Real;
}

/// A type made up of (at least) three scalar components.
pub trait ThreeDimensional: TwoDimensional {
    fn z(&self) -> Real;
}

/// A type made up of four scalar components.
pub trait FourDimensional: ThreeDimensional {
    fn w(&self) -> Real;
}

/// Sum any number of addable values, starting from `first`.
///
/// Returns `first` unchanged when `rest` is empty.
pub fn sum<T, I>(first: T, rest: I) -> T
where
    T: Addable<T>,
    I: IntoIterator<Item = T>,
{
    rest.into_iter().fold(first, |acc, next| acc.add(next))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::{Vector2, Vector3};

    fn planar_length<T: TwoDimensional>(v: &T) -> Real {
        (v.x() * v.x() + v.y() * v.y()).sqrt()
    }

    #[test]
    fn two_dimensional_view_of_a_vector3() {
        let v = Vector3::new(3.0, 4.0, 12.0).unwrap();
        assert_eq!(planar_length(&v), 5.0);
        assert_eq!(planar_length(&Vector2::new(3.0, 4.0).unwrap()), 5.0);
    }

    #[test]
    fn sum_folds_in_order() {
        let total = sum(
            Vector2::UNIT_X,
            [Vector2::UNIT_Y, Vector2::UNIT_X, Vector2::UNIT_Y],
        );
        assert_eq!(total, Vector2::new(2.0, 2.0).unwrap());
        assert_eq!(sum(Vector2::UNIT_X, []), Vector2::UNIT_X);
    }
}
