//! Test support library
//! Seeded generators and float helpers shared by the integration tests.
#![allow(dead_code)]

use engine_math::{Matrix3, Matrix4, Real, Vector3};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Fixed-seed generator so failures reproduce.
pub fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(42)
}

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

pub fn vec3(x: Real, y: Real, z: Real) -> Vector3 {
    Vector3::new(x, y, z).unwrap()
}

/// Components in `[-range, range)`.
pub fn random_vector(rng: &mut ChaCha8Rng, range: Real) -> Vector3 {
    vec3(
        rng.gen_range(-range..range),
        rng.gen_range(-range..range),
        rng.gen_range(-range..range),
    )
}

/// Small integers, so sums and products are exact in either float width.
pub fn random_integer_vector(rng: &mut ChaCha8Rng) -> Vector3 {
    vec3(
        rng.gen_range(-64i32..64) as Real,
        rng.gen_range(-64i32..64) as Real,
        rng.gen_range(-64i32..64) as Real,
    )
}

pub fn random_matrix3(rng: &mut ChaCha8Rng, range: Real) -> Matrix3 {
    let mut rows = [[0.0; 3]; 3];
    for value in rows.iter_mut().flatten() {
        *value = rng.gen_range(-range..range);
    }
    Matrix3::from_rows(rows).unwrap()
}

pub fn random_matrix4(rng: &mut ChaCha8Rng, range: Real) -> Matrix4 {
    let mut rows = [[0.0; 4]; 4];
    for value in rows.iter_mut().flatten() {
        *value = rng.gen_range(-range..range);
    }
    Matrix4::from_rows(rows).unwrap()
}
