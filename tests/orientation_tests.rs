use engine_math::{MathError, Matrix3, Orientation, Real, Vector3};

mod support;

use crate::support::{approx_eq, random_vector, rng, vec3};

const EPS: Real = 1e-5;

fn assert_orthonormal(o: &Orientation) {
    for axis in [o.forward(), o.up(), o.right()] {
        assert!(approx_eq(axis.magnitude(), 1.0, EPS), "{axis} is not unit length");
    }
    assert!(approx_eq(o.forward().dot(&o.up()), 0.0, EPS));
    assert!(approx_eq(o.forward().dot(&o.right()), 0.0, EPS));
    assert!(approx_eq(o.up().dot(&o.right()), 0.0, EPS));
}

#[test]
fn canonical_screen_aligned_basis() {
    let o = Orientation::new(vec3(0.0, 0.0, -1.0), vec3(0.0, 1.0, 0.0)).unwrap();
    assert_eq!(o.forward(), vec3(0.0, 0.0, -1.0));
    assert_eq!(o.up(), vec3(0.0, 1.0, 0.0));
    assert_eq!(o.right(), vec3(1.0, 0.0, 0.0));
    assert_orthonormal(&o);
}

#[test]
fn parallel_inputs_differing_in_scale_are_rejected() {
    let forward = vec3(0.0, 0.0, -1.0);
    let up = vec3(0.0, 0.0, -5.0);
    assert_eq!(
        Orientation::new(forward, up),
        Err(MathError::NonOrthogonalizableInput { forward, up })
    );
}

#[test]
fn slightly_skewed_up_is_repaired() {
    let o = Orientation::new(vec3(0.0, 0.0, -1.0), vec3(0.05, 1.0, 0.0)).unwrap();
    assert_orthonormal(&o);
    assert_eq!(o.forward(), vec3(0.0, 0.0, -1.0));
    // the repaired up stays on the same side as the supplied one
    assert!(o.up().dot(&vec3(0.05, 1.0, 0.0)) > 0.99);
}

#[test]
fn up_skewed_toward_forward_is_repaired() {
    let o = Orientation::new(vec3(0.0, 0.0, -1.0), vec3(0.0, 1.0, -0.5)).unwrap();
    assert_orthonormal(&o);
    assert!(o.up().approx_eq(&Vector3::UNIT_Y));
    assert!(o.right().approx_eq(&Vector3::UNIT_X));
}

#[test]
fn random_frames_are_orthonormal() {
    let mut rng = rng();
    for _ in 0..128 {
        let forward = random_vector(&mut rng, 50.0);
        let up = random_vector(&mut rng, 50.0);
        match Orientation::new(forward, up) {
            Ok(o) => {
                assert_orthonormal(&o);
                assert!(o.forward().approx_eq(&forward.normalize().unwrap()));
                assert!(o.right().approx_eq(&o.forward().cross(&o.up())));
            }
            Err(MathError::NonOrthogonalizableInput { .. }) => {}
            Err(other) => panic!("unexpected error {other}"),
        }
    }
}

#[test]
fn matrix_round_trip_is_a_rotation() {
    let o = Orientation::new(vec3(-2.0, 0.5, 1.0), vec3(0.0, 1.0, 0.3)).unwrap();
    let m: Matrix3 = o.to_matrix3();
    assert!(approx_eq(m.determinant(), 1.0, EPS));
    assert!((m * Vector3::UNIT_X).approx_eq(&o.right()));
    assert!((m * Vector3::UNIT_Y).approx_eq(&o.up()));
    assert!(Orientation::from_matrix3(&m).unwrap().approx_eq(&o));
    assert!(Orientation::from_matrix3(&Matrix3::ZERO).is_err());
}

mod repair_events {
    use super::*;
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };
    use tracing_subscriber::{Layer, layer::SubscriberExt};

    struct CountTrace(Arc<AtomicUsize>);

    impl<S: tracing::Subscriber> Layer<S> for CountTrace {
        fn on_event(
            &self,
            event: &tracing::Event<'_>,
            _ctx: tracing_subscriber::layer::Context<'_, S>,
        ) {
            if *event.metadata().level() == tracing::Level::TRACE {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    fn count_repairs(forward: Vector3, up: Vector3) -> usize {
        let count = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(CountTrace(count.clone()));
        tracing::subscriber::with_default(subscriber, || {
            Orientation::new(forward, up).unwrap();
        });
        count.load(Ordering::SeqCst)
    }

    #[test]
    fn only_skew_toward_forward_emits_a_trace_event() {
        assert_eq!(count_repairs(vec3(0.0, 0.0, -1.0), vec3(0.05, 1.0, 0.0)), 0);
        assert_eq!(count_repairs(vec3(0.0, 0.0, -1.0), vec3(0.0, 1.0, -0.5)), 1);
    }

    #[test]
    fn perpendicular_up_is_silent() {
        assert_eq!(count_repairs(vec3(0.0, 0.0, -1.0), vec3(0.0, 1.0, 0.0)), 0);
    }
}
