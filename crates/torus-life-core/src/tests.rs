//! Tests for the shared vocabulary: vectors, particles, matrix, config, palette.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::WorldConfig;
use crate::constants::*;
use crate::error::Error;
use crate::matrix::AttractionMatrix;
use crate::particle::{Particle, ParticleId, ParticleType};
use crate::render::{Color, PALETTE};
use crate::state::{ParticleView, WorldSnapshot};
use crate::vector::Vector2;

const EPS: f64 = 1e-9;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < EPS
}

fn approx_vec(a: Vector2, b: Vector2) -> bool {
    approx(a.x, b.x) && approx(a.y, b.y)
}

// ---- Vector arithmetic ----

#[test]
fn test_add_is_commutative() {
    let samples = [
        Vector2::new(1.5, -2.0),
        Vector2::new(0.0, 0.0),
        Vector2::new(-300.25, 12.5),
        Vector2::new(1e6, -1e-6),
    ];
    for a in samples {
        for b in samples {
            assert_eq!(Vector2::add(a, b), Vector2::add(b, a));
        }
    }
}

#[test]
fn test_add_is_associative_within_tolerance() {
    let a = Vector2::new(0.1, 0.2);
    let b = Vector2::new(0.3, -0.7);
    let c = Vector2::new(-5.5, 1e3);
    let left = Vector2::add(Vector2::add(a, b), c);
    let right = Vector2::add(a, Vector2::add(b, c));
    assert!(approx_vec(left, right));
}

#[test]
fn test_pure_operations_leave_inputs_untouched() {
    let a = Vector2::new(3.0, 4.0);
    let b = Vector2::new(1.0, 1.0);
    let sum = a + b;
    let diff = a - b;
    let scaled = a * 2.0;
    assert_eq!(a, Vector2::new(3.0, 4.0));
    assert_eq!(sum, Vector2::new(4.0, 5.0));
    assert_eq!(diff, Vector2::new(2.0, 3.0));
    assert_eq!(scaled, Vector2::new(6.0, 8.0));
    assert_eq!(Vector2::subtract(a, b), diff);
    assert_eq!(Vector2::scale(a, 2.0), scaled);
}

#[test]
fn test_compound_assignment_mutates() {
    let mut v = Vector2::new(1.0, 2.0);
    v += Vector2::new(1.0, 1.0);
    assert_eq!(v, Vector2::new(2.0, 3.0));
    v -= Vector2::new(0.5, 0.5);
    assert_eq!(v, Vector2::new(1.5, 2.5));
    v *= 2.0;
    assert_eq!(v, Vector2::new(3.0, 5.0));
}

#[test]
fn test_length() {
    assert!(approx(Vector2::new(3.0, 4.0).length(), 5.0));
    assert!(approx(Vector2::new(3.0, 4.0).length_squared(), 25.0));
    assert!(approx(
        Vector2::distance(Vector2::new(1.0, 1.0), Vector2::new(4.0, 5.0)),
        5.0
    ));
}

#[test]
fn test_normalize_zero_vector_is_identity() {
    let z = Vector2::ZERO.normalize();
    assert_eq!(z, Vector2::ZERO);
    assert!(!z.x.is_nan() && !z.y.is_nan());

    let mut m = Vector2::ZERO;
    m.normalize_mut();
    assert_eq!(m, Vector2::ZERO);
}

#[test]
fn test_normalize_produces_unit_length() {
    let n = Vector2::new(-7.0, 24.0).normalize();
    assert!(approx(n.length(), 1.0));
    assert!(approx_vec(n, Vector2::new(-7.0 / 25.0, 24.0 / 25.0)));
}

#[test]
fn test_limit_never_increases_length() {
    let samples = [
        Vector2::new(10.0, 0.0),
        Vector2::new(-2.0, 2.0),
        Vector2::new(0.5, 0.1),
        Vector2::new(-100.0, -250.0),
        Vector2::ZERO,
    ];
    for v in samples {
        for k in [0.5, 1.0, 3.0, 1000.0] {
            let limited = v.limit(k);
            assert!(limited.length() <= v.length() + EPS);
            assert!(limited.length() <= k + EPS);
        }
    }
}

#[test]
fn test_limit_leaves_short_vectors_unchanged() {
    let v = Vector2::new(1.0, 2.0);
    assert_eq!(v.limit(3.0), v);
    // Exactly at the cap is still unchanged.
    assert_eq!(Vector2::new(3.0, 4.0).limit(5.0), Vector2::new(3.0, 4.0));
}

#[test]
fn test_limit_keeps_direction() {
    let v = Vector2::new(30.0, 40.0);
    let limited = v.limit(3.0);
    assert!(approx_vec(limited, Vector2::new(1.8, 2.4)));

    let mut m = v;
    m.limit_mut(3.0);
    assert_eq!(m, limited);
}

#[test]
fn test_wrap_is_true_modulo() {
    let w = Vector2::new(-1.0, 401.0).wrap(600.0, 400.0);
    assert!(approx_vec(w, Vector2::new(599.0, 1.0)));
    let inside = Vector2::new(10.0, 20.0).wrap(600.0, 400.0);
    assert_eq!(inside, Vector2::new(10.0, 20.0));
    let far = Vector2::new(-1250.0, 1250.0).wrap(600.0, 400.0);
    assert!(approx_vec(far, Vector2::new(550.0, 50.0)));
}

// ---- Torus geometry ----

#[test]
fn test_torus_delta_direct_path() {
    let d = Vector2::shortest_torus_delta(
        Vector2::new(10.0, 0.0),
        Vector2::new(20.0, 0.0),
        100.0,
        60.0,
    );
    assert!(approx(d.length(), 10.0));
    assert!(approx_vec(d, Vector2::new(10.0, 0.0)));
}

#[test]
fn test_torus_delta_wrap_path_is_shorter() {
    let d = Vector2::shortest_torus_delta(
        Vector2::new(10.0, 0.0),
        Vector2::new(70.0, 0.0),
        100.0,
        60.0,
    );
    assert!(approx(d.length(), 40.0));
    // Points from a toward b across the left seam.
    assert!(approx_vec(d, Vector2::new(-40.0, 0.0)));
}

#[test]
fn test_torus_delta_axes_wrap_independently() {
    // x takes the direct path, y crosses the seam.
    let d = Vector2::shortest_torus_delta(
        Vector2::new(45.0, 10.0),
        Vector2::new(55.0, 55.0),
        100.0,
        60.0,
    );
    assert!(approx_vec(d, Vector2::new(10.0, -15.0)));

    // Both axes cross the seam.
    let d = Vector2::shortest_torus_delta(
        Vector2::new(2.0, 3.0),
        Vector2::new(98.0, 58.0),
        100.0,
        60.0,
    );
    assert!(approx_vec(d, Vector2::new(-4.0, -5.0)));
}

#[test]
fn test_torus_delta_matches_wrapped_distance() {
    let (w, h) = (600.0, 400.0);
    let points = [
        Vector2::new(0.0, 0.0),
        Vector2::new(599.0, 399.0),
        Vector2::new(300.0, 200.0),
        Vector2::new(27.0, 200.0),
        Vector2::new(210.0, 390.0),
        Vector2::new(450.5, 12.25),
    ];
    for a in points {
        for b in points {
            let delta = Vector2::shortest_torus_delta(a, b, w, h);
            let dist = Vector2::wrapped_distance(a, b, w, h);
            assert!(
                approx(delta.length(), dist),
                "delta {delta:?} vs distance {dist} for {a:?} -> {b:?}"
            );
        }
    }
}

#[test]
fn test_wrapped_distance() {
    let d = Vector2::wrapped_distance(Vector2::new(5.0, 5.0), Vector2::new(95.0, 5.0), 100.0, 60.0);
    assert!(approx(d, 10.0));
    let d = Vector2::wrapped_distance(Vector2::new(0.0, 0.0), Vector2::new(3.0, 56.0), 100.0, 60.0);
    assert!(approx(d, 5.0));
}

#[test]
fn test_torus_delta_picks_each_axis_independently() {
    // Both whole-vector candidates, (20, 80) and (-80, -20), tie at length
    // sqrt(6800); choosing per axis finds the shorter (20, -20).
    let d = Vector2::shortest_torus_delta(
        Vector2::new(40.0, 10.0),
        Vector2::new(60.0, 90.0),
        100.0,
        100.0,
    );
    assert!(approx(d.x, 20.0));
    assert!(approx(d.y, -20.0));
}

#[test]
fn test_from_tuple() {
    assert_eq!(Vector2::from((1.25, -8.5)), Vector2::new(1.25, -8.5));
}

// ---- Particles ----

#[test]
fn test_particle_accepts_integer_and_string_ids() {
    let a = Particle::new(1, 0u8).unwrap();
    assert_eq!(a.id(), &ParticleId::Number(1));
    assert_eq!(a.kind(), ParticleType(0));

    let b = Particle::new("alpha", 5u8).unwrap();
    assert_eq!(b.id(), &ParticleId::Text("alpha".into()));
}

#[test]
fn test_particle_rejects_empty_id() {
    let err = Particle::new("", 0u8).unwrap_err();
    assert!(matches!(err, Error::InvalidIdentity(_)));
    assert!(err.to_string().contains("non-empty string"));
}

#[test]
fn test_particle_rejects_out_of_range_type() {
    let err = Particle::new(1, 6u8).unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidType {
            value: 6,
            type_count: DEFAULT_TYPE_COUNT
        }
    ));

    assert!(Particle::with_type_count(1, 6u8, 8).is_ok());
    assert!(Particle::with_type_count(1, 1u8, 1).is_err());
}

#[test]
fn test_particle_id_serializes_untagged() {
    assert_eq!(serde_json::to_string(&ParticleId::Number(7)).unwrap(), "7");
    assert_eq!(
        serde_json::to_string(&ParticleId::from("seven")).unwrap(),
        "\"seven\""
    );
    let back: ParticleId = serde_json::from_str("42").unwrap();
    assert_eq!(back, ParticleId::Number(42));
    let back: ParticleId = serde_json::from_str("\"x\"").unwrap();
    assert_eq!(back, ParticleId::Text("x".into()));
}

#[test]
fn test_particle_id_display() {
    assert_eq!(ParticleId::from(12).to_string(), "12");
    assert_eq!(ParticleId::from("bob").to_string(), "bob");
}

// ---- Attraction matrix ----

#[test]
fn test_default_matrix_is_self_attraction() {
    let m = AttractionMatrix::default();
    assert_eq!(m.size(), DEFAULT_TYPE_COUNT);
    for a in 0..DEFAULT_TYPE_COUNT as u8 {
        for b in 0..DEFAULT_TYPE_COUNT as u8 {
            let expected = if a == b { 1.0 } else { 0.0 };
            assert_eq!(m.get(ParticleType(a), ParticleType(b)), expected);
        }
    }
}

#[test]
fn test_matrix_lookup_is_asymmetric() {
    let m = AttractionMatrix::from_rows(vec![vec![0.0, 0.8], vec![-0.5, 0.0]]).unwrap();
    assert_eq!(m.get(ParticleType(0), ParticleType(1)), 0.8);
    assert_eq!(m.get(ParticleType(1), ParticleType(0)), -0.5);
}

#[test]
fn test_matrix_rejects_non_square() {
    let err = AttractionMatrix::from_rows(vec![vec![1.0, 0.0], vec![1.0]]).unwrap_err();
    assert!(matches!(err, Error::InvalidConfig(_)));
    assert!(AttractionMatrix::from_rows(Vec::new()).is_err());
    assert!(AttractionMatrix::from_rows(vec![vec![f64::NAN]]).is_err());
}

#[test]
fn test_random_matrix_in_range_and_seeded() {
    let mut rng_a = ChaCha8Rng::seed_from_u64(9);
    let mut rng_b = ChaCha8Rng::seed_from_u64(9);
    let a = AttractionMatrix::random(4, &mut rng_a);
    let b = AttractionMatrix::random(4, &mut rng_b);
    assert_eq!(a, b);
    assert!(a.rows().flatten().all(|v| (-1.0..1.0).contains(v)));
}

#[test]
fn test_matrix_serializes_as_rows() {
    let m = AttractionMatrix::from_rows(vec![vec![1.0, -1.0], vec![0.5, 0.25]]).unwrap();
    let json = serde_json::to_string(&m).unwrap();
    assert_eq!(json, "[[1.0,-1.0],[0.5,0.25]]");
    let back: AttractionMatrix = serde_json::from_str(&json).unwrap();
    assert_eq!(back, m);
    assert!(serde_json::from_str::<AttractionMatrix>("[[1.0],[2.0]]").is_err());
}

// ---- Config ----

#[test]
fn test_config_defaults() {
    let c = WorldConfig::default();
    assert_eq!(c.particle_size, 3.0);
    assert_eq!(c.attraction_mods, AttractionMatrix::self_attraction(6));
}

#[test]
fn test_config_partial_json() {
    let c = WorldConfig::from_json(r#"{"particle_size": 5}"#).unwrap();
    assert_eq!(c.particle_size, 5.0);
    assert_eq!(c.attraction_mods.size(), DEFAULT_TYPE_COUNT);

    let c = WorldConfig::from_json(r#"{"attraction_mods": [[1]]}"#).unwrap();
    assert_eq!(c.particle_size, DEFAULT_PARTICLE_SIZE);
    assert_eq!(c.attraction_mods.size(), 1);

    let c = WorldConfig::from_json("{}").unwrap();
    assert_eq!(c, WorldConfig::default());
}

#[test]
fn test_config_validation() {
    let err = WorldConfig::from_json(r#"{"particle_size": -1}"#).unwrap_err();
    assert!(matches!(err, Error::InvalidConfig(_)));
    let err = WorldConfig::from_json("not json").unwrap_err();
    assert!(matches!(err, Error::Json(_)));
    let bad = WorldConfig {
        attraction_mods: AttractionMatrix::self_attraction(0),
        ..Default::default()
    };
    assert!(bad.validate().is_err());
}

// ---- Palette ----

#[test]
fn test_color_depends_only_on_type() {
    for t in 0..12u8 {
        assert_eq!(
            Color::for_type(ParticleType(t)),
            PALETTE[t as usize % PALETTE.len()]
        );
    }
    assert_eq!(Color::rgb(255, 0, 16).to_hex(), "#ff0010");
}

// ---- Snapshot ----

#[test]
fn test_snapshot_serializes_type_field() {
    let snap = WorldSnapshot {
        tick: 3,
        width: 600.0,
        height: 400.0,
        particle_size: 3.0,
        particles: vec![ParticleView {
            id: ParticleId::from("p"),
            kind: ParticleType(2),
            position: Vector2::new(1.0, 2.0),
            velocity: Vector2::ZERO,
        }],
    };
    let json = serde_json::to_string(&snap).unwrap();
    assert!(json.contains("\"type\":2"));
    let back: WorldSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back, snap);
}
