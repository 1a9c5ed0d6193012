use super::*;

// =============================================================
// Particle stream
// =============================================================

#[test]
fn spawn_assigns_increasing_ids() {
    let mut stream = ParticleStream::new(7);
    let a = stream.spawn();
    let b = stream.spawn();
    assert!(b > a);
    assert_eq!(stream.particles().len(), 2);
    assert!(stream.particles().iter().all(|p| !p.launched));
}

#[test]
fn particles_stay_inside_the_lane() {
    let mut stream = ParticleStream::new(42);
    for _ in 0..MAX_LIVE {
        stream.spawn();
    }
    for p in stream.particles() {
        assert!((0.0..100.0).contains(&p.left_pct), "left {}", p.left_pct);
        assert!(p.drift_px.abs() <= 20.0, "drift {}", p.drift_px);
    }
}

#[test]
fn launch_then_expire_lifecycle() {
    let mut stream = ParticleStream::new(1);
    let id = stream.spawn();
    assert!(stream.particles()[0].style().contains("opacity: 0.7"));

    assert!(stream.launch(id));
    assert!(stream.get(id).is_some_and(|p| p.launched));
    let style = stream.particles()[0].style();
    assert!(style.contains("translateX(300px)"), "{style}");
    assert!(style.contains("transition: all 1500ms"), "{style}");

    assert!(stream.expire(id));
    assert!(stream.particles().is_empty());
    assert_eq!(stream.get(id), None);
    assert!(!stream.expire(id));
    assert!(!stream.launch(id));
}

#[test]
fn live_particles_are_capped() {
    let mut stream = ParticleStream::new(3);
    let first = stream.spawn();
    for _ in 0..MAX_LIVE {
        stream.spawn();
    }
    assert_eq!(stream.particles().len(), MAX_LIVE);
    assert!(stream.particles().iter().all(|p| p.id != first));
}

#[test]
fn same_seed_same_stream() {
    let mut a = ParticleStream::new(99);
    let mut b = ParticleStream::new(99);
    a.spawn();
    b.spawn();
    assert_eq!(a.particles(), b.particles());
}

// =============================================================
// Bubble field
// =============================================================

#[test]
fn bubble_field_is_deterministic() {
    assert_eq!(bubble_field(8, 11), bubble_field(8, 11));
    assert_eq!(bubble_field(8, 11).len(), 8);
    assert!(bubble_field(0, 11).is_empty());
}

#[test]
fn bubble_delays_are_staggered() {
    let field = bubble_field(4, 5);
    let delays = field.iter().map(|b| b.delay_s).collect::<Vec<_>>();
    assert_eq!(delays.len(), 4);
    for (i, delay) in delays.iter().enumerate() {
        assert!((delay - 0.3 * i as f64).abs() < 1e-9);
    }
    for bubble in &field {
        assert!((3.0..5.0).contains(&bubble.duration_s));
        assert!(bubble.style().starts_with("left: "));
    }
}
