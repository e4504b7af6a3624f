use super::*;

const FPS: Fps = Fps { num: 30, den: 1 };

fn presets() -> [(&'static str, SpringConfig); 4] {
    [
        ("smooth", SpringConfig::smooth()),
        ("snappy", SpringConfig::snappy()),
        ("bouncy", SpringConfig::bouncy()),
        ("heavy", SpringConfig::heavy()),
    ]
}

#[test]
fn starts_from_rest_and_converges_for_every_preset() {
    for (name, config) in presets() {
        assert_eq!(config.sample(0, FPS, 0).unwrap(), 0.0, "{name} at frame 0");

        // |x - 1| trends down across widening sample points and is inside
        // tolerance by frame 300 (ten seconds).
        let mut last_err = f64::INFINITY;
        for frame in [0u64, 30, 60, 120, 300] {
            let err = (config.sample(frame, FPS, 0).unwrap() - 1.0).abs();
            assert!(
                err <= last_err + 1e-9,
                "{name} diverged at frame {frame}: {err} > {last_err}"
            );
            last_err = err;
        }
        assert!(last_err < 0.02, "{name} not settled by frame 300: {last_err}");
    }
}

#[test]
fn delay_gates_the_start_exactly() {
    let config = SpringConfig::snappy();
    for frame in 0..25 {
        assert_eq!(config.sample(frame, FPS, 25).unwrap(), 0.0);
    }
    assert_eq!(config.sample(25, FPS, 25).unwrap(), 0.0); // released from rest
    assert!(config.sample(40, FPS, 25).unwrap() > 0.0);
}

#[test]
fn bouncy_overshoots_and_clamping_caps_it() {
    let raw = SpringConfig::bouncy();
    let clamped = SpringConfig::bouncy().with_overshoot_clamping(true);

    // First oscillation peak lands near frame 10.
    let peak = raw.sample(10, FPS, 0).unwrap();
    assert!(peak > 1.0, "bouncy should overshoot, got {peak}");
    assert_eq!(clamped.sample(10, FPS, 0).unwrap(), 1.0);

    for frame in 0..300 {
        let v = clamped.sample(frame, FPS, 0).unwrap();
        assert!(v <= 1.0, "clamped value exceeded 1 at frame {frame}");
        // The clamp caps above; it never pushes the response below 0.
        assert!(v >= 0.0, "clamped value dipped below 0 at frame {frame}");
    }
}

#[test]
fn clamping_never_lifts_the_sub_one_tail() {
    let raw = SpringConfig::smooth();
    let clamped = SpringConfig::smooth().with_overshoot_clamping(true);
    for frame in [0u64, 10, 40, 100] {
        assert_eq!(
            raw.sample(frame, FPS, 0).unwrap(),
            clamped.sample(frame, FPS, 0).unwrap()
        );
    }
}

#[test]
fn damping_ratio_classifies_the_presets() {
    assert!(SpringConfig::bouncy().is_underdamped());
    assert!(SpringConfig::snappy().is_underdamped());
    assert!(SpringConfig::heavy().is_underdamped());
    assert!(!SpringConfig::smooth().is_underdamped());
    assert_eq!(SpringConfig::bouncy().damping_ratio(), 0.4);
    assert_eq!(SpringConfig::smooth().damping_ratio(), 10.0);
}

#[test]
fn critically_damped_configuration_converges_monotonically() {
    // damping = 2 * sqrt(k * m) exactly.
    let config = SpringConfig::new(1.0, 20.0, 100.0);
    assert_eq!(config.damping_ratio(), 1.0);

    let mut prev = -1.0;
    for frame in 0..120 {
        let v = config.sample(frame, FPS, 0).unwrap();
        assert!(v >= prev, "critical response dipped at frame {frame}");
        assert!(v <= 1.0 + 1e-12);
        prev = v;
    }
    assert!((prev - 1.0).abs() < 1e-3);
}

#[test]
fn invalid_configurations_are_rejected() {
    assert!(SpringConfig::new(0.0, 10.0, 100.0).validate().is_err());
    assert!(SpringConfig::new(-1.0, 10.0, 100.0).validate().is_err());
    assert!(SpringConfig::new(1.0, -0.5, 100.0).validate().is_err());
    assert!(SpringConfig::new(1.0, 10.0, 0.0).validate().is_err());
    assert!(SpringConfig::new(1.0, 10.0, f64::NAN).validate().is_err());
    assert!(SpringConfig::new(1.0, 10.0, 100.0).sample(0, FPS, 0).is_ok());
    assert!(SpringConfig::new(0.0, 10.0, 100.0).sample(0, FPS, 0).is_err());
}

#[test]
fn sampling_is_deterministic_and_order_free() {
    let config = SpringConfig::heavy();
    let direct = config.sample(200, FPS, 7).unwrap();
    // Sampling other frames in between changes nothing.
    for frame in (0..200).rev() {
        let _ = config.sample(frame, FPS, 7).unwrap();
    }
    assert_eq!(config.sample(200, FPS, 7).unwrap(), direct);
}
