use super::*;

const TRIANGLE: [(f64, f64); 3] = [(0.0, 0.0), (10.0, 1.0), (20.0, 0.0)];

#[test]
fn hits_breakpoints_and_midpoints_exactly() {
    assert_eq!(interpolate_clamped(0.0, &TRIANGLE).unwrap(), 0.0);
    assert_eq!(interpolate_clamped(10.0, &TRIANGLE).unwrap(), 1.0);
    assert_eq!(interpolate_clamped(20.0, &TRIANGLE).unwrap(), 0.0);
    assert_eq!(interpolate_clamped(5.0, &TRIANGLE).unwrap(), 0.5);
    assert_eq!(interpolate_clamped(15.0, &TRIANGLE).unwrap(), 0.5);
}

#[test]
fn clamp_holds_boundary_outputs() {
    assert_eq!(interpolate_clamped(-5.0, &TRIANGLE).unwrap(), 0.0);
    assert_eq!(interpolate_clamped(25.0, &TRIANGLE).unwrap(), 0.0);
}

#[test]
fn extend_continues_boundary_slopes() {
    let ramp = [(0.0, 0.0), (10.0, 10.0)];
    let v = interpolate(15.0, &ramp, Extrapolate::Clamp, Extrapolate::Extend).unwrap();
    assert_eq!(v, 15.0);
    let v = interpolate(-5.0, &ramp, Extrapolate::Extend, Extrapolate::Clamp).unwrap();
    assert_eq!(v, -5.0);

    // The left/right policies are independent.
    let v = interpolate(-5.0, &ramp, Extrapolate::Clamp, Extrapolate::Extend).unwrap();
    assert_eq!(v, 0.0);
}

#[test]
fn equal_breakpoints_behave_as_a_unit_step() {
    let step = [(0.0, 0.0), (5.0, 0.0), (5.0, 1.0), (10.0, 1.0)];
    assert_eq!(interpolate_clamped(4.0, &step).unwrap(), 0.0);
    assert_eq!(interpolate_clamped(5.0, &step).unwrap(), 1.0);
    assert_eq!(interpolate_clamped(6.0, &step).unwrap(), 1.0);
}

#[test]
fn single_stop_is_constant_under_both_policies() {
    let flat = [(3.0, 7.0)];
    for policy in [Extrapolate::Clamp, Extrapolate::Extend] {
        assert_eq!(interpolate(0.0, &flat, policy, policy).unwrap(), 7.0);
        assert_eq!(interpolate(3.0, &flat, policy, policy).unwrap(), 7.0);
        assert_eq!(interpolate(9.0, &flat, policy, policy).unwrap(), 7.0);
    }
}

#[test]
fn invalid_stop_sets_fail_fast() {
    assert!(interpolate_clamped(0.0, &[]).is_err());
    assert!(interpolate_clamped(0.0, &[(10.0, 0.0), (5.0, 1.0)]).is_err());
    assert!(interpolate_clamped(0.0, &[(0.0, f64::NAN)]).is_err());
    assert!(interpolate_clamped(f64::NAN, &TRIANGLE).is_err());
}
