use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        DemoreelError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        DemoreelError::animation("x")
            .to_string()
            .contains("animation error:")
    );
    assert!(
        DemoreelError::evaluation("x")
            .to_string()
            .contains("evaluation error:")
    );
    assert!(
        DemoreelError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn messages_pass_through() {
    let err = DemoreelError::validation("transition duration must be > 0");
    assert!(err.to_string().contains("transition duration"));
}
