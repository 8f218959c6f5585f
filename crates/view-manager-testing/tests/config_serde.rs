//! Loading navigation settings from JSON.

use view_manager::{LoadAnim, ManagerConfig, Transition};

#[test]
fn manager_config_from_json() {
    let json = r#"{ "transition": { "anim": "MoveLeft", "duration_ms": 300, "delay_ms": 20 } }"#;
    let config: ManagerConfig = serde_json::from_str(json).unwrap();
    assert_eq!(
        config.transition,
        Transition::new(LoadAnim::MoveLeft, 300).with_delay(20)
    );
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let config: ManagerConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, ManagerConfig::default());

    let config: ManagerConfig =
        serde_json::from_str(r#"{ "transition": { "duration_ms": 80 } }"#).unwrap();
    assert_eq!(config.transition.anim, LoadAnim::FadeIn);
    assert_eq!(config.transition.duration_ms, 80);
}

#[test]
fn unknown_animation_is_rejected() {
    let result: Result<ManagerConfig, _> =
        serde_json::from_str(r#"{ "transition": { "anim": "Spin" } }"#);
    assert!(result.is_err());
}
