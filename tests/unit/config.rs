use super::*;
use crate::animation::camera::Span;

#[test]
fn empty_config_is_the_default() {
    let cfg = RenderConfig::from_json_str("{}").unwrap();
    assert_eq!(cfg, RenderConfig::default());
    assert_eq!(cfg.fps, Fps::integer(30).unwrap());
    assert_eq!((cfg.canvas.width, cfg.canvas.height), (1080, 1920));
    assert_eq!(cfg.theme.channel_name, "FJ News 24");
    assert_eq!(cfg.fallback_colors().len(), 2);
}

#[test]
fn fps_accepts_integer_or_rational() {
    let cfg = RenderConfig::from_json_str(r#"{"fps": 24}"#).unwrap();
    assert_eq!(cfg.fps, Fps::new(24, 1).unwrap());
    let cfg = RenderConfig::from_json_str(r#"{"fps": {"num": 30000, "den": 1001}}"#).unwrap();
    assert_eq!(cfg.fps, Fps::new(30000, 1001).unwrap());
    assert!(RenderConfig::from_json_str(r#"{"fps": 0}"#).is_err());
}

#[test]
fn partial_overrides_keep_other_defaults() {
    let cfg = RenderConfig::from_json_str(
        r##"{
            "canvas": {"width": 1920, "height": 1080},
            "camera": {"pan-left": {"scale": 1.3, "translate_x": [60, -60]}},
            "theme": {"channel_name": "Morning Wire", "layout": {"headline_h": 0.1}}
        }"##,
    )
    .unwrap();
    assert_eq!(cfg.canvas.width, 1920);
    assert_eq!(cfg.camera.pan_left.translate_x, Span::new(60.0, -60.0));
    assert_eq!(cfg.camera.zoom_in, CameraPresets::default().zoom_in);
    assert_eq!(cfg.theme.channel_name, "Morning Wire");
    assert_eq!(cfg.theme.breaking_label, "BREAKING NEWS");
    assert_eq!(cfg.theme.layout.headline_h, 0.1);
    assert_eq!(cfg.theme.layout.badge_w, 0.35);
}

#[test]
fn theme_colors_accept_css_strings() {
    let cfg = RenderConfig::from_json_str(r##"{"theme": {"badge_fill": "#0057b8"}}"##).unwrap();
    assert_eq!(cfg.theme.badge_fill, ColorDef::rgba8(0x00, 0x57, 0xb8, 255));
}

#[test]
fn validate_rejects_unusable_settings() {
    assert!(RenderConfig::from_json_str(r#"{"canvas": {"width": 0, "height": 10}}"#).is_err());
    assert!(RenderConfig::from_json_str(r#"{"fallback_gradient": ["nope"]}"#).is_err());
    assert!(RenderConfig::from_json_str(r#"{"theme": {"layout": {"badge_w": 1.5}}}"#).is_err());
    assert!(
        RenderConfig::from_json_str(
            r#"{"theme": {"layout": {"breaking_h": 0.5, "headline_h": 0.5, "sub_headline_h": 0.1}}}"#
        )
        .is_err()
    );
    let err = RenderConfig::from_json_str("[1,2]").unwrap_err();
    assert!(matches!(err, ReelError::Serde(_)));
}
