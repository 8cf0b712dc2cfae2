use super::*;
use serde_json::json;

fn fps30() -> Fps {
    Fps::integer(30).unwrap()
}

fn canvas() -> Canvas {
    Canvas::new(1080, 1920).unwrap()
}

fn scene(v: serde_json::Value) -> SceneData {
    serde_json::from_value(v).unwrap()
}

fn resolve(s: &SceneData, frame: u64) -> ResolvedBackground {
    resolve_background(s, FrameIndex(frame), fps30(), canvas(), &RenderConfig::default())
}

#[test]
fn gradient_angle_starts_at_base_and_stays_bounded() {
    assert_eq!(gradient_angle_deg(0.0), 135.0);
    for i in 0..2000 {
        let a = gradient_angle_deg(i as f64 * 0.05);
        assert!((125.0..=145.0).contains(&a), "{a}");
    }
    let s = scene(json!({"background": {"type": "gradient", "colors": ["#FF6B6B", "#FF8E53"]}}));
    match resolve(&s, 0) {
        ResolvedBackground::Gradient { colors, angle_deg } => {
            assert_eq!(angle_deg, 135.0);
            assert_eq!(colors[0], ColorDef::rgba8(0xFF, 0x6B, 0x6B, 255));
            assert_eq!(colors.len(), 2);
        }
        other => panic!("expected gradient, got {other:?}"),
    }
}

#[test]
fn gradient_never_freezes() {
    let s = scene(json!({}));
    let a0 = resolve(&s, 0);
    let a1 = resolve(&s, 15);
    assert_ne!(a0, a1);
}

#[test]
fn gradient_drops_bad_stops_and_falls_back() {
    let s = scene(json!({"background": {"type": "gradient", "colors": ["bogus", "#000"]}}));
    let ResolvedBackground::Gradient { colors, .. } = resolve(&s, 0) else {
        panic!("expected gradient");
    };
    assert_eq!(colors, vec![ColorDef::rgba8(0, 0, 0, 255)]);

    let s = scene(json!({"background": {"type": "gradient", "colors": []}}));
    let ResolvedBackground::Gradient { colors, .. } = resolve(&s, 0) else {
        panic!("expected gradient");
    };
    assert_eq!(
        colors,
        vec![
            ColorDef::rgba8(0x66, 0x7e, 0xea, 255),
            ColorDef::rgba8(0x76, 0x4b, 0xa2, 255)
        ]
    );
}

#[test]
fn solid_falls_back_to_first_fallback_color() {
    let s = scene(json!({"background": {"type": "solid", "color": "#123456"}}));
    assert_eq!(
        resolve(&s, 0),
        ResolvedBackground::Solid {
            color: ColorDef::rgba8(0x12, 0x34, 0x56, 255)
        }
    );
    let s = scene(json!({"background": {"type": "solid", "color": "??"}}));
    assert_eq!(
        resolve(&s, 0),
        ResolvedBackground::Solid {
            color: ColorDef::rgba8(0x66, 0x7e, 0xea, 255)
        }
    );
}

#[test]
fn ken_burns_zoom_in_over_full_scene() {
    let s = scene(json!({
        "sceneNumber": 1,
        "duration": 5.0,
        "background": {"type": "image", "imagePath": "bg.png"}
    }));
    let mut prev = 0.0;
    for f in 0..150 {
        let ResolvedBackground::Image { camera, scale, .. } = resolve(&s, f) else {
            panic!("expected image");
        };
        assert_eq!(camera, CameraMotion::ZoomIn);
        assert!(scale > prev);
        prev = scale;
    }
    let ResolvedBackground::Image { scale, .. } = resolve(&s, 0) else {
        panic!("expected image");
    };
    assert_eq!(scale, 1.0);
    assert!((prev - 1.2).abs() < 0.01, "{prev}");
}

#[test]
fn pan_left_slice_of_shared_image() {
    let s = scene(json!({
        "sceneNumber": 2,
        "duration": 5.0,
        "animationStart": 0.5,
        "animationEnd": 1.0,
        "background": {"type": "image", "imagePath": "bg.png"}
    }));
    let ResolvedBackground::Image {
        camera,
        progress,
        scale,
        translate,
        transform,
        ..
    } = resolve(&s, 0)
    else {
        panic!("expected image");
    };
    assert_eq!(camera, CameraMotion::PanLeft);
    assert_eq!(progress, 0.5);
    assert_eq!(scale, 1.15);
    assert_eq!(translate, Vec2::new(0.0, 0.0));
    let center = canvas().center();
    assert!((transform * center - center).hypot() < 1e-9);
}

#[test]
fn scene_nine_reuses_scene_one_pattern() {
    let bg = json!({"type": "image", "imagePath": "x.png"});
    let a = resolve(&scene(json!({"sceneNumber": 1, "background": bg})), 42);
    let b = resolve(&scene(json!({"sceneNumber": 9, "background": bg})), 42);
    assert_eq!(a, b);
}
