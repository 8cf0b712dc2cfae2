use super::*;
use serde_json::json;

#[test]
fn reads_envelope_with_canvas() {
    let p = ScenePropsFile::from_json_value(json!({
        "scene": {"sceneNumber": 5, "duration": 3.0},
        "width": 720,
        "height": 1280
    }))
    .unwrap();
    assert_eq!(p.scene.scene_number, 5);
    let canvas = p.canvas_or(Canvas::new(1080, 1920).unwrap()).unwrap();
    assert_eq!((canvas.width, canvas.height), (720, 1280));
}

#[test]
fn reads_bare_scene() {
    let p = ScenePropsFile::from_json_value(json!({"sceneNumber": 2})).unwrap();
    assert_eq!(p.scene.scene_number, 2);
    assert_eq!((p.width, p.height), (None, None));
    let canvas = p.canvas_or(Canvas::new(1080, 1920).unwrap()).unwrap();
    assert_eq!((canvas.width, canvas.height), (1080, 1920));
}

#[test]
fn zero_canvas_is_rejected() {
    let p = ScenePropsFile::from_json_value(json!({"scene": {}, "width": 0})).unwrap();
    assert!(p.canvas_or(Canvas::new(1080, 1920).unwrap()).is_err());
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = ScenePropsFile::from_reader("{not json".as_bytes()).unwrap_err();
    assert!(matches!(err, ReelError::Serde(_)));
    let err = ScenePropsFile::from_json_value(json!({"scene": {"duration": "long"}})).unwrap_err();
    assert!(matches!(err, ReelError::Serde(_)));
}

#[test]
fn missing_file_is_reported_with_path() {
    let err = ScenePropsFile::from_path("/definitely/not/here.json").unwrap_err();
    assert!(err.to_string().contains("/definitely/not/here.json"));
}
