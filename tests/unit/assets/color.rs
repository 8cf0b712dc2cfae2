use super::*;
use serde_json::json;

#[test]
fn parses_hex_forms() {
    let c = ColorDef::parse("#ff0000").unwrap();
    assert_eq!(c, ColorDef::rgba(1.0, 0.0, 0.0, 1.0));

    let c = ColorDef::parse("#FFF").unwrap();
    assert_eq!(c, ColorDef::WHITE);

    let c = ColorDef::parse("#0000ff80").unwrap();
    assert!((c.b - 1.0).abs() < 1e-9);
    assert!((c.a - (128.0 / 255.0)).abs() < 1e-9);
}

#[test]
fn parses_css_functions_and_names() {
    let c = ColorDef::parse("rgba(255, 0, 0, 0.5)").unwrap();
    assert!((c.r - 1.0).abs() < 1e-9);
    assert!((c.a - 0.5).abs() < 1e-9);

    let c = ColorDef::parse("RGB(0,255,0)").unwrap();
    assert!((c.g - 1.0).abs() < 1e-9);

    assert_eq!(ColorDef::parse("White").unwrap(), ColorDef::WHITE);
}

#[test]
fn rejects_garbage() {
    assert!(ColorDef::parse("").is_err());
    assert!(ColorDef::parse("#12").is_err());
    assert!(ColorDef::parse("#zzzzzz").is_err());
    assert!(ColorDef::parse("rgb(1,2)").is_err());
    assert!(ColorDef::parse("#ääää").is_err());
}

#[test]
fn parse_or_falls_back() {
    assert_eq!(ColorDef::parse_or(None, ColorDef::WHITE), ColorDef::WHITE);
    assert_eq!(
        ColorDef::parse_or(Some("not-a-color"), ColorDef::WHITE),
        ColorDef::WHITE
    );
    assert_eq!(
        ColorDef::parse_or(Some("#000000"), ColorDef::WHITE),
        ColorDef::rgba8(0, 0, 0, 255)
    );
}

#[test]
fn deserializes_object_and_array() {
    let c: ColorDef = serde_json::from_value(json!({"r": 0.25, "g": 0.5, "b": 0.75})).unwrap();
    assert_eq!(c, ColorDef::rgba(0.25, 0.5, 0.75, 1.0));

    let c: ColorDef = serde_json::from_value(json!([0.25, 0.5, 0.75, 0.9])).unwrap();
    assert_eq!(c, ColorDef::rgba(0.25, 0.5, 0.75, 0.9));

    let c: ColorDef = serde_json::from_value(json!("#1e1e23e6")).unwrap();
    assert_eq!(c, ColorDef::rgba8(0x1e, 0x1e, 0x23, 0xe6));
}
