use super::*;

#[test]
fn lerp_endpoints() {
    assert_eq!(f64::lerp(&50.0, &0.0, 0.0), 50.0);
    assert_eq!(f64::lerp(&50.0, &0.0, 1.0), 0.0);
    let v = <Vec2 as Lerp>::lerp(&Vec2::new(0.0, 10.0), &Vec2::new(10.0, 0.0), 0.5);
    assert_eq!(v, Vec2::new(5.0, 5.0));
}

#[test]
fn interpolate_clamps_both_sides() {
    assert_eq!(interpolate_clamped(-5.0, (0.0, 45.0), (0.0, 250.0)), 0.0);
    assert_eq!(interpolate_clamped(45.0, (0.0, 45.0), (0.0, 250.0)), 250.0);
    assert_eq!(interpolate_clamped(90.0, (0.0, 45.0), (0.0, 250.0)), 250.0);
    assert!((interpolate_clamped(22.5, (0.0, 45.0), (0.0, 250.0)) - 125.0).abs() < 1e-9);
}

#[test]
fn degenerate_input_range_steps() {
    assert_eq!(interpolate_clamped(0.0, (1.0, 1.0), (0.0, 1.0)), 0.0);
    assert_eq!(interpolate_clamped(1.0, (1.0, 1.0), (0.0, 1.0)), 1.0);
}
