use super::*;

#[test]
fn frame_range_contains_boundaries() {
    let r = FrameRange::new(FrameIndex(2), FrameIndex(5)).unwrap();
    assert!(!r.contains(FrameIndex(1)));
    assert!(r.contains(FrameIndex(2)));
    assert!(r.contains(FrameIndex(4)));
    assert!(!r.contains(FrameIndex(5)));
    assert_eq!(r.iter().map(|f| f.0).collect::<Vec<_>>(), vec![2, 3, 4]);
}

#[test]
fn frame_range_rejects_inverted_bounds() {
    assert!(FrameRange::new(FrameIndex(5), FrameIndex(2)).is_err());
}

#[test]
fn secs_to_frames_ceil_matches_duration_examples() {
    let fps = Fps::integer(30).unwrap();
    assert_eq!(fps.secs_to_frames_ceil(5.0), 150);
    assert_eq!(fps.secs_to_frames_ceil(5.01), 151);
    assert_eq!(fps.secs_to_frames_ceil(0.1), 3);
    assert_eq!(fps.secs_to_frames_ceil(0.0), 0);
    assert_eq!(fps.secs_to_frames_ceil(-1.0), 0);
    assert_eq!(fps.secs_to_frames_ceil(f64::NAN), 0);
}

#[test]
fn fps_rejects_zero_parts() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(30, 0).is_err());
    assert!(Canvas::new(0, 10).is_err());
}

#[test]
fn transform_to_affine_identity_and_scale_about_anchor() {
    let t = Transform2D::uniform(1.0, Vec2::ZERO, Vec2::new(10.0, 10.0));
    assert_eq!(t.to_affine(), Affine::IDENTITY);

    let t = Transform2D::uniform(2.0, Vec2::new(5.0, 0.0), Vec2::new(10.0, 10.0));
    // The anchor is a fixed point of the scale; only the translation moves it.
    let p = t.to_affine() * Point::new(10.0, 10.0);
    assert!((p.x - 15.0).abs() < 1e-9);
    assert!((p.y - 10.0).abs() < 1e-9);
}
