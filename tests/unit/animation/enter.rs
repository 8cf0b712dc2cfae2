use super::*;

fn fps30() -> Fps {
    Fps::integer(30).unwrap()
}

#[test]
fn names_roundtrip_and_unknown_falls_back() {
    for anim in EnterAnimation::ALL {
        assert_eq!(EnterAnimation::from_name(anim.name()), anim);
    }
    assert_eq!(EnterAnimation::from_name("FADE_IN_UP"), EnterAnimation::FadeInUp);
    assert_eq!(EnterAnimation::from_name("spin-3d"), EnterAnimation::Default);
    assert_eq!(EnterAnimation::from_name(""), EnterAnimation::Default);
}

#[test]
fn deserializes_leniently() {
    let a: EnterAnimation = serde_json::from_str("\"bounce-in\"").unwrap();
    assert_eq!(a, EnterAnimation::BounceIn);
    let a: EnterAnimation = serde_json::from_str("\"wobble\"").unwrap();
    assert_eq!(a, EnterAnimation::Default);
    let a: EnterAnimation = serde_json::from_str("null").unwrap();
    assert_eq!(a, EnterAnimation::Default);
    let a: EnterAnimation = serde_json::from_str("5").unwrap();
    assert_eq!(a, EnterAnimation::Default);
    let a: EnterAnimation = serde_json::from_str("{\"name\": \"pop-in\"}").unwrap();
    assert_eq!(a, EnterAnimation::Default);
}

#[test]
fn zero_states_are_invisible_or_unzoomed() {
    let s = EnterAnimation::FadeInUp.sample(0.0, fps30());
    assert_eq!(s.opacity, 0.0);
    assert_eq!(s.translate, Vec2::new(0.0, 50.0));

    let s = EnterAnimation::SlideInLeft.sample(0.0, fps30());
    assert_eq!(s.translate, Vec2::new(-200.0, 0.0));
    let s = EnterAnimation::SlideInRight.sample(0.0, fps30());
    assert_eq!(s.translate, Vec2::new(200.0, 0.0));

    let s = EnterAnimation::ZoomIn.sample(0.0, fps30());
    assert_eq!(s.scale, 0.5);
    assert_eq!(s.opacity, 0.0);

    for anim in [EnterAnimation::BounceIn, EnterAnimation::PopIn] {
        let s = anim.sample(0.0, fps30());
        assert_eq!(s.opacity, 0.0);
        assert_eq!(s.scale, 0.0);
    }
    assert_eq!(EnterAnimation::Default.sample(0.0, fps30()).opacity, 0.0);
}

#[test]
fn curves_settle_at_rest() {
    for anim in EnterAnimation::ALL {
        let s = anim.sample(300.0, fps30());
        assert!((s.opacity - 1.0).abs() < 1e-3, "{anim:?}");
        assert!((s.scale - 1.0).abs() < 1e-3, "{anim:?}");
        assert!(s.translate.hypot() < 1e-2, "{anim:?}");
    }
}

#[test]
fn bounce_opacity_saturates_early_and_scale_overshoots() {
    let peak_scale = (0..30)
        .map(|f| EnterAnimation::BounceIn.sample(f as f64, fps30()).scale)
        .fold(f64::MIN, f64::max);
    assert!(peak_scale > 1.0);
    for f in 0..60 {
        let s = EnterAnimation::BounceIn.sample(f as f64, fps30());
        assert!((0.0..=1.0).contains(&s.opacity));
    }
}

#[test]
fn count_up_scenario_250km() {
    // delay 0.3s at 30fps: frame 9 is local 0, frame 54 is local 45 (1.5s).
    assert_eq!(count_up_text("250km", 0.0, fps30()).as_deref(), Some("0km"));
    assert_eq!(
        count_up_text("250km", 45.0, fps30()).as_deref(),
        Some("250km")
    );

    let mut prev = 0i64;
    for f in 0..=45 {
        let text = count_up_text("250km", f as f64, fps30()).unwrap();
        let n: i64 = text.trim_end_matches("km").parse().unwrap();
        assert!(n >= prev);
        prev = n;
    }
}

#[test]
fn count_up_reaches_target_despite_float_noise_in_delay() {
    let fps = Fps::integer(25).unwrap();
    // frame 92 is exactly 1.5s after a 2.18s delay at 25fps
    let local = 92.0 - fps.secs_to_frames(2.18);
    assert_eq!(count_up_text("250km", local, fps).as_deref(), Some("250km"));
    assert_eq!(
        count_up_text("250km", local - 1.0, fps).as_deref(),
        Some("243km")
    );
}

#[test]
fn numeric_content_keeps_prefix_and_suffix() {
    let n = NumericContent::parse("約1,200人").unwrap();
    assert_eq!(n.prefix, "約");
    assert_eq!(n.value, 1200.0);
    assert_eq!(n.suffix, "人");
    assert_eq!(n.display(0.5), "約600人");

    let n = NumericContent::parse("$3.5M").unwrap();
    assert_eq!(n.display(1.0), "$3M");
}

#[test]
fn count_up_without_number_is_none() {
    assert_eq!(count_up_text("すごい!", 10.0, fps30()), None);
    assert_eq!(count_up_text("1.2.3", 10.0, fps30()), None);
    assert_eq!(EnterAnimation::CountUp.sample(0.0, fps30()), MotionState::REST);
}
