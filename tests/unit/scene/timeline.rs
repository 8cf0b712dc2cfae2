use super::*;

fn scene(duration: f64) -> SceneData {
    SceneData {
        duration,
        ..SceneData::default()
    }
}

#[test]
fn mixed_durations_are_sized_individually() {
    let fps = Fps::integer(30).unwrap();
    let tl = Timeline::new(vec![scene(5.0), scene(5.01), scene(0.1)], fps);
    let lens: Vec<u64> = tl.ranges().iter().map(|r| r.len_frames()).collect();
    assert_eq!(lens, vec![150, 151, 3]);
    assert_eq!(tl.total_frames(), 304);
    assert_eq!(tl.ranges()[1].start, FrameIndex(150));
}

#[test]
fn locate_maps_global_to_local() {
    let fps = Fps::integer(30).unwrap();
    let tl = Timeline::new(vec![scene(1.0), scene(0.0), scene(2.0)], fps);
    assert_eq!(tl.locate(FrameIndex(0)), Some((0, FrameIndex(0))));
    assert_eq!(tl.locate(FrameIndex(29)), Some((0, FrameIndex(29))));
    // zero-length scene 1 is skipped
    assert_eq!(tl.locate(FrameIndex(30)), Some((2, FrameIndex(0))));
    assert_eq!(tl.locate(FrameIndex(89)), Some((2, FrameIndex(59))));
    assert_eq!(tl.locate(FrameIndex(90)), None);
}

#[test]
fn empty_timeline() {
    let tl = Timeline::new(Vec::new(), Fps::integer(24).unwrap());
    assert_eq!(tl.total_frames(), 0);
    assert_eq!(tl.locate(FrameIndex(0)), None);
}

#[test]
fn image_group_slices_are_contiguous() {
    let mut scenes = vec![scene(3.0), scene(3.0), scene(3.0)];
    ImageGroup::new("group_1.png").assign(&mut scenes);
    assert_eq!(scenes[0].animation_start, 0.0);
    assert_eq!(scenes[2].animation_end, 1.0);
    for pair in scenes.windows(2) {
        assert_eq!(pair[0].animation_end, pair[1].animation_start);
    }
    assert!(scenes.iter().all(|s| s.background
        == BackgroundDef::Image {
            image_path: "group_1.png".into()
        }));
    assert_eq!(ImageGroup::segment(0, 0), (0.0, 1.0));
}
