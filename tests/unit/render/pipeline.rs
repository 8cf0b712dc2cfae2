use super::*;
use crate::config::RenderConfig;
use crate::encode::sink::InMemorySink;
use crate::eval::compositor::SceneMode;
use serde_json::json;

fn scene(v: serde_json::Value) -> SceneData {
    serde_json::from_value(v).unwrap()
}

fn animated(duration: f64) -> SceneData {
    scene(json!({
        "sceneNumber": 2,
        "duration": duration,
        "elements": [{"content": "😀", "type": "emoji", "animation": {"enter": "bounce-in"}}]
    }))
}

fn still(duration: f64) -> SceneData {
    scene(json!({
        "duration": duration,
        "background": {"type": "solid", "color": "#202020"},
        "elements": [{"content": "fixed", "animation": {"enter": "count-up"}}]
    }))
}

#[test]
fn total_frames_rounds_up() {
    let fps = Fps::integer(30).unwrap();
    assert_eq!(total_frames(&animated(5.0), fps), 150);
    assert_eq!(total_frames(&animated(5.01), fps), 151);
    assert_eq!(total_frames(&animated(0.1), fps), 3);
    assert_eq!(total_frames(&animated(0.0), fps), 0);
    assert_eq!(total_frames(&animated(-1.0), fps), 0);
}

#[test]
fn render_frame_rejects_out_of_range() {
    let cfg = RenderConfig::default();
    let ctx = FrameContext::new(&cfg);
    let s = animated(1.0);
    assert!(render_frame(&s, FrameIndex(29), &ctx).is_ok());
    let err = render_frame(&s, FrameIndex(30), &ctx).unwrap_err();
    assert!(matches!(err, ReelError::Validation(_)));
}

#[test]
fn sequential_render_delivers_every_frame_in_order() {
    let cfg = RenderConfig::default();
    let ctx = FrameContext::new(&cfg);
    let mut sink = InMemorySink::new();
    let stats = render_scene(&animated(1.0), &ctx, &RenderOpts::default(), &mut sink).unwrap();

    assert_eq!(
        stats,
        RenderStats {
            frames_total: 30,
            frames_rendered: 30,
            frames_elided: 0,
        }
    );
    assert!(sink.is_finished());
    assert_eq!(sink.config().unwrap().total_frames, 30);
    for (i, (idx, frame)) in sink.frames.iter().enumerate() {
        assert_eq!(idx.0, i as u64);
        assert_eq!(frame.frame.0, i as u64);
        assert_eq!(frame.mode, SceneMode::Elements);
    }
}

#[test]
fn parallel_render_matches_sequential() {
    let cfg = RenderConfig::default();
    let ctx = FrameContext::new(&cfg);
    let s = animated(2.0);

    let mut seq = InMemorySink::new();
    render_scene(&s, &ctx, &RenderOpts::default(), &mut seq).unwrap();

    let mut par = InMemorySink::new();
    let opts = RenderOpts {
        parallel: true,
        chunk_size: 7,
        threads: Some(2),
        static_frame_elision: false,
    };
    let stats = render_scene(&s, &ctx, &opts, &mut par).unwrap();
    assert_eq!(stats.frames_total, 60);
    assert_eq!(seq.frames, par.frames);
}

#[test]
fn elision_counts_static_frames() {
    let cfg = RenderConfig::default();
    let ctx = FrameContext::new(&cfg);
    let opts = RenderOpts {
        parallel: true,
        chunk_size: 1024,
        threads: Some(2),
        static_frame_elision: true,
    };
    let mut sink = InMemorySink::new();
    let stats = render_scene(&still(1.0), &ctx, &opts, &mut sink).unwrap();
    assert_eq!(stats.frames_total, 30);
    assert_eq!(stats.frames_rendered, 1);
    assert_eq!(stats.frames_elided, 29);
    assert_eq!(sink.frames.len(), 30);
}

#[test]
fn elision_is_per_chunk() {
    let cfg = RenderConfig::default();
    let ctx = FrameContext::new(&cfg);
    let opts = RenderOpts {
        chunk_size: 10,
        static_frame_elision: true,
        ..RenderOpts::default()
    };
    let mut sink = InMemorySink::new();
    let stats = render_scene(&still(1.0), &ctx, &opts, &mut sink).unwrap();
    assert_eq!(stats.frames_rendered, 3);
    assert_eq!(stats.frames_elided, 27);
}

#[test]
fn zero_threads_is_rejected() {
    let cfg = RenderConfig::default();
    let ctx = FrameContext::new(&cfg);
    let opts = RenderOpts {
        parallel: true,
        threads: Some(0),
        ..RenderOpts::default()
    };
    let mut sink = InMemorySink::new();
    let err = render_scene(&animated(1.0), &ctx, &opts, &mut sink).unwrap_err();
    assert!(matches!(err, ReelError::Validation(_)));
    assert!(sink.config().is_none());
}

#[test]
fn empty_scene_is_rejected() {
    let cfg = RenderConfig::default();
    let ctx = FrameContext::new(&cfg);
    let mut sink = InMemorySink::new();
    let err = render_scene(&animated(0.0), &ctx, &RenderOpts::default(), &mut sink).unwrap_err();
    assert!(matches!(err, ReelError::Validation(_)));
}

#[test]
fn range_past_end_is_rejected() {
    let cfg = RenderConfig::default();
    let ctx = FrameContext::new(&cfg);
    let mut sink = InMemorySink::new();
    let range = FrameRange {
        start: FrameIndex(20),
        end: FrameIndex(31),
    };
    assert!(render_scene_range(&animated(1.0), range, &ctx, &RenderOpts::default(), &mut sink).is_err());

    let range = FrameRange {
        start: FrameIndex(20),
        end: FrameIndex(30),
    };
    render_scene_range(&animated(1.0), range, &ctx, &RenderOpts::default(), &mut sink).unwrap();
    assert_eq!(sink.frames.first().unwrap().0, FrameIndex(20));
    assert_eq!(sink.frames.len(), 10);
}

#[test]
fn timeline_uses_global_indices_and_local_frames() {
    let cfg = RenderConfig::default();
    let ctx = FrameContext::new(&cfg);
    let timeline = Timeline::new(vec![animated(1.0), still(0.5)], ctx.fps);
    let mut sink = InMemorySink::new();
    let opts = RenderOpts {
        parallel: true,
        chunk_size: 8,
        threads: Some(3),
        static_frame_elision: false,
    };
    let stats = render_timeline(&timeline, &ctx, &opts, &mut sink).unwrap();
    assert_eq!(stats.frames_total, 45);

    let (idx, frame) = &sink.frames[30];
    assert_eq!(idx.0, 30);
    assert_eq!(frame.frame.0, 0);
    let (idx, frame) = sink.frames.last().unwrap();
    assert_eq!(idx.0, 44);
    assert_eq!(frame.frame.0, 14);
}

#[test]
fn timeline_fps_must_match_context() {
    let cfg = RenderConfig::default();
    let ctx = FrameContext::new(&cfg);
    let timeline = Timeline::new(vec![animated(1.0)], Fps::integer(24).unwrap());
    let mut sink = InMemorySink::new();
    assert!(render_timeline(&timeline, &ctx, &RenderOpts::default(), &mut sink).is_err());
}
