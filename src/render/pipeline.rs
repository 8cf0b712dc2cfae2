use std::collections::HashSet;

use rayon::prelude::*;

use crate::compile::fingerprint::{FrameFingerprint, fingerprint_frame};
use crate::encode::sink::{LayerSink, SinkConfig};
use crate::eval::compositor::{FrameContext, SceneFrame, compose};
use crate::foundation::core::{Fps, FrameIndex, FrameRange};
use crate::foundation::error::{ReelError, ReelResult};
use crate::scene::model::SceneData;
use crate::scene::timeline::Timeline;

/// Options controlling range rendering.
#[derive(Clone, Debug)]
pub struct RenderOpts {
    /// Resolve frames on a dedicated rayon pool.
    pub parallel: bool,
    /// Frames resolved per batch before they are handed to the sink.
    pub chunk_size: usize,
    /// Override the number of rayon worker threads. `None` uses rayon defaults.
    pub threads: Option<usize>,
    /// Count frames that repeat an earlier frame of the same chunk.
    pub static_frame_elision: bool,
}

impl Default for RenderOpts {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_size: 64,
            threads: None,
            static_frame_elision: false,
        }
    }
}

/// Range render statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct RenderStats {
    /// Frames delivered to the sink.
    pub frames_total: u64,
    /// Frames with a picture not seen earlier in their chunk.
    pub frames_rendered: u64,
    /// Frames identical to an earlier frame of their chunk (only counted with elision on).
    pub frames_elided: u64,
}

impl RenderStats {
    fn absorb(&mut self, other: RenderStats) {
        self.frames_total += other.frames_total;
        self.frames_rendered += other.frames_rendered;
        self.frames_elided += other.frames_elided;
    }
}

/// Frame count of `scene` at `fps`: `ceil(duration * fps)`, zero for unusable durations.
pub fn total_frames(scene: &SceneData, fps: Fps) -> u64 {
    scene.total_frames(fps)
}

/// Resolve one frame, rejecting frames outside `[0, total_frames)`.
pub fn render_frame(
    scene: &SceneData,
    frame: FrameIndex,
    ctx: &FrameContext<'_>,
) -> ReelResult<SceneFrame> {
    let total = total_frames(scene, ctx.fps);
    if frame.0 >= total {
        return Err(ReelError::validation(format!(
            "render_frame frame {} must be within scene duration ({total} frames)",
            frame.0
        )));
    }
    Ok(compose(scene, frame, ctx))
}

/// Resolve every frame of `scene` into `sink`.
pub fn render_scene(
    scene: &SceneData,
    ctx: &FrameContext<'_>,
    opts: &RenderOpts,
    sink: &mut dyn LayerSink,
) -> ReelResult<RenderStats> {
    let total = total_frames(scene, ctx.fps);
    render_scene_range(
        scene,
        FrameRange {
            start: FrameIndex(0),
            end: FrameIndex(total),
        },
        ctx,
        opts,
        sink,
    )
}

/// Resolve `range` of `scene` into `sink`.
///
/// The sink receives frames in strictly increasing index order whether or not `parallel` is
/// set.
#[tracing::instrument(
    skip(scene, ctx, opts, sink),
    fields(scene = scene.scene_number, start = range.start.0, end = range.end.0)
)]
pub fn render_scene_range(
    scene: &SceneData,
    range: FrameRange,
    ctx: &FrameContext<'_>,
    opts: &RenderOpts,
    sink: &mut dyn LayerSink,
) -> ReelResult<RenderStats> {
    if range.is_empty() {
        return Err(ReelError::validation(format!(
            "render range must be non-empty (scene {} lasts {}s)",
            scene.scene_number, scene.duration
        )));
    }
    let total = total_frames(scene, ctx.fps);
    if range.end.0 > total {
        return Err(ReelError::validation(format!(
            "render range end {} exceeds scene duration ({total} frames)",
            range.end.0
        )));
    }

    let stats = drive(range, ctx, opts, sink, |f| Ok(compose(scene, FrameIndex(f), ctx)))?;
    tracing::info!(
        frames_total = stats.frames_total,
        frames_rendered = stats.frames_rendered,
        frames_elided = stats.frames_elided,
        "scene rendered"
    );
    Ok(stats)
}

/// Resolve every frame of `timeline` into `sink`, scene after scene.
///
/// Sink indices are timeline-global; each [`SceneFrame`] keeps its scene-local `frame`.
#[tracing::instrument(skip(timeline, ctx, opts, sink), fields(scenes = timeline.scenes().len()))]
pub fn render_timeline(
    timeline: &Timeline,
    ctx: &FrameContext<'_>,
    opts: &RenderOpts,
    sink: &mut dyn LayerSink,
) -> ReelResult<RenderStats> {
    if timeline.fps() != ctx.fps {
        return Err(ReelError::validation(format!(
            "timeline fps {}/{} does not match render fps {}/{}",
            timeline.fps().num,
            timeline.fps().den,
            ctx.fps.num,
            ctx.fps.den
        )));
    }
    let range = FrameRange {
        start: FrameIndex(0),
        end: FrameIndex(timeline.total_frames()),
    };
    if range.is_empty() {
        return Err(ReelError::validation("timeline has no frames"));
    }

    let scenes = timeline.scenes();
    let stats = drive(range, ctx, opts, sink, |f| {
        let (i, local) = timeline.locate(FrameIndex(f)).ok_or_else(|| {
            ReelError::evaluation(format!("timeline frame {f} maps to no scene"))
        })?;
        Ok(compose(&scenes[i], local, ctx))
    })?;
    tracing::info!(
        frames_total = stats.frames_total,
        frames_rendered = stats.frames_rendered,
        frames_elided = stats.frames_elided,
        "timeline rendered"
    );
    Ok(stats)
}

fn drive<F>(
    range: FrameRange,
    ctx: &FrameContext<'_>,
    opts: &RenderOpts,
    sink: &mut dyn LayerSink,
    frame_at: F,
) -> ReelResult<RenderStats>
where
    F: Fn(u64) -> ReelResult<SceneFrame> + Sync,
{
    let chunk_size = normalized_chunk_size(opts.chunk_size).min(range.len_frames());
    let pool = if opts.parallel {
        Some(build_thread_pool(opts.threads)?)
    } else {
        None
    };

    sink.begin(SinkConfig {
        width: ctx.canvas.width,
        height: ctx.canvas.height,
        fps: ctx.fps,
        total_frames: range.len_frames(),
    })?;

    let mut stats = RenderStats::default();
    let mut chunk_start = range.start.0;
    while chunk_start < range.end.0 {
        let chunk_end = (chunk_start + chunk_size).min(range.end.0);
        let frames = match pool.as_ref() {
            Some(pool) => pool.install(|| {
                (chunk_start..chunk_end)
                    .into_par_iter()
                    .map(&frame_at)
                    .collect::<ReelResult<Vec<_>>>()
            })?,
            None => (chunk_start..chunk_end)
                .map(&frame_at)
                .collect::<ReelResult<Vec<_>>>()?,
        };

        stats.absorb(chunk_stats(&frames, opts.static_frame_elision));
        for (f, frame) in (chunk_start..chunk_end).zip(&frames) {
            sink.push_frame(FrameIndex(f), frame)?;
        }
        chunk_start = chunk_end;
    }

    sink.end()?;
    Ok(stats)
}

fn chunk_stats(frames: &[SceneFrame], elision: bool) -> RenderStats {
    let total = frames.len() as u64;
    if !elision {
        return RenderStats {
            frames_total: total,
            frames_rendered: total,
            frames_elided: 0,
        };
    }
    let unique = frames
        .iter()
        .map(fingerprint_frame)
        .collect::<HashSet<FrameFingerprint>>()
        .len() as u64;
    RenderStats {
        frames_total: total,
        frames_rendered: unique,
        frames_elided: total - unique,
    }
}

fn normalized_chunk_size(chunk_size: usize) -> u64 {
    if chunk_size == 0 {
        1
    } else {
        chunk_size as u64
    }
}

fn build_thread_pool(threads: Option<usize>) -> ReelResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(ReelError::validation(
            "render 'threads' must be >= 1 when set",
        ));
    }
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| ReelError::evaluation(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
