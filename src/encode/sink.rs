use std::io::Write;

use serde::Serialize;

use crate::eval::compositor::SceneFrame;
use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::error::{ReelError, ReelResult};

/// Configuration handed to a [`LayerSink`] before the first frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SinkConfig {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Output frame rate.
    pub fps: Fps,
    /// Number of frames that will be pushed.
    pub total_frames: u64,
}

/// Consumer of resolved frames.
///
/// Ordering contract: `push_frame` is called in strictly increasing `FrameIndex` order, once per
/// frame of the render, between one `begin` and one `end`.
pub trait LayerSink {
    /// Called once before any frame.
    fn begin(&mut self, cfg: SinkConfig) -> ReelResult<()>;
    /// Called once per frame, in order.
    fn push_frame(&mut self, idx: FrameIndex, frame: &SceneFrame) -> ReelResult<()>;
    /// Called once after the last frame.
    fn end(&mut self) -> ReelResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    ended: bool,
    /// Frames in render order.
    pub frames: Vec<(FrameIndex, SceneFrame)>,
}

impl InMemorySink {
    /// Empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration received by the last `begin`.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg
    }

    /// Whether `end` was called after the last `begin`.
    pub fn is_finished(&self) -> bool {
        self.ended
    }
}

impl LayerSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> ReelResult<()> {
        self.cfg = Some(cfg);
        self.ended = false;
        self.frames.clear();
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &SceneFrame) -> ReelResult<()> {
        self.frames.push((idx, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> ReelResult<()> {
        self.ended = true;
        Ok(())
    }
}

#[derive(Serialize)]
struct JsonLine<'a> {
    index: u64,
    #[serde(flatten)]
    frame: &'a SceneFrame,
}

/// Writes one JSON object per frame, newline separated.
///
/// Each line is the serialized [`SceneFrame`] plus an `index` field carrying the render-wide
/// frame index (which differs from the scene-local `frame` when rendering a timeline).
#[derive(Debug)]
pub struct JsonLinesSink<W: Write> {
    out: W,
    lines: u64,
}

impl<W: Write> JsonLinesSink<W> {
    /// Sink writing into `out`. Wrap files in a `BufWriter`.
    pub fn new(out: W) -> Self {
        Self { out, lines: 0 }
    }

    /// Lines written since the last `begin`.
    pub fn lines_written(&self) -> u64 {
        self.lines
    }

    /// Give back the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> LayerSink for JsonLinesSink<W> {
    fn begin(&mut self, _cfg: SinkConfig) -> ReelResult<()> {
        self.lines = 0;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &SceneFrame) -> ReelResult<()> {
        let line = JsonLine {
            index: idx.0,
            frame,
        };
        serde_json::to_writer(&mut self.out, &line)
            .map_err(|e| ReelError::serde(format!("frame {}: {e}", idx.0)))?;
        self.out.write_all(b"\n")?;
        self.lines += 1;
        Ok(())
    }

    fn end(&mut self) -> ReelResult<()> {
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
