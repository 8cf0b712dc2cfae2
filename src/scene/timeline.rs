use crate::foundation::core::{Fps, FrameIndex, FrameRange};
use crate::scene::model::{BackgroundDef, SceneData};

/// Consecutive scenes laid end to end, each sized from its own duration.
#[derive(Debug, Clone)]
pub struct Timeline {
    fps: Fps,
    scenes: Vec<SceneData>,
    ranges: Vec<FrameRange>,
}

impl Timeline {
    /// Lay out `scenes` back to back at `fps`.
    pub fn new(scenes: Vec<SceneData>, fps: Fps) -> Self {
        let mut start = 0u64;
        let ranges = scenes
            .iter()
            .map(|s| {
                let end = start + s.total_frames(fps);
                let r = FrameRange {
                    start: FrameIndex(start),
                    end: FrameIndex(end),
                };
                start = end;
                r
            })
            .collect();
        Self {
            fps,
            scenes,
            ranges,
        }
    }

    /// Frame rate the ranges were derived at.
    pub fn fps(&self) -> Fps {
        self.fps
    }

    /// Scenes in playback order.
    pub fn scenes(&self) -> &[SceneData] {
        &self.scenes
    }

    /// Global frame range of every scene, parallel to [`Timeline::scenes`].
    pub fn ranges(&self) -> &[FrameRange] {
        &self.ranges
    }

    /// Sum of all scene frame counts.
    pub fn total_frames(&self) -> u64 {
        self.ranges.last().map_or(0, |r| r.end.0)
    }

    /// Scene index and scene-local frame for a global frame; `None` past the end.
    ///
    /// Zero-length scenes never own a frame.
    pub fn locate(&self, global: FrameIndex) -> Option<(usize, FrameIndex)> {
        let idx = self.ranges.partition_point(|r| r.end.0 <= global.0);
        let range = self.ranges.get(idx)?;
        range
            .contains(global)
            .then(|| (idx, FrameIndex(global.0 - range.start.0)))
    }
}

/// Run of scenes that share one background image, each playing the next slice of a single
/// continuous camera move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageGroup {
    image_path: String,
}

impl ImageGroup {
    /// Group backed by `image_path`.
    pub fn new(image_path: impl Into<String>) -> Self {
        Self {
            image_path: image_path.into(),
        }
    }

    /// Camera slice `[i/n, (i+1)/n]` for scene `index` of `count`.
    pub fn segment(index: usize, count: usize) -> (f64, f64) {
        if count == 0 {
            return (0.0, 1.0);
        }
        let n = count as f64;
        (index as f64 / n, (index + 1) as f64 / n)
    }

    /// Point every scene at the shared image and hand out consecutive camera slices.
    pub fn assign(&self, scenes: &mut [SceneData]) {
        let count = scenes.len();
        for (i, scene) in scenes.iter_mut().enumerate() {
            let (start, end) = Self::segment(i, count);
            scene.background = BackgroundDef::Image {
                image_path: self.image_path.clone(),
            };
            scene.animation_start = start;
            scene.animation_end = end;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/timeline.rs"]
mod tests;
