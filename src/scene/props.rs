use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::foundation::core::Canvas;
use crate::foundation::error::{ReelError, ReelResult};
use crate::scene::model::SceneData;

/// Props file handed from the generation stage to the renderer: one scene plus the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenePropsFile {
    /// The scene to render.
    pub scene: SceneData,
    /// Canvas width override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// Canvas height override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

impl ScenePropsFile {
    /// Wrap a bare scene.
    pub fn bare(scene: SceneData) -> Self {
        Self {
            scene,
            width: None,
            height: None,
        }
    }

    /// Parse either the `{scene, width, height}` envelope or a bare scene object.
    pub fn from_json_value(v: serde_json::Value) -> ReelResult<Self> {
        if v.get("scene").is_some() {
            serde_json::from_value(v)
                .map_err(|e| ReelError::serde(format!("parse scene props JSON: {e}")))
        } else {
            let scene = serde_json::from_value(v)
                .map_err(|e| ReelError::serde(format!("parse scene JSON: {e}")))?;
            Ok(Self::bare(scene))
        }
    }

    /// Parse from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> ReelResult<Self> {
        let v: serde_json::Value = serde_json::from_reader(r)
            .map_err(|e| ReelError::serde(format!("parse scene props JSON: {e}")))?;
        Self::from_json_value(v)
    }

    /// Parse from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> ReelResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ReelError::validation(format!("open scene props '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// `fallback` with any width/height carried by the file applied on top.
    pub fn canvas_or(&self, fallback: Canvas) -> ReelResult<Canvas> {
        Canvas::new(
            self.width.unwrap_or(fallback.width),
            self.height.unwrap_or(fallback.height),
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/props.rs"]
mod tests;
