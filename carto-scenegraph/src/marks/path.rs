use super::check_channel_len;
use super::mark::SceneMark;
use crate::error::CartoSceneGraphError;
use carto_common::color::Color;
use carto_common::types::{StrokeCap, StrokeJoin};
use carto_common::value::ScalarOrArray;
use lyon_path::Path;
use serde::{Deserialize, Serialize};

/// Arbitrary filled and/or stroked paths in canvas coordinates.
///
/// Map polygons and polylines end up here once they have been projected
/// onto the canvas.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ScenePathMark {
    pub name: String,
    pub clip: bool,
    pub len: u32,
    pub stroke_cap: StrokeCap,
    pub stroke_join: StrokeJoin,
    pub stroke_width: Option<f32>,
    pub path: ScalarOrArray<Path>,
    pub fill: ScalarOrArray<Color>,
    pub stroke: ScalarOrArray<Color>,
    pub indices: Option<Vec<usize>>,
    pub zindex: Option<i32>,
}

impl ScenePathMark {
    pub fn path_iter(&self) -> Box<dyn Iterator<Item = &Path> + '_> {
        self.path.as_iter(self.len as usize, self.indices.as_ref())
    }

    pub fn fill_iter(&self) -> Box<dyn Iterator<Item = &Color> + '_> {
        self.fill.as_iter(self.len as usize, self.indices.as_ref())
    }

    pub fn stroke_iter(&self) -> Box<dyn Iterator<Item = &Color> + '_> {
        self.stroke
            .as_iter(self.len as usize, self.indices.as_ref())
    }

    pub fn validate(&self) -> Result<(), CartoSceneGraphError> {
        check_channel_len(&self.name, "path", self.len, &self.path)?;
        check_channel_len(&self.name, "fill", self.len, &self.fill)?;
        check_channel_len(&self.name, "stroke", self.len, &self.stroke)
    }
}

impl Default for ScenePathMark {
    fn default() -> Self {
        Self {
            name: "path_mark".to_string(),
            clip: true,
            len: 1,
            stroke_cap: Default::default(),
            stroke_join: Default::default(),
            stroke_width: Some(1.0),
            path: ScalarOrArray::new_scalar(Path::default()),
            fill: ScalarOrArray::new_scalar(Color::transparent()),
            stroke: ScalarOrArray::new_scalar(Color::transparent()),
            indices: None,
            zindex: None,
        }
    }
}

impl From<ScenePathMark> for SceneMark {
    fn from(mark: ScenePathMark) -> Self {
        SceneMark::Path(mark)
    }
}
