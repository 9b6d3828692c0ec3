use super::check_channel_len;
use super::mark::SceneMark;
use crate::error::CartoSceneGraphError;
use carto_common::color::Color;
use carto_common::types::SymbolShape;
use carto_common::value::ScalarOrArray;
use serde::{Deserialize, Serialize};

/// Point markers centered on (x, y).
///
/// `size` is the marker edge length (or diameter) in points, the same
/// convention as a plotting library's `markersize`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SceneSymbolMark {
    pub name: String,
    pub clip: bool,
    pub len: u32,
    pub shape: SymbolShape,
    pub x: ScalarOrArray<f32>,
    pub y: ScalarOrArray<f32>,
    pub size: ScalarOrArray<f32>,
    pub fill: ScalarOrArray<Color>,
    pub stroke: ScalarOrArray<Color>,
    pub stroke_width: Option<f32>,
    pub indices: Option<Vec<usize>>,
    pub zindex: Option<i32>,
}

impl SceneSymbolMark {
    pub fn x_iter(&self) -> Box<dyn Iterator<Item = &f32> + '_> {
        self.x.as_iter(self.len as usize, self.indices.as_ref())
    }

    pub fn y_iter(&self) -> Box<dyn Iterator<Item = &f32> + '_> {
        self.y.as_iter(self.len as usize, self.indices.as_ref())
    }

    pub fn size_iter(&self) -> Box<dyn Iterator<Item = &f32> + '_> {
        self.size.as_iter(self.len as usize, self.indices.as_ref())
    }

    pub fn fill_iter(&self) -> Box<dyn Iterator<Item = &Color> + '_> {
        self.fill.as_iter(self.len as usize, self.indices.as_ref())
    }

    pub fn stroke_iter(&self) -> Box<dyn Iterator<Item = &Color> + '_> {
        self.stroke
            .as_iter(self.len as usize, self.indices.as_ref())
    }

    pub fn validate(&self) -> Result<(), CartoSceneGraphError> {
        check_channel_len(&self.name, "x", self.len, &self.x)?;
        check_channel_len(&self.name, "y", self.len, &self.y)?;
        check_channel_len(&self.name, "size", self.len, &self.size)?;
        check_channel_len(&self.name, "fill", self.len, &self.fill)?;
        check_channel_len(&self.name, "stroke", self.len, &self.stroke)
    }
}

impl Default for SceneSymbolMark {
    fn default() -> Self {
        Self {
            name: "symbol_mark".to_string(),
            clip: true,
            len: 1,
            shape: Default::default(),
            x: ScalarOrArray::new_scalar(0.0),
            y: ScalarOrArray::new_scalar(0.0),
            size: ScalarOrArray::new_scalar(6.0),
            fill: ScalarOrArray::new_scalar(Color::black()),
            stroke: ScalarOrArray::new_scalar(Color::transparent()),
            stroke_width: None,
            indices: None,
            zindex: None,
        }
    }
}

impl From<SceneSymbolMark> for SceneMark {
    fn from(mark: SceneSymbolMark) -> Self {
        SceneMark::Symbol(mark)
    }
}
