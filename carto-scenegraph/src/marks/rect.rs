use super::check_channel_len;
use super::mark::SceneMark;
use crate::error::CartoSceneGraphError;
use carto_common::color::Color;
use carto_common::value::ScalarOrArray;
use serde::{Deserialize, Serialize};

/// Axis aligned rectangles with top-left corner (x, y)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SceneRectMark {
    pub name: String,
    pub clip: bool,
    pub len: u32,
    pub x: ScalarOrArray<f32>,
    pub y: ScalarOrArray<f32>,
    pub width: ScalarOrArray<f32>,
    pub height: ScalarOrArray<f32>,
    pub fill: ScalarOrArray<Color>,
    pub stroke: ScalarOrArray<Color>,
    pub stroke_width: ScalarOrArray<f32>,
    pub indices: Option<Vec<usize>>,
    pub zindex: Option<i32>,
}

impl SceneRectMark {
    pub fn x_iter(&self) -> Box<dyn Iterator<Item = &f32> + '_> {
        self.x.as_iter(self.len as usize, self.indices.as_ref())
    }

    pub fn y_iter(&self) -> Box<dyn Iterator<Item = &f32> + '_> {
        self.y.as_iter(self.len as usize, self.indices.as_ref())
    }

    pub fn width_iter(&self) -> Box<dyn Iterator<Item = &f32> + '_> {
        self.width.as_iter(self.len as usize, self.indices.as_ref())
    }

    pub fn height_iter(&self) -> Box<dyn Iterator<Item = &f32> + '_> {
        self.height
            .as_iter(self.len as usize, self.indices.as_ref())
    }

    pub fn fill_iter(&self) -> Box<dyn Iterator<Item = &Color> + '_> {
        self.fill.as_iter(self.len as usize, self.indices.as_ref())
    }

    pub fn stroke_iter(&self) -> Box<dyn Iterator<Item = &Color> + '_> {
        self.stroke
            .as_iter(self.len as usize, self.indices.as_ref())
    }

    pub fn stroke_width_iter(&self) -> Box<dyn Iterator<Item = &f32> + '_> {
        self.stroke_width
            .as_iter(self.len as usize, self.indices.as_ref())
    }

    pub fn validate(&self) -> Result<(), CartoSceneGraphError> {
        check_channel_len(&self.name, "x", self.len, &self.x)?;
        check_channel_len(&self.name, "y", self.len, &self.y)?;
        check_channel_len(&self.name, "width", self.len, &self.width)?;
        check_channel_len(&self.name, "height", self.len, &self.height)?;
        check_channel_len(&self.name, "fill", self.len, &self.fill)?;
        check_channel_len(&self.name, "stroke", self.len, &self.stroke)
    }
}

impl Default for SceneRectMark {
    fn default() -> Self {
        Self {
            name: "rect_mark".to_string(),
            clip: true,
            len: 1,
            x: ScalarOrArray::new_scalar(0.0),
            y: ScalarOrArray::new_scalar(0.0),
            width: ScalarOrArray::new_scalar(1.0),
            height: ScalarOrArray::new_scalar(1.0),
            fill: ScalarOrArray::new_scalar(Color::transparent()),
            stroke: ScalarOrArray::new_scalar(Color::transparent()),
            stroke_width: ScalarOrArray::new_scalar(1.0),
            indices: None,
            zindex: None,
        }
    }
}

impl From<SceneRectMark> for SceneMark {
    fn from(mark: SceneRectMark) -> Self {
        SceneMark::Rect(mark)
    }
}
