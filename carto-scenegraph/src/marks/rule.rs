use super::check_channel_len;
use super::mark::SceneMark;
use crate::error::CartoSceneGraphError;
use carto_common::color::Color;
use carto_common::types::StrokeCap;
use carto_common::value::ScalarOrArray;
use serde::{Deserialize, Serialize};

/// Straight line segments from (x, y) to (x2, y2)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SceneRuleMark {
    pub name: String,
    pub clip: bool,
    pub len: u32,
    pub stroke_dash: Option<Vec<f32>>,
    pub x: ScalarOrArray<f32>,
    pub y: ScalarOrArray<f32>,
    pub x2: ScalarOrArray<f32>,
    pub y2: ScalarOrArray<f32>,
    pub stroke: ScalarOrArray<Color>,
    pub stroke_width: ScalarOrArray<f32>,
    pub stroke_cap: StrokeCap,
    pub indices: Option<Vec<usize>>,
    pub zindex: Option<i32>,
}

impl SceneRuleMark {
    pub fn x_iter(&self) -> Box<dyn Iterator<Item = &f32> + '_> {
        self.x.as_iter(self.len as usize, self.indices.as_ref())
    }
    pub fn y_iter(&self) -> Box<dyn Iterator<Item = &f32> + '_> {
        self.y.as_iter(self.len as usize, self.indices.as_ref())
    }
    pub fn x2_iter(&self) -> Box<dyn Iterator<Item = &f32> + '_> {
        self.x2.as_iter(self.len as usize, self.indices.as_ref())
    }
    pub fn y2_iter(&self) -> Box<dyn Iterator<Item = &f32> + '_> {
        self.y2.as_iter(self.len as usize, self.indices.as_ref())
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
        check_channel_len(&self.name, "x2", self.len, &self.x2)?;
        check_channel_len(&self.name, "y2", self.len, &self.y2)?;
        check_channel_len(&self.name, "stroke", self.len, &self.stroke)?;
        check_channel_len(&self.name, "stroke_width", self.len, &self.stroke_width)
    }
}

impl Default for SceneRuleMark {
    fn default() -> Self {
        Self {
            name: "rule_mark".to_string(),
            clip: true,
            len: 1,
            stroke_dash: None,
            x: ScalarOrArray::new_scalar(0.0),
            y: ScalarOrArray::new_scalar(0.0),
            x2: ScalarOrArray::new_scalar(0.0),
            y2: ScalarOrArray::new_scalar(0.0),
            stroke: ScalarOrArray::new_scalar(Color::black()),
            stroke_width: ScalarOrArray::new_scalar(1.0),
            stroke_cap: StrokeCap::Butt,
            indices: None,
            zindex: None,
        }
    }
}

impl From<SceneRuleMark> for SceneMark {
    fn from(mark: SceneRuleMark) -> Self {
        SceneMark::Rule(mark)
    }
}
