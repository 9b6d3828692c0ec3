use crate::marks::mark::SceneMark;
use carto_common::color::Color;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum Clip {
    #[default]
    None,
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
}

impl Clip {
    pub fn maybe_clip(&self, should_clip: bool) -> Self {
        if !should_clip {
            Self::None
        } else {
            self.clone()
        }
    }

    pub fn translate(&self, translate_x: f32, translate_y: f32) -> Self {
        match self {
            Clip::None => Clip::None,
            Clip::Rect {
                x,
                y,
                width,
                height,
            } => Clip::Rect {
                x: *x + translate_x,
                y: *y + translate_y,
                width: *width,
                height: *height,
            },
        }
    }
}

/// A group of marks positioned at `origin`, optionally clipped and framed.
///
/// `fill` and `stroke` draw a background rectangle covering the clip region
/// (or nothing when the group is unclipped and no `frame` size is set).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneGroup {
    pub name: String,
    pub origin: [f32; 2],
    pub clip: Clip,
    pub frame: Option<[f32; 2]>,
    pub marks: Vec<SceneMark>,
    pub fill: Option<Color>,
    pub stroke: Option<Color>,
    pub stroke_width: Option<f32>,
    pub zindex: Option<i32>,
}

impl SceneGroup {
    /// Size of the background rectangle, from `frame` or the clip rectangle
    pub fn background_size(&self) -> Option<[f32; 2]> {
        if self.fill.is_none() && self.stroke.is_none() {
            return None;
        }
        match (&self.frame, &self.clip) {
            (Some(size), _) => Some(*size),
            (None, Clip::Rect { width, height, .. }) => Some([*width, *height]),
            (None, Clip::None) => None,
        }
    }

    /// Child marks in drawing order: stable sort by zindex, unset zindex is 0
    pub fn sorted_marks(&self) -> Vec<&SceneMark> {
        let mut marks: Vec<&SceneMark> = self.marks.iter().collect();
        marks.sort_by_key(|m| m.zindex().unwrap_or(0));
        marks
    }

    /// Returns all of the group paths relative to this group
    pub fn group_paths(&self) -> Vec<Vec<usize>> {
        let mut paths = vec![];
        for (index, mark) in self.marks.iter().enumerate() {
            let SceneMark::Group(group) = mark else {
                continue;
            };
            paths.push(vec![index]);
            for sub_path in group.group_paths() {
                let mut path = vec![index];
                path.extend(sub_path);
                paths.push(path);
            }
        }
        paths
    }
}

impl Default for SceneGroup {
    fn default() -> Self {
        Self {
            name: "".to_string(),
            origin: [0.0, 0.0],
            clip: Default::default(),
            frame: None,
            marks: vec![],
            fill: None,
            stroke: None,
            stroke_width: None,
            zindex: None,
        }
    }
}

impl From<SceneGroup> for SceneMark {
    fn from(mark: SceneGroup) -> Self {
        SceneMark::Group(mark)
    }
}
