//! Conversion of data layers into styled scene marks.

use carto_common::color::Color;
use carto_common::text::{TextAlign, TextBaseline};
use carto_common::types::{StrokeJoin, SymbolShape};
use carto_data::Layer;
use carto_geometry::geo_to_lyon::IntoLyonPath;
use carto_geometry::MapFrame;
use carto_scenegraph::marks::path::ScenePathMark;
use carto_scenegraph::marks::symbol::SceneSymbolMark;
use carto_scenegraph::marks::text::SceneTextMark;
use geo_types::Point;
use itertools::Itertools;

/// Fill and outline of a polygon or line layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathStyle {
    pub fill: Color,
    pub stroke: Color,
    pub stroke_width: f32,
}

impl PathStyle {
    pub fn polygon(fill: Color, stroke: Color, stroke_width: f32) -> Self {
        Self {
            fill,
            stroke,
            stroke_width,
        }
    }

    pub fn line(stroke: Color, stroke_width: f32) -> Self {
        Self {
            fill: Color::transparent(),
            stroke,
            stroke_width,
        }
    }
}

/// One path instance per feature with an outline, `None` if the layer has
/// nothing to draw
pub fn path_mark(
    name: &str,
    layer: &Layer,
    frame: &MapFrame,
    style: &PathStyle,
    zindex: i32,
) -> Option<ScenePathMark> {
    let paths = layer
        .geometries()
        .filter_map(|geometry| geometry.to_lyon_path(frame))
        .collect_vec();
    if paths.is_empty() {
        log::warn!("layer `{}` has no drawable geometry", layer.name);
        return None;
    }
    Some(ScenePathMark {
        name: name.to_string(),
        len: paths.len() as u32,
        path: paths.into(),
        fill: style.fill.into(),
        stroke: style.stroke.into(),
        stroke_width: Some(style.stroke_width),
        stroke_join: StrokeJoin::Round,
        zindex: Some(zindex),
        ..Default::default()
    })
}

pub fn symbol_mark(
    name: &str,
    points: &[Point<f64>],
    frame: &MapFrame,
    shape: SymbolShape,
    fill: Color,
    size: f32,
    zindex: i32,
) -> Option<SceneSymbolMark> {
    if points.is_empty() {
        return None;
    }
    let positions = points
        .iter()
        .map(|p| frame.to_canvas(p.x(), p.y()))
        .collect_vec();
    Some(SceneSymbolMark {
        name: name.to_string(),
        len: positions.len() as u32,
        shape,
        x: positions.iter().map(|p| p[0]).collect_vec().into(),
        y: positions.iter().map(|p| p[1]).collect_vec().into(),
        size: size.into(),
        fill: fill.into(),
        zindex: Some(zindex),
        ..Default::default()
    })
}

/// Text placed with its left baseline at each point
pub fn label_mark(
    name: &str,
    labels: &[(Point<f64>, String)],
    frame: &MapFrame,
    font_size: f32,
    zindex: i32,
) -> Option<SceneTextMark> {
    if labels.is_empty() {
        return None;
    }
    let positions = labels
        .iter()
        .map(|(p, _)| frame.to_canvas(p.x(), p.y()))
        .collect_vec();
    Some(SceneTextMark {
        name: name.to_string(),
        len: labels.len() as u32,
        text: labels.iter().map(|(_, t)| t.clone()).collect_vec().into(),
        x: positions.iter().map(|p| p[0]).collect_vec().into(),
        y: positions.iter().map(|p| p[1]).collect_vec().into(),
        align: TextAlign::Left.into(),
        baseline: TextBaseline::Alphabetic.into(),
        font_size: font_size.into(),
        zindex: Some(zindex),
        ..Default::default()
    })
}

/// Capitalize the first letter of every word and lowercase the rest.
///
/// A word starts after any non-alphabetic character, so `"NEWRY-MOURNE"`
/// becomes `"Newry-Mourne"` and `"o'neill"` becomes `"O'Neill"`.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}
