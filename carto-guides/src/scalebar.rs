//! Two band 20 km scale bar drawn in projected map coordinates.
//!
//! The bar extends from its anchor point towards negative x: a 20 km black
//! base, a black overlay over the first 10 km and a white band over the
//! second 10 km, labelled `20 km` at the anchor and `0 km` at the far end.
use carto_common::color::Color;
use carto_common::text::{TextAlign, TextBaseline};
use carto_geometry::{MapExtent, MapFrame};
use carto_scenegraph::marks::group::SceneGroup;
use carto_scenegraph::marks::rule::SceneRuleMark;
use carto_scenegraph::marks::text::SceneTextMark;
use itertools::Itertools;

use crate::error::CartoGuidesError;

pub const DEFAULT_SCALE_BAR_ANCHOR: [f64; 2] = [0.92, 0.95];

const BAR_LENGTH: f64 = 20_000.0;
const BAND_LENGTH: f64 = 10_000.0;
const BASE_WIDTH: f32 = 9.0;
const BAND_WIDTH: f32 = 6.0;
const LABEL_OFFSET_Y: f64 = 4_500.0;
const LABEL_FONT_SIZE: f32 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleBarSegment {
    pub start: [f64; 2],
    pub end: [f64; 2],
    /// Line width in points
    pub width: f32,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScaleBarLabel {
    pub text: String,
    pub position: [f64; 2],
    pub font_size: f32,
}

/// Segments and labels of a scale bar, in drawing order
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleBarGeometry {
    /// Reference point the bar hangs off, in map units
    pub anchor_point: [f64; 2],
    pub segments: Vec<ScaleBarSegment>,
    pub labels: Vec<ScaleBarLabel>,
}

/// Compute the scale bar for a map extent.
///
/// The reference point is `sbx = xmin + (1 - ymin) * anchor.x` and
/// `sby = ymin + (ymax - ymin) * anchor.y`. The x term scales the anchor by
/// `1 - ymin`, not by the extent width.
pub fn render_scale_bar(
    extent: &MapExtent,
    anchor: [f64; 2],
) -> Result<ScaleBarGeometry, CartoGuidesError> {
    if extent.is_degenerate() {
        return Err(CartoGuidesError::InvalidArgument(format!(
            "scale bar needs a non-degenerate extent, got {extent:?}"
        )));
    }

    let sbx = extent.xmin + (1.0 - extent.ymin) * anchor[0];
    let sby = extent.ymin + (extent.ymax - extent.ymin) * anchor[1];

    let segments = vec![
        ScaleBarSegment {
            start: [sbx, sby],
            end: [sbx - BAR_LENGTH, sby],
            width: BASE_WIDTH,
            color: Color::black(),
        },
        ScaleBarSegment {
            start: [sbx, sby],
            end: [sbx - BAND_LENGTH, sby],
            width: BAND_WIDTH,
            color: Color::black(),
        },
        ScaleBarSegment {
            start: [sbx - BAND_LENGTH, sby],
            end: [sbx - BAR_LENGTH, sby],
            width: BAND_WIDTH,
            color: Color::white(),
        },
    ];

    let label_y = sby - LABEL_OFFSET_Y;
    let labels = [
        ("20 km", sbx),
        ("10 km", sbx - 12_500.0),
        ("0 km", sbx - 24_500.0),
    ]
    .into_iter()
    .map(|(text, x)| ScaleBarLabel {
        text: text.to_string(),
        position: [x, label_y],
        font_size: LABEL_FONT_SIZE,
    })
    .collect();

    Ok(ScaleBarGeometry {
        anchor_point: [sbx, sby],
        segments,
        labels,
    })
}

impl ScaleBarGeometry {
    pub fn label(&self, text: &str) -> Option<&ScaleBarLabel> {
        self.labels.iter().find(|l| l.text == text)
    }

    /// Rule and text marks for the bar, placed in `frame`
    pub fn to_scene_group(&self, frame: &MapFrame) -> SceneGroup {
        let (starts, ends): (Vec<[f32; 2]>, Vec<[f32; 2]>) = self
            .segments
            .iter()
            .map(|s| {
                (
                    frame.to_canvas(s.start[0], s.start[1]),
                    frame.to_canvas(s.end[0], s.end[1]),
                )
            })
            .unzip();

        let rules = SceneRuleMark {
            name: "scale_bar_segments".to_string(),
            clip: false,
            len: self.segments.len() as u32,
            x: starts.iter().map(|p| p[0]).collect_vec().into(),
            y: starts.iter().map(|p| p[1]).collect_vec().into(),
            x2: ends.iter().map(|p| p[0]).collect_vec().into(),
            y2: ends.iter().map(|p| p[1]).collect_vec().into(),
            stroke: self.segments.iter().map(|s| s.color).collect_vec().into(),
            stroke_width: self.segments.iter().map(|s| s.width).collect_vec().into(),
            ..Default::default()
        };

        let positions = self
            .labels
            .iter()
            .map(|l| frame.to_canvas(l.position[0], l.position[1]))
            .collect_vec();

        let text = SceneTextMark {
            name: "scale_bar_labels".to_string(),
            clip: false,
            len: self.labels.len() as u32,
            text: self.labels.iter().map(|l| l.text.clone()).collect_vec().into(),
            x: positions.iter().map(|p| p[0]).collect_vec().into(),
            y: positions.iter().map(|p| p[1]).collect_vec().into(),
            align: TextAlign::Left.into(),
            baseline: TextBaseline::Alphabetic.into(),
            font_size: self.labels.iter().map(|l| l.font_size).collect_vec().into(),
            ..Default::default()
        };

        SceneGroup {
            name: "scale_bar".to_string(),
            marks: vec![rules.into(), text.into()],
            zindex: Some(9),
            ..Default::default()
        }
    }
}
