pub mod handles;

use std::sync::Arc;

use carto_common::color::Color;
use carto_common::text::{
    FontWeight, TextAlign, TextBaseline, TextMeasurementConfig, TextMeasurer,
};
use carto_common::types::SymbolShape;
use carto_scenegraph::marks::group::SceneGroup;
use carto_scenegraph::marks::mark::SceneMark;
use carto_scenegraph::marks::rect::SceneRectMark;
use carto_scenegraph::marks::rule::SceneRuleMark;
use carto_scenegraph::marks::symbol::SceneSymbolMark;
use carto_scenegraph::marks::text::SceneTextMark;

use crate::error::CartoGuidesError;
use handles::SwatchHandle;

/// One row of a legend
#[derive(Debug, Clone, PartialEq)]
pub enum LegendEntry {
    Swatch(SwatchHandle),
    Line {
        label: String,
        stroke: Color,
        stroke_width: f32,
    },
    Marker {
        label: String,
        shape: SymbolShape,
        fill: Color,
        size: f32,
    },
}

impl LegendEntry {
    pub fn label(&self) -> &str {
        match self {
            LegendEntry::Swatch(handle) => &handle.label,
            LegendEntry::Line { label, .. } => label,
            LegendEntry::Marker { label, .. } => label,
        }
    }
}

impl From<SwatchHandle> for LegendEntry {
    fn from(handle: SwatchHandle) -> Self {
        LegendEntry::Swatch(handle)
    }
}

/// Corner of the map frame the legend is anchored to
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LegendLocation {
    #[default]
    UpperLeft,
    UpperRight,
    LowerLeft,
    LowerRight,
}

pub struct LegendConfig {
    pub title: Option<String>,
    pub entries: Vec<LegendEntry>,
    pub location: LegendLocation,

    pub title_font_size: f32,
    pub font_size: f32,

    /// Width of the map frame the legend is placed inside
    pub inner_width: f32,

    /// Height of the map frame the legend is placed inside
    pub inner_height: f32,

    /// Margin between the legend frame and the map frame edges
    pub outer_margin: f32,

    /// Background of the legend frame, `None` for no frame
    pub frame_fill: Option<Color>,
    pub frame_stroke: Option<Color>,
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self {
            title: None,
            entries: vec![],
            location: Default::default(),
            title_font_size: 14.0,
            font_size: 12.0,
            inner_width: 100.0,
            inner_height: 100.0,
            outer_margin: 6.0,
            frame_fill: Some(Color::white()),
            frame_stroke: Some(Color::rgba(0.8, 0.8, 0.8, 1.0)),
        }
    }
}

/// Spacing of legend contents, as multiples of the entry font size
struct LegendMetrics {
    pad: f32,
    handle_width: f32,
    handle_height: f32,
    text_pad: f32,
    row_height: f32,
    title_height: f32,
}

impl LegendMetrics {
    fn new(config: &LegendConfig) -> Self {
        let fs = config.font_size;
        Self {
            pad: 0.4 * fs,
            handle_width: 2.0 * fs,
            handle_height: 0.7 * fs,
            text_pad: 0.8 * fs,
            row_height: 1.5 * fs,
            title_height: if config.title.is_some() {
                1.5 * config.title_font_size
            } else {
                0.0
            },
        }
    }
}

/// Lay out a framed legend with an optional title and one row per entry.
///
/// The returned group is positioned in the coordinates of the map frame
/// described by `inner_width` and `inner_height`.
pub fn make_legend(
    config: &LegendConfig,
    measurer: &dyn TextMeasurer,
) -> Result<SceneGroup, CartoGuidesError> {
    if config.entries.is_empty() {
        return Err(CartoGuidesError::InvalidArgument(
            "legend needs at least one entry".to_string(),
        ));
    }

    let metrics = LegendMetrics::new(config);

    let label_width = config
        .entries
        .iter()
        .map(|e| {
            measurer
                .measure_text_bounds(&TextMeasurementConfig {
                    text: e.label(),
                    font_size: config.font_size,
                    font_weight: FontWeight::Normal,
                })
                .width
        })
        .fold(0.0_f32, f32::max);

    let title_width = config
        .title
        .as_ref()
        .map(|t| {
            measurer
                .measure_text_bounds(&TextMeasurementConfig {
                    text: t,
                    font_size: config.title_font_size,
                    font_weight: FontWeight::Normal,
                })
                .width
        })
        .unwrap_or(0.0);

    let content_width =
        (metrics.handle_width + metrics.text_pad + label_width).max(title_width);
    let width = content_width + 2.0 * metrics.pad;
    let height = metrics.title_height
        + metrics.row_height * config.entries.len() as f32
        + 2.0 * metrics.pad;

    let origin = match config.location {
        LegendLocation::UpperLeft => [config.outer_margin, config.outer_margin],
        LegendLocation::UpperRight => [
            config.inner_width - config.outer_margin - width,
            config.outer_margin,
        ],
        LegendLocation::LowerLeft => [
            config.outer_margin,
            config.inner_height - config.outer_margin - height,
        ],
        LegendLocation::LowerRight => [
            config.inner_width - config.outer_margin - width,
            config.inner_height - config.outer_margin - height,
        ],
    };

    let mut marks: Vec<SceneMark> = Vec::with_capacity(config.entries.len() + 1);

    if let Some(title) = &config.title {
        marks.push(
            SceneTextMark {
                name: "legend_title".to_string(),
                text: title.clone().into(),
                x: (width / 2.0).into(),
                y: (metrics.pad + metrics.title_height / 2.0).into(),
                align: TextAlign::Center.into(),
                baseline: TextBaseline::Middle.into(),
                font_size: config.title_font_size.into(),
                clip: false,
                ..Default::default()
            }
            .into(),
        );
    }

    for (i, entry) in config.entries.iter().enumerate() {
        let y = metrics.pad + metrics.title_height + metrics.row_height * i as f32;
        marks.push(SceneMark::Group(make_entry_group(
            entry,
            i,
            [metrics.pad, y],
            &metrics,
            config.font_size,
        )));
    }

    Ok(SceneGroup {
        name: "legend".to_string(),
        origin,
        frame: Some([width, height]),
        marks,
        fill: config.frame_fill,
        stroke: config.frame_stroke,
        stroke_width: config.frame_stroke.map(|_| 1.0),
        zindex: Some(10),
        ..Default::default()
    })
}

fn make_entry_group(
    entry: &LegendEntry,
    index: usize,
    origin: [f32; 2],
    metrics: &LegendMetrics,
    font_size: f32,
) -> SceneGroup {
    let center_y = metrics.row_height / 2.0;

    let handle: SceneMark = match entry {
        LegendEntry::Swatch(handle) => SceneRectMark {
            name: format!("legend_swatch_{index}"),
            clip: false,
            x: 0.0.into(),
            y: (center_y - metrics.handle_height / 2.0).into(),
            width: metrics.handle_width.into(),
            height: metrics.handle_height.into(),
            fill: handle.effective_fill().into(),
            stroke: handle.effective_edge().into(),
            stroke_width: 1.0.into(),
            ..Default::default()
        }
        .into(),
        LegendEntry::Line {
            stroke,
            stroke_width,
            ..
        } => SceneRuleMark {
            name: format!("legend_line_{index}"),
            clip: false,
            x: 0.0.into(),
            y: center_y.into(),
            x2: metrics.handle_width.into(),
            y2: center_y.into(),
            stroke: (*stroke).into(),
            stroke_width: (*stroke_width).into(),
            ..Default::default()
        }
        .into(),
        LegendEntry::Marker {
            shape, fill, size, ..
        } => SceneSymbolMark {
            name: format!("legend_marker_{index}"),
            clip: false,
            shape: *shape,
            x: (metrics.handle_width / 2.0).into(),
            y: center_y.into(),
            size: (*size).into(),
            fill: (*fill).into(),
            ..Default::default()
        }
        .into(),
    };

    let text = SceneTextMark {
        name: format!("legend_label_{index}"),
        clip: false,
        text: entry.label().to_string().into(),
        x: (metrics.handle_width + metrics.text_pad).into(),
        y: center_y.into(),
        align: TextAlign::Left.into(),
        baseline: TextBaseline::Middle.into(),
        font_size: font_size.into(),
        ..Default::default()
    };

    SceneGroup {
        name: format!("legend_entry_{index}"),
        origin,
        marks: vec![handle, SceneMark::Text(Arc::new(text))],
        ..Default::default()
    }
}
