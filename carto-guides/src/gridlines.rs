use carto_common::color::Color;
use carto_common::text::{TextAlign, TextBaseline};
use carto_geometry::geo_to_lyon::IntoLyonPath;
use carto_geometry::projection::TransverseMercator;
use carto_geometry::MapFrame;
use carto_scenegraph::marks::group::{Clip, SceneGroup};
use carto_scenegraph::marks::mark::SceneMark;
use carto_scenegraph::marks::path::ScenePathMark;
use carto_scenegraph::marks::text::SceneTextMark;
use geo_types::{Coord, LineString, MultiLineString};
use itertools::Itertools;

use crate::error::CartoGuidesError;

/// Which frame edges get coordinate labels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelSides {
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
}

impl Default for LabelSides {
    fn default() -> Self {
        Self {
            top: true,
            right: true,
            bottom: false,
            left: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GridlineConfig {
    /// Meridians to draw, degrees east
    pub xlocs: Vec<f64>,
    /// Parallels to draw, degrees north
    pub ylocs: Vec<f64>,
    pub stroke: Color,
    pub stroke_width: f32,
    pub labels: LabelSides,
    pub font_size: f32,
    /// Distance between a label and the frame edge, in points
    pub label_offset: f32,
    /// How far past the outermost locations each line is traced, in degrees
    pub overshoot: f64,
    /// Points sampled along each line
    pub samples: usize,
}

impl Default for GridlineConfig {
    fn default() -> Self {
        Self {
            xlocs: vec![-8.0, -7.5, -7.0, -6.5, -6.0, -5.5],
            ylocs: vec![54.0, 54.5, 55.0, 55.5],
            stroke: Color::rgba(0.5, 0.5, 0.5, 0.5),
            stroke_width: 0.5,
            labels: LabelSides::default(),
            font_size: 8.0,
            label_offset: 3.0,
            overshoot: 5.0,
            samples: 200,
        }
    }
}

/// Format a longitude as `8°W`, `7.5°W`, `0°`, `3°E`
pub fn format_longitude(lon: f64) -> String {
    format_degrees(lon, 'E', 'W')
}

/// Format a latitude as `54°N`, `54.5°N`, `0°`, `12°S`
pub fn format_latitude(lat: f64) -> String {
    format_degrees(lat, 'N', 'S')
}

/// Labels are rounded to hundredths of a degree with trailing zeros dropped
fn format_degrees(value: f64, positive: char, negative: char) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    let digits = format!("{:.2}", rounded.abs());
    let number = digits.trim_end_matches('0').trim_end_matches('.');
    if rounded > 0.0 {
        format!("{number}°{positive}")
    } else if rounded < 0.0 {
        format!("{number}°{negative}")
    } else {
        format!("{number}°")
    }
}

fn sample_range(start: f64, end: f64, samples: usize) -> impl Iterator<Item = f64> {
    let step = (end - start) / (samples - 1) as f64;
    (0..samples).map(move |i| start + step * i as f64)
}

fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    values.iter().copied().minmax().into_option()
}

/// A meridian at `lon`, projected
pub fn meridian(
    projection: &TransverseMercator,
    lon: f64,
    lat_range: (f64, f64),
    samples: usize,
) -> LineString<f64> {
    sample_range(lat_range.0, lat_range.1, samples)
        .map(|lat| {
            let (x, y) = projection.forward(lon, lat);
            Coord { x, y }
        })
        .collect()
}

/// A parallel at `lat`, projected
pub fn parallel(
    projection: &TransverseMercator,
    lat: f64,
    lon_range: (f64, f64),
    samples: usize,
) -> LineString<f64> {
    sample_range(lon_range.0, lon_range.1, samples)
        .map(|lon| {
            let (x, y) = projection.forward(lon, lat);
            Coord { x, y }
        })
        .collect()
}

/// First point where `line` crosses the horizontal line `y = level`
fn crossing_at_y(line: &LineString<f64>, level: f64) -> Option<f64> {
    line.lines().find_map(|seg| {
        let (y0, y1) = (seg.start.y, seg.end.y);
        if (y0 - level) * (y1 - level) > 0.0 || y0 == y1 {
            return None;
        }
        let t = (level - y0) / (y1 - y0);
        Some(seg.start.x + t * (seg.end.x - seg.start.x))
    })
}

/// First point where `line` crosses the vertical line `x = level`
fn crossing_at_x(line: &LineString<f64>, level: f64) -> Option<f64> {
    line.lines().find_map(|seg| {
        let (x0, x1) = (seg.start.x, seg.end.x);
        if (x0 - level) * (x1 - level) > 0.0 || x0 == x1 {
            return None;
        }
        let t = (level - x0) / (x1 - x0);
        Some(seg.start.y + t * (seg.end.y - seg.start.y))
    })
}

struct LabelPlacement {
    text: String,
    position: [f32; 2],
    align: TextAlign,
    baseline: TextBaseline,
}

/// Graticule lines clipped to the map frame, with labels along the enabled edges
pub fn make_gridlines(
    config: &GridlineConfig,
    projection: &TransverseMercator,
    frame: &MapFrame,
) -> Result<SceneGroup, CartoGuidesError> {
    if config.samples < 2 {
        return Err(CartoGuidesError::InvalidArgument(format!(
            "gridlines need at least 2 samples per line, got {}",
            config.samples
        )));
    }
    frame.extent.validate()?;

    let extent = &frame.extent;
    let lat_range = min_max(&config.ylocs)
        .map(|(lo, hi)| (lo - config.overshoot, hi + config.overshoot));
    let lon_range = min_max(&config.xlocs)
        .map(|(lo, hi)| (lo - config.overshoot, hi + config.overshoot));

    let meridians = match lat_range {
        Some(range) => config
            .xlocs
            .iter()
            .map(|lon| (*lon, meridian(projection, *lon, range, config.samples)))
            .collect_vec(),
        None => vec![],
    };
    let parallels = match lon_range {
        Some(range) => config
            .ylocs
            .iter()
            .map(|lat| (*lat, parallel(projection, *lat, range, config.samples)))
            .collect_vec(),
        None => vec![],
    };

    let mut labels: Vec<LabelPlacement> = vec![];
    let offset = config.label_offset;
    for (lon, line) in &meridians {
        let text = format_longitude(*lon);
        for (enabled, level, baseline, dy) in [
            (config.labels.top, extent.ymax, TextBaseline::Bottom, -offset),
            (config.labels.bottom, extent.ymin, TextBaseline::Top, offset),
        ] {
            if !enabled {
                continue;
            }
            if let Some(x) = crossing_at_y(line, level).filter(|x| *x >= extent.xmin && *x <= extent.xmax) {
                let [cx, cy] = frame.to_canvas(x, level);
                labels.push(LabelPlacement {
                    text: text.clone(),
                    position: [cx, cy + dy],
                    align: TextAlign::Center,
                    baseline,
                });
            }
        }
    }
    for (lat, line) in &parallels {
        let text = format_latitude(*lat);
        for (enabled, level, align, dx) in [
            (config.labels.right, extent.xmax, TextAlign::Left, offset),
            (config.labels.left, extent.xmin, TextAlign::Right, -offset),
        ] {
            if !enabled {
                continue;
            }
            if let Some(y) = crossing_at_x(line, level).filter(|y| *y >= extent.ymin && *y <= extent.ymax) {
                let [cx, cy] = frame.to_canvas(level, y);
                labels.push(LabelPlacement {
                    text: text.clone(),
                    position: [cx + dx, cy],
                    align,
                    baseline: TextBaseline::Middle,
                });
            }
        }
    }
    log::debug!(
        "gridlines: {} meridians, {} parallels, {} labels",
        meridians.len(),
        parallels.len(),
        labels.len()
    );

    let lines: MultiLineString<f64> = meridians
        .into_iter()
        .chain(parallels)
        .map(|(_, line)| line)
        .collect();

    let mut marks: Vec<SceneMark> = vec![];
    let clipped = SceneGroup {
        name: "gridlines_clipped".to_string(),
        clip: Clip::Rect {
            x: 0.0,
            y: 0.0,
            width: frame.size[0],
            height: frame.size[1],
        },
        marks: lines
            .to_lyon_path(frame)
            .map(|path| {
                vec![ScenePathMark {
                    name: "gridlines".to_string(),
                    path: path.into(),
                    stroke: config.stroke.into(),
                    stroke_width: Some(config.stroke_width),
                    ..Default::default()
                }
                .into()]
            })
            .unwrap_or_default(),
        ..Default::default()
    };
    marks.push(clipped.into());

    if !labels.is_empty() {
        marks.push(
            SceneTextMark {
                name: "gridline_labels".to_string(),
                clip: false,
                len: labels.len() as u32,
                text: labels.iter().map(|l| l.text.clone()).collect_vec().into(),
                x: labels.iter().map(|l| l.position[0]).collect_vec().into(),
                y: labels.iter().map(|l| l.position[1]).collect_vec().into(),
                align: labels.iter().map(|l| l.align).collect_vec().into(),
                baseline: labels.iter().map(|l| l.baseline).collect_vec().into(),
                font_size: config.font_size.into(),
                ..Default::default()
            }
            .into(),
        );
    }

    Ok(SceneGroup {
        name: "gridlines".to_string(),
        marks,
        zindex: Some(5),
        ..Default::default()
    })
}
