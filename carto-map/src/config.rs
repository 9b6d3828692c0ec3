use std::path::{Path, PathBuf};

use carto_common::canvas::POINTS_PER_INCH;
use carto_common::color::Color;
use carto_guides::scalebar::DEFAULT_SCALE_BAR_ANCHOR;
use serde::{Deserialize, Serialize};

use crate::error::CartoMapError;

fn rgb8(r: u8, g: u8, b: u8) -> Color {
    Color::rgba(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0)
}

/// Shapefile names, relative to the data directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayerFiles {
    pub outline: PathBuf,
    pub towns: PathBuf,
    pub water: PathBuf,
    pub rivers: PathBuf,
    pub counties: PathBuf,
}

impl Default for LayerFiles {
    fn default() -> Self {
        Self {
            outline: "NI_outline.shp".into(),
            towns: "Towns.shp".into(),
            water: "Water.shp".into(),
            rivers: "Rivers.shp".into(),
            counties: "Counties.shp".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapStyles {
    pub outline_edge: Color,
    pub outline_face: Color,

    /// Cycled over the sorted county names
    pub county_palette: Vec<Color>,
    pub county_edge: Color,
    pub county_alpha: f32,
    pub county_stroke_width: f32,

    pub water: Color,
    pub water_stroke_width: f32,

    pub rivers: Color,
    pub river_stroke_width: f32,

    pub towns: Color,
    /// Marker edge length in points
    pub town_marker_size: f32,
    pub town_label_font_size: f32,
}

impl Default for MapStyles {
    fn default() -> Self {
        Self {
            outline_edge: Color::black(),
            outline_face: Color::white(),
            county_palette: vec![
                rgb8(178, 34, 34),   // firebrick
                rgb8(46, 139, 87),   // seagreen
                rgb8(65, 105, 225),  // royalblue
                rgb8(255, 127, 80),  // coral
                rgb8(238, 130, 238), // violet
                rgb8(255, 248, 220), // cornsilk
            ],
            county_edge: Color::black(),
            county_alpha: 0.25,
            county_stroke_width: 1.0,
            water: rgb8(0, 0, 205),
            water_stroke_width: 1.0,
            rivers: rgb8(65, 105, 225),
            river_stroke_width: 0.2,
            towns: Color::rgba(0.5, 0.5, 0.5, 1.0),
            town_marker_size: 6.0,
            town_label_font_size: 8.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegendSettings {
    pub title: String,
    pub title_font_size: f32,
    pub font_size: f32,
    pub lakes_label: String,
    pub rivers_label: String,
    pub towns_label: String,
    /// Width of the rivers legend line, wider than the rivers themselves
    pub line_width: f32,
}

impl Default for LegendSettings {
    fn default() -> Self {
        Self {
            title: "Legend".to_string(),
            title_font_size: 14.0,
            font_size: 12.0,
            lakes_label: "Lakes".to_string(),
            rivers_label: "Rivers".to_string(),
            towns_label: "Towns".to_string(),
            line_width: 1.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridlineSettings {
    pub xlocs: Vec<f64>,
    pub ylocs: Vec<f64>,
    pub font_size: f32,
}

impl Default for GridlineSettings {
    fn default() -> Self {
        Self {
            xlocs: vec![-8.0, -7.5, -7.0, -6.5, -6.0, -5.5],
            ylocs: vec![54.0, 54.5, 55.0, 55.5],
            font_size: 8.0,
        }
    }
}

/// Everything needed to draw the map, loaded from JSON with every field
/// optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub data_dir: PathBuf,
    pub files: LayerFiles,
    pub county_field: String,
    pub town_name_field: String,

    /// UTM zone of the data, northern hemisphere
    pub utm_zone: u8,
    /// Map units added around the outline bounds
    pub extent_padding: f64,

    /// Figure size in inches
    pub figure_size: [f32; 2],
    /// Space around the map frame for gridline labels, in points
    pub margin: f32,
    pub dpi: f32,
    pub output: PathBuf,

    pub scale_bar_anchor: [f64; 2],
    pub styles: MapStyles,
    pub legend: LegendSettings,
    pub gridlines: GridlineSettings,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            data_dir: "data_files".into(),
            files: LayerFiles::default(),
            county_field: "CountyName".to_string(),
            town_name_field: "TOWN_NAME".to_string(),
            utm_zone: 29,
            extent_padding: 5000.0,
            figure_size: [10.0, 10.0],
            margin: 36.0,
            dpi: 200.0,
            output: "map.png".into(),
            scale_bar_anchor: DEFAULT_SCALE_BAR_ANCHOR,
            styles: MapStyles::default(),
            legend: LegendSettings::default(),
            gridlines: GridlineSettings::default(),
        }
    }
}

impl MapConfig {
    pub fn from_json_str(json: &str) -> Result<Self, CartoMapError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CartoMapError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        log::info!("Loaded map config from {}", path.as_ref().display());
        Self::from_json_str(&json)
    }

    /// Figure size in points
    pub fn figure_points(&self) -> [f32; 2] {
        [
            self.figure_size[0] * POINTS_PER_INCH,
            self.figure_size[1] * POINTS_PER_INCH,
        ]
    }

    pub fn layer_path(&self, file: &Path) -> PathBuf {
        self.data_dir.join(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carto_common::color::parse_color;

    #[test]
    fn test_empty_json_is_default() {
        let config = MapConfig::from_json_str("{}").unwrap();
        assert_eq!(config, MapConfig::default());
        assert_eq!(config.figure_points(), [720.0, 720.0]);
    }

    #[test]
    fn test_partial_override() {
        let config = MapConfig::from_json_str(
            r#"{"dpi": 96, "styles": {"water": "navy", "county_palette": ["red", "0.5"]}}"#,
        )
        .unwrap();
        assert_eq!(config.dpi, 96.0);
        assert_eq!(config.styles.water, parse_color("navy").unwrap());
        assert_eq!(config.styles.county_palette.len(), 2);
        assert_eq!(config.styles.county_alpha, 0.25);
        assert_eq!(config.files.counties, PathBuf::from("Counties.shp"));
    }

    #[test]
    fn test_bad_color_is_config_error() {
        let err = MapConfig::from_json_str(r#"{"styles": {"water": "not-a-color"}}"#).unwrap_err();
        assert!(matches!(err, CartoMapError::ConfigError(_)));
    }

    #[test]
    fn test_default_palette_matches_named_colors() {
        let names = ["firebrick", "seagreen", "royalblue", "coral", "violet", "cornsilk"];
        let palette = MapStyles::default().county_palette;
        for (name, color) in names.iter().zip(palette) {
            let expected = parse_color(name).unwrap();
            for (a, b) in expected.0.iter().zip(color.0) {
                assert!((a - b).abs() < 1e-3, "{name}");
            }
        }
    }
}
