#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::VariantNames;

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, VariantNames)]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "snake_case")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, VariantNames)]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[strum(serialize_all = "snake_case")]
pub enum TextBaseline {
    #[default]
    Alphabetic,
    Top,
    Middle,
    Bottom,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, VariantNames)]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "snake_case")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

/// Core trait for text measurement functionality
pub trait TextMeasurer: Send + Sync {
    /// Measures the bounding dimensions for a text string with given configuration
    fn measure_text_bounds(&self, config: &TextMeasurementConfig) -> TextBounds;
}

/// Configuration needed for text measurement
#[derive(Debug, Clone)]
pub struct TextMeasurementConfig<'a> {
    pub text: &'a str,
    /// Font size in points
    pub font_size: f32,
    pub font_weight: FontWeight,
}

/// Results from text measurement
#[derive(Debug, Clone, PartialEq)]
pub struct TextBounds {
    pub width: f32,
    pub height: f32,
    /// Distance from top to baseline
    pub ascent: f32,
    /// Distance from bottom to baseline
    pub descent: f32,
}

impl TextBounds {
    /// Top-left corner of the text box given the anchor position, alignment and baseline
    pub fn calculate_origin(
        &self,
        position: [f32; 2],
        align: TextAlign,
        baseline: TextBaseline,
    ) -> [f32; 2] {
        let x = match align {
            TextAlign::Left => position[0],
            TextAlign::Center => position[0] - self.width / 2.0,
            TextAlign::Right => position[0] - self.width,
        };

        let y = match baseline {
            TextBaseline::Alphabetic => position[1] - self.ascent,
            TextBaseline::Top => position[1],
            TextBaseline::Middle => position[1] - self.height / 2.0,
            TextBaseline::Bottom => position[1] - self.height,
        };

        [x, y]
    }
}

/// Font independent measurer based on average glyph advance.
///
/// Good enough for laying out legends, where text only needs to fit inside
/// a frame, without loading any font data.
#[derive(Debug, Clone, Copy)]
pub struct ApproxTextMeasurer {
    pub char_width: f32,
    pub bold_factor: f32,
    pub ascent: f32,
    pub descent: f32,
}

impl Default for ApproxTextMeasurer {
    fn default() -> Self {
        Self {
            char_width: 0.6,
            bold_factor: 1.1,
            ascent: 0.8,
            descent: 0.2,
        }
    }
}

impl TextMeasurer for ApproxTextMeasurer {
    fn measure_text_bounds(&self, config: &TextMeasurementConfig) -> TextBounds {
        let weight = match config.font_weight {
            FontWeight::Normal => 1.0,
            FontWeight::Bold => self.bold_factor,
        };
        let chars = config.text.chars().count() as f32;
        TextBounds {
            width: chars * config.font_size * self.char_width * weight,
            height: config.font_size * (self.ascent + self.descent),
            ascent: config.font_size * self.ascent,
            descent: config.font_size * self.descent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn test_approx_measure_scales_with_font_size() {
        let measurer = ApproxTextMeasurer::default();
        let small = measurer.measure_text_bounds(&TextMeasurementConfig {
            text: "Lakes",
            font_size: 10.0,
            font_weight: FontWeight::Normal,
        });
        let large = measurer.measure_text_bounds(&TextMeasurementConfig {
            text: "Lakes",
            font_size: 20.0,
            font_weight: FontWeight::Normal,
        });
        assert_approx_eq!(f32, small.width, 30.0);
        assert_approx_eq!(f32, large.width, 2.0 * small.width);
        assert_approx_eq!(f32, small.height, 10.0);
    }

    #[test]
    fn test_calculate_origin() {
        let bounds = TextBounds {
            width: 20.0,
            height: 10.0,
            ascent: 8.0,
            descent: 2.0,
        };
        assert_eq!(
            bounds.calculate_origin([100.0, 50.0], TextAlign::Center, TextBaseline::Middle),
            [90.0, 45.0]
        );
        assert_eq!(
            bounds.calculate_origin([100.0, 50.0], TextAlign::Right, TextBaseline::Alphabetic),
            [80.0, 42.0]
        );
    }
}
