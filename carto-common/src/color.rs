use crate::error::CartoCommonError;
use ordered_float::OrderedFloat;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Straight (non-premultiplied) RGBA color with components in [0, 1]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color(pub [f32; 4]);

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0
            .iter()
            .for_each(|v| OrderedFloat::from(*v).hash(state));
    }
}

impl Color {
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self([r, g, b, a])
    }

    pub const fn black() -> Self {
        Self([0.0, 0.0, 0.0, 1.0])
    }

    pub const fn white() -> Self {
        Self([1.0, 1.0, 1.0, 1.0])
    }

    pub const fn transparent() -> Self {
        Self([0.0, 0.0, 0.0, 0.0])
    }

    pub fn alpha(&self) -> f32 {
        self.0[3]
    }

    pub fn is_transparent(&self) -> bool {
        self.0[3] <= 0.0
    }

    /// Copy of this color with the alpha channel multiplied by `alpha`
    pub fn with_alpha(&self, alpha: f32) -> Self {
        let [r, g, b, a] = self.0;
        Self([r, g, b, a * alpha.clamp(0.0, 1.0)])
    }

    /// `rgb(r,g,b)` form, opacity is written separately
    pub fn to_css_rgb(&self) -> String {
        let [r, g, b, _] = self.0;
        format!(
            "rgb({},{},{})",
            to_u8(r),
            to_u8(g),
            to_u8(b)
        )
    }

    /// `rgba(r,g,b,a)`, used for the string form
    pub fn to_css_rgba(&self) -> String {
        let [r, g, b, a] = self.0;
        format!("rgba({},{},{},{})", to_u8(r), to_u8(g), to_u8(b), a)
    }
}

fn to_u8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Parse a color specification.
///
/// Accepts everything CSS does (named colors, `#rgb`, `#rrggbb`, `rgb()`,
/// `rgba()`, `hsl()`), the single letter codes `b g r c m y k w`, and grey
/// levels written as a number in [0, 1] (`"0.5"`).
pub fn parse_color(spec: &str) -> Result<Color, CartoCommonError> {
    let spec = spec.trim();
    if let Some(color) = short_code_color(spec) {
        return Ok(color);
    }

    if let Ok(level) = spec.parse::<f32>() {
        return if (0.0..=1.0).contains(&level) {
            Ok(Color([level, level, level, 1.0]))
        } else {
            Err(CartoCommonError::InvalidColor(spec.to_string()))
        };
    }

    let c = spec
        .parse::<css_color_parser::Color>()
        .map_err(|_| CartoCommonError::InvalidColor(spec.to_string()))?;
    Ok(Color([
        c.r as f32 / 255.0,
        c.g as f32 / 255.0,
        c.b as f32 / 255.0,
        c.a,
    ]))
}

fn short_code_color(spec: &str) -> Option<Color> {
    let rgb = match spec {
        "b" => [0.0, 0.0, 1.0],
        "g" => [0.0, 0.5, 0.0],
        "r" => [1.0, 0.0, 0.0],
        "c" => [0.0, 0.75, 0.75],
        "m" => [0.75, 0.0, 0.75],
        "y" => [0.75, 0.75, 0.0],
        "k" => [0.0, 0.0, 0.0],
        "w" => [1.0, 1.0, 1.0],
        _ => return None,
    };
    Some(Color([rgb[0], rgb[1], rgb[2], 1.0]))
}

impl FromStr for Color {
    type Err = CartoCommonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color(s)
    }
}

impl TryFrom<String> for Color {
    type Error = CartoCommonError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        parse_color(&value)
    }
}

impl From<Color> for String {
    fn from(value: Color) -> Self {
        value.to_css_rgba()
    }
}

impl From<[f32; 4]> for Color {
    fn from(value: [f32; 4]) -> Self {
        Self(value)
    }
}
