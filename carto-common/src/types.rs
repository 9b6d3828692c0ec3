#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::VariantNames;

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, VariantNames)]
#[strum(serialize_all = "snake_case")]
pub enum StrokeCap {
    #[default]
    Butt,
    Round,
    Square,
}

impl StrokeCap {
    pub fn as_svg_str(&self) -> &'static str {
        match self {
            StrokeCap::Butt => "butt",
            StrokeCap::Round => "round",
            StrokeCap::Square => "square",
        }
    }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, VariantNames)]
#[strum(serialize_all = "snake_case")]
pub enum StrokeJoin {
    Bevel,
    #[default]
    Miter,
    Round,
}

impl StrokeJoin {
    pub fn as_svg_str(&self) -> &'static str {
        match self {
            StrokeJoin::Bevel => "bevel",
            StrokeJoin::Miter => "miter",
            StrokeJoin::Round => "round",
        }
    }
}

/// Marker shapes used for point layers and legend entries
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, VariantNames)]
#[strum(serialize_all = "snake_case")]
pub enum SymbolShape {
    #[default]
    Square,
    Circle,
}
