use carto_common::color::Color;

use crate::error::CartoGuidesError;

/// Edge color and transparency shared by every swatch built in one call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleStyle {
    pub edge: Color,
    pub alpha: f32,
}

impl Default for HandleStyle {
    fn default() -> Self {
        Self {
            edge: Color::black(),
            alpha: 1.0,
        }
    }
}

/// A unit square legend symbol for one category
#[derive(Debug, Clone, PartialEq)]
pub struct SwatchHandle {
    pub label: String,
    pub fill: Color,
    pub edge: Color,
    pub alpha: f32,
}

impl SwatchHandle {
    /// Fill as drawn, with the swatch alpha applied
    pub fn effective_fill(&self) -> Color {
        self.fill.with_alpha(self.alpha)
    }

    /// Edge as drawn, with the swatch alpha applied
    pub fn effective_edge(&self) -> Color {
        self.edge.with_alpha(self.alpha)
    }
}

/// Build one swatch per label, cycling through `palette` when it is shorter
/// than `labels`.
pub fn build_handles<S: AsRef<str>>(
    labels: &[S],
    palette: &[Color],
    style: &HandleStyle,
) -> Result<Vec<SwatchHandle>, CartoGuidesError> {
    if labels.is_empty() {
        return Err(CartoGuidesError::InvalidArgument(
            "legend handles need at least one label".to_string(),
        ));
    }
    if palette.is_empty() {
        return Err(CartoGuidesError::InvalidArgument(
            "legend handles need at least one palette color".to_string(),
        ));
    }

    Ok(labels
        .iter()
        .enumerate()
        .map(|(i, label)| SwatchHandle {
            label: label.as_ref().to_string(),
            fill: palette[i % palette.len()],
            edge: style.edge,
            alpha: style.alpha,
        })
        .collect())
}
