pub mod error;
pub mod svg;

pub use svg::svg_to_png;
