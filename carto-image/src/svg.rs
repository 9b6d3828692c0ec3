use lazy_static::lazy_static;
use resvg::render;
use std::sync::Arc;
use usvg::fontdb::Database;

use crate::error::CartoImageError;

lazy_static! {
    pub static ref FONT_DB: Arc<Database> = Arc::new(init_font_db());
}

fn init_font_db() -> Database {
    let mut font_database = Database::new();
    font_database.load_system_fonts();
    log::debug!("loaded {} font faces", font_database.len());
    font_database
}

/// Rasterize an SVG document to PNG bytes.
///
/// `scale` converts SVG user units into pixels, so a document sized in
/// points rendered with `scale = dpi / 72` gives an image at `dpi`.
#[tracing::instrument(skip_all)]
pub fn svg_to_png(svg: &str, scale: f32) -> Result<Vec<u8>, CartoImageError> {
    let pixmap = svg_to_pixmap(svg, scale)?;
    pixmap
        .encode_png()
        .map_err(|err| CartoImageError::InternalError(format!("png encoding failed: {err}")))
}

/// Rasterize an SVG document to an RGBA image
pub fn svg_to_rgba_image(svg: &str, scale: f32) -> Result<image::RgbaImage, CartoImageError> {
    let png = svg_to_png(svg, scale)?;
    Ok(image::load_from_memory(&png)?.into_rgba8())
}

fn svg_to_pixmap(svg: &str, scale: f32) -> Result<tiny_skia::Pixmap, CartoImageError> {
    let xml_opt = usvg::roxmltree::ParsingOptions {
        allow_dtd: true,
        ..Default::default()
    };
    let opts = usvg::Options {
        fontdb: FONT_DB.clone(),
        ..Default::default()
    };
    let doc = usvg::roxmltree::Document::parse_with_options(svg, xml_opt)?;
    let rtree = usvg::Tree::from_xmltree(&doc, &opts)?;

    let width = (rtree.size().width() * scale).round() as u32;
    let height = (rtree.size().height() * scale).round() as u32;
    let mut pixmap =
        tiny_skia::Pixmap::new(width, height).ok_or(CartoImageError::InvalidSize { width, height })?;

    let transform = tiny_skia::Transform::from_scale(scale, scale);
    render(&rtree, transform, &mut pixmap.as_mut());
    Ok(pixmap)
}
