use super::{fmt_num, paint_attrs, stroke_attrs};
use carto_common::types::SymbolShape;
use carto_scenegraph::marks::symbol::SceneSymbolMark;
use itertools::izip;

pub(crate) fn symbol_elements(mark: &SceneSymbolMark, origin: [f32; 2]) -> Vec<String> {
    izip!(
        mark.x_iter(),
        mark.y_iter(),
        mark.size_iter(),
        mark.fill_iter(),
        mark.stroke_iter()
    )
    .map(|(x, y, size, fill, stroke)| {
        let cx = x + origin[0];
        let cy = y + origin[1];
        let paint = format!(
            "{}{}",
            paint_attrs("fill", fill),
            stroke_attrs(stroke, mark.stroke_width)
        );
        match mark.shape {
            SymbolShape::Square => format!(
                r#"<rect x="{}" y="{}" width="{}" height="{}"{}/>"#,
                fmt_num(cx - size / 2.0),
                fmt_num(cy - size / 2.0),
                fmt_num(*size),
                fmt_num(*size),
                paint
            ),
            SymbolShape::Circle => format!(
                r#"<circle cx="{}" cy="{}" r="{}"{}/>"#,
                fmt_num(cx),
                fmt_num(cy),
                fmt_num(size / 2.0),
                paint
            ),
        }
    })
    .collect()
}
