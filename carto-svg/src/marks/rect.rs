use super::{fmt_num, paint_attrs, stroke_attrs};
use carto_scenegraph::marks::rect::SceneRectMark;
use itertools::izip;

pub(crate) fn rect_elements(mark: &SceneRectMark, origin: [f32; 2]) -> Vec<String> {
    izip!(
        mark.x_iter(),
        mark.y_iter(),
        mark.width_iter(),
        mark.height_iter(),
        mark.fill_iter(),
        mark.stroke_iter(),
        mark.stroke_width_iter()
    )
    .map(|(x, y, width, height, fill, stroke, stroke_width)| {
        // negative sizes flip the rect about its anchor
        let (x, width) = if *width < 0.0 {
            (x + width, -width)
        } else {
            (*x, *width)
        };
        let (y, height) = if *height < 0.0 {
            (y + height, -height)
        } else {
            (*y, *height)
        };
        format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}"{}{}/>"#,
            fmt_num(x + origin[0]),
            fmt_num(y + origin[1]),
            fmt_num(width),
            fmt_num(height),
            paint_attrs("fill", fill),
            stroke_attrs(stroke, Some(*stroke_width))
        )
    })
    .collect()
}
