use super::{fmt_num, paint_attrs, path_data, stroke_attrs};
use carto_scenegraph::marks::path::ScenePathMark;
use itertools::izip;

/// One `<path>` element per instance, translated to `origin`
pub(crate) fn path_elements(mark: &ScenePathMark, origin: [f32; 2]) -> Vec<String> {
    let transform = if origin == [0.0, 0.0] {
        String::new()
    } else {
        format!(
            r#" transform="translate({},{})""#,
            fmt_num(origin[0]),
            fmt_num(origin[1])
        )
    };
    let line_attrs = format!(
        r#" stroke-linecap="{}" stroke-linejoin="{}""#,
        mark.stroke_cap.as_svg_str(),
        mark.stroke_join.as_svg_str()
    );

    izip!(mark.path_iter(), mark.fill_iter(), mark.stroke_iter())
        .map(|(path, fill, stroke)| {
            let stroke = stroke_attrs(stroke, mark.stroke_width);
            let line_attrs = if stroke.is_empty() { "" } else { line_attrs.as_str() };
            format!(
                r#"<path d="{}"{} fill-rule="evenodd"{}{}{}/>"#,
                path_data(path),
                paint_attrs("fill", fill),
                stroke,
                line_attrs,
                transform
            )
        })
        .collect()
}
