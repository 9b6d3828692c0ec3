use super::{fmt_num, paint_attrs};
use carto_scenegraph::marks::rule::SceneRuleMark;
use itertools::{izip, Itertools};

pub(crate) fn rule_elements(mark: &SceneRuleMark, origin: [f32; 2]) -> Vec<String> {
    let dash = match &mark.stroke_dash {
        Some(dash) if !dash.is_empty() => format!(
            r#" stroke-dasharray="{}""#,
            dash.iter().map(|v| fmt_num(*v)).join(",")
        ),
        _ => String::new(),
    };

    izip!(
        mark.x_iter(),
        mark.y_iter(),
        mark.x2_iter(),
        mark.y2_iter(),
        mark.stroke_iter(),
        mark.stroke_width_iter()
    )
    .map(|(x, y, x2, y2, stroke, stroke_width)| {
        format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}"{} stroke-width="{}" stroke-linecap="{}"{}/>"#,
            fmt_num(x + origin[0]),
            fmt_num(y + origin[1]),
            fmt_num(x2 + origin[0]),
            fmt_num(y2 + origin[1]),
            paint_attrs("stroke", stroke),
            fmt_num(*stroke_width),
            mark.stroke_cap.as_svg_str(),
            dash
        )
    })
    .collect()
}
