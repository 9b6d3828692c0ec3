use super::{escape_text, fmt_num, paint_attrs};
use carto_common::text::{FontWeight, TextAlign, TextBaseline};
use carto_scenegraph::marks::text::SceneTextMark;
use itertools::izip;

fn text_anchor(align: &TextAlign) -> &'static str {
    match align {
        TextAlign::Left => "start",
        TextAlign::Center => "middle",
        TextAlign::Right => "end",
    }
}

fn dominant_baseline(baseline: &TextBaseline) -> Option<&'static str> {
    match baseline {
        TextBaseline::Alphabetic => None,
        TextBaseline::Top => Some("hanging"),
        TextBaseline::Middle => Some("central"),
        TextBaseline::Bottom => Some("text-after-edge"),
    }
}

pub(crate) fn text_elements(mark: &SceneTextMark, origin: [f32; 2]) -> Vec<String> {
    izip!(
        mark.text_iter(),
        mark.x_iter(),
        mark.y_iter(),
        mark.align_iter(),
        mark.baseline_iter(),
        mark.angle_iter(),
        mark.color_iter(),
        mark.font_iter(),
        mark.font_size_iter(),
        mark.font_weight_iter()
    )
    .filter(|(text, ..)| !text.is_empty())
    .map(
        |(text, x, y, align, baseline, angle, color, font, font_size, font_weight)| {
            let x = fmt_num(x + origin[0]);
            let y = fmt_num(y + origin[1]);
            let mut attrs = format!(
                r#" x="{x}" y="{y}" font-family="{}" font-size="{}" text-anchor="{}""#,
                escape_text(font),
                fmt_num(*font_size),
                text_anchor(align)
            );
            if let Some(baseline) = dominant_baseline(baseline) {
                attrs.push_str(&format!(r#" dominant-baseline="{baseline}""#));
            }
            if *font_weight == FontWeight::Bold {
                attrs.push_str(r#" font-weight="bold""#);
            }
            if *angle != 0.0 {
                attrs.push_str(&format!(
                    r#" transform="rotate({},{x},{y})""#,
                    fmt_num(*angle)
                ));
            }
            attrs.push_str(&paint_attrs("fill", color));
            format!("<text{attrs}>{}</text>", escape_text(text))
        },
    )
    .collect()
}
