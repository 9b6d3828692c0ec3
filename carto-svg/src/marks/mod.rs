pub(crate) mod path;
pub(crate) mod rect;
pub(crate) mod rule;
pub(crate) mod symbol;
pub(crate) mod text;

use carto_common::color::Color;
use lyon_path::{Event, Path};

/// Format a coordinate with at most three decimals and no trailing zeros
pub(crate) fn fmt_num(v: f32) -> String {
    let s = format!("{:.3}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" || s.is_empty() {
        "0".to_string()
    } else {
        s.to_string()
    }
}

/// `fill="..."` (or `stroke="..."`) plus the matching opacity attribute
pub(crate) fn paint_attrs(kind: &str, color: &Color) -> String {
    if color.is_transparent() {
        return format!(r#" {kind}="none""#);
    }
    let mut attrs = format!(r#" {kind}="{}""#, color.to_css_rgb());
    if color.alpha() < 1.0 {
        attrs.push_str(&format!(r#" {kind}-opacity="{}""#, fmt_num(color.alpha())));
    }
    attrs
}

/// Stroke paint and width, omitted entirely when nothing would be drawn
pub(crate) fn stroke_attrs(color: &Color, width: Option<f32>) -> String {
    match width {
        Some(width) if width > 0.0 && !color.is_transparent() => {
            format!(
                r#"{} stroke-width="{}""#,
                paint_attrs("stroke", color),
                fmt_num(width)
            )
        }
        _ => String::new(),
    }
}

pub(crate) fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// SVG path data for a lyon path
pub(crate) fn path_data(path: &Path) -> String {
    let mut parts: Vec<String> = Vec::new();
    for event in path.iter() {
        match event {
            Event::Begin { at } => {
                parts.push(format!("M{},{}", fmt_num(at.x), fmt_num(at.y)));
            }
            Event::Line { to, .. } => {
                parts.push(format!("L{},{}", fmt_num(to.x), fmt_num(to.y)));
            }
            Event::Quadratic { ctrl, to, .. } => {
                parts.push(format!(
                    "Q{},{} {},{}",
                    fmt_num(ctrl.x),
                    fmt_num(ctrl.y),
                    fmt_num(to.x),
                    fmt_num(to.y)
                ));
            }
            Event::Cubic {
                ctrl1, ctrl2, to, ..
            } => {
                parts.push(format!(
                    "C{},{} {},{} {},{}",
                    fmt_num(ctrl1.x),
                    fmt_num(ctrl1.y),
                    fmt_num(ctrl2.x),
                    fmt_num(ctrl2.y),
                    fmt_num(to.x),
                    fmt_num(to.y)
                ));
            }
            Event::End { close, .. } => {
                if close {
                    parts.push("Z".to_string());
                }
            }
        }
    }
    parts.join(" ")
}
