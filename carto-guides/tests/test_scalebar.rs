use carto_common::color::Color;
use carto_geometry::{MapExtent, MapFrame};
use carto_guides::error::CartoGuidesError;
use carto_guides::scalebar::{render_scale_bar, DEFAULT_SCALE_BAR_ANCHOR};
use carto_scenegraph::marks::mark::SceneMark;
use float_cmp::assert_approx_eq;
use rstest::rstest;

#[test]
fn test_reference_point_and_base_segment() {
    let extent = MapExtent::new(0.0, 100_000.0, 0.0, 50_000.0);
    let bar = render_scale_bar(&extent, [0.92, 0.95]).unwrap();

    assert_approx_eq!(f64, bar.anchor_point[0], 0.92);
    assert_approx_eq!(f64, bar.anchor_point[1], 47_500.0);

    let base = &bar.segments[0];
    assert_approx_eq!(f64, base.start[0], 0.92);
    assert_approx_eq!(f64, base.start[1], 47_500.0);
    assert_approx_eq!(f64, base.end[0], -19_999.08, epsilon = 1e-9);
    assert_approx_eq!(f64, base.end[1], 47_500.0);
    assert_eq!(base.width, 9.0);
    assert_eq!(base.color, Color::black());
}

#[test]
fn test_bands() {
    let extent = MapExtent::new(0.0, 100_000.0, 0.0, 50_000.0);
    let bar = render_scale_bar(&extent, DEFAULT_SCALE_BAR_ANCHOR).unwrap();
    let [sbx, sby] = bar.anchor_point;
    assert_eq!(bar.segments.len(), 3);

    let overlay = &bar.segments[1];
    assert_eq!(overlay.start, [sbx, sby]);
    assert_approx_eq!(f64, overlay.end[0], sbx - 10_000.0);
    assert_eq!(overlay.width, 6.0);
    assert_eq!(overlay.color, Color::black());

    let white = &bar.segments[2];
    assert_approx_eq!(f64, white.start[0], sbx - 10_000.0);
    assert_approx_eq!(f64, white.end[0], sbx - 20_000.0);
    assert_eq!(white.width, 6.0);
    assert_eq!(white.color, Color::white());
}

#[test]
fn test_labels() {
    let extent = MapExtent::new(190_000.0, 380_000.0, 5_980_000.0, 6_140_000.0);
    let bar = render_scale_bar(&extent, DEFAULT_SCALE_BAR_ANCHOR).unwrap();
    let [sbx, sby] = bar.anchor_point;

    let l20 = bar.label("20 km").unwrap();
    let l10 = bar.label("10 km").unwrap();
    let l0 = bar.label("0 km").unwrap();
    assert_approx_eq!(f64, l20.position[0], sbx);
    assert_approx_eq!(f64, l10.position[0], sbx - 12_500.0);
    assert_approx_eq!(f64, l0.position[0], sbx - 24_500.0);
    for label in &bar.labels {
        assert_approx_eq!(f64, label.position[1], sby - 4_500.0);
        assert_eq!(label.font_size, 8.0);
    }
}

#[test]
fn test_anchor_uses_ymin_in_x_term() {
    let extent = MapExtent::new(1_000.0, 2_000.0, 3.0, 13.0);
    let bar = render_scale_bar(&extent, [0.5, 0.5]).unwrap();
    // xmin + (1 - ymin) * 0.5 = 1000 + (-2) * 0.5
    assert_approx_eq!(f64, bar.anchor_point[0], 999.0);
    assert_approx_eq!(f64, bar.anchor_point[1], 8.0);
}

#[rstest(
    xmin,
    xmax,
    ymin,
    ymax,
    case(0.0, 1.0, 0.0, 1.0),
    case(-5_000.0, 250_000.0, 10.0, 90_000.0),
    case(190_000.0, 380_000.0, 5_980_000.0, 6_140_000.0)
)]
fn test_label_ordering(xmin: f64, xmax: f64, ymin: f64, ymax: f64) {
    let bar = render_scale_bar(&MapExtent::new(xmin, xmax, ymin, ymax), DEFAULT_SCALE_BAR_ANCHOR).unwrap();
    let x0 = bar.label("0 km").unwrap().position[0];
    let x10 = bar.label("10 km").unwrap().position[0];
    let x20 = bar.label("20 km").unwrap().position[0];
    assert!(x0 < x10 && x10 < x20);
}

#[test]
fn test_idempotent() {
    let extent = MapExtent::new(0.0, 100_000.0, 0.0, 50_000.0);
    let a = render_scale_bar(&extent, [0.3, 0.7]).unwrap();
    let b = render_scale_bar(&extent, [0.3, 0.7]).unwrap();
    assert_eq!(a, b);
}

#[rstest(
    xmin,
    xmax,
    ymin,
    ymax,
    case(10.0, 10.0, 0.0, 1.0),
    case(11.0, 10.0, 0.0, 1.0),
    case(0.0, 1.0, 5.0, 5.0),
    case(0.0, 1.0, 6.0, 5.0)
)]
fn test_degenerate_extent_is_rejected(xmin: f64, xmax: f64, ymin: f64, ymax: f64) {
    let result = render_scale_bar(&MapExtent::new(xmin, xmax, ymin, ymax), DEFAULT_SCALE_BAR_ANCHOR);
    assert!(matches!(result, Err(CartoGuidesError::InvalidArgument(_))));
}

#[test]
fn test_scene_group_marks() {
    let extent = MapExtent::new(0.0, 100_000.0, 0.0, 100_000.0);
    let frame = MapFrame::new(extent, [0.0, 0.0], [100.0, 100.0]).unwrap();
    let bar = render_scale_bar(&extent, [0.5, 0.5]).unwrap();
    let group = bar.to_scene_group(&frame);

    assert_eq!(group.name, "scale_bar");
    let SceneMark::Rule(rules) = &group.marks[0] else {
        panic!("expected rule mark");
    };
    assert_eq!(rules.len, 3);
    let x: Vec<f32> = rules.x_iter().copied().collect();
    let x2: Vec<f32> = rules.x2_iter().copied().collect();
    // sbx = 0.5 map units, 1 point per 1000 map units
    assert_approx_eq!(f32, x[0], 0.0005, epsilon = 1e-6);
    assert_approx_eq!(f32, x2[0], -19.9995, epsilon = 1e-4);
    assert_approx_eq!(f32, x2[1], -9.9995, epsilon = 1e-4);
    let widths: Vec<f32> = rules.stroke_width_iter().copied().collect();
    assert_eq!(widths, vec![9.0, 6.0, 6.0]);

    let SceneMark::Text(text) = &group.marks[1] else {
        panic!("expected text mark");
    };
    let labels: Vec<&String> = text.text_iter().collect();
    assert_eq!(labels, vec!["20 km", "10 km", "0 km"]);
    let ys: Vec<f32> = text.y_iter().copied().collect();
    // sby = 50000, labels 4500 below -> 54.5 points from the top
    assert_approx_eq!(f32, ys[0], 54.5, epsilon = 1e-4);
}
