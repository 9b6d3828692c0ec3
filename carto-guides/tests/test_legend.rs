use carto_common::color::{parse_color, Color};
use carto_common::text::ApproxTextMeasurer;
use carto_common::types::SymbolShape;
use carto_guides::error::CartoGuidesError;
use carto_guides::legend::handles::{build_handles, HandleStyle};
use carto_guides::legend::{make_legend, LegendConfig, LegendEntry, LegendLocation};
use carto_scenegraph::marks::mark::SceneMark;
use float_cmp::assert_approx_eq;

fn entries() -> Vec<LegendEntry> {
    let palette: Vec<Color> = ["firebrick", "seagreen"]
        .iter()
        .map(|c| parse_color(c).unwrap())
        .collect();
    let mut entries: Vec<LegendEntry> = build_handles(
        &["Antrim", "Armagh", "Down"],
        &palette,
        &HandleStyle {
            alpha: 0.25,
            ..Default::default()
        },
    )
    .unwrap()
    .into_iter()
    .map(Into::into)
    .collect();
    entries.push(LegendEntry::Line {
        label: "Rivers".to_string(),
        stroke: parse_color("royalblue").unwrap(),
        stroke_width: 1.0,
    });
    entries.push(LegendEntry::Marker {
        label: "Towns".to_string(),
        shape: SymbolShape::Square,
        fill: parse_color("0.5").unwrap(),
        size: 6.0,
    });
    entries
}

#[test]
fn test_one_row_per_entry_plus_title() {
    let config = LegendConfig {
        title: Some("Legend".to_string()),
        entries: entries(),
        ..Default::default()
    };
    let legend = make_legend(&config, &ApproxTextMeasurer::default()).unwrap();

    assert_eq!(legend.name, "legend");
    assert_eq!(legend.marks.len(), 6);
    assert!(matches!(&legend.marks[0], SceneMark::Text(t) if t.text.get(0).unwrap() == "Legend"));

    let rows: Vec<_> = legend
        .marks
        .iter()
        .filter_map(|m| match m {
            SceneMark::Group(g) => Some(g),
            _ => None,
        })
        .collect();
    assert_eq!(rows.len(), 5);
    assert!(matches!(rows[0].marks[0], SceneMark::Rect(_)));
    assert!(matches!(rows[3].marks[0], SceneMark::Rule(_)));
    assert!(matches!(rows[4].marks[0], SceneMark::Symbol(_)));

    // rows stack downwards
    for pair in rows.windows(2) {
        assert!(pair[1].origin[1] > pair[0].origin[1]);
    }
}

#[test]
fn test_swatch_alpha_is_applied() {
    let config = LegendConfig {
        entries: entries(),
        ..Default::default()
    };
    let legend = make_legend(&config, &ApproxTextMeasurer::default()).unwrap();
    let SceneMark::Group(row) = &legend.marks[0] else {
        panic!("expected entry group");
    };
    let SceneMark::Rect(rect) = &row.marks[0] else {
        panic!("expected swatch rect");
    };
    let fill = rect.fill.get(0).unwrap();
    assert_approx_eq!(f32, fill.alpha(), 0.25);
    let stroke = rect.stroke.get(0).unwrap();
    assert_approx_eq!(f32, stroke.alpha(), 0.25);
}

#[test]
fn test_location() {
    let base = LegendConfig {
        entries: entries(),
        inner_width: 500.0,
        inner_height: 400.0,
        outer_margin: 10.0,
        ..Default::default()
    };
    let measurer = ApproxTextMeasurer::default();

    let upper_left = make_legend(&base, &measurer).unwrap();
    assert_eq!(upper_left.origin, [10.0, 10.0]);

    let lower_right = make_legend(
        &LegendConfig {
            location: LegendLocation::LowerRight,
            ..base
        },
        &measurer,
    )
    .unwrap();
    let [w, h] = lower_right.frame.unwrap();
    assert_approx_eq!(f32, lower_right.origin[0] + w, 490.0, epsilon = 1e-3);
    assert_approx_eq!(f32, lower_right.origin[1] + h, 390.0, epsilon = 1e-3);
}

#[test]
fn test_frame_fits_longest_label() {
    let mut config = LegendConfig {
        entries: entries(),
        ..Default::default()
    };
    let short = make_legend(&config, &ApproxTextMeasurer::default()).unwrap();
    config.entries.push(LegendEntry::Line {
        label: "A considerably longer legend label".to_string(),
        stroke: Color::black(),
        stroke_width: 1.0,
    });
    let long = make_legend(&config, &ApproxTextMeasurer::default()).unwrap();
    assert!(long.frame.unwrap()[0] > short.frame.unwrap()[0]);
    assert!(long.frame.unwrap()[1] > short.frame.unwrap()[1]);
    assert!(long.fill.is_some());
}

#[test]
fn test_empty_legend_is_rejected() {
    let config = LegendConfig::default();
    assert!(matches!(
        make_legend(&config, &ApproxTextMeasurer::default()),
        Err(CartoGuidesError::InvalidArgument(_))
    ));
}
