use carto_data::{AttributeValue, Feature, Layer};
use carto_map::config::MapConfig;
use carto_map::error::CartoMapError;
use carto_map::{build_map_scene, render_map, MapLayers};
use carto_scenegraph::marks::mark::SceneMark;
use float_cmp::assert_approx_eq;
use geo_types::{line_string, point, polygon, Polygon};

fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Polygon<f64> {
    polygon![(x: x0, y: y0), (x: x1, y: y0), (x: x1, y: y1), (x: x0, y: y1)]
}

fn text(s: &str) -> AttributeValue {
    AttributeValue::Text(s.to_string())
}

fn synthetic_layers() -> MapLayers {
    let outline = Layer::new(
        "NI_outline",
        vec![Feature::new(rect(550_000.0, 5_975_000.0, 760_000.0, 6_170_000.0))],
    );
    let counties = Layer::new(
        "Counties",
        vec![
            Feature::new(rect(550_000.0, 5_975_000.0, 650_000.0, 6_170_000.0))
                .with_attribute("CountyName", text("TYRONE")),
            Feature::new(rect(650_000.0, 6_070_000.0, 760_000.0, 6_170_000.0))
                .with_attribute("CountyName", text("ANTRIM")),
            Feature::new(rect(650_000.0, 5_975_000.0, 760_000.0, 6_070_000.0))
                .with_attribute("CountyName", text("DOWN")),
            Feature::new(rect(700_000.0, 6_150_000.0, 710_000.0, 6_160_000.0))
                .with_attribute("CountyName", text("ANTRIM")),
        ],
    );
    let water = Layer::new(
        "Water",
        vec![Feature::new(rect(640_000.0, 6_050_000.0, 670_000.0, 6_080_000.0))],
    );
    let rivers = Layer::new(
        "Rivers",
        vec![Feature::new(line_string![
            (x: 600_000.0, y: 6_000_000.0),
            (x: 650_000.0, y: 6_060_000.0)
        ])],
    );
    let towns = Layer::new(
        "Towns",
        vec![
            Feature::new(point!(x: 700_000.0, y: 6_050_000.0))
                .with_attribute("TOWN_NAME", text("BELFAST")),
            Feature::new(point!(x: 620_000.0, y: 6_020_000.0))
                .with_attribute("TOWN_NAME", text("OMAGH")),
        ],
    );
    MapLayers {
        outline,
        towns,
        water,
        rivers,
        counties,
    }
}

fn marks_named<'a>(marks: &'a [SceneMark], prefix: &str) -> Vec<&'a SceneMark> {
    marks.iter().filter(|m| m.name().starts_with(prefix)).collect()
}

#[test]
fn test_scene_is_cropped_to_frame_and_margin() {
    let config = MapConfig::default();
    let scene = build_map_scene(&synthetic_layers(), &config).unwrap();

    // padded extent is 220 km by 205 km, so the frame is limited by width
    let frame_width = 720.0 - 2.0 * config.margin;
    let frame_height = frame_width * 205.0 / 220.0;
    assert_approx_eq!(f32, scene.width, frame_width + 2.0 * config.margin, epsilon = 1e-3);
    assert_approx_eq!(f32, scene.height, frame_height + 2.0 * config.margin, epsilon = 1e-3);
    assert!(scene.validate().is_ok());
}

#[test]
fn test_one_county_mark_per_name() {
    let scene = build_map_scene(&synthetic_layers(), &MapConfig::default()).unwrap();
    let map_frame = scene.find_group("map_frame").unwrap();
    let counties = marks_named(&map_frame.marks, "county_");
    assert_eq!(counties.len(), 3);

    // sorted names, palette cycled in that order, alpha applied
    let SceneMark::Path(antrim) = counties[0] else {
        panic!("expected a path mark");
    };
    assert_eq!(antrim.name, "county_ANTRIM");
    assert_eq!(antrim.len, 2);
    let fill = antrim.fill.get(0).unwrap();
    assert_approx_eq!(f32, fill.alpha(), 0.25);
    let palette = MapConfig::default().styles.county_palette;
    assert_eq!(fill.0[..3], palette[0].0[..3]);
}

#[test]
fn test_legend_has_row_per_entry() {
    let scene = build_map_scene(&synthetic_layers(), &MapConfig::default()).unwrap();
    let legend = scene.find_group("legend").unwrap();
    let rows = marks_named(&legend.marks, "legend_entry_");
    // three counties, lakes, rivers, towns
    assert_eq!(rows.len(), 6);

    let labels: Vec<String> = rows
        .iter()
        .flat_map(|row| row.children())
        .filter_map(|m| match m {
            SceneMark::Text(t) => t.text.get(0).cloned(),
            _ => None,
        })
        .collect();
    assert_eq!(labels, vec!["Antrim", "Down", "Tyrone", "Lakes", "Rivers", "Towns"]);
}

#[test]
fn test_legend_swatches_match_county_fills() {
    let scene = build_map_scene(&synthetic_layers(), &MapConfig::default()).unwrap();
    let map_frame = scene.find_group("map_frame").unwrap();
    let legend = scene.find_group("legend").unwrap();

    let swatches: Vec<_> = legend
        .marks
        .iter()
        .flat_map(|row| row.children())
        .filter_map(|m| match m {
            SceneMark::Rect(r) if r.name.starts_with("legend_swatch_") => Some(r),
            _ => None,
        })
        .collect();
    // three counties then lakes
    assert_eq!(swatches.len(), 4);

    for (county, swatch) in marks_named(&map_frame.marks, "county_").iter().zip(&swatches) {
        let SceneMark::Path(county) = county else {
            panic!("expected a path mark");
        };
        assert_eq!(county.fill.get(0), swatch.fill.get(0), "{}", county.name);
        assert_eq!(county.stroke.get(0), swatch.stroke.get(0), "{}", county.name);
    }
}

#[test]
fn test_frame_border_drawn_last() {
    let config = MapConfig::default();
    let scene = build_map_scene(&synthetic_layers(), &config).unwrap();
    let map_frame = scene.find_group("map_frame").unwrap();
    assert!(map_frame.stroke.is_none());

    let border = marks_named(&map_frame.marks, "map_frame_border");
    assert_eq!(border.len(), 1);
    let SceneMark::Rect(border) = border[0] else {
        panic!("expected a rect mark");
    };
    assert_eq!(border.stroke.get(0), Some(&config.styles.outline_edge));
    assert!(border.fill.get(0).unwrap().is_transparent());

    let sorted = map_frame.sorted_marks();
    assert_eq!(sorted.last().unwrap().name(), "map_frame_border");
    let top = border.zindex.unwrap();
    assert!(map_frame
        .marks
        .iter()
        .filter(|m| m.name() != "map_frame_border")
        .all(|m| m.zindex().unwrap_or(0) < top));
}

#[test]
fn test_guides_are_present() {
    let scene = build_map_scene(&synthetic_layers(), &MapConfig::default()).unwrap();
    assert!(scene.find_group("scale_bar").is_some());
    assert!(scene.find_group("gridlines").is_some());
    assert!(scene.find_group("gridlines_clipped").is_some());
}

#[test]
fn test_empty_outline_is_an_error() {
    let mut layers = synthetic_layers();
    layers.outline = Layer::new("NI_outline", vec![]);
    let err = build_map_scene(&layers, &MapConfig::default()).unwrap_err();
    assert!(matches!(err, CartoMapError::EmptyLayer(_)));
}

#[test]
fn test_missing_county_field_is_an_error() {
    let config = MapConfig {
        county_field: "NAME".to_string(),
        ..Default::default()
    };
    let err = build_map_scene(&synthetic_layers(), &config).unwrap_err();
    assert!(matches!(err, CartoMapError::DataError(_)));
}

#[test]
fn test_render_map_svg_contains_labels() {
    let canvas = render_map(&synthetic_layers(), &MapConfig::default()).unwrap();
    let svg = canvas.to_svg();
    assert!(svg.contains(">Belfast</text>"));
    assert!(svg.contains(">Omagh</text>"));
    assert!(svg.contains(">Legend</text>"));
    assert!(svg.contains(">20 km</text>"));
}
