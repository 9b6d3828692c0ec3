use carto_common::canvas::CanvasDimensions;
use carto_common::color::Color;
use carto_common::text::TextAlign;
use carto_common::types::SymbolShape;
use carto_common::value::ScalarOrArray;
use carto_scenegraph::marks::group::{Clip, SceneGroup};
use carto_scenegraph::marks::rule::SceneRuleMark;
use carto_scenegraph::marks::symbol::SceneSymbolMark;
use carto_scenegraph::marks::text::SceneTextMark;
use carto_scenegraph::scene_graph::SceneGraph;
use carto_svg::canvas::{Canvas, SvgCanvas};
use rstest::rstest;

fn towns_scene(shape: SymbolShape) -> SceneGraph {
    let symbols = SceneSymbolMark {
        name: "towns".to_string(),
        len: 3,
        shape,
        x: ScalarOrArray::new_array(vec![10.0, 20.0, 30.0]),
        y: ScalarOrArray::new_array(vec![10.0, 20.0, 30.0]),
        fill: ScalarOrArray::new_scalar(Color::rgba(0.5, 0.5, 0.5, 1.0)),
        ..Default::default()
    };
    let mut scene = SceneGraph::new(100.0, 100.0);
    scene.marks.push(
        SceneGroup {
            name: "map".to_string(),
            origin: [5.0, 5.0],
            marks: vec![symbols.into()],
            ..Default::default()
        }
        .into(),
    );
    scene
}

#[rstest(
    shape,
    element,
    case(SymbolShape::Square, "<rect x="),
    case(SymbolShape::Circle, "<circle ")
)]
fn test_one_element_per_symbol(shape: SymbolShape, element: &str) {
    let canvas = SvgCanvas::from_scene(&towns_scene(shape), 72.0).unwrap();
    let svg = canvas.to_svg();
    assert_eq!(svg.matches(element).count(), 3);
}

#[test]
fn test_group_origin_is_applied() {
    let canvas = SvgCanvas::from_scene(&towns_scene(SymbolShape::Circle), 72.0).unwrap();
    let svg = canvas.to_svg();
    assert!(svg.contains(r#"<circle cx="15" cy="15" r="3""#));
}

#[test]
fn test_clip_is_translated_and_shared() {
    let rules = SceneRuleMark {
        len: 2,
        x: ScalarOrArray::new_array(vec![0.0, 0.0]),
        y: ScalarOrArray::new_array(vec![0.0, 10.0]),
        x2: ScalarOrArray::new_array(vec![100.0, 100.0]),
        y2: ScalarOrArray::new_array(vec![0.0, 10.0]),
        ..Default::default()
    };
    let label = SceneTextMark {
        clip: false,
        text: ScalarOrArray::new_scalar("55°N".to_string()),
        ..Default::default()
    };
    let group = SceneGroup {
        name: "frame".to_string(),
        origin: [10.0, 20.0],
        clip: Clip::Rect {
            x: 0.0,
            y: 0.0,
            width: 50.0,
            height: 40.0,
        },
        marks: vec![rules.clone().into(), rules.into(), label.into()],
        ..Default::default()
    };
    let mut scene = SceneGraph::new(100.0, 100.0);
    scene.marks.push(group.into());

    let canvas = SvgCanvas::from_scene(&scene, 72.0).unwrap();
    let svg = canvas.to_svg();
    assert_eq!(svg.matches("<clipPath ").count(), 1);
    assert!(svg.contains(r#"<clipPath id="clip0"><rect x="10" y="20" width="50" height="40"/>"#));
    assert_eq!(svg.matches(r#"<g clip-path="url(#clip0)">"#).count(), 2);
    assert_eq!(svg.matches("<line ").count(), 4);

    // unclipped label is emitted outside any clip group
    let text_line = svg.lines().find(|l| l.starts_with("<text")).unwrap();
    assert!(text_line.contains("55°N"));
}

#[test]
fn test_text_is_escaped_and_aligned() {
    let text = SceneTextMark {
        text: ScalarOrArray::new_scalar("Lough <Neagh> & Co".to_string()),
        align: ScalarOrArray::new_scalar(TextAlign::Center),
        ..Default::default()
    };
    let mut scene = SceneGraph::new(50.0, 50.0);
    scene.marks.push(text.into());
    let canvas = SvgCanvas::from_scene(&scene, 72.0).unwrap();
    let svg = canvas.to_svg();
    assert!(svg.contains("Lough &lt;Neagh&gt; &amp; Co"));
    assert!(svg.contains(r#"text-anchor="middle""#));
}

#[test]
fn test_group_background_drawn_before_children() {
    let group = SceneGroup {
        name: "legend".to_string(),
        frame: Some([40.0, 30.0]),
        fill: Some(Color::white()),
        stroke: Some(Color::black()),
        marks: vec![SceneSymbolMark::default().into()],
        ..Default::default()
    };
    let mut scene = SceneGraph::new(50.0, 50.0);
    scene.marks.push(group.into());
    let svg = SvgCanvas::from_scene(&scene, 72.0).unwrap().to_svg();
    let background = svg.find(r#"width="40" height="30""#).unwrap();
    let symbol = svg.find(r#"width="6" height="6""#).unwrap();
    assert!(background < symbol);
}

#[test]
fn test_invalid_scene_is_rejected() {
    let symbols = SceneSymbolMark {
        len: 3,
        x: ScalarOrArray::new_array(vec![1.0]),
        ..Default::default()
    };
    let mut scene = SceneGraph::new(10.0, 10.0);
    scene.marks.push(symbols.into());
    let mut canvas = SvgCanvas::new(CanvasDimensions::from_dpi([10.0, 10.0], 72.0));
    assert!(canvas.set_scene(&scene).is_err());
}

#[test]
fn test_png_has_physical_size() {
    let canvas = SvgCanvas::from_scene(&towns_scene(SymbolShape::Square), 144.0).unwrap();
    let png = canvas.to_png().unwrap();
    let img = image::load_from_memory(&png).unwrap();
    assert_eq!(img.width(), 200);
    assert_eq!(img.height(), 200);
}
