use std::path::Path;

use crate::error::CartoSvgError;
use crate::marks::{
    fmt_num, path::path_elements, rect::rect_elements, rule::rule_elements,
    symbol::symbol_elements, text::text_elements,
};
use carto_common::canvas::CanvasDimensions;
use carto_common::color::Color;
use carto_common::value::ScalarOrArray;
use carto_image::svg::svg_to_png;
use carto_scenegraph::marks::group::{Clip, SceneGroup};
use carto_scenegraph::marks::mark::SceneMark;
use carto_scenegraph::marks::path::ScenePathMark;
use carto_scenegraph::marks::rect::SceneRectMark;
use carto_scenegraph::marks::rule::SceneRuleMark;
use carto_scenegraph::marks::symbol::SceneSymbolMark;
use carto_scenegraph::marks::text::SceneTextMark;
use carto_scenegraph::scene_graph::SceneGraph;

/// A drawing surface that scene graph marks can be added to.
///
/// Marks are added with the absolute origin of their parent group and the
/// clip region (in absolute coordinates) that applies to them.
pub trait Canvas {
    fn dimensions(&self) -> CanvasDimensions;

    fn clear_marks(&mut self);

    fn add_path_mark(
        &mut self,
        mark: &ScenePathMark,
        origin: [f32; 2],
        clip: &Clip,
    ) -> Result<(), CartoSvgError>;

    fn add_symbol_mark(
        &mut self,
        mark: &SceneSymbolMark,
        origin: [f32; 2],
        clip: &Clip,
    ) -> Result<(), CartoSvgError>;

    fn add_rect_mark(
        &mut self,
        mark: &SceneRectMark,
        origin: [f32; 2],
        clip: &Clip,
    ) -> Result<(), CartoSvgError>;

    fn add_rule_mark(
        &mut self,
        mark: &SceneRuleMark,
        origin: [f32; 2],
        clip: &Clip,
    ) -> Result<(), CartoSvgError>;

    fn add_text_mark(
        &mut self,
        mark: &SceneTextMark,
        origin: [f32; 2],
        clip: &Clip,
    ) -> Result<(), CartoSvgError>;

    fn add_mark(
        &mut self,
        mark: &SceneMark,
        origin: [f32; 2],
        clip: &Clip,
    ) -> Result<(), CartoSvgError> {
        match mark {
            SceneMark::Path(mark) => self.add_path_mark(mark, origin, &clip.maybe_clip(mark.clip)),
            SceneMark::Symbol(mark) => {
                self.add_symbol_mark(mark, origin, &clip.maybe_clip(mark.clip))
            }
            SceneMark::Rect(mark) => self.add_rect_mark(mark, origin, &clip.maybe_clip(mark.clip)),
            SceneMark::Rule(mark) => self.add_rule_mark(mark, origin, &clip.maybe_clip(mark.clip)),
            SceneMark::Text(mark) => self.add_text_mark(mark, origin, &clip.maybe_clip(mark.clip)),
            SceneMark::Group(group) => self.add_group_mark(group, origin, clip),
        }
    }

    fn add_group_mark(
        &mut self,
        group: &SceneGroup,
        parent_origin: [f32; 2],
        parent_clip: &Clip,
    ) -> Result<(), CartoSvgError> {
        // Compute new origin
        let origin = [
            parent_origin[0] + group.origin[0],
            parent_origin[1] + group.origin[1],
        ];

        // Background and frame rectangle
        if let Some([width, height]) = group.background_size() {
            let rect = SceneRectMark {
                name: format!("{}_background", group.name),
                clip: false,
                width: ScalarOrArray::new_scalar(width),
                height: ScalarOrArray::new_scalar(height),
                fill: ScalarOrArray::new_scalar(group.fill.unwrap_or(Color::transparent())),
                stroke: ScalarOrArray::new_scalar(
                    group.stroke.unwrap_or(Color::transparent()),
                ),
                stroke_width: ScalarOrArray::new_scalar(group.stroke_width.unwrap_or(1.0)),
                ..Default::default()
            };
            self.add_rect_mark(&rect, origin, parent_clip)?;
        }

        let clip = if let Clip::None = group.clip {
            // No clip defined for this group, propagate parent clip down
            parent_clip.clone()
        } else {
            // Translate clip to absolute coordinates
            group.clip.translate(origin[0], origin[1])
        };

        for mark in group.sorted_marks() {
            self.add_mark(mark, origin, &clip)?;
        }
        Ok(())
    }

    #[tracing::instrument(skip_all)]
    fn set_scene(&mut self, scene_graph: &SceneGraph) -> Result<(), CartoSvgError> {
        scene_graph.validate()?;
        self.clear_marks();

        // Add marks in order of zindex
        let mut marks: Vec<&SceneMark> = scene_graph.marks.iter().collect();
        marks.sort_by_key(|m| m.zindex().unwrap_or(0));
        for mark in marks {
            self.add_mark(mark, scene_graph.origin, &Clip::None)?;
        }
        Ok(())
    }
}

/// Canvas that accumulates SVG elements and rasterizes them on demand
#[derive(Debug, Clone)]
pub struct SvgCanvas {
    dimensions: CanvasDimensions,
    background: Color,
    elements: Vec<String>,
    clip_paths: Vec<Clip>,
}

impl SvgCanvas {
    pub fn new(dimensions: CanvasDimensions) -> Self {
        Self {
            dimensions,
            background: Color::white(),
            elements: vec![],
            clip_paths: vec![],
        }
    }

    /// Canvas sized to the scene graph, rasterized at `dpi`
    pub fn from_scene(scene_graph: &SceneGraph, dpi: f32) -> Result<Self, CartoSvgError> {
        let dimensions =
            CanvasDimensions::from_dpi([scene_graph.width, scene_graph.height], dpi);
        let mut canvas = Self::new(dimensions);
        canvas.set_scene(scene_graph)?;
        Ok(canvas)
    }

    /// Id of the `<clipPath>` for an absolute clip rectangle, reusing
    /// identical regions
    fn clip_id(&mut self, clip: &Clip) -> Option<String> {
        if let Clip::None = clip {
            return None;
        }
        let index = match self.clip_paths.iter().position(|c| c == clip) {
            Some(index) => index,
            None => {
                self.clip_paths.push(clip.clone());
                self.clip_paths.len() - 1
            }
        };
        Some(format!("clip{index}"))
    }

    fn push_elements(&mut self, elements: Vec<String>, clip: &Clip) {
        if elements.is_empty() {
            return;
        }
        match self.clip_id(clip) {
            Some(id) => {
                self.elements.push(format!(r#"<g clip-path="url(#{id})">"#));
                self.elements.extend(elements);
                self.elements.push("</g>".to_string());
            }
            None => self.elements.extend(elements),
        }
    }

    pub fn to_svg(&self) -> String {
        let [width, height] = self.dimensions.size;
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = fmt_num(width),
            h = fmt_num(height)
        );
        svg.push('\n');

        if !self.clip_paths.is_empty() {
            svg.push_str("<defs>\n");
            for (index, clip) in self.clip_paths.iter().enumerate() {
                if let Clip::Rect {
                    x,
                    y,
                    width,
                    height,
                } = clip
                {
                    svg.push_str(&format!(
                        r#"<clipPath id="clip{index}"><rect x="{}" y="{}" width="{}" height="{}"/></clipPath>"#,
                        fmt_num(*x),
                        fmt_num(*y),
                        fmt_num(*width),
                        fmt_num(*height)
                    ));
                    svg.push('\n');
                }
            }
            svg.push_str("</defs>\n");
        }

        if !self.background.is_transparent() {
            svg.push_str(&format!(
                r#"<rect width="100%" height="100%" fill="{}"/>"#,
                self.background.to_css_rgb()
            ));
            svg.push('\n');
        }

        for element in &self.elements {
            svg.push_str(element);
            svg.push('\n');
        }
        svg.push_str("</svg>\n");
        svg
    }

    #[tracing::instrument(skip_all)]
    pub fn to_png(&self) -> Result<Vec<u8>, CartoSvgError> {
        Ok(svg_to_png(&self.to_svg(), self.dimensions.scale)?)
    }

    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), CartoSvgError> {
        let png = self.to_png()?;
        std::fs::write(path.as_ref(), png)?;
        log::info!(
            "Wrote {}x{} PNG to {}",
            self.dimensions.to_physical_width(),
            self.dimensions.to_physical_height(),
            path.as_ref().display()
        );
        Ok(())
    }

    pub fn save_svg(&self, path: impl AsRef<Path>) -> Result<(), CartoSvgError> {
        std::fs::write(path.as_ref(), self.to_svg())?;
        log::info!("Wrote SVG to {}", path.as_ref().display());
        Ok(())
    }
}

impl Canvas for SvgCanvas {
    fn dimensions(&self) -> CanvasDimensions {
        self.dimensions
    }

    fn clear_marks(&mut self) {
        self.elements.clear();
        self.clip_paths.clear();
    }

    fn add_path_mark(
        &mut self,
        mark: &ScenePathMark,
        origin: [f32; 2],
        clip: &Clip,
    ) -> Result<(), CartoSvgError> {
        self.push_elements(path_elements(mark, origin), clip);
        Ok(())
    }

    fn add_symbol_mark(
        &mut self,
        mark: &SceneSymbolMark,
        origin: [f32; 2],
        clip: &Clip,
    ) -> Result<(), CartoSvgError> {
        self.push_elements(symbol_elements(mark, origin), clip);
        Ok(())
    }

    fn add_rect_mark(
        &mut self,
        mark: &SceneRectMark,
        origin: [f32; 2],
        clip: &Clip,
    ) -> Result<(), CartoSvgError> {
        self.push_elements(rect_elements(mark, origin), clip);
        Ok(())
    }

    fn add_rule_mark(
        &mut self,
        mark: &SceneRuleMark,
        origin: [f32; 2],
        clip: &Clip,
    ) -> Result<(), CartoSvgError> {
        self.push_elements(rule_elements(mark, origin), clip);
        Ok(())
    }

    fn add_text_mark(
        &mut self,
        mark: &SceneTextMark,
        origin: [f32; 2],
        clip: &Clip,
    ) -> Result<(), CartoSvgError> {
        self.push_elements(text_elements(mark, origin), clip);
        Ok(())
    }
}
