use carto_common::color::Color;
use carto_common::text::ApproxTextMeasurer;
use carto_common::types::SymbolShape;
use carto_data::reader::read_layer;
use carto_data::Layer;
use carto_geometry::projection::TransverseMercator;
use carto_geometry::{MapExtent, MapFrame};
use carto_guides::gridlines::{make_gridlines, GridlineConfig};
use carto_guides::legend::handles::{build_handles, HandleStyle, SwatchHandle};
use carto_guides::legend::{make_legend, LegendConfig, LegendEntry, LegendLocation};
use carto_guides::scalebar::render_scale_bar;
use carto_scenegraph::marks::group::{Clip, SceneGroup};
use carto_scenegraph::marks::mark::SceneMark;
use carto_scenegraph::marks::rect::SceneRectMark;
use carto_scenegraph::scene_graph::SceneGraph;
use carto_svg::canvas::SvgCanvas;
use itertools::Itertools;

use crate::config::MapConfig;
use crate::error::CartoMapError;
use crate::layers::{label_mark, path_mark, symbol_mark, title_case, PathStyle};

const FRAME_BORDER_ZINDEX: i32 = 11;

/// The data layers drawn on the map
#[derive(Debug, Clone, Default)]
pub struct MapLayers {
    pub outline: Layer,
    pub towns: Layer,
    pub water: Layer,
    pub rivers: Layer,
    pub counties: Layer,
}

impl MapLayers {
    /// Read every layer named in `config.files` from `config.data_dir`
    pub fn load(config: &MapConfig) -> Result<Self, CartoMapError> {
        let files = &config.files;
        Ok(Self {
            outline: read_layer(config.layer_path(&files.outline))?,
            towns: read_layer(config.layer_path(&files.towns))?,
            water: read_layer(config.layer_path(&files.water))?,
            rivers: read_layer(config.layer_path(&files.rivers))?,
            counties: read_layer(config.layer_path(&files.counties))?,
        })
    }
}

/// Extent of the map: the outline bounds plus the configured padding
pub fn map_extent(layers: &MapLayers, config: &MapConfig) -> Result<MapExtent, CartoMapError> {
    let bounds = layers
        .outline
        .total_bounds()
        .ok_or_else(|| CartoMapError::EmptyLayer(layers.outline.name.clone()))?;
    let extent = bounds.padded(config.extent_padding);
    extent.validate()?;
    Ok(extent)
}

/// Legend rows: one swatch per county, then lakes, rivers and towns.
///
/// County swatches reuse the handles the county polygons were drawn with, so
/// only the label changes.
fn legend_entries(
    county_handles: &[SwatchHandle],
    config: &MapConfig,
) -> Result<Vec<LegendEntry>, CartoMapError> {
    let styles = &config.styles;
    let settings = &config.legend;

    let county_swatches = county_handles.iter().map(|handle| SwatchHandle {
        label: title_case(&handle.label),
        ..handle.clone()
    });
    let water_handles = build_handles(
        std::slice::from_ref(&settings.lakes_label),
        &[styles.water],
        &HandleStyle::default(),
    )?;

    Ok(county_swatches
        .chain(water_handles)
        .map(LegendEntry::from)
        .chain([
            LegendEntry::Line {
                label: settings.rivers_label.clone(),
                stroke: styles.rivers,
                stroke_width: settings.line_width,
            },
            LegendEntry::Marker {
                label: settings.towns_label.clone(),
                shape: SymbolShape::Square,
                fill: styles.towns,
                size: styles.town_marker_size,
            },
        ])
        .collect())
}

/// Assemble the complete map scene.
///
/// The map frame is the largest rectangle with the extent's aspect ratio that
/// fits in the figure after the margin is removed; the scene is then cropped
/// to the frame plus the margin.
pub fn build_map_scene(layers: &MapLayers, config: &MapConfig) -> Result<SceneGraph, CartoMapError> {
    let styles = &config.styles;
    let extent = map_extent(layers, config)?;

    let [fig_width, fig_height] = config.figure_points();
    let margin = config.margin;
    let frame = MapFrame::fit(
        extent,
        [margin, margin],
        [fig_width - 2.0 * margin, fig_height - 2.0 * margin],
    )?;
    log::info!(
        "map frame {:.1}x{:.1} pt for extent x {:.0}..{:.0}, y {:.0}..{:.0}",
        frame.size[0],
        frame.size[1],
        extent.xmin,
        extent.xmax,
        extent.ymin,
        extent.ymax
    );

    let mut marks: Vec<SceneMark> = vec![];

    if let Some(mark) = path_mark(
        "outline",
        &layers.outline,
        &frame,
        &PathStyle::polygon(styles.outline_face, styles.outline_edge, 1.0),
        1,
    ) {
        marks.push(mark.into());
    }

    // counties, one mark per name so each gets its own palette color
    let county_names = layers.counties.unique_values(&config.county_field)?;
    let county_handles = build_handles(
        &county_names,
        &styles.county_palette,
        &HandleStyle {
            edge: styles.county_edge,
            alpha: styles.county_alpha,
        },
    )?;
    for handle in &county_handles {
        let county = layers
            .counties
            .filter_eq(&config.county_field, &handle.label)?;
        let style = PathStyle::polygon(
            handle.effective_fill(),
            handle.effective_edge(),
            styles.county_stroke_width,
        );
        if let Some(mark) = path_mark(
            &format!("county_{}", handle.label),
            &county,
            &frame,
            &style,
            2,
        ) {
            marks.push(mark.into());
        }
    }
    log::debug!("drew {} counties", county_handles.len());

    if let Some(mark) = path_mark(
        "water",
        &layers.water,
        &frame,
        &PathStyle::polygon(styles.water, styles.water, styles.water_stroke_width),
        3,
    ) {
        marks.push(mark.into());
    }

    if let Some(mark) = path_mark(
        "rivers",
        &layers.rivers,
        &frame,
        &PathStyle::line(styles.rivers, styles.river_stroke_width),
        4,
    ) {
        marks.push(mark.into());
    }

    if let Some(mark) = symbol_mark(
        "towns",
        &layers.towns.points(),
        &frame,
        SymbolShape::Square,
        styles.towns,
        styles.town_marker_size,
        6,
    ) {
        marks.push(mark.into());
    }

    let town_labels = layers
        .towns
        .labelled_points(&config.town_name_field)?
        .into_iter()
        .map(|(p, name)| (p, title_case(&name)))
        .collect_vec();
    if let Some(mark) = label_mark(
        "town_labels",
        &town_labels,
        &frame,
        styles.town_label_font_size,
        7,
    ) {
        marks.push(mark.into());
    }

    let projection = TransverseMercator::utm(config.utm_zone, true)?;
    let gridlines = make_gridlines(
        &GridlineConfig {
            xlocs: config.gridlines.xlocs.clone(),
            ylocs: config.gridlines.ylocs.clone(),
            font_size: config.gridlines.font_size,
            ..Default::default()
        },
        &projection,
        &frame,
    )?;
    marks.push(gridlines.into());

    let scale_bar = render_scale_bar(&extent, config.scale_bar_anchor)?;
    marks.push(scale_bar.to_scene_group(&frame).into());

    let legend = make_legend(
        &LegendConfig {
            title: Some(config.legend.title.clone()),
            entries: legend_entries(&county_handles, config)?,
            location: LegendLocation::UpperLeft,
            title_font_size: config.legend.title_font_size,
            font_size: config.legend.font_size,
            inner_width: frame.size[0],
            inner_height: frame.size[1],
            ..Default::default()
        },
        &ApproxTextMeasurer::default(),
    )?;
    marks.push(legend.into());

    // frame border above every layer and guide
    marks.push(
        SceneRectMark {
            name: "map_frame_border".to_string(),
            clip: false,
            width: frame.size[0].into(),
            height: frame.size[1].into(),
            fill: Color::transparent().into(),
            stroke: styles.outline_edge.into(),
            stroke_width: 1.0.into(),
            zindex: Some(FRAME_BORDER_ZINDEX),
            ..Default::default()
        }
        .into(),
    );

    let map_group = SceneGroup {
        name: "map_frame".to_string(),
        origin: frame.origin,
        clip: Clip::Rect {
            x: 0.0,
            y: 0.0,
            width: frame.size[0],
            height: frame.size[1],
        },
        marks,
        ..Default::default()
    };

    let mut scene = SceneGraph::new(frame.size[0] + 2.0 * margin, frame.size[1] + 2.0 * margin);
    scene.marks.push(map_group.into());
    Ok(scene)
}

/// Build the map scene and draw it on an SVG canvas at the configured dpi
pub fn render_map(layers: &MapLayers, config: &MapConfig) -> Result<SvgCanvas, CartoMapError> {
    let scene = build_map_scene(layers, config)?;
    Ok(SvgCanvas::from_scene(&scene, config.dpi)?)
}
