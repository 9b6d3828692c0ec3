use crate::frame::MapFrame;
use geo_types::{Geometry, LineString, MultiLineString, MultiPolygon, Polygon};
use lyon_path::geom::point;
use lyon_path::Path;

pub trait IntoLyonPath {
    /// Build a canvas path for the geometry placed in `frame`.
    ///
    /// Polygon rings are closed sub-paths (holes included, so the path must be
    /// filled with the even-odd rule). Line strings are open sub-paths.
    /// Returns `None` for geometries that have no outline (points, empty
    /// collections).
    fn to_lyon_path(&self, frame: &MapFrame) -> Option<Path>;
}

fn add_ring(builder: &mut lyon_path::path::Builder, line: &LineString<f64>, frame: &MapFrame, close: bool) -> bool {
    let mut coords = line.coords();
    let Some(first) = coords.next() else {
        return false;
    };
    let [x, y] = frame.to_canvas(first.x, first.y);
    builder.begin(point(x, y));
    for c in coords {
        let [x, y] = frame.to_canvas(c.x, c.y);
        builder.line_to(point(x, y));
    }
    builder.end(close);
    true
}

fn add_polygon(builder: &mut lyon_path::path::Builder, polygon: &Polygon<f64>, frame: &MapFrame) -> bool {
    let mut added = add_ring(builder, polygon.exterior(), frame, true);
    for interior in polygon.interiors() {
        added |= add_ring(builder, interior, frame, true);
    }
    added
}

fn add_geometry(builder: &mut lyon_path::path::Builder, geometry: &Geometry<f64>, frame: &MapFrame) -> bool {
    match geometry {
        Geometry::Polygon(p) => add_polygon(builder, p, frame),
        Geometry::MultiPolygon(mp) => mp
            .iter()
            .fold(false, |added, p| add_polygon(builder, p, frame) | added),
        Geometry::LineString(l) => add_ring(builder, l, frame, false),
        Geometry::MultiLineString(ml) => ml
            .iter()
            .fold(false, |added, l| add_ring(builder, l, frame, false) | added),
        Geometry::Line(l) => add_ring(builder, &LineString::from(vec![l.start, l.end]), frame, false),
        Geometry::Rect(r) => add_polygon(builder, &r.to_polygon(), frame),
        Geometry::Triangle(t) => add_polygon(builder, &t.to_polygon(), frame),
        Geometry::GeometryCollection(gc) => gc
            .iter()
            .fold(false, |added, g| add_geometry(builder, g, frame) | added),
        Geometry::Point(_) | Geometry::MultiPoint(_) => false,
    }
}

fn build(frame: &MapFrame, f: impl FnOnce(&mut lyon_path::path::Builder, &MapFrame) -> bool) -> Option<Path> {
    let mut builder = Path::builder();
    if f(&mut builder, frame) {
        Some(builder.build())
    } else {
        None
    }
}

impl IntoLyonPath for Geometry<f64> {
    fn to_lyon_path(&self, frame: &MapFrame) -> Option<Path> {
        build(frame, |b, f| add_geometry(b, self, f))
    }
}

impl IntoLyonPath for Polygon<f64> {
    fn to_lyon_path(&self, frame: &MapFrame) -> Option<Path> {
        build(frame, |b, f| add_polygon(b, self, f))
    }
}

impl IntoLyonPath for MultiPolygon<f64> {
    fn to_lyon_path(&self, frame: &MapFrame) -> Option<Path> {
        build(frame, |b, f| {
            self.iter().fold(false, |added, p| add_polygon(b, p, f) | added)
        })
    }
}

impl IntoLyonPath for LineString<f64> {
    fn to_lyon_path(&self, frame: &MapFrame) -> Option<Path> {
        build(frame, |b, f| add_ring(b, self, f, false))
    }
}

impl IntoLyonPath for MultiLineString<f64> {
    fn to_lyon_path(&self, frame: &MapFrame) -> Option<Path> {
        build(frame, |b, f| {
            self.iter().fold(false, |added, l| add_ring(b, l, f, false) | added)
        })
    }
}
