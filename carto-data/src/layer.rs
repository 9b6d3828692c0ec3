use std::collections::HashMap;
use std::fmt;

use carto_geometry::MapExtent;
use geo_types::{Geometry, Point};
use itertools::Itertools;

use crate::error::CartoDataError;

/// A single attribute value from a feature's record
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    Text(String),
    Number(f64),
    Integer(i64),
    Bool(bool),
    Null,
}

impl AttributeValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Text(s) => write!(f, "{s}"),
            AttributeValue::Number(n) => write!(f, "{n}"),
            AttributeValue::Integer(n) => write!(f, "{n}"),
            AttributeValue::Bool(b) => write!(f, "{b}"),
            AttributeValue::Null => Ok(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub geometry: Geometry<f64>,
    pub attributes: HashMap<String, AttributeValue>,
}

impl Feature {
    pub fn new(geometry: impl Into<Geometry<f64>>) -> Self {
        Self {
            geometry: geometry.into(),
            attributes: HashMap::new(),
        }
    }

    pub fn with_attribute(mut self, field: &str, value: AttributeValue) -> Self {
        self.attributes.insert(field.to_string(), value);
        self
    }

    pub fn attribute(&self, field: &str) -> Option<&AttributeValue> {
        self.attributes.get(field)
    }
}

/// Features read from one data source, in file order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Layer {
    pub name: String,
    pub features: Vec<Feature>,
}

impl Layer {
    pub fn new(name: impl Into<String>, features: Vec<Feature>) -> Self {
        Self {
            name: name.into(),
            features,
        }
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn geometries(&self) -> impl Iterator<Item = &Geometry<f64>> {
        self.features.iter().map(|f| &f.geometry)
    }

    /// Bounds of every feature, `None` for an empty layer
    pub fn total_bounds(&self) -> Option<MapExtent> {
        MapExtent::from_geometries(self.geometries())
    }

    fn check_field(&self, field: &str) -> Result<(), CartoDataError> {
        if self.features.iter().any(|f| f.attributes.contains_key(field)) {
            Ok(())
        } else {
            Err(CartoDataError::MissingAttribute {
                layer: self.name.clone(),
                field: field.to_string(),
            })
        }
    }

    /// Distinct non-null text values of `field`, sorted
    pub fn unique_values(&self, field: &str) -> Result<Vec<String>, CartoDataError> {
        self.check_field(field)?;
        Ok(self
            .features
            .iter()
            .filter_map(|f| f.attribute(field))
            .filter(|v| **v != AttributeValue::Null)
            .map(|v| v.to_string())
            .sorted()
            .dedup()
            .collect())
    }

    /// Features whose `field` renders as `value`
    pub fn filter_eq(&self, field: &str, value: &str) -> Result<Layer, CartoDataError> {
        self.check_field(field)?;
        let features = self
            .features
            .iter()
            .filter(|f| f.attribute(field).is_some_and(|v| v.to_string() == value))
            .cloned()
            .collect();
        Ok(Layer::new(format!("{}[{field}={value}]", self.name), features))
    }

    /// Point coordinates with their feature's `field` value as text (empty
    /// when null). Multipoints are flattened in the same order as
    /// [`Layer::points`], every part carrying the feature's label.
    pub fn labelled_points(&self, field: &str) -> Result<Vec<(Point<f64>, String)>, CartoDataError> {
        self.check_field(field)?;
        Ok(self
            .features
            .iter()
            .flat_map(|f| {
                let label = f.attribute(field).map(|v| v.to_string()).unwrap_or_default();
                feature_points(f)
                    .into_iter()
                    .map(move |p| (p, label.clone()))
            })
            .collect())
    }

    /// All point coordinates, multipoints flattened
    pub fn points(&self) -> Vec<Point<f64>> {
        self.features.iter().flat_map(feature_points).collect()
    }
}

fn feature_points(feature: &Feature) -> Vec<Point<f64>> {
    match &feature.geometry {
        Geometry::Point(p) => vec![*p],
        Geometry::MultiPoint(mp) => mp.0.clone(),
        _ => vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::{point, polygon, MultiPoint};

    fn counties() -> Layer {
        let square = |x: f64| polygon![(x: x, y: 0.0), (x: x + 1.0, y: 0.0), (x: x + 1.0, y: 1.0), (x: x, y: 1.0)];
        Layer::new(
            "counties",
            vec![
                Feature::new(square(0.0)).with_attribute("CountyName", AttributeValue::Text("DOWN".into())),
                Feature::new(square(1.0)).with_attribute("CountyName", AttributeValue::Text("ANTRIM".into())),
                Feature::new(square(2.0)).with_attribute("CountyName", AttributeValue::Text("DOWN".into())),
                Feature::new(square(3.0)).with_attribute("CountyName", AttributeValue::Null),
            ],
        )
    }

    #[test]
    fn test_unique_values_sorted() {
        assert_eq!(counties().unique_values("CountyName").unwrap(), vec!["ANTRIM", "DOWN"]);
    }

    #[test]
    fn test_filter_eq() {
        let down = counties().filter_eq("CountyName", "DOWN").unwrap();
        assert_eq!(down.len(), 2);
        assert_eq!(down.total_bounds(), Some(MapExtent::new(0.0, 3.0, 0.0, 1.0)));
    }

    #[test]
    fn test_missing_attribute() {
        assert!(matches!(
            counties().unique_values("TOWN_NAME"),
            Err(CartoDataError::MissingAttribute { .. })
        ));
    }

    #[test]
    fn test_points_and_labels() {
        let towns = Layer::new(
            "towns",
            vec![
                Feature::new(point!(x: 1.0, y: 2.0))
                    .with_attribute("TOWN_NAME", AttributeValue::Text("BELFAST".into())),
                Feature::new(point!(x: 3.0, y: 4.0)),
            ],
        );
        assert_eq!(towns.points().len(), 2);
        let labelled = towns.labelled_points("TOWN_NAME").unwrap();
        assert_eq!(labelled[0].1, "BELFAST");
        assert_eq!(labelled[1].1, "");
        assert_eq!(towns.total_bounds(), Some(MapExtent::new(1.0, 3.0, 2.0, 4.0)));
    }

    #[test]
    fn test_multipoint_towns_are_labelled_per_part() {
        let towns = Layer::new(
            "towns",
            vec![
                Feature::new(MultiPoint::from(vec![(1.0, 2.0), (5.0, 6.0)]))
                    .with_attribute("TOWN_NAME", AttributeValue::Text("LISBURN".into())),
                Feature::new(point!(x: 3.0, y: 4.0))
                    .with_attribute("TOWN_NAME", AttributeValue::Text("NEWRY".into())),
            ],
        );
        let labelled = towns.labelled_points("TOWN_NAME").unwrap();
        assert_eq!(towns.points().len(), labelled.len());
        assert_eq!(
            labelled.iter().map(|(_, l)| l.as_str()).collect::<Vec<_>>(),
            vec!["LISBURN", "LISBURN", "NEWRY"]
        );
        assert_eq!(labelled[1].0, point!(x: 5.0, y: 6.0));
    }
}
