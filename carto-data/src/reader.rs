use std::collections::HashMap;
use std::path::Path;

use geo_types::Geometry;
use shapefile::dbase::FieldValue;
use shapefile::{Reader, Shape};

use crate::error::CartoDataError;
use crate::layer::{AttributeValue, Feature, Layer};

impl From<FieldValue> for AttributeValue {
    fn from(value: FieldValue) -> Self {
        match value {
            FieldValue::Character(Some(s)) => AttributeValue::Text(s.trim_end().to_string()),
            FieldValue::Memo(s) => AttributeValue::Text(s),
            FieldValue::Numeric(Some(n)) => AttributeValue::Number(n),
            FieldValue::Float(Some(n)) => AttributeValue::Number(n as f64),
            FieldValue::Double(n) => AttributeValue::Number(n),
            FieldValue::Currency(n) => AttributeValue::Number(n),
            FieldValue::Integer(n) => AttributeValue::Integer(n as i64),
            FieldValue::Logical(Some(b)) => AttributeValue::Bool(b),
            FieldValue::Character(None)
            | FieldValue::Numeric(None)
            | FieldValue::Float(None)
            | FieldValue::Logical(None) => AttributeValue::Null,
            other => AttributeValue::Text(format!("{other:?}")),
        }
    }
}

/// Read every shape and its record from a shapefile.
///
/// The `.dbf` next to the `.shp` provides the attributes. Null shapes are
/// skipped, other shape types are converted to `geo-types` geometries.
pub fn read_layer(path: impl AsRef<Path>) -> Result<Layer, CartoDataError> {
    let path = path.as_ref();
    let shapefile_err = |source| CartoDataError::ShapefileError {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = Reader::from_path(path).map_err(shapefile_err)?;
    let mut features = vec![];
    let mut skipped = 0;
    for result in reader.iter_shapes_and_records() {
        let (shape, record) = result.map_err(shapefile_err)?;
        if matches!(shape, Shape::NullShape) {
            skipped += 1;
            continue;
        }
        let geometry = Geometry::<f64>::try_from(shape).map_err(|e| {
            CartoDataError::UnsupportedGeometry {
                path: path.to_path_buf(),
                message: e.to_string(),
            }
        })?;
        let attributes: HashMap<String, AttributeValue> = record
            .into_iter()
            .map(|(name, value)| (name, AttributeValue::from(value)))
            .collect();
        features.push(Feature {
            geometry,
            attributes,
        });
    }

    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    log::info!(
        "read {} features from {} ({} null shapes skipped)",
        features.len(),
        path.display(),
        skipped
    );
    Ok(Layer::new(name, features))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest(
        value,
        expected,
        case(FieldValue::Character(Some("ANTRIM  ".to_string())), AttributeValue::Text("ANTRIM".to_string())),
        case(FieldValue::Character(None), AttributeValue::Null),
        case(FieldValue::Numeric(Some(2.5)), AttributeValue::Number(2.5)),
        case(FieldValue::Integer(7), AttributeValue::Integer(7)),
        case(FieldValue::Logical(Some(true)), AttributeValue::Bool(true))
    )]
    fn test_field_value_conversion(value: FieldValue, expected: AttributeValue) {
        assert_eq!(AttributeValue::from(value), expected);
    }

    #[test]
    fn test_missing_file() {
        let err = read_layer("does/not/exist.shp").unwrap_err();
        assert!(matches!(err, CartoDataError::ShapefileError { .. }));
    }
}
