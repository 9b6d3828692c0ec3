pub mod group;
pub mod mark;
pub mod path;
pub mod rect;
pub mod rule;
pub mod symbol;
pub mod text;

use crate::error::CartoSceneGraphError;
use carto_common::value::ScalarOrArray;

/// Check that an array channel has one value per mark instance
pub(crate) fn check_channel_len<T: Sync + Clone>(
    name: &str,
    channel: &'static str,
    len: u32,
    values: &ScalarOrArray<T>,
) -> Result<(), CartoSceneGraphError> {
    match values {
        ScalarOrArray::Scalar { .. } => Ok(()),
        ScalarOrArray::Array { values } if values.len() == len as usize => Ok(()),
        ScalarOrArray::Array { values } => Err(CartoSceneGraphError::InvalidChannelLength {
            name: name.to_string(),
            channel,
            len: len as usize,
            found: values.len(),
        }),
    }
}
