pub mod error;
pub mod layer;
pub mod reader;

pub use layer::{AttributeValue, Feature, Layer};
