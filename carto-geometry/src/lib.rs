pub mod error;
pub mod extent;
pub mod frame;
pub mod geo_to_lyon;
pub mod projection;

pub use geo_types;
pub use extent::MapExtent;
pub use frame::MapFrame;
