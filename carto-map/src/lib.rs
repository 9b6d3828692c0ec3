pub mod config;
pub mod error;
pub mod layers;
pub mod map;

pub use config::MapConfig;
pub use map::{build_map_scene, render_map, MapLayers};
