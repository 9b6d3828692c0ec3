pub mod canvas;
pub mod color;
pub mod error;
pub mod text;
pub mod types;
pub mod value;
