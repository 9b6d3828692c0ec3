pub mod canvas;
pub mod error;
mod marks;
