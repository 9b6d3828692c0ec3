pub mod error;
pub mod gridlines;
pub mod legend;
pub mod scalebar;
