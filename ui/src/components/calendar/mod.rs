pub mod calendar_grid;
pub mod date_picker;

pub use calendar_grid::*;
pub use date_picker::*;
