//! Bounded month-grid calendar used by the birth-date picker.

pub mod locale;
pub mod month_grid;
pub mod picker_state;

pub use locale::*;
pub use month_grid::*;
pub use picker_state::*;
