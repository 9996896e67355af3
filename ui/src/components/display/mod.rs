pub mod floating_background;
pub mod icons;
pub mod loading_indicator;
pub mod mode_toggle;
pub mod toaster;

pub use floating_background::*;
pub use icons::*;
pub use loading_indicator::*;
pub use mode_toggle::*;
pub use toaster::*;
