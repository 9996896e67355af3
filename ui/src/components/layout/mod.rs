pub mod page_header;
pub mod theme_provider;

pub use page_header::*;
pub use theme_provider::*;
