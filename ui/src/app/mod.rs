mod zapfit_page;

pub use zapfit_page::ZapFitApp;
