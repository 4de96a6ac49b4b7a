// Library interface for ranka (for testing purposes)
pub mod app;
pub mod data;

#[macro_use]
pub mod logging;

pub mod store;
pub mod ui;
