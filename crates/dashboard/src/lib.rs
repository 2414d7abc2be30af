pub mod app;
pub mod client;
pub mod config;
pub mod pagination;
pub mod state;
pub mod ui;
