//! Application service layer - quoting use cases, config, catalog

pub mod app;
pub mod config;
pub mod constants;
pub mod repository;
