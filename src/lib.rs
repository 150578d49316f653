pub mod config;
pub mod error;
pub mod grouping;
pub mod models;
pub mod services;
pub mod store;
pub mod utils;
pub mod views;
