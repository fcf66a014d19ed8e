pub mod config;
pub mod dtos;
pub mod error;
pub mod handlers;
pub mod models;
pub mod store;
