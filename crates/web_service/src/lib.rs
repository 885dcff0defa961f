pub mod config;
pub mod controllers;
pub mod dto;
pub mod error;
pub mod server;
pub mod services;

pub use config::ServiceConfig;
pub use server::AppState;
