pub mod api;
pub mod cli;
pub mod configuration;
mod context;
pub mod services;

pub use context::AppContext;
