pub mod api;
pub mod middleware;
pub mod models;
pub mod server;
pub mod services;
pub mod utils;
