pub mod api;
pub mod clients;
pub mod config;
pub mod creators;
pub mod dispatcher;
pub mod errors;
pub mod models;
pub mod utils;
