pub mod api;
pub mod config;
pub mod errors;
pub mod lookup;
pub mod models;
pub mod orchestrator;
pub mod predict;
pub mod render;
pub mod score;
pub mod validate;
