pub mod analyze;
pub mod batch;
pub mod config;
pub mod export;
pub mod health;
pub mod render;
