//! Data models for analysis payloads, extracted signals and configuration.

pub mod config;
pub mod payload;
pub mod signals;
