//! Data models for conversions and configuration.

pub mod config;
pub mod conversion;
