//! Shared configuration for Cashtill.
//!
//! This crate provides configuration management used by the API layer
//! and the server binary. Business logic lives in `cashtill-core`.

pub mod config;

pub use config::AppConfig;
