//! Core business logic for Cashtill.
//!
//! This crate contains pure business logic with ZERO web dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `change` - Minimum-denomination change calculation

pub mod change;
