//! services/api/src/lib.rs
//!
//! The web service: configuration, the YouTube and LLM adapters, and the
//! Axum router that serves the HTML pages and the JSON API.

pub mod adapters;
pub mod config;
pub mod error;
pub mod web;
