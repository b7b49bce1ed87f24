//! Shared utilities for toolsmith
//!
//! This crate provides common functionality used across the toolsmith
//! workspace, including logging setup and configuration management.

pub mod config;
pub mod logging;

pub use config::Config;
pub use logging::{init_tracing, init_tracing_with};
