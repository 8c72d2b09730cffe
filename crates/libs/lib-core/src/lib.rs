//! # Core Library
//!
//! Configuration, application errors, and logging setup shared by the chirpy
//! service layers.

pub mod config;
pub mod error;
pub mod log;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, Result};
pub use log::init_tracing;
