//! # Utilities Library
//!
//! Shared helpers for environment variables, time, base64url token segments,
//! and input validation.

pub mod b64;
pub mod envs;
pub mod time;
pub mod validation;

// Re-export commonly used functions
pub use b64::{b64u_decode, b64u_decode_to_string, b64u_encode};
pub use envs::{get_env, parse_env};
pub use time::now_utc;
pub use validation::{clean_chirp, validate_chirp, validate_email, validate_not_empty};
