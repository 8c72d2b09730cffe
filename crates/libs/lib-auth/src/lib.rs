//! # Authentication Library
//!
//! Credential core for chirpy: Argon2id password hashing and HS256 access
//! tokens bound to a user id.
//!
//! Both halves are plain synchronous functions over immutable inputs. The
//! signing secret is always passed in by the caller.

pub mod pwd;
pub mod token;

// Re-export commonly used types
pub use pwd::{hash_password, verify_password};
pub use token::{issue_token, issue_token_at, validate_token, validate_token_at, TOKEN_ISSUER};
