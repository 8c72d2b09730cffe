//! # Environment Variables
//!
//! Reading and parsing of configuration variables.

use std::env;
use std::str::FromStr;

/// Get an environment variable by name.
///
/// A variable that is set but not valid unicode counts as missing.
pub fn get_env(name: &'static str) -> Result<String, Error> {
    env::var(name).map_err(|_| Error::MissingEnv(name))
}

/// Parse a raw variable value, reporting the variable name on failure.
pub fn parse_env<T: FromStr>(name: &'static str, raw: &str) -> Result<T, Error> {
    raw.trim().parse::<T>().map_err(|_| Error::WrongFormat(name))
}

// region:    --- Error
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    MissingEnv(&'static str),
    WrongFormat(&'static str),
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::MissingEnv(name) => write!(fmt, "{name} must be set in environment"),
            Error::WrongFormat(name) => write!(fmt, "{name} has an invalid format"),
        }
    }
}

impl std::error::Error for Error {}
// endregion: --- Error
