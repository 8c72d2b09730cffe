//! # Time Utilities
//!
//! Clock access for token timestamps. Everything is UTC.

use chrono::{DateTime, Utc};

/// Get current UTC time.
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_utc_has_zero_offset() {
        let now = now_utc();
        assert!(now.to_rfc3339().ends_with("+00:00"));
        assert_eq!(now.naive_utc(), now.naive_local());
    }
}
