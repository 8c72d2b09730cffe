//! # Base64url Segments
//!
//! Compact tokens are three base64url segments (no padding) joined by `.`.
//! These helpers encode and decode a single segment.

use base64::{engine::general_purpose, Engine as _};

/// Encode bytes to a base64 URL-safe string (no padding).
pub fn b64u_encode(content: impl AsRef<[u8]>) -> String {
    general_purpose::URL_SAFE_NO_PAD.encode(content)
}

/// Decode a base64 URL-safe string to bytes.
pub fn b64u_decode(b64u: &str) -> Result<Vec<u8>, Error> {
    general_purpose::URL_SAFE_NO_PAD
        .decode(b64u)
        .map_err(|_| Error::FailToB64uDecode)
}

/// Decode a base64 URL-safe string to a UTF-8 string.
pub fn b64u_decode_to_string(b64u: &str) -> Result<String, Error> {
    let bytes = b64u_decode(b64u)?;
    String::from_utf8(bytes).map_err(|_| Error::NotUtf8)
}

// region:    --- Error
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    FailToB64uDecode,
    NotUtf8,
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}
// endregion: --- Error

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_header_segment() {
        // Standard HS256 header as emitted by most JWT libraries.
        let segment = "eyJ0eXAiOiJKV1QiLCJhbGciOiJIUzI1NiJ9";
        let json = b64u_decode_to_string(segment).expect("segment should decode");
        assert_eq!(json, r#"{"typ":"JWT","alg":"HS256"}"#);
        assert_eq!(b64u_encode(json), segment);
    }

    #[test]
    fn test_rejects_padding_and_garbage() {
        assert_eq!(b64u_decode("YQ=="), Err(Error::FailToB64uDecode));
        assert_eq!(b64u_decode("not base64!"), Err(Error::FailToB64uDecode));
        assert_eq!(b64u_decode_to_string(&b64u_encode([0xff, 0xfe])), Err(Error::NotUtf8));
    }
}
