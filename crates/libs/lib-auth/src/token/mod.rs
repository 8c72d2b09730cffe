//! # Access Tokens
//!
//! Issuance and validation of HS256-signed JWTs that bind a user id.
//!
//! Tokens are stateless: validity depends only on the token, the shared
//! secret, and the clock. Validation checks, in order, the signing algorithm,
//! the signature, the issuer, the expiry, and finally the subject. The `*_at`
//! variants take the current time explicitly.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use lib_utils::{b64u_decode_to_string, now_utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Value of the `iss` claim on every token this service issues.
pub const TOKEN_ISSUER: &str = "chirpy";

/// The only accepted signing algorithm.
const TOKEN_ALGORITHM: Algorithm = Algorithm::HS256;

/// Token errors.
///
/// Everything except [`Error::Signing`] means the presented token is invalid.
/// Expiry is kept apart from the rest so callers can ask for a fresh login
/// instead of rejecting the request outright.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to sign token: {0}")]
    Signing(String),

    /// Header names an algorithm other than HS256 (including `none`).
    #[error("Unsupported signing algorithm: {0}")]
    UnsupportedAlgorithm(String),

    #[error("Invalid token signature")]
    BadSignature,

    #[error("Invalid token issuer")]
    BadIssuer,

    #[error("Token has expired")]
    TokenExpired,

    #[error("Token subject is missing or not a valid user id")]
    MissingOrInvalidSubject,

    /// Not a decodable compact JWT, or a required claim is absent.
    #[error("Malformed token: {0}")]
    Malformed(String),
}

impl Error {
    /// Check if this error indicates an expired token.
    pub fn is_expired(&self) -> bool {
        matches!(self, Error::TokenExpired)
    }

    /// Check if this error means the presented token must be rejected.
    pub fn is_token_invalid(&self) -> bool {
        !matches!(self, Error::Signing(_))
    }
}

/// JWT claims carried by an access token.
///
/// Fields are optional so that tokens with absent claims still decode and
/// are rejected with a precise error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Issuer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
    /// Subject (user id)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    /// Issued at time (Unix timestamp)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
    /// Expiration time (Unix timestamp)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

impl Claims {
    /// Claims for `subject`, issued at `now` and expiring after `lifetime`.
    pub fn new(subject: Uuid, now: DateTime<Utc>, lifetime: Duration) -> Result<Self, Error> {
        let exp = now
            .checked_add_signed(lifetime)
            .ok_or_else(|| Error::Signing("token lifetime out of range".to_string()))?;

        Ok(Self {
            iss: Some(TOKEN_ISSUER.to_string()),
            sub: Some(subject.to_string()),
            iat: Some(now.timestamp()),
            exp: Some(exp.timestamp()),
        })
    }
}

/// Only the algorithm is read from the header before verification.
#[derive(Deserialize)]
struct RawHeader {
    alg: Option<String>,
}

/// Issue a token for `subject` that expires `lifetime` from now.
///
/// A zero or negative lifetime yields a token that is already expired.
pub fn issue_token(subject: Uuid, secret: &str, lifetime: Duration) -> Result<String, Error> {
    issue_token_at(subject, secret, lifetime, now_utc())
}

/// Issue a token as if the current time were `now`.
pub fn issue_token_at(
    subject: Uuid,
    secret: &str,
    lifetime: Duration,
    now: DateTime<Utc>,
) -> Result<String, Error> {
    let claims = Claims::new(subject, now, lifetime)?;

    encode(
        &Header::new(TOKEN_ALGORITHM),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| Error::Signing(e.to_string()))
}

/// Validate a token and return the user id it was issued for.
pub fn validate_token(token: &str, secret: &str) -> Result<Uuid, Error> {
    validate_token_at(token, secret, now_utc())
}

/// Validate a token against the clock value `now`.
pub fn validate_token_at(token: &str, secret: &str, now: DateTime<Utc>) -> Result<Uuid, Error> {
    check_algorithm(token)?;

    let claims = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &signature_only_validation(),
    )
    .map_err(map_jwt_error)?
    .claims;

    if claims.iss.as_deref() != Some(TOKEN_ISSUER) {
        return Err(Error::BadIssuer);
    }

    let exp = claims
        .exp
        .ok_or_else(|| Error::Malformed("missing exp claim".to_string()))?;
    if exp <= now.timestamp() {
        return Err(Error::TokenExpired);
    }

    claims
        .sub
        .filter(|sub| !sub.is_empty())
        .and_then(|sub| Uuid::parse_str(&sub).ok())
        .ok_or(Error::MissingOrInvalidSubject)
}

/// Reject any header whose `alg` is not HS256, before the signature is looked at.
///
/// Done by hand because the decoder cannot represent `none` and would report
/// it as a generic parse failure.
fn check_algorithm(token: &str) -> Result<(), Error> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 {
        return Err(Error::Malformed("expected header.payload.signature".to_string()));
    }

    let header_json = b64u_decode_to_string(segments[0])
        .map_err(|e| Error::Malformed(format!("header: {e}")))?;
    let header: RawHeader = serde_json::from_str(&header_json)
        .map_err(|e| Error::Malformed(format!("header: {e}")))?;

    match header.alg {
        Some(alg) if alg == "HS256" => Ok(()),
        Some(alg) => Err(Error::UnsupportedAlgorithm(alg)),
        None => Err(Error::UnsupportedAlgorithm("missing".to_string())),
    }
}

/// The decoder checks algorithm and signature only; claims are checked
/// afterwards against the caller's clock.
fn signature_only_validation() -> Validation {
    let mut validation = Validation::new(TOKEN_ALGORITHM);
    validation.algorithms = vec![TOKEN_ALGORITHM];
    validation.required_spec_claims.clear();
    validation.validate_exp = false;
    validation.validate_nbf = false;
    validation.validate_aud = false;
    validation.leeway = 0;
    validation
}

fn map_jwt_error(err: jsonwebtoken::errors::Error) -> Error {
    match err.kind() {
        ErrorKind::InvalidSignature => Error::BadSignature,
        ErrorKind::InvalidAlgorithm => Error::UnsupportedAlgorithm(err.to_string()),
        _ => Error::Malformed(err.to_string()),
    }
}
