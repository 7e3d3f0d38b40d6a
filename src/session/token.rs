//! Bearer token decoding
//!
//! Tokens are JWT-shaped: `header.payload.signature`. Only the payload is
//! read, and only for display identity. The signature is not verified; the
//! server remains the authority on whether a token is valid.

use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use serde_json::Value;

use super::Identity;
use crate::error::TokenError;

/// base64url that accepts payloads with or without trailing `=` padding
const BASE64_URL: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Name shown when the token carries none
pub const DEFAULT_NAME: &str = "User";

/// Decode the identity carried in a token's payload segment.
///
/// The payload must be a JSON object with a `sub` claim. `sub` may be a
/// string or a number; some issuers emit numeric user ids.
pub fn decode_identity(token: &str) -> Result<Identity, TokenError> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 {
        return Err(TokenError::SegmentCount(segments.len()));
    }

    let payload = BASE64_URL.decode(segments[1])?;
    let value: Value = serde_json::from_slice(&payload)?;
    let claims = value.as_object().ok_or(TokenError::MissingSubject)?;

    let id = match claims.get("sub") {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => return Err(TokenError::MissingSubject),
    };

    let email = claims
        .get("email")
        .and_then(Value::as_str)
        .map(str::to_string);

    let name = claims
        .get("name")
        .and_then(Value::as_str)
        .filter(|n| !n.is_empty())
        .unwrap_or(DEFAULT_NAME)
        .to_string();

    Ok(Identity { id, email, name })
}
