use axum::http::{header::AUTHORIZATION, HeaderMap};
use thiserror::Error;

use crate::shared::common_types::ApiKey;

/// The scheme an `Authorization` header must carry for an API key, matched with exact case.
pub const API_KEY_SCHEME: &str = "ApiKey";

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiKeyHeaderError {
    #[error("no authorization header included")]
    NoAuthHeader,
    #[error("malformed authorization header")]
    MalformedHeader,
}

/// Extracts the API key from the `Authorization` header.
///
/// The header must have the shape `ApiKey <token>`. Only the first value of the header is
/// looked at, and it is split on its first space, so everything after that space is
/// returned as the key unmodified (`"ApiKey abc 123"` yields `"abc 123"`).
///
/// # Arguments
/// * `headers` - The HTTP headers to read the Authorization header from
///
/// # Returns
/// * `Ok(ApiKey)` - The token following the scheme
/// * `Err(ApiKeyHeaderError::NoAuthHeader)` - If the header is missing or empty
/// * `Err(ApiKeyHeaderError::MalformedHeader)` - If the header is not `ApiKey <token>`
pub fn get_api_key(headers: &HeaderMap) -> Result<ApiKey, ApiKeyHeaderError> {
    let auth_header = match headers.get(AUTHORIZATION) {
        Some(value) if !value.is_empty() => value,
        _ => return Err(ApiKeyHeaderError::NoAuthHeader),
    };

    let (scheme, token) = auth_header
        .to_str()
        .map_err(|_| ApiKeyHeaderError::MalformedHeader)?
        .split_once(' ')
        .ok_or(ApiKeyHeaderError::MalformedHeader)?;

    if scheme != API_KEY_SCHEME {
        return Err(ApiKeyHeaderError::MalformedHeader);
    }

    Ok(token.to_string())
}
