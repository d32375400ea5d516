use axum::{
    body::Body,
    extract::FromRequestParts,
    http::{request::Parts, Request},
    middleware::Next,
    response::Response,
};
use tracing::debug;

use crate::{
    authentication::api_key_header::get_api_key,
    shared::{common_types::ApiKey, HttpError},
};

/// Extractor that requires an `Authorization: ApiKey <token>` header.
///
/// Holds the extracted key. Requests without a well-formed header are rejected
/// with `401 Unauthorized` and the extraction error as the body.
#[derive(Debug)]
pub struct ApiKeyGuard(pub ApiKey);

impl<S> FromRequestParts<S> for ApiKeyGuard
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        get_api_key(&parts.headers).map(ApiKeyGuard).map_err(|e| {
            debug!("Rejected request to {} - {:?}", parts.uri.path(), e);
            e.into()
        })
    }
}

/// Middleware guard that requires an API key in the Authorization header.
///
/// On success the extracted `ApiKey` is stored in the request extensions so
/// handlers further down can read it with `Extension<ApiKey>`.
///
/// # Arguments
/// * `req` - The HTTP request to validate
/// * `next` - The next middleware in the chain
///
/// # Returns
/// * `Ok(Response)` - If the header holds an API key, continues to the next middleware
/// * `Err(HttpError)` - UNAUTHORIZED if the header is missing or malformed
pub async fn api_key_guard(req: Request<Body>, next: Next) -> Result<Response, HttpError> {
    let (mut parts, body) = req.into_parts();
    let ApiKeyGuard(api_key) = ApiKeyGuard::from_request_parts(&mut parts, &()).await?;
    parts.extensions.insert(api_key);
    let req = Request::from_parts(parts, body);
    Ok(next.run(req).await)
}
