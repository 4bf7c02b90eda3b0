use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::response::Response;

use super::envelope::error_response;

pub const OWNER_HEADER: &str = "x-user";

/// Caller identity, taken from the `x-user` header the (out of scope)
/// auth layer in front of this service is expected to set.
#[derive(Debug, Clone)]
pub struct Owner(pub String);

impl<S> FromRequestParts<S> for Owner
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(OWNER_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|user| !user.is_empty())
            .map(|user| Owner(user.to_string()))
            .ok_or_else(|| error_response(StatusCode::UNAUTHORIZED, "로그인이 필요합니다."))
    }
}
