//! Bearer-token principal extractors.

use axum::extract::FromRequestParts;
use http::request::Parts;
use http::{HeaderMap, StatusCode, header};
use uuid::Uuid;

use gymhub_domain::role::Role;

use crate::token::validate_access_token;

/// Source of the JWT signing secret. Implemented by service state so the
/// extractors stay independent of any concrete `AppState`.
pub trait JwtSecretSource {
    fn jwt_secret(&self) -> &str;
}

/// Verified request identity: which user is calling and at what tier.
///
/// Extracted from `Authorization: Bearer <jwt>`. Returns 401 if the header is
/// absent, not bearer-shaped, or the token fails validation. Role enforcement
/// (403) is done by use cases after extraction.
#[derive(Debug, Clone)]
pub struct Principal {
    pub user_id: Uuid,
    pub role: Role,
}

fn bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
        .map(str::to_owned)
}

impl<S> FromRequestParts<S> for Principal
where
    S: JwtSecretSource + Send + Sync,
{
    type Rejection = StatusCode;

    // axum-core 0.5 defines this as `fn -> impl Future + Send` (not `async fn`).
    // In Rust 1.82+ precise capturing, `async fn` captures lifetimes differently,
    // causing E0195. Fix: extract values synchronously, return a 'static async move block.
    fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let token = bearer_token(&parts.headers);
        let secret = state.jwt_secret().to_owned();

        async move {
            let token = token.ok_or(StatusCode::UNAUTHORIZED)?;
            let info = validate_access_token(&token, &secret)
                .map_err(|_| StatusCode::UNAUTHORIZED)?;
            Ok(Self {
                user_id: info.user_id,
                role: info.role,
            })
        }
    }
}

/// Principal for routes readable by anonymous callers.
///
/// A missing `Authorization` header yields `None`; a header that is present
/// but does not validate still rejects with 401 rather than downgrading the
/// caller to anonymous.
#[derive(Debug, Clone)]
pub struct MaybePrincipal(pub Option<Principal>);

impl<S> FromRequestParts<S> for MaybePrincipal
where
    S: JwtSecretSource + Send + Sync,
{
    type Rejection = StatusCode;

    fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let has_header = parts.headers.contains_key(header::AUTHORIZATION);
        let token = bearer_token(&parts.headers);
        let secret = state.jwt_secret().to_owned();

        async move {
            if !has_header {
                return Ok(Self(None));
            }
            let token = token.ok_or(StatusCode::UNAUTHORIZED)?;
            let info = validate_access_token(&token, &secret)
                .map_err(|_| StatusCode::UNAUTHORIZED)?;
            Ok(Self(Some(Principal {
                user_id: info.user_id,
                role: info.role,
            })))
        }
    }
}
