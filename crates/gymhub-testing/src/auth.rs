//! Signed-token helpers for integration tests.
//!
//! Routes authenticate with `Authorization: Bearer <jwt>`; these helpers mint
//! real HS256 tokens for a chosen identity so no login round-trip is needed.

use http::{HeaderMap, HeaderValue, header};
use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;

use gymhub_auth_types::token::{ACCESS_TOKEN_EXP, TokenClaims};
use gymhub_domain::role::Role;

/// Configurable identity for test requests.
pub struct TestIdentity {
    pub user_id: Uuid,
    pub role: Role,
}

impl TestIdentity {
    pub fn new(user_id: Uuid, role: Role) -> Self {
        Self { user_id, role }
    }

    /// Mint a signed access token for this identity.
    pub fn token(&self, secret: &str) -> String {
        let exp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("system clock before UNIX epoch")
            .as_secs()
            + ACCESS_TOKEN_EXP;
        let claims = TokenClaims {
            sub: self.user_id.to_string(),
            role: self.role,
            exp,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .expect("token encoding")
    }

    /// Return headers carrying this identity as a bearer token.
    pub fn headers(&self, secret: &str) -> HeaderMap {
        let mut map = HeaderMap::new();
        map.insert(
            header::AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.token(secret))).expect("header value"),
        );
        map
    }
}
