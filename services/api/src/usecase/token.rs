use jsonwebtoken::{EncodingKey, Header, encode};
use std::time::{SystemTime, UNIX_EPOCH};

use gymhub_auth_types::token::{ACCESS_TOKEN_EXP, TokenClaims};

use crate::domain::repository::{PasswordHasher, UserRepository};
use crate::domain::types::User;
use crate::error::ApiError;

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before UNIX epoch")
        .as_secs()
}

/// Sign an access token for `user`. Returns the token and its expiry.
pub fn issue_access_token(user: &User, secret: &str) -> Result<(String, u64), ApiError> {
    let exp = now_secs() + ACCESS_TOKEN_EXP;
    let claims = TokenClaims {
        sub: user.id.to_string(),
        role: user.role,
        exp,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| ApiError::Internal(e.into()))?;
    Ok((token, exp))
}

// ── Login ────────────────────────────────────────────────────────────────────

pub struct LoginInput {
    pub username: String,
    pub password: String,
}

#[derive(Debug)]
pub struct LoginOutput {
    pub user: User,
    pub access_token: String,
    pub access_token_exp: u64,
}

pub struct LoginUseCase<R: UserRepository, H: PasswordHasher> {
    pub repo: R,
    pub hasher: H,
    pub jwt_secret: String,
}

impl<R: UserRepository, H: PasswordHasher> LoginUseCase<R, H> {
    /// Unknown usernames and wrong passwords fail identically, with no field
    /// detail.
    pub async fn execute(&self, input: LoginInput) -> Result<LoginOutput, ApiError> {
        let user = self
            .repo
            .find_by_username(&input.username)
            .await?
            .ok_or(ApiError::InvalidCredentials)?;

        if !self
            .hasher
            .verify(&input.password, &user.password_hash)
            .await?
        {
            return Err(ApiError::InvalidCredentials);
        }

        let (access_token, access_token_exp) = issue_access_token(&user, &self.jwt_secret)?;
        Ok(LoginOutput {
            user,
            access_token,
            access_token_exp,
        })
    }
}
