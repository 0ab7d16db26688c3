use anyhow::anyhow;
use argon2::{
    Argon2,
    password_hash::{
        Error as PasswordHashError, PasswordHash, PasswordHasher as _, PasswordVerifier as _,
        SaltString, rand_core::OsRng,
    },
};

use crate::domain::repository::PasswordHasher;
use crate::error::ApiError;

/// Argon2id hasher. Hashing and verification run on the blocking pool so the
/// memory-hard work never stalls request tasks.
#[derive(Clone, Default)]
pub struct Argon2PasswordHasher;

impl PasswordHasher for Argon2PasswordHasher {
    async fn hash(&self, password: &str) -> Result<String, ApiError> {
        let password = password.to_owned();
        tokio::task::spawn_blocking(move || {
            let salt = SaltString::generate(&mut OsRng);
            Argon2::default()
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|e| ApiError::Internal(anyhow!("password hashing: {e}")))
        })
        .await
        .map_err(|e| ApiError::Internal(e.into()))?
    }

    async fn verify(&self, password: &str, password_hash: &str) -> Result<bool, ApiError> {
        let password = password.to_owned();
        let password_hash = password_hash.to_owned();
        tokio::task::spawn_blocking(move || {
            let parsed = PasswordHash::new(&password_hash)
                .map_err(|e| ApiError::Internal(anyhow!("stored hash unparsable: {e}")))?;
            match Argon2::default().verify_password(password.as_bytes(), &parsed) {
                Ok(()) => Ok(true),
                Err(PasswordHashError::Password) => Ok(false),
                Err(e) => Err(ApiError::Internal(anyhow!("password verify: {e}"))),
            }
        })
        .await
        .map_err(|e| ApiError::Internal(e.into()))?
    }
}
