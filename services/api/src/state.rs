use sea_orm::DatabaseConnection;

use gymhub_auth_types::principal::JwtSecretSource;

use crate::infra::db::{DbGymRepository, DbMembershipRepository, DbUserRepository};
use crate::infra::password::Argon2PasswordHasher;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub jwt_secret: String,
    /// Gym-creation policy: when true, only `gym_owner`/`admin` may create.
    pub gym_create_owner_only: bool,
}

impl AppState {
    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn gym_repo(&self) -> DbGymRepository {
        DbGymRepository {
            db: self.db.clone(),
        }
    }

    pub fn membership_repo(&self) -> DbMembershipRepository {
        DbMembershipRepository {
            db: self.db.clone(),
        }
    }

    pub fn password_hasher(&self) -> Argon2PasswordHasher {
        Argon2PasswordHasher
    }
}

impl JwtSecretSource for AppState {
    fn jwt_secret(&self) -> &str {
        &self.jwt_secret
    }
}
