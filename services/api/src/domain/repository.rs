#![allow(async_fn_in_trait)]

use uuid::Uuid;

use gymhub_domain::pagination::PageRequest;

use crate::domain::types::{
    Gym, GymPatch, GymWithOwner, Membership, MembershipPatch, MembershipWithUser, User, UserPatch,
};
use crate::error::ApiError;

/// Repository for user accounts.
pub trait UserRepository: Send + Sync {
    async fn list(&self, page: PageRequest) -> Result<Vec<User>, ApiError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, ApiError>;
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, ApiError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError>;
    async fn create(&self, user: &User) -> Result<(), ApiError>;
    async fn update(&self, id: Uuid, patch: UserPatch) -> Result<(), ApiError>;

    /// Delete a user. Returns `true` if a row was deleted.
    async fn delete(&self, id: Uuid) -> Result<bool, ApiError>;
}

/// Repository for gym listings. Read methods join the owner row to expose
/// the derived owner email.
pub trait GymRepository: Send + Sync {
    async fn list_active(&self, page: PageRequest) -> Result<Vec<GymWithOwner>, ApiError>;

    /// All gyms owned by `username`, regardless of status.
    async fn list_by_owner_username(
        &self,
        username: &str,
        page: PageRequest,
    ) -> Result<Vec<GymWithOwner>, ApiError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<GymWithOwner>, ApiError>;
    async fn create(&self, gym: &Gym) -> Result<(), ApiError>;
    async fn update(&self, id: Uuid, patch: GymPatch) -> Result<(), ApiError>;

    /// Delete a gym. Returns `true` if a row was deleted.
    async fn delete(&self, id: Uuid) -> Result<bool, ApiError>;
}

/// Repository for memberships. Every accessor is scoped by holder — rows
/// belonging to other users are invisible, not merely forbidden.
pub trait MembershipRepository: Send + Sync {
    async fn list_by_user(
        &self,
        user_id: Uuid,
        page: PageRequest,
    ) -> Result<Vec<MembershipWithUser>, ApiError>;

    async fn find_for_user(
        &self,
        id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<MembershipWithUser>, ApiError>;

    async fn create(&self, membership: &Membership) -> Result<(), ApiError>;

    /// Scoped update. Returns `false` when no row matches `(id, user_id)`.
    async fn update_for_user(
        &self,
        id: Uuid,
        user_id: Uuid,
        patch: MembershipPatch,
    ) -> Result<bool, ApiError>;

    /// Scoped delete. Returns `false` when no row matches `(id, user_id)`.
    async fn delete_for_user(&self, id: Uuid, user_id: Uuid) -> Result<bool, ApiError>;
}

/// Port for one-way password hashing.
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &str) -> Result<String, ApiError>;
    async fn verify(&self, password: &str, password_hash: &str) -> Result<bool, ApiError>;
}
