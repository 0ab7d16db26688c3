use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use gymhub_domain::pagination::PageRequest;
use gymhub_domain::role::Role;

use crate::domain::repository::{PasswordHasher, UserRepository};
use crate::domain::types::{User, UserPatch, validate_username};
use crate::error::{ApiError, FieldErrors};

// ── CreateUser (registration) ────────────────────────────────────────────────

pub struct CreateUserInput {
    pub username: String,
    pub email: String,
    pub password: String,
    /// Requested tier; `admin` is never self-assignable.
    pub role: Option<Role>,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub birth_date: Option<NaiveDate>,
    pub emergency_contact: String,
    pub emergency_phone: String,
    pub fitness_goals: String,
    pub profile_image: String,
}

pub struct CreateUserUseCase<R: UserRepository, H: PasswordHasher> {
    pub repo: R,
    pub hasher: H,
}

impl<R: UserRepository, H: PasswordHasher> CreateUserUseCase<R, H> {
    pub async fn execute(&self, input: CreateUserInput) -> Result<User, ApiError> {
        let role = input.role.unwrap_or_default();
        if role == Role::Admin {
            return Err(ApiError::Forbidden);
        }

        let mut errors = FieldErrors::default();
        if !validate_username(&input.username) {
            errors.push(
                "username",
                "1-30 characters: letters, digits, '-' and '_' ('me' is reserved)",
            );
        }
        if !input.email.contains('@') {
            errors.push("email", "must be a valid email address");
        }
        if input.password.len() < 8 {
            errors.push("password", "must be at least 8 characters");
        }
        errors.into_result()?;

        if self.repo.find_by_username(&input.username).await?.is_some() {
            return Err(ApiError::UserAlreadyExists);
        }
        if self.repo.find_by_email(&input.email).await?.is_some() {
            return Err(ApiError::UserAlreadyExists);
        }

        let password_hash = self.hasher.hash(&input.password).await?;
        let now = Utc::now();
        let user = User {
            id: Uuid::now_v7(),
            username: input.username,
            email: input.email,
            password_hash,
            first_name: input.first_name,
            last_name: input.last_name,
            role,
            phone: input.phone,
            address: input.address,
            city: input.city,
            birth_date: input.birth_date,
            emergency_contact: input.emergency_contact,
            emergency_phone: input.emergency_phone,
            fitness_goals: input.fitness_goals,
            profile_image: input.profile_image,
            created_at: now,
            updated_at: now,
        };
        self.repo.create(&user).await?;
        Ok(user)
    }
}

// ── ListUsers ────────────────────────────────────────────────────────────────

pub struct ListUsersUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> ListUsersUseCase<R> {
    pub async fn execute(&self, page: PageRequest) -> Result<Vec<User>, ApiError> {
        self.repo.list(page.clamped()).await
    }
}

// ── GetUser ──────────────────────────────────────────────────────────────────

pub struct GetUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> GetUserUseCase<R> {
    pub async fn execute(&self, user_id: Uuid) -> Result<User, ApiError> {
        self.repo
            .find_by_id(user_id)
            .await?
            .ok_or(ApiError::UserNotFound)
    }
}

// ── UpdateUser ───────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct UpdateUserInput {
    pub email: Option<String>,
    /// Plaintext; hashed here before it touches the patch.
    pub password: Option<String>,
    /// Applied only when the caller is an admin.
    pub role: Option<Role>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub emergency_contact: Option<String>,
    pub emergency_phone: Option<String>,
    pub fitness_goals: Option<String>,
    pub profile_image: Option<String>,
}

pub struct UpdateUserUseCase<R: UserRepository, H: PasswordHasher> {
    pub repo: R,
    pub hasher: H,
}

impl<R: UserRepository, H: PasswordHasher> UpdateUserUseCase<R, H> {
    pub async fn execute(
        &self,
        caller_id: Uuid,
        caller_role: Role,
        target_id: Uuid,
        input: UpdateUserInput,
    ) -> Result<User, ApiError> {
        if caller_id != target_id && caller_role != Role::Admin {
            return Err(ApiError::Forbidden);
        }
        if input.role.is_some() && caller_role != Role::Admin {
            return Err(ApiError::Forbidden);
        }

        let mut errors = FieldErrors::default();
        if let Some(ref email) = input.email {
            if !email.contains('@') {
                errors.push("email", "must be a valid email address");
            }
        }
        if let Some(ref password) = input.password {
            if password.len() < 8 {
                errors.push("password", "must be at least 8 characters");
            }
        }
        errors.into_result()?;

        self.repo
            .find_by_id(target_id)
            .await?
            .ok_or(ApiError::UserNotFound)?;

        let password_hash = match input.password {
            Some(ref password) => Some(self.hasher.hash(password).await?),
            None => None,
        };
        let patch = UserPatch {
            email: input.email,
            password_hash,
            first_name: input.first_name,
            last_name: input.last_name,
            role: input.role,
            phone: input.phone,
            address: input.address,
            city: input.city,
            birth_date: input.birth_date,
            emergency_contact: input.emergency_contact,
            emergency_phone: input.emergency_phone,
            fitness_goals: input.fitness_goals,
            profile_image: input.profile_image,
        };
        if patch.is_empty() {
            return Err(ApiError::MissingData);
        }

        self.repo.update(target_id, patch).await?;
        self.repo
            .find_by_id(target_id)
            .await?
            .ok_or(ApiError::UserNotFound)
    }
}

// ── DeleteUser ───────────────────────────────────────────────────────────────

pub struct DeleteUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> DeleteUserUseCase<R> {
    pub async fn execute(
        &self,
        caller_id: Uuid,
        caller_role: Role,
        target_id: Uuid,
    ) -> Result<(), ApiError> {
        if caller_id != target_id && caller_role != Role::Admin {
            return Err(ApiError::Forbidden);
        }
        if self.repo.delete(target_id).await? {
            Ok(())
        } else {
            Err(ApiError::UserNotFound)
        }
    }
}
