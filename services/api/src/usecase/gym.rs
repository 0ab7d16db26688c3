use chrono::Utc;
use uuid::Uuid;

use gymhub_domain::gym::GymStatus;
use gymhub_domain::pagination::PageRequest;
use gymhub_domain::role::Role;

use crate::domain::repository::{GymRepository, UserRepository};
use crate::domain::types::{Gym, GymPatch, GymWithOwner};
use crate::error::{ApiError, FieldErrors};

// ── ListGyms ─────────────────────────────────────────────────────────────────

pub struct ListGymsUseCase<G: GymRepository> {
    pub repo: G,
}

impl<G: GymRepository> ListGymsUseCase<G> {
    /// Without `owner_username` only active gyms are listed. With it, all of
    /// that owner's gyms are returned regardless of status, so owners can see
    /// their own pending and suspended listings.
    pub async fn execute(
        &self,
        owner_username: Option<&str>,
        page: PageRequest,
    ) -> Result<Vec<GymWithOwner>, ApiError> {
        let page = page.clamped();
        match owner_username {
            Some(username) => self.repo.list_by_owner_username(username, page).await,
            None => self.repo.list_active(page).await,
        }
    }
}

// ── GetGym ───────────────────────────────────────────────────────────────────

pub struct GetGymUseCase<G: GymRepository> {
    pub repo: G,
}

impl<G: GymRepository> GetGymUseCase<G> {
    /// Active gyms resolve for anyone. Non-active gyms resolve only for their
    /// owner or an admin; everyone else gets a 404 rather than a 403 so the
    /// listing's existence is not leaked.
    pub async fn execute(
        &self,
        gym_id: Uuid,
        caller: Option<(Uuid, Role)>,
    ) -> Result<GymWithOwner, ApiError> {
        let found = self
            .repo
            .find_by_id(gym_id)
            .await?
            .ok_or(ApiError::GymNotFound)?;

        if found.gym.status == GymStatus::Active {
            return Ok(found);
        }
        match caller {
            Some((caller_id, caller_role))
                if caller_role == Role::Admin || found.gym.owner_id == caller_id =>
            {
                Ok(found)
            }
            _ => Err(ApiError::GymNotFound),
        }
    }
}

// ── CreateGym ────────────────────────────────────────────────────────────────

pub struct CreateGymInput {
    pub name: String,
    pub description: String,
    pub address: String,
    pub city: String,
    pub area: String,
    pub phone: String,
    pub amenities: Vec<String>,
    pub hours: String,
    pub image_url: String,
    /// Honored only for admin callers; everyone else starts at `pending`.
    pub status: Option<GymStatus>,
    pub capacity: Option<i32>,
    pub featured: bool,
}

pub struct CreateGymUseCase<G: GymRepository, U: UserRepository> {
    pub gyms: G,
    pub users: U,
    /// When set, creation requires the `gym_owner` or `admin` role.
    pub owner_only: bool,
}

impl<G: GymRepository, U: UserRepository> CreateGymUseCase<G, U> {
    pub async fn execute(
        &self,
        caller_id: Uuid,
        caller_role: Role,
        input: CreateGymInput,
    ) -> Result<GymWithOwner, ApiError> {
        if self.owner_only && !caller_role.can_manage_gyms() {
            return Err(ApiError::Forbidden);
        }

        let mut errors = FieldErrors::default();
        if input.name.trim().is_empty() {
            errors.push("name", "must not be empty");
        }
        if input.address.trim().is_empty() {
            errors.push("address", "must not be empty");
        }
        if input.city.trim().is_empty() {
            errors.push("city", "must not be empty");
        }
        errors.into_result()?;

        // The stamped owner must resolve to a live account.
        let owner = self
            .users
            .find_by_id(caller_id)
            .await?
            .ok_or(ApiError::UserNotFound)?;

        let status = match caller_role {
            Role::Admin => input.status.unwrap_or_default(),
            _ => GymStatus::Pending,
        };
        let gym = Gym {
            id: Uuid::now_v7(),
            owner_id: caller_id,
            name: input.name,
            description: input.description,
            address: input.address,
            city: input.city,
            area: input.area,
            phone: input.phone,
            amenities: input.amenities,
            hours: input.hours,
            image_url: input.image_url,
            status,
            capacity: input.capacity,
            featured: input.featured,
            created_at: Utc::now(),
        };
        self.gyms.create(&gym).await?;
        Ok(GymWithOwner {
            gym,
            owner_email: owner.email,
        })
    }
}

// ── UpdateGym ────────────────────────────────────────────────────────────────

pub struct UpdateGymUseCase<G: GymRepository> {
    pub repo: G,
}

impl<G: GymRepository> UpdateGymUseCase<G> {
    pub async fn execute(&self, gym_id: Uuid, patch: GymPatch) -> Result<GymWithOwner, ApiError> {
        if patch.is_empty() {
            return Err(ApiError::MissingData);
        }

        let mut errors = FieldErrors::default();
        if matches!(patch.name.as_deref(), Some(name) if name.trim().is_empty()) {
            errors.push("name", "must not be empty");
        }
        if matches!(patch.address.as_deref(), Some(address) if address.trim().is_empty()) {
            errors.push("address", "must not be empty");
        }
        if matches!(patch.city.as_deref(), Some(city) if city.trim().is_empty()) {
            errors.push("city", "must not be empty");
        }
        errors.into_result()?;

        self.repo
            .find_by_id(gym_id)
            .await?
            .ok_or(ApiError::GymNotFound)?;
        self.repo.update(gym_id, patch).await?;
        self.repo
            .find_by_id(gym_id)
            .await?
            .ok_or(ApiError::GymNotFound)
    }
}

// ── DeleteGym ────────────────────────────────────────────────────────────────

pub struct DeleteGymUseCase<G: GymRepository> {
    pub repo: G,
}

impl<G: GymRepository> DeleteGymUseCase<G> {
    /// Only the owning user or an admin may delete a listing.
    pub async fn execute(
        &self,
        caller_id: Uuid,
        caller_role: Role,
        gym_id: Uuid,
    ) -> Result<(), ApiError> {
        let found = self
            .repo
            .find_by_id(gym_id)
            .await?
            .ok_or(ApiError::GymNotFound)?;
        if caller_role != Role::Admin && found.gym.owner_id != caller_id {
            return Err(ApiError::Forbidden);
        }
        if self.repo.delete(gym_id).await? {
            Ok(())
        } else {
            Err(ApiError::GymNotFound)
        }
    }
}
