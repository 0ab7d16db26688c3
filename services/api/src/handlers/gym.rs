use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use gymhub_auth_types::principal::{MaybePrincipal, Principal};
use gymhub_domain::gym::GymStatus;
use gymhub_domain::pagination::PageRequest;

use crate::domain::types::{GymPatch, GymWithOwner};
use crate::error::ApiError;
use crate::state::AppState;
use crate::usecase::gym::{
    CreateGymInput, CreateGymUseCase, DeleteGymUseCase, GetGymUseCase, ListGymsUseCase,
    UpdateGymUseCase,
};

// ── Response type ────────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct GymResponse {
    pub id: String,
    pub owner_id: String,
    /// Derived from the owner row; read-only.
    pub owner_email: String,
    pub name: String,
    pub description: String,
    pub address: String,
    pub city: String,
    pub area: String,
    pub phone: String,
    pub amenities: Vec<String>,
    pub hours: String,
    pub image_url: String,
    pub status: GymStatus,
    pub capacity: Option<i32>,
    pub featured: bool,
    #[serde(serialize_with = "gymhub_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<GymWithOwner> for GymResponse {
    fn from(found: GymWithOwner) -> Self {
        let gym = found.gym;
        Self {
            id: gym.id.to_string(),
            owner_id: gym.owner_id.to_string(),
            owner_email: found.owner_email,
            name: gym.name,
            description: gym.description,
            address: gym.address,
            city: gym.city,
            area: gym.area,
            phone: gym.phone,
            amenities: gym.amenities,
            hours: gym.hours,
            image_url: gym.image_url,
            status: gym.status,
            capacity: gym.capacity,
            featured: gym.featured,
            created_at: gym.created_at,
        }
    }
}

// ── GET /gyms ────────────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
pub struct ListGymsQuery {
    pub owner_username: Option<String>,
    #[serde(rename = "per-page")]
    pub per_page: Option<u32>,
    pub page: Option<u32>,
}

pub async fn list_gyms(
    State(state): State<AppState>,
    Query(query): Query<ListGymsQuery>,
) -> Result<Json<Vec<GymResponse>>, ApiError> {
    let usecase = ListGymsUseCase {
        repo: state.gym_repo(),
    };
    let page = PageRequest {
        per_page: query.per_page.unwrap_or(20),
        page: query.page.unwrap_or(1),
    };
    let gyms = usecase.execute(query.owner_username.as_deref(), page).await?;
    Ok(Json(gyms.into_iter().map(GymResponse::from).collect()))
}

// ── POST /gyms ───────────────────────────────────────────────────────────────

/// Note the absence of any owner field — the owner is always the caller.
/// Required fields default to empty so absence surfaces as a field error.
#[derive(Deserialize)]
pub struct CreateGymRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub area: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub hours: String,
    #[serde(default)]
    pub image_url: String,
    pub status: Option<GymStatus>,
    pub capacity: Option<i32>,
    #[serde(default)]
    pub featured: bool,
}

pub async fn create_gym(
    principal: Principal,
    State(state): State<AppState>,
    Json(body): Json<CreateGymRequest>,
) -> Result<(StatusCode, Json<GymResponse>), ApiError> {
    let usecase = CreateGymUseCase {
        gyms: state.gym_repo(),
        users: state.user_repo(),
        owner_only: state.gym_create_owner_only,
    };
    let created = usecase
        .execute(
            principal.user_id,
            principal.role,
            CreateGymInput {
                name: body.name,
                description: body.description,
                address: body.address,
                city: body.city,
                area: body.area,
                phone: body.phone,
                amenities: body.amenities,
                hours: body.hours,
                image_url: body.image_url,
                status: body.status,
                capacity: body.capacity,
                featured: body.featured,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(GymResponse::from(created))))
}

// ── GET /gyms/{id} ───────────────────────────────────────────────────────────

pub async fn get_gym(
    MaybePrincipal(principal): MaybePrincipal,
    State(state): State<AppState>,
    Path(gym_id): Path<Uuid>,
) -> Result<Json<GymResponse>, ApiError> {
    let usecase = GetGymUseCase {
        repo: state.gym_repo(),
    };
    let caller = principal.map(|p| (p.user_id, p.role));
    let found = usecase.execute(gym_id, caller).await?;
    Ok(Json(GymResponse::from(found)))
}

// ── PUT/PATCH /gyms/{id} ─────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
pub struct UpdateGymRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub area: Option<String>,
    pub phone: Option<String>,
    pub amenities: Option<Vec<String>>,
    pub hours: Option<String>,
    pub image_url: Option<String>,
    pub status: Option<GymStatus>,
    pub capacity: Option<i32>,
    pub featured: Option<bool>,
}

pub async fn update_gym(
    _principal: Principal,
    State(state): State<AppState>,
    Path(gym_id): Path<Uuid>,
    Json(body): Json<UpdateGymRequest>,
) -> Result<Json<GymResponse>, ApiError> {
    let usecase = UpdateGymUseCase {
        repo: state.gym_repo(),
    };
    let patch = GymPatch {
        name: body.name,
        description: body.description,
        address: body.address,
        city: body.city,
        area: body.area,
        phone: body.phone,
        amenities: body.amenities,
        hours: body.hours,
        image_url: body.image_url,
        status: body.status,
        capacity: body.capacity,
        featured: body.featured,
    };
    let updated = usecase.execute(gym_id, patch).await?;
    Ok(Json(GymResponse::from(updated)))
}

// ── DELETE /gyms/{id} ────────────────────────────────────────────────────────

pub async fn delete_gym(
    principal: Principal,
    State(state): State<AppState>,
    Path(gym_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let usecase = DeleteGymUseCase {
        repo: state.gym_repo(),
    };
    usecase
        .execute(principal.user_id, principal.role, gym_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
