use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use gymhub_auth_types::principal::Principal;
use gymhub_domain::pagination::PageRequest;
use gymhub_domain::role::Role;

use crate::domain::types::User;
use crate::error::ApiError;
use crate::state::AppState;
use crate::usecase::user::{
    CreateUserInput, CreateUserUseCase, DeleteUserUseCase, GetUserUseCase, ListUsersUseCase,
    UpdateUserInput, UpdateUserUseCase,
};

// ── Response type ────────────────────────────────────────────────────────────

/// Wire form of a user. The password hash is deliberately not part of this
/// field list.
#[derive(Serialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub birth_date: Option<NaiveDate>,
    pub emergency_contact: String,
    pub emergency_phone: String,
    pub fitness_goals: String,
    pub profile_image: String,
    #[serde(serialize_with = "gymhub_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "gymhub_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            role: user.role,
            phone: user.phone,
            address: user.address,
            city: user.city,
            birth_date: user.birth_date,
            emergency_contact: user.emergency_contact,
            emergency_phone: user.emergency_phone,
            fitness_goals: user.fitness_goals,
            profile_image: user.profile_image,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

// ── POST /users (registration) ───────────────────────────────────────────────

/// Required fields default to empty so absence surfaces as a field error
/// rather than a body-decoding rejection.
#[derive(Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    pub role: Option<Role>,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    pub birth_date: Option<NaiveDate>,
    #[serde(default)]
    pub emergency_contact: String,
    #[serde(default)]
    pub emergency_phone: String,
    #[serde(default)]
    pub fitness_goals: String,
    #[serde(default)]
    pub profile_image: String,
}

pub async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let usecase = CreateUserUseCase {
        repo: state.user_repo(),
        hasher: state.password_hasher(),
    };
    let user = usecase
        .execute(CreateUserInput {
            username: body.username,
            email: body.email,
            password: body.password,
            role: body.role,
            first_name: body.first_name,
            last_name: body.last_name,
            phone: body.phone,
            address: body.address,
            city: body.city,
            birth_date: body.birth_date,
            emergency_contact: body.emergency_contact,
            emergency_phone: body.emergency_phone,
            fitness_goals: body.fitness_goals,
            profile_image: body.profile_image,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

// ── GET /users ───────────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
pub struct ListUsersQuery {
    #[serde(rename = "per-page")]
    pub per_page: Option<u32>,
    pub page: Option<u32>,
}

pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<ListUsersQuery>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let usecase = ListUsersUseCase {
        repo: state.user_repo(),
    };
    let page = PageRequest {
        per_page: query.per_page.unwrap_or(20),
        page: query.page.unwrap_or(1),
    };
    let users = usecase.execute(page).await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

// ── GET /users/{id} ──────────────────────────────────────────────────────────

pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<UserResponse>, ApiError> {
    let usecase = GetUserUseCase {
        repo: state.user_repo(),
    };
    let user = usecase.execute(user_id).await?;
    Ok(Json(UserResponse::from(user)))
}

// ── PUT/PATCH /users/{id} ────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
pub struct UpdateUserRequest {
    pub email: Option<String>,
    pub password: Option<String>,
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

impl From<UpdateUserRequest> for UpdateUserInput {
    fn from(body: UpdateUserRequest) -> Self {
        Self {
            email: body.email,
            password: body.password,
            role: body.role,
            first_name: body.first_name,
            last_name: body.last_name,
            phone: body.phone,
            address: body.address,
            city: body.city,
            birth_date: body.birth_date,
            emergency_contact: body.emergency_contact,
            emergency_phone: body.emergency_phone,
            fitness_goals: body.fitness_goals,
            profile_image: body.profile_image,
        }
    }
}

pub async fn update_user(
    principal: Principal,
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(body): Json<UpdateUserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let usecase = UpdateUserUseCase {
        repo: state.user_repo(),
        hasher: state.password_hasher(),
    };
    let user = usecase
        .execute(principal.user_id, principal.role, user_id, body.into())
        .await?;
    Ok(Json(UserResponse::from(user)))
}

// ── DELETE /users/{id} ───────────────────────────────────────────────────────

pub async fn delete_user(
    principal: Principal,
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let usecase = DeleteUserUseCase {
        repo: state.user_repo(),
    };
    usecase
        .execute(principal.user_id, principal.role, user_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── GET /users/me ────────────────────────────────────────────────────────────

pub async fn get_me(
    principal: Principal,
    State(state): State<AppState>,
) -> Result<Json<UserResponse>, ApiError> {
    let usecase = GetUserUseCase {
        repo: state.user_repo(),
    };
    let user = usecase.execute(principal.user_id).await?;
    Ok(Json(UserResponse::from(user)))
}

// ── PUT /users/me ────────────────────────────────────────────────────────────

/// Self-service profile update. Same shape as [`UpdateUserRequest`] minus
/// `role` — the tier cannot be changed through the self endpoint.
#[derive(Deserialize, Default)]
pub struct UpdateMeRequest {
    pub email: Option<String>,
    pub password: Option<String>,
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

pub async fn update_me(
    principal: Principal,
    State(state): State<AppState>,
    Json(body): Json<UpdateMeRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let usecase = UpdateUserUseCase {
        repo: state.user_repo(),
        hasher: state.password_hasher(),
    };
    let input = UpdateUserInput {
        email: body.email,
        password: body.password,
        role: None,
        first_name: body.first_name,
        last_name: body.last_name,
        phone: body.phone,
        address: body.address,
        city: body.city,
        birth_date: body.birth_date,
        emergency_contact: body.emergency_contact,
        emergency_phone: body.emergency_phone,
        fitness_goals: body.fitness_goals,
        profile_image: body.profile_image,
    };
    let user = usecase
        .execute(principal.user_id, principal.role, principal.user_id, input)
        .await?;
    Ok(Json(UserResponse::from(user)))
}
