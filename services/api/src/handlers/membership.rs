use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use gymhub_auth_types::principal::Principal;
use gymhub_domain::membership::{MembershipStatus, PlanType};
use gymhub_domain::pagination::PageRequest;

use crate::domain::types::{MembershipPatch, MembershipWithUser};
use crate::error::ApiError;
use crate::state::AppState;
use crate::usecase::membership::{
    CreateMembershipInput, CreateMembershipUseCase, DeleteMembershipUseCase, GetMembershipUseCase,
    ListMembershipsUseCase, UpdateMembershipUseCase,
};

// ── Response type ────────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct MembershipResponse {
    pub id: String,
    pub user_id: String,
    /// Derived from the holder row; read-only.
    pub user_email: String,
    pub plan_type: PlanType,
    pub status: MembershipStatus,
    pub total_visits: i32,
    pub remaining_visits: i32,
    pub price: Decimal,
    pub purchase_date: NaiveDate,
    pub expiry_date: NaiveDate,
    #[serde(serialize_with = "gymhub_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<MembershipWithUser> for MembershipResponse {
    fn from(found: MembershipWithUser) -> Self {
        let membership = found.membership;
        Self {
            id: membership.id.to_string(),
            user_id: membership.user_id.to_string(),
            user_email: found.user_email,
            plan_type: membership.plan_type,
            status: membership.status,
            total_visits: membership.total_visits,
            remaining_visits: membership.remaining_visits,
            price: membership.price,
            purchase_date: membership.purchase_date,
            expiry_date: membership.expiry_date,
            created_at: membership.created_at,
        }
    }
}

// ── GET /memberships ─────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
pub struct ListMembershipsQuery {
    #[serde(rename = "per-page")]
    pub per_page: Option<u32>,
    pub page: Option<u32>,
}

pub async fn list_memberships(
    principal: Principal,
    State(state): State<AppState>,
    Query(query): Query<ListMembershipsQuery>,
) -> Result<Json<Vec<MembershipResponse>>, ApiError> {
    let usecase = ListMembershipsUseCase {
        repo: state.membership_repo(),
    };
    let page = PageRequest {
        per_page: query.per_page.unwrap_or(20),
        page: query.page.unwrap_or(1),
    };
    let memberships = usecase.execute(principal.user_id, page).await?;
    Ok(Json(
        memberships
            .into_iter()
            .map(MembershipResponse::from)
            .collect(),
    ))
}

// ── POST /memberships (purchase) ─────────────────────────────────────────────

/// Note the absence of any user field — the holder is always the caller, and
/// `remaining_visits` is derived from `total_visits`.
#[derive(Deserialize)]
pub struct CreateMembershipRequest {
    pub plan_type: PlanType,
    pub total_visits: i32,
    pub price: Decimal,
    pub purchase_date: NaiveDate,
    pub expiry_date: NaiveDate,
}

pub async fn create_membership(
    principal: Principal,
    State(state): State<AppState>,
    Json(body): Json<CreateMembershipRequest>,
) -> Result<(StatusCode, Json<MembershipResponse>), ApiError> {
    let usecase = CreateMembershipUseCase {
        memberships: state.membership_repo(),
        users: state.user_repo(),
    };
    let created = usecase
        .execute(
            principal.user_id,
            CreateMembershipInput {
                plan_type: body.plan_type,
                total_visits: body.total_visits,
                price: body.price,
                purchase_date: body.purchase_date,
                expiry_date: body.expiry_date,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(MembershipResponse::from(created))))
}

// ── GET /memberships/{id} ────────────────────────────────────────────────────

pub async fn get_membership(
    principal: Principal,
    State(state): State<AppState>,
    Path(membership_id): Path<Uuid>,
) -> Result<Json<MembershipResponse>, ApiError> {
    let usecase = GetMembershipUseCase {
        repo: state.membership_repo(),
    };
    let found = usecase.execute(membership_id, principal.user_id).await?;
    Ok(Json(MembershipResponse::from(found)))
}

// ── PUT/PATCH /memberships/{id} ──────────────────────────────────────────────

#[derive(Deserialize, Default)]
pub struct UpdateMembershipRequest {
    pub status: Option<MembershipStatus>,
    pub remaining_visits: Option<i32>,
    pub expiry_date: Option<NaiveDate>,
}

pub async fn update_membership(
    principal: Principal,
    State(state): State<AppState>,
    Path(membership_id): Path<Uuid>,
    Json(body): Json<UpdateMembershipRequest>,
) -> Result<Json<MembershipResponse>, ApiError> {
    let usecase = UpdateMembershipUseCase {
        repo: state.membership_repo(),
    };
    let patch = MembershipPatch {
        status: body.status,
        remaining_visits: body.remaining_visits,
        expiry_date: body.expiry_date,
    };
    let updated = usecase
        .execute(membership_id, principal.user_id, patch)
        .await?;
    Ok(Json(MembershipResponse::from(updated)))
}

// ── DELETE /memberships/{id} ─────────────────────────────────────────────────

pub async fn delete_membership(
    principal: Principal,
    State(state): State<AppState>,
    Path(membership_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let usecase = DeleteMembershipUseCase {
        repo: state.membership_repo(),
    };
    usecase.execute(membership_id, principal.user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
