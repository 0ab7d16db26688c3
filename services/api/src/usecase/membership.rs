use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use gymhub_domain::membership::{MembershipStatus, PlanType};
use gymhub_domain::pagination::PageRequest;

use crate::domain::repository::{MembershipRepository, UserRepository};
use crate::domain::types::{Membership, MembershipPatch, MembershipWithUser};
use crate::error::{ApiError, FieldErrors};

// ── ListMemberships ──────────────────────────────────────────────────────────

pub struct ListMembershipsUseCase<M: MembershipRepository> {
    pub repo: M,
}

impl<M: MembershipRepository> ListMembershipsUseCase<M> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        page: PageRequest,
    ) -> Result<Vec<MembershipWithUser>, ApiError> {
        self.repo.list_by_user(user_id, page.clamped()).await
    }
}

// ── GetMembership ────────────────────────────────────────────────────────────

pub struct GetMembershipUseCase<M: MembershipRepository> {
    pub repo: M,
}

impl<M: MembershipRepository> GetMembershipUseCase<M> {
    pub async fn execute(
        &self,
        membership_id: Uuid,
        user_id: Uuid,
    ) -> Result<MembershipWithUser, ApiError> {
        self.repo
            .find_for_user(membership_id, user_id)
            .await?
            .ok_or(ApiError::MembershipNotFound)
    }
}

// ── CreateMembership (purchase) ──────────────────────────────────────────────

pub struct CreateMembershipInput {
    pub plan_type: PlanType,
    pub total_visits: i32,
    pub price: Decimal,
    pub purchase_date: NaiveDate,
    pub expiry_date: NaiveDate,
}

pub struct CreateMembershipUseCase<M: MembershipRepository, U: UserRepository> {
    pub memberships: M,
    pub users: U,
}

impl<M: MembershipRepository, U: UserRepository> CreateMembershipUseCase<M, U> {
    /// The holder is always the caller; `remaining_visits` starts equal to
    /// `total_visits`.
    pub async fn execute(
        &self,
        caller_id: Uuid,
        input: CreateMembershipInput,
    ) -> Result<MembershipWithUser, ApiError> {
        let mut errors = FieldErrors::default();
        if input.total_visits < 1 {
            errors.push("total_visits", "must be at least 1");
        }
        if input.price < Decimal::ZERO {
            errors.push("price", "must not be negative");
        }
        if input.expiry_date < input.purchase_date {
            errors.push("expiry_date", "must not be before purchase_date");
        }
        errors.into_result()?;

        let holder = self
            .users
            .find_by_id(caller_id)
            .await?
            .ok_or(ApiError::UserNotFound)?;

        let membership = Membership {
            id: Uuid::now_v7(),
            user_id: caller_id,
            plan_type: input.plan_type,
            status: MembershipStatus::Active,
            total_visits: input.total_visits,
            remaining_visits: input.total_visits,
            price: input.price,
            purchase_date: input.purchase_date,
            expiry_date: input.expiry_date,
            created_at: Utc::now(),
        };
        self.memberships.create(&membership).await?;
        Ok(MembershipWithUser {
            membership,
            user_email: holder.email,
        })
    }
}

// ── UpdateMembership ─────────────────────────────────────────────────────────

pub struct UpdateMembershipUseCase<M: MembershipRepository> {
    pub repo: M,
}

impl<M: MembershipRepository> UpdateMembershipUseCase<M> {
    pub async fn execute(
        &self,
        membership_id: Uuid,
        user_id: Uuid,
        patch: MembershipPatch,
    ) -> Result<MembershipWithUser, ApiError> {
        if patch.is_empty() {
            return Err(ApiError::MissingData);
        }
        let updated = self
            .repo
            .update_for_user(membership_id, user_id, patch)
            .await?;
        if !updated {
            return Err(ApiError::MembershipNotFound);
        }
        self.repo
            .find_for_user(membership_id, user_id)
            .await?
            .ok_or(ApiError::MembershipNotFound)
    }
}

// ── DeleteMembership ─────────────────────────────────────────────────────────

pub struct DeleteMembershipUseCase<M: MembershipRepository> {
    pub repo: M,
}

impl<M: MembershipRepository> DeleteMembershipUseCase<M> {
    pub async fn execute(&self, membership_id: Uuid, user_id: Uuid) -> Result<(), ApiError> {
        if self.repo.delete_for_user(membership_id, user_id).await? {
            Ok(())
        } else {
            Err(ApiError::MembershipNotFound)
        }
    }
}
