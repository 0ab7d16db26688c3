use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use gymhub_api::domain::types::MembershipPatch;
use gymhub_api::error::ApiError;
use gymhub_api::usecase::membership::{
    CreateMembershipInput, CreateMembershipUseCase, DeleteMembershipUseCase, GetMembershipUseCase,
    ListMembershipsUseCase, UpdateMembershipUseCase,
};
use gymhub_domain::membership::{MembershipStatus, PlanType};
use gymhub_domain::pagination::PageRequest;
use gymhub_domain::role::Role;

use crate::helpers::{MockMembershipRepo, MockUserRepo, test_membership, test_user};

fn purchase() -> CreateMembershipInput {
    CreateMembershipInput {
        plan_type: PlanType::Professional,
        total_visits: 20,
        price: Decimal::new(7900, 2),
        purchase_date: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
        expiry_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
    }
}

// ── Scoping ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_is_scoped_to_caller() {
    let alice = test_user("alice", Role::Member);
    let bob = test_user("bob", Role::Member);
    let rows = vec![
        test_membership(alice.id),
        test_membership(alice.id),
        test_membership(bob.id),
    ];
    let usecase = ListMembershipsUseCase {
        repo: MockMembershipRepo::new(rows, vec![alice.clone(), bob]),
    };

    let listed = usecase
        .execute(alice.id, PageRequest::default())
        .await
        .unwrap();
    assert_eq!(listed.len(), 2);
    assert!(listed.iter().all(|m| m.membership.user_id == alice.id));
}

#[tokio::test]
async fn foreign_membership_is_not_found_on_get() {
    let alice = test_user("alice", Role::Member);
    let bob = test_user("bob", Role::Member);
    let bobs = test_membership(bob.id);
    let usecase = GetMembershipUseCase {
        repo: MockMembershipRepo::new(vec![bobs.clone()], vec![alice.clone(), bob]),
    };

    let result = usecase.execute(bobs.id, alice.id).await;
    assert!(matches!(result, Err(ApiError::MembershipNotFound)));
}

#[tokio::test]
async fn own_membership_resolves_with_holder_email() {
    let alice = test_user("alice", Role::Member);
    let row = test_membership(alice.id);
    let usecase = GetMembershipUseCase {
        repo: MockMembershipRepo::new(vec![row.clone()], vec![alice.clone()]),
    };

    let found = usecase.execute(row.id, alice.id).await.unwrap();
    assert_eq!(found.membership.id, row.id);
    assert_eq!(found.user_email, alice.email);
}

// ── Purchase ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn purchase_stamps_caller_and_fills_remaining_visits() {
    let alice = test_user("alice", Role::Member);
    let repo = MockMembershipRepo::new(vec![], vec![alice.clone()]);
    let rows = repo.rows_handle();
    let usecase = CreateMembershipUseCase {
        memberships: repo,
        users: MockUserRepo::new(vec![alice.clone()]),
    };

    let created = usecase.execute(alice.id, purchase()).await.unwrap();

    assert_eq!(created.membership.user_id, alice.id);
    assert_eq!(created.membership.status, MembershipStatus::Active);
    assert_eq!(created.membership.total_visits, 20);
    assert_eq!(created.membership.remaining_visits, 20);
    assert_eq!(created.user_email, alice.email);

    let stored = rows.lock().unwrap()[0].clone();
    assert_eq!(stored.user_id, alice.id);
    assert_eq!(stored.remaining_visits, 20);
}

#[tokio::test]
async fn purchase_validates_visits_price_and_dates() {
    let alice = test_user("alice", Role::Member);
    let usecase = CreateMembershipUseCase {
        memberships: MockMembershipRepo::new(vec![], vec![alice.clone()]),
        users: MockUserRepo::new(vec![alice.clone()]),
    };

    let mut input = purchase();
    input.total_visits = 0;
    input.price = Decimal::new(-100, 2);
    input.expiry_date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();

    let result = usecase.execute(alice.id, input).await;
    let Err(ApiError::Validation(fields)) = result else {
        panic!("expected Validation, got {result:?}");
    };
    assert!(fields.0.contains_key("total_visits"));
    assert!(fields.0.contains_key("price"));
    assert!(fields.0.contains_key("expiry_date"));
}

#[tokio::test]
async fn purchase_by_unknown_account_is_not_found() {
    let usecase = CreateMembershipUseCase {
        memberships: MockMembershipRepo::new(vec![], vec![]),
        users: MockUserRepo::empty(),
    };

    let result = usecase.execute(Uuid::now_v7(), purchase()).await;
    assert!(matches!(result, Err(ApiError::UserNotFound)));
}

// ── Update ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn holder_can_cancel_own_membership() {
    let alice = test_user("alice", Role::Member);
    let row = test_membership(alice.id);
    let usecase = UpdateMembershipUseCase {
        repo: MockMembershipRepo::new(vec![row.clone()], vec![alice.clone()]),
    };

    let updated = usecase
        .execute(
            row.id,
            alice.id,
            MembershipPatch {
                status: Some(MembershipStatus::Cancelled),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.membership.status, MembershipStatus::Cancelled);
    assert_eq!(updated.membership.remaining_visits, row.remaining_visits);
}

#[tokio::test]
async fn update_of_foreign_membership_is_not_found() {
    let alice = test_user("alice", Role::Member);
    let bob = test_user("bob", Role::Member);
    let bobs = test_membership(bob.id);
    let repo = MockMembershipRepo::new(vec![bobs.clone()], vec![alice.clone(), bob]);
    let rows = repo.rows_handle();
    let usecase = UpdateMembershipUseCase { repo };

    let result = usecase
        .execute(
            bobs.id,
            alice.id,
            MembershipPatch {
                status: Some(MembershipStatus::Cancelled),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(result, Err(ApiError::MembershipNotFound)));
    // The foreign row is untouched.
    assert_eq!(
        rows.lock().unwrap()[0].status,
        MembershipStatus::Active
    );
}

#[tokio::test]
async fn empty_membership_update_is_missing_data() {
    let alice = test_user("alice", Role::Member);
    let row = test_membership(alice.id);
    let usecase = UpdateMembershipUseCase {
        repo: MockMembershipRepo::new(vec![row.clone()], vec![alice.clone()]),
    };

    let result = usecase
        .execute(row.id, alice.id, MembershipPatch::default())
        .await;
    assert!(matches!(result, Err(ApiError::MissingData)));
}

// ── Delete ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn holder_can_delete_own_membership() {
    let alice = test_user("alice", Role::Member);
    let row = test_membership(alice.id);
    let repo = MockMembershipRepo::new(vec![row.clone()], vec![alice.clone()]);
    let rows = repo.rows_handle();
    let usecase = DeleteMembershipUseCase { repo };

    usecase.execute(row.id, alice.id).await.unwrap();
    assert!(rows.lock().unwrap().is_empty());
}

#[tokio::test]
async fn delete_of_foreign_membership_is_not_found() {
    let alice = test_user("alice", Role::Member);
    let bob = test_user("bob", Role::Member);
    let bobs = test_membership(bob.id);
    let repo = MockMembershipRepo::new(vec![bobs.clone()], vec![alice.clone(), bob]);
    let rows = repo.rows_handle();
    let usecase = DeleteMembershipUseCase { repo };

    let result = usecase.execute(bobs.id, alice.id).await;
    assert!(matches!(result, Err(ApiError::MembershipNotFound)));
    assert_eq!(rows.lock().unwrap().len(), 1);
}
