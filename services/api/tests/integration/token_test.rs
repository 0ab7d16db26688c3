use gymhub_api::domain::repository::PasswordHasher as _;
use gymhub_api::error::ApiError;
use gymhub_api::infra::password::Argon2PasswordHasher;
use gymhub_api::usecase::token::{LoginInput, LoginUseCase, issue_access_token};
use gymhub_auth_types::token::validate_access_token;
use gymhub_domain::role::Role;
use gymhub_testing::auth::TestIdentity;

use crate::helpers::{MockPasswordHasher, MockUserRepo, TEST_JWT_SECRET, test_user};

// ── issue_access_token / validate_access_token ───────────────────────────────

#[tokio::test]
async fn should_issue_access_token_that_validates_successfully() {
    let user = test_user("alice", Role::GymOwner);
    let (token, exp) = issue_access_token(&user, TEST_JWT_SECRET).unwrap();

    assert!(!token.is_empty());
    assert!(exp > 0);

    let info = validate_access_token(&token, TEST_JWT_SECRET).unwrap();
    assert_eq!(info.user_id, user.id);
    assert_eq!(info.role, Role::GymOwner);
    assert_eq!(info.exp, exp);
}

#[tokio::test]
async fn should_reject_token_signed_with_wrong_secret() {
    let user = test_user("alice", Role::Member);
    let (token, _) = issue_access_token(&user, TEST_JWT_SECRET).unwrap();

    assert!(validate_access_token(&token, "wrong-secret").is_err());
}

// ── LoginUseCase ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_login_with_valid_credentials() {
    let user = test_user("alice", Role::Member);
    let usecase = LoginUseCase {
        repo: MockUserRepo::new(vec![user.clone()]),
        hasher: MockPasswordHasher,
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let output = usecase
        .execute(LoginInput {
            username: "alice".to_owned(),
            password: "password123".to_owned(),
        })
        .await
        .unwrap();

    assert_eq!(output.user.id, user.id);
    let info = validate_access_token(&output.access_token, TEST_JWT_SECRET).unwrap();
    assert_eq!(info.user_id, user.id);
    assert_eq!(info.role, Role::Member);
    assert_eq!(info.exp, output.access_token_exp);
}

#[tokio::test]
async fn should_reject_unknown_username() {
    let usecase = LoginUseCase {
        repo: MockUserRepo::empty(),
        hasher: MockPasswordHasher,
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let result = usecase
        .execute(LoginInput {
            username: "ghost".to_owned(),
            password: "password123".to_owned(),
        })
        .await;
    assert!(matches!(result, Err(ApiError::InvalidCredentials)));
}

#[tokio::test]
async fn should_reject_wrong_password() {
    let user = test_user("alice", Role::Member);
    let usecase = LoginUseCase {
        repo: MockUserRepo::new(vec![user]),
        hasher: MockPasswordHasher,
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let result = usecase
        .execute(LoginInput {
            username: "alice".to_owned(),
            password: "wrong-password".to_owned(),
        })
        .await;
    assert!(matches!(result, Err(ApiError::InvalidCredentials)));
}

#[tokio::test]
async fn should_login_against_argon2_stored_hash() {
    let mut user = test_user("alice", Role::Member);
    user.password_hash = Argon2PasswordHasher.hash("secret123").await.unwrap();
    let usecase = LoginUseCase {
        repo: MockUserRepo::new(vec![user.clone()]),
        hasher: Argon2PasswordHasher,
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let output = usecase
        .execute(LoginInput {
            username: "alice".to_owned(),
            password: "secret123".to_owned(),
        })
        .await
        .unwrap();
    assert_eq!(output.user.id, user.id);
}

// ── Test-identity compatibility ──────────────────────────────────────────────

#[tokio::test]
async fn test_identity_tokens_validate_like_login_tokens() {
    let user = test_user("root", Role::Admin);
    let headers = TestIdentity::new(user.id, Role::Admin).headers(TEST_JWT_SECRET);

    let bearer = headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
        .unwrap()
        .to_owned();

    let info = validate_access_token(&bearer, TEST_JWT_SECRET).unwrap();
    assert_eq!(info.user_id, user.id);
    assert_eq!(info.role, Role::Admin);
}
