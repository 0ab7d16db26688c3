use axum::{
    Router,
    routing::{delete, get, patch, post, put},
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use gymhub_core::health::{healthz, readyz};
use gymhub_core::middleware::request_id_layer;

use crate::handlers::{
    gym::{create_gym, delete_gym, get_gym, list_gyms, update_gym},
    membership::{
        create_membership, delete_membership, get_membership, list_memberships, update_membership,
    },
    token::create_token,
    user::{create_user, delete_user, get_me, get_user, list_users, update_me, update_user},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Auth
        .route("/auth/token", post(create_token))
        // Users
        .route("/users", get(list_users))
        .route("/users", post(create_user))
        .route("/users/me", get(get_me))
        .route("/users/me", put(update_me))
        .route("/users/{id}", get(get_user))
        .route("/users/{id}", put(update_user))
        .route("/users/{id}", patch(update_user))
        .route("/users/{id}", delete(delete_user))
        // Gyms
        .route("/gyms", get(list_gyms))
        .route("/gyms", post(create_gym))
        .route("/gyms/{id}", get(get_gym))
        .route("/gyms/{id}", put(update_gym))
        .route("/gyms/{id}", patch(update_gym))
        .route("/gyms/{id}", delete(delete_gym))
        // Memberships
        .route("/memberships", get(list_memberships))
        .route("/memberships", post(create_membership))
        .route("/memberships/{id}", get(get_membership))
        .route("/memberships/{id}", put(update_membership))
        .route("/memberships/{id}", patch(update_membership))
        .route("/memberships/{id}", delete(delete_membership))
        .layer(
            ServiceBuilder::new()
                .layer(request_id_layer())
                .layer(TraceLayer::new_for_http()),
        )
        .with_state(state)
}
