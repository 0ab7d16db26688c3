use sea_orm::Database;
use tracing::info;

use gymhub_api::config::ApiConfig;
use gymhub_api::router::build_router;
use gymhub_api::state::AppState;

#[tokio::main]
async fn main() {
    gymhub_core::tracing::init_tracing();

    let config = ApiConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let state = AppState {
        db,
        jwt_secret: config.jwt_secret,
        gym_create_owner_only: config.gym_create_owner_only,
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.api_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("api service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
