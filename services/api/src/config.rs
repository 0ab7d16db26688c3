/// API service configuration loaded from environment variables.
#[derive(Debug)]
pub struct ApiConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// HMAC secret for signing JWT access tokens.
    pub jwt_secret: String,
    /// TCP port to listen on (default 3114). Env var: `API_PORT`.
    pub api_port: u16,
    /// Gym-creation policy (default true). Env var: `GYM_CREATE_OWNER_ONLY`.
    /// `true` restricts creation to `gym_owner`/`admin`; `false` admits any
    /// authenticated user.
    pub gym_create_owner_only: bool,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            jwt_secret: std::env::var("JWT_SECRET").expect("JWT_SECRET"),
            api_port: std::env::var("API_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3114),
            gym_create_owner_only: std::env::var("GYM_CREATE_OWNER_ONLY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }
}
