/// Identity service configuration.
///
/// Environment variables:
/// - AUTH_BASE_URL: Base URL of the GoTrue-compatible auth API
/// - AUTH_API_KEY: Public API key sent with every identity request
/// - AUTH_JWT_SECRET: Shared secret used to verify session tokens
pub struct AuthConfig {
    pub base_url: String,
    pub api_key: String,
    pub jwt_secret: String,
}

impl AuthConfig {
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("AUTH_BASE_URL").expect("AUTH_BASE_URL must be set"),
            api_key: std::env::var("AUTH_API_KEY").expect("AUTH_API_KEY must be set"),
            jwt_secret: std::env::var("AUTH_JWT_SECRET").expect("AUTH_JWT_SECRET must be set"),
        }
    }
}
