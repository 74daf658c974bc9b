use reqwest::Client;

/// Shared identity service HTTP client configuration (GoTrue-compatible
/// endpoints: signup, password grant, logout).
pub struct IdentityClient {
    pub client: Client,
    pub api_key: String,
    pub base_url: String,
}

impl IdentityClient {
    pub fn new(base_url: String, api_key: String) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_key,
            base_url,
        }
    }

    /// Returns the registration endpoint URL.
    pub fn signup_url(&self) -> String {
        format!("{}/signup", self.base_url)
    }

    /// Returns the password-grant token endpoint URL.
    pub fn token_password_url(&self) -> String {
        format!("{}/token?grant_type=password", self.base_url)
    }

    /// Returns the session revocation endpoint URL.
    pub fn logout_url(&self) -> String {
        format!("{}/logout", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_endpoint_urls_from_base() {
        let client = IdentityClient::new(
            "https://id.example.com/auth/v1".to_string(),
            "anon-key".to_string(),
        );

        assert_eq!(client.signup_url(), "https://id.example.com/auth/v1/signup");
        assert_eq!(
            client.token_password_url(),
            "https://id.example.com/auth/v1/token?grant_type=password"
        );
        assert_eq!(client.logout_url(), "https://id.example.com/auth/v1/logout");
    }
}
