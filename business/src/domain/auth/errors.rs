#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("auth.missing_fields")]
    MissingFields,
    #[error("auth.password_mismatch")]
    PasswordMismatch,
    /// The identity service's generic bad-credentials failure. Presentation
    /// maps this one variant to a localized message; everything else passes
    /// through verbatim.
    #[error("auth.invalid_credentials")]
    InvalidCredentials,
    /// Any other identity service failure, message preserved verbatim.
    #[error("{0}")]
    Gateway(String),
}
