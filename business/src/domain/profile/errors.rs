#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
