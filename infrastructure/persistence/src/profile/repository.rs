use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::profile::model::{DEFAULT_PROFILE_NAME, UserProfile};
use business::domain::profile::repository::ProfileRepository;
use business::domain::profile::value_objects::ThemePreference;
use business::domain::shared::value_objects::UserId;

use super::entity::ProfileEntity;

pub struct ProfileRepositoryPostgres {
    pool: PgPool,
}

impl ProfileRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileRepository for ProfileRepositoryPostgres {
    async fn find(&self, user_id: &UserId) -> Result<Option<UserProfile>, RepositoryError> {
        let entity = sqlx::query_as::<_, ProfileEntity>(
            "SELECT id, name, email, theme FROM profiles WHERE id = $1",
        )
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn update_name(&self, user_id: &UserId, name: &str) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO profiles (id, name, email, theme)
            VALUES ($1, $2, '', $3)
            ON CONFLICT (id) DO UPDATE SET name = EXCLUDED.name"#,
        )
        .bind(user_id.as_uuid())
        .bind(name)
        .bind(ThemePreference::default().to_string())
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }

    async fn set_theme(
        &self,
        user_id: &UserId,
        theme: ThemePreference,
    ) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO profiles (id, name, email, theme)
            VALUES ($1, $2, '', $3)
            ON CONFLICT (id) DO UPDATE SET theme = EXCLUDED.theme"#,
        )
        .bind(user_id.as_uuid())
        .bind(DEFAULT_PROFILE_NAME)
        .bind(theme.to_string())
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }
}
