use crate::error::AppResult;
use crate::models::User;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

/// Read-only access to the identity store. This service never creates,
/// updates, or deletes user records.
pub struct UserService;

impl UserService {
    pub async fn find_by_id(db: &Pool<Postgres>, id: Uuid) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, created_at FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(db)
        .await?;

        Ok(user)
    }
}
