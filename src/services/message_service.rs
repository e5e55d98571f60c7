use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{ConversationView, Message, MessageView};
use crate::services::user_service::UserService;

pub struct MessageService;

impl MessageService {
    /// Persist one message from `sender_id` to `receiver_id`.
    ///
    /// Validation order: content first, then receiver existence — the store
    /// is never touched for a request that fails local checks. The sender id
    /// comes from the verified credential, but the account may have been
    /// removed since the token was issued, so it is re-resolved here.
    pub async fn send_message(
        db: &Pool<Postgres>,
        sender_id: Uuid,
        receiver_id: Uuid,
        content: &str,
    ) -> AppResult<MessageView> {
        validate_content(content)?;

        let sender = UserService::find_by_id(db, sender_id)
            .await?
            .ok_or(AppError::Unauthorized)?;
        let receiver = UserService::find_by_id(db, receiver_id)
            .await?
            .ok_or_else(|| AppError::BadRequest("receiver does not exist".into()))?;

        let id = Uuid::new_v4();
        let created_at: chrono::DateTime<chrono::Utc> = sqlx::query_scalar(
            "INSERT INTO messages (id, sender_id, receiver_id, content) \
             VALUES ($1, $2, $3, $4) RETURNING created_at",
        )
        .bind(id)
        .bind(sender_id)
        .bind(receiver_id)
        .bind(content)
        .fetch_one(db)
        .await?;

        Ok(MessageView {
            id,
            sender_id,
            sender_username: sender.username,
            receiver_id,
            receiver_username: receiver.username,
            content: content.to_string(),
            created_at,
        })
    }

    /// Fetch the conversation between the caller and `peer_id`: every message
    /// whose party pair is exactly this pair, in either direction, oldest
    /// first. Display names are joined in at read time.
    pub async fn list_conversation(
        db: &Pool<Postgres>,
        caller_id: Uuid,
        peer_id: Uuid,
    ) -> AppResult<ConversationView> {
        let peer = UserService::find_by_id(db, peer_id)
            .await?
            .ok_or(AppError::NotFound)?;

        let messages = sqlx::query_as::<_, MessageView>(
            "SELECT m.id, m.sender_id, su.username AS sender_username, \
                    m.receiver_id, ru.username AS receiver_username, \
                    m.content, m.created_at \
             FROM messages m \
             JOIN users su ON su.id = m.sender_id \
             JOIN users ru ON ru.id = m.receiver_id \
             WHERE (m.sender_id = $1 AND m.receiver_id = $2) \
                OR (m.sender_id = $2 AND m.receiver_id = $1) \
             ORDER BY m.created_at ASC, m.id ASC",
        )
        .bind(caller_id)
        .bind(peer_id)
        .fetch_all(db)
        .await?;

        Ok(ConversationView { messages, peer })
    }

    /// Permanently remove a message. Only its sender may do this; deleting an
    /// id that no longer exists is `NotFound` (callers treat the second
    /// delete as terminal success).
    pub async fn delete_message(
        db: &Pool<Postgres>,
        caller_id: Uuid,
        message_id: Uuid,
    ) -> AppResult<()> {
        let message = sqlx::query_as::<_, Message>(
            "SELECT id, sender_id, receiver_id, content, created_at \
             FROM messages WHERE id = $1",
        )
        .bind(message_id)
        .fetch_optional(db)
        .await?
        .ok_or(AppError::NotFound)?;

        authorize_delete(message.sender_id, caller_id)?;

        sqlx::query("DELETE FROM messages WHERE id = $1")
            .bind(message_id)
            .execute(db)
            .await?;

        Ok(())
    }
}

/// Message content must be non-empty after trimming. Stored as submitted.
fn validate_content(content: &str) -> AppResult<()> {
    if content.trim().is_empty() {
        return Err(AppError::BadRequest(
            "message content is required".into(),
        ));
    }
    Ok(())
}

fn authorize_delete(sender_id: Uuid, caller_id: Uuid) -> AppResult<()> {
    if sender_id != caller_id {
        return Err(AppError::Forbidden);
    }
    Ok(())
}
