use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored message. Immutable after creation; removal is permanent.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Message {
    pub id: Uuid,
    pub sender_id: Uuid,
    pub receiver_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// A message with display names resolved at read time. Usernames are never
/// duplicated onto message rows; they are joined in from the identity store.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct MessageView {
    pub id: Uuid,
    pub sender_id: Uuid,
    pub sender_username: String,
    pub receiver_id: Uuid,
    pub receiver_username: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// One side of a two-party conversation, shaped for the chat page.
#[derive(Debug)]
pub struct ConversationView {
    pub messages: Vec<MessageView>,
    pub peer: super::User,
}
