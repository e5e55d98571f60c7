pub mod message;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Re-export for convenience
pub use message::{ConversationView, Message, MessageView};

/// Identity-store record as seen by this service. Read-only here; the auth
/// collaborator owns the table.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub created_at: DateTime<Utc>,
}
