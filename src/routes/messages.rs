use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;
use crate::middleware::guards::AuthUser;
use crate::models::MessageView;
use crate::services::message_service::MessageService;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SendMessageRequest {
    #[serde(rename = "receiverId")]
    pub receiver_id: Option<String>,
    pub content: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UserRef {
    pub id: Uuid,
    pub username: String,
}

#[derive(Debug, Serialize)]
pub struct MessageDto {
    pub id: Uuid,
    pub sender: UserRef,
    pub receiver: UserRef,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl From<MessageView> for MessageDto {
    fn from(view: MessageView) -> Self {
        MessageDto {
            id: view.id,
            sender: UserRef {
                id: view.sender_id,
                username: view.sender_username,
            },
            receiver: UserRef {
                id: view.receiver_id,
                username: view.receiver_username,
            },
            content: view.content,
            created_at: view.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct OtherUser {
    pub username: String,
}

#[derive(Debug, Serialize)]
pub struct ConversationResponse {
    pub messages: Vec<MessageDto>,
    #[serde(rename = "otherUser")]
    pub other_user: OtherUser,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: &'static str,
}

pub async fn send_message(
    State(state): State<AppState>,
    user: AuthUser,
    Json(body): Json<SendMessageRequest>,
) -> Result<Json<MessageDto>, AppError> {
    let receiver_raw = body.receiver_id.unwrap_or_default();
    let content = body.content.unwrap_or_default();
    if receiver_raw.is_empty() || content.is_empty() {
        return Err(AppError::BadRequest(
            "receiverId and message content are required".into(),
        ));
    }
    let receiver_id = Uuid::parse_str(&receiver_raw)
        .map_err(|_| AppError::BadRequest("invalid receiver id".into()))?;

    let view = MessageService::send_message(&state.db, user.id, receiver_id, &content).await?;
    Ok(Json(view.into()))
}

pub async fn get_conversation(
    State(state): State<AppState>,
    user: AuthUser,
    Path(peer_id): Path<String>,
) -> Result<Json<ConversationResponse>, AppError> {
    let peer_id =
        Uuid::parse_str(&peer_id).map_err(|_| AppError::BadRequest("invalid user id".into()))?;

    let view = MessageService::list_conversation(&state.db, user.id, peer_id).await?;
    Ok(Json(ConversationResponse {
        messages: view.messages.into_iter().map(Into::into).collect(),
        other_user: OtherUser {
            username: view.peer.username,
        },
    }))
}

pub async fn delete_message(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, AppError> {
    let message_id =
        Uuid::parse_str(&id).map_err(|_| AppError::BadRequest("invalid message id".into()))?;

    MessageService::delete_message(&state.db, user.id, message_id).await?;
    Ok(Json(DeleteResponse { message: "deleted" }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_shape_matches_the_client_contract() {
        let view = MessageView {
            id: Uuid::new_v4(),
            sender_id: Uuid::new_v4(),
            sender_username: "alice".into(),
            receiver_id: Uuid::new_v4(),
            receiver_username: "bob".into(),
            content: "hi".into(),
            created_at: Utc::now(),
        };
        let response = ConversationResponse {
            messages: vec![view.into()],
            other_user: OtherUser {
                username: "alice".into(),
            },
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["otherUser"]["username"], "alice");
        assert_eq!(json["messages"][0]["sender"]["username"], "alice");
        assert_eq!(json["messages"][0]["receiver"]["username"], "bob");
        assert_eq!(json["messages"][0]["content"], "hi");
        assert!(json["messages"][0]["created_at"].is_string());
    }

    #[test]
    fn request_body_uses_camel_case_receiver() {
        let body: SendMessageRequest =
            serde_json::from_str(r#"{"receiverId":"abc","content":"hi"}"#).unwrap();
        assert_eq!(body.receiver_id.as_deref(), Some("abc"));
        assert_eq!(body.content.as_deref(), Some("hi"));

        let empty: SendMessageRequest = serde_json::from_str("{}").unwrap();
        assert!(empty.receiver_id.is_none());
        assert!(empty.content.is_none());
    }
}
