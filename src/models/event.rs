//! 实时通道事件
//!
//! 帧格式为 `{"event": <名称>, "data": <负载>}`。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::personality::PersonalityKey;

/// 客户端发送的聊天消息
#[derive(Debug, Clone, Deserialize)]
pub struct ChatMessagePayload {
    pub message: String,
    #[serde(default)]
    pub personality: Option<PersonalityKey>,
}

/// 人格切换负载，兼容 `{"personality": "curious"}` 与裸字符串 `"curious"`
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PersonalityUpdate {
    Wrapped { personality: PersonalityKey },
    Bare(PersonalityKey),
}

impl PersonalityUpdate {
    pub fn into_key(self) -> PersonalityKey {
        match self {
            PersonalityUpdate::Wrapped { personality } | PersonalityUpdate::Bare(personality) => {
                personality
            }
        }
    }
}

/// 入站事件
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ClientEvent {
    ChatMessage(ChatMessagePayload),
    UpdatePersonality(PersonalityUpdate),
    Ping,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConnectedPayload {
    pub id: String,
    pub personality: PersonalityKey,
    pub level: u32,
    pub xp: u32,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AiResponsePayload {
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub user_level: u32,
    pub user_xp: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelUpPayload {
    pub new_level: u32,
    pub message: String,
}

impl LevelUpPayload {
    pub fn new(new_level: u32) -> Self {
        Self {
            new_level,
            message: format!("🎉 Congratulations! You've reached level {}!", new_level),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PersonalityUpdatedPayload {
    pub personality: PersonalityKey,
}

#[derive(Debug, Clone, Serialize)]
pub struct PongPayload {
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorPayload {
    pub message: String,
}

/// 出站事件
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ServerEvent {
    Connected(ConnectedPayload),
    AiResponse(AiResponsePayload),
    LevelUp(LevelUpPayload),
    PersonalityUpdated(PersonalityUpdatedPayload),
    Pong(PongPayload),
    Error(ErrorPayload),
}

impl ServerEvent {
    pub fn error(message: impl Into<String>) -> Self {
        ServerEvent::Error(ErrorPayload {
            message: message.into(),
        })
    }

    /// 事件名称，用于日志
    pub fn name(&self) -> &'static str {
        match self {
            ServerEvent::Connected(_) => "connected",
            ServerEvent::AiResponse(_) => "ai_response",
            ServerEvent::LevelUp(_) => "level_up",
            ServerEvent::PersonalityUpdated(_) => "personality_updated",
            ServerEvent::Pong(_) => "pong",
            ServerEvent::Error(_) => "error",
        }
    }
}
