//! 聊天 DTO

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::personality::PersonalityKey;
use crate::services::gateway::StatelessReply;

/// 无状态聊天请求
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct ChatRequest {
    /// 消息内容
    pub message: Option<String>,
    /// 人格，缺省为 friendly
    pub personality: Option<PersonalityKey>,
}

/// 无状态聊天响应
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub success: bool,
    pub response: String,
    pub timestamp: DateTime<Utc>,
    pub personality: PersonalityKey,
}

impl From<StatelessReply> for ChatResponse {
    fn from(reply: StatelessReply) -> Self {
        Self {
            success: true,
            response: reply.response,
            timestamp: reply.timestamp,
            personality: reply.personality,
        }
    }
}

/// 服务状态响应
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
    pub message: String,
}
