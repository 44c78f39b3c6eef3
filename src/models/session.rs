use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::personality::PersonalityKey;

/// 消息角色
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Ai,
}

/// 对话历史条目
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub role: Role,
    /// 原始内容（保留大小写）
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(role: Role, content: &str) -> Self {
        Self {
            role,
            content: content.to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// 会话实体
///
/// 每个实时连接对应一个会话，由网关的会话表独占持有。
/// 历史只追加不裁剪，生命周期与连接相同。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// 连接标识（由传输层分配）
    pub id: String,

    /// 当前人格
    pub personality: PersonalityKey,

    /// 对话历史
    pub history: Vec<HistoryEntry>,

    /// 等级，从 1 开始
    pub level: u32,

    /// 当前等级内的经验值
    pub xp: u32,

    /// 会话创建时间
    pub created_at: DateTime<Utc>,

    /// 最后活跃时间
    pub last_active_at: DateTime<Utc>,
}

impl Session {
    /// 创建新会话
    pub fn new(id: &str) -> Self {
        let now = Utc::now();
        Self {
            id: id.to_string(),
            personality: PersonalityKey::default(),
            history: Vec::new(),
            level: 1,
            xp: 0,
            created_at: now,
            last_active_at: now,
        }
    }

    /// 更新最后活跃时间
    pub fn touch(&mut self) {
        self.last_active_at = Utc::now();
    }

    /// 追加一条历史
    pub fn push_history(&mut self, role: Role, content: &str) {
        self.history.push(HistoryEntry::new(role, content));
        self.touch();
    }
}
