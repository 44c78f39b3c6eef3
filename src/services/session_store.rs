//! 会话存储
//!
//! 连接标识到会话的并发映射。单个会话的所有修改都在对应分片锁内完成。

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::debug;

use crate::error::{AppError, Result};
use crate::models::personality::PersonalityKey;
use crate::models::session::{HistoryEntry, Role, Session};

/// 会话存储
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: DashMap<String, Session>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 创建默认会话，连接标识已存在时返回 `DuplicateSession`
    pub fn create(&self, connection_id: &str) -> Result<Session> {
        match self.sessions.entry(connection_id.to_string()) {
            Entry::Occupied(_) => Err(AppError::DuplicateSession(connection_id.to_string())),
            Entry::Vacant(entry) => {
                let session = Session::new(connection_id);
                entry.insert(session.clone());
                debug!("Session created: {}", connection_id);
                Ok(session)
            }
        }
    }

    /// 获取会话快照
    pub fn get(&self, connection_id: &str) -> Result<Session> {
        self.sessions
            .get(connection_id)
            .map(|session| session.value().clone())
            .ok_or_else(|| AppError::SessionNotFound(connection_id.to_string()))
    }

    /// 删除会话，不存在时无操作
    pub fn remove(&self, connection_id: &str) -> Option<Session> {
        let removed = self.sessions.remove(connection_id).map(|(_, session)| session);
        if removed.is_some() {
            debug!("Session removed: {}", connection_id);
        }
        removed
    }

    /// 追加一条带时间戳的历史
    pub fn append_history(&self, connection_id: &str, role: Role, content: &str) -> Result<()> {
        self.update(connection_id, |session| session.push_history(role, content))
    }

    /// 覆盖当前人格，不做校验
    pub fn set_personality(&self, connection_id: &str, key: PersonalityKey) -> Result<()> {
        self.update(connection_id, |session| {
            session.personality = key;
            session.touch();
        })
    }

    /// 在会话锁内执行修改
    pub fn update<R>(&self, connection_id: &str, f: impl FnOnce(&mut Session) -> R) -> Result<R> {
        let mut session = self
            .sessions
            .get_mut(connection_id)
            .ok_or_else(|| AppError::SessionNotFound(connection_id.to_string()))?;
        Ok(f(session.value_mut()))
    }

    /// 获取会话历史
    pub fn history(&self, connection_id: &str) -> Result<Vec<HistoryEntry>> {
        self.sessions
            .get(connection_id)
            .map(|session| session.history.clone())
            .ok_or_else(|| AppError::SessionNotFound(connection_id.to_string()))
    }

    pub fn contains(&self, connection_id: &str) -> bool {
        self.sessions.contains_key(connection_id)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
