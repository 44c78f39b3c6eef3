//! 会话网关
//!
//! 连接生命周期与聊天事件的编排入口。与传输层无关：
//! 每个处理函数返回按顺序发送的出站事件列表。

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::error::{AppError, Result};
use crate::models::event::{
    AiResponsePayload, ChatMessagePayload, ClientEvent, ConnectedPayload, LevelUpPayload,
    PersonalityUpdatedPayload, PongPayload, ServerEvent,
};
use crate::models::personality::PersonalityKey;
use crate::models::session::Role;
use crate::observability::AppMetrics;
use crate::services::progression::ProgressionEngine;
use crate::services::responder::ResponseSelector;
use crate::services::session_store::SessionStore;

/// 无状态模式的回复
#[derive(Debug, Clone)]
pub struct StatelessReply {
    pub response: String,
    pub timestamp: DateTime<Utc>,
    pub personality: PersonalityKey,
}

/// 会话网关
#[derive(Debug, Clone)]
pub struct SessionGateway {
    store: Arc<SessionStore>,
    selector: ResponseSelector,
    engine: ProgressionEngine,
    metrics: Arc<AppMetrics>,
}

impl SessionGateway {
    pub fn new(
        store: Arc<SessionStore>,
        selector: ResponseSelector,
        engine: ProgressionEngine,
    ) -> Self {
        Self {
            store,
            selector,
            engine,
            metrics: Arc::new(AppMetrics::default()),
        }
    }

    /// 共享指标
    pub fn with_metrics(mut self, metrics: Arc<AppMetrics>) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn store(&self) -> &Arc<SessionStore> {
        &self.store
    }

    pub fn selector(&self) -> &ResponseSelector {
        &self.selector
    }

    /// 连接建立
    pub fn open(&self, connection_id: &str) -> Result<Vec<ServerEvent>> {
        let session = self.store.create(connection_id)?;
        self.metrics.record_connection(1);
        info!("User connected: {}", connection_id);

        Ok(vec![ServerEvent::Connected(ConnectedPayload {
            id: session.id,
            personality: session.personality,
            level: session.level,
            xp: session.xp,
            timestamp: Utc::now(),
        })])
    }

    /// 连接关闭，会话不存在时无操作
    pub fn close(&self, connection_id: &str) {
        if self.store.remove(connection_id).is_some() {
            self.metrics.record_connection(-1);
        }
        info!("User disconnected: {}", connection_id);
    }

    /// 分发一条入站事件
    pub fn handle_event(&self, connection_id: &str, event: ClientEvent) -> Result<Vec<ServerEvent>> {
        match event {
            ClientEvent::ChatMessage(payload) => self.handle_chat(connection_id, payload),
            ClientEvent::UpdatePersonality(update) => {
                self.handle_personality_update(connection_id, update.into_key())
            }
            ClientEvent::Ping => Ok(vec![ServerEvent::Pong(PongPayload {
                timestamp: Utc::now(),
            })]),
        }
    }

    /// 解析并处理一帧文本。解析或处理失败时返回 `error` 事件，连接保持打开。
    pub fn handle_frame(&self, connection_id: &str, text: &str) -> Vec<ServerEvent> {
        let event = match serde_json::from_str::<ClientEvent>(text) {
            Ok(event) => event,
            Err(e) => {
                warn!("Invalid frame from {}: {}", connection_id, e);
                self.metrics.record_error();
                return vec![ServerEvent::error(format!("Invalid message format: {}", e))];
            }
        };

        match self.handle_event(connection_id, event) {
            Ok(events) => events,
            Err(e) => {
                warn!("Failed to handle event from {}: {}", connection_id, e);
                self.metrics.record_error();
                vec![ServerEvent::error(e.to_string())]
            }
        }
    }

    /// 处理一轮聊天
    ///
    /// 用户消息、AI 回复与经验值推进在同一把会话锁内完成。
    /// 先发 `ai_response`，升级时再追加 `level_up`。
    pub fn handle_chat(
        &self,
        connection_id: &str,
        payload: ChatMessagePayload,
    ) -> Result<Vec<ServerEvent>> {
        let explicit = payload
            .personality
            .filter(|personality| !personality.as_str().is_empty());

        let (response, progression) = self.store.update(connection_id, |session| {
            let personality = explicit.unwrap_or_else(|| session.personality.clone());
            session.push_history(Role::User, &payload.message);
            let response = self.selector.select(&payload.message, &personality);
            session.push_history(Role::Ai, response);
            (response, self.engine.apply(session))
        })?;

        self.metrics.record_chat_message();
        debug!(
            "Chat exchange for {}: level={} xp={}",
            connection_id, progression.new_level, progression.new_xp
        );

        let mut events = vec![ServerEvent::AiResponse(AiResponsePayload {
            message: response.to_string(),
            timestamp: Utc::now(),
            user_level: progression.new_level,
            user_xp: progression.new_xp,
        })];

        if progression.leveled_up {
            self.metrics.record_level_up();
            info!("{} reached level {}", connection_id, progression.new_level);
            events.push(ServerEvent::LevelUp(LevelUpPayload::new(progression.new_level)));
        }

        Ok(events)
    }

    /// 切换人格并确认
    pub fn handle_personality_update(
        &self,
        connection_id: &str,
        personality: PersonalityKey,
    ) -> Result<Vec<ServerEvent>> {
        self.store
            .set_personality(connection_id, personality.clone())?;
        debug!("{} switched personality to {}", connection_id, personality);

        Ok(vec![ServerEvent::PersonalityUpdated(
            PersonalityUpdatedPayload { personality },
        )])
    }

    /// 无状态模式：不读写任何会话
    pub fn chat_once(
        &self,
        message: Option<&str>,
        personality: Option<PersonalityKey>,
    ) -> Result<StatelessReply> {
        let message = message
            .filter(|message| !message.is_empty())
            .ok_or(AppError::MissingMessage)?;
        let personality = personality.unwrap_or_default();

        let response = self.selector.select(message, &personality);
        self.metrics.record_chat_message();

        Ok(StatelessReply {
            response: response.to_string(),
            timestamp: Utc::now(),
            personality,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::responder::{ASSISTANCE_RESPONSE, RandomSource};

    struct FirstTemplate;

    impl RandomSource for FirstTemplate {
        fn pick_index(&self, _len: usize) -> usize {
            0
        }
    }

    fn gateway() -> SessionGateway {
        SessionGateway::new(
            Arc::new(SessionStore::new()),
            ResponseSelector::new(Arc::new(FirstTemplate)),
            ProgressionEngine::default(),
        )
    }

    fn chat(message: &str, personality: Option<&str>) -> ChatMessagePayload {
        ChatMessagePayload {
            message: message.to_string(),
            personality: personality.map(PersonalityKey::parse),
        }
    }

    #[test]
    fn test_open_emits_connected() {
        let gateway = gateway();
        let events = gateway.open("c1").unwrap();
        assert!(matches!(
            &events[..],
            [ServerEvent::Connected(ConnectedPayload { level: 1, xp: 0, .. })]
        ));
        assert!(matches!(gateway.open("c1"), Err(AppError::DuplicateSession(_))));
    }

    #[test]
    fn test_chat_records_both_turns() {
        let gateway = gateway();
        gateway.open("c1").unwrap();
        gateway
            .handle_chat("c1", chat("I'm stuck on this problem", Some("supportive")))
            .unwrap();

        let history = gateway.store().history("c1").unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].role, Role::User);
        assert_eq!(history[0].content, "I'm stuck on this problem");
        assert_eq!(history[1].role, Role::Ai);
        assert_eq!(history[1].content, ASSISTANCE_RESPONSE);
    }

    #[test]
    fn test_chat_uses_session_personality_when_absent() {
        let gateway = gateway();
        gateway.open("c1").unwrap();
        gateway
            .handle_personality_update("c1", PersonalityKey::Curious)
            .unwrap();

        let events = gateway.handle_chat("c1", chat("tell me more", None)).unwrap();
        match &events[0] {
            ServerEvent::AiResponse(payload) => {
                assert_eq!(payload.message, "That's fascinating! Can you tell me more?")
            }
            other => panic!("unexpected event: {:?}", other),
        }

        let events = gateway
            .handle_chat("c1", chat("tell me more", Some("professional")))
            .unwrap();
        match &events[0] {
            ServerEvent::AiResponse(payload) => assert_eq!(
                payload.message,
                "Thank you for your input. Let me analyze this systematically."
            ),
            other => panic!("unexpected event: {:?}", other),
        }
        // 单次指定的人格不会写回会话
        assert_eq!(
            gateway.store().get("c1").unwrap().personality,
            PersonalityKey::Curious
        );
    }

    #[test]
    fn test_chat_without_session_fails() {
        let gateway = gateway();
        assert!(matches!(
            gateway.handle_chat("ghost", chat("hi", None)),
            Err(AppError::SessionNotFound(_))
        ));
        assert!(!gateway.store().contains("ghost"));
    }

    #[test]
    fn test_frame_errors_become_error_events() {
        let gateway = gateway();
        gateway.open("c1").unwrap();

        let events = gateway.handle_frame("c1", "not json");
        assert!(matches!(&events[..], [ServerEvent::Error(_)]));

        let events = gateway.handle_frame(
            "ghost",
            r#"{"event":"chat_message","data":{"message":"hi"}}"#,
        );
        assert!(matches!(&events[..], [ServerEvent::Error(_)]));
    }

    #[test]
    fn test_ping() {
        let gateway = gateway();
        let events = gateway.handle_frame("c1", r#"{"event":"ping"}"#);
        assert!(matches!(&events[..], [ServerEvent::Pong(_)]));
    }

    #[test]
    fn test_close_removes_session() {
        let gateway = gateway();
        gateway.open("c1").unwrap();
        gateway.close("c1");
        assert!(gateway.store().is_empty());
        gateway.close("c1");
    }

    #[test]
    fn test_chat_once() {
        let gateway = gateway();
        let reply = gateway.chat_once(Some("I need help"), None).unwrap();
        assert_eq!(reply.response, ASSISTANCE_RESPONSE);
        assert_eq!(reply.personality, PersonalityKey::Friendly);

        let reply = gateway
            .chat_once(Some("hello"), Some(PersonalityKey::parse("pirate")))
            .unwrap();
        assert_eq!(reply.personality.as_str(), "pirate");
        assert_eq!(reply.response, "That's wonderful! I'm so happy to hear that!");

        assert!(matches!(
            gateway.chat_once(None, None),
            Err(AppError::MissingMessage)
        ));
        assert!(matches!(
            gateway.chat_once(Some(""), None),
            Err(AppError::MissingMessage)
        ));
        assert!(gateway.store().is_empty());
    }
}
