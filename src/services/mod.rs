//! 服务模块

pub mod gateway;
pub mod personality;
pub mod progression;
pub mod responder;
pub mod session_store;

pub use gateway::{SessionGateway, StatelessReply};
pub use personality::PersonalityTable;
pub use progression::{Progression, ProgressionEngine, ProgressionRules};
pub use responder::{KEYWORD_RULES, RandomSource, ResponseSelector, SeededRandom, ThreadRandom};
pub use session_store::SessionStore;
