//! 回复选择
//!
//! 关键词规则按顺序匹配，命中第一条即返回固定回复；
//! 全部未命中时从当前人格的模板中随机挑选一条。
//! 匹配基于小写子串，不做词边界判断（"sadly" 会命中 "sad"）。

use parking_lot::Mutex;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::sync::Arc;

use crate::models::personality::PersonalityKey;
use crate::services::personality::PersonalityTable;

pub const EMPATHY_RESPONSE: &str = "I'm sorry you're feeling that way. Remember that it's okay to have tough days. Is there anything specific I can help you with?";
pub const ENTHUSIASM_RESPONSE: &str =
    "That's amazing! I love seeing you happy! What's making you feel so great today?";
pub const ASSISTANCE_RESPONSE: &str = "I'm here to help! Let's work through this together. Can you tell me more about what you're trying to accomplish?";
pub const CREATIVITY_RESPONSE: &str =
    "I love creative projects! What are you working on? I'd be happy to brainstorm ideas with you!";

/// 关键词规则
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    pub response: &'static str,
}

impl KeywordRule {
    /// `lowered` 必须已经转为小写
    pub fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|keyword| lowered.contains(keyword))
    }
}

/// 关键词规则表，顺序即优先级
pub const KEYWORD_RULES: [KeywordRule; 4] = [
    KeywordRule {
        name: "empathy",
        keywords: &["sad", "down"],
        response: EMPATHY_RESPONSE,
    },
    KeywordRule {
        name: "enthusiasm",
        keywords: &["happy", "excited"],
        response: ENTHUSIASM_RESPONSE,
    },
    KeywordRule {
        name: "assistance",
        keywords: &["help", "stuck"],
        response: ASSISTANCE_RESPONSE,
    },
    KeywordRule {
        name: "creativity",
        keywords: &["create", "build"],
        response: CREATIVITY_RESPONSE,
    },
];

/// 随机源
pub trait RandomSource: Send + Sync {
    /// 返回 `[0, len)` 范围内的下标，`len` 必须大于 0
    fn pick_index(&self, len: usize) -> usize;
}

/// 线程本地随机源
#[derive(Debug, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick_index(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// 固定种子随机源，结果可复现
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn pick_index(&self, len: usize) -> usize {
        self.rng.lock().gen_range(0..len)
    }
}

/// 选中的回复以及来源
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// 命中关键词规则
    Keyword {
        rule: &'static str,
        response: &'static str,
    },
    /// 人格模板随机挑选
    Template { response: &'static str },
}

impl Selection {
    pub fn response(&self) -> &'static str {
        match self {
            Selection::Keyword { response, .. } | Selection::Template { response } => *response,
        }
    }
}

/// 回复选择器
#[derive(Clone)]
pub struct ResponseSelector {
    table: PersonalityTable,
    random: Arc<dyn RandomSource>,
}

impl std::fmt::Debug for ResponseSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResponseSelector")
            .field("table", &self.table)
            .field("random", &"Arc<dyn RandomSource>")
            .finish()
    }
}

impl Default for ResponseSelector {
    fn default() -> Self {
        Self::new(Arc::new(ThreadRandom))
    }
}

impl ResponseSelector {
    pub fn new(random: Arc<dyn RandomSource>) -> Self {
        Self {
            table: PersonalityTable::new(),
            random,
        }
    }

    pub fn table(&self) -> &PersonalityTable {
        &self.table
    }

    /// 为一条消息挑选回复
    pub fn select(&self, message: &str, personality: &PersonalityKey) -> &'static str {
        self.select_detailed(message, personality).response()
    }

    /// 同 [`select`](Self::select)，同时返回命中的来源
    pub fn select_detailed(&self, message: &str, personality: &PersonalityKey) -> Selection {
        let lowered = message.to_lowercase();

        if let Some(rule) = KEYWORD_RULES.iter().find(|rule| rule.matches(&lowered)) {
            return Selection::Keyword {
                rule: rule.name,
                response: rule.response,
            };
        }

        let responses = self.table.responses_for(personality);
        let index = self.random.pick_index(responses.len());
        Selection::Template {
            response: responses[index],
        }
    }
}
