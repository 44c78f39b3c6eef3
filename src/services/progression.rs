//! 经验值与等级
//!
//! 每轮对话增加固定经验值；达到升级阈值时等级加一、经验值清零。
//! 超出阈值的部分直接丢弃，不结转到下一级。

use serde::Serialize;

use crate::config::ChatConfig;
use crate::models::session::Session;

/// 升级规则
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressionRules {
    pub xp_per_exchange: u32,
    pub xp_per_level: u32,
}

impl Default for ProgressionRules {
    fn default() -> Self {
        Self {
            xp_per_exchange: 10,
            xp_per_level: 100,
        }
    }
}

impl From<&ChatConfig> for ProgressionRules {
    fn from(config: &ChatConfig) -> Self {
        Self {
            xp_per_exchange: config.xp_per_exchange,
            xp_per_level: config.xp_per_level,
        }
    }
}

/// 单次推进的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Progression {
    pub new_level: u32,
    pub new_xp: u32,
    pub leveled_up: bool,
}

/// 经验值引擎
#[derive(Debug, Clone, Copy, Default)]
pub struct ProgressionEngine {
    rules: ProgressionRules,
}

impl ProgressionEngine {
    pub fn new(rules: ProgressionRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> ProgressionRules {
        self.rules
    }

    /// 计算一轮对话后的等级与经验值，不修改会话
    pub fn advance(&self, session: &Session) -> Progression {
        self.step(session.level, session.xp)
    }

    /// 计算并写回会话
    pub fn apply(&self, session: &mut Session) -> Progression {
        let progression = self.advance(session);
        session.level = progression.new_level;
        session.xp = progression.new_xp;
        progression
    }

    fn step(&self, level: u32, xp: u32) -> Progression {
        let xp = xp.wrapping_add(self.rules.xp_per_exchange);
        if xp >= self.rules.xp_per_level {
            Progression {
                new_level: level.saturating_add(1),
                new_xp: 0,
                leveled_up: true,
            }
        } else {
            Progression {
                new_level: level,
                new_xp: xp,
                leveled_up: false,
            }
        }
    }
}
