//! AI 人格模型
//!
//! 人格键是封闭集合。无法识别的名字不会报错，而是保留原始字符串，
//! 查表时再回退到 `friendly`。

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// 人格键
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum PersonalityKey {
    /// 热情友好（默认）
    #[default]
    Friendly,
    /// 好奇探索
    Curious,
    /// 鼓励支持
    Supportive,
    /// 专业严谨
    Professional,
    /// 富有创意
    Creative,
    /// 未知人格，保留调用方传入的原始名字
    Unknown(String),
}

impl PersonalityKey {
    /// 所有已知人格，按声明顺序
    pub const KNOWN: [PersonalityKey; 5] = [
        PersonalityKey::Friendly,
        PersonalityKey::Curious,
        PersonalityKey::Supportive,
        PersonalityKey::Professional,
        PersonalityKey::Creative,
    ];

    /// 从字符串解析，永不失败
    pub fn parse(name: &str) -> Self {
        match name {
            "friendly" => PersonalityKey::Friendly,
            "curious" => PersonalityKey::Curious,
            "supportive" => PersonalityKey::Supportive,
            "professional" => PersonalityKey::Professional,
            "creative" => PersonalityKey::Creative,
            other => PersonalityKey::Unknown(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            PersonalityKey::Friendly => "friendly",
            PersonalityKey::Curious => "curious",
            PersonalityKey::Supportive => "supportive",
            PersonalityKey::Professional => "professional",
            PersonalityKey::Creative => "creative",
            PersonalityKey::Unknown(name) => name,
        }
    }

    /// 是否属于已知人格
    pub fn is_known(&self) -> bool {
        !matches!(self, PersonalityKey::Unknown(_))
    }

    /// 解析为实际生效的人格：未知人格回退到 `Friendly`
    pub fn resolved(&self) -> PersonalityKey {
        match self {
            PersonalityKey::Unknown(_) => PersonalityKey::Friendly,
            known => known.clone(),
        }
    }
}

impl fmt::Display for PersonalityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for PersonalityKey {
    fn from(name: &str) -> Self {
        PersonalityKey::parse(name)
    }
}

impl Serialize for PersonalityKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PersonalityKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(PersonalityKey::parse(&name))
    }
}

/// 人格展示信息
#[derive(Debug, Clone, Serialize)]
pub struct PersonalityProfile {
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}
