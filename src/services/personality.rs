//! 人格回复表
//!
//! 进程生命周期内不可变的回复模板词表。

use crate::models::personality::{PersonalityKey, PersonalityProfile};

const FRIENDLY: &[&str] = &[
    "That's wonderful! I'm so happy to hear that!",
    "I love chatting with you about this!",
    "You always have such interesting thoughts!",
    "Thanks for sharing that with me!",
    "I'm here to help you with whatever you need!",
    "That sounds really exciting!",
    "I appreciate you taking the time to talk with me!",
];

const CURIOUS: &[&str] = &[
    "That's fascinating! Can you tell me more?",
    "I'm really curious about your perspective on this.",
    "What made you think about that?",
    "Have you noticed any patterns in that?",
    "I wonder what would happen if...",
    "That raises an interesting question...",
    "I'd love to explore this idea further with you!",
];

const SUPPORTIVE: &[&str] = &[
    "You're doing great! Keep it up!",
    "I believe in you and your abilities!",
    "That's a smart approach to the problem.",
    "You've got this! I'm here if you need help.",
    "I'm proud of how you're handling this.",
    "Remember, every step forward is progress!",
    "You're stronger than you know!",
];

const PROFESSIONAL: &[&str] = &[
    "Thank you for your input. Let me analyze this systematically.",
    "Based on the information provided, I recommend the following approach.",
    "I understand your requirements. Here's my professional assessment.",
    "Let's approach this methodically to ensure optimal results.",
    "I'll provide you with a comprehensive solution.",
    "Your request has been processed. Here's the detailed response.",
    "I'm committed to delivering high-quality assistance.",
];

const CREATIVE: &[&str] = &[
    "What an imaginative idea! Let's explore this creatively!",
    "I love thinking outside the box with you!",
    "That sparks so many creative possibilities!",
    "Let's brainstorm some innovative solutions!",
    "Your creativity is inspiring! What if we tried...",
    "I'm getting excited about all the creative directions we could take!",
    "Art and creativity make everything more beautiful!",
];

/// 人格回复表
#[derive(Debug, Clone, Copy, Default)]
pub struct PersonalityTable;

impl PersonalityTable {
    pub fn new() -> Self {
        Self
    }

    /// 获取人格对应的回复模板，未知人格返回 friendly 模板
    pub fn responses_for(&self, key: &PersonalityKey) -> &'static [&'static str] {
        match key.resolved() {
            PersonalityKey::Curious => CURIOUS,
            PersonalityKey::Supportive => SUPPORTIVE,
            PersonalityKey::Professional => PROFESSIONAL,
            PersonalityKey::Creative => CREATIVE,
            _ => FRIENDLY,
        }
    }

    /// 获取人格展示信息，未知人格返回 friendly 的信息
    pub fn profile_for(&self, key: &PersonalityKey) -> PersonalityProfile {
        match key.resolved() {
            PersonalityKey::Curious => PersonalityProfile {
                name: "Curious",
                description: "Inquisitive and eager to learn",
                icon: "🤔",
            },
            PersonalityKey::Supportive => PersonalityProfile {
                name: "Supportive",
                description: "Encouraging and motivational",
                icon: "💪",
            },
            PersonalityKey::Professional => PersonalityProfile {
                name: "Professional",
                description: "Formal, structured, and business-focused",
                icon: "👔",
            },
            PersonalityKey::Creative => PersonalityProfile {
                name: "Creative",
                description: "Imaginative and artistic",
                icon: "🎨",
            },
            _ => PersonalityProfile {
                name: "Friendly",
                description: "Warm, welcoming, and enthusiastic",
                icon: "😊",
            },
        }
    }

    /// 列出全部已知人格及其展示信息
    pub fn catalog(&self) -> Vec<(PersonalityKey, PersonalityProfile)> {
        PersonalityKey::KNOWN
            .iter()
            .map(|key| (key.clone(), self.profile_for(key)))
            .collect()
    }
}
