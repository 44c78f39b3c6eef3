//! 人格 DTO

use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::personality::{PersonalityKey, PersonalityProfile};

/// 人格列表响应
#[derive(Debug, Serialize)]
pub struct PersonalityListResponse {
    /// 人格键，按声明顺序
    pub personalities: Vec<PersonalityKey>,
    /// 人格展示信息
    pub details: BTreeMap<String, PersonalityProfile>,
    /// 默认人格
    pub current: PersonalityKey,
}
