//! Nexus - 人格驱动的实时聊天会话服务
//!
//! 每个实时连接对应一个会话：按人格挑选回复，记录对话历史，
//! 并随对话累积经验值与等级。同时提供无状态的 HTTP 聊天接口。

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod observability;
pub mod services;
pub mod websocket;
