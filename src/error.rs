//! 错误处理模块
//!
//! 定义应用程序的错误类型和错误处理逻辑。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 应用程序错误类型
#[derive(Error, Debug)]
pub enum AppError {
    /// 请求缺少消息内容
    #[error("Message is required")]
    MissingMessage,

    /// 会话不存在
    ///
    /// 只会在连接生命周期处理出错时出现，不会自动补建会话。
    #[error("会话不存在: {0}")]
    SessionNotFound(String),

    /// 会话已存在
    #[error("会话已存在: {0}")]
    DuplicateSession(String),

    /// 参数验证错误
    #[error("参数验证失败: {0}")]
    Validation(String),

    /// 配置错误
    #[error("配置错误: {0}")]
    Config(String),

    /// 序列化错误
    #[error("序列化错误: {0}")]
    Serialization(String),

    /// 内部错误
    #[error("内部错误: {0}")]
    Internal(String),

    /// IO 错误
    #[error("IO 错误: {0}")]
    Io(String),
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Serialization(e.to_string())
    }
}

impl From<figment::Error> for AppError {
    fn from(e: figment::Error) -> Self {
        AppError::Config(e.to_string())
    }
}

/// Axum response implementation for AppError
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = (&self).into();
        let body = Json(ErrorResponse::new(&code, &self.to_string()));
        (
            StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            body,
        )
            .into_response()
    }
}

/// 错误响应
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// 错误代码
    pub code: String,
    /// 错误消息
    pub message: String,
    /// 详细信息
    pub details: Option<String>,
    /// 请求 ID
    pub request_id: Option<String>,
}

impl ErrorResponse {
    /// 创建新错误响应
    pub fn new(code: &str, message: &str) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
            details: None,
            request_id: None,
        }
    }

    /// 添加详细信息
    pub fn with_details(mut self, details: &str) -> Self {
        self.details = Some(details.to_string());
        self
    }
}

/// HTTP 状态码映射
impl From<&AppError> for (u16, String) {
    fn from(err: &AppError) -> (u16, String) {
        match err {
            AppError::MissingMessage => (400, "MISSING_MESSAGE".to_string()),
            AppError::Validation(_) => (400, "BAD_REQUEST".to_string()),
            AppError::SessionNotFound(_) => (404, "SESSION_NOT_FOUND".to_string()),
            AppError::DuplicateSession(_) => (409, "DUPLICATE_SESSION".to_string()),
            AppError::Config(_) => (500, "CONFIG_ERROR".to_string()),
            _ => (500, "INTERNAL_ERROR".to_string()),
        }
    }
}

/// 结果类型别名
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let (status, code): (u16, String) = (&AppError::MissingMessage).into();
        assert_eq!(status, 400);
        assert_eq!(code, "MISSING_MESSAGE");

        let (status, _): (u16, String) = (&AppError::SessionNotFound("c1".into())).into();
        assert_eq!(status, 404);

        let (status, _): (u16, String) = (&AppError::DuplicateSession("c1".into())).into();
        assert_eq!(status, 409);

        let (status, _): (u16, String) = (&AppError::Internal("boom".into())).into();
        assert_eq!(status, 500);
    }

    #[test]
    fn test_missing_message_into_response() {
        let response = AppError::MissingMessage.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_error_response_with_details() {
        let body = ErrorResponse::new("BAD_REQUEST", "bad").with_details("field");
        assert_eq!(body.details.as_deref(), Some("field"));
        assert!(body.request_id.is_none());
    }
}
