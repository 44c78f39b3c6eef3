//! 可观测性模块
//!
//! 提供 Prometheus 文本格式指标、结构化日志和健康检查。

use axum::{Json, Router, extract::State, response::IntoResponse, routing::get};

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::error::{AppError, Result};

// ===== Simple Metrics =====

/// 简单应用指标
#[derive(Debug, Default)]
pub struct AppMetrics {
    pub http_requests_total: AtomicU64,
    pub http_request_duration_sum: AtomicU64,
    pub ws_connections_active: AtomicI64,
    pub chat_messages_total: AtomicU64,
    pub level_ups_total: AtomicU64,
    pub errors_total: AtomicU64,
}

impl AppMetrics {
    /// 记录 HTTP 请求
    pub fn record_http_request(&self, duration_ms: u64) {
        self.http_requests_total.fetch_add(1, Ordering::SeqCst);
        self.http_request_duration_sum
            .fetch_add(duration_ms, Ordering::SeqCst);
    }

    /// 记录实时连接变化
    pub fn record_connection(&self, delta: i64) {
        self.ws_connections_active.fetch_add(delta, Ordering::SeqCst);
    }

    /// 记录一轮聊天
    pub fn record_chat_message(&self) {
        self.chat_messages_total.fetch_add(1, Ordering::SeqCst);
    }

    /// 记录升级
    pub fn record_level_up(&self) {
        self.level_ups_total.fetch_add(1, Ordering::SeqCst);
    }

    /// 记录错误
    pub fn record_error(&self) {
        self.errors_total.fetch_add(1, Ordering::SeqCst);
    }

    /// 生成 Prometheus 格式指标
    pub fn gather(&self) -> String {
        let requests = self.http_requests_total.load(Ordering::SeqCst);
        format!(
            r#"# HELP http_requests_total Total HTTP requests
# TYPE http_requests_total counter
http_requests_total {}
# HELP http_request_duration_seconds HTTP request duration in seconds
# TYPE http_request_duration_seconds histogram
http_request_duration_seconds_sum {}
http_request_duration_seconds_count {}
# HELP ws_connections_active Active WebSocket connections
# TYPE ws_connections_active gauge
ws_connections_active {}
# HELP chat_messages_total Total chat exchanges
# TYPE chat_messages_total counter
chat_messages_total {}
# HELP level_ups_total Total level-up events
# TYPE level_ups_total counter
level_ups_total {}
# HELP errors_total Total errors
# TYPE errors_total counter
errors_total {}
"#,
            requests,
            self.http_request_duration_sum.load(Ordering::SeqCst) as f64 / 1000.0,
            requests,
            self.ws_connections_active.load(Ordering::SeqCst),
            self.chat_messages_total.load(Ordering::SeqCst),
            self.level_ups_total.load(Ordering::SeqCst),
            self.errors_total.load(Ordering::SeqCst),
        )
    }
}

// ===== Health Check =====

/// 健康检查状态
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: String,
    pub version: String,
    pub uptime_seconds: f64,
    pub active_sessions: usize,
}

/// 可观测性状态
#[derive(Clone)]
pub struct ObservabilityState {
    pub metrics: Arc<AppMetrics>,
    pub start_time: DateTime<Utc>,
    pub version: String,
    active_sessions: Arc<dyn Fn() -> usize + Send + Sync>,
}

impl ObservabilityState {
    pub fn new(version: String, metrics: Arc<AppMetrics>) -> Self {
        Self {
            metrics,
            start_time: Utc::now(),
            version,
            active_sessions: Arc::new(|| 0),
        }
    }

    /// 注册活跃会话计数来源
    pub fn with_session_count(
        mut self,
        counter: impl Fn() -> usize + Send + Sync + 'static,
    ) -> Self {
        self.active_sessions = Arc::new(counter);
        self
    }

    /// 获取应用正常运行时间
    pub fn uptime_seconds(&self) -> f64 {
        (Utc::now() - self.start_time).num_seconds() as f64
    }
}

// ===== Health Check Handlers =====

/// 获取完整健康状态
pub async fn health_check(State(state): State<ObservabilityState>) -> impl IntoResponse {
    Json(HealthStatus {
        status: "healthy".to_string(),
        timestamp: Utc::now().to_rfc3339(),
        version: state.version.clone(),
        uptime_seconds: state.uptime_seconds(),
        active_sessions: (state.active_sessions)(),
    })
}

/// 简单存活检查
pub async fn liveness() -> impl IntoResponse {
    "OK"
}

/// Prometheus 指标端点
pub async fn metrics(State(state): State<ObservabilityState>) -> impl IntoResponse {
    state.metrics.gather()
}

/// 版本信息端点
pub async fn version(State(state): State<ObservabilityState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "version": state.version,
        "uptime_seconds": state.uptime_seconds(),
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

/// 创建可观测性路由
pub fn create_observability_router(state: ObservabilityState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/health/live", get(liveness))
        .route("/metrics", get(metrics))
        .route("/version", get(version))
        .with_state(state)
}

// ===== Structured Logging =====

/// 初始化结构化日志
///
/// `RUST_LOG` 优先于配置中的级别。配置了 `log_dir` 时日志按天滚动写入文件，
/// 返回的 guard 需要在进程生命周期内持有。
pub fn init_tracing(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| AppError::Config(format!("invalid log level: {}", e)))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_line_number(true);

    let (result, guard) = match (&config.log_dir, config.structured) {
        (Some(dir), structured) => {
            let appender = tracing_appender::rolling::daily(dir, "nexus.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let builder = builder.with_writer(writer).with_ansi(false);
            let result = if structured {
                builder.json().try_init()
            } else {
                builder.try_init()
            };
            (result, Some(guard))
        }
        (None, true) => (builder.json().try_init(), None),
        (None, false) => (builder.try_init(), None),
    };

    result.map_err(|e| AppError::Internal(format!("failed to set tracing subscriber: {}", e)))?;
    Ok(guard)
}

// ===== Request Metrics Middleware =====

/// 记录请求指标的中间件
pub async fn metrics_middleware(
    State(metrics): State<Arc<AppMetrics>>,
    req: axum::extract::Request,
    next: axum::middleware::Next,
) -> axum::response::Response {
    let start = std::time::Instant::now();

    let response = next.run(req).await;

    let duration_ms = start.elapsed().as_millis() as u64;
    metrics.record_http_request(duration_ms);
    if response.status().is_server_error() {
        metrics.record_error();
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::to_bytes, http::Request};
    use tower::ServiceExt;

    #[test]
    fn test_metrics_gather() {
        let metrics = AppMetrics::default();
        metrics.record_http_request(100);
        metrics.record_connection(1);
        metrics.record_connection(1);
        metrics.record_connection(-1);
        metrics.record_chat_message();
        metrics.record_level_up();
        metrics.record_error();

        let output = metrics.gather();
        assert!(output.contains("http_requests_total 1"));
        assert!(output.contains("ws_connections_active 1"));
        assert!(output.contains("chat_messages_total 1"));
        assert!(output.contains("level_ups_total 1"));
        assert!(output.contains("errors_total 1"));
    }

    #[tokio::test]
    async fn test_health_reports_sessions() {
        let state = ObservabilityState::new("0.1.0".to_string(), Arc::new(AppMetrics::default()))
            .with_session_count(|| 3);
        let app = create_observability_router(state);

        let response = app
            .oneshot(Request::builder().uri("/health").body(String::new()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), axum::http::StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["status"], "healthy");
        assert_eq!(value["active_sessions"], 3);
        assert_eq!(value["version"], "0.1.0");
    }

    #[tokio::test]
    async fn test_metrics_endpoint() {
        let metrics = Arc::new(AppMetrics::default());
        metrics.record_chat_message();
        let app = create_observability_router(ObservabilityState::new("0.1.0".into(), metrics));

        let response = app
            .oneshot(Request::builder().uri("/metrics").body(String::new()).unwrap())
            .await
            .unwrap();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(String::from_utf8_lossy(&body).contains("chat_messages_total 1"));
    }
}
