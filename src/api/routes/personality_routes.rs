//! Personality Routes

use crate::api::handlers::personality_handler::*;
use axum::{Router, routing::get};

use crate::api::app_state::AppState;

/// 创建人格路由器
pub fn create_personality_router() -> Router<AppState> {
    Router::new().route("/personalities", get(list_personalities))
}
