#[cfg(test)]
mod chat_handler_tests {
    use axum::{
        Router,
        body::to_bytes,
        http::{Request, StatusCode, header},
    };
    use serde_json::{Value, json};
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::api::{app_state::AppState, create_router};
    use crate::config::{AppConfig, CorsConfig};
    use crate::services::responder::{ASSISTANCE_RESPONSE, SeededRandom};

    fn app() -> Router {
        let state = AppState::from_config(&AppConfig::development(), Arc::new(SeededRandom::new(1)));
        create_router(state, &CorsConfig::default())
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    fn post_chat(body: Value) -> Request<String> {
        Request::builder()
            .method("POST")
            .uri("/api/chat")
            .header(header::CONTENT_TYPE, "application/json")
            .body(body.to_string())
            .unwrap()
    }

    #[tokio::test]
    async fn test_chat_returns_keyword_response() {
        let response = app()
            .oneshot(post_chat(json!({"message": "Can you help me?", "personality": "curious"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["response"], ASSISTANCE_RESPONSE);
        assert_eq!(body["personality"], "curious");
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_chat_defaults_to_friendly() {
        let response = app()
            .oneshot(post_chat(json!({"message": "hello"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["personality"], "friendly");
    }

    #[tokio::test]
    async fn test_chat_echoes_unknown_personality() {
        let response = app()
            .oneshot(post_chat(json!({"message": "hello", "personality": "pirate"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["personality"], "pirate");
    }

    #[tokio::test]
    async fn test_chat_missing_message_returns_400() {
        for body in [json!({}), json!({"message": ""}), json!({"personality": "friendly"})] {
            let response = app().oneshot(post_chat(body)).await.unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            assert_eq!(body_json(response).await["code"], "MISSING_MESSAGE");
        }
    }

    #[tokio::test]
    async fn test_list_personalities() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/personalities")
                    .body(String::new())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(
            body["personalities"],
            json!(["friendly", "curious", "supportive", "professional", "creative"])
        );
        assert_eq!(body["details"]["creative"]["icon"], "🎨");
        assert_eq!(body["current"], "friendly");
    }

    #[tokio::test]
    async fn test_api_health() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/health")
                    .body(String::new())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["message"], "NEXUS AI Server is running!");
    }

    #[tokio::test]
    async fn test_requests_are_counted() {
        let state = AppState::from_config(&AppConfig::development(), Arc::new(SeededRandom::new(1)));
        let metrics = state.metrics.clone();
        let app = create_router(state, &CorsConfig::default());

        app.oneshot(post_chat(json!({"message": "hi"}))).await.unwrap();

        let output = metrics.gather();
        assert!(output.contains("http_requests_total 1"));
        assert!(output.contains("chat_messages_total 1"));
    }

    #[tokio::test]
    async fn test_cors_preflight() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("OPTIONS")
                    .uri("/api/chat")
                    .header(header::ORIGIN, "http://localhost:5173")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                    .body(String::new())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            "http://localhost:5173"
        );
    }
}
