pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers as generation_handlers;
use crate::parser::handlers as parser_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Résumé API
        .route("/api/v1/resumes/parse", post(parser_handlers::handle_parse))
        .route(
            "/api/v1/resumes/extract",
            post(parser_handlers::handle_extract),
        )
        // Application API
        .route(
            "/api/v1/applications",
            post(generation_handlers::handle_build_application),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header::CONTENT_TYPE, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::generation::service::DisabledGenerator;
    use crate::parser::{ParserConfig, ResumeParser};

    fn test_state() -> AppState {
        AppState {
            parser: Arc::new(ResumeParser::new(ParserConfig {
                min_text_chars: 10,
                ..Default::default()
            })),
            generator: Arc::new(DisabledGenerator),
            config: Config {
                port: 0,
                rust_log: "debug".to_string(),
                anthropic_api_key: None,
                llm_model: None,
                technical_keywords: None,
                min_resume_chars: 10,
                heading_fallback: true,
                max_heading_words: 10,
            },
        }
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = build_router(test_state()).oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    fn json_post(uri: &str, body: Value) -> Request<Body> {
        Request::post(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_reports_backend() {
        let (status, body) = send(Request::get("/health").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["generator"], "disabled");
    }

    #[tokio::test]
    async fn test_parse_returns_record_and_warnings() {
        let (status, body) = send(json_post(
            "/api/v1/resumes/parse",
            json!({"text": "EXPERIENCE\nAcme Corp – Consulting\nAnalyst 2020 - 2021\n• Did X"}),
        ))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["resume"]["positions"][0]["employer"], "Acme Corp");
        assert_eq!(body["resume"]["positions"][0]["responsibilities"][0], "Did X");
        assert_eq!(body["warnings"], json!([]));
    }

    #[tokio::test]
    async fn test_parse_short_text_is_422() {
        let (status, body) = send(json_post("/api/v1/resumes/parse", json!({"text": "hi"}))).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "EXTRACTION_FAILED");
    }

    #[tokio::test]
    async fn test_extract_markdown_document() {
        let request = Request::post("/api/v1/resumes/extract")
            .header(CONTENT_TYPE, "text/markdown")
            .body(Body::from(
                "# Experience\nAcme Corp – Consulting\nAnalyst 2020\n- Did X\n## Skills\nPython, Teamwork",
            ))
            .unwrap();
        let (status, body) = send(request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["resume"]["positions"][0]["responsibilities"][0], "Did X");
        assert_eq!(body["resume"]["skills"]["technical"], json!(["Python"]));
        assert_eq!(body["resume"]["skills"]["soft"], json!(["Teamwork"]));
    }

    #[tokio::test]
    async fn test_extract_rejects_unknown_media_type() {
        let request = Request::post("/api/v1/resumes/extract")
            .header(CONTENT_TYPE, "image/png")
            .body(Body::from(vec![0u8, 1, 2]))
            .unwrap();
        let (status, body) = send(request).await;

        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(body["error"]["code"], "UNSUPPORTED_MEDIA_TYPE");
    }

    #[tokio::test]
    async fn test_applications_without_generator_is_503() {
        let (status, body) = send(json_post(
            "/api/v1/applications",
            json!({
                "resume_text": "EXPERIENCE\nAcme Corp – Consulting\nAnalyst 2020\n• Did X",
                "job_description": "Analyst role"
            }),
        ))
        .await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["error"]["code"], "GENERATION_UNAVAILABLE");
    }
}
