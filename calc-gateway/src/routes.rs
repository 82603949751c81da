//! Axum route handlers for the calc gateway API.

use axum::{
    body::Bytes,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{config::GatewayConfig, error::GatewayError, format::format_result};

// ── Request / response types ──────────────────────────────────────────────────

/// Body of `POST /api/v1/calculate`.
#[derive(Debug, Deserialize)]
pub struct CalculateRequest {
    #[serde(default)]
    pub expression: Option<String>,
}

/// Decodes the expression from the first JSON value in `body`.
///
/// A `null` body, a `null` field and a missing field all yield `""`. Bytes
/// after the first value are ignored.
///
/// # Errors
/// Returns the decode error if the first value is not a calculate request,
/// or if `body` holds no JSON value at all.
pub fn decode_expression(body: &[u8]) -> Result<String, serde_json::Error> {
    let mut values =
        serde_json::Deserializer::from_slice(body).into_iter::<Option<CalculateRequest>>();
    match values.next() {
        Some(first) => Ok(first?.and_then(|r| r.expression).unwrap_or_default()),
        None => Err(serde::de::Error::custom("empty request body")),
    }
}

#[derive(Debug, Serialize)]
pub struct CalculateResponse {
    pub result: String,
}

// ── Router ────────────────────────────────────────────────────────────────────

/// Build the application router.
pub fn create_router(config: &GatewayConfig) -> Router {
    let router = Router::new()
        .route("/api/v1/calculate", post(calculate).fallback(method_not_allowed))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http());

    if config.cors_enabled {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// `GET /health`: liveness probe.
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({"status": "ok"})))
}

/// `POST /api/v1/calculate`: evaluate an expression.
///
/// The body is decoded as JSON whatever its `Content-Type`.
///
/// # Errors
/// Returns [`GatewayError::MalformedBody`] if the body is not a calculate
/// request, or [`GatewayError::Calc`] if the engine rejects the expression.
pub async fn calculate(body: Bytes) -> Result<Json<CalculateResponse>, GatewayError> {
    let expression = decode_expression(&body).map_err(GatewayError::MalformedBody)?;

    let value = calc_core::calc(&expression).inspect_err(|e| {
        tracing::debug!(%expression, error = %e, "expression rejected");
    })?;

    Ok(Json(CalculateResponse {
        result: format_result(value),
    }))
}

/// Any method other than `POST` on the calculate endpoint.
async fn method_not_allowed() -> impl IntoResponse {
    (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Method, Request, StatusCode},
    };
    use tower::ServiceExt;

    fn app() -> Router {
        create_router(&GatewayConfig::default())
    }

    fn calculate_request(method: Method, body: &'static str) -> Request<Body> {
        match Request::builder()
            .method(method)
            .uri("/api/v1/calculate")
            .header("content-type", "application/json")
            .body(Body::from(body))
        {
            Ok(r) => r,
            Err(e) => panic!("failed to build request: {e}"),
        }
    }

    async fn send(app: Router, req: Request<Body>) -> (StatusCode, Bytes) {
        let resp = match app.oneshot(req).await {
            Ok(r) => r,
            Err(e) => panic!("handler error: {e}"),
        };
        let status = resp.status();
        let bytes = match axum::body::to_bytes(resp.into_body(), 1024).await {
            Ok(b) => b,
            Err(e) => panic!("failed to read body: {e}"),
        };
        (status, bytes)
    }

    fn json(bytes: &Bytes) -> serde_json::Value {
        match serde_json::from_slice(bytes) {
            Ok(v) => v,
            Err(e) => panic!("invalid JSON: {e}"),
        }
    }

    #[tokio::test]
    async fn health_response_format_returns_ok_with_status_field() {
        let req = match Request::builder().uri("/health").body(Body::empty()) {
            Ok(r) => r,
            Err(e) => panic!("failed to build request: {e}"),
        };
        let (status, bytes) = send(app(), req).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json(&bytes)["status"], "ok");
    }

    #[tokio::test]
    async fn calculate_success_returns_fixed_point_result() {
        let req = calculate_request(Method::POST, r#"{"expression":"(2+3)*4"}"#);
        let (status, bytes) = send(app(), req).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json(&bytes), serde_json::json!({"result": "20.000000"}));
    }

    #[tokio::test]
    async fn calculate_engine_error_returns_422_with_message() {
        let req = calculate_request(Method::POST, r#"{"expression":"1++2"}"#);
        let (status, bytes) = send(app(), req).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json(&bytes)["error"], "There is an error in the expression");

        let req = calculate_request(Method::POST, r#"{"expression":"((1+2)*3"}"#);
        let (status, bytes) = send(app(), req).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json(&bytes)["error"], "There is an error in the brackets");
    }

    #[tokio::test]
    async fn calculate_division_by_zero_reports_expression_error() {
        let req = calculate_request(Method::POST, r#"{"expression":"1/0"}"#);
        let (status, bytes) = send(app(), req).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json(&bytes)["error"], "There is an error in the expression");
    }

    #[tokio::test]
    async fn calculate_malformed_body_returns_500() {
        let req = calculate_request(Method::POST, "not json");
        let (status, bytes) = send(app(), req).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json(&bytes)["error"], "Internal server error");

        let req = calculate_request(Method::POST, r#"{"expression":42}"#);
        let (status, _) = send(app(), req).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn calculate_missing_field_is_an_empty_expression() {
        let req = calculate_request(Method::POST, "{}");
        let (status, bytes) = send(app(), req).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json(&bytes)["error"], "There is an error in the expression");
    }

    #[tokio::test]
    async fn calculate_null_body_or_field_is_an_empty_expression() {
        for body in ["null", r#"{"expression":null}"#] {
            let req = calculate_request(Method::POST, body);
            let (status, bytes) = send(app(), req).await;
            assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "body {body:?}");
            assert_eq!(json(&bytes)["error"], "There is an error in the expression");
        }
    }

    #[tokio::test]
    async fn calculate_ignores_bytes_after_the_first_value() {
        let req = calculate_request(Method::POST, r#"{"expression":"1+1"}x"#);
        let (status, bytes) = send(app(), req).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json(&bytes)["result"], "2.000000");
    }

    #[tokio::test]
    async fn calculate_empty_body_returns_500() {
        for body in ["", "  \n"] {
            let req = calculate_request(Method::POST, body);
            let (status, bytes) = send(app(), req).await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "body {body:?}");
            assert_eq!(json(&bytes)["error"], "Internal server error");
        }
    }

    #[test]
    fn decode_expression_unwraps_missing_and_null_to_empty() {
        for body in ["{}", "null", r#"{"expression":null}"#, r#"{"other":1}"#] {
            match decode_expression(body.as_bytes()) {
                Ok(expr) => assert_eq!(expr, "", "body {body:?}"),
                Err(e) => panic!("body {body:?} failed to decode: {e}"),
            }
        }
    }

    #[tokio::test]
    async fn calculate_ignores_content_type() {
        let req = match Request::builder()
            .method(Method::POST)
            .uri("/api/v1/calculate")
            .body(Body::from(r#"{"expression":"8/2"}"#))
        {
            Ok(r) => r,
            Err(e) => panic!("failed to build request: {e}"),
        };
        let (status, bytes) = send(app(), req).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json(&bytes)["result"], "4.000000");
    }

    #[tokio::test]
    async fn calculate_rejects_other_methods() {
        let req = calculate_request(Method::GET, "");
        let (status, bytes) = send(app(), req).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(&bytes[..], b"Method not allowed");
    }

    #[tokio::test]
    async fn cors_layer_is_installed_when_enabled() {
        let config = GatewayConfig {
            cors_enabled: true,
            ..GatewayConfig::default()
        };
        let req = match Request::builder()
            .method(Method::POST)
            .uri("/api/v1/calculate")
            .header("origin", "http://example.test")
            .body(Body::from(r#"{"expression":"2+2"}"#))
        {
            Ok(r) => r,
            Err(e) => panic!("failed to build request: {e}"),
        };
        let resp = match create_router(&config).oneshot(req).await {
            Ok(r) => r,
            Err(e) => panic!("handler error: {e}"),
        };
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(
            resp.headers().contains_key("access-control-allow-origin"),
            "permissive CORS must set allow-origin"
        );
    }

    #[test]
    fn calculate_response_serializes_result_field() {
        let resp = CalculateResponse {
            result: "4.000000".to_owned(),
        };
        let json = match serde_json::to_string(&resp) {
            Ok(s) => s,
            Err(e) => panic!("serialization failed: {e}"),
        };
        assert_eq!(json, r#"{"result":"4.000000"}"#);
    }
}
