//! Serverless boundary adapter.
//!
//! Wraps an existing request-handling application (any [`axum::Router`]) for
//! two hosting shapes: a function host delivering Lambda-compatible events,
//! and a directly served HTTP listener. Every outbound response carries the
//! same permissive CORS headers. No routing, validation or business logic
//! lives here.

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, header};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tower::ServiceExt;
use tower_http::cors::{Any, CorsLayer};

/// The three headers attached to every outbound response
pub const CORS_HEADERS: [(&str, &str); 3] = [
    ("Access-Control-Allow-Origin", "*"),
    ("Access-Control-Allow-Methods", "GET, POST, OPTIONS"),
    ("Access-Control-Allow-Headers", "Content-Type"),
];

#[derive(Debug, Clone, PartialEq)]
pub enum GatewayError {
    BadEvent(String),
    Upstream(String),
    Io(String),
}

impl std::fmt::Display for GatewayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GatewayError::BadEvent(msg) => write!(f, "Bad Event: {}", msg),
            GatewayError::Upstream(msg) => write!(f, "Upstream Error: {}", msg),
            GatewayError::Io(msg) => write!(f, "IO Error: {}", msg),
        }
    }
}

impl std::error::Error for GatewayError {}

/// Inbound HTTP event as delivered by the function host
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionEvent {
    pub http_method: String,
    pub path: String,
    #[serde(default)]
    pub query_string_parameters: HashMap<String, String>,
    #[serde(default)]
    pub headers: HashMap<String, String>,
    #[serde(default)]
    pub body: Option<String>,
}

/// Outbound response in the shape the function host expects
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
}

/// Permissive CORS layer for the directly served shape
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

/// Attach the CORS layer to the wrapped application
pub fn with_cors(app: Router) -> Router {
    app.layer(cors_layer())
}

/// Function-host shape: translate one inbound event, drive the wrapped
/// application once, translate its response back with CORS attached
pub async fn handle_event(
    app: Router,
    event: FunctionEvent,
) -> Result<FunctionResponse, GatewayError> {
    let uri = if event.query_string_parameters.is_empty() {
        event.path.clone()
    } else {
        let query: String = event
            .query_string_parameters
            .iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{}", event.path, query)
    };

    let method: Method = event
        .http_method
        .parse()
        .map_err(|_| GatewayError::BadEvent(format!("invalid method: {}", event.http_method)))?;

    let mut request = Request::builder().method(method).uri(&uri);
    for (name, value) in &event.headers {
        request = request.header(name.as_str(), value.as_str());
    }
    let request = request
        .body(Body::from(event.body.unwrap_or_default()))
        .map_err(|e| GatewayError::BadEvent(e.to_string()))?;

    let response =
        app.oneshot(request).await.map_err(|e| GatewayError::Upstream(e.to_string()))?;

    let status_code = response.status().as_u16();

    let mut headers = HashMap::new();
    for (name, value) in response.headers() {
        if let Ok(value) = value.to_str() {
            headers.insert(name.to_string(), value.to_string());
        }
    }
    for (name, value) in CORS_HEADERS {
        headers.insert(name.to_string(), value.to_string());
    }

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .map_err(|e| GatewayError::Upstream(e.to_string()))?;

    Ok(FunctionResponse {
        status_code,
        headers,
        body: String::from_utf8_lossy(&bytes).into_owned(),
    })
}

/// Directly served shape: bind a listener and serve the CORS-wrapped
/// application until shutdown
pub async fn serve(app: Router, addr: &str) -> Result<(), GatewayError> {
    let listener =
        tokio::net::TcpListener::bind(addr).await.map_err(|e| GatewayError::Io(e.to_string()))?;

    axum::serve(listener, with_cors(app)).await.map_err(|e| GatewayError::Io(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::Query;
    use axum::routing::get;

    /// Stand-in for the wrapped application; the real one stays opaque
    fn upstream() -> Router {
        Router::new().route(
            "/api/precios",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                format!("[{}]", params.len())
            }),
        )
    }

    fn event(method: &str, path: &str) -> FunctionEvent {
        FunctionEvent {
            http_method: method.to_string(),
            path: path.to_string(),
            query_string_parameters: HashMap::new(),
            headers: HashMap::new(),
            body: None,
        }
    }

    #[tokio::test]
    async fn event_reaches_the_wrapped_application() {
        let response = handle_event(upstream(), event("GET", "/api/precios")).await.unwrap();
        assert_eq!(response.status_code, 200);
        assert_eq!(response.body, "[0]");
    }

    #[tokio::test]
    async fn query_parameters_are_forwarded() {
        let mut request = event("GET", "/api/precios");
        request
            .query_string_parameters
            .insert("departamento".to_string(), "LIMA".to_string());

        let response = handle_event(upstream(), request).await.unwrap();
        assert_eq!(response.body, "[1]");
    }

    #[tokio::test]
    async fn every_response_carries_the_cors_headers() {
        for path in ["/api/precios", "/no/such/route"] {
            let response = handle_event(upstream(), event("GET", path)).await.unwrap();
            for (name, value) in CORS_HEADERS {
                assert_eq!(response.headers.get(name).map(String::as_str), Some(value));
            }
        }
    }

    #[tokio::test]
    async fn unknown_routes_pass_through_as_not_found() {
        let response = handle_event(upstream(), event("GET", "/nope")).await.unwrap();
        assert_eq!(response.status_code, 404);
    }

    #[tokio::test]
    async fn malformed_method_is_rejected() {
        let result = handle_event(upstream(), event("NOT A METHOD", "/api/precios")).await;
        assert!(matches!(result, Err(GatewayError::BadEvent(_))));
    }
}
