//! # Application Shell
//!
//! Composes the resource routers under their `/api` prefixes, the root
//! health message, the unknown-route fallback, and the cross-cutting
//! layers: CORS, security headers, request tracing, and the panic
//! boundary that stands in for a global error handler.

use std::any::Any;
use std::sync::Arc;

use axum::body::Bytes;
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::Response;
use axum::routing::get;
use axum::{Json, Router};
use http_body_util::Full;
use serde::Serialize;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{self, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::api::response::ErrorResponse;
use crate::config::ServerConfig;
use crate::model::{Car, CarDealer, CarMake, Item, List};
use crate::store::Store;

/// Shared application state: one store per resource family, built once at
/// process start and handed to every handler by reference. Data lives for
/// the process lifetime only.
pub struct AppState {
    pub lists: Store<List>,
    pub items: Store<Item>,
    pub dealers: Store<CarDealer>,
    pub makes: Store<CarMake>,
    pub cars: Store<Car>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            lists: Store::new(),
            items: Store::new(),
            dealers: Store::new(),
            makes: Store::new(),
            cars: Store::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Root health message
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Body of the global fallback handler. `error` is only populated in
/// development mode.
#[derive(Debug, Serialize)]
struct FallbackResponse {
    success: bool,
    message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Build the full application router.
///
/// Scoped nests reuse the parent resource's param names (`{listId}`,
/// `{dealerId}`, `{carMakeId}`); the route matcher rejects conflicting
/// names at the same path position.
pub fn build_router(config: &ServerConfig, state: Arc<AppState>) -> Router {
    let dev = config.env.is_development();

    Router::new()
        .route("/", get(root_handler))
        .nest("/api/lists", api::lists::list_routes())
        .nest("/api/lists/{listId}/items", api::items::item_routes())
        .nest("/api/dealers", api::dealers::dealer_routes())
        .nest("/api/carmakes", api::makes::make_routes())
        .nest("/api/cars", api::cars::car_routes())
        .nest("/api/dealers/{dealerId}/cars", api::cars::dealer_car_routes())
        .nest("/api/carmakes/{carMakeId}/cars", api::cars::make_car_routes())
        .nest(
            "/api/dealers/{dealerId}/carmakes/{carMakeId}/cars",
            api::cars::dealer_make_car_routes(),
        )
        .fallback(unknown_route)
        .with_state(state)
        .layer(
            SetResponseHeaderLayer::overriding(
                header::X_CONTENT_TYPE_OPTIONS,
                HeaderValue::from_static("nosniff"),
            ),
        )
        .layer(
            SetResponseHeaderLayer::overriding(
                header::X_FRAME_OPTIONS,
                HeaderValue::from_static("SAMEORIGIN"),
            ),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(cors::Any)
                .allow_methods(cors::Any)
                .allow_headers(cors::Any),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(move |err: Box<dyn Any + Send>| {
            panic_response(dev, err)
        }))
}

async fn root_handler() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "API is running!".to_string(),
    })
}

async fn unknown_route() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new("Route not found")),
    )
}

/// Global fallback: anything that escapes a handler ends up here. The
/// failure is logged and the response hides internal detail unless the
/// process runs in development mode.
fn panic_response(dev: bool, err: Box<dyn Any + Send>) -> Response<Full<Bytes>> {
    let detail = panic_detail(err.as_ref());
    tracing::error!(error = %detail, "unhandled failure while serving request");

    let body = FallbackResponse {
        success: false,
        message: "Something went wrong!",
        error: dev.then_some(detail),
    };
    let bytes = serde_json::to_vec(&body)
        .unwrap_or_else(|_| br#"{"success":false,"message":"Something went wrong!"}"#.to_vec());

    let mut response = Response::new(Full::from(bytes));
    *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    response
}

fn panic_detail(err: &(dyn Any + Send)) -> String {
    if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Environment;

    #[test]
    fn test_router_builds() {
        let config = ServerConfig::default();
        let _router = build_router(&config, Arc::new(AppState::new()));
    }

    #[test]
    fn test_panic_response_is_server_error() {
        let response = panic_response(false, Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_panic_detail_extraction() {
        let err: Box<dyn Any + Send> = Box::new("boom".to_string());
        assert_eq!(panic_detail(err.as_ref()), "boom");
        let err: Box<dyn Any + Send> = Box::new(42u8);
        assert_eq!(panic_detail(err.as_ref()), "unknown panic");
    }

    #[test]
    fn test_fallback_body_hides_detail_outside_development() {
        let prod = FallbackResponse {
            success: false,
            message: "Something went wrong!",
            error: None,
        };
        let json = serde_json::to_value(&prod).unwrap();
        assert!(json.get("error").is_none());
        assert_eq!(json["message"], "Something went wrong!");

        assert!(Environment::Development.is_development());
    }
}
