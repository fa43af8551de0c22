use std::sync::Arc;

use axum::{
    Json, Router,
    http::{
        HeaderValue, Method,
        header::{ACCEPT, CONTENT_LENGTH, CONTENT_TYPE},
    },
    routing::get,
};
use axum_prometheus::PrometheusMetricLayer;
use erudite_core::{application::create_service, domain::common::EruditeConfig};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tracing::{debug, info_span};

use crate::application::http::{
    discipline::router::discipline_routes, equipment::router::equipment_routes,
    health::health_routes, lesson::router::lesson_routes, record::router::record_routes,
    room::router::room_routes, server::app_state::AppState,
};
use crate::args::Args;

pub async fn state(args: Arc<Args>) -> Result<AppState, anyhow::Error> {
    let config = EruditeConfig::from(args.as_ref().clone());
    let service = create_service(config).await?;

    Ok(AppState::new(args, service))
}

#[derive(Debug, Serialize)]
struct WelcomeResponse {
    message: &'static str,
}

async fn welcome() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to Erudite!",
    })
}

///  Returns the [`Router`] of this application.
pub fn router(state: AppState) -> Result<Router, anyhow::Error> {
    let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
        |request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!("http_request", method = ?request.method(), uri)
        },
    );

    let allowed_origins = state
        .args
        .server
        .allowed_origins
        .iter()
        .map(|origin| HeaderValue::from_str(origin))
        .collect::<Result<Vec<HeaderValue>, _>>()?;

    debug!("Allowed origins: {:?}", allowed_origins);

    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::DELETE,
            Method::PUT,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allow_origin(allowed_origins)
        .allow_headers([CONTENT_TYPE, CONTENT_LENGTH, ACCEPT]);

    let root_path = state.args.server.root_path.clone();
    let welcome_path = if root_path.is_empty() {
        "/".to_string()
    } else {
        root_path.clone()
    };

    let router = axum::Router::new()
        .route(&welcome_path, get(welcome))
        .merge(equipment_routes(&root_path))
        .merge(room_routes(&root_path))
        .merge(discipline_routes(&root_path))
        .merge(lesson_routes(&root_path))
        .merge(record_routes(&root_path))
        .merge(health_routes(&root_path))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state);

    Ok(router)
}

/// Adds request metrics and the `/metrics` exposition endpoint.
///
/// Installs the process-wide Prometheus recorder: call at most once.
pub fn with_metrics(router: Router, root_path: &str) -> Router {
    let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();

    router
        .route(
            &format!("{}/metrics", root_path),
            get(|| async move { metric_handle.render() }),
        )
        .layer(prometheus_layer)
}
