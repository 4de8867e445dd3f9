use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use std::path::Path;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use triangle_core::triangle::{Angles, Sides};
use triangle_core::tutor::{answer, Query};

/// `POST /chat` body. Every field is optional so a missing one can be
/// reported as `Missing data`; malformed ones (an empty `sides` object, a
/// non-string `query`) fail extraction and get the same response.
#[derive(Debug, Deserialize)]
pub struct ChatPayload {
    query: Option<String>,
    sides: Option<Sides>,
    angles: Option<Angles>,
}

pub fn router(static_dir: Option<&Path>) -> Router {
    let app = Router::new()
        .route("/", get(root))
        .route("/chat", post(chat));

    let app = match static_dir {
        Some(dir) => {
            info!("serving static files from {}", dir.display());
            app.fallback_service(ServeDir::new(dir))
        }
        None => app,
    };

    app.layer(TraceLayer::new_for_http())
}

async fn root() -> &'static str {
    "Triangle tutor is running."
}

fn missing_data() -> Response {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": "Missing data" }))).into_response()
}

pub async fn chat(payload: Result<Json<ChatPayload>, JsonRejection>) -> Response {
    let payload = match payload {
        Ok(Json(payload)) => payload,
        Err(rejection) => {
            warn!("Rejected malformed chat request: {}", rejection);
            return missing_data();
        }
    };
    let (query, sides, angles) = match payload {
        ChatPayload {
            query: Some(query),
            sides: Some(sides),
            angles: Some(angles),
        } if !query.is_empty() => (query, sides, angles),
        _ => {
            warn!("Rejected chat request with missing data");
            return missing_data();
        }
    };

    info!("Chat query {:?} dispatched as {:?}", query, Query::parse(&query));
    Json(answer(&query, &sides, &angles)).into_response()
}
