use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};

/// Path segments the analysis API serves.
pub const RESOURCES: [&str; 8] = [
    "hand-details",
    "hand-strength",
    "hand-rank",
    "winning-probability",
    "suggested-actions",
    "opponent-analysis",
    "historical-data",
    "visual-elements",
];

/// Current payload per resource. A missing entry answers 404.
pub type Fixtures = Arc<RwLock<HashMap<String, Value>>>;

/// Placeholder payloads, one per resource.
pub fn default_fixtures() -> HashMap<String, Value> {
    HashMap::from([
        ("hand-details".to_string(), json!({"details": "Hand details"})),
        ("hand-strength".to_string(), json!({"strength": "Hand strength"})),
        ("hand-rank".to_string(), json!({"rank": "Hand rank"})),
        ("winning-probability".to_string(), json!({"probability": 75})),
        ("suggested-actions".to_string(), json!(["Fold", "Call"])),
        ("opponent-analysis".to_string(), json!({"analysis": "Opponent analysis"})),
        ("historical-data".to_string(), json!([{"id": 1, "data": "Historical data"}])),
        ("visual-elements".to_string(), json!({"elements": "Visual elements"})),
    ])
}

pub fn app() -> Router {
    app_with(default_fixtures())
}

pub fn app_with(fixtures: HashMap<String, Value>) -> Router {
    let fixtures: Fixtures = Arc::new(RwLock::new(fixtures));
    Router::new()
        .route(
            "/{resource}",
            get(get_fixture).put(put_fixture).delete(delete_fixture),
        )
        .with_state(fixtures)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn known(resource: &str) -> Result<(), StatusCode> {
    if RESOURCES.contains(&resource) {
        Ok(())
    } else {
        Err(StatusCode::NOT_FOUND)
    }
}

async fn get_fixture(
    State(fixtures): State<Fixtures>,
    Path(resource): Path<String>,
) -> Result<Json<Value>, StatusCode> {
    known(&resource)?;
    let fixtures = fixtures.read().await;
    fixtures.get(&resource).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn put_fixture(
    State(fixtures): State<Fixtures>,
    Path(resource): Path<String>,
    Json(payload): Json<Value>,
) -> Result<StatusCode, StatusCode> {
    known(&resource)?;
    log::info!("fixture {resource} replaced");
    fixtures.write().await.insert(resource, payload);
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_fixture(
    State(fixtures): State<Fixtures>,
    Path(resource): Path<String>,
) -> Result<StatusCode, StatusCode> {
    known(&resource)?;
    log::info!("fixture {resource} cleared");
    fixtures.write().await.remove(&resource);
    Ok(StatusCode::NO_CONTENT)
}
