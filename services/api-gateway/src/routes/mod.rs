use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers::*, AppState};

pub fn create_api_routes() -> Router<AppState> {
    Router::new()
        .route("/health/detailed", get(detailed_health_check))
        .nest("/bom", bom_routes())
}

fn bom_routes() -> Router<AppState> {
    Router::new()
        .route("/normalize", post(normalize_bom))
        .route("/impact", post(estimate_bom))
        .route("/impact/explain", post(explain_bom))
        .route("/impact/batch", post(estimate_bom_batch))
}
