use axum::{extract::State, response::Json};
use couture_models::{CostBand, MaterialsInput, SustainabilityRating};
use couture_utils::bom::estimate_impact;
use serde_json::{json, Value};

use crate::AppState;

// Known-answer probe: organic +2, recycled +2 with no synthetic penalty; canvas +1 cost.
fn engine_check() -> Value {
    let probe = MaterialsInput::Lines(vec![
        "## Bill of Materials".to_string(),
        "- **Shell**: Organic Cotton Canvas".to_string(),
        "- **Lining**: Recycled Polyester".to_string(),
    ]);
    let estimate = estimate_impact(Some(&probe));

    if estimate.eco_score == 4
        && estimate.sustainability_rating == SustainabilityRating::EcoFocused
        && estimate.cost_band == CostBand::Low
    {
        json!({"status": "healthy", "message": "Known-answer estimate matched"})
    } else {
        json!({"status": "unhealthy", "message": format!("Unexpected estimate: {}", estimate)})
    }
}

pub async fn detailed_health_check(State(state): State<AppState>) -> Json<Value> {
    let mut health_status = json!({
        "status": "healthy",
        "service": "couture-api-gateway",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "checks": {}
    });

    health_status["checks"]["engine"] = engine_check();

    let metrics_status = if !state.config.monitoring.metrics_enabled {
        json!({"status": "healthy", "message": "Disabled"})
    } else {
        match state.metrics.encode() {
            Ok(_) => json!({"status": "healthy", "message": "Encoding"}),
            Err(e) => json!({"status": "unhealthy", "message": e.to_string()}),
        }
    };
    health_status["checks"]["metrics"] = metrics_status;

    let all_healthy = health_status["checks"]
        .as_object()
        .map(|checks| checks.values().all(|check| check["status"] == "healthy"))
        .unwrap_or(false);

    if !all_healthy {
        health_status["status"] = json!("degraded");
    }

    Json(health_status)
}
