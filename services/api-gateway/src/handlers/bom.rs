//! BOM Impact Handlers
//!
//! Normalize and score a design's materials for product cards and drafts.

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};
use couture_models::{ImpactEstimate, MaterialsInput};
use couture_utils::{
    bom::{estimate_batch, estimate_impact, explain_impact, normalize, ImpactBreakdown},
    validate_batch_size, validate_materials,
};
use serde::{Deserialize, Serialize};

use crate::{middleware::ApiError, AppState};

/// Request carrying one design's materials field
#[derive(Debug, Deserialize)]
pub struct MaterialsRequest {
    pub materials: Option<MaterialsInput>,
}

/// Request carrying the materials of several products
#[derive(Debug, Deserialize)]
pub struct BatchRequest {
    pub products: Vec<Option<MaterialsInput>>,
}

#[derive(Debug, Serialize)]
pub struct NormalizeResponse {
    pub canonical: String,
    pub shape: &'static str,
}

fn shape_of(materials: Option<&MaterialsInput>) -> &'static str {
    materials.map(MaterialsInput::kind).unwrap_or("absent")
}

/// Canonical text for a materials field
///
/// POST /api/v1/bom/normalize
pub async fn normalize_bom(
    payload: Result<Json<MaterialsRequest>, JsonRejection>,
) -> Result<Json<NormalizeResponse>, ApiError> {
    let Json(request) = payload?;
    let materials = request.materials.as_ref();
    validate_materials(materials)?;

    Ok(Json(NormalizeResponse {
        canonical: normalize(materials),
        shape: shape_of(materials),
    }))
}

/// Score one materials field
///
/// POST /api/v1/bom/impact
pub async fn estimate_bom(
    State(state): State<AppState>,
    payload: Result<Json<MaterialsRequest>, JsonRejection>,
) -> Result<Json<ImpactEstimate>, ApiError> {
    let Json(request) = payload?;
    let materials = request.materials.as_ref();
    validate_materials(materials)?;

    let estimate = estimate_impact(materials);
    let shape = shape_of(materials);
    state.metrics.record_estimate(shape, &estimate);
    tracing::debug!(shape, %estimate, "Estimated impact");

    Ok(Json(estimate))
}

/// Score one materials field and list the rules that fired
///
/// POST /api/v1/bom/impact/explain
pub async fn explain_bom(
    State(state): State<AppState>,
    payload: Result<Json<MaterialsRequest>, JsonRejection>,
) -> Result<Json<ImpactBreakdown>, ApiError> {
    let Json(request) = payload?;
    let materials = request.materials.as_ref();
    validate_materials(materials)?;

    let breakdown = explain_impact(materials);
    state
        .metrics
        .record_estimate(shape_of(materials), &breakdown.estimate());

    Ok(Json(breakdown))
}

/// Score many products at once, one estimate per product in request order
///
/// POST /api/v1/bom/impact/batch
pub async fn estimate_bom_batch(
    State(state): State<AppState>,
    payload: Result<Json<BatchRequest>, JsonRejection>,
) -> Result<Json<Vec<ImpactEstimate>>, ApiError> {
    let Json(request) = payload?;
    validate_batch_size(request.products.len(), state.config.api.max_batch_size)?;
    for materials in &request.products {
        validate_materials(materials.as_ref())?;
    }

    let estimates = estimate_batch(&request.products);

    state.metrics.record_batch(estimates.len());
    for (materials, estimate) in request.products.iter().zip(&estimates) {
        state.metrics.record_estimate(shape_of(materials.as_ref()), estimate);
    }
    tracing::debug!(products = estimates.len(), "Estimated batch impact");

    Ok(Json(estimates))
}
