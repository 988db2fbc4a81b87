//! Robust analysis endpoints backed by the field evaluator.

use axum::extract::rejection::JsonRejection;
use axum::Json;
use indexmap::IndexMap;
use serde::Serialize;
use vitals_core::health::evaluate::{evaluate, FieldDetail};
use vitals_core::health::fields::{FieldExtraction, SensorGroup, DUO_GROUPS, QUAD_GROUPS};
use vitals_core::stats::OutlierParams;

use crate::error::{AppError, AppResult};

use super::{OverallHealth, SensorBatchRequest};

/// Response payload for the analysis endpoints.
#[derive(Serialize)]
pub struct AnalysisResponse {
    pub overall_health: OverallHealth,
    pub possible_cause: String,
    /// Per-field detail records in field-table order.
    pub details: IndexMap<&'static str, FieldDetail>,
}

/// POST /analyze -- robust evaluation of the five-field set.
///
/// Every field must be present and numeric in every record.
pub async fn analyze(
    body: Result<Json<SensorBatchRequest>, JsonRejection>,
) -> AppResult<Json<AnalysisResponse>> {
    run_analysis(body, DUO_GROUPS, FieldExtraction::Required)
}

/// POST /report -- robust evaluation of the ten-field set.
///
/// Records with missing or non-numeric values contribute what they have;
/// a field with no usable values at all is reported as needing
/// maintenance.
pub async fn report(
    body: Result<Json<SensorBatchRequest>, JsonRejection>,
) -> AppResult<Json<AnalysisResponse>> {
    run_analysis(body, QUAD_GROUPS, FieldExtraction::BestEffort)
}

fn run_analysis(
    body: Result<Json<SensorBatchRequest>, JsonRejection>,
    groups: &'static [SensorGroup],
    extraction: FieldExtraction,
) -> AppResult<Json<AnalysisResponse>> {
    let Json(request) = body.map_err(|_| AppError::UnsupportedMediaType)?;

    let data_list = request.data_list.unwrap_or_default();
    let thresholds = request.thresholds.unwrap_or_default();
    if data_list.is_empty() || thresholds.is_empty() {
        return Err(AppError::Internal(
            "Missing 'data_list' or 'thresholds' in request".to_string(),
        ));
    }

    let evaluation = evaluate(
        &data_list,
        &thresholds,
        groups,
        extraction,
        OutlierParams::default(),
    )
    .map_err(|e| {
        tracing::warn!(error = %e, "Sensor analysis failed");
        AppError::Internal("Failed to analyze sensor data".to_string())
    })?;

    Ok(Json(AnalysisResponse {
        overall_health: evaluation.condition.into(),
        possible_cause: evaluation.cause,
        details: evaluation.details,
    }))
}
