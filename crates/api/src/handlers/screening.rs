//! Quick screening endpoints: plain per-field means rolled up per sensor
//! group, no outlier filtering.

use axum::extract::rejection::JsonRejection;
use axum::Json;
use indexmap::IndexMap;
use serde::Serialize;
use vitals_core::health::fields::{ThresholdLookup, DUO_GROUPS, QUAD_GROUPS};
use vitals_core::health::screening::{screen, GroupHealth, ScreeningReport};

use crate::error::{AppError, AppResult};

use super::{OverallHealth, SensorBatchRequest};

/// Response payload for the screening endpoints: one `{group}_health`
/// label per sensor group, plus the overall label.
#[derive(Serialize)]
pub struct ScreeningResponse {
    #[serde(flatten)]
    groups: IndexMap<String, GroupHealth>,
    overall_health: OverallHealth,
}

impl From<ScreeningReport> for ScreeningResponse {
    fn from(report: ScreeningReport) -> Self {
        let groups = report
            .groups
            .into_iter()
            .map(|(name, health)| (format!("{name}_health"), health))
            .collect();
        Self {
            groups,
            overall_health: report.condition.into(),
        }
    }
}

/// POST /check_health -- screen the five-field set.
///
/// Absent threshold bounds are unconstrained. Any malformed input is a
/// 400 with the contractual message.
pub async fn check_health(
    body: Result<Json<SensorBatchRequest>, JsonRejection>,
) -> AppResult<Json<ScreeningResponse>> {
    let Json(request) = body.map_err(|_| invalid_json())?;

    let data_list = request.data_list.unwrap_or_default();
    let thresholds = request.thresholds.unwrap_or_default();
    if data_list.is_empty() || thresholds.is_empty() {
        return Err(missing_input());
    }

    // The five-field contract is anchored on the first record before the
    // full batch is walked.
    let first_has_anchor = data_list
        .first()
        .is_some_and(|record| record.contains_key("temperature_one"));
    if !first_has_anchor {
        return Err(AppError::BadRequest(
            "Missing required field: 'temperature_one'".to_string(),
        ));
    }

    let report = screen(&data_list, &thresholds, DUO_GROUPS, ThresholdLookup::Lenient)?;
    Ok(Json(report.into()))
}

/// POST /check_health_quad -- screen the ten-field set.
///
/// Every field and every threshold bound is mandatory here; a gap in the
/// batch or the threshold map surfaces as an internal error, not a 400.
pub async fn check_health_quad(
    body: Result<Json<SensorBatchRequest>, JsonRejection>,
) -> AppResult<Json<ScreeningResponse>> {
    let Json(request) = body.map_err(|_| invalid_json())?;

    let data_list = request.data_list.unwrap_or_default();
    let thresholds = request.thresholds.unwrap_or_default();
    if data_list.is_empty() || thresholds.is_empty() {
        return Err(missing_input());
    }

    let report = screen(&data_list, &thresholds, QUAD_GROUPS, ThresholdLookup::Strict)
        .map_err(|e| AppError::Internal(e.to_string()))?;
    Ok(Json(report.into()))
}

fn invalid_json() -> AppError {
    AppError::BadRequest("Invalid or missing JSON in request".to_string())
}

fn missing_input() -> AppError {
    AppError::BadRequest("Missing 'data_list' or 'thresholds' in request".to_string())
}
