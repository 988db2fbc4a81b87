//! Field evaluator: robust per-field averages checked against threshold
//! bands, aggregated into an overall verdict with a root-cause string.

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::CoreError;
use crate::stats::{robust_mean, OutlierParams};

use super::fields::{FieldExtraction, SensorGroup, ThresholdLookup};
use super::{extract_values, lookup_band, Reading, Thresholds};

/// Cause string reported when every field is within its band.
pub const ALL_WITHIN_BAND: &str = "All parameters are within the specified bands.";

/// Per-field verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    #[serde(rename = "GOOD")]
    Good,
    #[serde(rename = "NEEDS MAINTENANCE")]
    NeedsMaintenance,
}

/// Overall machine verdict, derived from the per-field verdicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MachineCondition {
    Good,
    NeedsMaintenance,
}

/// Evaluation output for one field.
///
/// Non-finite values (a NaN average when the field had no usable readings,
/// infinite bounds when unconstrained) serialize as JSON `null`.
#[derive(Debug, Clone, Serialize)]
pub struct FieldDetail {
    /// Robust average of the field over the batch.
    pub average: f64,
    pub status: Verdict,
    /// Lower bound of the acceptable band.
    pub low: f64,
    /// Upper bound of the acceptable band.
    pub high: f64,
}

/// Result of [`evaluate`]: the overall verdict, a human-readable cause,
/// and one detail record per configured field in table order.
#[derive(Debug)]
pub struct Evaluation {
    pub condition: MachineCondition,
    pub cause: String,
    pub details: IndexMap<&'static str, FieldDetail>,
}

/// Evaluate a batch of readings against threshold bands.
///
/// Walks every field of `groups` in table order, computes its robust
/// average, and checks it against the `{base}_healthy`/`{base}_warning`
/// band (absent bounds are unconstrained). The overall verdict is
/// `NeedsMaintenance` as soon as any field is out of band, and the cause
/// names the most-deviant violating field.
pub fn evaluate(
    batch: &[Reading],
    thresholds: &Thresholds,
    groups: &[SensorGroup],
    extraction: FieldExtraction,
    params: OutlierParams,
) -> Result<Evaluation, CoreError> {
    if batch.is_empty() {
        return Err(CoreError::EmptyBatch);
    }
    if thresholds.is_empty() {
        return Err(CoreError::EmptyThresholds);
    }

    let mut details = IndexMap::new();
    for group in groups {
        for field in group.fields {
            let values = extract_values(batch, field, extraction)?;
            let average = robust_mean(&values, params);
            let band = lookup_band(thresholds, field, ThresholdLookup::Lenient)?;
            let status = if band.contains(average) {
                Verdict::Good
            } else {
                Verdict::NeedsMaintenance
            };
            details.insert(
                field.raw_key,
                FieldDetail {
                    average,
                    status,
                    low: band.low,
                    high: band.high,
                },
            );
        }
    }

    let condition = if details
        .values()
        .any(|d| d.status == Verdict::NeedsMaintenance)
    {
        MachineCondition::NeedsMaintenance
    } else {
        MachineCondition::Good
    };

    let cause = match condition {
        MachineCondition::Good => ALL_WITHIN_BAND.to_string(),
        MachineCondition::NeedsMaintenance => describe_worst(&details),
    };

    Ok(Evaluation {
        condition,
        cause,
        details,
    })
}

/// Pick the most-deviant violating field and phrase the cause.
///
/// Deviation is `low - average` below the band, `average - high` above it
/// (positive for every violating field). The strict max comparison keeps
/// the first maximal field in table order on ties. A field with no usable
/// readings at all (NaN average) cannot be ranked by deviation and is
/// treated as the highest-priority cause instead.
fn describe_worst(details: &IndexMap<&'static str, FieldDetail>) -> String {
    let mut worst: Option<(&str, &FieldDetail, f64)> = None;
    for (key, detail) in details {
        if detail.status != Verdict::NeedsMaintenance {
            continue;
        }
        if detail.average.is_nan() {
            return format!("Issue in '{key}': no usable readings were recorded for this field.");
        }
        let deviation = if detail.average < detail.low {
            detail.low - detail.average
        } else {
            detail.average - detail.high
        };
        match worst {
            Some((_, _, best)) if deviation <= best => {}
            _ => worst = Some((key, detail, deviation)),
        }
    }

    match worst {
        Some((key, detail, _)) => {
            let (direction, bound) = if detail.average < detail.low {
                ("below", detail.low)
            } else {
                ("above", detail.high)
            };
            format!(
                "Issue in '{key}': average {:.2} is {direction} the acceptable band ({bound}).",
                detail.average
            )
        }
        None => ALL_WITHIN_BAND.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
