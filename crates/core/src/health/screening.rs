//! Quick screening over plain per-field means.
//!
//! The simpler sibling of the [`evaluate`](super::evaluate) module: no
//! outlier filtering, every field required, and results rolled up per
//! sensor group rather than per field.

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::CoreError;

use super::evaluate::MachineCondition;
use super::fields::{FieldExtraction, SensorGroup, ThresholdLookup};
use super::{extract_values, lookup_band, Reading, Thresholds};

/// Health label for one sensor group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupHealth {
    Healthy,
    Unhealthy,
}

/// Result of [`screen`]: one label per sensor group in table order, plus
/// the overall verdict.
#[derive(Debug)]
pub struct ScreeningReport {
    pub groups: IndexMap<&'static str, GroupHealth>,
    pub condition: MachineCondition,
}

/// Screen a batch of readings with simple arithmetic means.
///
/// A group is healthy only if every member field's mean lies within its
/// band. Every field must be present and numeric in every record.
pub fn screen(
    batch: &[Reading],
    thresholds: &Thresholds,
    groups: &[SensorGroup],
    lookup: ThresholdLookup,
) -> Result<ScreeningReport, CoreError> {
    if batch.is_empty() {
        return Err(CoreError::EmptyBatch);
    }
    if thresholds.is_empty() {
        return Err(CoreError::EmptyThresholds);
    }

    let mut report_groups = IndexMap::new();
    let mut condition = MachineCondition::Good;

    for group in groups {
        let mut healthy = true;
        for field in group.fields {
            let values = extract_values(batch, field, FieldExtraction::Required)?;
            let average = values.iter().sum::<f64>() / values.len() as f64;
            let band = lookup_band(thresholds, field, lookup)?;
            if !band.contains(average) {
                healthy = false;
            }
        }
        if !healthy {
            condition = MachineCondition::NeedsMaintenance;
        }
        let label = if healthy {
            GroupHealth::Healthy
        } else {
            GroupHealth::Unhealthy
        };
        report_groups.insert(group.name, label);
    }

    Ok(ScreeningReport {
        groups: report_groups,
        condition,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
