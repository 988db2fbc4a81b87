//! Machine health evaluation domain logic.
//!
//! All logic in this module is pure (no I/O) — it lives in the core crate
//! so it can be tested in isolation. The HTTP layer supplies the batch and
//! threshold map and translates errors into status codes.

pub mod evaluate;
pub mod fields;
pub mod screening;

use std::collections::HashMap;

use serde_json::Value;

use crate::error::CoreError;
use self::fields::{FieldExtraction, FieldSpec, ThresholdLookup};

/// One sampled instant across all sensors: field name → reported value.
pub type Reading = serde_json::Map<String, Value>;

/// Caller-supplied threshold bounds, keyed `{base}_healthy` (lower) and
/// `{base}_warning` (upper).
pub type Thresholds = HashMap<String, f64>;

/// A field's resolved threshold band. Either side may be unconstrained
/// (-inf / +inf).
#[derive(Debug, Clone, Copy)]
pub struct Band {
    pub low: f64,
    pub high: f64,
}

impl Band {
    /// Whether `value` lies within the band, bounds inclusive.
    ///
    /// A NaN value fails both comparisons and is therefore never in band.
    pub fn contains(&self, value: f64) -> bool {
        self.low <= value && value <= self.high
    }
}

/// Extract one field's numeric values from every record in the batch.
///
/// `Required` fails on the first record with a missing or non-numeric
/// value; `BestEffort` skips such records for this field.
fn extract_values(
    batch: &[Reading],
    field: &FieldSpec,
    extraction: FieldExtraction,
) -> Result<Vec<f64>, CoreError> {
    let mut values = Vec::with_capacity(batch.len());
    for (index, record) in batch.iter().enumerate() {
        match record.get(field.raw_key).and_then(Value::as_f64) {
            Some(value) => values.push(value),
            None => match extraction {
                FieldExtraction::Required => {
                    return Err(CoreError::MissingField {
                        field: field.raw_key,
                        index,
                    });
                }
                FieldExtraction::BestEffort => {}
            },
        }
    }
    Ok(values)
}

/// Resolve a field's threshold band from the caller-supplied map.
fn lookup_band(
    thresholds: &Thresholds,
    field: &FieldSpec,
    lookup: ThresholdLookup,
) -> Result<Band, CoreError> {
    let low_key = format!("{}_healthy", field.base);
    let low = match thresholds.get(&low_key) {
        Some(value) => *value,
        None => match lookup {
            ThresholdLookup::Lenient => f64::NEG_INFINITY,
            ThresholdLookup::Strict => return Err(CoreError::MissingThreshold(low_key)),
        },
    };

    let high_key = format!("{}_warning", field.base);
    let high = match thresholds.get(&high_key) {
        Some(value) => *value,
        None => match lookup {
            ThresholdLookup::Lenient => f64::INFINITY,
            ThresholdLookup::Strict => return Err(CoreError::MissingThreshold(high_key)),
        },
    };

    Ok(Band { low, high })
}
