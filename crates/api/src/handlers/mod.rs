//! HTTP request handlers.
//!
//! Request/response types live next to the handlers that use them; the
//! two shapes shared across endpoint families are defined here.

pub mod analysis;
pub mod docs;
pub mod home;
pub mod screening;

use serde::{Deserialize, Serialize};
use vitals_core::health::evaluate::MachineCondition;
use vitals_core::health::{Reading, Thresholds};

/// Request body shared by every ingestion endpoint: a batch of readings
/// plus the threshold map to check them against.
///
/// Both keys are optional at the deserialization layer so the handlers can
/// report their absence with the contractual message and status instead of
/// a generic deserialization failure.
#[derive(Debug, Deserialize)]
pub struct SensorBatchRequest {
    #[serde(default)]
    pub data_list: Option<Vec<Reading>>,
    #[serde(default)]
    pub thresholds: Option<Thresholds>,
}

/// Overall machine health label exposed by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OverallHealth {
    Healthy,
    Unhealthy,
}

impl From<MachineCondition> for OverallHealth {
    fn from(condition: MachineCondition) -> Self {
        match condition {
            MachineCondition::Good => Self::Healthy,
            MachineCondition::NeedsMaintenance => Self::Unhealthy,
        }
    }
}
