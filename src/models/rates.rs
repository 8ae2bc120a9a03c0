//! Interest rate data models

use serde::{Deserialize, Serialize};

/// One dated observation of a rate series.
///
/// FRED reports missing observations as `"."`; those carry `None` here and
/// serialize as JSON `null`, which the charting layer renders as a line gap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateObservation {
    /// Observation date (YYYY-MM-DD)
    pub date: String,
    /// Rate in percent, `None` when the upstream value is missing
    pub value: Option<f64>,
}
