use serde::{Deserialize, Serialize};

/// Thresholds applied by the reason rules and the verdict classifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationConfig {
    /// Minimum stated TPV (inclusive) that flags a food-service merchant.
    pub transaction_volume_threshold: u64,
    /// Minimum number of requested terminals (inclusive) that produces a device reason.
    pub device_count_threshold: u64,
    /// Reason count that escalates a São Paulo area-code narrative to a risk verdict.
    pub area_code_min_reasons: usize,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            transaction_volume_threshold: 100_000,
            device_count_threshold: 7,
            area_code_min_reasons: 4,
        }
    }
}
