mod config;
mod policy;
mod rules;

pub use config::EvaluationConfig;
pub use policy::{Reason, Verdict};

use super::advisory::advise;
use super::normalizer::normalize;
use super::report::{assemble, EvaluationResult};
use super::signals::Signals;
use tracing::debug;

/// Stateless evaluator that applies the rule catalog to a narrative.
///
/// The engine only holds thresholds, so one instance can be shared across threads and requests.
#[derive(Debug, Clone, Default)]
pub struct RiskEngine {
    config: EvaluationConfig,
}

impl RiskEngine {
    pub fn new(config: EvaluationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EvaluationConfig {
        &self.config
    }

    pub fn evaluate(&self, narrative: &str) -> EvaluationResult {
        let normalized = normalize(narrative);
        let signals = Signals::extract(&normalized);
        let reasons = rules::aggregate(&signals, &self.config);
        let verdict = policy::classify(&reasons, signals.area_code, &self.config);
        let advisory = advise(&reasons, &normalized);

        debug!(
            ?verdict,
            reasons = reasons.len(),
            high_risk = reasons.iter().filter(|reason| reason.is_high_risk()).count(),
            area_code = signals.area_code,
            "narrative evaluated"
        );

        assemble(verdict, &reasons, advisory)
    }

    /// Signals extracted from a narrative, for callers that want to show the evidence.
    pub fn signals(&self, narrative: &str) -> Signals {
        Signals::extract(&normalize(narrative))
    }
}

/// Evaluates a narrative with the default thresholds.
pub fn evaluate(narrative: &str) -> EvaluationResult {
    RiskEngine::default().evaluate(narrative)
}
