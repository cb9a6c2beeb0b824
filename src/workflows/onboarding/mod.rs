//! Onboarding narrative risk assessment.
//!
//! A narrative is lowercased once, every extractor reads that same snapshot, the rule catalog
//! turns signals into reasons, and the verdict and advisory content are derived from the
//! reasons alone (plus the area-code signal and the address mention).

pub mod advisory;
pub mod evaluation;
pub mod normalizer;
pub mod report;
pub mod signals;

#[cfg(test)]
mod tests;

pub use advisory::Advisory;
pub use evaluation::{evaluate, EvaluationConfig, Reason, RiskEngine, Verdict};
pub use normalizer::{normalize, NormalizedNarrative};
pub use report::EvaluationResult;
pub use signals::{Signal, Signals, TerminalModel};
