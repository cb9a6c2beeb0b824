use super::advisory::{push_unique, Advisory};
use super::evaluation::{Reason, Verdict};
use serde::{Deserialize, Serialize};

/// Everything a caller needs to render one assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub verdict: Verdict,
    pub reasons: Vec<String>,
    pub tips: Vec<String>,
    pub questions: Vec<String>,
    pub suggestions: Vec<String>,
}

impl EvaluationResult {
    pub fn is_risk(&self) -> bool {
        self.verdict.is_risk()
    }

    pub fn summary(&self) -> String {
        if self.reasons.is_empty() {
            format!(
                "{}: nenhum motivo crítico identificado",
                self.verdict.summary()
            )
        } else {
            format!("{}: {}", self.verdict.summary(), self.reasons.join(", "))
        }
    }
}

pub(crate) fn assemble(verdict: Verdict, reasons: &[Reason], advisory: Advisory) -> EvaluationResult {
    let mut labels = Vec::with_capacity(reasons.len());
    for reason in reasons {
        push_unique(&mut labels, &reason.label());
    }

    let Advisory {
        tips,
        questions,
        suggestions,
    } = advisory;

    EvaluationResult {
        verdict,
        reasons: labels,
        tips,
        questions,
        suggestions,
    }
}
