use crate::workflows::onboarding::advisory::BASELINE_SUGGESTIONS;
use crate::workflows::onboarding::{normalize, EvaluationConfig, RiskEngine, Signals};

/// Narrative modelled on the example analysts are shown in the intake form.
pub(super) const FULL_CASE: &str = "CPF, DDD 011, TPV 120mil, pediu 7 máquinas Smart, aceitou taxas, sem comprovante de atividade, restaurante";

pub(super) const ASK_FOR_STOREFRONT: &str =
    "Pode enviar foto da fachada ou link das redes sociais do negócio?";

pub(super) fn engine() -> RiskEngine {
    RiskEngine::new(EvaluationConfig::default())
}

pub(super) fn signals_for(text: &str) -> Signals {
    Signals::extract(&normalize(text))
}

pub(super) fn baseline_suggestions() -> Vec<String> {
    BASELINE_SUGGESTIONS
        .iter()
        .map(|suggestion| suggestion.to_string())
        .collect()
}
