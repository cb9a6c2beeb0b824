use super::super::signals::Signals;
use super::config::EvaluationConfig;
use super::policy::Reason;

/// Applies every rule in catalog order. Rules never short-circuit each other, so one narrative
/// commonly yields several reasons.
pub(crate) fn aggregate(signals: &Signals, config: &EvaluationConfig) -> Vec<Reason> {
    let mut reasons = Vec::new();
    let cpf_without_proof = signals.cpf && !signals.proof_of_activity;

    if signals.area_code {
        reasons.push(Reason::SaoPauloAreaCode);
    }

    if signals.food_service {
        reasons.push(Reason::FoodServiceSegment);
        if signals.transaction_volume >= config.transaction_volume_threshold {
            reasons.push(Reason::FoodServiceHighVolume);
        }
    }

    if !signals.device_count_text.is_empty()
        && signals.device_count >= config.device_count_threshold
    {
        reasons.push(Reason::DeviceRequest(signals.device_count_text.clone()));
    }

    if signals.device_model.is_some() {
        reasons.push(Reason::SuspectTerminalModel);
    }

    if signals.pre_activated_account {
        reasons.push(Reason::PreActivatedAccount);
    }

    if cpf_without_proof {
        reasons.push(Reason::CpfWithoutProof);
    }

    if signals.proof_denied || cpf_without_proof {
        reasons.push(Reason::MissingActivityProof);
    }

    if signals.fast_acceptance {
        reasons.push(Reason::FastFeeAcceptance);
    }

    if signals.cnae_divergence {
        reasons.push(Reason::CnaeDivergence);
    }

    if signals.recent_registration {
        reasons.push(Reason::RecentRegistration);
        if signals.cnpj && !signals.proof_of_activity {
            reasons.push(Reason::RecentCnpjWithoutProof);
        }
    }

    if signals.blacklisted {
        reasons.push(Reason::FraudIndicators);
    }

    reasons
}
