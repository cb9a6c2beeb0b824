use super::config::EvaluationConfig;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The catalog only lists the "7" and "8" terminal requests, matched on the digits as written.
/// "07" or 9+ still produce a reason but need the area-code path or another reason to flip the
/// verdict.
const HIGH_RISK_DEVICE_REQUESTS: &[&str] = &["7", "8"];

/// Binary classification handed to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    RiskFound,
    NoRisk,
}

impl Verdict {
    pub fn is_risk(self) -> bool {
        matches!(self, Verdict::RiskFound)
    }

    pub fn summary(self) -> &'static str {
        match self {
            Verdict::RiskFound => "RISCO ENCONTRADO",
            Verdict::NoRisk => "CLIENTE SEM RISCO ENCONTRADO",
        }
    }
}

/// Closed catalog of risk reasons.
///
/// Several entries overlap on purpose (`CpfWithoutProof` and `MissingActivityProof` fire from the
/// same evidence); they are reported separately.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reason {
    SaoPauloAreaCode,
    FoodServiceSegment,
    FoodServiceHighVolume,
    /// Requested terminal count, digits as written in the narrative.
    DeviceRequest(String),
    SuspectTerminalModel,
    PreActivatedAccount,
    CpfWithoutProof,
    MissingActivityProof,
    FastFeeAcceptance,
    CnaeDivergence,
    RecentRegistration,
    RecentCnpjWithoutProof,
    FraudIndicators,
}

impl Reason {
    pub fn label(&self) -> String {
        match self {
            Reason::SaoPauloAreaCode => "DDD de São Paulo".to_string(),
            Reason::FoodServiceSegment => "Ramo alimentício".to_string(),
            Reason::FoodServiceHighVolume => "TPV alimentício acima de R$100mil".to_string(),
            Reason::DeviceRequest(count) => format!("Solicitação de {count} máquinas"),
            Reason::SuspectTerminalModel => "Insistência por modelos Smart/P2/Pinpad".to_string(),
            Reason::PreActivatedAccount => "Conta pré-ativa e/ou plano Flex solicitado".to_string(),
            Reason::CpfWithoutProof => "CPF sem comprovante de atividade".to_string(),
            Reason::MissingActivityProof => "Cliente sem comprovante de atividade".to_string(),
            Reason::FastFeeAcceptance => "Aceitou taxas sem negociação".to_string(),
            Reason::CnaeDivergence => "CNAE divergente do ramo informado".to_string(),
            Reason::RecentRegistration => "Empresa aberta há menos de 30 dias".to_string(),
            Reason::RecentCnpjWithoutProof => {
                "CNPJ recente sem comprovante de atividade".to_string()
            }
            Reason::FraudIndicators => "Indícios de fraude ou restrição cadastral".to_string(),
        }
    }

    /// Members of the high-risk subset are sufficient on their own for a risk verdict.
    pub fn is_high_risk(&self) -> bool {
        match self {
            Reason::FoodServiceHighVolume
            | Reason::SuspectTerminalModel
            | Reason::PreActivatedAccount
            | Reason::CpfWithoutProof
            | Reason::MissingActivityProof
            | Reason::FastFeeAcceptance
            | Reason::RecentCnpjWithoutProof
            | Reason::FraudIndicators => true,
            Reason::DeviceRequest(written) => {
                HIGH_RISK_DEVICE_REQUESTS.contains(&written.as_str())
            }
            Reason::SaoPauloAreaCode
            | Reason::FoodServiceSegment
            | Reason::CnaeDivergence
            | Reason::RecentRegistration => false,
        }
    }
}

/// Risk is found when any high-risk reason fired, or when a São Paulo area code accompanies at
/// least `area_code_min_reasons` distinct reasons of any kind.
pub(crate) fn classify(reasons: &[Reason], area_code: bool, config: &EvaluationConfig) -> Verdict {
    if reasons.iter().any(Reason::is_high_risk) {
        return Verdict::RiskFound;
    }

    let distinct = reasons.iter().collect::<HashSet<_>>().len();
    if area_code && distinct >= config.area_code_min_reasons {
        return Verdict::RiskFound;
    }

    Verdict::NoRisk
}
