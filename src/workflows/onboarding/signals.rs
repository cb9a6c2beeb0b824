//! Independent extractors that read the normalized narrative and report one piece of evidence.
//!
//! Every extractor is a plain `fn` over the same [`NormalizedNarrative`]; none of them can fail.
//! Missing evidence is reported as `false`, `None` or `0`.

use super::normalizer::NormalizedNarrative;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::num::IntErrorKind;
use std::sync::LazyLock;

/// Two-digit São Paulo state area codes, optionally written with the trunk prefix `0`.
static AREA_CODE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b0?(11|12|13|14|15|16|17|18|19)\b").expect("area code pattern compiles")
});

/// The numeric group may capture nothing but a space (e.g. "tpv de 120mil"), which then parses
/// to zero.
static TRANSACTION_VOLUME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"tpv.*?([\d\.\-, ]+)(mil|k|\.|,)?").expect("tpv pattern compiles")
});

static DEVICE_COUNT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)\s*(máquina|maquinas|maquininhas|maquininha)")
        .expect("device count pattern compiles")
});

pub(crate) const FOOD_SERVICE_KEYWORDS: &[&str] = &[
    "alimentício",
    "restaurante",
    "bar",
    "lanchonete",
    "marmita",
    "food",
    "pizzaria",
    "padaria",
    "cafeteria",
    "mercearia",
];

const SUSPECT_MODEL_KEYWORDS: &[(&str, TerminalModel)] = &[
    ("smart", TerminalModel::Smart),
    ("p2", TerminalModel::P2),
    ("pinpad", TerminalModel::Pinpad),
    ("pin pad", TerminalModel::Pinpad),
];

const PRE_ACTIVATED_KEYWORDS: &[&str] = &[
    "pré-ativa",
    "preativa",
    "plano flex",
    "transferido do front",
    "conta pré-ativa",
];

const PROOF_KEYWORDS: &[&str] = &[
    "comprovante",
    "fachada",
    "instagram",
    "facebook",
    "nota fiscal",
    "cartão",
    "transacional",
    "extrato",
];

const PROOF_DENIAL_PHRASE: &str = "sem comprovante de atividade";

const CPF_TOKEN: &str = "cpf";
const CNPJ_TOKEN: &str = "cnpj";

const FAST_ACCEPTANCE_KEYWORDS: &[&str] = &[
    "aceitou taxa",
    "não negociou taxa",
    "aceitou proposta",
    "aceitou sem negociar",
    "aceitou taxas rapidamente",
];

const CNAE_DIVERGENCE_KEYWORDS: &[&str] = &[
    "cnae divergente",
    "cnae diferente",
    "cnae incompatível",
    "cnae não bate",
    "cnae nao bate",
    "cnae não corresponde",
    "atividade divergente",
    "ramo divergente",
];

const NEW_REGISTRATION_KEYWORDS: &[&str] = &[
    "cnpj novo",
    "cnpj recente",
    "empresa nova",
    "recém-aberta",
    "recém-aberto",
    "recém aberta",
    "recém aberto",
    "aberta recentemente",
    "aberto recentemente",
    "abertura recente",
    "menos de 30 dias",
];

const BLACKLIST_KEYWORDS: &[&str] = &[
    "fraude",
    "fraudador",
    "golpe",
    "golpista",
    "documento falso",
    "documentos falsos",
    "documento adulterado",
    "nome sujo",
    "negativado",
    "restrição no cpf",
    "restrição no cnpj",
    "histórico de crédito ruim",
    "lista restritiva",
];

/// Terminal families fraudsters ask for by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminalModel {
    Smart,
    P2,
    Pinpad,
}

impl TerminalModel {
    pub fn label(self) -> &'static str {
        match self {
            TerminalModel::Smart => "Smart",
            TerminalModel::P2 => "P2",
            TerminalModel::Pinpad => "Pinpad",
        }
    }
}

/// Output of a single extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signal {
    AreaCode(bool),
    FoodService(bool),
    TransactionVolume(u64),
    DeviceCount { count: u64, written: String },
    DeviceModel(Option<TerminalModel>),
    PreActivatedAccount(bool),
    ProofOfActivity { present: bool, denied: bool },
    Identity { cpf: bool, cnpj: bool },
    FastAcceptance(bool),
    CnaeDivergence(bool),
    RecentRegistration(bool),
    Blacklist(bool),
}

pub type Extractor = fn(&NormalizedNarrative) -> Signal;

/// The closed extractor set. Order is irrelevant: each one writes a distinct field of [`Signals`].
pub const EXTRACTORS: [Extractor; 12] = [
    area_code,
    food_service,
    transaction_volume,
    device_count,
    device_model,
    pre_activated_account,
    proof_of_activity,
    identity,
    fast_acceptance,
    cnae_divergence,
    recent_registration,
    blacklist,
];

/// Every signal extracted from one narrative.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signals {
    pub area_code: bool,
    pub food_service: bool,
    pub transaction_volume: u64,
    pub device_count: u64,
    /// Digits of the device request exactly as typed ("07" stays "07"); empty when absent.
    pub device_count_text: String,
    pub device_model: Option<TerminalModel>,
    pub pre_activated_account: bool,
    pub proof_of_activity: bool,
    pub proof_denied: bool,
    pub cpf: bool,
    pub cnpj: bool,
    pub fast_acceptance: bool,
    pub cnae_divergence: bool,
    pub recent_registration: bool,
    pub blacklisted: bool,
}

impl Signals {
    pub fn extract(narrative: &NormalizedNarrative) -> Self {
        EXTRACTORS
            .iter()
            .map(|extractor| extractor(narrative))
            .fold(Self::default(), Self::with)
    }

    fn with(mut self, signal: Signal) -> Self {
        match signal {
            Signal::AreaCode(found) => self.area_code = found,
            Signal::FoodService(found) => self.food_service = found,
            Signal::TransactionVolume(value) => self.transaction_volume = value,
            Signal::DeviceCount { count, written } => {
                self.device_count = count;
                self.device_count_text = written;
            }
            Signal::DeviceModel(model) => self.device_model = model,
            Signal::PreActivatedAccount(found) => self.pre_activated_account = found,
            Signal::ProofOfActivity { present, denied } => {
                self.proof_of_activity = present;
                self.proof_denied = denied;
            }
            Signal::Identity { cpf, cnpj } => {
                self.cpf = cpf;
                self.cnpj = cnpj;
            }
            Signal::FastAcceptance(found) => self.fast_acceptance = found,
            Signal::CnaeDivergence(found) => self.cnae_divergence = found,
            Signal::RecentRegistration(found) => self.recent_registration = found,
            Signal::Blacklist(found) => self.blacklisted = found,
        }
        self
    }
}

pub fn area_code(narrative: &NormalizedNarrative) -> Signal {
    Signal::AreaCode(AREA_CODE_RE.is_match(narrative.as_str()))
}

pub fn food_service(narrative: &NormalizedNarrative) -> Signal {
    Signal::FoodService(narrative.contains_any(FOOD_SERVICE_KEYWORDS))
}

pub fn transaction_volume(narrative: &NormalizedNarrative) -> Signal {
    Signal::TransactionVolume(parse_transaction_volume(narrative.as_str()))
}

pub fn device_count(narrative: &NormalizedNarrative) -> Signal {
    match DEVICE_COUNT_RE.captures(narrative.as_str()) {
        Some(captures) => Signal::DeviceCount {
            count: parse_digits(&captures[1]),
            written: captures[1].to_string(),
        },
        None => Signal::DeviceCount {
            count: 0,
            written: String::new(),
        },
    }
}

pub fn device_model(narrative: &NormalizedNarrative) -> Signal {
    let model = SUSPECT_MODEL_KEYWORDS
        .iter()
        .find(|(keyword, _)| narrative.as_str().contains(keyword))
        .map(|(_, model)| *model);
    Signal::DeviceModel(model)
}

pub fn pre_activated_account(narrative: &NormalizedNarrative) -> Signal {
    Signal::PreActivatedAccount(narrative.contains_any(PRE_ACTIVATED_KEYWORDS))
}

/// "sem comprovante de atividade" contains "comprovante", so a denial also counts as presence.
pub fn proof_of_activity(narrative: &NormalizedNarrative) -> Signal {
    Signal::ProofOfActivity {
        present: narrative.contains_any(PROOF_KEYWORDS),
        denied: narrative.as_str().contains(PROOF_DENIAL_PHRASE),
    }
}

pub fn identity(narrative: &NormalizedNarrative) -> Signal {
    Signal::Identity {
        cpf: narrative.as_str().contains(CPF_TOKEN),
        cnpj: narrative.as_str().contains(CNPJ_TOKEN),
    }
}

pub fn fast_acceptance(narrative: &NormalizedNarrative) -> Signal {
    Signal::FastAcceptance(narrative.contains_any(FAST_ACCEPTANCE_KEYWORDS))
}

pub fn cnae_divergence(narrative: &NormalizedNarrative) -> Signal {
    Signal::CnaeDivergence(narrative.contains_any(CNAE_DIVERGENCE_KEYWORDS))
}

pub fn recent_registration(narrative: &NormalizedNarrative) -> Signal {
    Signal::RecentRegistration(narrative.contains_any(NEW_REGISTRATION_KEYWORDS))
}

pub fn blacklist(narrative: &NormalizedNarrative) -> Signal {
    Signal::Blacklist(narrative.contains_any(BLACKLIST_KEYWORDS))
}

/// Values past `u64::MAX` saturate instead of being dropped. Only ASCII digits convert: the
/// patterns accept any Unicode decimal digit, so a run such as "７" (full width) matches but
/// reads as 0.
fn parse_digits(digits: &str) -> u64 {
    match digits.parse::<u64>() {
        Ok(value) => value,
        Err(err) if *err.kind() == IntErrorKind::PosOverflow => u64::MAX,
        Err(_) => 0,
    }
}

/// `.` and `,` are both treated as thousands separators, so "120.000" and "120,000" read the
/// same. Decimal-comma amounts such as "1,5 mil" become 15000.
fn parse_transaction_volume(text: &str) -> u64 {
    let Some(captures) = TRANSACTION_VOLUME_RE.captures(text) else {
        return 0;
    };

    let digits: String = captures[1]
        .chars()
        .filter(|c| !matches!(c, '.' | ',' | '-' | ' '))
        .collect();
    let value = parse_digits(&digits);

    match captures.get(2).map(|unit| unit.as_str()) {
        Some("mil") | Some("k") => value.saturating_mul(1000),
        _ => value,
    }
}

#[cfg(test)]
pub(crate) fn parse_transaction_volume_for_tests(text: &str) -> u64 {
    parse_transaction_volume(text)
}
