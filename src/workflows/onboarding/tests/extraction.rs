use super::common::*;
use crate::workflows::onboarding::signals::{self, parse_transaction_volume_for_tests, Signal};
use crate::workflows::onboarding::{normalize, Signals, TerminalModel};

#[test]
fn empty_narrative_yields_default_signals() {
    assert_eq!(signals_for(""), Signals::default());
}

#[test]
fn area_code_requires_whole_token() {
    assert!(signals_for("DDD 011").area_code);
    assert!(signals_for("ligou do 19 ontem").area_code);
    assert!(!signals_for("ddd 21").area_code);
    assert!(!signals_for("código 0119").area_code);
    assert!(!signals_for("protocolo 112").area_code);
}

#[test]
fn food_service_matches_plain_substrings() {
    assert!(signals_for("Tem uma PIZZARIA no bairro").food_service);
    assert!(signals_for("dono de um barzinho").food_service);
    assert!(!signals_for("loja de roupas").food_service);
}

#[test]
fn transaction_volume_applies_unit_suffix() {
    assert_eq!(parse_transaction_volume_for_tests("tpv 150mil"), 150_000);
    assert_eq!(parse_transaction_volume_for_tests("tpv 150000"), 150_000);
    assert_eq!(parse_transaction_volume_for_tests("tpv 150k"), 150_000);
    assert_eq!(parse_transaction_volume_for_tests("tpv 150 mil"), 150_000);
}

#[test]
fn transaction_volume_strips_every_separator() {
    assert_eq!(parse_transaction_volume_for_tests("tpv 120.000"), 120_000);
    assert_eq!(parse_transaction_volume_for_tests("tpv 120,000"), 120_000);
    assert_eq!(parse_transaction_volume_for_tests("tpv: 80-000"), 80_000);
    assert_eq!(parse_transaction_volume_for_tests("tpv 1,5 mil"), 15_000);
}

#[test]
fn transaction_volume_degrades_to_zero() {
    assert_eq!(parse_transaction_volume_for_tests("sem volume informado"), 0);
    assert_eq!(parse_transaction_volume_for_tests("tpv de 120mil"), 0);
}

#[test]
fn oversized_numbers_saturate() {
    assert_eq!(
        parse_transaction_volume_for_tests("tpv 99999999999999999999999"),
        u64::MAX
    );
    assert_eq!(
        parse_transaction_volume_for_tests("tpv 99999999999999999mil"),
        u64::MAX
    );

    let signals = signals_for("99999999999999999999999 máquinas");
    assert_eq!(signals.device_count, u64::MAX);
    assert_eq!(signals.device_count_text, "99999999999999999999999");
}

#[test]
fn device_count_reads_leading_integer() {
    assert_eq!(signals_for("pediu 10 maquininhas").device_count, 10);
    assert_eq!(signals_for("quer 12máquinas").device_count, 12);
    assert_eq!(signals_for("quer 2 maquinas e depois 9 máquinas").device_count, 2);
}

#[test]
fn device_count_keeps_digits_as_written() {
    let signals = signals_for("pediu 07 máquinas");

    assert_eq!(signals.device_count, 7);
    assert_eq!(signals.device_count_text, "07");
    assert_eq!(
        signals::device_count(&normalize("sem pedido")),
        Signal::DeviceCount {
            count: 0,
            written: String::new(),
        }
    );
}

#[test]
fn device_count_ignores_unlisted_forms() {
    assert_eq!(signals_for("pediu 7 maquina").device_count, 0);
    assert_eq!(signals_for("pediu sete máquinas").device_count, 0);
}

#[test]
fn non_ascii_digits_read_as_zero() {
    let signals = signals_for("pediu ７ máquinas");

    assert_eq!(signals.device_count, 0);
    assert_eq!(signals.device_count_text, "７");
    assert_eq!(parse_transaction_volume_for_tests("tpv １２０mil"), 0);
}

#[test]
fn device_model_reports_first_listed_family() {
    assert_eq!(
        signals_for("quer pin pad").device_model,
        Some(TerminalModel::Pinpad)
    );
    assert_eq!(
        signals_for("quer P2 e Smart").device_model,
        Some(TerminalModel::Smart)
    );
    assert_eq!(signals_for("quer a maquininha comum").device_model, None);
}

#[test]
fn proof_denial_also_counts_as_presence() {
    let signals = signals_for("cliente sem comprovante de atividade");
    assert!(signals.proof_of_activity);
    assert!(signals.proof_denied);

    let signals = signals_for("mandou o instagram");
    assert!(signals.proof_of_activity);
    assert!(!signals.proof_denied);
}

#[test]
fn identity_reports_both_tokens() {
    let narrative = normalize("Tem CPF e CNPJ");
    assert_eq!(
        signals::identity(&narrative),
        Signal::Identity {
            cpf: true,
            cnpj: true
        }
    );
}

#[test]
fn keyword_extractors_flag_their_concerns() {
    let signals = signals_for(
        "conta pré-ativa, aceitou proposta, cnae divergente, empresa nova, documento falso",
    );
    assert!(signals.pre_activated_account);
    assert!(signals.fast_acceptance);
    assert!(signals.cnae_divergence);
    assert!(signals.recent_registration);
    assert!(signals.blacklisted);
}

#[test]
fn extractors_see_identical_input_regardless_of_order() {
    let narrative = normalize(FULL_CASE);
    let forward: Vec<Signal> = signals::EXTRACTORS
        .iter()
        .map(|extractor| extractor(&narrative))
        .collect();
    let mut backward: Vec<Signal> = signals::EXTRACTORS
        .iter()
        .rev()
        .map(|extractor| extractor(&narrative))
        .collect();
    backward.reverse();

    assert_eq!(forward, backward);
    assert_eq!(engine().signals(FULL_CASE), Signals::extract(&narrative));
}
