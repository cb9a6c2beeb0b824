//! End-to-end scenarios for narrative assessment through the public engine API.

use sara::workflows::onboarding::{evaluate, EvaluationConfig, RiskEngine, Verdict};

const BASELINE: [&str; 4] = [
    "Solicite comprovante de atividade (fachada, redes sociais, notas fiscais, cartão de visita, extrato de vendas).",
    "Pesquise o comprovante enviado no Google Imagens para verificar sua autenticidade.",
    "Questione a necessidade real se o cliente pedir muitas máquinas ou modelos específicos.",
    "Antes de credenciar, envie o APP e peça que o cliente realize o KYC.",
];

#[test]
fn empty_narrative_yields_baseline_suggestions_only() {
    let result = evaluate("");

    assert_eq!(result.verdict, Verdict::NoRisk);
    assert!(result.reasons.is_empty());
    assert!(result.tips.is_empty());
    assert!(result.questions.is_empty());
    assert_eq!(result.suggestions, BASELINE);
}

#[test]
fn arbitrary_text_never_panics() {
    let inputs = [
        "tpv",
        "tpv ,,,,",
        "tpv -.-.- mil",
        "99999999999999999999999 máquinas",
        "ddd 0",
        "🙂 restaurante 🙂 tpv 200k",
        "\n\n\t",
    ];

    for input in inputs {
        let result = evaluate(input);
        assert_eq!(result, evaluate(input));
        assert!(!result.suggestions.is_empty());
    }
}

#[test]
fn device_threshold_boundary() {
    assert_eq!(evaluate("7 máquinas").verdict, Verdict::RiskFound);
    assert!(evaluate("6 máquinas").reasons.is_empty());
}

#[test]
fn unit_suffix_matches_plain_amount() {
    let with_suffix = evaluate("restaurante, tpv 150mil");
    let plain = evaluate("restaurante, tpv 150000");

    assert_eq!(with_suffix.reasons, plain.reasons);
    assert!(with_suffix
        .reasons
        .iter()
        .any(|reason| reason == "TPV alimentício acima de R$100mil"));
    assert!(!evaluate("restaurante, tpv 90mil")
        .reasons
        .iter()
        .any(|reason| reason == "TPV alimentício acima de R$100mil"));
}

#[test]
fn engines_can_be_shared_across_threads() {
    let engine = std::sync::Arc::new(RiskEngine::new(EvaluationConfig::default()));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let engine = engine.clone();
            std::thread::spawn(move || engine.evaluate("CPF, pediu 8 máquinas"))
        })
        .collect();

    for handle in handles {
        let result = handle.join().expect("evaluation thread completes");
        assert_eq!(result.verdict, Verdict::RiskFound);
        assert_eq!(
            result.reasons,
            vec![
                "Solicitação de 8 máquinas",
                "CPF sem comprovante de atividade",
                "Cliente sem comprovante de atividade",
            ]
        );
    }
}
