use crate::infra::read_narrative;
use clap::Args;
use sara::config::AppConfig;
use sara::error::AppError;
use sara::telemetry::{self, LogSink};
use sara::workflows::batch::{BatchSummary, BatchTriage};
use sara::workflows::onboarding::{EvaluationResult, RiskEngine, Signals};
use std::path::PathBuf;

/// Narratives used by the `demo` command, one per decision path.
const SAMPLE_CASES: &[(&str, &str)] = &[
    (
        "balcao-expresso",
        "CPF, DDD 011, TPV 120mil, pediu 7 máquinas Smart, aceitou taxas, sem comprovante de atividade, restaurante",
    ),
    (
        "padaria-bairro",
        "Padaria de bairro com CNPJ de 5 anos, TPV 40mil, pediu 2 máquinas, enviou foto da fachada e nota fiscal",
    ),
    (
        "ddd-acumulado",
        "DDD 11, lanchonete com CNAE divergente, empresa aberta recentemente, confirmar endereço de entrega",
    ),
    (
        "cnpj-recente",
        "CNPJ novo aberto há 12 dias, cliente pediu plano flex e não negociou taxa",
    ),
];

#[derive(Args, Debug, Default)]
pub(crate) struct EvaluateArgs {
    /// Narrative text. Read from --file or stdin when omitted.
    #[arg(long, conflicts_with = "file")]
    pub(crate) narrative: Option<String>,
    /// Read the narrative from a UTF-8 text file.
    #[arg(long)]
    pub(crate) file: Option<PathBuf>,
    /// Print the assessment as JSON instead of text.
    #[arg(long)]
    pub(crate) json: bool,
    /// Also print the signals extracted from the narrative.
    #[arg(long)]
    pub(crate) explain: bool,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// CSV file with `case_id` and `narrative` columns.
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// List only the cases with a risk verdict.
    #[arg(long)]
    pub(crate) only_risk: bool,
    /// Print the batch summary as JSON instead of text.
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Print each assessment as JSON instead of text.
    #[arg(long)]
    pub(crate) json: bool,
}

fn prepare_engine() -> Result<RiskEngine, AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry, LogSink::Stderr)?;
    Ok(RiskEngine::new(config.evaluation))
}

pub(crate) fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let EvaluateArgs {
        narrative,
        file,
        json,
        explain,
    } = args;

    let engine = prepare_engine()?;
    let narrative = read_narrative(narrative, file.as_deref(), std::io::stdin())?;
    let result = engine.evaluate(&narrative);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    if explain {
        render_signals(&engine.signals(&narrative));
    }
    render_result(&result);
    Ok(())
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let BatchArgs {
        input,
        only_risk,
        json,
    } = args;

    let engine = prepare_engine()?;
    let summary = BatchTriage::from_path(&input, &engine)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        render_batch(&summary, only_risk);
    }
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let engine = prepare_engine()?;

    println!("SARA demo: {} sample narratives", SAMPLE_CASES.len());
    for (case_id, narrative) in SAMPLE_CASES {
        let result = engine.evaluate(narrative);
        println!("\n=== {case_id} ===");
        println!("Relato: {narrative}");
        if args.json {
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            render_result(&result);
        }
    }
    Ok(())
}

fn render_result(result: &EvaluationResult) {
    println!("Veredito: {}", result.verdict.summary());

    if result.reasons.is_empty() {
        println!("Motivos: nenhum motivo crítico identificado.");
    } else {
        println!("Motivos: {}", result.reasons.join(", "));
    }

    render_list("Dicas", &result.tips);
    render_list("Perguntas para o cliente", &result.questions);
    render_list("Sugestões", &result.suggestions);

    if result.is_risk() {
        println!("\nAlerta: reforce a validação deste atendimento!");
    } else {
        println!("\nContinue seguindo boas práticas de checagem e validação.");
    }
}

fn render_list(title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }

    println!("\n{title}");
    for item in items {
        println!("- {item}");
    }
}

fn render_signals(signals: &Signals) {
    let model = signals
        .device_model
        .map(|model| model.label())
        .unwrap_or("nenhum");

    println!("Sinais extraídos");
    println!("- DDD de São Paulo: {}", yes_no(signals.area_code));
    println!("- Ramo alimentício: {}", yes_no(signals.food_service));
    println!("- TPV estimado: {}", signals.transaction_volume);
    println!("- Máquinas solicitadas: {}", signals.device_count);
    println!("- Modelo solicitado: {model}");
    println!("- Conta pré-ativa/Flex: {}", yes_no(signals.pre_activated_account));
    println!("- Comprovante de atividade: {}", yes_no(signals.proof_of_activity));
    println!("- CPF: {} | CNPJ: {}", yes_no(signals.cpf), yes_no(signals.cnpj));
    println!("- Aceitou taxas sem negociar: {}", yes_no(signals.fast_acceptance));
    println!("- CNAE divergente: {}", yes_no(signals.cnae_divergence));
    println!("- Abertura recente: {}", yes_no(signals.recent_registration));
    println!("- Indícios de fraude: {}", yes_no(signals.blacklisted));
    println!();
}

fn render_batch(summary: &BatchSummary, only_risk: bool) {
    println!(
        "Casos avaliados: {} ({} com risco, {} sem risco)",
        summary.total,
        summary.risk_found,
        summary.no_risk()
    );

    for case in &summary.cases {
        if only_risk && !case.result.is_risk() {
            continue;
        }
        println!("- {} | {}", case.case_id, case.result.summary());
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "sim"
    } else {
        "não"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sara::workflows::onboarding::Verdict;

    #[test]
    fn sample_cases_cover_both_verdicts() {
        let engine = RiskEngine::default();
        let verdicts: Vec<Verdict> = SAMPLE_CASES
            .iter()
            .map(|(_, narrative)| engine.evaluate(narrative).verdict)
            .collect();

        assert_eq!(
            verdicts,
            vec![
                Verdict::RiskFound,
                Verdict::NoRisk,
                Verdict::RiskFound,
                Verdict::RiskFound,
            ]
        );
    }

    #[test]
    fn area_code_sample_asks_for_address_check() {
        let engine = RiskEngine::default();
        let (_, narrative) = SAMPLE_CASES[2];
        let result = engine.evaluate(narrative);

        assert_eq!(result.reasons.len(), 4);
        assert_eq!(result.suggestions.len(), 5);
    }
}
