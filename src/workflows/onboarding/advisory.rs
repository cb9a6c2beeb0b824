use super::evaluation::Reason;
use super::normalizer::NormalizedNarrative;
use serde::{Deserialize, Serialize};

const ADDRESS_KEYWORDS: &[&str] = &["endereço", "localização"];

const ADDRESS_SUGGESTION: &str = "Confirme se o endereço de entrega bate com o endereço do CNPJ e verifique no Google Maps se o local é idôneo.";

pub(crate) const BASELINE_SUGGESTIONS: &[&str] = &[
    "Solicite comprovante de atividade (fachada, redes sociais, notas fiscais, cartão de visita, extrato de vendas).",
    "Pesquise o comprovante enviado no Google Imagens para verificar sua autenticidade.",
    "Questione a necessidade real se o cliente pedir muitas máquinas ou modelos específicos.",
    "Antes de credenciar, envie o APP e peça que o cliente realize o KYC.",
];

const ASK_FOR_STOREFRONT: &str =
    "Pode enviar foto da fachada ou link das redes sociais do negócio?";
const ASK_OPENING_DATE: &str = "Qual a data de abertura da empresa e onde ela operava antes?";

/// Follow-up content produced for one evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advisory {
    pub tips: Vec<String>,
    pub questions: Vec<String>,
    pub suggestions: Vec<String>,
}

struct Guidance {
    tips: &'static [&'static str],
    questions: &'static [&'static str],
}

fn guidance_for(reason: &Reason) -> Guidance {
    match reason {
        Reason::SaoPauloAreaCode => Guidance {
            tips: &["DDD de São Paulo concentra tentativas de fraude; redobre a atenção se houver outros sinais."],
            questions: &["O telefone informado está em nome do titular da conta?"],
        },
        Reason::FoodServiceSegment => Guidance {
            tips: &["Ramo alimentício é frequentemente usado como fachada em cadastros fraudulentos."],
            questions: &["Qual o nome do estabelecimento e há quanto tempo está em funcionamento?"],
        },
        Reason::FoodServiceHighVolume => Guidance {
            tips: &["TPV acima de R$100mil é incomum para estabelecimentos alimentícios de pequeno porte."],
            questions: &[
                "Como o cliente chegou a esse valor de faturamento mensal?",
                "Pode enviar extrato de vendas dos últimos meses?",
            ],
        },
        Reason::DeviceRequest(_) => Guidance {
            tips: &["Pedidos de muitas máquinas em um primeiro credenciamento fogem do padrão."],
            questions: &["Quantos pontos de venda ou caixas o estabelecimento possui?"],
        },
        Reason::SuspectTerminalModel => Guidance {
            tips: &["Modelos Smart/P2/Pinpad têm alto valor de revenda e são visados por fraudadores."],
            questions: &["Por que o cliente precisa especificamente desse modelo?"],
        },
        Reason::PreActivatedAccount => Guidance {
            tips: &["Conta pré-ativa e plano Flex pulam etapas de validação; confirme a origem do atendimento."],
            questions: &["Quem indicou ou transferiu o atendimento para o plano Flex?"],
        },
        Reason::CpfWithoutProof => Guidance {
            tips: &["Cliente CPF sem comprovação de atividade não tem vínculo verificável com o negócio."],
            questions: &[
                ASK_FOR_STOREFRONT,
                "Qual atividade o cliente exerce como pessoa física?",
            ],
        },
        Reason::MissingActivityProof => Guidance {
            tips: &["Sem comprovante de atividade não é possível confirmar que o negócio existe."],
            questions: &[ASK_FOR_STOREFRONT],
        },
        Reason::FastFeeAcceptance => Guidance {
            tips: &["Aceitar taxas sem negociar é comum em quem não pretende usar a máquina de forma legítima."],
            questions: &["O cliente comparou as taxas com outras credenciadoras?"],
        },
        Reason::CnaeDivergence => Guidance {
            tips: &["CNAE divergente do ramo informado pode indicar uso de CNPJ de terceiros."],
            questions: &["Qual atividade consta no cartão CNPJ e por que difere do ramo informado?"],
        },
        Reason::RecentRegistration => Guidance {
            tips: &["Empresas abertas há menos de 30 dias ainda não têm histórico que sustente o volume declarado."],
            questions: &[ASK_OPENING_DATE],
        },
        Reason::RecentCnpjWithoutProof => Guidance {
            tips: &["CNPJ recém-aberto sem comprovante de atividade é padrão recorrente de empresa de fachada."],
            questions: &[ASK_FOR_STOREFRONT, ASK_OPENING_DATE],
        },
        Reason::FraudIndicators => Guidance {
            tips: &["O relato menciona fraude, golpe ou restrição cadastral; escale para a equipe de prevenção."],
            questions: &["O cliente já teve conta encerrada em outra credenciadora?"],
        },
    }
}

/// Builds tips and questions in reason order and the suggestion list, keeping the first
/// occurrence of any repeated text.
pub(crate) fn advise(reasons: &[Reason], narrative: &NormalizedNarrative) -> Advisory {
    let mut advisory = Advisory::default();

    for reason in reasons {
        let guidance = guidance_for(reason);
        for tip in guidance.tips {
            push_unique(&mut advisory.tips, tip);
        }
        for question in guidance.questions {
            push_unique(&mut advisory.questions, question);
        }
    }

    if narrative.contains_any(ADDRESS_KEYWORDS) {
        push_unique(&mut advisory.suggestions, ADDRESS_SUGGESTION);
    }
    for suggestion in BASELINE_SUGGESTIONS {
        push_unique(&mut advisory.suggestions, suggestion);
    }

    advisory
}

pub(crate) fn push_unique(items: &mut Vec<String>, candidate: &str) {
    if !items.iter().any(|existing| existing == candidate) {
        items.push(candidate.to_string());
    }
}
