/// Lowercased narrative shared by every extractor in one evaluation.
///
/// Only [`normalize`] builds one, so no extractor can observe text that skipped normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedNarrative(String);

impl NormalizedNarrative {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn contains_any(&self, keywords: &[&str]) -> bool {
        keywords.iter().any(|keyword| self.0.contains(keyword))
    }
}

/// Lowercases the narrative. Whitespace, accents and punctuation are left untouched.
pub fn normalize(text: &str) -> NormalizedNarrative {
    NormalizedNarrative(text.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_without_other_changes() {
        let normalized = normalize("  CPF, DDD 011,  Máquinas!  ");
        assert_eq!(normalized.as_str(), "  cpf, ddd 011,  máquinas!  ");
    }

    #[test]
    fn contains_any_matches_substrings() {
        let normalized = normalize("Cliente tem um BARZINHO");
        assert!(normalized.contains_any(&["padaria", "bar"]));
        assert!(!normalized.contains_any(&["padaria", "pizzaria"]));
        assert!(!normalized.contains_any(&[]));
    }
}
