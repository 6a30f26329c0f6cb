// 🧭 Categorizer - Keyword classification with a fixed confidence model
// Short-circuits on the first category (in priority order) with a keyword hit

use serde::{Deserialize, Serialize};

use crate::keywords::KeywordDictionary;
use crate::taxonomy::{parse_category, Category};

// ============================================================================
// CONFIDENCE TIERS
// ============================================================================

/// Category named outright in the text, or a trusted remote answer
pub const CONFIDENCE_EXACT: f64 = 0.95;

/// Matched through keyword containment
pub const CONFIDENCE_KEYWORD: f64 = 0.80;

/// Nothing matched; defaulted to `other`
pub const CONFIDENCE_DEFAULT: f64 = 0.50;

/// How a result was reached. Not serialized; the wire shape is `{category, confidence}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// The winning category's identifier appears as a whole word
    ExactName,
    Keyword,
    Default,
    /// Produced by a remote classifier rather than the keyword table
    Remote,
}

// ============================================================================
// CLASSIFICATION RESULT
// ============================================================================

/// Deserialization goes through `WireResult`, so an unknown category becomes
/// `other` and confidence is clamped instead of the payload being rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "WireResult")]
pub struct ClassificationResult {
    pub category: Category,

    /// Heuristic certainty in [0, 1]
    pub confidence: f64,

    #[serde(skip)]
    pub kind: MatchKind,

    /// Keyword that decided the match, when there was one
    #[serde(skip)]
    pub matched_keyword: Option<String>,
}

/// `{category, confidence}` as sent by a remote categorize service
#[derive(Debug, Deserialize)]
struct WireResult {
    category: String,
    confidence: f64,
}

impl From<WireResult> for ClassificationResult {
    fn from(wire: WireResult) -> Self {
        ClassificationResult::new(
            parse_category(&wire.category),
            wire.confidence,
            MatchKind::Remote,
        )
    }
}

impl ClassificationResult {
    /// Confidence is clamped into [0, 1]; non-finite values become 0.
    pub fn new(category: Category, confidence: f64, kind: MatchKind) -> Self {
        let confidence = if confidence.is_finite() {
            confidence.clamp(0.0, 1.0)
        } else {
            0.0
        };

        ClassificationResult {
            category,
            confidence,
            kind,
            matched_keyword: None,
        }
    }

    /// The `other` / 0.50 result returned when nothing matches
    pub fn fallback() -> Self {
        Self::new(Category::Other, CONFIDENCE_DEFAULT, MatchKind::Default)
    }

    /// Wire shape: `{"category": ..., "confidence": ...}`
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "category": self.category,
            "confidence": self.confidence,
        })
    }
}

impl Default for ClassificationResult {
    fn default() -> Self {
        Self::fallback()
    }
}

// ============================================================================
// CATEGORIZER
// ============================================================================

/// Keyword categorizer over a dictionary. Cheap to construct, safe to share.
#[derive(Debug, Clone, Copy)]
pub struct Categorizer<'a> {
    dictionary: &'a KeywordDictionary,
}

impl Categorizer<'static> {
    /// Categorizer over the built-in dictionary
    pub fn builtin() -> Self {
        Categorizer::new(KeywordDictionary::builtin())
    }
}

impl<'a> Categorizer<'a> {
    pub fn new(dictionary: &'a KeywordDictionary) -> Self {
        Categorizer { dictionary }
    }

    pub fn dictionary(&self) -> &'a KeywordDictionary {
        self.dictionary
    }

    /// Classify an expense description. Total over any input.
    pub fn classify(&self, text: &str) -> ClassificationResult {
        let text_lower = text.to_lowercase();

        for rule in self.dictionary.rules() {
            let hit = rule
                .keywords
                .iter()
                .find(|keyword| text_lower.contains(keyword.as_str()));

            let Some(keyword) = hit else {
                continue;
            };

            let kind = if names_category(&text_lower, rule.category) {
                MatchKind::ExactName
            } else {
                MatchKind::Keyword
            };

            let confidence = match kind {
                MatchKind::ExactName => CONFIDENCE_EXACT,
                _ => CONFIDENCE_KEYWORD,
            };

            tracing::debug!(
                category = %rule.category,
                keyword = %keyword,
                confidence,
                "description matched keyword"
            );

            let mut result = ClassificationResult::new(rule.category, confidence, kind);
            result.matched_keyword = Some(keyword.clone());
            return result;
        }

        tracing::debug!("no keyword matched, defaulting to other");
        ClassificationResult::fallback()
    }
}

impl Default for Categorizer<'static> {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Classify with the built-in dictionary
pub fn classify(text: &str) -> ClassificationResult {
    Categorizer::builtin().classify(text)
}

/// True when the category identifier appears as a standalone alphanumeric token
fn names_category(text_lower: &str, category: Category) -> bool {
    text_lower
        .split(|c: char| !c.is_alphanumeric())
        .any(|token| token == category.as_str())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keywords::KeywordRule;

    fn dictionary(pairs: &[(Category, &[&str])]) -> KeywordDictionary {
        let rules = pairs
            .iter()
            .map(|(category, words)| KeywordRule {
                category: *category,
                keywords: words.iter().map(|w| w.to_string()).collect(),
            })
            .collect();
        KeywordDictionary::from_rules(rules).unwrap()
    }

    fn minimal() -> KeywordDictionary {
        dictionary(&[
            (Category::Food, &["pizza"]),
            (Category::Transport, &["uber", "gas"]),
            (Category::Health, &["farmacia"]),
            (Category::Housing, &["aluguel"]),
            (Category::Utilities, &["gas", "luz"]),
            (Category::Shopping, &["loja"]),
            (Category::Entertainment, &["cinema"]),
            (Category::Education, &["curso"]),
            (Category::Savings, &["poupanca"]),
        ])
    }

    #[test]
    fn test_empty_text_defaults_to_other() {
        let result = classify("");
        assert_eq!(result.category, Category::Other);
        assert_eq!(result.confidence, CONFIDENCE_DEFAULT);
        assert_eq!(result.kind, MatchKind::Default);
        assert_eq!(result.matched_keyword, None);
    }

    #[test]
    fn test_keyword_match() {
        let result = classify("restaurante");
        assert_eq!(result.category, Category::Food);
        assert_eq!(result.confidence, CONFIDENCE_KEYWORD);
        assert_eq!(result.kind, MatchKind::Keyword);
        assert_eq!(result.matched_keyword.as_deref(), Some("restaurante"));
    }

    #[test]
    fn test_vendor_recognition() {
        let result = classify("Uber ride downtown");
        assert_eq!(result.category, Category::Transport);
        assert_eq!(result.confidence, CONFIDENCE_KEYWORD);
    }

    #[test]
    fn test_exact_category_name_raises_confidence() {
        let result = classify("Weekly FOOD run");
        assert_eq!(result.category, Category::Food);
        assert_eq!(result.confidence, CONFIDENCE_EXACT);
        assert_eq!(result.kind, MatchKind::ExactName);
    }

    #[test]
    fn test_category_name_inside_word_is_only_a_keyword() {
        // "seafood" contains "food" but is not the token "food"
        let result = classify("seafood platter");
        assert_eq!(result.category, Category::Food);
        assert_eq!(result.confidence, CONFIDENCE_KEYWORD);
    }

    #[test]
    fn test_first_category_in_priority_order_wins() {
        let dict = minimal();
        let categorizer = Categorizer::new(&dict);

        // "gas" is listed under both transport and utilities
        assert_eq!(categorizer.classify("gas bill").category, Category::Transport);

        let both = categorizer.classify("pizza then cinema");
        assert_eq!(both, categorizer.classify("pizza"));
    }

    #[test]
    fn test_containment_is_not_tokenized() {
        let dict = minimal();
        let categorizer = Categorizer::new(&dict);

        assert_eq!(categorizer.classify("lojas americanas").category, Category::Shopping);
        assert_eq!(categorizer.classify("CURSOS online").category, Category::Education);
    }

    #[test]
    fn test_custom_dictionary_is_used_exclusively() {
        let dict = minimal();
        let categorizer = Categorizer::new(&dict);

        // "netflix" is only in the built-in table
        assert_eq!(categorizer.classify("netflix").category, Category::Other);
        assert_eq!(classify("netflix").category, Category::Entertainment);
    }

    #[test]
    fn test_serializes_to_wire_shape() {
        let result = classify("uber");
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json, serde_json::json!({ "category": "transport", "confidence": 0.8 }));
        assert_eq!(result.to_json(), json);
    }

    #[test]
    fn test_deserialized_result_is_marked_remote() {
        let result: ClassificationResult =
            serde_json::from_str(r#"{"category": "health", "confidence": 0.9}"#).unwrap();

        assert_eq!(result.category, Category::Health);
        assert_eq!(result.kind, MatchKind::Remote);
        assert_eq!(result.matched_keyword, None);
    }

    #[test]
    fn test_deserialize_normalizes_unknown_category() {
        // Older backends still answer with the retired "leisure" category
        let result: ClassificationResult =
            serde_json::from_str(r#"{"category": "leisure", "confidence": 0.9}"#).unwrap();

        assert_eq!(result.category, Category::Other);
        assert_eq!(result.confidence, 0.9);

        let result: ClassificationResult =
            serde_json::from_str(r#"{"category": " FOOD ", "confidence": 0.9}"#).unwrap();
        assert_eq!(result.category, Category::Food);
    }

    #[test]
    fn test_deserialize_clamps_confidence() {
        let result: ClassificationResult =
            serde_json::from_str(r#"{"category": "food", "confidence": 1.7}"#).unwrap();
        assert_eq!(result.confidence, 1.0);

        let result: ClassificationResult =
            serde_json::from_str(r#"{"category": "food", "confidence": -3}"#).unwrap();
        assert_eq!(result.confidence, 0.0);
    }

    #[test]
    fn test_confidence_is_clamped() {
        let result = ClassificationResult::new(Category::Food, 1.7, MatchKind::Remote);
        assert_eq!(result.confidence, 1.0);

        let result = ClassificationResult::new(Category::Food, -0.2, MatchKind::Remote);
        assert_eq!(result.confidence, 0.0);

        let result = ClassificationResult::new(Category::Food, f64::NAN, MatchKind::Remote);
        assert_eq!(result.confidence, 0.0);
    }
}
