// 📖 Keyword Dictionary - Rules as Data
// Category → ordered list of lowercase substrings (Portuguese, English, vendor names)
//
// The table is built whole and never patched. A custom dictionary (e.g. loaded
// from JSON) replaces the built-in one entirely.

use anyhow::{Context as AnyhowContext, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::errors::CategorizerError;
use crate::taxonomy::Category;

// ============================================================================
// BUILT-IN TABLE
// ============================================================================

// Every list carries its own category identifier, so a description that names
// the category outright ("food", "utilities") always hits that category.
const BUILTIN_RULES: &[(Category, &[&str])] = &[
    (
        Category::Food,
        &[
            "food", "restaurante", "restaurant", "mercado", "super", "padaria", "lanche",
            "comida", "cafe", "coffee", "pizza", "delivery", "almoço", "almoco", "jantar",
            "grocery", "groceries", "starbucks", "tim hortons", "mcdonalds", "loblaws", "ifood",
        ],
    ),
    (
        Category::Transport,
        &[
            "transport", "uber", "taxi", "lyft", "posto", "combustivel", "combustível",
            "gasolina", "gasoline", "fuel", "onibus", "ônibus", "metro", "gas", "shell",
            "esso", "estacionamento", "parking",
        ],
    ),
    (
        Category::Health,
        &[
            "health", "saude", "saúde", "farmacia", "farmácia", "drogaria", "pharmacy",
            "hospital", "medico", "médico", "doctor", "medical", "clinica", "clínica",
            "consulta", "exame", "dentist", "shoppers",
        ],
    ),
    (
        Category::Housing,
        &[
            "housing", "moradia", "casa", "aluguel", "condominio", "condomínio",
            "apartamento", "propriedade", "imovel", "imóvel", "rent", "landlord", "mortgage",
        ],
    ),
    (
        Category::Utilities,
        &[
            "utilities", "luz", "agua", "água", "internet", "telefone", "phone", "energia",
            "electricity", "water", "hydro", "bell", "bills",
        ],
    ),
    (
        Category::Shopping,
        &[
            "shopping", "compras", "loja", "roupa", "pessoal", "mercadorias", "clothes",
            "store", "h&m", "walmart", "amazon",
        ],
    ),
    (
        Category::Entertainment,
        &[
            "entertainment", "lazer", "cinema", "movie", "teatro", "theater", "bar", "festa",
            "viagem", "hotel", "netflix", "spotify", "streaming", "jogo", "game",
        ],
    ),
    (
        Category::Education,
        &[
            "education", "educacao", "educação", "escola", "school", "universidade",
            "university", "faculdade", "curso", "course", "livro", "book", "material",
            "estudo", "udemy", "coursera",
        ],
    ),
    (
        Category::Savings,
        &[
            "savings", "poupanca", "poupança", "investimento", "investment", "invest",
            "deposito", "depósito", "emergency", "fund", "bank",
        ],
    ),
];

static BUILTIN: Lazy<KeywordDictionary> = Lazy::new(|| {
    let rules = BUILTIN_RULES
        .iter()
        .map(|(category, words)| KeywordRule {
            category: *category,
            keywords: words.iter().map(|w| w.to_string()).collect(),
        })
        .collect();

    KeywordDictionary::from_rules(rules)
        .unwrap_or_else(|e| panic!("built-in keyword table is malformed: {}", e))
});

// ============================================================================
// KEYWORD RULE
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordRule {
    pub category: Category,

    /// Lowercase substrings; order is preserved
    pub keywords: Vec<String>,
}

/// On-disk shape. The category stays a string until it is parsed strictly.
#[derive(Debug, Deserialize)]
struct RawRule {
    category: String,
    keywords: Vec<String>,
}

// ============================================================================
// KEYWORD DICTIONARY
// ============================================================================

/// Immutable category → keywords table, stored in priority order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordDictionary {
    rules: Vec<KeywordRule>,
}

impl KeywordDictionary {
    /// Process-wide built-in dictionary, constructed on first use
    pub fn builtin() -> &'static KeywordDictionary {
        &BUILTIN
    }

    /// Build a complete dictionary from a list of rules.
    ///
    /// Keywords are trimmed and lowercased, blanks and repeats dropped, and rules
    /// for the same category merged in order of appearance. Fails if a rule targets
    /// `other` or if any other category ends up without keywords.
    pub fn from_rules(rules: Vec<KeywordRule>) -> Result<Self, CategorizerError> {
        let mut merged: Vec<KeywordRule> = Category::ALL
            .iter()
            .filter(|c| **c != Category::Other)
            .map(|c| KeywordRule {
                category: *c,
                keywords: Vec::new(),
            })
            .collect();

        for rule in rules {
            if rule.category == Category::Other {
                return Err(CategorizerError::InvalidDictionary(
                    "'other' is the fallback category and cannot have keywords".to_string(),
                ));
            }

            let slot = merged
                .iter_mut()
                .find(|r| r.category == rule.category)
                .ok_or_else(|| CategorizerError::UnknownCategory(rule.category.to_string()))?;

            for keyword in rule.keywords {
                let keyword = keyword.trim().to_lowercase();
                if !keyword.is_empty() && !slot.keywords.contains(&keyword) {
                    slot.keywords.push(keyword);
                }
            }
        }

        let missing: Vec<&str> = merged
            .iter()
            .filter(|r| r.keywords.is_empty())
            .map(|r| r.category.as_str())
            .collect();

        if !missing.is_empty() {
            return Err(CategorizerError::InvalidDictionary(format!(
                "no keywords for: {}",
                missing.join(", ")
            )));
        }

        tracing::debug!(
            keywords = merged.iter().map(|r| r.keywords.len()).sum::<usize>(),
            "keyword dictionary built"
        );

        Ok(KeywordDictionary { rules: merged })
    }

    /// Parse a JSON array of `{"category": ..., "keywords": [...]}` objects
    pub fn from_json(json: &str) -> Result<Self, CategorizerError> {
        let raw: Vec<RawRule> = serde_json::from_str(json)?;

        let rules = raw
            .into_iter()
            .map(|r| -> Result<KeywordRule, CategorizerError> {
                Ok(KeywordRule {
                    category: r.category.parse()?,
                    keywords: r.keywords,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_rules(rules)
    }

    /// Load a replacement dictionary from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read dictionary file: {:?}", path.as_ref()))?;

        let dictionary = Self::from_json(&content)
            .with_context(|| format!("Failed to parse dictionary file: {:?}", path.as_ref()))?;

        Ok(dictionary)
    }

    /// Keywords for a category, in declaration order. Empty for `other`.
    pub fn keywords_for(&self, category: Category) -> &[String] {
        self.rules
            .iter()
            .find(|r| r.category == category)
            .map(|r| r.keywords.as_slice())
            .unwrap_or(&[])
    }

    /// Rules in priority order
    pub fn rules(&self) -> impl Iterator<Item = &KeywordRule> {
        self.rules.iter()
    }

    /// Total number of keywords across all categories
    pub fn keyword_count(&self) -> usize {
        self.rules.iter().map(|r| r.keywords.len()).sum()
    }
}

impl Default for KeywordDictionary {
    fn default() -> Self {
        Self::builtin().clone()
    }
}

// ============================================================================
// TESTS
// ============================================================================
