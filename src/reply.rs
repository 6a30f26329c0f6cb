// 💬 Model Reply Interpreter
// Normalizes a free-text answer from a remote language model ("Categoria: alimentação",
// "Transport.", "I think this is rent") into a closed Category + confidence tier.

use crate::classifier::{ClassificationResult, MatchKind, CONFIDENCE_EXACT};
use crate::taxonomy::Category;

/// Reply contains a category identifier, surrounded by other text
pub const CONFIDENCE_REPLY_PARTIAL: f64 = 0.85;

/// Reply only matched through a synonym, or not at all
pub const CONFIDENCE_REPLY_WEAK: f64 = 0.70;

/// Synonyms a model tends to answer with, checked in priority order.
/// Unlike the expense keyword table this one maps `other` too.
const REPLY_SYNONYMS: &[(Category, &[&str])] = &[
    (
        Category::Food,
        &["food", "alimentacao", "alimentação", "comida", "restaurante", "mercado", "supermercado", "padaria", "cafe", "lanche"],
    ),
    (
        Category::Transport,
        &["transport", "transporte", "uber", "taxi", "combustivel", "gasolina", "onibus", "metro", "gas"],
    ),
    (
        Category::Health,
        &["health", "saude", "saúde", "farmacia", "farmácia", "hospital", "medico", "médico", "clinica", "consulta", "exame"],
    ),
    (
        Category::Housing,
        &["housing", "moradia", "casa", "aluguel", "apartamento", "propriedade", "imovel", "rent"],
    ),
    (
        Category::Utilities,
        &["utilities", "luz", "agua", "água", "internet", "energia", "telefone", "bills"],
    ),
    (
        Category::Shopping,
        &["shopping", "compras", "loja", "roupa", "pessoal", "mercadorias", "clothes"],
    ),
    (
        Category::Entertainment,
        &["entertainment", "lazer", "leisure", "cinema", "teatro", "bar", "festa", "viagem", "hotel", "netflix", "streaming"],
    ),
    (
        Category::Education,
        &["education", "educacao", "educação", "escola", "universidade", "curso", "livro", "estudo", "course"],
    ),
    (
        Category::Savings,
        &["savings", "poupanca", "poupança", "investimento", "deposito", "invest", "emergency", "fund"],
    ),
    (
        Category::Other,
        &["other", "outros", "outro", "diversos", "miscelanea", "miscelânea", "misc"],
    ),
];

/// Interpret a remote model reply.
///
/// The category comes from the first synonym hit in priority order (falling back to
/// `other`). Confidence reflects how clean the reply was, not which synonym fired.
pub fn interpret_reply(reply: &str) -> ClassificationResult {
    let reply = reply.trim().to_lowercase();

    let category = REPLY_SYNONYMS
        .iter()
        .find(|(_, words)| words.iter().any(|w| reply.contains(w)))
        .map(|(category, _)| *category)
        .unwrap_or(Category::Other);

    let confidence = reply_confidence(&reply);

    tracing::debug!(%category, confidence, reply = %reply, "interpreted model reply");

    ClassificationResult::new(category, confidence, MatchKind::Remote)
}

fn reply_confidence(reply: &str) -> f64 {
    if Category::ALL.iter().any(|c| c.as_str() == reply) {
        CONFIDENCE_EXACT
    } else if Category::ALL.iter().any(|c| reply.contains(c.as_str())) {
        CONFIDENCE_REPLY_PARTIAL
    } else {
        CONFIDENCE_REPLY_WEAK
    }
}

// ============================================================================
// TESTS
// ============================================================================
