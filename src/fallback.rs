// 🛟 Fallback Classification
// Try a remote classifier first; on any failure use the local keyword categorizer.
// No retries: one remote attempt, then the local answer.

use crate::classifier::{Categorizer, ClassificationResult, MatchKind};
use crate::errors::CategorizerError;

// ============================================================================
// REMOTE CLASSIFIER SEAM
// ============================================================================

/// A classifier living outside the process (HTTP service, local LLM, ...).
///
/// Implementations own their transport, timeouts and cancellation.
pub trait RemoteClassifier: Send + Sync {
    fn categorize(&self, text: &str) -> Result<ClassificationResult, CategorizerError>;

    /// Short name used in logs
    fn name(&self) -> &str {
        "remote"
    }
}

/// Stand-in for "no remote service configured". Always unavailable.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRemote;

impl RemoteClassifier for NoRemote {
    fn categorize(&self, _text: &str) -> Result<ClassificationResult, CategorizerError> {
        Err(CategorizerError::RemoteUnavailable(
            "no remote classifier configured".to_string(),
        ))
    }

    fn name(&self) -> &str {
        "none"
    }
}

// ============================================================================
// FALLBACK CLASSIFIER
// ============================================================================

pub struct FallbackClassifier<'a, R: RemoteClassifier> {
    remote: R,
    local: Categorizer<'a>,
}

impl FallbackClassifier<'static, NoRemote> {
    /// Local-only classifier over the built-in dictionary
    pub fn local_only() -> Self {
        FallbackClassifier::new(NoRemote, Categorizer::builtin())
    }
}

impl<'a, R: RemoteClassifier> FallbackClassifier<'a, R> {
    pub fn new(remote: R, local: Categorizer<'a>) -> Self {
        FallbackClassifier { remote, local }
    }

    /// Never fails: remote errors are logged and answered locally.
    pub fn classify(&self, text: &str) -> ClassificationResult {
        match self.remote.categorize(text) {
            // Re-tag and re-clamp; the category is already a closed enum
            Ok(remote) => {
                ClassificationResult::new(remote.category, remote.confidence, MatchKind::Remote)
            }
            Err(e) => {
                tracing::warn!(
                    remote = self.remote.name(),
                    error = %e,
                    "remote classification failed, using keyword fallback"
                );
                self.local.classify(text)
            }
        }
    }

    pub fn remote(&self) -> &R {
        &self.remote
    }
}

// ============================================================================
// TESTS
// ============================================================================
