// Expense Categorizer - Core Library
// Keyword-based expense classification used as the offline fallback for a
// remote categorization service. Exposes all modules for the CLI, API server, and tests.

pub mod taxonomy;
pub mod keywords;
pub mod classifier;
pub mod reply;
pub mod fallback;
pub mod config;
pub mod errors;

#[cfg(feature = "server")]
pub mod api;

use std::sync::Once;

// Re-export commonly used types
pub use taxonomy::{
    Category, CategoryMetadata,
    parse_category, label_of, color_of, icon_of,
};
pub use keywords::{KeywordDictionary, KeywordRule};
pub use classifier::{
    Categorizer, ClassificationResult, MatchKind, classify,
    CONFIDENCE_EXACT, CONFIDENCE_KEYWORD, CONFIDENCE_DEFAULT,
};
pub use reply::{interpret_reply, CONFIDENCE_REPLY_PARTIAL, CONFIDENCE_REPLY_WEAK};
pub use fallback::{FallbackClassifier, NoRemote, RemoteClassifier};
pub use config::Settings;
pub use errors::CategorizerError;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

static INIT_TRACING: Once = Once::new();

/// Install the global tracing subscriber with the default filter.
pub fn init() {
    init_with_filter(config::DEFAULT_LOG_FILTER);
}

/// Install the global tracing subscriber once. `RUST_LOG` directives are honored
/// alongside `filter`. Later calls are no-ops.
pub fn init_with_filter(filter: &str) {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{filter::Directive, fmt, EnvFilter};

        let mut env_filter = EnvFilter::from_default_env();
        for directive in filter.split(',').filter(|d| !d.trim().is_empty()) {
            match directive.trim().parse::<Directive>() {
                Ok(d) => env_filter = env_filter.add_directive(d),
                Err(e) => eprintln!("ignoring invalid log directive {:?}: {}", directive, e),
            }
        }

        // A test harness or host application may already own the global subscriber
        let _ = fmt().with_env_filter(env_filter).with_writer(std::io::stderr).try_init();
        tracing::debug!("expense categorizer tracing initialized");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init_with_filter("expense_categorizer=debug");
    }
}
