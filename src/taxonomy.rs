// 🏷️ Category Taxonomy - The closed set of expense categories
// Canonical identifiers + display metadata (label, color, icon)
//
// Any string that crosses a boundary (API payload, CLI argument, model reply,
// dictionary file) goes through `parse_category` and can never escape as an
// unknown category.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CategorizerError;

// ============================================================================
// CATEGORY
// ============================================================================

/// Expense category. Declaration order is the classification priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Transport,
    Health,
    Housing,
    Utilities,
    Shopping,
    Entertainment,
    Education,
    Savings,
    /// Universal fallback - every unmatched description lands here
    Other,
}

impl Category {
    /// Priority order used for tie-breaking: the first category that matches wins.
    pub const ALL: [Category; 10] = [
        Category::Food,
        Category::Transport,
        Category::Health,
        Category::Housing,
        Category::Utilities,
        Category::Shopping,
        Category::Entertainment,
        Category::Education,
        Category::Savings,
        Category::Other,
    ];

    /// Lowercase wire identifier (e.g. "food")
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "food",
            Category::Transport => "transport",
            Category::Health => "health",
            Category::Housing => "housing",
            Category::Utilities => "utilities",
            Category::Shopping => "shopping",
            Category::Entertainment => "entertainment",
            Category::Education => "education",
            Category::Savings => "savings",
            Category::Other => "other",
        }
    }

    /// Display metadata for this category
    pub fn metadata(&self) -> &'static CategoryMetadata {
        match self {
            Category::Food => &FOOD,
            Category::Transport => &TRANSPORT,
            Category::Health => &HEALTH,
            Category::Housing => &HOUSING,
            Category::Utilities => &UTILITIES,
            Category::Shopping => &SHOPPING,
            Category::Entertainment => &ENTERTAINMENT,
            Category::Education => &EDUCATION,
            Category::Savings => &SAVINGS,
            Category::Other => &OTHER,
        }
    }

    pub fn label(&self) -> &'static str {
        self.metadata().label
    }

    pub fn color(&self) -> &'static str {
        self.metadata().color
    }

    pub fn icon(&self) -> &'static str {
        self.metadata().icon
    }

    /// Position in the priority order (0 = highest priority)
    pub fn priority(&self) -> usize {
        Category::ALL
            .iter()
            .position(|c| c == self)
            .unwrap_or(Category::ALL.len() - 1)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strict parse: unknown identifiers are an error.
///
/// Use `parse_category` instead when the input should be normalized rather than rejected.
impl FromStr for Category {
    type Err = CategorizerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == needle)
            .ok_or_else(|| CategorizerError::UnknownCategory(s.to_string()))
    }
}

// ============================================================================
// DISPLAY METADATA
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryMetadata {
    /// Human-readable label (e.g. "Food & Groceries")
    pub label: &'static str,

    /// Hex color used by charts and badges (e.g. "#10b981")
    pub color: &'static str,

    /// Emoji icon for list views
    pub icon: &'static str,
}

static FOOD: CategoryMetadata = CategoryMetadata {
    label: "Food & Groceries",
    color: "#10b981",
    icon: "🍽️",
};

static TRANSPORT: CategoryMetadata = CategoryMetadata {
    label: "Transportation",
    color: "#3b82f6",
    icon: "🚗",
};

static HEALTH: CategoryMetadata = CategoryMetadata {
    label: "Health & Medical",
    color: "#ef4444",
    icon: "💊",
};

static HOUSING: CategoryMetadata = CategoryMetadata {
    label: "Housing & Rent",
    color: "#8b5cf6",
    icon: "🏠",
};

static UTILITIES: CategoryMetadata = CategoryMetadata {
    label: "Utilities & Bills",
    color: "#84cc16",
    icon: "⚡",
};

static SHOPPING: CategoryMetadata = CategoryMetadata {
    label: "Shopping & Personal",
    color: "#ec4899",
    icon: "🛍️",
};

static ENTERTAINMENT: CategoryMetadata = CategoryMetadata {
    label: "Entertainment & Fun",
    color: "#f97316",
    icon: "🎬",
};

static EDUCATION: CategoryMetadata = CategoryMetadata {
    label: "Education & Learning",
    color: "#06b6d4",
    icon: "📚",
};

static SAVINGS: CategoryMetadata = CategoryMetadata {
    label: "Savings & Investment",
    color: "#fbbf24",
    icon: "💰",
};

static OTHER: CategoryMetadata = CategoryMetadata {
    label: "Other Expenses",
    color: "#6b7280",
    icon: "📦",
};

// ============================================================================
// BOUNDARY NORMALIZATION
// ============================================================================

/// Normalize an arbitrary string into a category. Unknown input becomes `Other`.
pub fn parse_category(s: &str) -> Category {
    s.parse().unwrap_or(Category::Other)
}

/// Display label for a category string; unknown strings get the `other` label
pub fn label_of(category: &str) -> &'static str {
    parse_category(category).label()
}

/// Display color for a category string; unknown strings get the `other` color
pub fn color_of(category: &str) -> &'static str {
    parse_category(category).color()
}

pub fn icon_of(category: &str) -> &'static str {
    parse_category(category).icon()
}

// ============================================================================
// TESTS
// ============================================================================
