//! Canonical form for ingredient and product names.
//!
//! CHANGELOG:
//! - 10/19/2026 - Whitespace class matches the store's (U+FEFF kept, U+0085 stripped)
//! - 10/09/2026 - Initial implementation

use regex::Regex;
use std::sync::LazyLock;

/// Descriptive modifiers dropped before comparing names.
pub const MODIFIER_STOPLIST: &[&str] = &[
    "organic", "fresh", "frozen", "dried", "raw", "cooked", "canned", "tinned", "ground",
    "minced", "sliced", "diced", "whole", "peeled", "powdered", "paste", "sauce", "extract",
    "oil", "juice", "zest", "peel", "rind",
];

// ASCII word characters only, like the store's original matcher. Whitespace
// follows the store's JavaScript `\s`: U+FEFF counts, U+0085 does not.
static SPECIAL_CHARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^0-9A-Za-z_[[\s\x{FEFF}]--\x{85}]]").expect("valid regex")
});

static MODIFIERS: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(r"\b(?:{})\b", MODIFIER_STOPLIST.join("|"));
    Regex::new(&pattern).expect("valid regex")
});

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[[\s\x{FEFF}]--\x{85}]+").expect("valid regex"));

/// Normalize a free-text name for comparison.
///
/// Lowercases, strips everything that is not a word character or
/// whitespace, removes modifiers from [`MODIFIER_STOPLIST`] as whole words,
/// then collapses whitespace. Blank input yields `""`, which the scorer
/// treats as unmatchable.
pub fn normalize(name: &str) -> String {
    let lowered = name.to_lowercase();
    let stripped = SPECIAL_CHARS.replace_all(&lowered, "");
    let without_modifiers = MODIFIERS.replace_all(&stripped, "");
    WHITESPACE
        .replace_all(&without_modifiers, " ")
        .trim()
        .to_string()
}
