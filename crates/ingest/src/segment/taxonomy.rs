//! Keyword-driven thematic classification.
//!
//! Categories are tested in a fixed priority order and the first one with
//! any keyword hit wins. The order is part of the contract: reordering
//! [`TAXONOMY`] changes classification results.

use folio_core::{CategorizedUnit, Category, Unit};

/// Categories in priority order with their trigger keywords.
///
/// `Fundamental` is the fallback and carries no keywords.
pub const TAXONOMY: &[(Category, &[&str])] = &[
    (
        Category::Logic,
        &[
            "logic", "inference", "deduction", "induction", "syllogism", "validity", "sound",
            "axiom", "proof", "algorithm",
        ],
    ),
    (
        Category::Language,
        &[
            "meaning", "semantic", "syntax", "language", "ambiguity", "vague", "indexical",
            "proposition", "sentence", "word", "expression",
        ],
    ),
    (
        Category::Knowledge,
        &[
            "knowledge", "belief", "truth", "justification", "evidence", "epistemic",
            "certainty", "doubt", "skeptic", "a priori", "posteriori",
        ],
    ),
    (
        Category::Mathematics,
        &[
            "set", "number", "mathematics", "formal", "system", "function", "relation",
            "structure", "model", "axiom",
        ],
    ),
    (
        Category::Mind,
        &[
            "mind", "consciousness", "mental", "thought", "concept", "idea", "perception",
            "experience", "cognitive", "qualia",
        ],
    ),
    (
        Category::Metaphysics,
        &[
            "reality", "existence", "being", "substance", "property", "cause", "time", "space",
            "object", "metaphysic", "causal",
        ],
    ),
];

/// Assign exactly one category to `text` (substring match, first hit wins).
pub fn classify(text: &str) -> Category {
    let lower = text.to_lowercase();
    TAXONOMY
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(category, _)| *category)
        .unwrap_or(Category::Fundamental)
}

/// Classify every unit, preserving document order.
pub fn categorize(units: Vec<Unit>) -> Vec<CategorizedUnit> {
    let categorized: Vec<CategorizedUnit> = units
        .into_iter()
        .map(|unit| {
            let category = classify(&unit.text);
            CategorizedUnit { unit, category }
        })
        .collect();

    if tracing::enabled!(tracing::Level::DEBUG) {
        for category in Category::DISPLAY_ORDER {
            let count = categorized.iter().filter(|c| c.category == category).count();
            tracing::debug!(%category, count, "categorized units");
        }
    }
    categorized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn earlier_category_wins_ties() {
        assert_eq!(classify("the axiom concerns consciousness"), Category::Logic);
    }

    #[test]
    fn first_match_not_best_score() {
        // One language keyword beats three mind keywords.
        let text = "A thought, a concept, an idea: each has meaning.";
        assert_eq!(classify(text), Category::Language);
    }

    #[test]
    fn matching_is_case_insensitive_substring() {
        assert_eq!(classify("SYLLOGISMS"), Category::Logic);
        assert_eq!(classify("Epistemically speaking"), Category::Knowledge);
        assert_eq!(classify("A posteriori claims"), Category::Knowledge);
    }

    #[test]
    fn each_category_is_reachable() {
        assert_eq!(classify("the rules of syntax"), Category::Language);
        assert_eq!(classify("a countable collection of numbers"), Category::Mathematics);
        assert_eq!(classify("the mental life"), Category::Mind);
        assert_eq!(classify("the nature of reality"), Category::Metaphysics);
    }

    #[test]
    fn no_keyword_falls_back_to_fundamental() {
        assert_eq!(classify("Zeno: an Eleatic."), Category::Fundamental);
        assert_eq!(classify(""), Category::Fundamental);
    }

    #[test]
    fn classification_is_repeatable() {
        let text = "Ambiguity vs. vagueness: two different phenomena.";
        let first = classify(text);
        for _ in 0..10 {
            assert_eq!(classify(text), first);
        }
    }

    #[test]
    fn taxonomy_order_is_fixed() {
        let order: Vec<Category> = TAXONOMY.iter().map(|(c, _)| *c).collect();
        assert_eq!(
            order,
            vec![
                Category::Logic,
                Category::Language,
                Category::Knowledge,
                Category::Mathematics,
                Category::Mind,
                Category::Metaphysics,
            ]
        );
    }
}
