//! Boundary strategies: decide whether a line opens a new unit.
//!
//! One strategy per [`DocumentKind`], selected with [`classifier_for`]. All
//! strategies are pure functions of the current line, the lines already in
//! the open unit, and a bounded lookahead window.

use std::sync::LazyLock;

use folio_core::{DocumentKind, Line, UnitTag};
use regex::Regex;

/// Maximum number of following lines a strategy may inspect.
pub const LOOKAHEAD: usize = 4;

/// Everything a strategy may look at when judging one line.
#[derive(Debug, Clone, Copy)]
pub struct BoundaryContext<'a> {
    /// The (trimmed) line being judged.
    pub line: &'a str,
    /// Lines accumulated in the currently open unit, oldest first.
    pub open: &'a [String],
    /// Following lines, at most [`LOOKAHEAD`] of them.
    pub ahead: &'a [Line],
}

impl<'a> BoundaryContext<'a> {
    pub fn new(line: &'a str, open: &'a [String], ahead: &'a [Line]) -> Self {
        Self { line, open, ahead }
    }

    fn next_line(&self) -> Option<&'a str> {
        self.ahead.first().map(|l| l.text.as_str())
    }
}

pub trait BoundaryClassifier: Send + Sync {
    fn kind(&self) -> DocumentKind;

    /// Whether `ctx.line` starts a new unit.
    fn is_boundary(&self, ctx: &BoundaryContext<'_>) -> bool;

    /// Separator used when merging a unit's lines.
    fn joiner(&self) -> &'static str {
        " "
    }

    /// Structural tag for a unit opening with `first_line`.
    fn tag(&self, _first_line: &str) -> Option<UnitTag> {
        None
    }

    /// Whether a document without a single boundary is a degraded result.
    fn requires_markers(&self) -> bool {
        false
    }
}

/// Select the strategy for a document kind.
pub fn classifier_for(kind: DocumentKind) -> Box<dyn BoundaryClassifier> {
    match kind {
        DocumentKind::FlowingProse => Box::new(FlowingProse),
        DocumentKind::NumberedProposition => Box::new(NumberedProposition),
        DocumentKind::DictionaryEntry => Box::new(DictionaryEntry),
    }
}

fn starts_uppercase(s: &str) -> bool {
    s.chars().next().is_some_and(char::is_uppercase)
}

/// First word, lower-cased, with surrounding punctuation trimmed.
fn first_word(s: &str) -> Option<String> {
    s.split_whitespace().next().map(normalize_word)
}

fn normalize_word(word: &str) -> String {
    word.trim_matches(|c: char| !c.is_alphanumeric()).to_lowercase()
}

// ── Flowing prose ───────────────────────────────────────────────────────────

/// Words that continue the previous sentence's thought rather than open a paragraph.
const CONTINUATION_WORDS: &[&str] = &[
    "and", "or", "but", "however", "thus", "this", "that", "it", "he", "she",
];

/// Paragraph breaks re-inferred from sentence ends and capitalization.
///
/// Biased toward under-splitting: abbreviations ending in a period still
/// produce false breaks, which is accepted.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlowingProse;

impl BoundaryClassifier for FlowingProse {
    fn kind(&self) -> DocumentKind {
        DocumentKind::FlowingProse
    }

    fn is_boundary(&self, ctx: &BoundaryContext<'_>) -> bool {
        let Some(prev) = ctx.open.last() else {
            return false;
        };
        if !starts_uppercase(ctx.line) || !prev.ends_with(['.', '!', '?']) {
            return false;
        }
        match first_word(ctx.line) {
            Some(word) => !CONTINUATION_WORDS.contains(&word.as_str()),
            None => false,
        }
    }
}

// ── Numbered propositions ───────────────────────────────────────────────────

static DECIMAL_ONLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\d+$").expect("valid regex"));
static NUMBER_THEN_TEXT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(\.\d+)?\s+[A-Z]").expect("valid regex"));
static BARE_NUMERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(\.\d+)*\.?$").expect("valid regex"));
static LEADING_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+(?:\.\d+)*)").expect("valid regex"));

const TOP_LEVEL: [&str; 7] = ["1", "2", "3", "4", "5", "6", "7"];

/// Decimal-numbered propositions (`1`, `2.01`, `4.0031 The whole...`).
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberedProposition;

impl NumberedProposition {
    /// Top-level section number when `line` opens one of `1`..`7`.
    pub fn top_level_number(line: &str) -> Option<u8> {
        let line = line.trim();
        TOP_LEVEL.iter().zip(1u8..).find_map(|(marker, n)| {
            let rest = line.strip_prefix(marker)?;
            (rest.is_empty() || rest.starts_with(' ')).then_some(n)
        })
    }

    fn matches_marker(line: &str) -> bool {
        TOP_LEVEL.contains(&line) || DECIMAL_ONLY.is_match(line) || NUMBER_THEN_TEXT.is_match(line)
    }
}

impl BoundaryClassifier for NumberedProposition {
    fn kind(&self) -> DocumentKind {
        DocumentKind::NumberedProposition
    }

    fn is_boundary(&self, ctx: &BoundaryContext<'_>) -> bool {
        if Self::matches_marker(ctx.line) {
            return true;
        }
        // Numeral split from its text: the numeral line is the boundary.
        BARE_NUMERAL.is_match(ctx.line) && ctx.next_line().is_some_and(starts_uppercase)
    }

    fn joiner(&self) -> &'static str {
        "\n"
    }

    fn tag(&self, first_line: &str) -> Option<UnitTag> {
        if let Some(n) = Self::top_level_number(first_line) {
            return Some(UnitTag::TopLevelSection(n));
        }
        LEADING_NUMBER
            .captures(first_line.trim())
            .map(|c| UnitTag::Proposition(c[1].to_string()))
    }

    fn requires_markers(&self) -> bool {
        true
    }
}

// ── Dictionary entries ──────────────────────────────────────────────────────

/// Words signalling that a capitalized line is a definition.
const INDICATOR_WORDS: &[&str] = &["is", "are", "means", "refers", "definition", "the", "a"];

/// Headwords span at most this many words before the indicator.
const MAX_HEADWORD_WORDS: usize = 3;

/// Best-effort term/definition segmentation.
///
/// There are no reliable entry markers in extracted dictionary text; false
/// positives and negatives are expected.
#[derive(Debug, Clone, Copy, Default)]
pub struct DictionaryEntry;

impl DictionaryEntry {
    // Only words 2..=4 count: an indicator deep inside a definition body
    // ("... is a ...") must not turn every capitalized sentence into a new
    // entry. Headwords longer than the window are missed.
    fn has_inline_indicator(line: &str) -> bool {
        line.split_whitespace()
            .skip(1)
            .take(MAX_HEADWORD_WORDS)
            .any(|w| INDICATOR_WORDS.contains(&normalize_word(w).as_str()))
    }

    fn next_is_definition(ctx: &BoundaryContext<'_>) -> bool {
        ctx.next_line()
            .and_then(first_word)
            .is_some_and(|w| INDICATOR_WORDS.contains(&w.as_str()))
    }
}

impl BoundaryClassifier for DictionaryEntry {
    fn kind(&self) -> DocumentKind {
        DocumentKind::DictionaryEntry
    }

    fn is_boundary(&self, ctx: &BoundaryContext<'_>) -> bool {
        starts_uppercase(ctx.line)
            && (ctx.line.contains(':')
                || Self::has_inline_indicator(ctx.line)
                || Self::next_is_definition(ctx))
    }

    fn tag(&self, first_line: &str) -> Option<UnitTag> {
        let (head, _) = first_line.split_once(':')?;
        let head = head.trim();
        (!head.is_empty()).then(|| UnitTag::Entry(head.to_string()))
    }

    fn requires_markers(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ahead(lines: &[&str]) -> Vec<Line> {
        lines
            .iter()
            .enumerate()
            .map(|(i, t)| Line::new(i + 1, *t))
            .collect()
    }

    fn open(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|s| s.to_string()).collect()
    }

    // ── Flowing prose ───────────────────────────────────────────────

    #[test]
    fn prose_needs_an_open_paragraph() {
        let ctx = BoundaryContext::new("The next idea follows.", &[], &[]);
        assert!(!FlowingProse.is_boundary(&ctx));
    }

    #[test]
    fn prose_breaks_after_terminal_punctuation() {
        for prev in ["a theory.", "a theory!", "a theory?"] {
            let open = open(&[prev]);
            let ctx = BoundaryContext::new("The next idea follows.", &open, &[]);
            assert!(FlowingProse.is_boundary(&ctx), "after {prev:?}");
        }
    }

    #[test]
    fn prose_does_not_break_mid_sentence() {
        let open = open(&["Atomism is"]);
        let ctx = BoundaryContext::new("A theory.", &open, &[]);
        assert!(!FlowingProse.is_boundary(&ctx));
    }

    #[test]
    fn prose_requires_uppercase_start() {
        let open = open(&["a theory."]);
        let ctx = BoundaryContext::new("the next idea follows.", &open, &[]);
        assert!(!FlowingProse.is_boundary(&ctx));
    }

    #[test]
    fn prose_continuation_words_never_break() {
        let open = open(&["a theory."]);
        for line in ["However, this fails.", "Thus we see.", "It follows.", "And so on.", "She said."] {
            let ctx = BoundaryContext::new(line, &open, &[]);
            assert!(!FlowingProse.is_boundary(&ctx), "{line:?} should continue");
        }
    }

    #[test]
    fn prose_continuation_match_is_whole_word() {
        let open = open(&["a theory."]);
        let ctx = BoundaryContext::new("Italy was neutral.", &open, &[]);
        assert!(FlowingProse.is_boundary(&ctx));
    }

    // ── Numbered propositions ───────────────────────────────────────

    #[test]
    fn numbered_top_level_digits() {
        for n in TOP_LEVEL {
            let ctx = BoundaryContext::new(n, &[], &[]);
            assert!(NumberedProposition.is_boundary(&ctx));
        }
    }

    #[test]
    fn numbered_decimal_and_inline_forms() {
        for line in ["2.01", "4.0031", "2.01 An atomic fact", "3 A logical picture"] {
            let ctx = BoundaryContext::new(line, &[], &[]);
            assert!(NumberedProposition.is_boundary(&ctx), "{line:?}");
        }
    }

    #[test]
    fn numbered_plain_text_is_not_a_boundary() {
        for line in ["The world is the totality of facts.", "2.01 lower case", "2.01a"] {
            let ctx = BoundaryContext::new(line, &[], &[]);
            assert!(!NumberedProposition.is_boundary(&ctx), "{line:?}");
        }
    }

    #[test]
    fn numbered_lookahead_for_split_numeral() {
        let next = ahead(&["What is the case, the fact, is the existence of atomic facts."]);
        let ctx = BoundaryContext::new("2.0.1", &[], &next);
        assert!(NumberedProposition.is_boundary(&ctx));

        let next = ahead(&["continued in lower case"]);
        let ctx = BoundaryContext::new("2.0.1", &[], &next);
        assert!(!NumberedProposition.is_boundary(&ctx));

        let ctx = BoundaryContext::new("2.0.1", &[], &[]);
        assert!(!NumberedProposition.is_boundary(&ctx));
    }

    #[test]
    fn numbered_tags() {
        assert_eq!(NumberedProposition.tag("1"), Some(UnitTag::TopLevelSection(1)));
        assert_eq!(
            NumberedProposition.tag("7 Whereof one cannot speak"),
            Some(UnitTag::TopLevelSection(7))
        );
        assert_eq!(
            NumberedProposition.tag("2.01"),
            Some(UnitTag::Proposition("2.01".into()))
        );
        assert_eq!(
            NumberedProposition.tag("10 Something"),
            Some(UnitTag::Proposition("10".into()))
        );
        assert_eq!(NumberedProposition.tag("Preface"), None);
    }

    // ── Dictionary entries ──────────────────────────────────────────

    #[test]
    fn dictionary_colon_entries() {
        let ctx = BoundaryContext::new("Axiom: A statement assumed to be true.", &[], &[]);
        assert!(DictionaryEntry.is_boundary(&ctx));
        assert_eq!(DictionaryEntry.tag(ctx.line), Some(UnitTag::Entry("Axiom".into())));
    }

    #[test]
    fn dictionary_inline_indicator() {
        let ctx = BoundaryContext::new("Analytic truth is a truth of meaning.", &[], &[]);
        assert!(DictionaryEntry.is_boundary(&ctx));
        assert_eq!(DictionaryEntry.tag(ctx.line), None);
    }

    #[test]
    fn dictionary_indicator_on_next_line() {
        let next = ahead(&["is the principle that sets with the same members are identical."]);
        let ctx = BoundaryContext::new("Extensionality", &[], &next);
        assert!(DictionaryEntry.is_boundary(&ctx));
    }

    #[test]
    fn dictionary_rejects_lowercase_and_plain_lines() {
        let ctx = BoundaryContext::new("continues the previous definition: yes", &[], &[]);
        assert!(!DictionaryEntry.is_boundary(&ctx));

        let next = ahead(&["multiplied by two"]);
        let ctx = BoundaryContext::new("Numbers grow quickly when", &[], &next);
        assert!(!DictionaryEntry.is_boundary(&ctx));
    }

    #[test]
    fn classifier_for_selects_matching_strategy() {
        for kind in [
            DocumentKind::FlowingProse,
            DocumentKind::NumberedProposition,
            DocumentKind::DictionaryEntry,
        ] {
            assert_eq!(classifier_for(kind).kind(), kind);
        }
        assert_eq!(classifier_for(DocumentKind::NumberedProposition).joiner(), "\n");
        assert_eq!(classifier_for(DocumentKind::FlowingProse).joiner(), " ");
    }

    #[test]
    fn inline_indicator_window_is_words_two_to_four() {
        assert!(DictionaryEntry::has_inline_indicator("Axiom is a starting point."));
        assert!(DictionaryEntry::has_inline_indicator("Modus ponens means affirming."));
        // "was" is not an indicator and "a" sits at word 5.
        assert!(!DictionaryEntry::has_inline_indicator("Zeno of Elea was a Greek philosopher."));
        // The headword itself is never checked.
        assert!(!DictionaryEntry::has_inline_indicator("The"));
    }
}
