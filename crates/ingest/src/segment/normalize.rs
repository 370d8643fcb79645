//! Line stream normalization: raw page text to an ordered, gap-free `Line` sequence.

use folio_core::Line;
use serde::{Deserialize, Serialize};

// ── Rules ───────────────────────────────────────────────────────────────────

/// Filters applied while building the line stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizeRules {
    /// Drop all-digit lines of at most this many characters (page numbers).
    pub max_page_number_digits: Option<usize>,
    /// Drop lines shorter than this after trimming.
    pub min_line_len: usize,
    /// Running headers/titles dropped on a case-insensitive exact match.
    pub denylist: Vec<String>,
    /// Lines exempt from the page-number rule (structural numerals).
    pub preserve: Vec<String>,
    /// Re-join paragraphs a word processor broke mid-sentence.
    pub join_continuations: bool,
}

impl Default for NormalizeRules {
    fn default() -> Self {
        Self {
            max_page_number_digits: Some(3),
            min_line_len: 0,
            denylist: Vec::new(),
            preserve: Vec::new(),
            join_continuations: false,
        }
    }
}

impl NormalizeRules {
    fn is_page_number(&self, line: &str) -> bool {
        let Some(max) = self.max_page_number_digits else {
            return false;
        };
        line.len() <= max
            && line.bytes().all(|b| b.is_ascii_digit())
            && !self.preserve.iter().any(|p| p == line)
    }

    fn is_denied(&self, line: &str) -> bool {
        self.denylist
            .iter()
            .any(|d| d.trim().eq_ignore_ascii_case(line))
    }

    fn keeps(&self, line: &str) -> bool {
        !line.is_empty()
            && line.chars().count() >= self.min_line_len
            && !self.is_page_number(line)
            && !self.is_denied(line)
    }
}

// ── Entry points ────────────────────────────────────────────────────────────

/// Split page texts (in reading order) into physical lines.
pub fn raw_lines<S: AsRef<str>>(pages: &[S]) -> Vec<String> {
    pages
        .iter()
        .flat_map(|p| p.as_ref().lines())
        .map(str::to_string)
        .collect()
}

/// Apply `rules` to raw lines, returning a re-indexed line stream.
///
/// An empty result is valid; callers handle the empty document themselves.
pub fn normalize<S: AsRef<str>>(raw: &[S], rules: &NormalizeRules) -> Vec<Line> {
    let mut kept: Vec<String> = Vec::with_capacity(raw.len());

    for line in raw {
        let line = line.as_ref().trim();
        if !rules.keeps(line) {
            continue;
        }
        if rules.join_continuations {
            if let Some(prev) = kept.last_mut() {
                if continues(prev, line) {
                    prev.push(' ');
                    prev.push_str(line);
                    continue;
                }
            }
        }
        kept.push(line.to_string());
    }

    tracing::debug!(raw = raw.len(), kept = kept.len(), "normalized line stream");

    kept.into_iter()
        .enumerate()
        .map(|(index, text)| Line { index, text })
        .collect()
}

/// A paragraph continues `prev` when it opens lower-case and `prev` is unfinished.
fn continues(prev: &str, line: &str) -> bool {
    let starts_upper = line.chars().next().is_some_and(char::is_uppercase);
    !starts_upper && !prev.ends_with('.')
}
