use std::fmt;
use std::ops::Range;

use serde::{Deserialize, Serialize};

/// One normalized physical line of a source document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    /// 0-based position in the normalized line stream.
    pub index: usize,
    pub text: String,
}

impl Line {
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
        }
    }
}

/// Layout family of a document body; selects the boundary strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentKind {
    /// Plain prose whose paragraph breaks were lost in extraction.
    FlowingProse,
    /// Numbered propositions (`1`, `2.01`, `4.0031 ...`).
    NumberedProposition,
    /// Term/definition entries.
    DictionaryEntry,
}

impl DocumentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::FlowingProse => "flowing-prose",
            DocumentKind::NumberedProposition => "numbered-proposition",
            DocumentKind::DictionaryEntry => "dictionary-entry",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structural marker attached to a unit by its boundary strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum UnitTag {
    /// Opens one of the top-level sections `1`..`7`.
    TopLevelSection(u8),
    /// A numbered proposition below the top level, e.g. `2.01`.
    Proposition(String),
    /// A dictionary entry with its headword.
    Entry(String),
    /// No structural marker was found anywhere; the whole input is one unit.
    Undivided,
}

/// A contiguous run of lines merged into one text block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    /// Rank among all units of the document, starting at 0.
    pub ordinal: usize,
    pub text: String,
    pub tag: Option<UnitTag>,
    /// Half-open span of normalized line indices this unit was built from.
    pub lines: Range<usize>,
}

impl Unit {
    pub fn is_top_level(&self) -> bool {
        matches!(self.tag, Some(UnitTag::TopLevelSection(_)))
    }
}

/// Fixed thematic label for dictionary-style corpora.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Fundamental,
    Language,
    Logic,
    Knowledge,
    Mathematics,
    Mind,
    Metaphysics,
}

impl Category {
    /// Order in which categorized records are emitted.
    pub const DISPLAY_ORDER: [Category; 7] = [
        Category::Fundamental,
        Category::Language,
        Category::Logic,
        Category::Knowledge,
        Category::Mathematics,
        Category::Mind,
        Category::Metaphysics,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Category::Fundamental => "fundamental",
            Category::Language => "language",
            Category::Logic => "logic",
            Category::Knowledge => "knowledge",
            Category::Mathematics => "mathematics",
            Category::Mind => "mind",
            Category::Metaphysics => "metaphysics",
        }
    }

    /// Stable identifier of the record that collects this category.
    pub fn record_id(&self) -> &'static str {
        match self {
            Category::Fundamental => "fundamental-concepts",
            Category::Language => "language-meaning",
            Category::Logic => "logic-inference",
            Category::Knowledge => "knowledge-belief",
            Category::Mathematics => "mathematics-formal",
            Category::Mind => "mind-consciousness",
            Category::Metaphysics => "metaphysics-reality",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Category::Fundamental => "Fundamental Concepts",
            Category::Language => "Language and Meaning",
            Category::Logic => "Logic and Inference",
            Category::Knowledge => "Knowledge and Belief",
            Category::Mathematics => "Mathematics and Formal Systems",
            Category::Mind => "Mind and Consciousness",
            Category::Metaphysics => "Metaphysics and Reality",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorizedUnit {
    pub unit: Unit,
    pub category: Category,
}

/// Externally visible section handed to the content store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRecord {
    pub id: String,
    pub title: String,
    pub content: String,
}

/// A whole document as the content store receives it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentModule {
    /// Name of the exported binding in the destination module.
    pub export_name: String,
    pub title: String,
    pub author: String,
    pub sections: Vec<OutputRecord>,
}

impl ContentModule {
    /// Total character count across all sections.
    pub fn total_chars(&self) -> usize {
        self.sections.iter().map(|s| s.content.chars().count()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_order_covers_every_category_once() {
        let mut keys: Vec<&str> = Category::DISPLAY_ORDER.iter().map(|c| c.key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), 7);
    }

    #[test]
    fn kind_serializes_kebab_case() {
        let json = serde_json::to_string(&DocumentKind::NumberedProposition).unwrap();
        assert_eq!(json, "\"numbered-proposition\"");
        let kind: DocumentKind = serde_json::from_str("\"dictionary-entry\"").unwrap();
        assert_eq!(kind, DocumentKind::DictionaryEntry);
    }

    #[test]
    fn module_counts_section_chars() {
        let module = ContentModule {
            export_name: "content".into(),
            title: "T".into(),
            author: "A".into(),
            sections: vec![
                OutputRecord { id: "a".into(), title: "A".into(), content: "one".into() },
                OutputRecord { id: "b".into(), title: "B".into(), content: "two".into() },
            ],
        };
        assert_eq!(module.total_chars(), 6);
    }

    #[test]
    fn top_level_helpers() {
        let unit = Unit {
            ordinal: 0,
            text: "3\nA logical picture".into(),
            tag: Some(UnitTag::TopLevelSection(3)),
            lines: 0..2,
        };
        assert!(unit.is_top_level());
        let proposition = Unit {
            tag: Some(UnitTag::Proposition("3.1".into())),
            ..unit
        };
        assert!(!proposition.is_top_level());
    }
}
