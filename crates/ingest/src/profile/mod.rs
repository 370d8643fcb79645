//! Document profiles: per-document configuration passed at call time.
//!
//! A profile names the document, picks the boundary strategy for its body,
//! optionally splits off a prose introduction, and carries the line filters
//! and section titles for each part. Built-in profiles cover the supported
//! layouts; more can be loaded from YAML with [`ProfileRegistry`].

mod error;
mod registry;

use std::path::Path;

use folio_core::DocumentKind;
use serde::{Deserialize, Serialize};

use crate::render::ContentFormat;
use crate::segment::{BodyStart, NormalizeRules};

pub use error::{LoadResult, LoadStatus, ProfileError, Result};
pub use registry::ProfileRegistry;

/// Prose introduction preceding the body (e.g. an editor's preface).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntroPart {
    pub title: String,
    /// Content starts at the first line containing this text (title pages
    /// before it are dropped).
    #[serde(default)]
    pub start_marker: Option<String>,
    #[serde(default)]
    pub normalize: NormalizeRules,
}

/// The main body of the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BodyPart {
    pub kind: DocumentKind,
    /// Title for records that are not named by a section or category.
    pub title: String,
    /// Group units into thematic categories (one record per category).
    #[serde(default)]
    pub categorize: bool,
    /// Titles of top-level sections `1`..`n` for numbered bodies.
    #[serde(default)]
    pub section_titles: Vec<String>,
    #[serde(default)]
    pub normalize: NormalizeRules,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentProfile {
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub author: String,
    /// Binding exported by the generated content module.
    pub export_name: String,
    #[serde(default)]
    pub format: ContentFormat,
    #[serde(default)]
    pub intro: Option<IntroPart>,
    /// Where the body begins when an intro precedes it.
    #[serde(default)]
    pub body_start: Option<BodyStart>,
    pub body: BodyPart,
}

const TOP_LEVEL_MARKERS: [&str; 7] = ["1", "2", "3", "4", "5", "6", "7"];

impl DocumentProfile {
    /// Names of the profiles compiled into the binary.
    pub const BUILTIN: [&'static str; 3] = ["tractatus", "dictionary", "prose"];

    /// Look up a built-in profile by name.
    pub fn builtin(name: &str) -> Option<Self> {
        match name {
            "tractatus" => Some(Self::tractatus()),
            "dictionary" => Some(Self::dictionary()),
            "prose" => Some(Self::prose()),
            _ => None,
        }
    }

    /// Prose introduction followed by numbered propositions grouped into
    /// seven top-level sections.
    pub fn tractatus() -> Self {
        Self {
            name: "tractatus".into(),
            title: "Tractatus Logico-Philosophicus".into(),
            author: "Ludwig Wittgenstein".into(),
            export_name: "tractatusContent".into(),
            format: ContentFormat::Plain,
            intro: Some(IntroPart {
                title: "Introduction by Bertrand Russell".into(),
                start_marker: Some("MR WITTGENSTEIN".into()),
                normalize: NormalizeRules {
                    max_page_number_digits: Some(usize::MAX),
                    min_line_len: 3,
                    denylist: [
                        "INTRODUCTION",
                        "By BERTRAND RUSSELL",
                        "Tractatus",
                        "Logico-",
                        "Philosophicus",
                    ]
                    .map(String::from)
                    .to_vec(),
                    ..NormalizeRules::default()
                },
            }),
            body_start: Some(BodyStart {
                numeral: "1".into(),
                opening: "The world is all that is the case".into(),
                window: 4,
            }),
            body: BodyPart {
                kind: DocumentKind::NumberedProposition,
                title: "Tractatus Logico-Philosophicus".into(),
                categorize: false,
                section_titles: [
                    "The World and Facts",
                    "Objects and States of Affairs",
                    "Pictures and Thoughts",
                    "Propositions and Language",
                    "Logic and Truth-Functions",
                    "Science and Necessity",
                    "Ethics and the Mystical",
                ]
                .map(String::from)
                .to_vec(),
                normalize: NormalizeRules {
                    max_page_number_digits: Some(3),
                    preserve: TOP_LEVEL_MARKERS.map(String::from).to_vec(),
                    ..NormalizeRules::default()
                },
            },
        }
    }

    /// Term/definition entries grouped by thematic category.
    pub fn dictionary() -> Self {
        Self {
            name: "dictionary".into(),
            title: "Dictionary of Analytic Philosophy".into(),
            author: String::new(),
            export_name: "dictionaryContent".into(),
            format: ContentFormat::Html,
            intro: None,
            body_start: None,
            body: BodyPart {
                kind: DocumentKind::DictionaryEntry,
                title: "Dictionary of Analytic Philosophy".into(),
                categorize: true,
                section_titles: Vec::new(),
                normalize: NormalizeRules {
                    min_line_len: 4,
                    join_continuations: true,
                    ..NormalizeRules::default()
                },
            },
        }
    }

    /// Plain prose rebuilt into paragraphs, emitted as a single record.
    pub fn prose() -> Self {
        Self {
            name: "prose".into(),
            title: "Untitled Document".into(),
            author: String::new(),
            export_name: "documentContent".into(),
            format: ContentFormat::Html,
            intro: None,
            body_start: None,
            body: BodyPart {
                kind: DocumentKind::FlowingProse,
                title: "Full Text".into(),
                categorize: false,
                section_titles: Vec::new(),
                normalize: NormalizeRules::default(),
            },
        }
    }

    /// Parse and validate a profile from YAML.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let profile: Self = serde_yaml::from_str(yaml)?;
        profile.validate()?;
        Ok(profile)
    }

    /// Read, parse and validate a YAML profile file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ProfileError::Validation("profile name must not be empty".into()));
        }
        if !is_js_identifier(&self.export_name) {
            return Err(ProfileError::Validation(format!(
                "profile '{}': export_name '{}' is not a valid identifier",
                self.name, self.export_name
            )));
        }
        Ok(())
    }
}

fn is_js_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
