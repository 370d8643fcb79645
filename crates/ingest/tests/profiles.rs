//! Integration tests that verify every example profile in
//! `config/profiles/` loads and validates.

use folio_core::DocumentKind;
use folio_ingest::profile::LoadStatus;
use folio_ingest::render::ContentFormat;
use folio_ingest::{DocumentProfile, ProfileRegistry};

/// Integration tests run from the crate directory, so go up two levels.
fn profiles_dir() -> std::path::PathBuf {
    let manifest = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest.join("../../config/profiles")
}

fn load_profile(filename: &str) -> DocumentProfile {
    let path = profiles_dir().join(filename);
    DocumentProfile::from_file(&path)
        .unwrap_or_else(|e| panic!("Failed to load {}: {}", path.display(), e))
}

#[test]
fn every_example_profile_loads() {
    let mut registry = ProfileRegistry::with_builtins();
    let results = registry.load_dir(&profiles_dir()).unwrap();

    for result in &results {
        if let LoadStatus::Failed { error } = &result.status {
            panic!("{} failed to load: {}", result.path.display(), error);
        }
    }
    let loaded = results
        .iter()
        .filter(|r| matches!(r.status, LoadStatus::Loaded { .. }))
        .count();
    assert_eq!(loaded, 3);
    assert_eq!(
        registry.names(),
        vec![
            "analytic-dictionary",
            "dictionary",
            "industrial-society",
            "prose",
            "symbolic-logic",
            "tractatus",
        ]
    );
}

#[test]
fn industrial_society_profile() {
    let profile = load_profile("industrial-society.yml");
    assert_eq!(profile.export_name, "industrialSocietyContent");
    assert_eq!(profile.author, "Theodore Kaczynski");
    assert_eq!(profile.format, ContentFormat::Html);
    assert_eq!(profile.body.kind, DocumentKind::FlowingProse);
    assert!(profile.body.normalize.join_continuations);
    assert_eq!(profile.body.normalize.min_line_len, 2);
    assert!(profile.intro.is_none());
}

#[test]
fn symbolic_logic_profile() {
    let profile = load_profile("symbolic-logic.yml");
    assert_eq!(profile.body.kind, DocumentKind::NumberedProposition);
    assert_eq!(profile.format, ContentFormat::Plain);
    assert!(profile.body.section_titles.is_empty());
    assert_eq!(profile.body.normalize.denylist.len(), 2);
}

#[test]
fn analytic_dictionary_profile() {
    let profile = load_profile("analytic-dictionary.yml");
    assert_eq!(profile.export_name, "dictionaryContent");
    assert_eq!(profile.body.kind, DocumentKind::DictionaryEntry);
    assert!(profile.body.categorize);
    assert_eq!(profile.body.normalize.min_line_len, 4);
    // Unset fields keep their defaults.
    assert_eq!(profile.body.normalize.max_page_number_digits, Some(3));
}
