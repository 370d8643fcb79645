//! Content serializer: ordered (optionally categorized) units to output records.

mod html;
pub mod typescript;

use std::collections::HashSet;

use folio_core::{CategorizedUnit, Category, DocumentKind, OutputRecord, Unit, UnitTag};
use serde::{Deserialize, Serialize};

/// Markup applied to unit text inside a record's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentFormat {
    #[default]
    Plain,
    Html,
}

/// Identifier derived from a title: lower-cased, spaces and dots to
/// hyphens, everything else non-alphanumeric dropped.
pub fn slugify(title: &str) -> String {
    title
        .trim()
        .to_lowercase()
        .chars()
        .filter_map(|c| match c {
            ' ' | '.' | '-' => Some('-'),
            c if c.is_alphanumeric() => Some(c),
            _ => None,
        })
        .collect()
}

/// Render units of `kind` and join them with a blank line.
fn join_units<'a>(
    units: impl IntoIterator<Item = &'a Unit>,
    kind: DocumentKind,
    format: ContentFormat,
) -> String {
    units
        .into_iter()
        .map(|u| match format {
            ContentFormat::Plain => u.text.clone(),
            ContentFormat::Html => html::render_unit(u, kind),
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn record(title: &str, content: String) -> OutputRecord {
    OutputRecord {
        id: slugify(title),
        title: title.to_string(),
        content,
    }
}

/// One record holding every unit of a prose part.
pub fn prose_record(title: &str, units: &[Unit], format: ContentFormat) -> OutputRecord {
    record(title, join_units(units, DocumentKind::FlowingProse, format))
}

/// Group numbered units into one record per top-level section.
///
/// Sections are titled in the order they appear: the k-th top-level start
/// takes `titles[k]` (or `Section k+1` once the list runs out), whatever
/// numeral it carries. Units before the first top-level start go into a
/// record titled `fallback_title`.
pub fn section_records(
    units: &[Unit],
    titles: &[String],
    fallback_title: &str,
    format: ContentFormat,
) -> Vec<OutputRecord> {
    let mut groups: Vec<(bool, Vec<&Unit>)> = Vec::new();

    for unit in units {
        if unit.is_top_level() {
            groups.push((true, vec![unit]));
            continue;
        }
        match groups.last_mut() {
            Some((_, members)) => members.push(unit),
            None => groups.push((false, vec![unit])),
        }
    }

    let mut section = 0usize;
    groups
        .into_iter()
        .map(|(top_level, members)| {
            let title = if top_level {
                section += 1;
                titles
                    .get(section - 1)
                    .cloned()
                    .unwrap_or_else(|| format!("Section {section}"))
            } else {
                fallback_title.to_string()
            };
            let content = join_units(members, DocumentKind::NumberedProposition, format);
            record(&title, content)
        })
        .collect()
}

/// Suffix repeated ids (`-2`, `-3`, ...) so every record id is unique.
pub fn unique_ids(records: &mut [OutputRecord]) {
    let mut seen: HashSet<String> = HashSet::new();
    for record in records.iter_mut() {
        if !seen.contains(&record.id) {
            seen.insert(record.id.clone());
            continue;
        }
        let base = record.id.clone();
        let mut n = 2;
        while seen.contains(&format!("{base}-{n}")) {
            n += 1;
        }
        tracing::debug!(id = %base, suffix = n, "renamed duplicate record id");
        record.id = format!("{base}-{n}");
        seen.insert(record.id.clone());
    }
}

/// One record per category that received units, in display order.
pub fn category_records(categorized: &[CategorizedUnit], format: ContentFormat) -> Vec<OutputRecord> {
    Category::DISPLAY_ORDER
        .iter()
        .filter_map(|category| {
            let members: Vec<&Unit> = categorized
                .iter()
                .filter(|c| c.category == *category)
                .map(|c| &c.unit)
                .collect();
            if members.is_empty() {
                return None;
            }
            Some(OutputRecord {
                id: category.record_id().to_string(),
                title: category.title().to_string(),
                content: join_units(members, DocumentKind::DictionaryEntry, format),
            })
        })
        .collect()
}

/// Plain records for a body without categories: undivided input becomes a
/// single record, otherwise records follow the kind's grouping rule.
pub fn body_records(
    units: &[Unit],
    kind: DocumentKind,
    titles: &[String],
    title: &str,
    format: ContentFormat,
) -> Vec<OutputRecord> {
    if units.is_empty() {
        return Vec::new();
    }
    let undivided = units.iter().any(|u| u.tag == Some(UnitTag::Undivided));
    match kind {
        DocumentKind::NumberedProposition if !undivided => {
            section_records(units, titles, title, format)
        }
        _ => vec![record(title, join_units(units, kind, format))],
    }
}
