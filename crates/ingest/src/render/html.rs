//! Paragraph-level HTML markup for rendered content.

use folio_core::{DocumentKind, Unit, UnitTag};

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            c => out.push(c),
        }
    }
    out
}

pub(super) fn render_unit(unit: &Unit, kind: DocumentKind) -> String {
    match kind {
        DocumentKind::FlowingProse => paragraph("document-paragraph", &escape(&unit.text)),
        DocumentKind::NumberedProposition => {
            let class = match unit.tag {
                Some(UnitTag::TopLevelSection(_)) | Some(UnitTag::Proposition(_)) => {
                    "document-proposition"
                }
                _ => "document-paragraph",
            };
            paragraph(class, &escape(&unit.text).replace('\n', "<br>"))
        }
        DocumentKind::DictionaryEntry => match unit.text.split_once(':') {
            Some((head, rest)) if matches!(unit.tag, Some(UnitTag::Entry(_))) => paragraph(
                "dictionary-entry",
                &format!("<strong>{}:</strong> {}", escape(head.trim()), escape(rest.trim())),
            ),
            _ => paragraph("dictionary-entry", &escape(&unit.text)),
        },
    }
}

fn paragraph(class: &str, body: &str) -> String {
    format!("<p class=\"{class}\">{body}</p>")
}
