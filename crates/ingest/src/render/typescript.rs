//! TypeScript content-module sink.
//!
//! Emits `export const <name> = { title, author, sections: [...] };` with
//! section contents as template literals, followed by the accessor
//! functions the front-end imports.

use folio_core::{ContentModule, Result};

/// Escape text for a template literal body.
pub fn escape_template(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace("${", "\\${")
}

fn string_literal(s: &str) -> Result<String> {
    Ok(serde_json::to_string(s)?)
}

/// Render `module` as TypeScript source.
pub fn write_module(module: &ContentModule) -> Result<String> {
    let name = &module.export_name;
    let mut out = String::new();

    out.push_str(&format!("export const {name} = {{\n"));
    out.push_str(&format!("  title: {},\n", string_literal(&module.title)?));
    out.push_str(&format!("  author: {},\n", string_literal(&module.author)?));
    out.push_str("  sections: [\n");

    let last = module.sections.len().saturating_sub(1);
    for (i, section) in module.sections.iter().enumerate() {
        out.push_str("    {\n");
        out.push_str(&format!("      id: {},\n", string_literal(&section.id)?));
        out.push_str(&format!("      title: {},\n", string_literal(&section.title)?));
        out.push_str(&format!("      content: `{}`\n", escape_template(&section.content)));
        out.push_str(if i < last { "    },\n" } else { "    }\n" });
    }

    out.push_str("  ]\n};\n\n");
    out.push_str(&format!(
        r#"export function getFullDocumentContent(): string {{
  return {name}.sections
    .map(section => section.content)
    .join('\n\n');
}}

export function getDocumentTitle(): string {{
  return {name}.title;
}}

export function getDocumentAuthor(): string {{
  return {name}.author;
}}
"#
    ));

    Ok(out)
}

/// Render `module` as pretty-printed JSON.
pub fn write_json(module: &ContentModule) -> Result<String> {
    Ok(serde_json::to_string_pretty(module)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::OutputRecord;

    fn module(content: &str) -> ContentModule {
        ContentModule {
            export_name: "tractatusContent".into(),
            title: "Tractatus Logico-Philosophicus".into(),
            author: "Ludwig Wittgenstein".into(),
            sections: vec![OutputRecord {
                id: "the-world-and-facts".into(),
                title: "The World and Facts".into(),
                content: content.into(),
            }],
        }
    }

    #[test]
    fn escapes_reserved_template_characters() {
        assert_eq!(escape_template("a `b` ${c} \\d"), "a \\`b\\` \\${c} \\\\d");
        assert_eq!(escape_template("$5 and {braces}"), "$5 and {braces}");
    }

    #[test]
    fn module_layout() {
        let ts = write_module(&module("1\nThe world is all that is the case.")).unwrap();
        assert!(ts.starts_with("export const tractatusContent = {\n"));
        assert!(ts.contains("  title: \"Tractatus Logico-Philosophicus\",\n"));
        assert!(ts.contains("      id: \"the-world-and-facts\",\n"));
        assert!(ts.contains("      content: `1\nThe world is all that is the case.`\n    }\n  ]\n};"));
        assert!(ts.contains("export function getFullDocumentContent(): string {"));
        assert!(ts.contains(".join('\\n\\n');"));
        assert!(ts.contains("return tractatusContent.author;"));
    }

    #[test]
    fn sections_are_comma_separated() {
        let mut m = module("one");
        m.sections.push(OutputRecord {
            id: "b".into(),
            title: "B".into(),
            content: "two".into(),
        });
        let ts = write_module(&m).unwrap();
        assert!(ts.contains("`one`\n    },\n    {"));
        assert!(ts.contains("`two`\n    }\n  ]"));
    }

    #[test]
    fn quotes_in_titles_are_escaped() {
        let mut m = module("x");
        m.title = "The \"Blue\" Book".into();
        let ts = write_module(&m).unwrap();
        assert!(ts.contains(r#"title: "The \"Blue\" Book","#));
    }

    #[test]
    fn json_sink_uses_camel_case() {
        let json = write_json(&module("x")).unwrap();
        assert!(json.contains("\"exportName\": \"tractatusContent\""));
    }
}
