//! Locating where the numbered body of a document begins, and where a
//! prose part's real content starts after title pages.

use serde::{Deserialize, Serialize};

/// Signature of the first proposition: a numeral line followed by an
/// expected opening phrase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BodyStart {
    /// The numeral of the first proposition, usually `1`.
    pub numeral: String,
    /// Text the first proposition opens with.
    pub opening: String,
    /// How many lines after the numeral may hold the opening.
    #[serde(default = "default_window")]
    pub window: usize,
}

fn default_window() -> usize {
    4
}

/// Index of the raw line where the body starts, if its signature is found.
pub fn locate_body_start<S: AsRef<str>>(lines: &[S], start: &BodyStart) -> Option<usize> {
    let inline = format!("{} {}", start.numeral, start.opening);

    for (i, line) in lines.iter().enumerate() {
        let line = line.as_ref().trim();

        if line == start.numeral {
            let window = lines.iter().skip(i + 1).take(start.window);
            if window.into_iter().any(|l| l.as_ref().contains(&start.opening)) {
                return Some(i);
            }
        }

        if line.starts_with(&inline) {
            return Some(i);
        }

        if line.starts_with(&start.opening) {
            let numeral_before = i > 0 && lines[i - 1].as_ref().trim() == start.numeral;
            return Some(if numeral_before { i - 1 } else { i });
        }
    }
    None
}

/// Lines from the first one containing `marker` (case-insensitive) onward.
///
/// Returns `None` when the marker never appears.
pub fn skip_to_marker<'a, S: AsRef<str>>(lines: &'a [S], marker: &str) -> Option<&'a [S]> {
    let marker = marker.to_uppercase();
    lines
        .iter()
        .position(|l| l.as_ref().to_uppercase().contains(&marker))
        .map(|i| &lines[i..])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tractatus_start() -> BodyStart {
        BodyStart {
            numeral: "1".into(),
            opening: "The world is all that is the case".into(),
            window: 4,
        }
    }

    #[test]
    fn numeral_then_opening_within_window() {
        let lines = [
            "and we must pass over it in silence.",
            "1",
            "",
            "The world is all that is the case.",
        ];
        assert_eq!(locate_body_start(&lines, &tractatus_start()), Some(1));
    }

    #[test]
    fn numeral_and_opening_on_one_line() {
        let lines = ["Preface", "1 The world is all that is the case."];
        assert_eq!(locate_body_start(&lines, &tractatus_start()), Some(1));
    }

    #[test]
    fn opening_alone_starts_the_body() {
        let lines = ["Preface", "The world is all that is the case."];
        assert_eq!(locate_body_start(&lines, &tractatus_start()), Some(1));
    }

    #[test]
    fn numeral_outside_window_is_ignored() {
        let lines = ["1", "a", "b", "c", "d", "e", "The world is all that is the case."];
        let start = BodyStart {
            window: 2,
            ..tractatus_start()
        };
        assert_eq!(locate_body_start(&lines, &start), Some(6));
    }

    #[test]
    fn missing_signature_is_none() {
        let lines = ["Some unrelated text.", "1", "Nothing here."];
        assert_eq!(locate_body_start(&lines, &tractatus_start()), None);
    }

    #[test]
    fn skip_to_marker_is_case_insensitive() {
        let lines = ["TRACTATUS", "INTRODUCTION", "Mr Wittgenstein's Tractatus", "rest"];
        let kept = skip_to_marker(&lines, "MR WITTGENSTEIN").unwrap();
        assert_eq!(kept, &lines[2..]);
        assert!(skip_to_marker(&lines, "RUSSELL").is_none());
    }
}
