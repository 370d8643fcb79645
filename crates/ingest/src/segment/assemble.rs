//! Unit assembly: one pass over the line stream with a single open accumulator.

use folio_core::{Line, Unit, UnitTag};

use super::boundary::{BoundaryClassifier, BoundaryContext, LOOKAHEAD};

/// Assembled units plus whether the strategy had to fall back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assembly {
    pub units: Vec<Unit>,
    /// No structural marker was found; the input is one `Undivided` unit.
    pub degraded: bool,
}

/// The open accumulator: its lines and the index of its first line.
struct OpenUnit {
    start: usize,
    lines: Vec<String>,
}

enum AssemblerState {
    NoOpenUnit,
    UnitOpen(OpenUnit),
}

/// Partition `lines` into units using `classifier`.
///
/// Every line lands in exactly one unit, in order; ordinals run 0..n.
pub fn assemble(lines: &[Line], classifier: &dyn BoundaryClassifier) -> Assembly {
    let mut units: Vec<Unit> = Vec::new();
    let mut state = AssemblerState::NoOpenUnit;
    let mut saw_boundary = false;

    for (i, line) in lines.iter().enumerate() {
        let ahead = &lines[i + 1..lines.len().min(i + 1 + LOOKAHEAD)];
        let open: &[String] = match &state {
            AssemblerState::UnitOpen(unit) => &unit.lines,
            AssemblerState::NoOpenUnit => &[],
        };
        let boundary = classifier.is_boundary(&BoundaryContext::new(&line.text, open, ahead));
        saw_boundary |= boundary;

        state = match state {
            AssemblerState::NoOpenUnit => AssemblerState::UnitOpen(OpenUnit {
                start: i,
                lines: vec![line.text.clone()],
            }),
            AssemblerState::UnitOpen(unit) if boundary => {
                units.push(close(unit, units.len(), classifier));
                AssemblerState::UnitOpen(OpenUnit {
                    start: i,
                    lines: vec![line.text.clone()],
                })
            }
            AssemblerState::UnitOpen(mut unit) => {
                unit.lines.push(line.text.clone());
                AssemblerState::UnitOpen(unit)
            }
        };
    }

    if let AssemblerState::UnitOpen(unit) = state {
        units.push(close(unit, units.len(), classifier));
    }

    let degraded = classifier.requires_markers() && !saw_boundary && !units.is_empty();
    if degraded {
        tracing::warn!(
            kind = %classifier.kind(),
            lines = lines.len(),
            "no structural marker found; keeping the input as one undivided section"
        );
        for unit in &mut units {
            unit.tag = Some(UnitTag::Undivided);
        }
    }

    tracing::debug!(kind = %classifier.kind(), lines = lines.len(), units = units.len(), "assembled units");
    Assembly { units, degraded }
}

fn close(unit: OpenUnit, ordinal: usize, classifier: &dyn BoundaryClassifier) -> Unit {
    let tag = unit.lines.first().and_then(|first| classifier.tag(first));
    let end = unit.start + unit.lines.len();
    Unit {
        ordinal,
        text: unit.lines.join(classifier.joiner()),
        tag,
        lines: unit.start..end,
    }
}
