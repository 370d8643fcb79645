//! Segmentation core.
//!
//! Turns raw extracted text into ordered units: the normalizer produces the
//! line stream, a boundary strategy (selected by [`DocumentKind`]) decides
//! where units start, the assembler merges lines, and the taxonomy assigns
//! categories to dictionary-style units.
//!
//! [`DocumentKind`]: folio_core::DocumentKind

mod assemble;
mod boundary;
mod locate;
mod normalize;
mod taxonomy;

pub use assemble::{assemble, Assembly};
pub use boundary::{
    classifier_for, BoundaryClassifier, BoundaryContext, DictionaryEntry, FlowingProse,
    NumberedProposition, LOOKAHEAD,
};
pub use locate::{locate_body_start, skip_to_marker, BodyStart};
pub use normalize::{normalize, raw_lines, NormalizeRules};
pub use taxonomy::{categorize, classify, TAXONOMY};
