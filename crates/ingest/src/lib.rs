//! Document segmentation and classification.
//!
//! Raw extracted text flows strictly left to right:
//! extraction → line stream → units → (optional) categories → output records.

pub mod document;
pub mod pipeline;
pub mod profile;
pub mod render;
pub mod segment;

pub use pipeline::{
    process_batch, process_file, run, BatchJob, BatchOutcome, Degradation, PipelineOutput,
    PipelineStats,
};
pub use profile::{DocumentProfile, ProfileRegistry};
