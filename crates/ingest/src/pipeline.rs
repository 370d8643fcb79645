//! Pipeline driver: extracted pages → content module, per document profile.
//!
//! Each document is processed independently and sequentially; the batch
//! runner fans documents out over a rayon pool.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Instant;

use folio_core::{ContentModule, FolioError, Line, OutputRecord, Result, Unit};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::document::extract_text;
use crate::profile::{DocumentProfile, IntroPart};
use crate::render;
use crate::segment::{
    assemble, categorize, classifier_for, locate_body_start, normalize, raw_lines, skip_to_marker,
    FlowingProse,
};

/// A soft failure the pipeline recovered from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Degradation {
    /// The body signature was not found; the whole text was treated as body.
    BodyStartMissing,
    /// The intro start marker was not found; the intro is empty.
    IntroMarkerMissing,
    /// No structural marker was found; the body is one undivided unit.
    Undivided,
}

impl fmt::Display for Degradation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Degradation::BodyStartMissing => "body start not found",
            Degradation::IntroMarkerMissing => "intro marker not found",
            Degradation::Undivided => "no structural markers, body left undivided",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PipelineStats {
    /// Normalized lines across intro and body.
    pub lines: usize,
    /// Assembled units across intro and body.
    pub units: usize,
    pub records: usize,
    pub degraded: Vec<Degradation>,
}

#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub module: ContentModule,
    pub stats: PipelineStats,
}

/// Run the segmentation pipeline over extracted pages (in reading order).
///
/// Boundary misses degrade instead of failing; an empty document yields a
/// module with no sections.
pub fn run<S: AsRef<str>>(
    pages: &[S],
    profile: &DocumentProfile,
) -> Result<PipelineOutput> {
    profile.validate()?;

    let raw = raw_lines(pages);
    let mut stats = PipelineStats::default();
    debug!(profile = %profile.name, raw_lines = raw.len(), "split pages into lines");

    let body_from = match &profile.body_start {
        Some(start) => match locate_body_start(&raw, start) {
            Some(i) => {
                debug!(line = i, "located body start");
                i
            }
            None => {
                warn!(profile = %profile.name, numeral = %start.numeral, "body start not found, treating whole text as body");
                stats.degraded.push(Degradation::BodyStartMissing);
                0
            }
        },
        None => 0,
    };
    let (front, body) = raw.split_at(body_from);

    let mut records: Vec<OutputRecord> = Vec::new();

    if let Some(intro) = &profile.intro {
        if let Some(record) = intro_record(front, intro, profile, &mut stats) {
            records.push(record);
        }
    }

    records.extend(body_records(body, profile, &mut stats));
    render::unique_ids(&mut records);
    stats.records = records.len();

    info!(
        profile = %profile.name,
        lines = stats.lines,
        units = stats.units,
        records = stats.records,
        degraded = stats.degraded.len(),
        "document processed"
    );

    Ok(PipelineOutput {
        module: ContentModule {
            export_name: profile.export_name.clone(),
            title: profile.title.clone(),
            author: profile.author.clone(),
            sections: records,
        },
        stats,
    })
}

fn intro_record(
    front: &[String],
    intro: &IntroPart,
    profile: &DocumentProfile,
    stats: &mut PipelineStats,
) -> Option<OutputRecord> {
    let text: &[String] = match &intro.start_marker {
        Some(marker) => match skip_to_marker(front, marker) {
            Some(rest) => rest,
            None => {
                warn!(profile = %profile.name, marker = %marker, "intro marker not found, intro left empty");
                stats.degraded.push(Degradation::IntroMarkerMissing);
                &[]
            }
        },
        None => front,
    };

    let lines = normalize(text, &intro.normalize);
    let units = assemble(&lines, &FlowingProse).units;
    debug!(lines = lines.len(), units = units.len(), "assembled intro");
    stats.lines += lines.len();
    stats.units += units.len();

    if units.is_empty() {
        return None;
    }
    Some(render::prose_record(&intro.title, &units, profile.format))
}

fn body_records(
    body: &[String],
    profile: &DocumentProfile,
    stats: &mut PipelineStats,
) -> Vec<OutputRecord> {
    let part = &profile.body;
    let lines: Vec<Line> = normalize(body, &part.normalize);
    let classifier = classifier_for(part.kind);
    let assembly = assemble(&lines, classifier.as_ref());
    debug!(kind = %part.kind, lines = lines.len(), units = assembly.units.len(), "assembled body");

    stats.lines += lines.len();
    stats.units += assembly.units.len();
    if assembly.degraded {
        stats.degraded.push(Degradation::Undivided);
    }

    let units: Vec<Unit> = assembly.units;
    if part.categorize {
        let categorized = categorize(units);
        render::category_records(&categorized, profile.format)
    } else {
        render::body_records(&units, part.kind, &part.section_titles, &part.title, profile.format)
    }
}

/// Read and extract a file, then run the pipeline on it.
pub fn process_file(path: &Path, profile: &DocumentProfile) -> Result<PipelineOutput> {
    let start = Instant::now();
    let bytes = std::fs::read(path)?;
    let filename = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();

    let doc = extract_text(&bytes, filename)?;
    debug!(
        file = %path.display(),
        pages = doc.pages.len(),
        chars = doc.total_chars(),
        "extracted text"
    );

    let output = run(&doc.page_texts(), profile)?;
    info!(
        file = %path.display(),
        records = output.stats.records,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "converted file"
    );
    Ok(output)
}

/// One document of a batch and the profile to process it with.
#[derive(Debug, Clone)]
pub struct BatchJob {
    pub path: PathBuf,
    pub profile: DocumentProfile,
}

#[derive(Debug)]
pub struct BatchOutcome {
    pub path: PathBuf,
    pub result: Result<PipelineOutput>,
}

/// Process independent documents in parallel.
///
/// Outcomes keep the order of `jobs`; a failing document is reported in its
/// outcome and does not stop the others. `workers == 0` uses rayon's default.
pub fn process_batch(jobs: &[BatchJob], workers: usize) -> Result<Vec<BatchOutcome>> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()
        .map_err(|e| FolioError::Other(format!("failed to create worker pool: {e}")))?;

    let start = Instant::now();
    info!(documents = jobs.len(), threads = pool.current_num_threads(), "starting batch");

    let outcomes: Vec<BatchOutcome> = pool.install(|| {
        jobs.par_iter()
            .map(|job| {
                let result = process_file(&job.path, &job.profile);
                if let Err(e) = &result {
                    warn!(file = %job.path.display(), error = %e, "document failed");
                }
                BatchOutcome {
                    path: job.path.clone(),
                    result,
                }
            })
            .collect()
    });

    let failed = outcomes.iter().filter(|o| o.result.is_err()).count();
    info!(
        documents = outcomes.len(),
        failed,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "batch complete"
    );
    Ok(outcomes)
}
