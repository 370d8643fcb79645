use std::path::PathBuf;

use clap::{Parser, Subcommand};
use folio_core::config::OutputFormat;

/// Segment source documents into content modules.
///
/// Extracts text from PDF/TXT/DOCX files, splits it into units according to
/// a document profile, and writes a TypeScript (or JSON) content module.
#[derive(Parser, Debug)]
#[command(name = "folio", version, about = "Segment documents into content modules")]
pub struct CliArgs {
    /// Directory of YAML document profiles
    #[arg(long, global = true, env = "FOLIO_PROFILES_DIR")]
    pub profiles_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert a single document
    Convert {
        /// Source document (.pdf, .txt, .docx)
        input: PathBuf,

        /// Profile name or path to a profile YAML file
        #[arg(long, default_value = "prose")]
        profile: String,

        /// Output file (default: <output dir>/<input stem>-content.<format>)
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Output format: ts or json
        #[arg(long, env = "FOLIO_FORMAT")]
        format: Option<OutputFormat>,
    },

    /// Convert every supported document in a directory
    Batch {
        /// Directory holding source documents
        dir: PathBuf,

        /// Profile name or path applied to every document
        #[arg(long)]
        profile: String,

        /// Directory to write content modules to
        #[arg(long, env = "FOLIO_OUTPUT_DIR")]
        output_dir: Option<PathBuf>,

        /// Output format: ts or json
        #[arg(long, env = "FOLIO_FORMAT")]
        format: Option<OutputFormat>,

        /// Worker threads (0 = one per core)
        #[arg(long, env = "FOLIO_WORKERS")]
        workers: Option<usize>,
    },

    /// List built-in and directory profiles
    Profiles,
}
