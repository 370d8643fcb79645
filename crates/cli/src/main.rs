mod cli;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{info, warn};

use folio_core::config::{load_dotenv, OutputFormat};
use folio_core::{Config, ContentModule};
use folio_ingest::profile::LoadStatus;
use folio_ingest::render::typescript;
use folio_ingest::{process_batch, process_file, BatchJob, PipelineOutput, ProfileRegistry};

use crate::cli::{CliArgs, Command};

const SUPPORTED_EXTENSIONS: [&str; 4] = ["pdf", "txt", "text", "docx"];

fn main() -> Result<()> {
    load_dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args = CliArgs::parse();
    let mut config = Config::from_env();
    if let Some(dir) = args.profiles_dir {
        config.profiles_dir = dir;
    }

    let mut registry = ProfileRegistry::with_builtins();
    let results = registry
        .load_dir(&config.profiles_dir)
        .with_context(|| format!("failed to scan {}", config.profiles_dir.display()))?;
    let failed = results
        .iter()
        .filter(|r| matches!(r.status, LoadStatus::Failed { .. }))
        .count();
    if failed > 0 {
        warn!(failed, "some profile files could not be loaded");
    }

    match args.command {
        Command::Convert {
            input,
            profile,
            output,
            format,
        } => {
            if let Some(format) = format {
                config.format = format;
            }
            config.log_summary();
            convert(&registry, &config, &input, &profile, output)
        }
        Command::Batch {
            dir,
            profile,
            output_dir,
            format,
            workers,
        } => {
            if let Some(output_dir) = output_dir {
                config.output_dir = output_dir;
            }
            if let Some(format) = format {
                config.format = format;
            }
            if let Some(workers) = workers {
                config.workers = workers;
            }
            config.log_summary();
            batch(&registry, &config, &dir, &profile)
        }
        Command::Profiles => {
            for profile in registry.iter() {
                println!(
                    "{:<16} {:<22} {}",
                    profile.name,
                    profile.body.kind.as_str(),
                    profile.title
                );
            }
            Ok(())
        }
    }
}

fn convert(
    registry: &ProfileRegistry,
    config: &Config,
    input: &Path,
    profile: &str,
    output: Option<PathBuf>,
) -> Result<()> {
    let profile = registry
        .resolve(profile)
        .with_context(|| format!("failed to resolve profile '{profile}'"))?;

    let result = process_file(input, &profile)
        .with_context(|| format!("failed to convert {}", input.display()))?;

    let path = output.unwrap_or_else(|| default_output_path(config, input));
    write_output(&result.module, config.format, &path)?;
    report(input, &path, &result);
    Ok(())
}

fn batch(registry: &ProfileRegistry, config: &Config, dir: &Path, profile: &str) -> Result<()> {
    let profile = registry
        .resolve(profile)
        .with_context(|| format!("failed to resolve profile '{profile}'"))?;

    let mut inputs: Vec<PathBuf> = fs::read_dir(dir)
        .with_context(|| format!("failed to read {}", dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file() && is_supported(path))
        .collect();
    inputs.sort();

    if inputs.is_empty() {
        bail!("no supported documents in {}", dir.display());
    }

    let jobs: Vec<BatchJob> = inputs
        .into_iter()
        .map(|path| BatchJob {
            path,
            profile: profile.clone(),
        })
        .collect();

    let outcomes = process_batch(&jobs, config.workers)?;
    let mut failures = 0usize;

    for outcome in outcomes {
        match outcome.result {
            Ok(result) => {
                let path = default_output_path(config, &outcome.path);
                match write_output(&result.module, config.format, &path) {
                    Ok(()) => report(&outcome.path, &path, &result),
                    Err(e) => {
                        failures += 1;
                        eprintln!("{}: {e:#}", outcome.path.display());
                    }
                }
            }
            Err(e) => {
                failures += 1;
                eprintln!("{}: {e}", outcome.path.display());
            }
        }
    }

    if failures > 0 {
        bail!("{failures} of {} documents failed", jobs.len());
    }
    Ok(())
}

fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| SUPPORTED_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

fn default_output_path(config: &Config, input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("document");
    config
        .output_dir
        .join(format!("{stem}-content.{}", config.format.extension()))
}

fn write_output(module: &ContentModule, format: OutputFormat, path: &Path) -> Result<()> {
    let rendered = match format {
        OutputFormat::Ts => typescript::write_module(module)?,
        OutputFormat::Json => typescript::write_json(module)?,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(path, rendered).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

fn report(input: &Path, output: &Path, result: &PipelineOutput) {
    info!(
        input = %input.display(),
        output = %output.display(),
        sections = result.module.sections.len(),
        chars = result.module.total_chars(),
        "wrote content module"
    );
    let degraded: Vec<String> = result.stats.degraded.iter().map(ToString::to_string).collect();
    println!(
        "{} -> {} ({} sections, {} units){}",
        input.display(),
        output.display(),
        result.module.sections.len(),
        result.stats.units,
        if degraded.is_empty() {
            String::new()
        } else {
            format!(" [degraded: {}]", degraded.join("; "))
        }
    );
}
