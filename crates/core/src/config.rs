use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Load .env file (silently ignores if missing).
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.is_empty())
}

fn env_usize(key: &str, default: usize) -> usize {
    env_opt(key).and_then(|v| v.parse().ok()).unwrap_or(default)
}

// ── Output sink format ────────────────────────────────────────

/// Container format written by the output sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// TypeScript content module (`export const ... = { sections: [...] }`).
    #[default]
    Ts,
    /// Pretty-printed JSON of the content module.
    Json,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Ts => "ts",
            OutputFormat::Json => "json",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ts" | "typescript" => Ok(OutputFormat::Ts),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{other}' (expected ts or json)")),
        }
    }
}

// ── Top-level config ──────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory scanned for `*.yml` document profiles.
    pub profiles_dir: PathBuf,
    /// Directory content modules are written to.
    pub output_dir: PathBuf,
    /// Worker threads for batch runs (0 = rayon default).
    pub workers: usize,
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            profiles_dir: PathBuf::from("config/profiles"),
            output_dir: PathBuf::from("shared"),
            workers: 0,
            format: OutputFormat::Ts,
        }
    }
}

impl Config {
    /// Build config from environment variables (call `load_dotenv()` first).
    pub fn from_env() -> Self {
        let format = match env_opt("FOLIO_FORMAT") {
            Some(raw) => raw.parse().unwrap_or_else(|e: String| {
                tracing::warn!(error = %e, "ignoring FOLIO_FORMAT");
                OutputFormat::default()
            }),
            None => OutputFormat::default(),
        };
        Self {
            profiles_dir: PathBuf::from(env_or("FOLIO_PROFILES_DIR", "config/profiles")),
            output_dir: PathBuf::from(env_or("FOLIO_OUTPUT_DIR", "shared")),
            workers: env_usize("FOLIO_WORKERS", 0),
            format,
        }
    }

    /// Print a summary for startup logs.
    pub fn log_summary(&self) {
        tracing::info!("Config loaded:");
        tracing::info!("  profiles:  dir={}", self.profiles_dir.display());
        tracing::info!("  output:    dir={}, format={:?}", self.output_dir.display(), self.format);
        tracing::info!(
            "  workers:   {}",
            if self.workers == 0 { "auto".to_string() } else { self.workers.to_string() }
        );
    }
}
