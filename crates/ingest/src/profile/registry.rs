//! [`ProfileRegistry`]: built-in profiles plus YAML profiles from a directory.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::{info, warn};

use super::error::{LoadResult, LoadStatus, ProfileError, Result};
use super::DocumentProfile;

/// Named document profiles.
///
/// Starts with the built-ins; [`load_dir`](Self::load_dir) adds (or
/// overrides) profiles from `*.yml` / `*.yaml` files.
#[derive(Debug, Clone)]
pub struct ProfileRegistry {
    profiles: BTreeMap<String, DocumentProfile>,
}

impl Default for ProfileRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl ProfileRegistry {
    /// Registry holding no profiles.
    pub fn empty() -> Self {
        Self {
            profiles: BTreeMap::new(),
        }
    }

    /// Registry holding the built-in profiles.
    pub fn with_builtins() -> Self {
        let mut registry = Self::empty();
        for name in DocumentProfile::BUILTIN {
            if let Some(profile) = DocumentProfile::builtin(name) {
                registry.insert(profile);
            }
        }
        registry
    }

    /// Add a profile, replacing any with the same name.
    pub fn insert(&mut self, profile: DocumentProfile) {
        self.profiles.insert(profile.name.clone(), profile);
    }

    /// Scan `dir` (recursively) for YAML profiles.
    ///
    /// Dotfiles and non-YAML files are skipped. Parse errors are reported
    /// per-file but do not abort the scan. A missing directory yields no
    /// results.
    pub fn load_dir(&mut self, dir: &Path) -> Result<Vec<LoadResult>> {
        let mut results = Vec::new();
        if !dir.exists() {
            info!(path = %dir.display(), "profiles directory not found, using built-ins only");
            return Ok(results);
        }
        self.scan_dir(dir, &mut results)?;
        Ok(results)
    }

    fn scan_dir(&mut self, dir: &Path, results: &mut Vec<LoadResult>) -> Result<()> {
        let mut entries: Vec<_> = match fs::read_dir(dir) {
            Ok(e) => e.collect::<std::io::Result<_>>()?,
            Err(e) => {
                warn!(path = %dir.display(), error = %e, "failed to read directory");
                return Ok(());
            }
        };
        // Stable load order so later files override earlier ones predictably.
        entries.sort_by_key(|e| e.path());

        for entry in entries {
            let path = entry.path();

            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                if name.starts_with('.') {
                    if path.is_file() {
                        results.push(LoadResult {
                            path,
                            status: LoadStatus::Skipped {
                                reason: "dotfile".to_string(),
                            },
                        });
                    }
                    continue;
                }
            }

            if path.is_dir() {
                self.scan_dir(&path, results)?;
                continue;
            }

            if !is_yaml(&path) {
                results.push(LoadResult {
                    path,
                    status: LoadStatus::Skipped {
                        reason: "not a YAML file".to_string(),
                    },
                });
                continue;
            }

            match DocumentProfile::from_file(&path) {
                Ok(profile) => {
                    let name = profile.name.clone();
                    info!(profile = %name, kind = %profile.body.kind, path = %path.display(), "loaded profile");
                    self.insert(profile);
                    results.push(LoadResult {
                        path,
                        status: LoadStatus::Loaded { name },
                    });
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "failed to load profile file");
                    results.push(LoadResult {
                        path,
                        status: LoadStatus::Failed {
                            error: e.to_string(),
                        },
                    });
                }
            }
        }

        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&DocumentProfile> {
        self.profiles.get(name)
    }

    /// Profile names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        self.profiles.keys().map(String::as_str).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DocumentProfile> {
        self.profiles.values()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Resolve a registered profile name, or load a YAML profile by path.
    pub fn resolve(&self, name_or_path: &str) -> Result<DocumentProfile> {
        if let Some(profile) = self.get(name_or_path) {
            return Ok(profile.clone());
        }
        let path = Path::new(name_or_path);
        if is_yaml(path) && path.is_file() {
            return DocumentProfile::from_file(path);
        }
        Err(ProfileError::NotFound(format!(
            "unknown profile '{name_or_path}' (available: {})",
            self.names().join(", ")
        )))
    }
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "yml" || e == "yaml")
        .unwrap_or(false)
}
