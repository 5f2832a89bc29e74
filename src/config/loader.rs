//! Configuration loading

use std::path::{Path, PathBuf};

use crate::domain::ports::FsError;
use crate::domain::value_objects::ConfigWarning;
use crate::error::{ManifestError, ManifestResult};

use super::types::Config;

/// Project-level config file name
pub const PROJECT_CONFIG_FILE: &str = "webpack-manifest.toml";

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> ManifestResult<(Config, Vec<ConfigWarning>)> {
    let content = std::fs::read_to_string(path).map_err(|e| ManifestError::Io {
        path: path.to_path_buf(),
        source: FsError::from_io(path, e),
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ManifestError::config(format!("invalid config in {}: {}", path.display(), e)))?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    for warning in &warnings {
        tracing::warn!("{}", warning);
    }

    Ok((config, warnings))
}

/// Candidate config files, highest priority first
pub fn config_candidates(project_root: Option<&Path>) -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Some(root) = project_root {
        candidates.push(root.join(PROJECT_CONFIG_FILE));
    }
    if let Some(config_dir) = dirs::config_dir() {
        candidates.push(config_dir.join("webpack-manifest").join("config.toml"));
    }
    candidates
}

/// Load from project config, user config, or defaults
pub fn load_or_default(project_root: Option<&Path>) -> Config {
    for candidate in config_candidates(project_root) {
        if !candidate.exists() {
            continue;
        }
        match Config::load(&candidate) {
            Ok(config) => {
                tracing::debug!(path = %candidate.display(), "loaded config");
                return with_env_overrides(config);
            }
            Err(e) => tracing::warn!(path = %candidate.display(), error = %e, "skipping config"),
        }
    }

    with_env_overrides(Config::default())
}

/// Apply environment variable overrides (WEBPACK_MANIFEST_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |key| std::env::var(key).ok())
}

pub(crate) fn apply_overrides<F>(mut config: Config, var: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    // WEBPACK_MANIFEST_DEBUG
    if let Some(val) = var("WEBPACK_MANIFEST_DEBUG") {
        let debug = !matches!(val.to_lowercase().as_str(), "" | "0" | "false" | "no" | "off");
        for bundle in config.manifests.values_mut() {
            bundle.debug = Some(debug);
        }
    }

    // WEBPACK_MANIFEST_TIMEOUT (seconds)
    if let Some(val) = var("WEBPACK_MANIFEST_TIMEOUT") {
        match val.trim().parse::<f64>() {
            Ok(timeout) => {
                for bundle in config.manifests.values_mut() {
                    bundle.timeout = Some(timeout);
                }
            }
            Err(_) => tracing::warn!(value = %val, "ignoring WEBPACK_MANIFEST_TIMEOUT"),
        }
    }

    config
}

/// Line of the first `key = ...` assignment, 1-based
fn find_line_number(content: &str, key: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| {
            line.trim_start()
                .strip_prefix(key)
                .is_some_and(|rest| rest.trim_start().starts_with('='))
        })
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "manifests",
        "path",
        "static_url",
        "static_root",
        "debug",
        "timeout",
        "read_retry",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
