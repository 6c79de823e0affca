//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use super::types::{Config, OutputFormat};

/// Project-level config file name, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "reliefdesk.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {file}: {source}")]
    Io {
        file: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {file}: {message}")]
    Invalid { file: PathBuf, message: String },
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> Result<(Config, Vec<ConfigWarning>), ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        file: path.to_path_buf(),
        source,
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ConfigError::Invalid {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let known = known_keys();
    let warnings = unknown_paths
        .iter()
        .map(|dotted| unknown_key_warning(path, &content, &known, dotted))
        .collect();

    Ok((config, warnings))
}

/// Load from the working directory config, the user config, or defaults,
/// then apply `RELIEF_*` environment overrides.
pub fn load_or_default(
    working_dir: Option<&Path>,
) -> Result<(Config, Vec<ConfigWarning>), ConfigError> {
    let candidates = working_dir
        .map(|dir| dir.join(PROJECT_CONFIG_FILE))
        .into_iter()
        .chain(user_config_path());

    for path in candidates {
        if path.exists() {
            let (config, warnings) = load_with_warnings(&path)?;
            return Ok((with_env_overrides(config), warnings));
        }
    }

    Ok((with_env_overrides(Config::default()), Vec::new()))
}

/// Apply environment variable overrides (RELIEF_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_overrides_from(config, |key| std::env::var(key).ok())
}

pub(crate) fn with_overrides_from(
    mut config: Config,
    lookup: impl Fn(&str) -> Option<String>,
) -> Config {
    // RELIEF_DATA_DIR
    if let Some(dir) = lookup("RELIEF_DATA_DIR").filter(|d| !d.is_empty()) {
        config.storage.data_dir = Some(PathBuf::from(dir));
    }

    // RELIEF_OUTPUT
    if let Some(format) = lookup("RELIEF_OUTPUT") {
        config.output.format = match format.to_lowercase().as_str() {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Table,
        };
    }

    // RELIEF_LOG_LEVEL
    if let Some(level) = lookup("RELIEF_LOG_LEVEL").filter(|l| !l.is_empty()) {
        config.log.level = level;
    }

    config
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("reliefdesk").join("config.toml"))
}

/// Every key `Config` understands, as a JSON object tree.
///
/// Taken from the serialized defaults so the list cannot drift from the
/// config types. Optional fields serialize as `null` and still appear.
fn known_keys() -> serde_json::Value {
    serde_json::to_value(Config::default()).unwrap_or_default()
}

fn unknown_key_warning(
    file: &Path,
    content: &str,
    known: &serde_json::Value,
    dotted: &str,
) -> ConfigWarning {
    let mut segments: Vec<&str> = dotted.split('.').collect();
    let key = segments.pop().unwrap_or(dotted);
    let siblings = segments
        .iter()
        .try_fold(known, |node, segment| node.get(*segment))
        .and_then(serde_json::Value::as_object);

    ConfigWarning {
        key: key.to_string(),
        file: file.to_path_buf(),
        line: find_line_number(content, key),
        suggestion: siblings
            .and_then(|keys| suggest_key(key, keys.keys().map(String::as_str))),
    }
}

/// 1-based line of the first `key = ...` assignment.
fn find_line_number(content: &str, key: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| {
            line.trim_start()
                .strip_prefix(key)
                .map_or(false, |rest| rest.trim_start().starts_with('='))
        })
        .map(|index| index + 1)
}

/// Closest known key within two edits. Ties go to the first candidate.
fn suggest_key<'a>(unknown: &str, candidates: impl Iterator<Item = &'a str>) -> Option<String> {
    candidates
        .map(|candidate| (candidate, edit_distance(unknown, candidate)))
        .filter(|(_, distance)| *distance <= 2)
        .min_by_key(|(_, distance)| *distance)
        .map(|(candidate, _)| candidate.to_string())
}

/// Levenshtein distance over chars, keeping a single row.
fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let above = row[j + 1];
            let substitution = diagonal + usize::from(ca != *cb);
            row[j + 1] = (above + 1).min(row[j] + 1).min(substitution);
            diagonal = above;
        }
    }

    row[b.len()]
}
