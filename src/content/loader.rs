//! Loader for RON content files at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::*;

pub const LEVELS_FILE: &str = "levels.ron";
pub const DEFAULTS_FILE: &str = "gameplay_defaults.ron";

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for ContentLoadError {}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

fn read_file(path: &Path) -> Result<String, ContentLoadError> {
    fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: path.display().to_string(),
        message: format!("IO error: {}", e),
    })
}

/// Parse RON text containing a DataFile<T> wrapper.
pub fn parse_data_file<T>(contents: &str, file_name: &str) -> Result<Vec<T>, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let data: DataFile<T> = ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file_name.to_string(),
            message: format!("Parse error: {}", e),
        })?;

    Ok(data.items)
}

/// Parse RON text holding a single struct (not wrapped in DataFile).
pub fn parse_single_file<T>(contents: &str, file_name: &str) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file_name.to_string(),
            message: format!("Parse error: {}", e),
        })
}

fn load_data_file<T>(path: &Path) -> Result<Vec<T>, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let contents = read_file(path)?;
    parse_data_file(&contents, &path.display().to_string())
}

fn load_single_file<T>(path: &Path) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let contents = read_file(path)?;
    parse_single_file(&contents, &path.display().to_string())
}

/// Load the level list and gameplay defaults from `base_path`.
/// Returns every error encountered; both files are required.
pub fn load_all_content(
    base_path: &Path,
) -> Result<(Vec<LevelDef>, GameplayDefaults), Vec<ContentLoadError>> {
    let mut errors = Vec::new();

    let levels = load_data_file::<LevelDef>(&base_path.join(LEVELS_FILE))
        .map_err(|e| errors.push(e))
        .ok();
    let defaults = load_single_file::<GameplayDefaults>(&base_path.join(DEFAULTS_FILE))
        .map_err(|e| errors.push(e))
        .ok();

    match (levels, defaults) {
        (Some(levels), Some(defaults)) if errors.is_empty() => Ok((levels, defaults)),
        _ => Err(errors),
    }
}
