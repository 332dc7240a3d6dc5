//! Profile file loading
//!
//! A profile file holds the same fields as the profile form, in TOML or JSON.
//! The format is chosen by file extension.

use crate::error::{AppError, AppResult};
use fitness_planner_shared::validation::RawProfileForm;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileFileFormat {
    Toml,
    Json,
}

impl ProfileFileFormat {
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("toml") => Ok(ProfileFileFormat::Toml),
            Some("json") => Ok(ProfileFileFormat::Json),
            _ => Err(AppError::UnsupportedProfileFormat(
                path.display().to_string(),
            )),
        }
    }
}

pub struct ProfileService;

impl ProfileService {
    pub fn load_file(path: &Path) -> AppResult<RawProfileForm> {
        let format = ProfileFileFormat::from_path(path)?;
        let contents = std::fs::read_to_string(path)?;
        debug!(path = %path.display(), ?format, "Loading profile file");
        Self::parse(&contents, format)
    }

    /// Missing fields keep their form defaults
    pub fn parse(contents: &str, format: ProfileFileFormat) -> AppResult<RawProfileForm> {
        let form = match format {
            ProfileFileFormat::Toml => toml::from_str(contents)?,
            ProfileFileFormat::Json => serde_json::from_str(contents)?,
        };
        Ok(form)
    }
}
