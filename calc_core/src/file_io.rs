//! # File I/O Module
//!
//! Reading and writing the two file kinds the engine understands:
//! - **Ratings files** (`.toml`): equipment ratings, see [`crate::ratings`]
//! - **Request files** (`.json`): one [`CalculationRequest`]
//!
//! Ratings are saved atomically: written to a `.tmp` sibling, synced, then
//! renamed over the target.
//!
//! ## Example
//!
//! ```rust,no_run
//! use calc_core::file_io::{load_ratings, save_ratings};
//! use calc_core::ratings::EquipmentRatings;
//! use std::path::Path;
//!
//! let path = Path::new("substation.toml");
//! save_ratings(&EquipmentRatings::default(), path).unwrap();
//! let ratings = load_ratings(path).unwrap();
//! ```

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::calculations::CalculationRequest;
use crate::errors::{CalcError, CalcResult};
use crate::ratings::EquipmentRatings;

/// Load and validate equipment ratings from a TOML file.
///
/// # Returns
///
/// * `Ok(EquipmentRatings)` - Ratings with defaults for anything not named
/// * `Err(CalcError::InvalidRating)` - A rating is unusable
/// * `Err(CalcError::SerializationError)` - Invalid TOML
/// * `Err(CalcError::FileError)` - I/O error
pub fn load_ratings(path: &Path) -> CalcResult<EquipmentRatings> {
    let contents = read_file(path)?;
    let ratings = EquipmentRatings::from_toml_str(&contents).map_err(|e| match e {
        CalcError::SerializationError { reason } => {
            CalcError::serialization(format!("{} ({})", reason, path.display()))
        }
        other => other,
    })?;
    debug!(path = %path.display(), "loaded equipment ratings");
    Ok(ratings)
}

/// Save equipment ratings to a TOML file using an atomic write.
pub fn save_ratings(ratings: &EquipmentRatings, path: &Path) -> CalcResult<()> {
    let text = ratings.to_toml_string()?;

    let tmp_path = path.with_extension("toml.tmp");

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(text.as_bytes()).map_err(|e| {
        CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        CalcError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        // Clean up temp file if rename fails
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    Ok(())
}

/// Load a calculation request from a JSON file.
pub fn load_request(path: &Path) -> CalcResult<CalculationRequest> {
    let contents = read_file(path)?;
    CalculationRequest::from_json(&contents)
}

fn read_file(path: &Path) -> CalcResult<String> {
    fs::read_to_string(path)
        .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))
}
