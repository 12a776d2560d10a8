use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{MealError, Result};
use crate::state::Catalog;

/// Encode a catalog as the pretty-printed `{"meals": [...]}` document.
///
/// JSON has no representation for infinite or NaN numbers, so any such
/// amount or price is rejected instead of being written as `null`.
pub fn encode_catalog(catalog: &Catalog) -> Result<String> {
    check_finite(catalog)?;
    Ok(serde_json::to_string_pretty(catalog)?)
}

fn check_finite(catalog: &Catalog) -> Result<()> {
    for meal in catalog.meals() {
        for ing in meal.ingredients() {
            if !ing.amount().is_finite() || !ing.price_per_unit().is_finite() {
                return Err(MealError::InvalidInput(format!(
                    "{} in {} has a non-finite amount or price",
                    ing.name(),
                    meal.name()
                )));
            }
        }
    }
    Ok(())
}

/// Decode a `{"meals": [...]}` document.
///
/// Fails as a whole on any malformed meal or ingredient; no partial catalog
/// is returned.
pub fn decode_catalog(json: &str) -> Result<Catalog> {
    Ok(serde_json::from_str(json)?)
}

/// Load a catalog from a JSON file.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let catalog = decode_catalog(&content)?;
    debug!("loaded {} meals from {}", catalog.len(), path.display());
    Ok(catalog)
}

/// Save a catalog to a JSON file.
///
/// The document is written to a sibling `.tmp` file first and renamed over
/// the target, so an interrupted save leaves the previous file intact.
pub fn save_catalog<P: AsRef<Path>>(path: P, catalog: &Catalog) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let json = encode_catalog(catalog)?;
    let tmp = tmp_path(path);
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;

    debug!("saved {} meals to {}", catalog.len(), path.display());
    Ok(())
}

/// Write an empty catalog for first-time setup.
///
/// Refuses to overwrite an existing file unless `force` is set.
pub fn init_catalog<P: AsRef<Path>>(path: P, force: bool) -> Result<()> {
    let path = path.as_ref();
    if path.exists() && !force {
        return Err(MealError::DataFileExists(path.to_path_buf()));
    }
    save_catalog(path, &Catalog::default())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}
