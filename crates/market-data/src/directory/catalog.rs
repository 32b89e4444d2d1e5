//! JSON-driven instrument catalog.
//!
//! Loads `assets.json` at compile time via `include_str!` and builds the
//! shared directory once via `lazy_static`.

use lazy_static::lazy_static;
use log::debug;
use serde::Deserialize;

use crate::errors::DirectoryError;
use crate::models::AssetRecord;

use super::AssetDirectory;

// ── JSON schema ──────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub(crate) struct AssetCatalog {
    pub assets: Vec<AssetRecord>,
}

impl AssetCatalog {
    pub(crate) fn parse(json: &str) -> Result<Self, DirectoryError> {
        Ok(serde_json::from_str(json)?)
    }
}

// ── Shared directory ─────────────────────────────────────────────────────────

const EMBEDDED_CATALOG: &str = include_str!("assets.json");

lazy_static! {
    pub(crate) static ref DIRECTORY: AssetDirectory = load_embedded();
}

fn load_embedded() -> AssetDirectory {
    let catalog = AssetCatalog::parse(EMBEDDED_CATALOG).expect("assets.json must be valid");
    let directory = AssetDirectory::from_records(catalog.assets)
        .expect("assets.json must not contain duplicate tickers");
    debug!("Loaded asset directory with {} records", directory.len());
    directory
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AssetCategory;

    #[test]
    fn test_embedded_catalog_parses() {
        let catalog = AssetCatalog::parse(EMBEDDED_CATALOG).unwrap();
        assert!(catalog.assets.len() > 150);
        assert_eq!(catalog.assets[0].ticker, "PETR4");
        assert_eq!(catalog.assets[0].display_name, "Petrobras PN");
        assert_eq!(catalog.assets[0].category, AssetCategory::Equity);
    }

    #[test]
    fn test_embedded_catalog_covers_every_category() {
        let catalog = AssetCatalog::parse(EMBEDDED_CATALOG).unwrap();
        for category in AssetCategory::ALL {
            assert!(
                catalog.assets.iter().any(|a| a.category == category),
                "no record for {category}"
            );
        }
    }

    #[test]
    fn test_rejects_unknown_category() {
        let json = r#"{"assets":[{"ticker":"X1","name":"X","category":"OPTION"}]}"#;
        assert!(matches!(
            AssetCatalog::parse(json),
            Err(DirectoryError::InvalidCatalog(_))
        ));
    }
}
