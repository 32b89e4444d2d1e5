//! Directory record model.

use serde::{Deserialize, Serialize};

use super::AssetCategory;

/// One tradable instrument in the asset directory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetRecord {
    /// Ticker symbol (e.g., "PETR4", "HGLG11", "TESOURO SELIC")
    pub ticker: String,

    /// Human-readable name (e.g., "Petrobras PN")
    #[serde(rename = "name")]
    pub display_name: String,

    pub category: AssetCategory,
}

impl AssetRecord {
    pub fn new(
        ticker: impl Into<String>,
        display_name: impl Into<String>,
        category: AssetCategory,
    ) -> Self {
        Self {
            ticker: ticker.into(),
            display_name: display_name.into(),
            category,
        }
    }
}
