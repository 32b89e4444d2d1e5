//! Price alert domain models.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use carteira_market_data::AssetCategory;

use crate::constants::{DEFAULT_GLOBAL_THRESHOLD, MAX_THRESHOLD, MIN_THRESHOLD_EXCLUSIVE};
use crate::errors::{Result, ValidationError};

/// Per-asset threshold overrides, keyed by asset id.
pub type ThresholdOverrides = HashMap<String, f64>;

/// User-level alert configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertSettings {
    /// Percent move that triggers an alert when no override exists
    pub global_threshold: f64,
}

impl Default for AlertSettings {
    fn default() -> Self {
        Self {
            global_threshold: DEFAULT_GLOBAL_THRESHOLD,
        }
    }
}

/// Threshold configured for a single asset, replacing the global one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetAlertThreshold {
    pub asset_id: String,
    pub threshold: f64,
}

impl AssetAlertThreshold {
    pub fn new(asset_id: impl Into<String>, threshold: f64) -> Self {
        Self {
            asset_id: asset_id.into(),
            threshold,
        }
    }
}

/// Builds the override lookup from stored per-asset thresholds.
/// A later entry for the same asset replaces an earlier one.
pub fn collect_overrides<'a>(
    thresholds: impl IntoIterator<Item = &'a AssetAlertThreshold>,
) -> ThresholdOverrides {
    thresholds
        .into_iter()
        .map(|t| (t.asset_id.clone(), t.threshold))
        .collect()
}

/// An asset with its latest observed price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricedAsset {
    pub asset_id: String,
    pub name: String,
    pub category: AssetCategory,
    pub price: f64,
}

impl PricedAsset {
    pub fn new(
        asset_id: impl Into<String>,
        name: impl Into<String>,
        category: AssetCategory,
        price: f64,
    ) -> Self {
        Self {
            asset_id: asset_id.into(),
            name: name.into(),
            category,
            price,
        }
    }
}

/// A price move that reached its alert threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceChangeEvent {
    pub asset_id: String,
    pub asset_name: String,
    pub category: AssetCategory,
    pub previous_price: f64,
    pub current_price: f64,
    /// Signed change in percent, rounded to two decimals
    pub percent_change: f64,
    pub threshold_used: f64,
}

impl PriceChangeEvent {
    pub fn is_increase(&self) -> bool {
        self.percent_change > 0.0
    }
}

/// Checks a user-entered threshold: finite, above 0% and at most 100%.
pub fn validate_threshold(value: f64) -> Result<f64> {
    if value.is_finite() && value > MIN_THRESHOLD_EXCLUSIVE && value <= MAX_THRESHOLD {
        Ok(value)
    } else {
        Err(ValidationError::InvalidThreshold {
            value,
            min: MIN_THRESHOLD_EXCLUSIVE,
            max: MAX_THRESHOLD,
        }
        .into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;

    #[test]
    fn test_default_settings() {
        assert_eq!(AlertSettings::default().global_threshold, 5.0);
    }

    #[test]
    fn test_settings_serialization() {
        let json = serde_json::to_string(&AlertSettings {
            global_threshold: 2.5,
        })
        .unwrap();
        assert_eq!(json, r#"{"globalThreshold":2.5}"#);
    }

    #[test]
    fn test_event_serialization() {
        let event = PriceChangeEvent {
            asset_id: "inv-1".to_string(),
            asset_name: "Vale ON".to_string(),
            category: AssetCategory::Equity,
            previous_price: 60.0,
            current_price: 57.0,
            percent_change: -5.0,
            threshold_used: 5.0,
        };
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["assetId"], "inv-1");
        assert_eq!(value["category"], "EQUITY");
        assert_eq!(value["percentChange"], -5.0);
        assert_eq!(value["thresholdUsed"], 5.0);
        assert!(!event.is_increase());
    }

    #[test]
    fn test_collect_overrides_last_wins() {
        let stored = vec![
            AssetAlertThreshold::new("a", 2.0),
            AssetAlertThreshold::new("b", 7.5),
            AssetAlertThreshold::new("a", 3.0),
        ];
        let overrides = collect_overrides(&stored);
        assert_eq!(overrides.len(), 2);
        assert_eq!(overrides["a"], 3.0);
        assert_eq!(overrides["b"], 7.5);
    }

    #[test]
    fn test_validate_threshold_accepts_range() {
        assert_eq!(validate_threshold(0.01).unwrap(), 0.01);
        assert_eq!(validate_threshold(5.0).unwrap(), 5.0);
        assert_eq!(validate_threshold(100.0).unwrap(), 100.0);
    }

    #[test]
    fn test_validate_threshold_rejects_out_of_range() {
        for value in [0.0, -1.0, 100.5, f64::NAN, f64::INFINITY] {
            match validate_threshold(value) {
                Err(Error::Validation(ValidationError::InvalidThreshold { min, max, .. })) => {
                    assert_eq!(min, 0.0);
                    assert_eq!(max, 100.0);
                }
                other => panic!("expected invalid threshold for {value}, got {:?}", other),
            }
        }
    }
}
