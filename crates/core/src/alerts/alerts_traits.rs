use std::collections::HashMap;

use async_trait::async_trait;

use crate::alerts::alerts_model::{
    AlertSettings, AssetAlertThreshold, PriceChangeEvent, PricedAsset,
};
use crate::errors::Result;

/// Trait for alert settings repository operations.
///
/// Storage is owned by the host application; upserts are keyed by user
/// (settings) and by asset id (thresholds).
#[async_trait]
pub trait AlertSettingsRepositoryTrait: Send + Sync {
    /// Stored settings, or `None` if the user never saved any.
    fn get_settings(&self) -> Result<Option<AlertSettings>>;
    async fn upsert_settings(&self, settings: AlertSettings) -> Result<AlertSettings>;
    fn list_asset_thresholds(&self) -> Result<Vec<AssetAlertThreshold>>;
    async fn upsert_asset_threshold(
        &self,
        threshold: AssetAlertThreshold,
    ) -> Result<AssetAlertThreshold>;
    async fn delete_asset_threshold(&self, asset_id: &str) -> Result<()>;
}

/// Trait for alert service operations
#[async_trait]
pub trait AlertServiceTrait: Send + Sync {
    fn get_settings(&self) -> Result<AlertSettings>;
    fn global_threshold(&self) -> Result<f64>;
    async fn update_global_threshold(&self, threshold: f64) -> Result<AlertSettings>;
    fn get_asset_thresholds(&self) -> Result<Vec<AssetAlertThreshold>>;
    async fn set_asset_threshold(
        &self,
        asset_id: &str,
        threshold: f64,
    ) -> Result<AssetAlertThreshold>;
    async fn remove_asset_threshold(&self, asset_id: &str) -> Result<()>;
    fn threshold_for(&self, asset_id: &str) -> Result<f64>;
    fn check_price_alerts(
        &self,
        previous_prices: &HashMap<String, f64>,
        current_assets: &[PricedAsset],
    ) -> Result<Vec<PriceChangeEvent>>;
}
