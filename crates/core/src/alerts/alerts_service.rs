use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, info};

use crate::errors::{Result, ValidationError};

use super::alerts_evaluator::AlertEvaluator;
use super::alerts_model::{
    collect_overrides, validate_threshold, AlertSettings, AssetAlertThreshold, PriceChangeEvent,
    PricedAsset,
};
use super::alerts_traits::{AlertServiceTrait, AlertSettingsRepositoryTrait};

pub struct AlertService {
    repository: Arc<dyn AlertSettingsRepositoryTrait>,
}

impl AlertService {
    pub fn new(repository: Arc<dyn AlertSettingsRepositoryTrait>) -> Self {
        AlertService { repository }
    }

    /// Snapshot of the stored settings and overrides.
    fn load_evaluator(&self) -> Result<AlertEvaluator> {
        let settings = self.get_settings()?;
        let thresholds = self.repository.list_asset_thresholds()?;
        Ok(AlertEvaluator::from_settings(
            &settings,
            collect_overrides(&thresholds),
        ))
    }

    fn require_asset_id(asset_id: &str) -> Result<&str> {
        let trimmed = asset_id.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::MissingField("asset_id".to_string()).into());
        }
        Ok(trimmed)
    }
}

#[async_trait]
impl AlertServiceTrait for AlertService {
    fn get_settings(&self) -> Result<AlertSettings> {
        Ok(self.repository.get_settings()?.unwrap_or_default())
    }

    fn global_threshold(&self) -> Result<f64> {
        Ok(self.get_settings()?.global_threshold)
    }

    async fn update_global_threshold(&self, threshold: f64) -> Result<AlertSettings> {
        let global_threshold = validate_threshold(threshold)?;
        debug!("Updating global alert threshold to {}%", global_threshold);
        self.repository
            .upsert_settings(AlertSettings { global_threshold })
            .await
    }

    fn get_asset_thresholds(&self) -> Result<Vec<AssetAlertThreshold>> {
        self.repository.list_asset_thresholds()
    }

    async fn set_asset_threshold(
        &self,
        asset_id: &str,
        threshold: f64,
    ) -> Result<AssetAlertThreshold> {
        let asset_id = Self::require_asset_id(asset_id)?;
        let threshold = validate_threshold(threshold)?;
        debug!("Setting alert threshold for {} to {}%", asset_id, threshold);
        self.repository
            .upsert_asset_threshold(AssetAlertThreshold::new(asset_id, threshold))
            .await
    }

    async fn remove_asset_threshold(&self, asset_id: &str) -> Result<()> {
        let asset_id = Self::require_asset_id(asset_id)?;
        debug!(
            "Removing alert threshold for {}; global threshold applies",
            asset_id
        );
        self.repository.delete_asset_threshold(asset_id).await
    }

    fn threshold_for(&self, asset_id: &str) -> Result<f64> {
        Ok(self.load_evaluator()?.threshold_for(asset_id))
    }

    fn check_price_alerts(
        &self,
        previous_prices: &HashMap<String, f64>,
        current_assets: &[PricedAsset],
    ) -> Result<Vec<PriceChangeEvent>> {
        let evaluator = self.load_evaluator()?;
        let events = evaluator.evaluate(previous_prices, current_assets);
        if !events.is_empty() {
            info!(
                "{} of {} assets crossed their alert threshold",
                events.len(),
                current_assets.len()
            );
        }
        Ok(events)
    }
}
