use std::collections::HashMap;

use log::debug;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::PERCENT_DECIMAL_PRECISION;

use super::alerts_model::{AlertSettings, PriceChangeEvent, PricedAsset, ThresholdOverrides};

/// Effective threshold for an asset: its override if one exists, else the global one.
pub fn resolve_threshold(
    asset_id: &str,
    global_threshold: f64,
    overrides: &ThresholdOverrides,
) -> f64 {
    overrides.get(asset_id).copied().unwrap_or(global_threshold)
}

/// Signed percent change from `previous` to `current`, rounded to two
/// decimals with halves away from zero.
///
/// Returns `None` when there is no usable baseline: a zero or non-finite
/// previous price, or a non-finite current price.
pub fn percent_change(previous: f64, current: f64) -> Option<f64> {
    let previous = Decimal::from_f64(previous)?;
    let current = Decimal::from_f64(current)?;
    if previous.is_zero() {
        return None;
    }

    (current - previous)
        .checked_div(previous)?
        .checked_mul(Decimal::ONE_HUNDRED)?
        .round_dp_with_strategy(
            PERCENT_DECIMAL_PRECISION,
            RoundingStrategy::MidpointAwayFromZero,
        )
        .to_f64()
}

/// Compares current prices against the previous snapshot and returns the
/// moves whose magnitude reached the asset's threshold.
///
/// Assets without a previous price (or with a zero one) are skipped. Events
/// come out in the order of `current_assets`.
pub fn evaluate(
    previous_prices: &HashMap<String, f64>,
    current_assets: &[PricedAsset],
    global_threshold: f64,
    overrides: &ThresholdOverrides,
) -> Vec<PriceChangeEvent> {
    current_assets
        .iter()
        .filter_map(|asset| {
            let previous_price = match previous_prices.get(&asset.asset_id) {
                Some(price) => *price,
                None => {
                    debug!("No previous price for {}, skipping", asset.asset_id);
                    return None;
                }
            };

            let Some(change) = percent_change(previous_price, asset.price) else {
                debug!(
                    "Cannot compute change for {} ({} -> {}), skipping",
                    asset.asset_id, previous_price, asset.price
                );
                return None;
            };

            let threshold = resolve_threshold(&asset.asset_id, global_threshold, overrides);
            if change.abs() < threshold {
                return None;
            }

            Some(PriceChangeEvent {
                asset_id: asset.asset_id.clone(),
                asset_name: asset.name.clone(),
                category: asset.category,
                previous_price,
                current_price: asset.price,
                percent_change: change,
                threshold_used: threshold,
            })
        })
        .collect()
}

/// Alert evaluation bound to one user's resolved thresholds.
#[derive(Debug, Clone, PartialEq)]
pub struct AlertEvaluator {
    global_threshold: f64,
    overrides: ThresholdOverrides,
}

impl AlertEvaluator {
    pub fn new(global_threshold: f64, overrides: ThresholdOverrides) -> Self {
        Self {
            global_threshold,
            overrides,
        }
    }

    pub fn from_settings(settings: &AlertSettings, overrides: ThresholdOverrides) -> Self {
        Self::new(settings.global_threshold, overrides)
    }

    pub fn global_threshold(&self) -> f64 {
        self.global_threshold
    }

    pub fn threshold_for(&self, asset_id: &str) -> f64 {
        resolve_threshold(asset_id, self.global_threshold, &self.overrides)
    }

    pub fn evaluate(
        &self,
        previous_prices: &HashMap<String, f64>,
        current_assets: &[PricedAsset],
    ) -> Vec<PriceChangeEvent> {
        evaluate(
            previous_prices,
            current_assets,
            self.global_threshold,
            &self.overrides,
        )
    }
}

impl Default for AlertEvaluator {
    fn default() -> Self {
        Self::from_settings(&AlertSettings::default(), ThresholdOverrides::new())
    }
}
