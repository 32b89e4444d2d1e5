//! Price alerts module.
//!
//! Resolves the alert threshold for each asset (per-asset override, else the
//! user's global threshold) and classifies price moves against it. The
//! evaluation itself is pure; the service only adds reading and writing the
//! user's thresholds through [`AlertSettingsRepositoryTrait`].

mod alerts_evaluator;
mod alerts_model;
mod alerts_service;
mod alerts_traits;

pub use alerts_evaluator::*;
pub use alerts_model::*;
pub use alerts_service::*;
pub use alerts_traits::*;
