//! Carteira Core - Price alert domain models, evaluation and services.
//!
//! This crate contains the alerting logic of the Carteira investment
//! tracker. It is storage-agnostic: user thresholds are read and written
//! through [`alerts::AlertSettingsRepositoryTrait`], implemented by the host
//! application.

pub mod alerts;
pub mod constants;
pub mod errors;

pub use alerts::*;

// Re-export the instrument directory for callers that only depend on core
pub use carteira_market_data as market_data;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
