//! Directory models
//!
//! - `category` - Instrument categories (AssetCategory) and lookup filters (CategoryFilter)
//! - `asset_record` - A single directory entry (AssetRecord)

mod asset_record;
mod category;

pub use asset_record::AssetRecord;
pub use category::{AssetCategory, CategoryFilter};
