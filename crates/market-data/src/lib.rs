//! Carteira Market Data Crate
//!
//! Reference data about tradable instruments for the Carteira investment
//! tracker.
//!
//! # Overview
//!
//! The crate ships a directory of B3 instruments (equities, real-estate
//! funds, ETFs, treasury bonds, fixed income products, cryptocurrencies)
//! compiled in from a JSON catalog, and exposes two read-only lookups over it:
//!
//! - fuzzy, accent-insensitive search by ticker or name
//! - exact ticker validation
//!
//! Both optionally restrict candidates to one [`AssetCategory`].
//!
//! # Core Types
//!
//! - [`AssetDirectory`] - The immutable instrument table
//! - [`AssetRecord`] - One instrument (ticker, name, category)
//! - [`AssetCategory`] - Instrument category
//! - [`CategoryFilter`] - Optional category restriction for lookups
//! - [`TickerCheck`] - Verdict on ticker input as it is typed

pub mod directory;
pub mod errors;
pub mod models;

pub use directory::{
    asset_category_by_ticker, search_assets, validate_ticker, AssetDirectory, TickerCheck,
    MAX_SEARCH_RESULTS, MIN_QUERY_LENGTH,
};
pub use errors::DirectoryError;
pub use models::{AssetCategory, AssetRecord, CategoryFilter};
