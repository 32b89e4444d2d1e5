//! Asset directory: reference table of B3 instruments.
//!
//! The table is compiled into the binary from `assets.json` and parsed on
//! first use. It answers two questions for ticker inputs:
//!
//! - "what matches this partial query" ([`AssetDirectory::search`])
//! - "does this ticker exist" ([`AssetDirectory::validate`])
//!
//! Searches are accent-insensitive on the display name, since instrument
//! names are written both with and without diacritics ("Itaú" / "Itau").

mod asset_directory;
mod catalog;
mod text;


pub use asset_directory::{
    asset_category_by_ticker, search_assets, validate_ticker, AssetDirectory, TickerCheck,
    MAX_SEARCH_RESULTS, MIN_QUERY_LENGTH,
};
pub use text::{normalize_query, strip_diacritics};
