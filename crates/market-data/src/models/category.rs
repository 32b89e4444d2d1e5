use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::DirectoryError;

/// Instrument category of a directory record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetCategory {
    Equity,             // Ações
    RealEstateFund,     // FIIs
    TreasuryBond,       // Tesouro Direto
    FixedIncome,        // CDB, LCI, LCA, debentures
    Cryptocurrency,     // Criptomoedas
    ExchangeTradedFund, // ETFs listed on B3
}

impl AssetCategory {
    pub const ALL: [AssetCategory; 6] = [
        AssetCategory::Equity,
        AssetCategory::RealEstateFund,
        AssetCategory::TreasuryBond,
        AssetCategory::FixedIncome,
        AssetCategory::Cryptocurrency,
        AssetCategory::ExchangeTradedFund,
    ];

    /// Returns the storage string representation (SCREAMING_SNAKE_CASE).
    pub const fn as_db_str(&self) -> &'static str {
        match self {
            AssetCategory::Equity => "EQUITY",
            AssetCategory::RealEstateFund => "REAL_ESTATE_FUND",
            AssetCategory::TreasuryBond => "TREASURY_BOND",
            AssetCategory::FixedIncome => "FIXED_INCOME",
            AssetCategory::Cryptocurrency => "CRYPTOCURRENCY",
            AssetCategory::ExchangeTradedFund => "EXCHANGE_TRADED_FUND",
        }
    }

    /// Parses a category from its storage string.
    pub fn from_db_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_db_str() == s)
    }

    /// Label used by the B3 market and brokers for this category.
    pub const fn market_label(&self) -> &'static str {
        match self {
            AssetCategory::Equity => "Ações",
            AssetCategory::RealEstateFund => "FIIs",
            AssetCategory::TreasuryBond => "Tesouro Direto",
            AssetCategory::FixedIncome => "Renda Fixa",
            AssetCategory::Cryptocurrency => "Criptomoedas",
            AssetCategory::ExchangeTradedFund => "ETF",
        }
    }
}

impl fmt::Display for AssetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_db_str())
    }
}

impl FromStr for AssetCategory {
    type Err = DirectoryError;

    /// Accepts the storage string or the market label, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_uppercase();
        Self::ALL
            .into_iter()
            .find(|c| c.as_db_str() == wanted || c.market_label().to_uppercase() == wanted)
            .ok_or_else(|| DirectoryError::UnknownCategory(s.to_string()))
    }
}

/// Restricts directory lookups to one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(AssetCategory),
}

impl CategoryFilter {
    /// Sentinel accepted from callers to mean "no filter".
    pub const ALL_SENTINEL: &'static str = "all";

    /// Parses an optional caller-supplied category.
    ///
    /// `None`, an empty string and `"all"` mean no filtering.
    pub fn parse(value: Option<&str>) -> Result<Self, DirectoryError> {
        match value.map(str::trim) {
            None | Some("") => Ok(CategoryFilter::All),
            Some(v) if v.eq_ignore_ascii_case(Self::ALL_SENTINEL) => Ok(CategoryFilter::All),
            Some(v) => v.parse().map(CategoryFilter::Only),
        }
    }

    pub fn matches(&self, category: AssetCategory) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
        }
    }
}

impl From<AssetCategory> for CategoryFilter {
    fn from(category: AssetCategory) -> Self {
        CategoryFilter::Only(category)
    }
}

impl From<Option<AssetCategory>> for CategoryFilter {
    fn from(category: Option<AssetCategory>) -> Self {
        category.map_or(CategoryFilter::All, CategoryFilter::Only)
    }
}
