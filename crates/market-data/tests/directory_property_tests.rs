//! Property-based integration tests for the asset directory.
//!
//! These tests verify that search and validation invariants hold across
//! random inputs, using the `proptest` crate for test case generation.

use proptest::prelude::*;

use carteira_market_data::{
    AssetCategory, AssetDirectory, AssetRecord, CategoryFilter, MAX_SEARCH_RESULTS,
    MIN_QUERY_LENGTH,
};

// =============================================================================
// Generators
// =============================================================================

fn arb_category() -> impl Strategy<Value = AssetCategory> {
    prop_oneof![
        Just(AssetCategory::Equity),
        Just(AssetCategory::RealEstateFund),
        Just(AssetCategory::TreasuryBond),
        Just(AssetCategory::FixedIncome),
        Just(AssetCategory::Cryptocurrency),
        Just(AssetCategory::ExchangeTradedFund),
    ]
}

fn arb_filter() -> impl Strategy<Value = CategoryFilter> {
    proptest::option::of(arb_category()).prop_map(CategoryFilter::from)
}

/// Short free-text queries, including accented letters and padding.
fn arb_query() -> impl Strategy<Value = String> {
    "[ a-zA-Z0-9çãéúÍô+]{0,8}"
}

fn arb_record_index() -> impl Strategy<Value = usize> {
    0..AssetDirectory::global().len()
}

fn record_at(index: usize) -> &'static AssetRecord {
    AssetDirectory::global().records().nth(index).unwrap()
}

fn mixed_case(input: &str, mask: u64) -> String {
    input
        .chars()
        .enumerate()
        .map(|(i, c)| {
            if mask >> (i % 64) & 1 == 1 {
                c.to_lowercase().collect::<String>()
            } else {
                c.to_string()
            }
        })
        .collect()
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Queries shorter than the minimum length never match.
    #[test]
    fn prop_short_queries_return_nothing(query in "[ a-zA-Zé]{0,1}", pad in " {0,3}", filter in arb_filter()) {
        let padded = format!("{pad}{query}{pad}");
        prop_assume!(padded.trim().chars().count() < MIN_QUERY_LENGTH);
        prop_assert!(AssetDirectory::global().search(&padded, filter).is_empty());
    }

    /// Results are capped, filtered and in directory order.
    #[test]
    fn prop_search_results_are_bounded_filtered_and_ordered(query in arb_query(), filter in arb_filter()) {
        let directory = AssetDirectory::global();
        let results = directory.search(&query, filter);

        prop_assert!(results.len() <= MAX_SEARCH_RESULTS);
        for record in &results {
            prop_assert!(filter.matches(record.category));
        }

        let positions: Vec<usize> = results
            .iter()
            .map(|r| directory.records().position(|d| d.ticker == r.ticker).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    /// Search is a pure read: repeating it yields the same records.
    #[test]
    fn prop_search_is_repeatable(query in arb_query(), filter in arb_filter()) {
        let directory = AssetDirectory::global();
        prop_assert_eq!(directory.search(&query, filter), directory.search(&query, filter));
    }

    /// Every ticker validates to its own record regardless of input case.
    #[test]
    fn prop_validate_ignores_case(index in arb_record_index(), mask in any::<u64>(), pad in " {0,2}") {
        let record = record_at(index);
        let input = format!("{pad}{}{pad}", mixed_case(&record.ticker, mask));
        prop_assert_eq!(AssetDirectory::global().validate(&input, CategoryFilter::All), Some(record));
    }

    /// A record's own ticker finds it, unless the result list is already full.
    #[test]
    fn prop_search_finds_record_by_ticker(index in arb_record_index()) {
        let record = record_at(index);
        prop_assume!(record.ticker.chars().count() >= MIN_QUERY_LENGTH);

        let results = AssetDirectory::global().search(&record.ticker, CategoryFilter::Only(record.category));
        prop_assert!(results.contains(&record) || results.len() == MAX_SEARCH_RESULTS);
    }
}
