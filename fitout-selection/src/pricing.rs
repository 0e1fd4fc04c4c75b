use crate::state::SelectionState;
use fitout_catalog::Catalog;
use serde::{Deserialize, Serialize};

/// Total property price for the current selections, in euro cents.
/// Pure function of its inputs: unselected categories contribute zero,
/// negative deltas may bring the total below the base price.
pub fn compute_total(base_price_cents: i64, state: &SelectionState, catalog: &Catalog) -> i64 {
    let upgrade_total: i64 = catalog
        .categories()
        .iter()
        .filter_map(|category| {
            state
                .selection_for(&category.id)
                .and_then(|option_id| category.option(option_id))
        })
        .map(|option| option.price_delta_cents)
        .sum();

    base_price_cents + upgrade_total
}

/// One priced line of a quote: the chosen option within a category
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuoteLine {
    pub category_id: String,
    pub category_name: String,
    pub option_id: String,
    pub option_name: String,
    pub price_delta_cents: i64,
}

/// Display-ready price breakdown, separated from any rendering concern
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuoteBreakdown {
    pub base_price_cents: i64,
    pub lines: Vec<QuoteLine>,
    pub upgrade_total_cents: i64,
    pub total_cents: i64,
}

/// Build a full quote for the current selections. Lines follow catalog
/// order; unselected categories are omitted.
pub fn quote(base_price_cents: i64, state: &SelectionState, catalog: &Catalog) -> QuoteBreakdown {
    let lines: Vec<QuoteLine> = catalog
        .categories()
        .iter()
        .filter_map(|category| {
            let option_id = state.selection_for(&category.id)?;
            let option = category.option(option_id)?;
            Some(QuoteLine {
                category_id: category.id.clone(),
                category_name: category.name.clone(),
                option_id: option.id.clone(),
                option_name: option.name.clone(),
                price_delta_cents: option.price_delta_cents,
            })
        })
        .collect();

    let upgrade_total_cents: i64 = lines.iter().map(|l| l.price_delta_cents).sum();

    QuoteBreakdown {
        base_price_cents,
        lines,
        upgrade_total_cents,
        total_cents: base_price_cents + upgrade_total_cents,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitout_catalog::{UpgradeCategory, UpgradeOption};

    fn option(id: &str, delta: i64, is_default: bool) -> UpgradeOption {
        UpgradeOption {
            id: id.to_string(),
            name: id.to_string(),
            description: None,
            price_delta_cents: delta,
            is_default,
        }
    }

    fn sample_catalog() -> Catalog {
        Catalog::new(vec![
            UpgradeCategory {
                id: "flooring".to_string(),
                name: "Flooring Type".to_string(),
                description: None,
                options: vec![option("laminate", 0, true), option("oak", 350_000, false)],
            },
            UpgradeCategory {
                id: "kitchen".to_string(),
                name: "Kitchen Countertops".to_string(),
                description: None,
                options: vec![
                    option("standard", 0, true),
                    option("premium", 850_000, false),
                ],
            },
        ])
        .unwrap()
    }

    #[test]
    fn test_defaults_total_base_price() {
        let catalog = sample_catalog();
        let state = SelectionState::seeded(&catalog);
        assert_eq!(compute_total(30_000_000, &state, &catalog), 30_000_000);
    }

    #[test]
    fn test_upgrades_add_their_deltas() {
        let catalog = sample_catalog();
        let mut state = SelectionState::seeded(&catalog);

        state.select_option(&catalog, "flooring", "oak").unwrap();
        assert_eq!(compute_total(30_000_000, &state, &catalog), 30_350_000);

        state.select_option(&catalog, "kitchen", "premium").unwrap();
        assert_eq!(compute_total(30_000_000, &state, &catalog), 31_200_000);
    }

    #[test]
    fn test_compute_total_is_deterministic() {
        let catalog = sample_catalog();
        let mut state = SelectionState::seeded(&catalog);
        state.select_option(&catalog, "kitchen", "premium").unwrap();

        let first = compute_total(30_000_000, &state, &catalog);
        let second = compute_total(30_000_000, &state, &catalog);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_catalog_totals_base_price() {
        let catalog = Catalog::new(vec![]).unwrap();
        let state = SelectionState::seeded(&catalog);
        assert_eq!(compute_total(25_000_000, &state, &catalog), 25_000_000);
    }

    #[test]
    fn test_negative_delta_goes_below_base() {
        let catalog = Catalog::new(vec![UpgradeCategory {
            id: "kitchen".to_string(),
            name: "Kitchen".to_string(),
            description: None,
            options: vec![option("standard", 0, true), option("downgrade", -120_000, false)],
        }])
        .unwrap();

        let mut state = SelectionState::seeded(&catalog);
        state
            .select_option(&catalog, "kitchen", "downgrade")
            .unwrap();
        assert_eq!(compute_total(30_000_000, &state, &catalog), 29_880_000);
    }

    #[test]
    fn test_quote_matches_compute_total() {
        let catalog = sample_catalog();
        let mut state = SelectionState::seeded(&catalog);
        state.select_option(&catalog, "flooring", "oak").unwrap();

        let breakdown = quote(30_000_000, &state, &catalog);
        assert_eq!(
            breakdown.total_cents,
            compute_total(30_000_000, &state, &catalog)
        );
        assert_eq!(breakdown.upgrade_total_cents, 350_000);
        assert_eq!(breakdown.lines.len(), 2);
        assert_eq!(breakdown.lines[0].category_id, "flooring");
        assert_eq!(breakdown.lines[0].option_name, "oak");
    }
}
