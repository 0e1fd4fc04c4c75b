use crate::furniture::FurnitureItem;
use serde::{Deserialize, Serialize};

/// Marketplace browse filter. All criteria are optional; an empty filter
/// matches every item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemFilter {
    pub room: Option<String>,
    pub supplier: Option<String>,
    pub min_price_cents: Option<i64>,
    pub max_price_cents: Option<i64>,
    /// Case-insensitive match against item name or description
    pub query: Option<String>,
}

impl ItemFilter {
    pub fn matches(&self, item: &FurnitureItem) -> bool {
        if let Some(room) = &self.room {
            if &item.room != room {
                return false;
            }
        }
        if let Some(supplier) = &self.supplier {
            if &item.supplier != supplier {
                return false;
            }
        }
        if let Some(min) = self.min_price_cents {
            if item.price_cents < min {
                return false;
            }
        }
        if let Some(max) = self.max_price_cents {
            if item.price_cents > max {
                return false;
            }
        }
        if let Some(query) = &self.query {
            let query = query.to_lowercase();
            let in_name = item.name.to_lowercase().contains(&query);
            let in_description = item
                .description
                .as_ref()
                .is_some_and(|d| d.to_lowercase().contains(&query));
            if !in_name && !in_description {
                return false;
            }
        }
        true
    }

    /// Apply the filter to an item list, preserving catalog order
    pub fn apply<'a>(&self, items: &'a [FurnitureItem]) -> Vec<&'a FurnitureItem> {
        items.iter().filter(|i| self.matches(i)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, name: &str, room: &str, supplier: &str, price: i64) -> FurnitureItem {
        FurnitureItem {
            id: id.to_string(),
            name: name.to_string(),
            room: room.to_string(),
            price_cents: price,
            description: Some(format!("{name} with premium finish.")),
            supplier: supplier.to_string(),
            in_stock: true,
            delivery_time: None,
        }
    }

    fn sample_items() -> Vec<FurnitureItem> {
        vec![
            item("f1", "Modern Sofa", "living", "Premium Home", 129_900),
            item("f2", "Dining Table Set", "dining", "Oak Designs", 89_900),
            item("f3", "King Size Bed", "bedroom", "Sleep Haven", 149_900),
        ]
    }

    #[test]
    fn test_empty_filter_matches_all() {
        let items = sample_items();
        assert_eq!(ItemFilter::default().apply(&items).len(), 3);
    }

    #[test]
    fn test_room_filter() {
        let items = sample_items();
        let filter = ItemFilter {
            room: Some("dining".to_string()),
            ..Default::default()
        };
        let matched = filter.apply(&items);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, "f2");
    }

    #[test]
    fn test_price_range_filter() {
        let items = sample_items();
        let filter = ItemFilter {
            min_price_cents: Some(100_000),
            max_price_cents: Some(140_000),
            ..Default::default()
        };
        let matched = filter.apply(&items);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, "f1");
    }

    #[test]
    fn test_query_matches_name_or_description() {
        let items = sample_items();

        let by_name = ItemFilter {
            query: Some("sofa".to_string()),
            ..Default::default()
        };
        assert_eq!(by_name.apply(&items)[0].id, "f1");

        let by_description = ItemFilter {
            query: Some("PREMIUM FINISH".to_string()),
            ..Default::default()
        };
        assert_eq!(by_description.apply(&items).len(), 3);
    }

    #[test]
    fn test_combined_filters() {
        let items = sample_items();
        let filter = ItemFilter {
            room: Some("bedroom".to_string()),
            supplier: Some("Oak Designs".to_string()),
            ..Default::default()
        };
        assert!(filter.apply(&items).is_empty());
    }
}
