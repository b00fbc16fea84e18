// Food ordering: per-room tally of ordered items

use std::collections::BTreeMap;

use crate::error::OrderError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoodOrder {
    // item name -> accumulated quantity, name order keeps the bill stable
    items: BTreeMap<String, u32>,
}

impl FoodOrder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_item(&mut self, item: &str, quantity: u32) -> Result<(), OrderError> {
        let item = item.trim();
        if item.is_empty() {
            return Err(OrderError::EmptyItem);
        }
        if quantity == 0 {
            return Err(OrderError::ZeroQuantity(item.to_string()));
        }

        let entry = self.items.entry(item.to_string()).or_insert(0);
        *entry = entry.saturating_add(quantity);
        Ok(())
    }

    pub fn quantity(&self, item: &str) -> u32 {
        self.items.get(item).copied().unwrap_or(0)
    }

    pub fn lines(&self) -> impl Iterator<Item = (&str, u32)> {
        self.items.iter().map(|(item, qty)| (item.as_str(), *qty))
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantities_accumulate() {
        let mut order = FoodOrder::new();
        order.add_item("pasta", 2).unwrap();
        order.add_item("coffee", 1).unwrap();
        order.add_item("pasta", 3).unwrap();

        assert_eq!(order.quantity("pasta"), 5);
        assert_eq!(order.quantity("tea"), 0);
        assert_eq!(
            order.lines().collect::<Vec<_>>(),
            vec![("coffee", 1), ("pasta", 5)]
        );
    }

    #[test]
    fn test_rejects_bad_lines() {
        let mut order = FoodOrder::new();

        assert_eq!(order.add_item("  ", 1), Err(OrderError::EmptyItem));
        assert_eq!(
            order.add_item("soup", 0),
            Err(OrderError::ZeroQuantity("soup".to_string()))
        );
        assert!(order.is_empty());
    }
}
