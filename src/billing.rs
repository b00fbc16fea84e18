// Bill generation at checkout

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{food::FoodOrder, guest::Guest};

#[derive(Debug, Clone, Serialize)]
pub struct BillLine {
    pub item: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct Bill {
    pub guest_name: String,
    pub room_charge: u64,
    pub food: Vec<BillLine>,
    pub food_service_charge: u64,
    pub total: u64,
    pub issued_at: DateTime<Utc>,
}

impl Bill {
    // Food is itemised but not priced; it is covered by the flat service charge
    pub fn generate(
        guest: &Guest,
        room_charge: u64,
        food_order: &FoodOrder,
        food_service_charge: u64,
    ) -> Self {
        let food = food_order
            .lines()
            .map(|(item, quantity)| BillLine {
                item: item.to_string(),
                quantity,
            })
            .collect();

        Self {
            guest_name: guest.name().to_string(),
            room_charge,
            food,
            food_service_charge,
            total: room_charge.saturating_add(food_service_charge),
            issued_at: Utc::now(),
        }
    }
}

impl fmt::Display for Bill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Generating bill for {}", self.guest_name)?;
        writeln!(f, "Room Charges: {}", self.room_charge)?;
        writeln!(f, "Food Order Details:")?;
        if self.food.is_empty() {
            writeln!(f, "  (none)")?;
        }
        for line in &self.food {
            writeln!(f, "  {} x {}", line.item, line.quantity)?;
        }
        writeln!(f, "Food Service Charge: {}", self.food_service_charge)?;
        write!(f, "Total amount due: {}", self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bill_totals_and_render() {
        let guest = Guest::new("Alice", 34, "555-0101");
        let mut order = FoodOrder::new();
        order.add_item("soup", 2).unwrap();

        let bill = Bill::generate(&guest, 1000, &order, 500);
        assert_eq!(bill.total, 1500);
        assert_eq!(bill.food.len(), 1);

        let printed = bill.to_string();
        assert!(printed.starts_with("Generating bill for Alice\n"));
        assert!(printed.contains("  soup x 2\n"));
        assert!(printed.ends_with("Total amount due: 1500"));
    }

    #[test]
    fn test_bill_without_food() {
        let guest = Guest::new("Bob", 50, "555-0102");
        let bill = Bill::generate(&guest, 800, &FoodOrder::new(), 500);

        assert_eq!(bill.total, 1300);
        assert!(bill.to_string().contains("  (none)\n"));
    }
}
