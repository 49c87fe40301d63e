//! The shopping cart.
//!
//! Lines are addressed by product id, never by position: re-sorting or
//! filtering the displayed list can never make a mutation hit the wrong line.
//! Insertion order is preserved for display.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One product entry in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Product id (the agent's uuid in the catalog).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Portrait image URL.
    pub image: String,
    /// Price per unit.
    pub unit_price: Decimal,
    /// Number of units, always >= 1. A line whose quantity would drop to
    /// zero is removed instead.
    pub quantity: u32,
}

impl CartLine {
    /// Total price of this line (`unit_price * quantity`).
    #[must_use]
    pub fn line_price(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// An item being added to the cart, before it has a quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItem {
    pub id: String,
    pub name: String,
    pub image: String,
    pub unit_price: Decimal,
}

/// An ordered collection of cart lines, at most one per product id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// The cart lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add one unit of an item.
    ///
    /// If a line with the same id already exists its quantity is incremented,
    /// otherwise a new line with quantity 1 is appended.
    pub fn add(&mut self, item: CartItem) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.id == item.id) {
            line.quantity = line.quantity.saturating_add(1);
        } else {
            self.lines.push(CartLine {
                id: item.id,
                name: item.name,
                image: item.image,
                unit_price: item.unit_price,
                quantity: 1,
            });
        }
    }

    /// Remove the line with the given id. Unknown ids are a no-op.
    pub fn remove(&mut self, id: &str) {
        self.lines.retain(|l| l.id != id);
    }

    /// Increment the quantity of the line with the given id.
    /// Unknown ids are a no-op.
    pub fn increase(&mut self, id: &str) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.id == id) {
            line.quantity = line.quantity.saturating_add(1);
        }
    }

    /// Decrement the quantity of the line with the given id.
    ///
    /// Decrementing a quantity-1 line removes it entirely; quantities never
    /// reach zero. Unknown ids are a no-op.
    pub fn decrease(&mut self, id: &str) {
        if let Some(pos) = self.lines.iter().position(|l| l.id == id) {
            if self.lines[pos].quantity > 1 {
                self.lines[pos].quantity -= 1;
            } else {
                self.lines.remove(pos);
            }
        }
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of all quantities.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Sum of `unit_price * quantity` over all lines.
    #[must_use]
    pub fn total_price(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_price).sum()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn item(id: &str, price: &str) -> CartItem {
        CartItem {
            id: id.to_string(),
            name: format!("Agent {id}"),
            image: format!("https://example.com/{id}.png"),
            unit_price: Decimal::from_str(price).unwrap(),
        }
    }

    #[test]
    fn add_same_id_increments_single_line() {
        let mut cart = Cart::new();
        for _ in 0..5 {
            cart.add(item("jett", "29.99"));
        }
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 5);
        assert_eq!(cart.total_items(), 5);
    }

    #[test]
    fn add_preserves_insertion_order() {
        let mut cart = Cart::new();
        cart.add(item("jett", "29.99"));
        cart.add(item("sage", "29.99"));
        cart.add(item("jett", "29.99"));
        let ids: Vec<&str> = cart.lines().iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["jett", "sage"]);
    }

    #[test]
    fn decrease_at_quantity_one_removes_line() {
        let mut cart = Cart::new();
        cart.add(item("sage", "29.99"));
        cart.decrease("sage");
        assert!(cart.is_empty());
    }

    #[test]
    fn decrease_above_one_decrements_by_one() {
        let mut cart = Cart::new();
        cart.add(item("sage", "29.99"));
        cart.add(item("sage", "29.99"));
        cart.add(item("sage", "29.99"));
        cart.decrease("sage");
        assert_eq!(cart.lines()[0].quantity, 2);
    }

    #[test]
    fn decrease_unknown_id_is_noop() {
        let mut cart = Cart::new();
        cart.add(item("sage", "29.99"));
        cart.decrease("phoenix");
        assert_eq!(cart.total_items(), 1);
    }

    #[test]
    fn remove_deletes_only_matching_line() {
        let mut cart = Cart::new();
        cart.add(item("jett", "29.99"));
        cart.add(item("sage", "29.99"));
        cart.remove("jett");
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].id, "sage");
        // Removing again is harmless
        cart.remove("jett");
        assert_eq!(cart.lines().len(), 1);
    }

    #[test]
    fn total_price_sums_price_times_quantity() {
        let mut cart = Cart::new();
        cart.add(item("jett", "29.99"));
        cart.add(item("jett", "29.99"));
        cart.add(item("sage", "10.50"));
        let expected = Decimal::from_str("70.48").unwrap();
        assert_eq!(cart.total_price(), expected);
    }

    #[test]
    fn total_price_of_empty_cart_is_zero() {
        assert_eq!(Cart::new().total_price(), Decimal::ZERO);
    }

    #[test]
    fn clear_empties_the_cart() {
        let mut cart = Cart::new();
        cart.add(item("jett", "29.99"));
        cart.add(item("sage", "29.99"));
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.total_price(), Decimal::ZERO);
    }

    #[test]
    fn increase_bumps_quantity() {
        let mut cart = Cart::new();
        cart.add(item("omen", "29.99"));
        cart.increase("omen");
        cart.increase("omen");
        assert_eq!(cart.lines()[0].quantity, 3);
    }

    #[test]
    fn serde_round_trip() {
        let mut cart = Cart::new();
        cart.add(item("jett", "29.99"));
        cart.add(item("sage", "29.99"));
        cart.increase("sage");

        let json = serde_json::to_string(&cart).unwrap();
        let back: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cart);
    }

    #[test]
    fn corrupt_stored_cart_fails_to_deserialize() {
        // Callers treat a failed deserialize as an empty cart.
        assert!(serde_json::from_str::<Cart>("{\"lines\": 42}").is_err());
    }
}
