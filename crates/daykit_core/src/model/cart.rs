//! Cart and catalog domain model.
//!
//! # Responsibility
//! - Define the product snapshot, line item and checkout summary shapes.
//! - Keep money as integer minor currency units end to end.
//!
//! # Invariants
//! - A line item's `product` is a snapshot taken at add time; later catalog
//!   changes never affect items already in the cart.
//! - `quantity` never exceeds `product.stock`.

use serde::{Deserialize, Serialize};

/// Read-only catalog entry. Prices are integer minor currency units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: i64,
    pub image: String,
    pub description: String,
    pub category: String,
    pub stock: u32,
    /// 0.0–5.0 review average.
    pub rating: f32,
}

/// One cart entry: a quantity of a single product snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Derived from product id plus add time; unique within one cart.
    pub id: String,
    pub product: Product,
    pub quantity: u32,
    /// Epoch milliseconds, set once.
    pub added_at: i64,
}

impl CartItem {
    /// Snapshots `product` into a new line item.
    pub fn new(product: &Product, quantity: u32, added_at: i64) -> Self {
        Self {
            id: format!("{}-{added_at}", product.id),
            product: product.clone(),
            quantity,
            added_at,
        }
    }

    /// Line total in minor currency units.
    pub fn line_amount(&self) -> i64 {
        self.product.price * i64::from(self.quantity)
    }
}

/// Derived checkout view, recomputed from current totals on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartSummary {
    pub subtotal: i64,
    pub tax: i64,
    pub shipping: i64,
    pub total: i64,
    pub item_count: u64,
}

/// Order value above which shipping is free, in minor currency units.
pub const FREE_SHIPPING_THRESHOLD: i64 = 50_000_000;
/// Flat shipping fee below the free threshold.
pub const FLAT_SHIPPING_FEE: i64 = 500_000;
/// Sales tax rate applied to the subtotal.
pub const TAX_RATE: f64 = 0.10;

impl CartSummary {
    /// Computes the checkout summary from aggregate totals.
    ///
    /// Tax rounds half away from zero. Shipping is zero for an empty cart
    /// (nothing to ship) and above [`FREE_SHIPPING_THRESHOLD`].
    pub fn compute(subtotal: i64, item_count: u64) -> Self {
        let tax = (subtotal as f64 * TAX_RATE).round() as i64;
        let shipping = if item_count == 0 || subtotal > FREE_SHIPPING_THRESHOLD {
            0
        } else {
            FLAT_SHIPPING_FEE
        };
        Self {
            subtotal,
            tax,
            shipping,
            total: subtotal + tax + shipping,
            item_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, price: i64, stock: u32) -> Product {
        Product {
            id: id.to_string(),
            name: id.to_string(),
            price,
            image: String::new(),
            description: String::new(),
            category: "Test".to_string(),
            stock,
            rating: 4.0,
        }
    }

    #[test]
    fn item_id_derives_from_product_and_time() {
        let item = CartItem::new(&product("p1", 100, 5), 2, 1_700_000_000_000);
        assert_eq!(item.id, "p1-1700000000000");
        assert_eq!(item.line_amount(), 200);
    }

    #[test]
    fn summary_applies_flat_fee_below_threshold() {
        let summary = CartSummary::compute(1_000_000, 2);
        assert_eq!(summary.tax, 100_000);
        assert_eq!(summary.shipping, FLAT_SHIPPING_FEE);
        assert_eq!(summary.total, 1_600_000);
    }

    #[test]
    fn summary_waives_shipping_above_threshold() {
        let summary = CartSummary::compute(FREE_SHIPPING_THRESHOLD + 1, 1);
        assert_eq!(summary.shipping, 0);
    }

    #[test]
    fn summary_charges_nothing_for_empty_cart() {
        let summary = CartSummary::compute(0, 0);
        assert_eq!(summary.shipping, 0);
        assert_eq!(summary.total, 0);
    }
}
