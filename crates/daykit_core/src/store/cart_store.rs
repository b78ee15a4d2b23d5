//! Cart store: stock-bounded line items, derived totals, persistence.
//!
//! # Responsibility
//! - Own the line-item list and enforce per-product stock ceilings.
//! - Keep `total_quantity`/`total_amount` equal to the sums over the list
//!   after every operation, via one recompute helper.
//! - Mirror every successful mutation to storage and notify listeners.
//!
//! # Invariants
//! - No line item's quantity ever exceeds its product snapshot's stock.
//! - A stock-limit rejection changes nothing and sets `error`; the next
//!   successful mutation clears it.
//! - Storage failures never propagate; a failed save clears the persisted
//!   blob and retries once so future saves are not blocked.

use crate::model::cart::{CartItem, CartSummary, Product};
use crate::model::now_epoch_ms;
use event_emitter_rs::EventEmitter;
use log::{error, info, warn};
use serde::{Deserialize, Serialize};

use crate::storage::KeyValueStore;

const CART_KEY: &str = "shopping_cart";
const CHANGED_EVENT: &str = "cart_changed";

/// Persisted snapshot: full item list tagged with a save timestamp.
#[derive(Debug, Serialize, Deserialize)]
struct StoredCart {
    items: Vec<CartItem>,
    saved_at: i64,
}

/// Owned, injectable cart state container.
pub struct CartStore<S: KeyValueStore> {
    storage: S,
    items: Vec<CartItem>,
    total_quantity: u64,
    total_amount: i64,
    error: Option<String>,
    emitter: EventEmitter,
}

impl<S: KeyValueStore> CartStore<S> {
    /// Rehydrates the cart from `storage`.
    ///
    /// Missing or malformed stored data yields an empty cart, never an
    /// error; totals are recomputed from whatever loaded.
    pub fn open(storage: S) -> Self {
        let items = load_items(&storage);
        let mut store = Self {
            storage,
            items,
            total_quantity: 0,
            total_amount: 0,
            error: None,
            emitter: EventEmitter::new(),
        };
        store.recompute_totals();
        info!(
            "event=cart_open module=cart_store status=ok count={}",
            store.items.len()
        );
        store
    }

    /// Adds `quantity` of `product`, merging into an existing line item for
    /// the same product id.
    ///
    /// The proposed quantity is checked against `product.stock`: a violation
    /// rejects the whole operation, sets `error` naming the available stock
    /// and returns `false`.
    pub fn add_item(&mut self, product: &Product, quantity: u32) -> bool {
        let existing = self
            .items
            .iter_mut()
            .find(|item| item.product.id == product.id);

        // A merged quantity that overflows u32 cannot fit in stock either.
        let proposed = existing
            .as_ref()
            .map_or(Some(quantity), |item| item.quantity.checked_add(quantity));
        let proposed = match proposed {
            Some(proposed) if proposed <= product.stock => proposed,
            _ => {
                self.error = Some(stock_limit_message(product.stock));
                return false;
            }
        };

        match existing {
            Some(item) => item.quantity = proposed,
            None => {
                let item = CartItem::new(product, quantity, now_epoch_ms());
                self.items.push(item);
            }
        }
        self.committed();
        true
    }

    /// Overwrites a line item's quantity.
    ///
    /// Zero removes the item. A quantity above the snapshot's stock is
    /// rejected the same way as [`Self::add_item`]. Unknown ids are no-ops.
    pub fn set_quantity(&mut self, item_id: &str, quantity: u32) -> bool {
        if quantity == 0 {
            self.remove_item(item_id);
            return true;
        }

        let Some(item) = self.items.iter_mut().find(|item| item.id == item_id) else {
            return true;
        };
        if quantity > item.product.stock {
            self.error = Some(stock_limit_message(item.product.stock));
            return false;
        }
        item.quantity = quantity;
        self.committed();
        true
    }

    /// Deletes a line item. No-op when the id is unknown.
    pub fn remove_item(&mut self, item_id: &str) {
        let before = self.items.len();
        self.items.retain(|item| item.id != item_id);
        if self.items.len() != before {
            self.committed();
        }
    }

    /// Empties the cart and removes the persisted snapshot.
    pub fn clear(&mut self) {
        self.items.clear();
        self.recompute_totals();
        self.error = None;
        if let Err(err) = self.storage.remove(CART_KEY) {
            error!("event=cart_clear module=cart_store status=error error={err}");
        }
        self.notify();
    }

    /// Clears the stock-limit message without touching items.
    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Checkout view recomputed from current state on every call.
    pub fn summary(&self) -> CartSummary {
        CartSummary::compute(self.total_amount, self.total_quantity)
    }

    /// Line items in add order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Sum of quantities across all line items.
    pub fn total_quantity(&self) -> u64 {
        self.total_quantity
    }

    /// Sum of `quantity × price` across all line items.
    pub fn total_amount(&self) -> i64 {
        self.total_amount
    }

    /// Last stock-limit rejection, if not yet cleared.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Registers a listener fired after every successful mutation with the
    /// serialized summary as payload. Returns a listener id.
    pub fn on_change<F>(&mut self, listener: F) -> String
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        self.emitter.on(CHANGED_EVENT, listener)
    }

    /// Unregisters a listener returned by [`Self::on_change`].
    pub fn remove_listener(&mut self, listener_id: &str) {
        self.emitter.remove_listener(listener_id);
    }

    /// Recompute-persist-notify tail shared by every successful mutation.
    fn committed(&mut self) {
        self.recompute_totals();
        self.error = None;
        self.persist();
        self.notify();
    }

    /// The single place derived totals are written.
    fn recompute_totals(&mut self) {
        self.total_quantity = self.items.iter().map(|item| u64::from(item.quantity)).sum();
        self.total_amount = self.items.iter().map(CartItem::line_amount).sum();
    }

    fn notify(&mut self) {
        let payload =
            serde_json::to_string(&self.summary()).unwrap_or_else(|_| "{}".to_string());
        self.emitter.emit(CHANGED_EVENT, payload);
    }

    /// Mirrors the cart to storage. A failed write clears the persisted
    /// blob and retries once, then gives up; in-memory state stays
    /// authoritative either way.
    fn persist(&self) {
        let snapshot = StoredCart {
            items: self.items.clone(),
            saved_at: now_epoch_ms(),
        };
        let json = match serde_json::to_string(&snapshot) {
            Ok(json) => json,
            Err(err) => {
                error!("event=cart_save module=cart_store status=error error={err}");
                return;
            }
        };
        if let Err(err) = self.storage.set(CART_KEY, &json) {
            warn!("event=cart_save module=cart_store status=retry error={err}");
            let _ = self.storage.remove(CART_KEY);
            if let Err(err) = self.storage.set(CART_KEY, &json) {
                error!("event=cart_save module=cart_store status=error error={err}");
            }
        }
    }
}

fn stock_limit_message(stock: u32) -> String {
    format!("Only {stock} left in stock")
}

fn load_items<S: KeyValueStore>(storage: &S) -> Vec<CartItem> {
    let raw = match storage.get(CART_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(err) => {
            error!("event=cart_load module=cart_store status=error error={err}");
            return Vec::new();
        }
    };

    match serde_json::from_str::<StoredCart>(&raw) {
        Ok(stored) => stored.items,
        Err(err) => {
            warn!("event=cart_load module=cart_store status=corrupt error={err}");
            Vec::new()
        }
    }
}
