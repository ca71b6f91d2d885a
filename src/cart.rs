//! Shopping cart store.
//!
//! One line per product id, each with a quantity of at least one. The line
//! list is written through to [`StorageKey::Cart`] after every change;
//! anything unreadable in storage starts the cart empty.

use crate::state::{PersistedCollection, StoreContext};
use crate::storage::StorageKey;
use crate::types::{CartItem, Product};
use std::sync::Arc;

/// The shopper's cart.
pub struct CartStore {
    lines: PersistedCollection<CartItem>,

    /// Whether the cart drawer is showing. Not persisted.
    open: bool,
}

impl CartStore {
    /// Load the cart from `ctx`, starting empty if nothing usable is stored.
    pub fn open(ctx: StoreContext) -> Self {
        let mut lines: PersistedCollection<CartItem> =
            PersistedCollection::load_or_else(ctx, StorageKey::Cart, Vec::new);

        // Repair documents written by something that broke the line invariants.
        if !lines_are_canonical(lines.as_slice()) {
            tracing::warn!("normalizing persisted cart lines");
            let repaired = normalize(lines.as_slice());
            lines.replace(repaired);
        }

        Self { lines, open: false }
    }

    /// Add `quantity` units of `product`, merging into an existing line.
    pub fn add_to_cart(&mut self, product: &Product, quantity: u32) {
        if quantity == 0 {
            tracing::debug!(product = %product.id, "ignoring add of zero units");
            return;
        }

        self.lines.mutate(|lines| {
            match lines.iter_mut().find(|l| l.product.id == product.id) {
                Some(line) => line.quantity = line.quantity.saturating_add(quantity),
                None => lines.push(CartItem {
                    product: product.clone(),
                    quantity,
                }),
            }
        });
    }

    /// Add a single unit of `product`.
    pub fn add_one(&mut self, product: &Product) {
        self.add_to_cart(product, 1);
    }

    /// Set the quantity of a line. Zero removes it; an unknown id is ignored.
    pub fn update_quantity(&mut self, product_id: &str, quantity: u32) {
        if quantity < 1 {
            self.remove_from_cart(product_id);
            return;
        }

        let Some(index) = self.position(product_id) else {
            tracing::debug!(product = product_id, "quantity update for product not in cart");
            return;
        };
        if self.lines.as_slice()[index].quantity == quantity {
            return;
        }

        self.lines.mutate(|lines| lines[index].quantity = quantity);
    }

    /// Remove a line. An unknown id is ignored.
    pub fn remove_from_cart(&mut self, product_id: &str) {
        let Some(index) = self.position(product_id) else {
            tracing::debug!(product = product_id, "remove for product not in cart");
            return;
        };

        self.lines.mutate(|lines| {
            lines.remove(index);
        });
    }

    /// Empty the cart.
    pub fn clear_cart(&mut self) {
        if self.lines.is_empty() {
            return;
        }
        self.lines.replace(Vec::new());
    }

    /// Sum of `price * quantity` over all lines.
    pub fn cart_total(&self) -> u64 {
        self.lines
            .iter()
            .fold(0u64, |acc, line| acc.saturating_add(line.line_total()))
    }

    /// Total number of units (not distinct lines).
    pub fn cart_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Snapshot of the current lines.
    pub fn items(&self) -> Arc<Vec<CartItem>> {
        self.lines.snapshot()
    }

    /// The line for `product_id`, if present.
    pub fn item(&self, product_id: &str) -> Option<&CartItem> {
        self.lines.iter().find(|l| l.product.id == product_id)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn set_open(&mut self, open: bool) {
        self.open = open;
    }

    pub fn toggle_open(&mut self) {
        self.open = !self.open;
    }

    fn position(&self, product_id: &str) -> Option<usize> {
        self.lines.iter().position(|l| l.product.id == product_id)
    }
}

fn lines_are_canonical(lines: &[CartItem]) -> bool {
    lines.iter().enumerate().all(|(i, line)| {
        line.quantity >= 1 && !lines[..i].iter().any(|l| l.product.id == line.product.id)
    })
}

/// Merge duplicate product lines and drop empty ones, keeping first-seen order.
fn normalize(lines: &[CartItem]) -> Vec<CartItem> {
    let mut merged: Vec<CartItem> = Vec::with_capacity(lines.len());
    for line in lines.iter().filter(|l| l.quantity >= 1) {
        match merged.iter_mut().find(|m| m.product.id == line.product.id) {
            Some(existing) => existing.quantity = existing.quantity.saturating_add(line.quantity),
            None => merged.push(line.clone()),
        }
    }
    merged
}
