use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::info;

/// Outcome of the cart-update routine for the current quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartUpdate {
    /// Quantity is positive; the item is in the cart with this count
    Added(u64),
    /// Quantity dropped to zero
    Removed,
}

impl CartUpdate {
    pub fn for_quantity(quantity: u64) -> Self {
        if quantity > 0 {
            CartUpdate::Added(quantity)
        } else {
            CartUpdate::Removed
        }
    }

    /// Quantity the cart should hold after this update.
    pub fn quantity(&self) -> u64 {
        match self {
            CartUpdate::Added(quantity) => *quantity,
            CartUpdate::Removed => 0,
        }
    }
}

impl fmt::Display for CartUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CartUpdate::Added(quantity) => write!(f, "Added to cart: {quantity}"),
            CartUpdate::Removed => write!(f, "Removed from cart"),
        }
    }
}

/// Where cart updates go.
///
/// This is the extension point for real persistence. The default
/// [`LogCartSink`] only emits a diagnostic.
pub trait CartSink {
    fn update(&mut self, update: CartUpdate);
}

impl<S: CartSink + ?Sized> CartSink for Box<S> {
    fn update(&mut self, update: CartUpdate) {
        (**self).update(update);
    }
}

/// Logs each update at info level and does nothing else
#[derive(Debug, Default, Clone, Copy)]
pub struct LogCartSink;

impl CartSink for LogCartSink {
    fn update(&mut self, update: CartUpdate) {
        info!("{update}");
    }
}

/// Per-product cart quantities, serialized as a flat JSON object
/// (`{"<product id>": <quantity>}`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartContents {
    items: BTreeMap<String, u64>,
}

impl CartContents {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn to_json(&self) -> String {
        // A string-keyed map of integers always serializes.
        serde_json::to_string(&self.items).unwrap_or_else(|_| "{}".to_string())
    }

    /// Set a product's quantity; zero drops the entry.
    pub fn update_quantity(&mut self, product_id: &str, quantity: u64) {
        if quantity > 0 {
            self.items.insert(product_id.to_string(), quantity);
        } else {
            self.items.remove(product_id);
        }
    }

    pub fn apply(&mut self, product_id: &str, update: CartUpdate) {
        self.update_quantity(product_id, update.quantity());
    }

    pub fn quantity(&self, product_id: &str) -> u64 {
        self.items.get(product_id).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
