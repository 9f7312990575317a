//! Local storage cart sink

use storefront_common::{CartContents, CartSink, CartUpdate};
use tracing::{info, warn};

pub fn get_storage() -> Option<web_sys_x::Storage> {
    web_sys_x::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Cart contents after applying `update` for `product_id` to what was stored.
/// Unreadable stored JSON starts a fresh cart.
fn next_contents(stored: Option<&str>, product_id: &str, update: CartUpdate) -> CartContents {
    let mut contents = match stored {
        Some(text) => CartContents::from_json(text).unwrap_or_else(|e| {
            warn!("Discarding unreadable stored cart: {e}");
            CartContents::default()
        }),
        None => CartContents::default(),
    };
    contents.apply(product_id, update);
    contents
}

/// Keeps per-product cart quantities in localStorage as one JSON object.
///
/// A product whose quantity drops to zero is removed; an empty cart removes
/// the key.
pub struct LocalStorageCartSink {
    key: String,
    product_id: String,
}

impl LocalStorageCartSink {
    pub fn new(key: impl Into<String>, product_id: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            product_id: product_id.into(),
        }
    }
}

impl CartSink for LocalStorageCartSink {
    fn update(&mut self, update: CartUpdate) {
        info!("{update}");

        let Some(storage) = get_storage() else {
            warn!("localStorage unavailable, cart quantity not saved");
            return;
        };

        let stored = storage.get_item(&self.key).ok().flatten();
        let contents = next_contents(stored.as_deref(), &self.product_id, update);
        let result = if contents.is_empty() {
            storage.remove_item(&self.key)
        } else {
            storage.set_item(&self.key, &contents.to_json())
        };
        if let Err(e) = result {
            warn!("Failed to write {} to localStorage: {e:?}", self.key);
        }
    }
}
