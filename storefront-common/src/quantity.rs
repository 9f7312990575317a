use tracing::debug;

use crate::cart::{CartSink, CartUpdate};
use crate::handles::{Navigator, TextField};

/// Parse the integer prefix of a quantity field.
///
/// Leading whitespace and one sign are accepted, then the longest run of ASCII
/// digits. Anything unparseable reads as 0, negatives clamp to 0 and values
/// past `u64::MAX` saturate.
pub fn parse_quantity(text: &str) -> u64 {
    let rest = text.trim_start();
    let (negative, rest) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };

    let mut value: u64 = 0;
    let mut saw_digit = false;
    for byte in rest.bytes() {
        if !byte.is_ascii_digit() {
            break;
        }
        saw_digit = true;
        value = value
            .saturating_mul(10)
            .saturating_add(u64::from(byte - b'0'));
    }

    if !saw_digit || negative {
        0
    } else {
        value
    }
}

/// Increment/decrement pair bound to a quantity field, plus the buy-now redirect.
///
/// The field's text is the source of truth: every operation re-reads it, so
/// edits typed by the shopper between clicks are honored.
pub struct QuantityStepper<F, S, N> {
    field: F,
    sink: S,
    navigator: N,
    cart_path: String,
}

impl<F, S, N> QuantityStepper<F, S, N>
where
    F: TextField,
    S: CartSink,
    N: Navigator,
{
    pub fn new(field: F, sink: S, navigator: N, cart_path: impl Into<String>) -> Self {
        Self {
            field,
            sink,
            navigator,
            cart_path: cart_path.into(),
        }
    }

    /// Current quantity as shown in the field.
    pub fn quantity(&self) -> u64 {
        parse_quantity(&self.field.value())
    }

    /// Step down by one. Returns the new quantity, or `None` when already at 0
    /// (the field and the cart are left alone).
    pub fn decrement(&mut self) -> Option<u64> {
        let value = self.quantity();
        if value == 0 {
            debug!("Quantity already at 0, ignoring decrement");
            return None;
        }

        let next = value - 1;
        self.field.set_value(&next.to_string());
        self.cart_update();
        Some(next)
    }

    /// Step up by one. Returns the new quantity, or `None` at `u64::MAX`
    /// (the field and the cart are left alone).
    pub fn increment(&mut self) -> Option<u64> {
        let Some(next) = self.quantity().checked_add(1) else {
            debug!("Quantity at maximum, ignoring increment");
            return None;
        };

        self.field.set_value(&next.to_string());
        self.cart_update();
        Some(next)
    }

    /// Send the shopper to the cart page. The quantity is not checked.
    pub fn buy_now(&self) {
        debug!("Buy now, navigating to {}", self.cart_path);
        self.navigator.navigate(&self.cart_path);
    }

    /// Report the field's current quantity to the cart sink.
    pub fn cart_update(&mut self) -> CartUpdate {
        let update = CartUpdate::for_quantity(self.quantity());
        self.sink.update(update);
        update
    }

    pub fn field(&self) -> &F {
        &self.field
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn cart_path(&self) -> &str {
        &self.cart_path
    }
}
