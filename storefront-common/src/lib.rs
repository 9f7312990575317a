//! storefront-common - Page behavior state for the storefront
//!
//! Pure state and decision logic for the quantity stepper, checkout gate and
//! navigation menu. Components talk to the page only through the handle traits
//! in [`handles`], so everything here runs and tests without a browser.

pub mod cart;
pub mod checkout;
pub mod config;
pub mod handles;
pub mod markup;
pub mod nav_menu;
pub mod quantity;

pub use cart::{CartContents, CartSink, CartUpdate, LogCartSink};
pub use checkout::{all_required_filled, CheckoutFormGate, CheckoutGateConfig};
pub use config::{CartSinkKind, ConfigError, StorefrontConfig};
pub use handles::{ClassList, Navigator, RequiredFields, SubmitControl, TextField};
pub use nav_menu::{IconGlyph, MenuState, NavMenuToggle};
pub use quantity::{parse_quantity, QuantityStepper};
