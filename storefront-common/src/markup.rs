//! Selector and class-name contract with the storefront templates.
//!
//! Changing any of these silently unbinds the matching component.

/// Quantity decrement button
pub const QTY_DECREMENT: &str = ".qty-btn.left";
/// Quantity increment button
pub const QTY_INCREMENT: &str = ".qty-btn.right";
/// Numeric quantity input
pub const QTY_INPUT: &str = ".quantity input";
/// "Buy now" button
pub const BUY_NOW: &str = ".buy-btn";

pub const CHECKOUT_FORM_ID: &str = "checkout-form";
pub const PLACE_ORDER_BUTTON_ID: &str = "place-order-button";
/// Required inputs, queried inside the checkout form
pub const REQUIRED_INPUTS: &str = "input[required]";

pub const HAMBURGER_ID: &str = "hamburger";
/// Navigation containers toggled by the hamburger (zero or more)
pub const NAV_LINKS: &str = ".nav-links";
/// Icon glyph, queried inside the hamburger trigger
pub const HAMBURGER_ICON: &str = "i";

/// Marker class for a shown navigation container
pub const NAV_SHOWN_CLASS: &str = "show";
pub const ICON_BARS_CLASS: &str = "fa-bars";
pub const ICON_CLOSE_CLASS: &str = "fa-xmark";

/// Default buy-now navigation target
pub const CART_PATH: &str = "/cart";
/// Attribute carrying the product id on the quantity input or an ancestor
pub const PRODUCT_ID_ATTR: &str = "data-product-id";
/// Nearest element carrying [`PRODUCT_ID_ATTR`]
pub const PRODUCT_ID_SELECTOR: &str = "[data-product-id]";
