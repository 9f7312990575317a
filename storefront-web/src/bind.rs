//! Wires each component to its markup.
//!
//! Every `bind_*` resolves its elements up front and returns the listeners that
//! keep it alive. A missing required element fails that component only.

use std::cell::RefCell;
use std::rc::Rc;

use storefront_common::markup;
use storefront_common::{
    CartSink, CartSinkKind, CheckoutFormGate, CheckoutGateConfig, LogCartSink, NavMenuToggle,
    QuantityStepper, StorefrontConfig,
};
use tracing::{debug, warn};
use wasm_bindgen_x::JsCast;
use web_sys_x::{Document, HtmlInputElement, Window};

use crate::dom::{
    self, DomClassList, DomRequiredFields, DomSubmitControl, DomTextField, WindowNavigator,
};
use crate::error::BindError;
use crate::listener::EventListener;
use crate::storage::LocalStorageCartSink;

fn cart_sink(config: &StorefrontConfig, product_id: String) -> Box<dyn CartSink> {
    match config.cart_sink {
        CartSinkKind::Log => Box::new(LogCartSink),
        CartSinkKind::LocalStorage => Box::new(LocalStorageCartSink::new(
            config.cart_storage_key.clone(),
            product_id,
        )),
    }
}

/// Cart key for the product on this page: the nearest `data-product-id`,
/// falling back to the page path.
fn product_key(attribute: Option<String>, path: Option<String>) -> String {
    attribute
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty())
        .or(path)
        .unwrap_or_else(|| "/".to_string())
}

/// The place-order control is only required when the gate drives it.
fn submit_control<T>(
    found: Option<T>,
    config: &CheckoutGateConfig,
) -> Result<Option<T>, BindError> {
    match found {
        None if config.enforce_disable => {
            Err(BindError::MissingElement(markup::PLACE_ORDER_BUTTON_ID))
        }
        found => Ok(found),
    }
}

/// Quantity stepper and buy-now button on the product page.
pub fn bind_quantity_stepper(
    window: &Window,
    document: &Document,
    config: &StorefrontConfig,
) -> Result<Vec<EventListener>, BindError> {
    let decrement = dom::query_required(document, markup::QTY_DECREMENT)?;
    let increment = dom::query_required(document, markup::QTY_INCREMENT)?;
    let input = dom::query_required(document, markup::QTY_INPUT)?
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| BindError::UnexpectedElement {
            selector: markup::QTY_INPUT,
            expected: "an <input>",
        })?;
    let buy_now = dom::query_required(document, markup::BUY_NOW)?;

    let product_id = product_key(
        input
            .closest(markup::PRODUCT_ID_SELECTOR)?
            .and_then(|el| el.get_attribute(markup::PRODUCT_ID_ATTR)),
        window.location().pathname().ok(),
    );
    debug!("Quantity stepper bound to product {product_id}");

    let stepper = Rc::new(RefCell::new(QuantityStepper::new(
        DomTextField::new(input),
        cart_sink(config, product_id),
        WindowNavigator::new(window.clone()),
        config.cart_path.clone(),
    )));

    let on_decrement = {
        let stepper = stepper.clone();
        EventListener::new(&decrement, "click", move |_| {
            stepper.borrow_mut().decrement();
        })?
    };
    let on_increment = {
        let stepper = stepper.clone();
        EventListener::new(&increment, "click", move |_| {
            stepper.borrow_mut().increment();
        })?
    };
    let on_buy_now = EventListener::new(&buy_now, "click", move |_| {
        stepper.borrow().buy_now();
    })?;

    Ok(vec![on_decrement, on_increment, on_buy_now])
}

/// Required-field check on the checkout form.
pub fn bind_checkout_gate(
    document: &Document,
    config: &StorefrontConfig,
) -> Result<Vec<EventListener>, BindError> {
    let form = dom::by_id_required(document, markup::CHECKOUT_FORM_ID)?;
    let button = submit_control(
        document.get_element_by_id(markup::PLACE_ORDER_BUTTON_ID),
        &config.checkout,
    )?;

    let gate = Rc::new(RefCell::new(CheckoutFormGate::new(
        DomRequiredFields::new(form.clone()),
        button.map(DomSubmitControl::new),
        config.checkout,
    )));

    let on_input = EventListener::new(&form, "input", move |_| {
        gate.borrow_mut().recompute();
    })?;

    Ok(vec![on_input])
}

/// Hamburger menu in the site header.
pub fn bind_nav_menu(document: &Document) -> Result<Vec<EventListener>, BindError> {
    let trigger = dom::by_id_required(document, markup::HAMBURGER_ID)?;
    let panels = dom::query_all(document, markup::NAV_LINKS)?
        .into_iter()
        .map(DomClassList::new)
        .collect::<Vec<_>>();
    let icon = trigger.query_selector(markup::HAMBURGER_ICON)?;
    if icon.is_none() {
        warn!("Hamburger has no icon element, menu toggles without glyph swap");
    }
    if panels.is_empty() {
        warn!("No {} elements found, hamburger has nothing to toggle", markup::NAV_LINKS);
    }

    let menu = Rc::new(RefCell::new(NavMenuToggle::new(
        panels,
        icon.map(DomClassList::new),
    )));

    let on_click = EventListener::new(&trigger, "click", move |_| {
        menu.borrow_mut().toggle();
    })?;

    Ok(vec![on_click])
}
