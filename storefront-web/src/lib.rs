//! storefront-web - Browser bindings for the storefront page behaviors
//!
//! Reads the page config, installs console logging and attaches the quantity
//! stepper, checkout gate and hamburger menu to whatever markup is present.

pub mod bind;
pub mod dom;
pub mod error;
pub mod listener;
pub mod logging;
pub mod storage;

use std::cell::RefCell;

use storefront_common::StorefrontConfig;
use tracing::{debug, error, info, warn};
use web_sys_x::{Document, Window};

use crate::error::BindError;
use crate::listener::EventListener;

/// Id of the `<script type="application/json">` holding the page config
pub const CONFIG_ELEMENT_ID: &str = "storefront-config";

thread_local! {
    /// Listeners kept alive for the rest of the page.
    static PAGE_LISTENERS: RefCell<Vec<EventListener>> = const { RefCell::new(Vec::new()) };
}

/// Bind every component. Failures are logged and skip only that component.
pub fn attach(
    window: &Window,
    document: &Document,
    config: &StorefrontConfig,
) -> Vec<EventListener> {
    let components = [
        (
            "quantity stepper",
            bind::bind_quantity_stepper(window, document, config),
        ),
        ("checkout gate", bind::bind_checkout_gate(document, config)),
        ("nav menu", bind::bind_nav_menu(document)),
    ];

    let mut listeners = Vec::new();
    for (name, result) in components {
        match result {
            Ok(bound) => {
                let events: Vec<_> = bound.iter().map(EventListener::event_name).collect();
                debug!("Bound {name} on {events:?}");
                listeners.extend(bound);
            }
            Err(e) => error!("Failed to bind {name}: {e}"),
        }
    }
    listeners
}

fn read_config(document: &Document) -> Option<String> {
    document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
}

/// `document.readyState`, which the DOM bindings don't expose.
fn ready_state(document: &Document) -> Option<String> {
    js_sys_x::Reflect::get(document, &"readyState".into())
        .ok()
        .and_then(|state| state.as_string())
}

fn is_loading(ready_state: Option<&str>) -> bool {
    ready_state == Some("loading")
}

fn attach_and_keep(window: &Window, document: &Document, config: &StorefrontConfig) {
    let listeners = attach(window, document, config);
    info!("Storefront attached with {} listener(s)", listeners.len());
    PAGE_LISTENERS.with(|kept| kept.borrow_mut().extend(listeners));
}

/// Entry point. Binds now, or on `DOMContentLoaded` if the document is still
/// parsing. The bound listeners live for the rest of the page.
pub fn launch() -> Result<(), BindError> {
    let window = web_sys_x::window().ok_or(BindError::NoWindow)?;
    let document = window.document().ok_or(BindError::NoDocument)?;

    let config = StorefrontConfig::from_json(read_config(&document).as_deref().unwrap_or(""));
    let filter = config
        .as_ref()
        .map(|c| c.log_filter.as_str())
        .unwrap_or("info");
    logging::configure_logging(filter);
    let config = config.unwrap_or_else(|e| {
        warn!("{e}, using default storefront config");
        StorefrontConfig::default()
    });

    if !is_loading(ready_state(&document).as_deref()) {
        attach_and_keep(&window, &document, &config);
        return Ok(());
    }

    debug!("Document still loading, waiting for DOMContentLoaded");
    // Kept for the page lifetime; must not be dropped from its own callback.
    let waiting = {
        let target = document.clone();
        EventListener::new(&target, "DOMContentLoaded", move |_| {
            attach_and_keep(&window, &document, &config);
        })?
    };
    PAGE_LISTENERS.with(|kept| kept.borrow_mut().push(waiting));
    Ok(())
}
