//! `web_sys_x` implementations of the component handle traits, plus the
//! lookups that resolve the selector contract once at bind time.

use storefront_common::markup::REQUIRED_INPUTS;
use storefront_common::{ClassList, Navigator, RequiredFields, SubmitControl, TextField};
use tracing::warn;
use wasm_bindgen_x::JsCast;
use web_sys_x::{Document, Element, HtmlInputElement, NodeList, Window};

use crate::error::BindError;

/// Single element by CSS selector. Absence is a binding failure.
pub fn query_required(document: &Document, selector: &'static str) -> Result<Element, BindError> {
    document
        .query_selector(selector)?
        .ok_or(BindError::MissingElement(selector))
}

/// Single element by id. Absence is a binding failure.
pub fn by_id_required(document: &Document, id: &'static str) -> Result<Element, BindError> {
    document
        .get_element_by_id(id)
        .ok_or(BindError::MissingElement(id))
}

/// Every element matching `selector`. Matching nothing is fine.
pub fn query_all(document: &Document, selector: &'static str) -> Result<Vec<Element>, BindError> {
    Ok(elements(&document.query_selector_all(selector)?))
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Quantity input
pub struct DomTextField(HtmlInputElement);

impl DomTextField {
    pub fn new(input: HtmlInputElement) -> Self {
        Self(input)
    }
}

impl TextField for DomTextField {
    fn value(&self) -> String {
        self.0.value()
    }

    fn set_value(&self, value: &str) {
        self.0.set_value(value);
    }
}

/// Class list of any element
pub struct DomClassList(Element);

impl DomClassList {
    pub fn new(element: Element) -> Self {
        Self(element)
    }
}

impl ClassList for DomClassList {
    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn set_class(&self, class: &str, present: bool) {
        if let Err(e) = self.0.class_list().toggle_with_force(class, present) {
            warn!("Failed to set class {class}={present}: {e:?}");
        }
    }
}

/// Place-order control. Disabled through the `disabled` attribute so both
/// `<button>` and `<input type="submit">` work.
pub struct DomSubmitControl(Element);

impl DomSubmitControl {
    pub fn new(element: Element) -> Self {
        Self(element)
    }
}

impl SubmitControl for DomSubmitControl {
    fn set_disabled(&self, disabled: bool) {
        let result = if disabled {
            self.0.set_attribute("disabled", "")
        } else {
            self.0.remove_attribute("disabled")
        };
        if let Err(e) = result {
            warn!("Failed to set disabled={disabled} on submit control: {e:?}");
        }
    }
}

/// Required inputs of the checkout form, re-queried on every read
pub struct DomRequiredFields(Element);

impl DomRequiredFields {
    pub fn new(form: Element) -> Self {
        Self(form)
    }
}

impl RequiredFields for DomRequiredFields {
    fn required_values(&self) -> Vec<String> {
        match self.0.query_selector_all(REQUIRED_INPUTS) {
            Ok(list) => elements(&list)
                .into_iter()
                .filter_map(|el| el.dyn_into::<HtmlInputElement>().ok())
                .map(|input| input.value())
                .collect(),
            Err(e) => {
                warn!("Failed to query required checkout fields: {e:?}");
                Vec::new()
            }
        }
    }
}

/// Navigates by assigning `window.location.href`
pub struct WindowNavigator(Window);

impl WindowNavigator {
    pub fn new(window: Window) -> Self {
        Self(window)
    }
}

impl Navigator for WindowNavigator {
    fn navigate(&self, path: &str) {
        if let Err(e) = self.0.location().set_href(path) {
            warn!("Navigation to {path} failed: {e:?}");
        }
    }
}
