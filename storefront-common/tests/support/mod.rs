use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use storefront_common::{
    CartSink, CartUpdate, ClassList, Navigator, RequiredFields, SubmitControl, TextField,
};

/// Initialize tracing for tests with proper test output handling
#[allow(dead_code)]
pub fn tracing_init() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_line_number(true)
        .with_target(false)
        .with_file(true)
        .try_init();
}

/// In-memory stand-in for a page element. Clones share the same node.
#[derive(Clone, Default)]
pub struct FakeNode {
    value: Rc<RefCell<String>>,
    classes: Rc<RefCell<BTreeSet<String>>>,
    disabled: Rc<RefCell<Option<bool>>>,
}

#[allow(dead_code)]
impl FakeNode {
    pub fn input(value: &str) -> Self {
        let node = Self::default();
        *node.value.borrow_mut() = value.to_string();
        node
    }

    pub fn with_classes(classes: &[&str]) -> Self {
        let node = Self::default();
        node.classes
            .borrow_mut()
            .extend(classes.iter().map(|c| c.to_string()));
        node
    }

    pub fn disabled(&self) -> Option<bool> {
        *self.disabled.borrow()
    }
}

impl TextField for FakeNode {
    fn value(&self) -> String {
        self.value.borrow().clone()
    }

    fn set_value(&self, value: &str) {
        *self.value.borrow_mut() = value.to_string();
    }
}

impl ClassList for FakeNode {
    fn has_class(&self, class: &str) -> bool {
        self.classes.borrow().contains(class)
    }

    fn set_class(&self, class: &str, present: bool) {
        if present {
            self.classes.borrow_mut().insert(class.to_string());
        } else {
            self.classes.borrow_mut().remove(class);
        }
    }
}

impl SubmitControl for FakeNode {
    fn set_disabled(&self, disabled: bool) {
        *self.disabled.borrow_mut() = Some(disabled);
    }
}

/// A form whose required fields are the given input nodes.
#[derive(Clone, Default)]
pub struct FakeForm(pub Vec<FakeNode>);

impl RequiredFields for FakeForm {
    fn required_values(&self) -> Vec<String> {
        self.0.iter().map(TextField::value).collect()
    }
}

/// Cart sink that keeps a shared log of rendered messages.
#[derive(Clone, Default)]
pub struct MessageSink(pub Rc<RefCell<Vec<String>>>);

impl CartSink for MessageSink {
    fn update(&mut self, update: CartUpdate) {
        self.0.borrow_mut().push(update.to_string());
    }
}

#[derive(Clone, Default)]
pub struct FakeWindow(pub Rc<RefCell<Vec<String>>>);

impl Navigator for FakeWindow {
    fn navigate(&self, path: &str) {
        self.0.borrow_mut().push(path.to_string());
    }
}
