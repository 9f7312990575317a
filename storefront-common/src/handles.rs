//! Handle traits the components use to reach the page.
//!
//! DOM nodes are reference handles, so every method takes `&self`. The web crate
//! implements these over `web_sys_x` types; tests implement them in memory.

/// A text input whose value the component reads and rewrites.
pub trait TextField {
    fn value(&self) -> String;
    fn set_value(&self, value: &str);
}

/// An element whose class membership renders some component state.
pub trait ClassList {
    fn has_class(&self, class: &str) -> bool;

    /// Add `class` when `present`, remove it otherwise.
    fn set_class(&self, class: &str, present: bool);
}

/// The control that submits a form.
pub trait SubmitControl {
    fn set_disabled(&self, disabled: bool);
}

/// An absent control ignores disable requests.
impl<C: SubmitControl> SubmitControl for Option<C> {
    fn set_disabled(&self, disabled: bool) {
        if let Some(control) = self {
            control.set_disabled(disabled);
        }
    }
}

/// Source of the current values of a form's required fields.
///
/// Queried on every recompute so fields added after binding are seen.
pub trait RequiredFields {
    fn required_values(&self) -> Vec<String>;
}

/// Browser navigation. Fire-and-forget.
pub trait Navigator {
    fn navigate(&self, path: &str);
}
