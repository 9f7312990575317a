use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::handles::{RequiredFields, SubmitControl};

/// Checkout gate behavior
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckoutGateConfig {
    /// Disable the place-order control while a required field is empty.
    /// Off by default: the flag is computed but the control is never touched.
    pub enforce_disable: bool,
}

/// True when every value is non-empty after trimming. Vacuously true for none.
pub fn all_required_filled<I, S>(values: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    values
        .into_iter()
        .all(|value| !value.as_ref().trim().is_empty())
}

/// Tracks whether the checkout form's required fields are all filled in.
pub struct CheckoutFormGate<R, C> {
    fields: R,
    submit: C,
    config: CheckoutGateConfig,
    all_filled: bool,
}

impl<R, C> CheckoutFormGate<R, C>
where
    R: RequiredFields,
    C: SubmitControl,
{
    /// Bind the gate and run the initial check.
    pub fn new(fields: R, submit: C, config: CheckoutGateConfig) -> Self {
        let mut gate = Self {
            fields,
            submit,
            config,
            all_filled: false,
        };
        gate.recompute();
        gate
    }

    /// Re-read the required fields. Called on every input event in the form.
    pub fn recompute(&mut self) -> bool {
        self.all_filled = all_required_filled(self.fields.required_values());
        debug!("Checkout required fields filled: {}", self.all_filled);

        if self.config.enforce_disable {
            self.submit.set_disabled(!self.all_filled);
        }
        self.all_filled
    }

    /// Result of the last recompute.
    pub fn all_filled(&self) -> bool {
        self.all_filled
    }

    pub fn config(&self) -> CheckoutGateConfig {
        self.config
    }

    pub fn fields(&self) -> &R {
        &self.fields
    }

    pub fn submit(&self) -> &C {
        &self.submit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    struct FakeForm(RefCell<Vec<String>>);

    impl FakeForm {
        fn new(values: &[&str]) -> Self {
            Self(RefCell::new(values.iter().map(|v| v.to_string()).collect()))
        }

        fn set(&self, index: usize, value: &str) {
            self.0.borrow_mut()[index] = value.to_string();
        }
    }

    impl RequiredFields for FakeForm {
        fn required_values(&self) -> Vec<String> {
            self.0.borrow().clone()
        }
    }

    /// Records every disabled write; `None` means never written.
    #[derive(Default)]
    struct FakeButton {
        disabled: Cell<Option<bool>>,
        writes: Cell<usize>,
    }

    impl SubmitControl for FakeButton {
        fn set_disabled(&self, disabled: bool) {
            self.disabled.set(Some(disabled));
            self.writes.set(self.writes.get() + 1);
        }
    }

    #[test]
    fn test_all_required_filled() {
        assert!(all_required_filled(["a", "b"]));
        assert!(!all_required_filled(["a", ""]));
        assert!(!all_required_filled(["a", "   \t"]));
        assert!(all_required_filled([" x "]));
    }

    #[test]
    fn test_no_required_fields_is_vacuously_filled() {
        assert!(all_required_filled(Vec::<String>::new()));

        let gate = CheckoutFormGate::new(
            FakeForm::new(&[]),
            FakeButton::default(),
            CheckoutGateConfig::default(),
        );
        assert!(gate.all_filled());
    }

    #[test]
    fn test_initial_check_runs_on_construction() {
        let gate = CheckoutFormGate::new(
            FakeForm::new(&["Ada", ""]),
            FakeButton::default(),
            CheckoutGateConfig::default(),
        );
        assert!(!gate.all_filled());
    }

    #[test]
    fn test_recompute_follows_field_edits() {
        let mut gate = CheckoutFormGate::new(
            FakeForm::new(&["Ada", ""]),
            FakeButton::default(),
            CheckoutGateConfig::default(),
        );
        assert!(!gate.recompute());

        gate.fields().set(1, "1 Main St");
        assert!(gate.recompute());

        gate.fields().set(0, "  ");
        assert!(!gate.recompute());
    }

    #[test]
    fn test_default_mode_never_touches_submit() {
        let mut gate = CheckoutFormGate::new(
            FakeForm::new(&[""]),
            FakeButton::default(),
            CheckoutGateConfig::default(),
        );
        gate.recompute();
        gate.fields().set(0, "filled");
        gate.recompute();
        assert_eq!(gate.submit().writes.get(), 0);
        assert_eq!(gate.submit().disabled.get(), None);
    }

    #[test]
    fn test_enforce_disable_tracks_flag() {
        let config = CheckoutGateConfig {
            enforce_disable: true,
        };
        let mut gate =
            CheckoutFormGate::new(FakeForm::new(&["", ""]), FakeButton::default(), config);
        assert_eq!(gate.submit().disabled.get(), Some(true));

        gate.fields().set(0, "Ada");
        gate.recompute();
        assert_eq!(gate.submit().disabled.get(), Some(true));

        gate.fields().set(1, "1 Main St");
        gate.recompute();
        assert_eq!(gate.submit().disabled.get(), Some(false));
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let config: CheckoutGateConfig = serde_json::from_str("{}").unwrap();
        assert!(!config.enforce_disable);

        let config: CheckoutGateConfig =
            serde_json::from_str(r#"{"enforce_disable": true}"#).unwrap();
        assert!(config.enforce_disable);
    }

    #[test]
    fn test_gate_without_submit_control() {
        let mut gate = CheckoutFormGate::new(
            FakeForm::new(&["", "x"]),
            None::<FakeButton>,
            CheckoutGateConfig {
                enforce_disable: true,
            },
        );
        assert!(!gate.all_filled());

        gate.fields().set(0, "Ada");
        assert!(gate.recompute());
    }

    #[test]
    fn test_present_optional_control_is_driven() {
        let gate = CheckoutFormGate::new(
            FakeForm::new(&[""]),
            Some(FakeButton::default()),
            CheckoutGateConfig {
                enforce_disable: true,
            },
        );
        let button = gate.submit().as_ref().unwrap();
        assert_eq!(button.disabled.get(), Some(true));
    }
}
