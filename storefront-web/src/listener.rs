//! RAII event listeners
//!
//! A `Closure` handed to `addEventListener` must outlive the listener. Rather
//! than `closure.forget()`, which leaks and leaves the listener attached forever,
//! the closure is stored next to its target and removed on drop.
//!
//! ```ignore
//! let listener = EventListener::new(&button, "click", move |_| stepper.borrow_mut().increment())?;
//!
//! // Detached here
//! drop(listener);
//! ```

use wasm_bindgen_x::prelude::*;

use crate::error::BindError;

/// An event listener that removes itself from its target when dropped.
pub struct EventListener {
    target: web_sys_x::EventTarget,
    event_name: &'static str,
    callback: Closure<dyn FnMut(JsValue)>,
}

impl EventListener {
    /// Attaches `callback` to `target` for `event_name`.
    pub fn new(
        target: &web_sys_x::EventTarget,
        event_name: &'static str,
        callback: impl FnMut(JsValue) + 'static,
    ) -> Result<Self, BindError> {
        let callback: Closure<dyn FnMut(JsValue)> = Closure::wrap(Box::new(callback));

        target.add_event_listener_with_callback(event_name, callback.as_ref().unchecked_ref())?;

        Ok(Self {
            target: target.clone(),
            event_name,
            callback,
        })
    }

    pub fn event_name(&self) -> &'static str {
        self.event_name
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback(
            self.event_name,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}
