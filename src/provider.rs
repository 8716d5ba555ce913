//! Configuration source seam between the host runtime and the field.
//!
//! The host editor owns the content object and its reactivity; the field
//! only needs get/subscribe semantics. `SharedConfig` is the reference
//! implementation used by the widget itself: the wasm `set_content` entry
//! point routes through it, and native tests drive it directly.

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::ContentConfig;

/// Read access to the current content configuration.
pub trait ConfigSource {
    fn content(&self) -> ContentConfig;
}

type Listener = Box<dyn FnMut(&ContentConfig)>;

/// Interior-mutable content holder with change notification.
///
/// Clones share the same underlying content and listener list.
#[derive(Clone)]
pub struct SharedConfig {
    inner: Rc<RefCell<ContentConfig>>,
    listeners: Rc<RefCell<Vec<Listener>>>,
}

impl SharedConfig {
    pub fn new(content: ContentConfig) -> Self {
        Self {
            inner: Rc::new(RefCell::new(content)),
            listeners: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Snapshot of the current content.
    pub fn get(&self) -> ContentConfig {
        self.inner.borrow().clone()
    }

    /// Replace the content and notify every subscriber.
    pub fn set(&self, content: ContentConfig) {
        *self.inner.borrow_mut() = content.clone();
        for listener in self.listeners.borrow_mut().iter_mut() {
            listener(&content);
        }
    }

    /// Register a change listener, called on every [`SharedConfig::set`].
    pub fn subscribe(&self, listener: impl FnMut(&ContentConfig) + 'static) {
        self.listeners.borrow_mut().push(Box::new(listener));
    }
}

impl ConfigSource for SharedConfig {
    fn content(&self) -> ContentConfig {
        self.get()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::config::InputType;

    #[test]
    fn test_set_notifies_subscribers() {
        let config = SharedConfig::new(ContentConfig::default());
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        config.subscribe(move |content| sink.borrow_mut().push(content.input_type));

        let mut next = config.get();
        next.input_type = InputType::Currency;
        config.set(next);

        assert_eq!(seen.borrow().as_slice(), &[InputType::Currency]);
        assert_eq!(config.content().input_type, InputType::Currency);
    }

    #[test]
    fn test_clones_share_state() {
        let config = SharedConfig::new(ContentConfig::default());
        let other = config.clone();

        let mut next = other.get();
        next.name = "price".to_string();
        other.set(next);

        assert_eq!(config.get().name, "price");
    }
}
