//! Observer pattern: a subject pushes its current message to every
//! registered observer, synchronously and in registration order.
//!
//! Observers are held as `Rc<dyn Observer>` handles; identity is the
//! allocation address, so the same handle can be registered, cloned, and
//! later removed. `Rc` keeps the whole mechanism single-threaded by
//! construction.

use std::cell::RefCell;
use std::rc::Rc;

pub trait Observer {
    fn update(&self, message: &str);
}

pub trait Subject {
    fn register_observer(&mut self, observer: Rc<dyn Observer>);
    fn remove_observer(&mut self, observer: &Rc<dyn Observer>);
    /// Redeliver the last-set message to every registered observer.
    fn notify_observers(&self);
}

/// A subject holding an ordered observer list and a current message.
///
/// Duplicates are allowed in the list; each registered occurrence gets its
/// own delivery. Removal drops the first matching occurrence only.
pub struct MessageSubject {
    observers: Vec<Rc<dyn Observer>>,
    message: Option<String>,
}

// Compare allocation addresses only. Vtable pointers for the same concrete
// type can differ across codegen units, so fat-pointer equality is not a
// reliable identity test.
fn same_handle(a: &Rc<dyn Observer>, b: &Rc<dyn Observer>) -> bool {
    std::ptr::eq(Rc::as_ptr(a).cast::<u8>(), Rc::as_ptr(b).cast::<u8>())
}

impl MessageSubject {
    pub fn new() -> Self {
        MessageSubject {
            observers: Vec::new(),
            message: None,
        }
    }

    /// Store `message` and immediately publish it to all observers,
    /// in registration order, on the calling thread.
    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
        self.notify_observers();
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

impl Default for MessageSubject {
    fn default() -> Self {
        Self::new()
    }
}

impl Subject for MessageSubject {
    fn register_observer(&mut self, observer: Rc<dyn Observer>) {
        self.observers.push(observer);
    }

    fn remove_observer(&mut self, observer: &Rc<dyn Observer>) {
        // First occurrence only; silently a no-op when absent.
        if let Some(pos) = self
            .observers
            .iter()
            .position(|o| same_handle(o, observer))
        {
            self.observers.remove(pos);
        }
    }

    fn notify_observers(&self) {
        // Nothing has been published yet: nothing to redeliver.
        let Some(message) = self.message.as_deref() else {
            return;
        };
        for observer in &self.observers {
            observer.update(message);
        }
    }
}

/// An observer with a display name. Prints each delivery and records it,
/// so tests can assert on delivery order and count.
pub struct NamedObserver {
    name: String,
    received: RefCell<Vec<String>>,
}

impl NamedObserver {
    pub fn new(name: impl Into<String>) -> Self {
        NamedObserver {
            name: name.into(),
            received: RefCell::new(Vec::new()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn received(&self) -> Vec<String> {
        self.received.borrow().clone()
    }
}

impl Observer for NamedObserver {
    fn update(&self, message: &str) {
        println!("{} received message: {}", self.name, message);
        self.received.borrow_mut().push(message.to_string());
    }
}
