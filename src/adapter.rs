//! Adapter pattern: an existing type with an incompatible interface is
//! wrapped to satisfy the interface callers expect.

pub trait Target {
    fn request(&self) -> String;
}

/// The existing type; its interface does not match [`Target`].
pub struct Adaptee;

impl Adaptee {
    pub fn specific_request(&self) -> String {
        "Called specificRequest()".to_string()
    }
}

pub struct AdapteeAdapter {
    adaptee: Adaptee,
}

impl AdapteeAdapter {
    pub fn new(adaptee: Adaptee) -> Self {
        AdapteeAdapter { adaptee }
    }
}

impl Target for AdapteeAdapter {
    fn request(&self) -> String {
        self.adaptee.specific_request()
    }
}
