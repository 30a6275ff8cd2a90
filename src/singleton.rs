//! Singleton pattern: one process-wide instance, lazily initialized and
//! reachable only through a narrow accessor.

use lazy_static::lazy_static;

/// The single shared instance. The private field keeps construction
/// inside this module; `instance()` is the only way to get one.
pub struct AppRegistry {
    _private: (),
}

lazy_static! {
    static ref INSTANCE: AppRegistry = AppRegistry { _private: () };
}

impl AppRegistry {
    pub fn instance() -> &'static AppRegistry {
        &INSTANCE
    }

    pub fn do_something(&self) -> &'static str {
        "Singleton is doing something."
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_is_referentially_stable() {
        let a = AppRegistry::instance() as *const AppRegistry;
        let b = AppRegistry::instance() as *const AppRegistry;
        assert_eq!(a, b);
    }

    #[test]
    fn test_do_something_output() {
        assert_eq!(
            AppRegistry::instance().do_something(),
            "Singleton is doing something."
        );
    }
}
