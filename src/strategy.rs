//! Strategy pattern: a context holds one binary-integer operation and can
//! swap it between invocations.

/// A pure two-argument integer operation.
///
/// All arithmetic wraps on overflow. Debug builds would otherwise panic
/// where release builds wrap, so the wrapping ops make the behavior
/// uniform and match conventional fixed-width integer semantics.
pub trait Operation {
    fn execute(&self, a: i32, b: i32) -> i32;
}

pub struct Add;
pub struct Subtract;
pub struct Multiply;

impl Operation for Add {
    fn execute(&self, a: i32, b: i32) -> i32 {
        a.wrapping_add(b)
    }
}

impl Operation for Subtract {
    fn execute(&self, a: i32, b: i32) -> i32 {
        a.wrapping_sub(b)
    }
}

impl Operation for Multiply {
    fn execute(&self, a: i32, b: i32) -> i32 {
        a.wrapping_mul(b)
    }
}

/// Holds exactly one currently selected operation. The operation is read
/// only at call time; swapping it never affects results already returned.
pub struct Context {
    operation: Box<dyn Operation>,
}

impl Context {
    pub fn new(operation: Box<dyn Operation>) -> Self {
        Context { operation }
    }

    pub fn set_operation(&mut self, operation: Box<dyn Operation>) {
        self.operation = operation;
    }

    pub fn execute(&self, a: i32, b: i32) -> i32 {
        self.operation.execute(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_arithmetic() {
        let mut context = Context::new(Box::new(Add));
        assert_eq!(context.execute(10, 5), 15);

        context.set_operation(Box::new(Multiply));
        assert_eq!(context.execute(10, 5), 50);

        context.set_operation(Box::new(Subtract));
        assert_eq!(context.execute(10, 5), 5);
    }

    #[test]
    fn test_swap_has_no_retroactive_effect() {
        let mut context = Context::new(Box::new(Add));
        let before = context.execute(2, 3);

        context.set_operation(Box::new(Multiply));
        let after = context.execute(2, 3);

        assert_eq!(before, 5);
        assert_eq!(after, 6);
    }

    #[test]
    fn test_operations_are_stateless() {
        let context = Context::new(Box::new(Subtract));
        assert_eq!(context.execute(7, 7), 0);
        assert_eq!(context.execute(7, 7), 0);
    }

    #[test]
    fn test_overflow_wraps() {
        assert_eq!(Add.execute(i32::MAX, 1), i32::MIN);
        assert_eq!(Subtract.execute(i32::MIN, 1), i32::MAX);
        assert_eq!(Multiply.execute(i32::MAX, 2), -2);
    }
}
