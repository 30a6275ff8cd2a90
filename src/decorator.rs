//! Decorator pattern: wrappers add behavior around a component while
//! exposing the same interface, so decorators compose freely.

pub trait Component {
    fn operation(&self) -> String;
}

pub struct PlainComponent;

impl Component for PlainComponent {
    fn operation(&self) -> String {
        "ConcreteComponent operation".to_string()
    }
}

/// Delegates to the wrapped component, then appends its own line.
pub struct BehaviorDecorator {
    inner: Box<dyn Component>,
}

impl BehaviorDecorator {
    pub fn new(inner: Box<dyn Component>) -> Self {
        BehaviorDecorator { inner }
    }
}

impl Component for BehaviorDecorator {
    fn operation(&self) -> String {
        format!(
            "{}\nConcreteDecoratorA added behavior",
            self.inner.operation()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decorator_runs_component_then_added_behavior() {
        let decorated = BehaviorDecorator::new(Box::new(PlainComponent));
        assert_eq!(
            decorated.operation(),
            "ConcreteComponent operation\nConcreteDecoratorA added behavior"
        );
    }

    #[test]
    fn test_decorators_compose() {
        let twice = BehaviorDecorator::new(Box::new(BehaviorDecorator::new(Box::new(
            PlainComponent,
        ))));
        let output = twice.operation();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines,
            vec![
                "ConcreteComponent operation",
                "ConcreteDecoratorA added behavior",
                "ConcreteDecoratorA added behavior",
            ]
        );
    }
}
