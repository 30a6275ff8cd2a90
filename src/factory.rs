//! Factory Method pattern: creators defer the choice of product to a
//! required constructor method, while a default method supplies the
//! shared "create then use" template.

pub trait Product {
    fn use_product(&self) -> String;
}

pub struct WidgetA;
pub struct WidgetB;

impl Product for WidgetA {
    fn use_product(&self) -> String {
        "Using Product A".to_string()
    }
}

impl Product for WidgetB {
    fn use_product(&self) -> String {
        "Using Product B".to_string()
    }
}

pub trait Creator {
    fn create(&self) -> Box<dyn Product>;

    /// Template method: every creator builds its product and uses it.
    fn some_operation(&self) -> String {
        self.create().use_product()
    }
}

pub struct CreatorA;
pub struct CreatorB;

impl Creator for CreatorA {
    fn create(&self) -> Box<dyn Product> {
        Box::new(WidgetA)
    }
}

impl Creator for CreatorB {
    fn create(&self) -> Box<dyn Product> {
        Box::new(WidgetB)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creators_build_their_own_product() {
        assert_eq!(CreatorA.some_operation(), "Using Product A");
        assert_eq!(CreatorB.some_operation(), "Using Product B");
    }

    #[test]
    fn test_creators_are_interchangeable_behind_the_trait() {
        let creators: Vec<Box<dyn Creator>> = vec![Box::new(CreatorA), Box::new(CreatorB)];
        let outputs: Vec<String> = creators.iter().map(|c| c.some_operation()).collect();
        assert_eq!(outputs, vec!["Using Product A", "Using Product B"]);
    }
}
