//! Runs every pattern demonstration in sequence and prints its output.
//!
//! Run with: `cargo run --bin patterns_demo`
//! A single pattern can be selected by name: `cargo run --bin patterns_demo observer`

use std::rc::Rc;

use colored::Colorize;
use thiserror::Error;

use design_patterns::adapter::{Adaptee, AdapteeAdapter, Target};
use design_patterns::decorator::{BehaviorDecorator, Component, PlainComponent};
use design_patterns::factory::{Creator, CreatorA};
use design_patterns::observer::{MessageSubject, NamedObserver, Subject};
use design_patterns::singleton::AppRegistry;
use design_patterns::strategy::{Add, Context, Multiply};

#[derive(Debug, Error)]
enum PatternError {
    #[error(
        "unknown pattern '{0}' (expected one of: singleton, factory, adapter, decorator, observer, strategy)"
    )]
    UnknownPattern(String),
}

fn section(title: &str) {
    println!("\n{}", format!("--- {title} ---").bold());
}

fn run_singleton() {
    section("Singleton");
    println!("{}", AppRegistry::instance().do_something());
}

fn run_factory() {
    section("Factory Method");
    println!("{}", CreatorA.some_operation());
}

fn run_adapter() {
    section("Adapter");
    let target = AdapteeAdapter::new(Adaptee);
    println!("{}", target.request());
}

fn run_decorator() {
    section("Decorator");
    let decorated = BehaviorDecorator::new(Box::new(PlainComponent));
    println!("{}", decorated.operation());
}

fn run_observer() {
    section("Observer");
    let mut subject = MessageSubject::new();
    subject.register_observer(Rc::new(NamedObserver::new("Observer 1")));
    subject.register_observer(Rc::new(NamedObserver::new("Observer 2")));
    // Publishing prints one line per registered observer.
    subject.set_message("Hello World!");
}

fn run_strategy() {
    section("Strategy");
    let mut context = Context::new(Box::new(Add));
    println!("10 + 5 = {}", context.execute(10, 5));
    context.set_operation(Box::new(Multiply));
    println!("10 * 5 = {}", context.execute(10, 5));
}

fn run_pattern(name: &str) -> Result<(), PatternError> {
    match name {
        "singleton" => run_singleton(),
        "factory" => run_factory(),
        "adapter" => run_adapter(),
        "decorator" => run_decorator(),
        "observer" => run_observer(),
        "strategy" => run_strategy(),
        other => return Err(PatternError::UnknownPattern(other.to_string())),
    }
    Ok(())
}

fn main() {
    println!("{}", "Design Patterns Demo".bold());
    println!("{}", "====================".bold());

    match std::env::args().nth(1) {
        Some(name) => {
            if let Err(err) = run_pattern(&name) {
                eprintln!("{err}");
            }
        }
        None => {
            run_singleton();
            run_factory();
            run_adapter();
            run_decorator();
            run_observer();
            run_strategy();
        }
    }
}
