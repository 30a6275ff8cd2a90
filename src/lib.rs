//! # Classic Design Patterns in Rust
//!
//! Minimal, independent illustrations of six classic object-oriented
//! design patterns, each expressed with Rust's trait system instead of
//! class hierarchies:
//!
//! - [`singleton`] — one process-wide instance behind a narrow accessor
//! - [`factory`] — Factory Method as a trait with a default template method
//! - [`adapter`] — delegation behind an incompatible interface
//! - [`decorator`] — composable wrappers over `Box<dyn Component>`
//! - [`observer`] — a subject pushing messages to registered observers
//! - [`strategy`] — a context with a swappable operation
//!
//! The observer and strategy modules are the only ones with runtime state
//! (a registration list, a pluggable operation); the rest are stateless
//! dispatch demonstrations.
//!
//! Run the combined demo with: `cargo run --bin patterns_demo`

pub mod adapter;
pub mod decorator;
pub mod factory;
pub mod observer;
pub mod singleton;
pub mod strategy;
