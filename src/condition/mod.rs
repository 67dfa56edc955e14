// ABOUTME: Condition module - outcomes, the Condition trait, combinators,
// ABOUTME: the built-in catalog, the registry, and declarative specs.

mod catalog;
mod combinator;
mod outcome;
mod registry;
mod spec;
mod traits;

pub use catalog::*;
pub use combinator::*;
pub use outcome::*;
pub use registry::*;
pub use spec::*;
pub use traits::*;

#[cfg(test)]
mod spec_test;
