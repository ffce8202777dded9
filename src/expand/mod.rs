//! Expansion Module
//!
//! Shell-style brace expansion: balanced-pair location, escape handling,
//! comma splitting, sequence generation, and the recursive engine that
//! ties them together.

mod balanced;
mod engine;
mod escape;
mod parts;
mod sequence;

#[cfg(test)]
mod property_tests;

// Re-export the public engine; the building blocks stay crate-internal
pub use engine::BraceExpander;

pub(crate) use balanced::balanced;
pub(crate) use sequence::{classify, BodyClass};
