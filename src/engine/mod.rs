//! Advisor engine for the item checker.
//!
//! - Advisor: the trait the HTTP layer talks to
//! - OpenRouter: the production advisor backed by a hosted LLM

mod advisor;
#[cfg(test)]
pub mod mock;
mod openrouter;

pub use advisor::*;
pub use openrouter::*;
