//! Domain types for the item checker.

mod verdict;

pub use verdict::*;
