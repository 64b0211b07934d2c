//! Epsilon-aware geometric predicates.
//!
//! All functions in this module take explicit tolerance parameters.
//! No hidden epsilons are used.

mod predicates;

pub use predicates::{classify_point, Side};
