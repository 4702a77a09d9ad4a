//! Card effect parsing and resolution.

pub mod effect;
pub mod resolver;

pub use effect::{CardEffect, JumpSpan};
pub use resolver::resolve;
