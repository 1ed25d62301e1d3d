//! Rule model for unVersion retention configuration.

#![deny(unsafe_code)]

pub mod entry;
pub mod rule_set;

pub use entry::{DocTypeKey, RuleEntry, RuleKind, UNBOUNDED};
pub use rule_set::RuleSet;
