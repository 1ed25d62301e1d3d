//! Library components of the `unversion` rule inspector.

pub mod logging;
pub mod report;
