//! Loader for `unVersion.config` retention rule files.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::path::Path;
//!
//! let rules = unversion_config::load_from_app_root(Path::new("/srv/site"));
//! for entry in rules.applicable_version_rules("newsArticle") {
//!     println!("keep at most {} versions", entry.max_count);
//! }
//! ```

#![deny(unsafe_code)]

pub mod error;
pub mod loader;
pub mod parser;

pub use error::{ConfigError, Result};
pub use loader::{
    CONFIG_DIR, CONFIG_FILE_NAME, config_path, load, load_from_app_root, load_or_empty,
};
pub use parser::parse_rules;
pub use unversion_model::{DocTypeKey, RuleEntry, RuleKind, RuleSet, UNBOUNDED};
