//! Rule file loading.
//!
//! [`load`] reports every failure to the caller. [`load_or_empty`] keeps the
//! add-on's historical contract: it never fails, logs what went wrong, and
//! falls back to an empty [`RuleSet`] so that no retention limit is applied.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{error, info, warn};
use unversion_model::RuleSet;

use crate::error::{ConfigError, Result};
use crate::parser::parse_rules;

/// Directory below the application root that holds the rule file.
pub const CONFIG_DIR: &str = "config";
/// File name of the rule file.
pub const CONFIG_FILE_NAME: &str = "unVersion.config";

/// Location of the rule file for an application root:
/// `<app_root>/config/unVersion.config`.
pub fn config_path(app_root: &Path) -> PathBuf {
    app_root.join(CONFIG_DIR).join(CONFIG_FILE_NAME)
}

/// Read and parse a rule file.
///
/// # Errors
///
/// Returns [`ConfigError::MissingFile`] when the file does not exist,
/// [`ConfigError::Io`] when it cannot be read, and [`ConfigError::Parse`]
/// wrapping the parser error when its content is invalid.
pub fn load(path: &Path) -> Result<RuleSet> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(ConfigError::MissingFile {
                path: path.to_path_buf(),
            });
        }
        Err(e) => return Err(ConfigError::io(path, e)),
    };

    let rules = parse_rules(&content).map_err(|e| e.in_file(path))?;

    info!(
        path = %path.display(),
        doc_types = rules.version_rules().len(),
        version_rules = rules.version_rule_count(),
        trash_rules = rules.trash_rules().len(),
        "Loaded unVersion rules"
    );

    Ok(rules)
}

/// Load a rule file, falling back to an empty rule set.
///
/// A missing file is logged as a warning, any other failure as an error.
pub fn load_or_empty(path: &Path) -> RuleSet {
    match load(path) {
        Ok(rules) => rules,
        Err(e) if e.is_missing_file() => {
            warn!(path = %path.display(), "Couldn't find unVersion rule file");
            RuleSet::new()
        }
        Err(e) => {
            error!(path = %path.display(), error = %e, "Error when parsing unVersion rule file");
            RuleSet::new()
        }
    }
}

/// Load the rule file of an application root, falling back to an empty rule
/// set.
pub fn load_from_app_root(app_root: &Path) -> RuleSet {
    load_or_empty(&config_path(app_root))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_path_appends_config_dir_and_file() {
        let path = config_path(Path::new("/srv/site"));
        assert_eq!(path, Path::new("/srv/site/config/unVersion.config"));
    }

    #[test]
    fn missing_file_is_reported_as_such() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(&dir.path().join("absent.config")).unwrap_err();
        assert!(err.is_missing_file());
    }

    #[test]
    fn directory_path_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(dir.path()).unwrap_err();
        assert!(!err.is_missing_file());
    }
}
