use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::warn;
use unversion_config::{config_path, load};
use unversion_model::RuleSet;

use crate::cli::{RuleFileArgs, ShowArgs};
use unversion_cli::report::{rule_table, rules_json, summary_line};

/// Outcome of `unversion check`.
#[derive(Debug)]
pub struct CheckOutcome {
    pub path: PathBuf,
    /// `None` when the rule file does not exist.
    pub rules: Option<RuleSet>,
}

impl RuleFileArgs {
    /// Path of the rule file these arguments select.
    pub fn resolve(&self) -> PathBuf {
        match (&self.file, &self.app_root) {
            (Some(file), _) => file.clone(),
            (None, Some(root)) => config_path(root),
            // clap requires one of the two.
            (None, None) => PathBuf::from(unversion_config::CONFIG_FILE_NAME),
        }
    }
}

pub fn run_show(args: &ShowArgs) -> Result<()> {
    let path = args.source.resolve();
    let rules = load_rules(&path)?.unwrap_or_default();
    if args.json {
        println!("{}", rules_json(&rules).context("serialize rules")?);
    } else {
        println!("Rule file: {}", path.display());
        println!("{}", rule_table(&rules));
        println!("{}", summary_line(&rules));
    }
    Ok(())
}

pub fn run_check(args: &RuleFileArgs) -> Result<CheckOutcome> {
    let path = args.resolve();
    let rules = load_rules(&path)?;
    Ok(CheckOutcome { path, rules })
}

/// Load a rule file; a missing file is a warning, not a failure.
pub fn load_rules(path: &Path) -> Result<Option<RuleSet>> {
    match load(path) {
        Ok(rules) => Ok(Some(rules)),
        Err(e) if e.is_missing_file() => {
            warn!(path = %path.display(), "Rule file not found; no retention rules apply");
            Ok(None)
        }
        Err(e) => Err(e).with_context(|| format!("load rules from {}", path.display())),
    }
}
