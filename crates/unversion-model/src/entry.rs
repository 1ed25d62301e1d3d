//! Retention rule entry types.
//!
//! A [`RuleEntry`] is one `<add>` element of the rule file. Limits that the
//! file leaves out stay at [`UNBOUNDED`], so a rule that only sets `maxCount`
//! never restricts by age (and vice versa).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Limit value meaning "no limit".
pub const UNBOUNDED: i32 = i32::MAX;

/// Content types a rule applies to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DocTypeKey {
    /// Rule applies to every content type.
    AllTypes,
    /// Rule applies to one content-type alias.
    Alias(String),
}

impl DocTypeKey {
    /// Build a key from an optional `docTypeAlias` attribute value.
    pub fn from_attribute(alias: Option<&str>) -> Self {
        match alias {
            Some(alias) => Self::Alias(alias.to_string()),
            None => Self::AllTypes,
        }
    }

    /// The alias, if this key names a single content type.
    pub fn alias(&self) -> Option<&str> {
        match self {
            Self::AllTypes => None,
            Self::Alias(alias) => Some(alias),
        }
    }

    /// True for the key that applies to every content type.
    pub fn is_all_types(&self) -> bool {
        matches!(self, Self::AllTypes)
    }
}

impl fmt::Display for DocTypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllTypes => f.write_str("*"),
            Self::Alias(alias) => f.write_str(alias),
        }
    }
}

/// Which rule set an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
    /// Limits on stored versions of a content item.
    #[default]
    Version,
    /// Limits on soft-deleted items in the recycle bin.
    Trash,
}

impl RuleKind {
    /// Parse the `type` attribute. Only `trash` (any case) selects
    /// [`RuleKind::Trash`]; every other value is a version rule.
    pub fn from_attribute(value: &str) -> Self {
        if value.eq_ignore_ascii_case("trash") {
            Self::Trash
        } else {
            Self::Version
        }
    }

    /// Lowercase name, matching the `type` attribute value.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Version => "version",
            Self::Trash => "trash",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One retention rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleEntry {
    /// Content type(s) the rule applies to.
    pub doc_type: DocTypeKey,
    /// XPath restricting the rule to a content subtree.
    pub root_xpath: Option<String>,
    /// Maximum age in days before an item may be removed.
    pub max_days: i32,
    /// Maximum number of items to keep.
    pub max_count: i32,
    pub kind: RuleKind,
}

impl RuleEntry {
    /// Create an entry with both limits unbounded.
    pub fn new(doc_type: DocTypeKey, kind: RuleKind) -> Self {
        Self {
            doc_type,
            root_xpath: None,
            max_days: UNBOUNDED,
            max_count: UNBOUNDED,
            kind,
        }
    }

    #[must_use]
    pub fn with_root_xpath(mut self, root_xpath: impl Into<String>) -> Self {
        self.root_xpath = Some(root_xpath.into());
        self
    }

    #[must_use]
    pub fn with_max_days(mut self, max_days: i32) -> Self {
        self.max_days = max_days;
        self
    }

    #[must_use]
    pub fn with_max_count(mut self, max_count: i32) -> Self {
        self.max_count = max_count;
        self
    }

    /// True when `maxDays` was set to something other than unbounded.
    pub fn has_day_limit(&self) -> bool {
        self.max_days != UNBOUNDED
    }

    /// True when `maxCount` was set to something other than unbounded.
    pub fn has_count_limit(&self) -> bool {
        self.max_count != UNBOUNDED
    }

    /// True for trash (recycle bin) rules.
    pub fn is_trash(&self) -> bool {
        self.kind == RuleKind::Trash
    }

    /// True when the rule has no `docTypeAlias`.
    pub fn applies_to_all_types(&self) -> bool {
        self.doc_type.is_all_types()
    }
}

impl Default for RuleEntry {
    fn default() -> Self {
        Self::new(DocTypeKey::AllTypes, RuleKind::Version)
    }
}
