//! Loaded rule configuration.

use std::collections::BTreeMap;

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::entry::{DocTypeKey, RuleEntry, RuleKind};

/// Rules from one rule file, grouped for lookup.
///
/// Version rules are grouped by content type; trash rules are a flat list.
/// Entries keep the order they had in the file. A `RuleSet` is built in one
/// step with [`FromIterator`] and has no mutating methods afterwards, so it
/// can be shared across threads freely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    version_rules: BTreeMap<DocTypeKey, Vec<RuleEntry>>,
    trash_rules: Vec<RuleEntry>,
}

impl RuleSet {
    /// An empty rule set, as used when no rule file is configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry to the collection selected by its kind.
    fn push(&mut self, entry: RuleEntry) {
        match entry.kind {
            RuleKind::Trash => self.trash_rules.push(entry),
            RuleKind::Version => self
                .version_rules
                .entry(entry.doc_type.clone())
                .or_default()
                .push(entry),
        }
    }

    /// Version rules keyed by content type.
    pub fn version_rules(&self) -> &BTreeMap<DocTypeKey, Vec<RuleEntry>> {
        &self.version_rules
    }

    /// Trash rules in file order.
    pub fn trash_rules(&self) -> &[RuleEntry] {
        &self.trash_rules
    }

    /// Version rules registered under exactly this key.
    pub fn rules_for(&self, key: &DocTypeKey) -> &[RuleEntry] {
        self.version_rules
            .get(key)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Version rules that govern content of the given type: the rules for
    /// the alias itself followed by the rules for all types.
    pub fn applicable_version_rules<'a>(
        &'a self,
        alias: &str,
    ) -> impl Iterator<Item = &'a RuleEntry> + use<'a> {
        let specific = self
            .version_rules
            .get(&DocTypeKey::Alias(alias.to_string()))
            .map(Vec::as_slice)
            .unwrap_or_default();
        specific
            .iter()
            .chain(self.rules_for(&DocTypeKey::AllTypes))
    }

    pub fn version_rule_count(&self) -> usize {
        self.version_rules.values().map(Vec::len).sum()
    }

    /// Total number of entries across both collections.
    pub fn len(&self) -> usize {
        self.version_rule_count() + self.trash_rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.version_rules.is_empty() && self.trash_rules.is_empty()
    }
}

/// Serialized as `{ version_rules: [{ doc_type, rules }], trash_rules }`.
///
/// JSON object keys must be strings, so the grouped map is written as a list
/// of groups instead of a map keyed by [`DocTypeKey`].
impl Serialize for RuleSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(serde::Serialize)]
        struct Group<'a> {
            doc_type: &'a DocTypeKey,
            rules: &'a [RuleEntry],
        }

        let groups: Vec<Group<'_>> = self
            .version_rules
            .iter()
            .map(|(doc_type, rules)| Group { doc_type, rules })
            .collect();

        let mut state = serializer.serialize_struct("RuleSet", 2)?;
        state.serialize_field("version_rules", &groups)?;
        state.serialize_field("trash_rules", &self.trash_rules)?;
        state.end()
    }
}

impl FromIterator<RuleEntry> for RuleSet {
    fn from_iter<I: IntoIterator<Item = RuleEntry>>(iter: I) -> Self {
        let mut set = Self::new();
        for entry in iter {
            set.push(entry);
        }
        set
    }
}
