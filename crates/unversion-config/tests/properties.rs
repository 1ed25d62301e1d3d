//! Property tests for rule parsing.

use proptest::prelude::*;
use unversion_config::{DocTypeKey, RuleKind, UNBOUNDED, parse_rules};

#[derive(Debug, Clone)]
struct GeneratedRule {
    alias: Option<String>,
    max_days: Option<i32>,
    max_count: Option<i32>,
    trash: bool,
}

impl GeneratedRule {
    fn to_xml(&self) -> String {
        let mut xml = String::from("<add");
        if let Some(alias) = &self.alias {
            xml.push_str(&format!(" docTypeAlias=\"{alias}\""));
        }
        if let Some(days) = self.max_days {
            xml.push_str(&format!(" maxDays=\"{days}\""));
        }
        if let Some(count) = self.max_count {
            xml.push_str(&format!(" maxCount=\"{count}\""));
        }
        if self.trash {
            xml.push_str(" type=\"trash\"");
        }
        xml.push_str("/>");
        xml
    }
}

fn rule_strategy() -> impl Strategy<Value = GeneratedRule> {
    (
        proptest::option::of(prop_oneof![Just("news"), Just("page"), Just("home"), Just("blogPost")]),
        proptest::option::of(any::<i32>()),
        proptest::option::of(any::<i32>()),
        any::<bool>(),
    )
        .prop_map(|(alias, max_days, max_count, trash)| GeneratedRule {
            alias: alias.map(str::to_string),
            max_days,
            max_count,
            trash,
        })
}

fn document(rules: &[GeneratedRule]) -> String {
    let body: String = rules.iter().map(GeneratedRule::to_xml).collect();
    format!("<unVersionConfig>{body}</unVersionConfig>")
}

proptest! {
    #[test]
    fn every_rule_is_kept_in_document_order(rules in prop::collection::vec(rule_strategy(), 0..24)) {
        let set = parse_rules(&document(&rules)).unwrap();
        prop_assert_eq!(set.len(), rules.len());

        let expected_trash: Vec<_> = rules.iter().filter(|r| r.trash).collect();
        prop_assert_eq!(set.trash_rules().len(), expected_trash.len());
        for (entry, rule) in set.trash_rules().iter().zip(&expected_trash) {
            prop_assert_eq!(entry.kind, RuleKind::Trash);
            prop_assert_eq!(entry.max_days, rule.max_days.unwrap_or(UNBOUNDED));
            prop_assert_eq!(entry.max_count, rule.max_count.unwrap_or(UNBOUNDED));
        }

        for (key, entries) in set.version_rules() {
            let expected: Vec<_> = rules
                .iter()
                .filter(|r| !r.trash && DocTypeKey::from_attribute(r.alias.as_deref()) == *key)
                .collect();
            prop_assert_eq!(entries.len(), expected.len());
            for (entry, rule) in entries.iter().zip(&expected) {
                prop_assert_eq!(&entry.doc_type, key);
                prop_assert_eq!(entry.max_days, rule.max_days.unwrap_or(UNBOUNDED));
                prop_assert_eq!(entry.max_count, rule.max_count.unwrap_or(UNBOUNDED));
            }
        }
    }

    #[test]
    fn absent_limits_are_unbounded(rules in prop::collection::vec(rule_strategy(), 1..12)) {
        let rules: Vec<GeneratedRule> = rules
            .into_iter()
            .map(|rule| GeneratedRule { max_days: None, max_count: None, ..rule })
            .collect();
        let set = parse_rules(&document(&rules)).unwrap();
        let all = set.version_rules().values().flatten().chain(set.trash_rules());
        for entry in all {
            prop_assert_eq!(entry.max_days, UNBOUNDED);
            prop_assert_eq!(entry.max_count, UNBOUNDED);
        }
    }
}
