//! Tests for rule set rendering.

use std::fs;

use unversion_cli::report::{format_limit, rule_table, rules_json, summary_line};
use unversion_config::{RuleSet, UNBOUNDED, load};

fn sample_rules() -> RuleSet {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("unVersion.config");
    fs::write(
        &path,
        r#"<unVersionConfig>
  <add docTypeAlias="news" maxCount="5"/>
  <add rootXpath="//home" maxDays="60"/>
  <add type="trash" maxDays="30"/>
</unVersionConfig>"#,
    )
    .unwrap();
    load(&path).expect("load sample rules")
}

#[test]
fn unbounded_limits_render_as_dash() {
    assert_eq!(format_limit(UNBOUNDED), "-");
    assert_eq!(format_limit(30), "30");
}

#[test]
fn summary_counts_both_rule_sets() {
    let rules = sample_rules();
    assert_eq!(
        summary_line(&rules),
        "2 version rule(s) across 2 doc type(s), 1 trash rule(s)"
    );
}

#[test]
fn table_has_one_row_per_rule() {
    let rules = sample_rules();
    let table = rule_table(&rules);
    assert_eq!(table.row_iter().count(), 3);

    let rendered = table.to_string();
    assert!(rendered.contains("news"));
    assert!(rendered.contains("//home"));
    assert!(rendered.contains("trash"));
}

#[test]
fn json_lists_groups_and_trash_rules() {
    let rules = sample_rules();
    let json: serde_json::Value =
        serde_json::from_str(&rules_json(&rules).expect("render json")).expect("parse json");

    let groups = json["version_rules"].as_array().expect("groups");
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0]["doc_type"], "AllTypes");
    assert_eq!(groups[0]["rules"][0]["max_days"], 60);
    assert_eq!(groups[1]["rules"][0]["max_count"], 5);
    assert_eq!(json["trash_rules"][0]["max_days"], 30);
}

#[test]
fn empty_rule_set_renders_header_only() {
    let rules = RuleSet::new();
    assert_eq!(rule_table(&rules).row_iter().count(), 0);
    assert_eq!(
        summary_line(&rules),
        "0 version rule(s) across 0 doc type(s), 0 trash rule(s)"
    );
}
