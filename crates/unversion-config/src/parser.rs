//! XML parsing of `unVersion.config` documents.
//!
//! Rule elements are the `add` children of the `unVersionConfig` root
//! (`/unVersionConfig/add`). Element names are compared literally; namespaces
//! are not resolved.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use tracing::debug;
use unversion_model::{DocTypeKey, RuleEntry, RuleKind, RuleSet};

use crate::error::{ConfigError, Result};

/// Name of the document root element.
pub const ROOT_ELEMENT: &str = "unVersionConfig";
/// Name of a rule element.
pub const RULE_ELEMENT: &str = "add";

const ATTR_DOC_TYPE_ALIAS: &str = "docTypeAlias";
const ATTR_ROOT_XPATH: &str = "rootXpath";
const ATTR_MAX_DAYS: &str = "maxDays";
const ATTR_MAX_COUNT: &str = "maxCount";
const ATTR_TYPE: &str = "type";

/// Parse a rule document.
///
/// Any error aborts the whole parse; no partially filled [`RuleSet`] is
/// returned.
pub fn parse_rules(xml: &str) -> Result<RuleSet> {
    let xml = xml.strip_prefix('\u{feff}').unwrap_or(xml);
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut entries: Vec<RuleEntry> = Vec::new();
    let mut open: Vec<String> = Vec::new();
    let mut root_seen = false;

    loop {
        match reader.read_event()? {
            Event::Start(element) => {
                let name = element_name(&element);
                if open.is_empty() {
                    enter_root(&mut root_seen, &name)?;
                }
                if is_rule_element(&open, &name) {
                    entries.push(parse_entry(&element)?);
                }
                open.push(name);
            }
            Event::Empty(element) => {
                let name = element_name(&element);
                if open.is_empty() {
                    enter_root(&mut root_seen, &name)?;
                }
                if is_rule_element(&open, &name) {
                    entries.push(parse_entry(&element)?);
                }
            }
            Event::End(_) => {
                open.pop();
            }
            Event::Text(text) if open.is_empty() && !is_blank(&text) => {
                return Err(ConfigError::TextOutsideRoot {
                    text: String::from_utf8_lossy(&text).trim().to_string(),
                });
            }
            Event::CData(data) if open.is_empty() => {
                return Err(ConfigError::TextOutsideRoot {
                    text: String::from_utf8_lossy(&data).into_owned(),
                });
            }
            Event::Eof => break,
            // Comments, text inside elements, declarations and processing
            // instructions.
            _ => {}
        }
    }

    if let Some(name) = open.pop() {
        return Err(ConfigError::UnclosedElement { name });
    }
    if !root_seen {
        return Err(ConfigError::MissingRoot);
    }

    Ok(entries.into_iter().collect())
}

fn is_blank(bytes: &[u8]) -> bool {
    bytes.iter().all(u8::is_ascii_whitespace)
}

fn element_name(element: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(element.name().as_ref()).into_owned()
}

fn enter_root(root_seen: &mut bool, name: &str) -> Result<()> {
    if *root_seen {
        return Err(ConfigError::UnexpectedRoot {
            name: name.to_string(),
        });
    }
    *root_seen = true;
    Ok(())
}

fn is_rule_element(open: &[String], name: &str) -> bool {
    name == RULE_ELEMENT && matches!(open, [root] if root == ROOT_ELEMENT)
}

/// Build one entry from the attributes of an `add` element.
fn parse_entry(element: &BytesStart<'_>) -> Result<RuleEntry> {
    let mut doc_type_alias = None;
    let mut entry = RuleEntry::default();

    for attribute in element.attributes() {
        let attribute = attribute?;
        let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
        let value = attribute
            .unescape_value()
            .map_err(|e| ConfigError::AttributeValue {
                attribute: key.clone(),
                message: e.to_string(),
            })?;

        match key.as_str() {
            ATTR_DOC_TYPE_ALIAS => doc_type_alias = Some(value.into_owned()),
            ATTR_ROOT_XPATH => entry.root_xpath = Some(value.into_owned()),
            ATTR_MAX_DAYS => entry.max_days = parse_limit(ATTR_MAX_DAYS, &value)?,
            ATTR_MAX_COUNT => entry.max_count = parse_limit(ATTR_MAX_COUNT, &value)?,
            ATTR_TYPE => entry.kind = RuleKind::from_attribute(&value),
            _ => {}
        }
    }

    entry.doc_type = DocTypeKey::from_attribute(doc_type_alias.as_deref());

    debug!(
        doc_type = %entry.doc_type,
        kind = %entry.kind,
        max_days = entry.max_days,
        max_count = entry.max_count,
        root_xpath = entry.root_xpath.as_deref().unwrap_or(""),
        "Parsed rule entry"
    );

    Ok(entry)
}

/// Coerce a limit attribute to `i32`. Surrounding whitespace and a leading
/// sign are accepted; any value that fits is kept as written.
fn parse_limit(attribute: &'static str, value: &str) -> Result<i32> {
    value
        .trim()
        .parse::<i32>()
        .map_err(|_| ConfigError::InvalidNumber {
            attribute,
            value: value.to_string(),
        })
}
