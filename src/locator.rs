use crate::error::Error;
use regex::Regex;
use roxmltree::{Document, Node};

/// Picks the element a search starts from.
///
/// Accepts `FIELD=VALUE` with optional quotes around the value, plus the
/// shorthands `.value` for `class=value` and `#value` for `id=value`.
#[derive(Debug, Clone, PartialEq)]
pub struct Locator {
    pub field: String,
    pub value: String,
}

impl Locator {
    pub fn parse(s: &str) -> Result<Locator, Error> {
        let trimmed = s.trim();

        if let Some(class) = trimmed.strip_prefix('.') {
            return Self::shorthand("class", class, s);
        }
        if let Some(id) = trimmed.strip_prefix('#') {
            return Self::shorthand("id", id, s);
        }

        // Using r##"..."## to avoid issues with escaped quotes in raw strings
        let pattern = r##"^([\w-]+)=["']?(.+?)["']?$"##;
        let re = Regex::new(pattern).map_err(|e| Error::InvalidLocator(e.to_string()))?;
        let caps = re
            .captures(trimmed)
            .ok_or_else(|| Error::InvalidLocator(s.to_string()))?;

        match (caps.get(1), caps.get(2)) {
            (Some(field), Some(value)) => Ok(Locator {
                field: field.as_str().to_string(),
                value: value.as_str().to_string(),
            }),
            _ => Err(Error::InvalidLocator(s.to_string())),
        }
    }

    fn shorthand(field: &str, value: &str, raw: &str) -> Result<Locator, Error> {
        if value.is_empty() {
            return Err(Error::InvalidLocator(raw.to_string()));
        }
        Ok(Locator {
            field: field.to_string(),
            value: value.to_string(),
        })
    }

    pub fn matches(&self, node: Node) -> bool {
        node.is_element() && node.attribute(self.field.as_str()) == Some(self.value.as_str())
    }

    /// First element in document order that matches
    pub fn find_first<'a, 'input>(&self, doc: &'a Document<'input>) -> Option<Node<'a, 'input>> {
        doc.descendants().find(|node| self.matches(*node))
    }
}

impl std::fmt::Display for Locator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.field, self.value)
    }
}
