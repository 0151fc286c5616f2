use crate::error::Error;
use roxmltree::{Document, Node};
use std::fs;
use std::path::Path;
use tracing::debug;

pub fn load(path: &Path) -> Result<String, Error> {
    let text = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = text.len(), "loaded document");
    Ok(text)
}

pub fn parse(text: &str) -> Result<Document<'_>, Error> {
    Ok(Document::parse(text)?)
}

fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Render the opening tag of an element, self-closing when it has no element children
pub fn describe(node: Node) -> String {
    if !node.is_element() {
        return String::new();
    }

    let tag_name = node.tag_name().name();

    let mut attrs = String::new();
    for attr in node.attributes() {
        attrs.push_str(&format!(r##" {}="{}""##, attr.name(), escape_attr(attr.value())));
    }

    let has_children = node.children().any(|child| child.is_element());

    if has_children {
        format!("<{}{}>", tag_name, attrs)
    } else {
        format!("<{}{} />", tag_name, attrs)
    }
}

/// Tag names from the root element down to `node`, e.g. `html > body > div`
pub fn element_path(node: Node) -> String {
    let mut names: Vec<&str> = node
        .ancestors()
        .filter(|n| n.is_element())
        .map(|n| n.tag_name().name())
        .collect();
    names.reverse();
    names.join(" > ")
}
