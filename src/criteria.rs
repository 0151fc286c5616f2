//! Match criteria for ancestor lookup
//!
//! Syntax: a whitespace-separated list of tokens, any one of which may match.
//! - `.value` - the element's whole `class` attribute equals `value`
//! - `#value` - the element's `id` equals `value`
//! - `value` - the element's `name` equals `value`
//!
//! Only the first character of a token selects the kind, so `a.b` is a name
//! criterion for `a.b`. Class matching compares the full attribute string and
//! never splits it into a class list.
//!
//! Examples:
//! - `.panel` - element with class="panel"
//! - `#main .panel` - element with id="main" OR class="panel"
//! - `username` - element with name="username"
use crate::node::DocumentNode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CriterionKind {
    ClassMatch, // .
    IdMatch,    // #
    NameMatch,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Criterion {
    pub kind: CriterionKind,
    pub value: String,
}

impl Criterion {
    /// Classify a single token. Never fails.
    pub fn parse(token: &str) -> Criterion {
        if let Some(class) = token.strip_prefix('.') {
            Criterion {
                kind: CriterionKind::ClassMatch,
                value: class.to_string(),
            }
        } else if let Some(id) = token.strip_prefix('#') {
            Criterion {
                kind: CriterionKind::IdMatch,
                value: id.to_string(),
            }
        } else {
            Criterion {
                kind: CriterionKind::NameMatch,
                value: token.to_string(),
            }
        }
    }

    /// Check if the node's attribute equals this criterion's value.
    /// A missing attribute compares as the empty string.
    pub fn matches<N: DocumentNode>(&self, node: &N) -> bool {
        let attr_value = match self.kind {
            CriterionKind::ClassMatch => node.class_name(),
            CriterionKind::IdMatch => node.id(),
            CriterionKind::NameMatch => node.name(),
        };
        attr_value.unwrap_or("") == self.value
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CriteriaSet {
    criteria: Vec<Criterion>,
}

impl CriteriaSet {
    pub fn parse(s: &str) -> CriteriaSet {
        CriteriaSet {
            criteria: s.split_whitespace().map(Criterion::parse).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Criterion> {
        self.criteria.iter()
    }

    /// First criterion (in input order) the node satisfies
    pub fn first_match<N: DocumentNode>(&self, node: &N) -> Option<&Criterion> {
        self.criteria.iter().find(|c| c.matches(node))
    }
}

impl From<Vec<Criterion>> for CriteriaSet {
    fn from(criteria: Vec<Criterion>) -> Self {
        CriteriaSet { criteria }
    }
}

impl<'a> IntoIterator for &'a CriteriaSet {
    type Item = &'a Criterion;
    type IntoIter = std::slice::Iter<'a, Criterion>;

    fn into_iter(self) -> Self::IntoIter {
        self.criteria.iter()
    }
}
