pub mod criteria;
pub mod document;
pub mod error;
pub mod finder;
pub mod locator;
pub mod node;

pub use criteria::{CriteriaSet, Criterion, CriterionKind};
pub use error::Error;
pub use finder::{find_ancestor, find_ancestor_with, DEFAULT_MAX_DEPTH};
pub use node::DocumentNode;
