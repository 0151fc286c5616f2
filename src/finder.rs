use crate::criteria::CriteriaSet;
use crate::node::DocumentNode;
use tracing::trace;

/// Bound applied when no positive depth is given
pub const DEFAULT_MAX_DEPTH: usize = 10;

/// Resolve a requested depth to the number of evaluation rounds.
/// Absent, zero and negative values all fall back to `DEFAULT_MAX_DEPTH`.
pub fn effective_max_depth(max_depth: Option<i64>) -> usize {
    match max_depth {
        Some(depth) if depth > 0 => usize::try_from(depth).unwrap_or(usize::MAX),
        _ => DEFAULT_MAX_DEPTH,
    }
}

/// Find the nearest node, starting at `start` itself and walking up through
/// its parents, that satisfies any token of `criteria`.
///
/// Each round checks the current node and then ascends, so `max_depth = 1`
/// only ever looks at `start`. Returns `None` when the criteria are empty,
/// the chain ends, or the bound runs out.
pub fn find_ancestor<N: DocumentNode>(
    start: Option<N>,
    criteria: &str,
    max_depth: Option<i64>,
) -> Option<N> {
    let criteria = CriteriaSet::parse(criteria);
    find_ancestor_with(start, &criteria, max_depth)
}

/// Same as `find_ancestor` with criteria that are already parsed
pub fn find_ancestor_with<N: DocumentNode>(
    start: Option<N>,
    criteria: &CriteriaSet,
    max_depth: Option<i64>,
) -> Option<N> {
    if criteria.is_empty() {
        return None;
    }

    let max = effective_max_depth(max_depth);
    let mut current = start;
    let mut steps = 0;

    while steps < max {
        let node = current?;
        if let Some(hit) = criteria.first_match(&node) {
            trace!(step = steps, kind = ?hit.kind, value = %hit.value, "ancestor matched");
            return Some(node);
        }
        trace!(step = steps, "no criterion matched, ascending");
        current = node.parent_node();
        steps += 1;
    }

    trace!(max, "depth bound reached");
    None
}
