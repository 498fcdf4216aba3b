//! Depth-first chain discovery over the format graph.
//!
//! Resolution treats registered converters as directed edges between format
//! tags and searches for a route from the requested source format to the
//! requested target format. The search works on a borrowed edge view of the
//! registry, so it never touches converter values and can be unit-tested with
//! bare tag pairs.
//!
//! The traversal order is significant and deliberately preserved:
//! - candidates are scanned in registration order;
//! - a candidate landing directly on the target ends a level immediately;
//! - the first candidate whose recursion finishes in a single hop wins
//!   outright, skipping the remaining candidates;
//! - otherwise the shortest accumulated route wins, ties broken by candidate
//!   registration order.
//!
//! Two guards bound the traversal where the format graph is cyclic or
//! pathologically deep: a visited set pruning any edge that leads back into
//! the current search path, and a configurable recursion depth limit.

use crate::error::{ConvertError, Result};
use crate::format::FormatTag;

/// Borrowed edge view of one registered converter.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Edge<'a> {
    pub(crate) input: &'a FormatTag,
    pub(crate) output: &'a FormatTag,
}

/// Find a route of edge indices from `from` to `to`.
///
/// Returns `Ok` with an empty vector when the search exhausts the graph
/// without finding a route, and `Err(DepthLimitExceeded)` when the depth
/// bound cut off at least one branch and no route was found elsewhere: a
/// route deeper than the bound may still exist, so reporting "unsupported"
/// would be wrong. A bound that pruned nothing relevant (a route was found
/// anyway) stays invisible.
pub(crate) fn find_route<'a>(
    edges: &'a [Edge<'a>],
    from: &FormatTag,
    to: &'a FormatTag,
    max_depth: usize,
) -> Result<Vec<usize>> {
    let mut search = Search {
        edges,
        target: to,
        max_depth,
        depth_hit: false,
        path: Vec::new(),
    };
    let route = search.run(from, 0);
    if route.is_empty() && search.depth_hit {
        return Err(ConvertError::DepthLimitExceeded { limit: max_depth });
    }
    Ok(route)
}

struct Search<'a> {
    edges: &'a [Edge<'a>],
    target: &'a FormatTag,
    max_depth: usize,
    depth_hit: bool,
    /// Formats expanded on the current search path, cycle guard.
    path: Vec<FormatTag>,
}

impl Search<'_> {
    fn run(&mut self, from: &FormatTag, depth: usize) -> Vec<usize> {
        if depth >= self.max_depth {
            self.depth_hit = true;
            return Vec::new();
        }

        let candidates: Vec<usize> = self
            .edges
            .iter()
            .enumerate()
            .filter(|(_, edge)| edge.input == from)
            .map(|(i, _)| i)
            .collect();

        // A candidate landing directly on the target ends this level; first
        // one in registration order wins.
        if let Some(&hit) = candidates
            .iter()
            .find(|&&i| self.edges[i].output == self.target)
        {
            return vec![hit];
        }

        self.path.push(from.clone());
        let mut routes: Vec<Vec<usize>> = Vec::new();
        for i in candidates {
            let next = self.edges[i].output;
            if self.path.iter().any(|seen| seen == next) {
                continue;
            }
            let tail = self.run(next, depth + 1);
            match tail.len() {
                0 => {}
                // First candidate to reach a one-hop finish wins outright.
                1 => {
                    self.path.pop();
                    let mut route = Vec::with_capacity(2);
                    route.push(i);
                    route.extend(tail);
                    return route;
                }
                _ => {
                    let mut route = Vec::with_capacity(tail.len() + 1);
                    route.push(i);
                    route.extend(tail);
                    routes.push(route);
                }
            }
        }
        self.path.pop();

        // min_by_key keeps the first of equally short routes, so ties fall to
        // the earliest candidate.
        routes.into_iter().min_by_key(Vec::len).unwrap_or_default()
    }
}
