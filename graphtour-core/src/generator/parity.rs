//! Parity repair: forces every vertex to even degree.
//!
//! Odd vertices are paired off two at a time. The odd list is recomputed from
//! scratch on every iteration instead of being maintained incrementally, so
//! repairs that touch vertices outside the current pair can never leave a
//! stale candidate behind.
//!
//! Repairs are tried in order of preference:
//!
//! 1. connect the pair directly;
//! 2. detour through a third vertex adjacent to neither (it gains two edges,
//!    so its parity is unchanged);
//! 3. connect the first vertex to another odd vertex it is not adjacent to;
//! 4. toggle a shortest path between the pair over vertex pairs that are not
//!    protected edges. Toggling a path flips the parity of its endpoints only.
//!
//! Step 4 is reached only on near-complete graphs where no edge can be added
//! and guarantees that each iteration removes exactly two odd vertices.
//! Because it can remove unprotected edges, the realised saturation may end
//! slightly below the sampled edge count when it runs.

use std::collections::{BTreeSet, VecDeque};

use rand::{rngs::SmallRng, seq::SliceRandom};
use tracing::{debug, instrument, trace, warn};

use crate::Graph;

/// Undirected edges that parity repair must never remove.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct ProtectedEdges {
    edges: BTreeSet<(usize, usize)>,
}

impl ProtectedEdges {
    pub(crate) fn insert(&mut self, u: usize, v: usize) {
        self.edges.insert(canonical(u, v));
    }

    pub(crate) fn contains(&self, u: usize, v: usize) -> bool {
        self.edges.contains(&canonical(u, v))
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.edges.len()
    }

    #[cfg(test)]
    pub(crate) fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.edges.iter().copied()
    }
}

const fn canonical(u: usize, v: usize) -> (usize, usize) {
    if u <= v { (u, v) } else { (v, u) }
}

/// Edge counts changed by a repair pass.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct RepairSummary {
    pub(crate) added: usize,
    pub(crate) removed: usize,
}

#[instrument(
    name = "generator.parity_repair",
    skip_all,
    fields(vertices = graph.vertex_count(), odd = graph.odd_vertices().len()),
)]
pub(crate) fn ensure_even_degrees(
    rng: &mut SmallRng,
    graph: &mut Graph,
    protected: &ProtectedEdges,
) -> RepairSummary {
    let mut summary = RepairSummary::default();
    loop {
        let mut odd = graph.odd_vertices();
        let (Some(u), Some(v)) = (odd.pop(), odd.pop()) else {
            break;
        };

        if !graph.contains_edge(u, v) {
            trace!(u, v, "direct repair");
            graph.insert_edge(u, v);
            summary.added += 1;
            continue;
        }

        if let Some(w) = pick_detour(rng, graph, u, v) {
            trace!(u, v, w, "detour repair");
            graph.insert_edge(u, w);
            graph.insert_edge(w, v);
            summary.added += 2;
            continue;
        }

        if let Some(x) = odd.iter().copied().find(|&x| !graph.contains_edge(u, x)) {
            trace!(u, x, "fallback repair");
            graph.insert_edge(u, x);
            summary.added += 1;
            continue;
        }

        let Some(path) = toggle_path(graph, protected, u, v) else {
            // Only reachable when every pair around `u` and `v` is protected.
            warn!(u, v, "parity repair cannot pair odd vertices");
            break;
        };
        debug!(u, v, path = ?path, "toggling path to restore parity");
        for pair in path.windows(2) {
            if let &[a, b] = pair {
                if graph.remove_edge(a, b) {
                    summary.removed += 1;
                } else {
                    graph.insert_edge(a, b);
                    summary.added += 1;
                }
            }
        }
    }
    summary
}

/// Picks uniformly among vertices adjacent to neither `u` nor `v`.
fn pick_detour(rng: &mut SmallRng, graph: &Graph, u: usize, v: usize) -> Option<usize> {
    let candidates: Vec<usize> = (0..graph.vertex_count())
        .filter(|&w| w != u && w != v && !graph.contains_edge(u, w) && !graph.contains_edge(v, w))
        .collect();
    candidates.choose(rng).copied()
}

/// Breadth-first search from `from` to `to` where any unprotected vertex pair
/// is a step, whether or not it is currently an edge.
fn toggle_path(
    graph: &Graph,
    protected: &ProtectedEdges,
    from: usize,
    to: usize,
) -> Option<Vec<usize>> {
    let n = graph.vertex_count();
    let mut parent: Vec<Option<usize>> = vec![None; n];
    let mut seen = vec![false; n];
    let mut queue = VecDeque::from([from]);
    *seen.get_mut(from)? = true;

    while let Some(current) = queue.pop_front() {
        if current == to {
            let mut path = vec![to];
            let mut cursor = to;
            while let Some(previous) = parent.get(cursor).copied().flatten() {
                path.push(previous);
                cursor = previous;
            }
            path.reverse();
            return Some(path);
        }
        for next in 0..n {
            if next == current || seen[next] || protected.contains(current, next) {
                continue;
            }
            seen[next] = true;
            parent[next] = Some(current);
            queue.push_back(next);
        }
    }
    None
}
