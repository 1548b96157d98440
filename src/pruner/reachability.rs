// Copyright Kyler Chin <kyler@catenarymaps.org>
// Catenary Transit Initiatives
// Attribution cannot be removed

//! Frontier based BFS in both pruning directions.

use ahash::AHashSet;

use super::progress::{ProgressCounter, ProgressSink};
use crate::point::Point;
use crate::road_graph::PointGraph;

/// All nodes reachable from `start` along outgoing edges, `start` included.
///
/// `progress` ticks once per expanded node.
pub fn reachable_from<G, S>(
    graph: &G,
    start: Point,
    progress: &mut ProgressCounter<'_, S>,
) -> AHashSet<Point>
where
    G: PointGraph,
    S: ProgressSink + ?Sized,
{
    let mut reachable = AHashSet::new();
    let mut frontier = AHashSet::new();
    let mut to_visit = AHashSet::new();

    reachable.insert(start);
    frontier.insert(start);

    while !frontier.is_empty() {
        for node in &frontier {
            progress.tick();

            for next in graph.outgoing(node) {
                if reachable.insert(next) {
                    to_visit.insert(next);
                }
            }
        }

        std::mem::swap(&mut frontier, &mut to_visit);
        to_visit.clear();
    }

    reachable
}

/// Whether any node of `targets` can be reached from `start`.
///
/// Short-circuits on the first neighbor found in `targets`. `start` itself
/// is not checked against `targets`.
pub fn can_reach_any<G>(graph: &G, start: Point, targets: &AHashSet<Point>) -> bool
where
    G: PointGraph,
{
    let mut visited = AHashSet::new();
    let mut frontier = vec![start];
    let mut to_visit = Vec::new();

    visited.insert(start);

    while !frontier.is_empty() {
        for node in &frontier {
            for next in graph.outgoing(node) {
                if targets.contains(&next) {
                    return true;
                }
                if visited.insert(next) {
                    to_visit.push(next);
                }
            }
        }

        std::mem::swap(&mut frontier, &mut to_visit);
        to_visit.clear();
    }

    false
}

/// Grows `confirmed` with every candidate that can reach it.
///
/// `confirmed` must already hold the anchor (the center). It is extended
/// while the scan runs: a candidate confirmed here is visible to the
/// searches of all later candidates, which lets them stop early. Earlier
/// candidates are never revisited, and none needs to be, since each search
/// explores everything reachable from its candidate.
///
/// Returns the number of candidates newly confirmed.
pub fn confirm_nodes_reaching<'c, G, S, I>(
    graph: &G,
    candidates: I,
    confirmed: &mut AHashSet<Point>,
    progress: &mut ProgressCounter<'_, S>,
) -> usize
where
    G: PointGraph,
    S: ProgressSink + ?Sized,
    I: IntoIterator<Item = &'c Point>,
{
    let mut newly_confirmed = 0;

    for candidate in candidates {
        progress.tick();

        if confirmed.contains(candidate) {
            continue;
        }

        if can_reach_any(graph, *candidate, confirmed) {
            confirmed.insert(*candidate);
            newly_confirmed += 1;
        }
    }

    newly_confirmed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pruner::progress::{NoProgress, PrunePhase};
    use crate::road_graph::RoadGraph;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    fn graph_of(edges: &[(Point, Point)]) -> RoadGraph<()> {
        RoadGraph::from_connections(edges.iter().map(|&(a, b)| (a, b, ()))).unwrap()
    }

    #[test]
    fn test_reachable_from_chain() {
        let (a, b, c, d) = (p(0.0, 0.0), p(1.0, 0.0), p(2.0, 0.0), p(3.0, 0.0));
        let graph = graph_of(&[(a, b), (b, c), (d, a)]);

        let mut sink = NoProgress;
        let mut progress = ProgressCounter::new(&mut sink, PrunePhase::ForwardReachability, 4, 1);
        let reachable = reachable_from(&graph, a, &mut progress);

        assert_eq!(reachable.len(), 3);
        assert!(reachable.contains(&a));
        assert!(reachable.contains(&c));
        assert!(!reachable.contains(&d));
        // Every reachable node is expanded exactly once
        assert_eq!(progress.processed(), 3);
    }

    #[test]
    fn test_reachable_from_isolated() {
        let mut graph: RoadGraph<()> = RoadGraph::new();
        graph.add_node(p(5.0, 5.0));
        graph.add_node(p(6.0, 6.0));

        let mut sink = NoProgress;
        let mut progress = ProgressCounter::new(&mut sink, PrunePhase::ForwardReachability, 2, 1);
        let reachable = reachable_from(&graph, p(5.0, 5.0), &mut progress);

        assert_eq!(reachable.len(), 1);
    }

    #[test]
    fn test_can_reach_any() {
        let (a, b, c, d) = (p(0.0, 0.0), p(1.0, 0.0), p(2.0, 0.0), p(3.0, 0.0));
        let graph = graph_of(&[(a, b), (b, c), (c, b), (d, c)]);

        let targets: AHashSet<Point> = [c].into_iter().collect();
        assert!(can_reach_any(&graph, a, &targets));
        assert!(can_reach_any(&graph, d, &targets));
        assert!(can_reach_any(&graph, c, &targets)); // via b -> c

        let targets: AHashSet<Point> = [a].into_iter().collect();
        assert!(!can_reach_any(&graph, b, &targets));
        assert!(!can_reach_any(&graph, d, &targets));
    }

    #[test]
    fn test_confirmation_grows_during_scan() {
        // Chain b -> a (center), c -> b, e -> d -> c, plus a dead end x
        let (a, b, c, d, e, x) = (
            p(0.0, 0.0),
            p(1.0, 0.0),
            p(2.0, 0.0),
            p(3.0, 0.0),
            p(4.0, 0.0),
            p(9.0, 9.0),
        );
        let graph = graph_of(&[(b, a), (c, b), (d, c), (e, d), (a, x)]);

        let mut confirmed: AHashSet<Point> = [a].into_iter().collect();
        let candidates = vec![a, b, c, d, e, x];

        let mut sink = NoProgress;
        let mut progress = ProgressCounter::new(&mut sink, PrunePhase::BackwardReachability, 6, 1);
        let newly = confirm_nodes_reaching(&graph, &candidates, &mut confirmed, &mut progress);

        assert_eq!(newly, 4);
        assert_eq!(confirmed.len(), 5);
        assert!(!confirmed.contains(&x));
        assert_eq!(progress.processed(), 6);
    }

    #[test]
    fn test_confirmation_independent_of_order() {
        let (a, b, c, d) = (p(0.0, 0.0), p(1.0, 0.0), p(2.0, 0.0), p(3.0, 0.0));
        let graph = graph_of(&[(a, b), (b, c), (c, a), (c, d)]);

        let forward = vec![a, b, c, d];
        let mut backward = forward.clone();
        backward.reverse();

        let mut results = Vec::new();
        for order in [forward, backward] {
            let mut confirmed: AHashSet<Point> = [a].into_iter().collect();
            let mut sink = NoProgress;
            let mut progress =
                ProgressCounter::new(&mut sink, PrunePhase::BackwardReachability, 4, 0);
            confirm_nodes_reaching(&graph, &order, &mut confirmed, &mut progress);
            let mut sorted: Vec<Point> = confirmed.into_iter().collect();
            sorted.sort();
            results.push(sorted);
        }

        assert_eq!(results[0], results[1]);
        assert_eq!(results[0], vec![a, b, c]);
    }
}
