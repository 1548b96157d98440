// Copyright Kyler Chin <kyler@catenarymaps.org>
// Catenary Transit Initiatives
// Attribution cannot be removed

use ahash::AHashSet;
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::center::select_center;
use super::progress::{ProgressCounter, ProgressSink, PrunePhase, TracingProgress};
use super::reachability::{confirm_nodes_reaching, reachable_from};
use super::{PruneError, PruneReport, Pruner};
use crate::config::PrunerConfig;
use crate::point::Point;
use crate::road_graph::PointGraph;

/// Keeps the nodes that are reachable from the centermost node and can reach
/// it back. Everything else is removed from the supplied graph.
#[derive(Debug, Clone, Default)]
pub struct EfficientCenterPruner {
    config: PrunerConfig,
}

impl EfficientCenterPruner {
    pub fn new(config: PrunerConfig) -> Self {
        Self { config }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            config: PrunerConfig {
                seed,
                ..Default::default()
            },
        }
    }

    pub fn config(&self) -> &PrunerConfig {
        &self.config
    }

    /// Full prune, reporting progress to `sink`.
    pub fn prune_with_progress<G, S>(
        &self,
        graph: &mut G,
        sink: &mut S,
    ) -> Result<PruneReport, PruneError>
    where
        G: PointGraph,
        S: ProgressSink + ?Sized,
    {
        let mut rng = StdRng::seed_from_u64(self.config.seed);
        let center = select_center(&*graph, &mut rng)?;
        self.prune_around(graph, center, sink)
    }

    /// Prunes around a caller chosen `center` instead of the centermost node.
    #[tracing::instrument(name = "prune_around", skip_all, fields(center = %center))]
    pub fn prune_around<G, S>(
        &self,
        graph: &mut G,
        center: Point,
        sink: &mut S,
    ) -> Result<PruneReport, PruneError>
    where
        G: PointGraph,
        S: ProgressSink + ?Sized,
    {
        if !graph.contains_node(&center) {
            return Err(PruneError::CenterNotInGraph(center));
        }

        let interval = self.config.progress_interval;
        let initial_nodes = graph.node_count();

        tracing::debug!(nodes = initial_nodes, "getting reachable nodes from center");
        let reachable = {
            let mut progress = ProgressCounter::new(
                &mut *sink,
                PrunePhase::ForwardReachability,
                initial_nodes,
                interval,
            );
            reachable_from(&*graph, center, &mut progress)
        };

        if reachable.len() == 1 && initial_nodes > 1 {
            tracing::warn!(
                nodes = initial_nodes,
                "Center has no outgoing connections, graph collapses to a single node"
            );
        }

        tracing::debug!(
            count = initial_nodes.saturating_sub(reachable.len()),
            "removing nodes unreachable from center"
        );
        let snapshot: Vec<Point> = graph.nodes().collect();
        {
            let mut progress = ProgressCounter::new(
                &mut *sink,
                PrunePhase::RemoveUnreachable,
                initial_nodes,
                interval,
            );
            for node in &snapshot {
                progress.tick();
                if !reachable.contains(node) {
                    graph.remove_node(node);
                }
            }
        }
        let unreachable_removed = initial_nodes - graph.node_count();

        tracing::debug!(
            nodes = reachable.len(),
            "getting nodes that can reach the center"
        );
        let mut confirmed = AHashSet::with_capacity(reachable.len());
        confirmed.insert(center);
        {
            let mut progress = ProgressCounter::new(
                &mut *sink,
                PrunePhase::BackwardReachability,
                reachable.len(),
                interval,
            );
            confirm_nodes_reaching(&*graph, &reachable, &mut confirmed, &mut progress);
        }

        let non_returning: Vec<Point> = reachable
            .iter()
            .filter(|node| !confirmed.contains(*node))
            .copied()
            .collect();
        let non_returning_removed = non_returning.len();

        tracing::debug!(
            count = non_returning_removed,
            "removing nodes that can not reach the center"
        );
        {
            let mut progress = ProgressCounter::new(
                &mut *sink,
                PrunePhase::RemoveNonReturning,
                non_returning.len(),
                interval,
            );
            for node in &non_returning {
                progress.tick();
                graph.remove_node(node);
            }
        }

        let report = PruneReport {
            center,
            initial_nodes,
            unreachable_removed,
            non_returning_removed,
            remaining_nodes: graph.node_count(),
        };

        tracing::info!(
            initial = report.initial_nodes,
            unreachable = report.unreachable_removed,
            non_returning = report.non_returning_removed,
            remaining = report.remaining_nodes,
            "EfficientCenterPruner pruned {} nodes from the graph",
            report.total_removed()
        );

        Ok(report)
    }
}

impl<G: PointGraph> Pruner<G> for EfficientCenterPruner {
    fn prune(&self, graph: &mut G) -> Result<PruneReport, PruneError> {
        self.prune_with_progress(graph, &mut TracingProgress)
    }

    fn status_message(&self) -> &'static str {
        "Pruning nodes not mutually reachable with the center"
    }
}
