// Copyright Kyler Chin <kyler@catenarymaps.org>
// Catenary Transit Initiatives
// Attribution cannot be removed

//! Graph pruning: keep only the region mutually reachable with a center node.

pub mod center;
pub mod efficient_center;
pub mod progress;
pub mod reachability;


use crate::point::Point;
use crate::road_graph::PointGraph;
use thiserror::Error;

pub use center::select_center;
pub use efficient_center::EfficientCenterPruner;
pub use progress::{NoProgress, ProgressSink, PrunePhase, TracingProgress};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PruneError {
    #[error("Cannot prune an empty graph")]
    EmptyGraph,
    #[error("Center {0} is not a node of the graph")]
    CenterNotInGraph(Point),
}

/// Outcome of one pruning run.
#[derive(Debug, Clone, PartialEq)]
pub struct PruneReport {
    pub center: Point,
    pub initial_nodes: usize,
    /// Nodes dropped because the center cannot reach them.
    pub unreachable_removed: usize,
    /// Nodes dropped because they cannot route back to the center.
    pub non_returning_removed: usize,
    pub remaining_nodes: usize,
}

impl PruneReport {
    pub fn total_removed(&self) -> usize {
        self.unreachable_removed + self.non_returning_removed
    }
}

/// A pass that removes nodes from a graph in place.
pub trait Pruner<G: PointGraph> {
    fn prune(&self, graph: &mut G) -> Result<PruneReport, PruneError>;

    fn status_message(&self) -> &'static str;
}
