// Copyright: Kyler Chin <kyler@catenarymaps.org>
// Catenary Transit Initiatives
// Removal of the attribution is not allowed, as covered under the AGPL license

//! Reduces a directed road graph to the region around its geometric center
//! where every node is reachable from the center and can reach it back.
//!
//! ```no_run
//! use catenary_pruner::{EfficientCenterPruner, Point, PointGraph, Pruner, RoadGraph};
//!
//! let a = Point::new(0.0, 0.0);
//! let b = Point::new(1.0, 0.0);
//! let mut graph = RoadGraph::from_connections([(a, b, ()), (b, a, ())]).unwrap();
//!
//! let report = EfficientCenterPruner::default().prune(&mut graph).unwrap();
//! assert_eq!(report.remaining_nodes, graph.node_count());
//! ```

#![deny(
    clippy::mutable_key_type,
    clippy::map_entry,
    clippy::boxed_local,
    clippy::let_unit_value,
    clippy::redundant_allocation,
    clippy::bool_comparison,
    clippy::bind_instead_of_map,
    clippy::vec_box,
    clippy::while_let_loop,
    clippy::useless_asref,
    clippy::repeat_once,
    clippy::deref_addrof,
    clippy::suspicious_map,
    clippy::single_char_pattern,
    clippy::for_kv_map,
    clippy::let_and_return,
    clippy::iter_nth,
    clippy::iter_cloned_collect,
    clippy::cmp_owned,
    clippy::op_ref
)]

pub mod config;
pub mod point;
pub mod pruner;
pub mod road_graph;

pub use config::{ConfigError, PrunerConfig};
pub use point::Point;
pub use pruner::{
    EfficientCenterPruner, NoProgress, ProgressSink, PruneError, PrunePhase, PruneReport, Pruner,
    TracingProgress,
};
pub use road_graph::{EdgeData, GraphError, PointGraph, RoadGraph};
