// Copyright Kyler Chin <kyler@catenarymaps.org>
// Catenary Transit Initiatives
// Attribution cannot be removed

use rand::Rng;

use super::PruneError;
use crate::point::Point;
use crate::road_graph::PointGraph;

/// Returns the node closest to the exact center of the area spanned by the
/// graph.
///
/// The scan starts from a random node drawn from `rng`, so nodes at the same
/// minimal distance are resolved by that draw and by enumeration order.
pub fn select_center<G, R>(graph: &G, rng: &mut R) -> Result<Point, PruneError>
where
    G: PointGraph,
    R: Rng,
{
    let (min, max) = graph.extremes().ok_or(PruneError::EmptyGraph)?;
    let exact_center = min.midpoint(&max);

    let mut center = graph.random_node(rng).ok_or(PruneError::EmptyGraph)?;
    let mut distance = center.distance(&exact_center);

    for node in graph.nodes() {
        let node_distance = node.distance(&exact_center);
        if node_distance < distance {
            center = node;
            distance = node_distance;
        }

        if center == exact_center {
            return Ok(center);
        }
    }

    Ok(center)
}
