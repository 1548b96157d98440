// Copyright Kyler Chin <kyler@catenarymaps.org>
// Catenary Transit Initiatives
// Attribution cannot be removed

//! In-memory directed road graph keyed by node coordinates.
//!
//! The pruner only talks to graphs through [`PointGraph`], so callers that
//! already hold their network in another structure can implement the trait
//! instead of copying into a [`RoadGraph`].

use crate::point::Point;
use ahash::{AHashMap, AHashSet};
use geo_types::LineString;
use rand::Rng;
use thiserror::Error;

/// The narrow graph interface consumed by the pruner.
pub trait PointGraph {
    fn node_count(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.node_count() == 0
    }

    /// All nodes, order unspecified.
    fn nodes(&self) -> impl Iterator<Item = Point> + '_;

    /// Targets of the edges leaving `node`. Empty when `node` is absent.
    fn outgoing(&self, node: &Point) -> impl Iterator<Item = Point> + '_;

    fn contains_node(&self, node: &Point) -> bool;

    /// Removes `node` and every edge touching it. Absent nodes are ignored.
    fn remove_node(&mut self, node: &Point);

    /// `(min corner, max corner)` of the bounding box, `None` when empty.
    fn extremes(&self) -> Option<(Point, Point)>;

    /// A uniformly chosen node, `None` when empty.
    fn random_node<R: Rng>(&self, rng: &mut R) -> Option<Point>;
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("Self loops are not allowed (node {0})")]
    SelfLoop(Point),
}

/// Attribute payload of a road segment. None of it matters for pruning.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EdgeData {
    /// Length in metres.
    pub length: Option<f64>,
    /// Maximum speed in km/h.
    pub max_speed: Option<f64>,
    pub geometry: Option<LineString<f64>>,
}

impl EdgeData {
    pub fn with_length(length: f64) -> Self {
        Self {
            length: Some(length),
            ..Default::default()
        }
    }
}

/// Directed graph whose nodes are points.
///
/// Nodes live in a `Vec` with a position index, so enumeration order only
/// depends on the sequence of insertions and removals. That keeps
/// [`PointGraph::random_node`] reproducible for a fixed seed.
#[derive(Debug, Clone)]
pub struct RoadGraph<E = EdgeData> {
    nodes: Vec<Point>,
    index: AHashMap<Point, usize>,
    outgoing: AHashMap<Point, AHashMap<Point, E>>,
    incoming: AHashMap<Point, AHashSet<Point>>,
    edge_count: usize,
}

impl<E> Default for RoadGraph<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> RoadGraph<E> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            index: AHashMap::new(),
            outgoing: AHashMap::new(),
            incoming: AHashMap::new(),
            edge_count: 0,
        }
    }

    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(nodes),
            index: AHashMap::with_capacity(nodes),
            outgoing: AHashMap::with_capacity(nodes),
            incoming: AHashMap::with_capacity(nodes),
            edge_count: 0,
        }
    }

    /// Builds a graph from `(from, to, data)` triples.
    pub fn from_connections<I>(connections: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (Point, Point, E)>,
    {
        let mut graph = Self::new();
        for (from, to, data) in connections {
            graph.add_connection(from, to, data)?;
        }
        Ok(graph)
    }

    /// Adds an isolated node. Returns false if it was already present.
    pub fn add_node(&mut self, node: Point) -> bool {
        if self.index.contains_key(&node) {
            return false;
        }
        self.index.insert(node, self.nodes.len());
        self.nodes.push(node);
        true
    }

    /// Adds the directed edge `from -> to`, creating missing endpoints.
    /// An existing edge keeps its place and gets `data` swapped in.
    pub fn add_connection(&mut self, from: Point, to: Point, data: E) -> Result<(), GraphError> {
        if from == to {
            return Err(GraphError::SelfLoop(from));
        }

        self.add_node(from);
        self.add_node(to);

        if self
            .outgoing
            .entry(from)
            .or_default()
            .insert(to, data)
            .is_none()
        {
            self.incoming.entry(to).or_default().insert(from);
            self.edge_count += 1;
        }

        Ok(())
    }

    pub fn connection(&self, from: &Point, to: &Point) -> Option<&E> {
        self.outgoing.get(from).and_then(|targets| targets.get(to))
    }

    pub fn has_connection(&self, from: &Point, to: &Point) -> bool {
        self.connection(from, to).is_some()
    }

    /// Sources of the edges entering `node`.
    pub fn incoming(&self, node: &Point) -> impl Iterator<Item = Point> + '_ {
        self.incoming
            .get(node)
            .into_iter()
            .flat_map(|sources| sources.iter().copied())
    }

    /// Every edge as `(from, to, data)`.
    pub fn connections(&self) -> impl Iterator<Item = (Point, Point, &E)> + '_ {
        self.outgoing.iter().flat_map(|(from, targets)| {
            targets.iter().map(move |(to, data)| (*from, *to, data))
        })
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
}

impl<E> PointGraph for RoadGraph<E> {
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn nodes(&self) -> impl Iterator<Item = Point> + '_ {
        self.nodes.iter().copied()
    }

    fn outgoing(&self, node: &Point) -> impl Iterator<Item = Point> + '_ {
        self.outgoing
            .get(node)
            .into_iter()
            .flat_map(|targets| targets.keys().copied())
    }

    fn contains_node(&self, node: &Point) -> bool {
        self.index.contains_key(node)
    }

    fn remove_node(&mut self, node: &Point) {
        let Some(position) = self.index.remove(node) else {
            return;
        };

        self.nodes.swap_remove(position);
        if let Some(moved) = self.nodes.get(position) {
            self.index.insert(*moved, position);
        }

        if let Some(targets) = self.outgoing.remove(node) {
            self.edge_count -= targets.len();
            for target in targets.keys() {
                if let Some(sources) = self.incoming.get_mut(target) {
                    sources.remove(node);
                }
            }
        }

        if let Some(sources) = self.incoming.remove(node) {
            for source in sources {
                if let Some(targets) = self.outgoing.get_mut(&source) {
                    if targets.remove(node).is_some() {
                        self.edge_count -= 1;
                    }
                }
            }
        }
    }

    fn extremes(&self) -> Option<(Point, Point)> {
        let first = self.nodes.first()?;
        let (mut min_x, mut min_y, mut max_x, mut max_y) =
            (first.x(), first.y(), first.x(), first.y());

        for node in &self.nodes {
            min_x = min_x.min(node.x());
            min_y = min_y.min(node.y());
            max_x = max_x.max(node.x());
            max_y = max_y.max(node.y());
        }

        Some((Point::new(min_x, min_y), Point::new(max_x, max_y)))
    }

    fn random_node<R: Rng>(&self, rng: &mut R) -> Option<Point> {
        if self.nodes.is_empty() {
            return None;
        }
        Some(self.nodes[rng.random_range(0..self.nodes.len())])
    }
}
