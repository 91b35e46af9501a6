//! The graph model: nodes, weighted undirected edges, and adjacency.
//!
//! A [`Graph`] owns its node and edge sequences. Node ids are assigned at
//! construction time and always equal the node's index, so the adjacency
//! list and edge endpoints are plain indices into the node sequence.

use log::debug;

use crate::{error::GraphError, geometry::Point};

/// Display radius a node starts out with before any degree-based scaling.
pub const DEFAULT_RADIUS: f32 = 8.0;

/// A single graph node.
///
/// The `radius` is a display attribute cached on the node for the render
/// collaborator; the simulation only reads it to keep nodes inside the
/// canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    id: usize,
    position: Point,
    label: String,
    radius: f32,
}

impl Node {
    /// Creates an unlabeled node at the given position.
    ///
    /// The id is assigned (and an empty label replaced by the decimal id)
    /// when the node enters a [`Graph`].
    pub fn new(position: Point) -> Self {
        Self {
            id: 0,
            position,
            label: String::new(),
            radius: DEFAULT_RADIUS,
        }
    }

    /// Creates a labeled node at the origin.
    pub fn labeled(label: impl Into<String>) -> Self {
        Self {
            id: 0,
            position: Point::default(),
            label: label.into(),
            radius: DEFAULT_RADIUS,
        }
    }

    /// Returns the node id assigned by the owning graph.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Returns the current position of the node.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Moves the node to a new position.
    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    /// Returns the display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the cached display radius.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Updates the cached display radius.
    pub fn set_radius(&mut self, radius: f32) {
        self.radius = radius;
    }
}

/// An undirected weighted edge between two node ids.
///
/// Graph construction normalizes endpoints so that `a() <= b()`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    a: usize,
    b: usize,
    weight: f32,
}

impl Edge {
    /// Creates an edge with the default weight of 1.
    pub fn new(a: usize, b: usize) -> Self {
        Self::weighted(a, b, 1.0)
    }

    /// Creates an edge with an explicit non-negative weight.
    pub fn weighted(a: usize, b: usize, weight: f32) -> Self {
        Self { a, b, weight }
    }

    /// Returns the lower endpoint (after normalization).
    pub fn a(&self) -> usize {
        self.a
    }

    /// Returns the higher endpoint (after normalization).
    pub fn b(&self) -> usize {
        self.b
    }

    /// Returns the edge weight.
    pub fn weight(&self) -> f32 {
        self.weight
    }

    /// Returns the edge with endpoints ordered so that `a <= b`.
    fn normalized(self) -> Self {
        if self.b < self.a {
            Self {
                a: self.b,
                b: self.a,
                weight: self.weight,
            }
        } else {
            self
        }
    }
}

/// An undirected weighted graph with an adjacency list.
///
/// `max_degree` and `max_weight` are snapshots taken at construction time
/// and used for display scaling; [`Graph::add_node`] and [`Graph::add_edge`]
/// deliberately do not refresh them.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    adjacency: Vec<Vec<usize>>,
    max_degree: usize,
    max_weight: f32,
}

impl Graph {
    /// Builds a graph from node and edge sequences.
    ///
    /// Node ids are reassigned to `0..N` in sequence order and empty labels
    /// default to the decimal id. Edge endpoints are normalized to
    /// `a <= b`, edges are stably sorted by their lower endpoint, and every
    /// endpoint is validated against the node range.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidEdge`] when an edge references a node
    /// id outside `0..N`. No partial graph is produced.
    pub fn new(mut nodes: Vec<Node>, edges: Vec<Edge>) -> Result<Self, GraphError> {
        let node_count = nodes.len();

        for (id, node) in nodes.iter_mut().enumerate() {
            node.id = id;
            if node.label.is_empty() {
                node.label = id.to_string();
            }
        }

        let mut edges: Vec<Edge> = edges.into_iter().map(Edge::normalized).collect();
        // Stable order by lower endpoint, convenient for adjacency scans.
        edges.sort_by_key(|edge| edge.a);

        let mut adjacency = vec![Vec::new(); node_count];
        for edge in &edges {
            if edge.a >= node_count || edge.b >= node_count {
                return Err(GraphError::InvalidEdge {
                    a: edge.a,
                    b: edge.b,
                    node_count,
                });
            }
            adjacency[edge.a].push(edge.b);
            adjacency[edge.b].push(edge.a);
        }

        let max_degree = adjacency.iter().map(Vec::len).max().unwrap_or(0);
        let max_weight = edges.iter().map(Edge::weight).fold(0.0, f32::max);

        debug!(
            node_count,
            edge_count = edges.len(),
            max_degree,
            max_weight;
            "Constructed graph"
        );

        Ok(Self {
            nodes,
            edges,
            adjacency,
            max_degree,
            max_weight,
        })
    }

    /// Appends a node, assigning it the next id and an empty adjacency entry.
    ///
    /// Does not update the `max_degree`/`max_weight` snapshots.
    pub fn add_node(&mut self, mut node: Node) {
        node.id = self.nodes.len();
        if node.label.is_empty() {
            node.label = node.id.to_string();
        }
        self.nodes.push(node);
        self.adjacency.push(Vec::new());
    }

    /// Appends an edge and links both endpoints in the adjacency list.
    ///
    /// The caller is responsible for endpoint validity and ordering; no
    /// normalization or validation is performed, and the
    /// `max_degree`/`max_weight` snapshots are not updated.
    ///
    /// # Panics
    ///
    /// Panics if an endpoint does not reference an existing node.
    pub fn add_edge(&mut self, edge: Edge) {
        self.adjacency[edge.a].push(edge.b);
        self.adjacency[edge.b].push(edge.a);
        self.edges.push(edge);
    }

    /// Returns the node sequence, indexed by node id.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Returns the node sequence mutably.
    ///
    /// Used by placement generators and the layout engine to move nodes.
    pub fn nodes_mut(&mut self) -> &mut [Node] {
        &mut self.nodes
    }

    /// Returns the edge sequence, sorted by lower endpoint.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the neighbor ids of a node.
    pub fn neighbors(&self, id: usize) -> &[usize] {
        &self.adjacency[id]
    }

    /// Returns the degree (neighbor count) of a node.
    pub fn degree(&self, id: usize) -> usize {
        self.adjacency[id].len()
    }

    /// Returns the number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the largest node degree at construction time.
    pub fn max_degree(&self) -> usize {
        self.max_degree
    }

    /// Returns the largest edge weight at construction time.
    pub fn max_weight(&self) -> f32 {
        self.max_weight
    }

    /// Derives a display radius for a node, interpolating between `min` and
    /// `max` by the node's share of the maximum degree.
    pub fn scaled_radius(&self, id: usize, min: f32, max: f32) -> f32 {
        if self.max_degree == 0 {
            return min;
        }
        min + (max - min) * (self.degree(id) as f32 / self.max_degree as f32)
    }
}
