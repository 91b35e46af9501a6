//! SVG snapshot of a laid-out graph.

use std::{fs::File, io::Write, path::Path};

use log::{debug, info};
use svg::{Document, node::element as svg_element};

use orbweaver_core::graph::Graph;

use crate::OrbweaverError;

/// Stroke width of an edge carrying the maximum weight.
const EDGE_THICKNESS: f32 = 1.5;

/// Renders a graph to a static SVG image.
///
/// Edges are drawn first so node discs sit on top. Stroke width scales
/// with each edge's share of the maximum weight; node radii can scale
/// with degree between `node_min` and `node_max`.
#[derive(Debug, Clone)]
pub struct SvgSnapshot {
    width: f32,
    height: f32,
    node_min: f32,
    node_max: f32,
    show_labels: bool,
}

impl SvgSnapshot {
    /// Creates a snapshot renderer for the given canvas extent.
    ///
    /// Node radii default to each node's own display radius and labels are
    /// off.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            node_min: orbweaver_core::graph::DEFAULT_RADIUS,
            node_max: orbweaver_core::graph::DEFAULT_RADIUS,
            show_labels: false,
        }
    }

    /// Scales node radii with degree between `min` and `max`.
    pub fn with_node_radii(mut self, min: f32, max: f32) -> Self {
        self.node_min = min;
        self.node_max = max;
        self
    }

    /// Draws each node's label next to its disc.
    pub fn with_labels(mut self, show: bool) -> Self {
        self.show_labels = show;
        self
    }

    /// Renders the graph into an SVG document.
    pub fn render(&self, graph: &Graph) -> Document {
        let mut doc = Document::new()
            .set("viewBox", format!("0 0 {} {}", self.width, self.height))
            .set("width", self.width)
            .set("height", self.height);

        let max_weight = graph.max_weight();
        for edge in graph.edges() {
            let from = graph.nodes()[edge.a()].position();
            let to = graph.nodes()[edge.b()].position();
            let stroke = if max_weight > 0.0 {
                EDGE_THICKNESS * (edge.weight() / max_weight)
            } else {
                EDGE_THICKNESS
            };
            let line = svg_element::Line::new()
                .set("x1", from.x())
                .set("y1", from.y())
                .set("x2", to.x())
                .set("y2", to.y())
                .set("stroke", "#4a4a4a")
                .set("stroke-width", stroke);
            doc = doc.add(line);
        }

        for node in graph.nodes() {
            let radius = graph.scaled_radius(node.id(), self.node_min, self.node_max);
            let circle = svg_element::Circle::new()
                .set("cx", node.position().x())
                .set("cy", node.position().y())
                .set("r", radius)
                .set("fill", "#2f6fba")
                .set("stroke", "#1d456f");
            doc = doc.add(circle);

            if self.show_labels {
                let text = svg_element::Text::new(node.label())
                    .set("x", node.position().x() + radius + 2.0)
                    .set("y", node.position().y())
                    .set("font-size", 11);
                doc = doc.add(text);
            }
        }

        debug!(
            nodes = graph.node_count(),
            edges = graph.edges().len();
            "Rendered SVG snapshot"
        );
        doc
    }

    /// Renders the graph and writes it to `path`.
    pub fn write(&self, graph: &Graph, path: impl AsRef<Path>) -> Result<(), OrbweaverError> {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Writing SVG snapshot");

        let doc = self.render(graph);
        let mut file = File::create(path)?;
        write!(file, "{doc}")?;

        Ok(())
    }
}
