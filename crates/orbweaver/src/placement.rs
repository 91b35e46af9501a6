//! Initial node placement.
//!
//! A layout run starts from randomized positions; the generators here seed
//! them either scattered in a rectangle around a center point or on a
//! circle. All randomness flows through one owned RNG so a fixed seed
//! reproduces the same starting layout, and with it the whole run.

use std::f32::consts::TAU;

use log::debug;
use rand::{Rng, SeedableRng, rngs::StdRng};

use orbweaver_core::{geometry::Point, graph::Graph};

/// Randomized initial placement of graph nodes.
#[derive(Debug)]
pub struct Placement {
    rng: StdRng,
}

impl Placement {
    /// Creates a generator seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a generator with a fixed seed for reproducible layouts.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Scatters every node uniformly in the square of half-width `spread`
    /// around `center`.
    pub fn scatter_rect(&mut self, graph: &mut Graph, center: Point, spread: f32) {
        debug!(
            nodes = graph.node_count(),
            spread = spread;
            "Scattering nodes in a rectangle"
        );
        for node in graph.nodes_mut() {
            let offset = Point::new(
                self.rng.random_range(-spread..=spread),
                self.rng.random_range(-spread..=spread),
            );
            node.set_position(center.add_point(offset));
        }
    }

    /// Places every node at a random angle on the circle of the given
    /// `radius` around `center`.
    pub fn scatter_circle(&mut self, graph: &mut Graph, center: Point, radius: f32) {
        debug!(
            nodes = graph.node_count(),
            radius = radius;
            "Scattering nodes on a circle"
        );
        for node in graph.nodes_mut() {
            let angle = self.rng.random_range(0.0..TAU);
            let offset = Point::new(radius * angle.cos(), radius * angle.sin());
            node.set_position(center.add_point(offset));
        }
    }
}

impl Default for Placement {
    fn default() -> Self {
        Self::new()
    }
}
