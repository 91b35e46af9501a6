//! One iteration of the Fruchterman-Reingold simulation.

use log::trace;

use orbweaver_core::{
    force,
    geometry::Point,
    graph::Graph,
};

use super::params::FruchtermanParams;

/// Mutable per-run state of a Fruchterman-Reingold simulation.
#[derive(Debug)]
pub(super) struct State {
    params: FruchtermanParams,
    temperature: f32,
    done: bool,
}

impl State {
    pub(super) fn new(params: FruchtermanParams) -> Self {
        Self {
            params,
            temperature: params.initial_temperature(),
            done: false,
        }
    }

    /// Restores the starting temperature and clears the done flag.
    pub(super) fn reset(&mut self) {
        self.temperature = self.params.initial_temperature();
        self.done = false;
    }

    pub(super) fn done(&self) -> bool {
        self.done
    }

    pub(super) fn temperature(&self) -> f32 {
        self.temperature
    }

    /// Runs a single iteration: accumulate forces, clamp against the
    /// temperature, move nodes, cool. Returns the new done flag.
    ///
    /// Equilibrium is declared when every clamped per-axis displacement
    /// falls below `threshold`. Since the clamp caps displacements at the
    /// temperature, cooling guarantees eventual termination.
    pub(super) fn step(&mut self, graph: &mut Graph, gravity: f32, threshold: f32) -> bool {
        let node_count = graph.node_count();
        let mut equilibrium = true;

        if node_count > 0 {
            let l = self.params.ideal_length;
            let mut forces = vec![Point::default(); node_count];

            // Pairwise repulsion; each pair is visited once and the force
            // applied with opposite signs to both endpoints.
            for i in 0..node_count {
                for j in (i + 1)..node_count {
                    let push = force::repulsive(
                        graph.nodes()[i].position(),
                        graph.nodes()[j].position(),
                        l,
                    );
                    forces[i] = forces[i].add_point(push);
                    forces[j] = forces[j].sub_point(push);
                }
            }

            // Spring attraction along edges.
            for edge in graph.edges() {
                let pull = force::attractive(
                    graph.nodes()[edge.a()].position(),
                    graph.nodes()[edge.b()].position(),
                    l,
                );
                forces[edge.a()] = forces[edge.a()].add_point(pull);
                forces[edge.b()] = forces[edge.b()].sub_point(pull);
            }

            let scale = 1.0 / node_count as f32;
            let center = Point::new(self.params.width / 2.0, self.params.height / 2.0);
            let lower_right = Point::new(self.params.width, self.params.height);

            for (id, node) in graph.nodes_mut().iter_mut().enumerate() {
                // Centering pull uses the canvas height as its rest length,
                // so it only dominates far from the middle.
                let centering = force::attractive(node.position(), center, self.params.height)
                    .scale(gravity);
                let force = forces[id].scale(scale).add_point(centering.scale(scale));

                // Sign-preserving clamp of each axis to the temperature.
                let dx = force.x().abs().min(self.temperature).copysign(force.x());
                let dy = force.y().abs().min(self.temperature).copysign(force.y());

                if dx.abs() > threshold || dy.abs() > threshold {
                    equilibrium = false;
                }

                let radius = node.radius();
                let min = Point::new(radius, radius);
                let max = lower_right.sub_point(min);
                let moved = node
                    .position()
                    .add_point(Point::new(dx, dy))
                    .clamp(min, max);
                node.set_position(moved);
            }
        }

        self.temperature *= self.params.cooling;
        self.done = equilibrium;
        trace!(
            temperature = self.temperature,
            equilibrium = equilibrium;
            "Completed layout iteration"
        );
        self.done
    }
}
