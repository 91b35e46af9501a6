//! Layout engine for force-directed graph drawing.
//!
//! The engine is driven through a [`Simulation`] session: configure an
//! [`Algorithm`], then call [`Simulation::step`] once per frame (or in a
//! tight loop) until it reports that equilibrium has been reached. The
//! result depends only on the number of steps taken, never on wall-clock
//! time, so the driver is free to choose any cadence.

mod fruchterman;
pub mod params;

pub use params::FruchtermanParams;

use log::debug;
use thiserror::Error;

use orbweaver_core::graph::Graph;

/// Errors raised by the layout engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// A step was requested before any algorithm was configured.
    #[error("no layout algorithm has been configured")]
    Unconfigured,
}

/// Selection of a layout algorithm together with its configuration.
///
/// Only Fruchterman-Reingold is implemented; the enum is the seam where
/// further force-directed variants would slot in.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Algorithm {
    FruchtermanReingold(FruchtermanParams),
}

#[derive(Debug)]
enum State {
    FruchtermanReingold(fruchterman::State),
}

/// A layout simulation session.
///
/// Owns all mutable layout state (algorithm configuration, temperature,
/// iteration counter, done flag); the [`Graph`] it operates on is passed
/// into each step by the driver. A fresh session is unconfigured and
/// refuses to step until [`Simulation::configure`] is called.
#[derive(Debug)]
pub struct Simulation {
    state: Option<State>,
    iterations: u32,
    gravity: f32,
    threshold: f32,
}

impl Simulation {
    /// Default pull strength toward the canvas center.
    pub const DEFAULT_GRAVITY: f32 = 1.0;

    /// Default per-axis force magnitude below which a node counts as
    /// settled.
    pub const DEFAULT_THRESHOLD: f32 = 0.1;

    /// Creates an unconfigured session.
    pub fn new() -> Self {
        Self {
            state: None,
            iterations: 0,
            gravity: Self::DEFAULT_GRAVITY,
            threshold: Self::DEFAULT_THRESHOLD,
        }
    }

    /// Configures (or reconfigures) the layout algorithm.
    ///
    /// Resets the iteration counter, reinitializes the temperature from
    /// the canvas height, and clears the done flag. Node positions are not
    /// touched; seed them with a [`Placement`](crate::Placement) before the
    /// first step.
    pub fn configure(&mut self, algorithm: Algorithm) {
        match algorithm {
            Algorithm::FruchtermanReingold(params) => {
                debug!(
                    ideal_length = params.ideal_length,
                    cooling = params.cooling,
                    width = params.width,
                    height = params.height;
                    "Configured Fruchterman-Reingold layout"
                );
                self.state = Some(State::FruchtermanReingold(fruchterman::State::new(params)));
            }
        }
        self.iterations = 0;
    }

    /// Runs one simulation iteration over the graph.
    ///
    /// Returns `Ok(true)` while the simulation should continue and
    /// `Ok(false)` once equilibrium has been reached; stepping a finished
    /// session is a no-op that keeps returning `Ok(false)`.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::Unconfigured`] if no algorithm has been
    /// configured.
    pub fn step(&mut self, graph: &mut Graph) -> Result<bool, LayoutError> {
        let state = self.state.as_mut().ok_or(LayoutError::Unconfigured)?;

        match state {
            State::FruchtermanReingold(fr) => {
                if fr.done() {
                    return Ok(false);
                }
                self.iterations += 1;
                let done = fr.step(graph, self.gravity, self.threshold);
                Ok(!done)
            }
        }
    }

    /// Clears the done flag and reinitializes the temperature.
    ///
    /// Node positions are untouched; the caller reseeds them through a
    /// placement generator if a fresh start is wanted.
    pub fn reset(&mut self) {
        match &mut self.state {
            Some(State::FruchtermanReingold(fr)) => fr.reset(),
            None => {}
        }
    }

    /// Returns whether the simulation has reached equilibrium.
    pub fn is_done(&self) -> bool {
        match &self.state {
            Some(State::FruchtermanReingold(fr)) => fr.done(),
            None => false,
        }
    }

    /// Returns the number of iterations executed since configuration.
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Returns the current temperature, or `None` when unconfigured.
    pub fn temperature(&self) -> Option<f32> {
        match &self.state {
            Some(State::FruchtermanReingold(fr)) => Some(fr.temperature()),
            None => None,
        }
    }

    /// Returns the centering pull strength.
    pub fn gravity(&self) -> f32 {
        self.gravity
    }

    /// Sets the centering pull strength.
    pub fn set_gravity(&mut self, gravity: f32) {
        self.gravity = gravity;
    }

    /// Returns the equilibrium threshold.
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Sets the equilibrium threshold.
    pub fn set_threshold(&mut self, threshold: f32) {
        self.threshold = threshold;
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orbweaver_core::{
        geometry::Point,
        graph::{Edge, Node},
    };

    fn two_node_graph(p0: Point, p1: Point) -> Graph {
        Graph::new(
            vec![Node::new(p0), Node::new(p1)],
            vec![Edge::new(0, 1)],
        )
        .unwrap()
    }

    fn configured(params: FruchtermanParams) -> Simulation {
        let mut simulation = Simulation::new();
        simulation.configure(Algorithm::FruchtermanReingold(params));
        simulation
    }

    #[test]
    fn stepping_unconfigured_session_is_an_error() {
        let mut graph = two_node_graph(Point::new(10.0, 10.0), Point::new(20.0, 20.0));
        let mut simulation = Simulation::new();

        assert_eq!(
            simulation.step(&mut graph),
            Err(LayoutError::Unconfigured)
        );
        assert!(!simulation.is_done());
        assert_eq!(simulation.temperature(), None);
    }

    #[test]
    fn configure_initializes_temperature_from_canvas_height() {
        let simulation = configured(FruchtermanParams::for_canvas(2, 400.0, 400.0));
        assert_eq!(simulation.temperature(), Some(50.0));
        assert_eq!(simulation.iterations(), 0);
    }

    #[test]
    fn temperature_is_strictly_decreasing_while_running() {
        let mut graph = two_node_graph(Point::new(100.0, 200.0), Point::new(300.0, 200.0));
        let mut simulation = configured(FruchtermanParams::for_canvas(2, 400.0, 400.0));

        let mut last = simulation.temperature().unwrap();
        for _ in 0..20 {
            simulation.step(&mut graph).unwrap();
            let current = simulation.temperature().unwrap();
            assert!(current < last);
            last = current;
        }
    }

    #[test]
    fn two_nodes_reach_equilibrium_within_bound() {
        let mut graph = two_node_graph(Point::new(40.0, 60.0), Point::new(45.0, 62.0));
        // Aggressive cooling bounds the number of iterations needed: once
        // the temperature drops below the threshold every clamped force
        // does too.
        let params = FruchtermanParams {
            ideal_length: 200.0,
            cooling: 0.85,
            width: 400.0,
            height: 400.0,
        };
        let mut simulation = configured(params);

        let mut steps = 0;
        while simulation.step(&mut graph).unwrap() {
            steps += 1;
            assert!(steps < 50, "simulation failed to converge");
        }

        assert!(simulation.is_done());
        assert!(simulation.iterations() < 50);
    }

    #[test]
    fn stepping_after_done_is_a_no_op() {
        let mut graph = two_node_graph(Point::new(40.0, 60.0), Point::new(45.0, 62.0));
        let params = FruchtermanParams {
            ideal_length: 200.0,
            cooling: 0.85,
            width: 400.0,
            height: 400.0,
        };
        let mut simulation = configured(params);

        while simulation.step(&mut graph).unwrap() {}
        let iterations = simulation.iterations();
        let positions: Vec<Point> = graph.nodes().iter().map(|n| n.position()).collect();

        assert_eq!(simulation.step(&mut graph), Ok(false));
        assert_eq!(simulation.iterations(), iterations);
        let after: Vec<Point> = graph.nodes().iter().map(|n| n.position()).collect();
        assert_eq!(positions, after);
    }

    #[test]
    fn reset_restores_temperature_and_clears_done() {
        let mut graph = two_node_graph(Point::new(40.0, 60.0), Point::new(45.0, 62.0));
        let params = FruchtermanParams {
            ideal_length: 200.0,
            cooling: 0.85,
            width: 400.0,
            height: 400.0,
        };
        let mut simulation = configured(params);

        while simulation.step(&mut graph).unwrap() {}
        assert!(simulation.is_done());

        simulation.reset();
        assert!(!simulation.is_done());
        assert_eq!(simulation.temperature(), Some(50.0));

        // Disturb the layout so the next step has real work to do.
        graph.nodes_mut()[0].set_position(Point::new(10.0, 10.0));
        graph.nodes_mut()[1].set_position(Point::new(12.0, 10.0));
        assert_eq!(simulation.step(&mut graph), Ok(true));
    }

    #[test]
    fn nodes_stay_inside_canvas_after_every_step() {
        let mut graph = Graph::new(
            vec![
                Node::new(Point::new(5.0, 5.0)),
                Node::new(Point::new(395.0, 5.0)),
                Node::new(Point::new(5.0, 395.0)),
                Node::new(Point::new(395.0, 395.0)),
            ],
            vec![Edge::new(0, 1), Edge::new(2, 3)],
        )
        .unwrap();
        let mut simulation = configured(FruchtermanParams::for_canvas(4, 400.0, 400.0));

        for _ in 0..100 {
            let _ = simulation.step(&mut graph).unwrap();
            for node in graph.nodes() {
                let radius = node.radius();
                let pos = node.position();
                assert!(pos.x() >= radius && pos.x() <= 400.0 - radius);
                assert!(pos.y() >= radius && pos.y() <= 400.0 - radius);
            }
        }
    }

    #[test]
    fn coincident_nodes_do_not_blow_up() {
        let mut graph = two_node_graph(Point::new(100.0, 300.0), Point::new(100.0, 300.0));
        let mut simulation = configured(FruchtermanParams::for_canvas(2, 400.0, 400.0));

        for _ in 0..10 {
            let _ = simulation.step(&mut graph).unwrap();
        }

        // The epsilon distance floor keeps every force finite even when the
        // pair starts stacked.
        for node in graph.nodes() {
            assert!(node.position().x().is_finite());
            assert!(node.position().y().is_finite());
        }
    }

    #[test]
    fn trajectories_are_deterministic_for_identical_initial_state() {
        let params = FruchtermanParams::for_canvas(3, 400.0, 400.0);
        let initial = [
            Point::new(50.0, 50.0),
            Point::new(350.0, 80.0),
            Point::new(200.0, 300.0),
        ];

        let run = || {
            let mut graph = Graph::new(
                initial.iter().map(|&p| Node::new(p)).collect(),
                vec![Edge::new(0, 1), Edge::new(1, 2)],
            )
            .unwrap();
            let mut simulation = configured(params);
            let mut trajectory = Vec::new();
            for _ in 0..200 {
                if !simulation.step(&mut graph).unwrap() {
                    break;
                }
                trajectory.push(
                    graph
                        .nodes()
                        .iter()
                        .map(|n| n.position())
                        .collect::<Vec<_>>(),
                );
            }
            (trajectory, simulation.iterations())
        };

        let (first_trajectory, first_iterations) = run();
        let (second_trajectory, second_iterations) = run();

        assert_eq!(first_trajectory, second_trajectory);
        assert_eq!(first_iterations, second_iterations);
    }

    #[test]
    fn empty_graph_is_immediately_in_equilibrium() {
        let mut graph = Graph::new(vec![], vec![]).unwrap();
        let mut simulation = configured(FruchtermanParams::for_canvas(0, 400.0, 400.0));

        assert_eq!(simulation.step(&mut graph), Ok(false));
        assert!(simulation.is_done());
    }
}
