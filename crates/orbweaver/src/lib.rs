//! Orbweaver - force-directed graph layout.
//!
//! Orbweaver loads a graph from a GML description, seeds node positions
//! with a placement generator, and iterates a Fruchterman-Reingold
//! simulation until the layout reaches equilibrium. The driver owns the
//! step cadence: each [`Simulation::step`] call runs exactly one iteration
//! and reports whether the simulation should continue.
//!
//! # Examples
//!
//! ```rust
//! use orbweaver::{
//!     Algorithm, Placement, Simulation,
//!     geometry::Point,
//!     layout::FruchtermanParams,
//! };
//!
//! let source = "graph [ node [ id 0 ] node [ id 1 ] edge [ source 0 target 1 ] ]";
//! let mut graph = orbweaver::gml::load_str(source).expect("valid GML");
//!
//! let params = FruchtermanParams::for_canvas(graph.node_count(), 400.0, 400.0);
//! let mut placement = Placement::from_seed(7);
//! placement.scatter_circle(&mut graph, Point::new(200.0, 200.0), 160.0);
//!
//! let mut simulation = Simulation::new();
//! simulation.configure(Algorithm::FruchtermanReingold(params));
//! while simulation.step(&mut graph).expect("configured") {}
//! ```

pub mod export;
pub mod layout;
pub mod placement;

mod error;

pub use orbweaver_core::{force, geometry, graph};
pub use orbweaver_gml as gml;

pub use error::OrbweaverError;
pub use layout::{Algorithm, LayoutError, Simulation};
pub use placement::Placement;
