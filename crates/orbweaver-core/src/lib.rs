//! Orbweaver Core Types
//!
//! This crate provides the foundational types for Orbweaver graph layouts.
//! It includes:
//!
//! - **Geometry**: the 2D [`geometry::Point`] type used for node positions
//!   and force vectors
//! - **Force kernel**: the pure repulsive/attractive force functions of the
//!   Fruchterman-Reingold model ([`force`] module)
//! - **Graph model**: nodes, weighted undirected edges, and the adjacency
//!   structure ([`graph`] module)

pub mod error;
pub mod force;
pub mod geometry;
pub mod graph;

pub use error::GraphError;
