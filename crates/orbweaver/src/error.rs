//! Error types for Orbweaver operations.
//!
//! This module provides the main error type [`OrbweaverError`] which wraps
//! the error conditions that can occur while loading and laying out a
//! graph.

use std::io;

use thiserror::Error;

use orbweaver_gml::LoadError;

use crate::layout::LayoutError;

/// The main error type for Orbweaver operations.
#[derive(Debug, Error)]
pub enum OrbweaverError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Layout(#[from] LayoutError),
}
