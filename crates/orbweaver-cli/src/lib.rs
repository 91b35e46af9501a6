//! CLI logic for the Orbweaver layout tool.
//!
//! Wires the pipeline together: load a GML file, seed node positions, run
//! the simulation to equilibrium (or an iteration cap), and write an SVG
//! snapshot plus an optional JSON position dump.

mod args;

pub mod config;

pub use args::Args;

use std::{fs, io, time::Instant};

use log::{info, warn};
use serde::Serialize;
use thiserror::Error;

use orbweaver::{
    Algorithm, OrbweaverError, Placement, Simulation,
    export::SvgSnapshot,
    geometry::Point,
    gml,
    graph::Graph,
    layout::{FruchtermanParams, LayoutError},
};

use crate::config::{ConfigError, PlacementMode};

/// Errors surfaced by the CLI pipeline.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Load(#[from] gml::LoadError),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    Export(#[from] OrbweaverError),

    #[error("Failed to serialize node positions: {0}")]
    Positions(#[from] serde_json::Error),
}

/// Run the Orbweaver CLI application
///
/// Loads the input graph, runs the layout simulation, and writes the
/// requested output files.
///
/// # Errors
///
/// Returns `CliError` for file I/O errors, configuration loading errors,
/// GML parsing errors, and layout errors.
pub fn run(args: &Args) -> Result<(), CliError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Laying out graph"
    );

    let config = config::load_config(args.config.as_ref())?;
    let canvas = config.canvas();

    let mut graph = gml::load_path(&args.input)?;
    info!(
        nodes = graph.node_count(),
        edges = graph.edges().len();
        "Loaded graph"
    );

    let params = FruchtermanParams::with_constant(
        graph.node_count(),
        canvas.width(),
        canvas.height(),
        config.layout().constant(),
    )
    .with_cooling(config.layout().cooling());

    let mut placement = match args.seed {
        Some(seed) => Placement::from_seed(seed),
        None => Placement::new(),
    };
    let center = Point::new(canvas.width() / 2.0, canvas.height() / 2.0);
    match config.layout().placement() {
        PlacementMode::Circle => {
            placement.scatter_circle(&mut graph, center, 0.4 * canvas.height());
        }
        PlacementMode::Rect => {
            placement.scatter_rect(&mut graph, center, params.ideal_length);
        }
    }

    let mut simulation = Simulation::new();
    simulation.set_gravity(config.layout().gravity());
    simulation.configure(Algorithm::FruchtermanReingold(params));

    let started = Instant::now();
    while simulation.step(&mut graph)? {
        if simulation.iterations() >= args.max_iterations {
            warn!(iterations = simulation.iterations(); "Iteration cap reached before equilibrium");
            break;
        }
    }
    info!(
        iterations = simulation.iterations(),
        converged = simulation.is_done(),
        elapsed_ms = started.elapsed().as_millis() as u64;
        "Simulation finished"
    );

    let display = config.display();
    SvgSnapshot::new(canvas.width(), canvas.height())
        .with_node_radii(display.node_min(), display.node_max())
        .with_labels(display.show_labels())
        .write(&graph, &args.output)?;
    info!(output_file = args.output; "SVG exported successfully");

    if let Some(path) = &args.positions {
        write_positions(&graph, path)?;
    }

    Ok(())
}

#[derive(Serialize)]
struct PositionRecord<'a> {
    id: usize,
    label: &'a str,
    x: f32,
    y: f32,
}

fn write_positions(graph: &Graph, path: &str) -> Result<(), CliError> {
    let records: Vec<PositionRecord<'_>> = graph
        .nodes()
        .iter()
        .map(|node| PositionRecord {
            id: node.id(),
            label: node.label(),
            x: node.position().x(),
            y: node.position().y(),
        })
        .collect();

    fs::write(path, serde_json::to_string_pretty(&records)?)?;
    info!(path = path; "Wrote node positions");

    Ok(())
}
