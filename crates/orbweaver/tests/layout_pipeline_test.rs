//! End-to-end layout over the public API: GML in, settled positions out.

use orbweaver::{
    Algorithm, Placement, Simulation,
    geometry::Point,
    layout::FruchtermanParams,
};

const RING: &str = r#"
graph [
  node [ id 0 ]
  node [ id 1 ]
  node [ id 2 ]
  node [ id 3 ]
  node [ id 4 ]
  node [ id 5 ]
  edge [ source 0 target 1 ]
  edge [ source 1 target 2 ]
  edge [ source 2 target 3 ]
  edge [ source 3 target 4 ]
  edge [ source 4 target 5 ]
  edge [ source 5 target 0 ]
]
"#;

#[test]
fn ring_layout_settles_inside_the_canvas() {
    let mut graph = orbweaver::gml::load_str(RING).unwrap();
    let (width, height) = (400.0, 400.0);

    let params = FruchtermanParams::for_canvas(graph.node_count(), width, height);
    Placement::from_seed(11).scatter_circle(
        &mut graph,
        Point::new(width / 2.0, height / 2.0),
        0.4 * height,
    );

    let mut simulation = Simulation::new();
    simulation.configure(Algorithm::FruchtermanReingold(params));

    let mut iterations = 0u32;
    while simulation.step(&mut graph).unwrap() {
        iterations += 1;
        assert!(iterations < 10_000, "ring layout failed to converge");
    }

    assert!(simulation.is_done());
    for node in graph.nodes() {
        let pos = node.position();
        let radius = node.radius();
        assert!(pos.x() >= radius && pos.x() <= width - radius);
        assert!(pos.y() >= radius && pos.y() <= height - radius);
    }

    // A settled ring keeps some spread; the layout must not collapse every
    // node onto the center.
    let distinct_x = graph
        .nodes()
        .iter()
        .any(|n| (n.position().x() - width / 2.0).abs() > 1.0);
    assert!(distinct_x);
}

#[test]
fn seeded_runs_are_reproducible() {
    let run = || {
        let mut graph = orbweaver::gml::load_str(RING).unwrap();
        let params = FruchtermanParams::for_canvas(graph.node_count(), 400.0, 400.0);
        Placement::from_seed(3).scatter_rect(
            &mut graph,
            Point::new(200.0, 200.0),
            params.ideal_length,
        );

        let mut simulation = Simulation::new();
        simulation.configure(Algorithm::FruchtermanReingold(params));
        while simulation.step(&mut graph).unwrap() {}

        graph
            .nodes()
            .iter()
            .map(|n| (n.position().x(), n.position().y()))
            .collect::<Vec<_>>()
    };

    assert_eq!(run(), run());
}
