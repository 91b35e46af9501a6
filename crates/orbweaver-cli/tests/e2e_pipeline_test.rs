use std::fs;

use tempfile::tempdir;

use orbweaver_cli::{Args, CliError, run};

const TRIANGLE_GML: &str = r#"
graph [
  node [ id 1 label "a" ]
  node [ id 2 label "b" ]
  node [ id 3 label "c" ]
  edge [ source 1 target 2 ]
  edge [ source 2 target 3 ]
  edge [ source 1 target 3 value 2 ]
]
"#;

fn args_for(input: &str, output: &str) -> Args {
    Args {
        input: input.to_string(),
        output: output.to_string(),
        config: None,
        seed: Some(7),
        max_iterations: 5_000,
        positions: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_gml_to_svg() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = temp_dir.path().join("triangle.gml");
    let output = temp_dir.path().join("triangle.svg");
    fs::write(&input, TRIANGLE_GML).unwrap();

    run(&args_for(
        &input.to_string_lossy(),
        &output.to_string_lossy(),
    ))
    .expect("pipeline should succeed");

    let svg = fs::read_to_string(&output).unwrap();
    assert!(svg.starts_with("<svg"));
    assert_eq!(svg.matches("<circle").count(), 3);
    assert_eq!(svg.matches("<line").count(), 3);
}

#[test]
fn e2e_positions_dump() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = temp_dir.path().join("triangle.gml");
    let output = temp_dir.path().join("triangle.svg");
    let positions = temp_dir.path().join("positions.json");
    fs::write(&input, TRIANGLE_GML).unwrap();

    let mut args = args_for(&input.to_string_lossy(), &output.to_string_lossy());
    args.positions = Some(positions.to_string_lossy().to_string());

    run(&args).expect("pipeline should succeed");

    let dump = fs::read_to_string(&positions).unwrap();
    let records: serde_json::Value = serde_json::from_str(&dump).unwrap();
    let records = records.as_array().unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(records[0]["id"], 0);
    assert_eq!(records[0]["label"], "a");
    assert!(records[0]["x"].as_f64().is_some());
}

#[test]
fn e2e_identical_seeds_reproduce_the_same_svg() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = temp_dir.path().join("triangle.gml");
    fs::write(&input, TRIANGLE_GML).unwrap();

    let first = temp_dir.path().join("first.svg");
    let second = temp_dir.path().join("second.svg");
    run(&args_for(&input.to_string_lossy(), &first.to_string_lossy())).unwrap();
    run(&args_for(&input.to_string_lossy(), &second.to_string_lossy())).unwrap();

    assert_eq!(
        fs::read_to_string(&first).unwrap(),
        fs::read_to_string(&second).unwrap()
    );
}

#[test]
fn e2e_malformed_input_is_a_load_error() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = temp_dir.path().join("broken.gml");
    let output = temp_dir.path().join("broken.svg");
    fs::write(&input, "graph [ node [ id").unwrap();

    let err = run(&args_for(
        &input.to_string_lossy(),
        &output.to_string_lossy(),
    ))
    .unwrap_err();

    assert!(matches!(err, CliError::Load(_)));
    assert!(!output.exists());
}

#[test]
fn e2e_missing_input_is_a_load_error() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output = temp_dir.path().join("nothing.svg");

    let err = run(&args_for("/definitely/not/here.gml", &output.to_string_lossy())).unwrap_err();

    assert!(matches!(err, CliError::Load(_)));
}
