//! End-to-end runs of the magma-particles binary.

use std::fs;
use std::process::Command;

use tempfile::TempDir;

fn magma_particles() -> Command {
    Command::new(env!("CARGO_BIN_EXE_magma-particles"))
}

fn write_ramp(dir: &TempDir, name: &str, rows: usize, cols: usize) -> std::path::PathBuf {
    let mut text = String::from("# wavelet magnitude matrix; rows follow R, columns follow k\n");
    for r in 0..rows {
        let row: Vec<String> = (0..cols).map(|c| format!("{}", r + c)).collect();
        text.push_str(&row.join(" "));
        text.push('\n');
    }
    let path = dir.path().join(name);
    fs::write(&path, text).unwrap();
    path
}

#[test]
fn test_converts_matrix_to_json() {
    let dir = TempDir::new().unwrap();
    let input = write_ramp(&dir, "matrix.txt", 230, 40);
    let output = dir.path().join("wavelet_data.json");

    let result = magma_particles()
        .args([input.to_str().unwrap(), output.to_str().unwrap()])
        .output()
        .expect("Failed to run magma-particles");

    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(result.status.success(), "run failed: {}", stdout);
    assert!(stdout.contains("Data shape: (230, 40)"), "{}", stdout);
    assert!(stdout.contains("Downsampled shape: (115, 40)"), "{}", stdout);
    assert!(stdout.contains("Original downsampled min: 0.0, max: 267.0"), "{}", stdout);
    assert!(stdout.contains("Successfully wrote normalized data to"), "{}", stdout);

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    let rows = json["rows"].as_u64().unwrap();
    let cols = json["cols"].as_u64().unwrap();
    let data = json["data"].as_array().unwrap();
    assert_eq!((rows, cols), (115, 40));
    assert_eq!(data.len() as u64, rows * cols);
    assert_eq!(data[0].as_f64(), Some(0.0));
    assert_eq!(data.last().unwrap().as_f64(), Some(1.0));
}

#[test]
fn test_csv_input() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("matrix.csv");
    fs::write(&input, "# grid\n0,1\n4,4\n").unwrap();
    let output = dir.path().join("out.json");

    let result = magma_particles()
        .args([input.to_str().unwrap(), output.to_str().unwrap()])
        .output()
        .expect("Failed to run magma-particles");

    assert!(result.status.success());
    let text = fs::read_to_string(&output).unwrap();
    assert_eq!(text, r#"{"rows":2,"cols":2,"data":[0.0,0.5,1.0,1.0]}"#);
}

#[test]
fn test_missing_input_fails_with_status() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.json");

    let result = magma_particles()
        .args([
            dir.path().join("nope.txt").to_str().unwrap(),
            output.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to run magma-particles");

    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(!result.status.success());
    assert!(stderr.starts_with("Error: loading"), "{}", stderr);
    assert!(stderr.contains("nope.txt"), "{}", stderr);
    assert!(!output.exists());
}

#[test]
fn test_ragged_input_is_rejected() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("ragged.txt");
    fs::write(&input, "1 2 3\n4 5\n").unwrap();

    let result = magma_particles()
        .args([
            input.to_str().unwrap(),
            dir.path().join("out.json").to_str().unwrap(),
        ])
        .output()
        .expect("Failed to run magma-particles");

    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(!result.status.success());
    assert!(stderr.contains("row 1 has 2 values, expected 3"), "{}", stderr);
}

#[test]
fn test_unwritable_output_fails() {
    let dir = TempDir::new().unwrap();
    let input = write_ramp(&dir, "matrix.txt", 3, 3);
    let output = dir.path().join("missing").join("out.json");

    let result = magma_particles()
        .args([input.to_str().unwrap(), output.to_str().unwrap()])
        .output()
        .expect("Failed to run magma-particles");

    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(!result.status.success());
    assert!(stderr.contains("Error: writing"), "{}", stderr);
}
