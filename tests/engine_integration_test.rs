use shipfuel::core::ConfigProvider;
use shipfuel::{FileMassSource, FuelEngine, FuelError, FuelMode, RunConfig};
use std::fs;
use tempfile::TempDir;

fn write_input(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("input.txt");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_end_to_end_simple_fuel() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_input(&temp_dir, "12\n14\n1969\n100756\n");

    let config = RunConfig::merge(path, false, None);
    let engine = FuelEngine::new(FileMassSource::from_config(&config));
    let report = engine.run(config.mode()).unwrap();

    assert_eq!(report.mode, FuelMode::Simple);
    assert_eq!(report.modules, 4);
    assert_eq!(report.total, 34241);
}

#[test]
fn test_end_to_end_compound_fuel() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_input(&temp_dir, "14\n1969\n100756");

    let config = RunConfig::merge(path, true, None);
    let engine = FuelEngine::new(FileMassSource::from_config(&config));

    assert_eq!(engine.run(config.mode()).unwrap().total, 51314);
}

#[test]
fn test_engine_can_run_both_modes() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_input(&temp_dir, "1969\n");

    let engine = FuelEngine::new(FileMassSource::new(path));
    assert_eq!(engine.run(FuelMode::Compound).unwrap().total, 966);
    assert_eq!(engine.run(FuelMode::Simple).unwrap().total, 654);
}

#[test]
fn test_malformed_line_reports_no_total() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_input(&temp_dir, "12\n1.5\n14\n");

    let engine = FuelEngine::new(FileMassSource::new(path));
    match engine.run(FuelMode::Simple) {
        Err(FuelError::MalformedInteger { line, value, .. }) => {
            assert_eq!(line, 2);
            assert_eq!(value, "1.5");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_empty_file_is_malformed() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_input(&temp_dir, "\n");

    let result = FuelEngine::new(FileMassSource::new(path)).run(FuelMode::Compound);
    assert!(matches!(
        result,
        Err(FuelError::MalformedInteger { line: 1, .. })
    ));
}

#[test]
fn test_crlf_file_is_malformed() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_input(&temp_dir, "12\r\n14\r\n");

    let result = FuelEngine::new(FileMassSource::new(path)).run(FuelMode::Simple);
    assert!(matches!(
        result,
        Err(FuelError::MalformedInteger { line: 1, .. })
    ));
}
