use mymove_logger::{LevelFilter, Logger, Rotation};
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn file_logging_writes_json_lines() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let log_dir = tmp_dir.path().join("logs");

    let logger = Logger::builder()
        .name("integration-file-logging")
        .console(false)
        .level(LevelFilter::INFO)
        .directory(&log_dir)
        .rotation(Rotation::NEVER)
        .json_files(true)
        .init()?;

    assert!(logger.guard().is_some());
    tracing::info!(field = "new_duty_location", "hello from integration test");

    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let log_file = fs::read_dir(&log_dir)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("log file should be created");

    let contents = fs::read_to_string(&log_file)?;
    let first = contents.lines().next().expect("at least one line");
    assert!(first.starts_with('{'), "file output should be JSON: {first}");
    assert!(contents.contains("hello from integration test"));

    Ok(())
}
