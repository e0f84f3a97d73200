use std::{fs, thread::sleep, time::Duration};

use serial_test::serial;
use tempfile::tempdir;

#[test]
#[serial]
fn writes_log_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("sorteio.log");

    sorteio::logging::init(true, Some(path.clone()));
    tracing::info!("draw started");

    sleep(Duration::from_millis(100));

    assert!(path.exists(), "log file was not created");
    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.contains("draw started"));
    assert!(!contents.contains('\u{1b}'), "log file should not contain ANSI codes");

    // A second initialisation keeps the first subscriber.
    sorteio::logging::init(false, None);
    tracing::info!("still here");
    sleep(Duration::from_millis(100));
    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.contains("still here"));
}
