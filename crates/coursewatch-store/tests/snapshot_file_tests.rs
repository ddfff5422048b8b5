use coursewatch_core::errors::ExErrorKind;
use coursewatch_core::snapshot::SnapshotStore;
use coursewatch_store::SnapshotFile;
use std::fs;
use tempfile::TempDir;

fn names(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_missing_file_loads_empty_without_error() {
    let dir = TempDir::new().unwrap();
    let store = SnapshotFile::new(dir.path().join("never-written.txt"));

    assert_eq!(store.try_load().unwrap(), Vec::<String>::new());
    assert!(store.load().is_empty());
}

#[test]
fn test_save_writes_one_name_per_line() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("course.txt");
    let store = SnapshotFile::new(&path);

    store
        .save(&names(&["Welcome", "Slides week 1", "Quiz 1"]))
        .unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "Welcome\nSlides week 1\nQuiz 1"
    );
}

#[test]
fn test_save_then_load_round_trip() {
    let dir = TempDir::new().unwrap();
    let store = SnapshotFile::new(dir.path().join("course.txt"));
    let list = names(&["Slides", "Slides", "Übungsblatt 2"]);

    store.save(&list).unwrap();

    assert_eq!(store.load(), list);
}

#[test]
fn test_save_of_load_is_noop() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("course.txt");
    fs::write(&path, "a\nb\nc").unwrap();
    let store = SnapshotFile::new(&path);

    store.save(&store.load()).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "a\nb\nc");
}

#[test]
fn test_save_overwrites_previous_snapshot() {
    let dir = TempDir::new().unwrap();
    let store = SnapshotFile::new(dir.path().join("course.txt"));

    store.save(&names(&["a", "b", "c"])).unwrap();
    store.save(&names(&["d"])).unwrap();

    assert_eq!(store.load(), names(&["d"]));
}

#[test]
fn test_save_creates_missing_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("state").join("nested").join("course.txt");
    let store = SnapshotFile::new(&path);

    store.save(&names(&["a"])).unwrap();

    assert!(path.is_file());
}

#[test]
fn test_reads_file_written_by_hand_with_trailing_newline() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("course.txt");
    fs::write(&path, "a\r\nb\n").unwrap();

    assert_eq!(SnapshotFile::new(&path).load(), names(&["a", "b"]));
}

#[test]
fn test_invalid_utf8_is_snapshot_read_error_and_loads_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("course.txt");
    fs::write(&path, [0xff, 0xfe, b'\n', b'a']).unwrap();
    let store = SnapshotFile::new(&path);

    let err = store.try_load().unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::SnapshotRead);
    assert_eq!(err.path(), Some(path.as_path()));
    assert!(store.load().is_empty());
}

#[test]
fn test_directory_in_place_of_file_loads_empty() {
    let dir = TempDir::new().unwrap();
    let store = SnapshotFile::new(dir.path());

    assert!(store.load().is_empty());
}

#[test]
fn test_write_failure_is_snapshot_write_error() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("not-a-dir");
    fs::write(&blocker, "file").unwrap();
    // Parent path is a regular file, so the directory cannot be created.
    let store = SnapshotFile::new(blocker.join("course.txt"));

    let err = store.save(&names(&["a"])).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::SnapshotWrite);
    assert_eq!(err.exit_code(), 5);
}

#[test]
fn test_location_is_path() {
    let store = SnapshotFile::new("/var/lib/coursewatch/course.txt");
    assert_eq!(store.location(), "/var/lib/coursewatch/course.txt");
}
