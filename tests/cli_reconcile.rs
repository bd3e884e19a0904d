use std::fs;
use std::path::Path;
use std::process::Command;

use serde_json::Value;
use tempfile::tempdir;

fn seed(root: &Path, files: &[&str], referenced: &[&str]) {
    let upload = root.join("static/upload");
    for file in files {
        let path = upload.join(file);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, file.as_bytes()).unwrap();
    }

    let refs = root.join("references");
    fs::create_dir_all(&refs).unwrap();
    let records: Vec<Value> = referenced
        .iter()
        .map(|f| serde_json::json!({ "image": format!("/static/upload/{f}") }))
        .collect();
    fs::write(
        refs.join("content.json"),
        serde_json::to_string(&records).unwrap(),
    )
    .unwrap();
}

fn run(root: &Path, args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_upload-reconciler"))
        .current_dir(root)
        .env("UPLOAD_RECONCILER_DOCUMENT_ROOT", root)
        .env("UPLOAD_RECONCILER_REFERENCES_DIR", root.join("references"))
        .args(["--config"])
        .arg(root.join("reconciler.toml"))
        .args(args)
        .output()
        .unwrap()
}

fn write_config(root: &Path, extra: &str) {
    fs::write(
        root.join("reconciler.toml"),
        format!("[references]\nallow_missing = true\n{extra}"),
    )
    .unwrap();
}

#[test]
fn test_reconcile_json_reports_moved_count() {
    let dir = tempdir().unwrap();
    seed(dir.path(), &["a.jpg", "b.jpg", "c.jpg"], &["a.jpg"]);
    write_config(dir.path(), "");

    let output = run(dir.path(), &["reconcile", "--json"]);

    assert!(output.status.success(), "{output:?}");
    let value: Value = serde_json::from_str(String::from_utf8_lossy(&output.stdout).trim()).unwrap();
    assert_eq!(value["count"], 2);
    assert_eq!(value["inventory"], 3);
    assert_eq!(value["references"], 1);
    assert_eq!(value["dry_run"], false);
    assert!(dir.path().join("static/backup/ImageExt/b.jpg").exists());
    assert!(dir.path().join("static/backup/ImageExt/c.jpg").exists());
    assert!(dir.path().join("static/upload/a.jpg").exists());

    let again = run(dir.path(), &["reconcile", "--json"]);
    let value: Value = serde_json::from_str(String::from_utf8_lossy(&again.stdout).trim()).unwrap();
    assert_eq!(value["count"], 0);
}

#[test]
fn test_reconcile_dry_run_moves_nothing() {
    let dir = tempdir().unwrap();
    seed(dir.path(), &["a.jpg", "b.jpg"], &[]);
    write_config(dir.path(), "");

    let output = run(dir.path(), &["reconcile", "--dry-run"]);

    assert!(output.status.success(), "{output:?}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("would move"), "stdout:\n{stdout}");
    assert_eq!(stdout.lines().last(), Some("count: 2"));
    assert!(dir.path().join("static/upload/a.jpg").exists());
    assert!(!dir.path().join("static/backup/ImageExt").exists());
}

#[test]
fn test_reconcile_naming_flag_overrides_config() {
    let dir = tempdir().unwrap();
    seed(dir.path(), &["dirA/x.jpg", "dirB/x.jpg"], &[]);
    write_config(dir.path(), "[quarantine]\nnaming = \"base_name\"\n");

    let output = run(
        dir.path(),
        &["reconcile", "--yes", "--naming", "relative-path", "--json"],
    );

    assert!(output.status.success(), "{output:?}");
    let value: Value = serde_json::from_str(String::from_utf8_lossy(&output.stdout).trim()).unwrap();
    assert_eq!(value["count"], 2);
    assert_eq!(value["naming"], "relative_path");
    let backup = dir.path().join("static/backup/ImageExt");
    assert!(backup.join("dirA__x.jpg").exists());
    assert!(backup.join("dirB__x.jpg").exists());
}

#[test]
fn test_reconcile_partial_failure_exits_non_zero() {
    let dir = tempdir().unwrap();
    seed(dir.path(), &["a.jpg", "b.jpg", "c.jpg"], &["a.jpg"]);
    write_config(dir.path(), "");
    // A directory squatting on the destination makes the rename fail
    fs::create_dir_all(dir.path().join("static/backup/ImageExt/b.jpg/keep")).unwrap();

    let output = run(dir.path(), &["reconcile", "--json"]);

    assert_eq!(output.status.code(), Some(1), "{output:?}");
    let value: Value = serde_json::from_str(String::from_utf8_lossy(&output.stdout).trim()).unwrap();
    assert_eq!(value["count"], 1);
    assert_eq!(value["failed"].as_array().map(Vec::len), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("1 of 2 orphans could not be moved"), "stderr:\n{stderr}");
    assert!(dir.path().join("static/upload/b.jpg").exists());
    assert!(dir.path().join("static/backup/ImageExt/c.jpg").exists());
}

#[test]
fn test_reconcile_aborts_on_broken_export() {
    let dir = tempdir().unwrap();
    seed(dir.path(), &["a.jpg"], &[]);
    write_config(dir.path(), "");
    fs::write(dir.path().join("references/slide.json"), "not json").unwrap();

    let output = run(dir.path(), &["reconcile"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("slide"), "stderr:\n{stderr}");
    assert!(dir.path().join("static/upload/a.jpg").exists());
    assert!(!dir.path().join("static/backup/ImageExt").exists());
}

#[test]
fn test_reconcile_fails_fast_when_lock_is_held() {
    use fs2::FileExt;

    let dir = tempdir().unwrap();
    seed(dir.path(), &["a.jpg"], &[]);
    write_config(dir.path(), "[lock]\nwait = false\n");

    let lock_path = dir.path().join("static/backup/.reconcile.lock");
    fs::create_dir_all(lock_path.parent().unwrap()).unwrap();
    let held = fs::File::create(&lock_path).unwrap();
    held.lock_exclusive().unwrap();

    let output = run(dir.path(), &["reconcile", "--json"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(dir.path().join("static/upload/a.jpg").exists());

    FileExt::unlock(&held).unwrap();
    let output = run(dir.path(), &["reconcile", "--json"]);
    assert!(output.status.success(), "{output:?}");
}
