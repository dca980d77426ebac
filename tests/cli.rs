use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const BRUSH_SCRIPT: &str = r#"
tool = "cutout-brush"
selected = "photo"

[[layer]]
id = "photo"
src = "photo.png"
x = 100.0
y = 100.0
width = 200.0
height = 200.0

[[event]]
type = "down"
x = 150.0
y = 150.0

[[event]]
type = "move"
x = 160.0
y = 150.0

[[event]]
type = "move"
x = 170.0
y = 150.0

[[event]]
type = "up"
x = 170.0
y = 150.0
"#;

fn canvas_cmd(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("cutout-canvas").expect("binary exists");
    cmd.env("XDG_CONFIG_HOME", config_home.path());
    cmd
}

fn write_script(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn help_prints_usage() {
    let temp = TempDir::new().unwrap();
    canvas_cmd(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Replay pointer gestures against a layered cutout canvas",
        ));
}

#[test]
fn version_includes_commit_hash() {
    let temp = TempDir::new().unwrap();
    canvas_cmd(&temp)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(concat!(
            env!("CARGO_PKG_VERSION"),
            " ("
        )));
}

#[test]
fn script_argument_is_required() {
    let temp = TempDir::new().unwrap();
    canvas_cmd(&temp)
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "required arguments were not provided",
        ));
}

#[test]
fn brush_script_prints_cutout_callback() {
    let temp = TempDir::new().unwrap();
    let script = write_script(&temp, "brush.toml", BRUSH_SCRIPT);

    canvas_cmd(&temp)
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""callback":"cutout""#))
        .stdout(predicate::str::contains(r#""kind":"brush""#))
        .stdout(predicate::str::contains(r#"{"x":50.0,"y":50.0}"#))
        .stdout(predicate::str::contains(r#""stroke_width":50.0"#));
}

#[test]
fn config_file_changes_brush_width() {
    let temp = TempDir::new().unwrap();
    let script = write_script(&temp, "brush.toml", BRUSH_SCRIPT);
    let config = write_script(&temp, "config.toml", "[brush]\nstroke_width = 80.0\n");

    canvas_cmd(&temp)
        .arg(&script)
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""stroke_width":80.0"#));
}

#[test]
fn background_press_clears_selection() {
    let temp = TempDir::new().unwrap();
    let script = write_script(
        &temp,
        "select.toml",
        r#"
[[event]]
type = "down"
x = 5.0
y = 5.0

[[event]]
type = "up"
x = 5.0
y = 5.0
"#,
    );

    canvas_cmd(&temp)
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::eq("{\"callback\":\"select_layer\",\"id\":null}\n"));
}

#[test]
fn render_writes_png() {
    let temp = TempDir::new().unwrap();
    let script = write_script(&temp, "brush.toml", BRUSH_SCRIPT);
    let output = temp.path().join("frame.png");

    canvas_cmd(&temp)
        .arg(&script)
        .arg("--render")
        .arg(&output)
        .assert()
        .success();

    let bytes = std::fs::read(&output).unwrap();
    assert!(bytes.starts_with(b"\x89PNG"));
}

#[test]
fn invalid_script_is_reported() {
    let temp = TempDir::new().unwrap();
    let script = write_script(&temp, "bad.toml", "[[event]]\ntype = \"teleport\"\n");

    canvas_cmd(&temp)
        .arg(&script)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid gesture script"));
}

#[test]
fn broken_config_is_reported() {
    let temp = TempDir::new().unwrap();
    let script = write_script(&temp, "brush.toml", BRUSH_SCRIPT);
    let config = write_script(&temp, "config.toml", "[brush\n");

    canvas_cmd(&temp)
        .arg(&script)
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config"));
}

#[test]
fn init_config_writes_example_once() {
    let temp = TempDir::new().unwrap();

    canvas_cmd(&temp)
        .arg("--init-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
    assert!(temp.path().join("cutout-canvas").join("config.toml").exists());

    canvas_cmd(&temp)
        .arg("--init-config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}
