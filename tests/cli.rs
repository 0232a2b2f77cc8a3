use std::fs;
use std::path::Path;
use std::process::Command;

use assert_cmd::{assert::OutputAssertExt, cargo::CommandCargoExt};

const TWO_WAYS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<osm version="0.6" generator="test">
  <node id="1" lat="10" lon="20"/>
  <node id="2" lat="30" lon="40"/>
  <way id="100">
    <nd ref="1"/>
    <nd ref="2"/>
    <tag k="highway" v="residential"/>
  </way>
  <way id="101">
    <nd ref="2"/>
    <nd ref="3"/>
    <nd ref="2"/>
  </way>
  <node id="3" lat="-1.5" lon="0.25"/>
</osm>
"#;

fn osmway2kml() -> Command {
    Command::cargo_bin("osmway2kml").unwrap()
}

fn stdout(output: &std::process::Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn write(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn converts_positional_files() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(dir.path(), "ways.osm", TWO_WAYS);

    osmway2kml().arg(&input).assert().success();

    let kml = fs::read_to_string(dir.path().join("ways.osm.kml")).unwrap();
    assert_eq!(kml.matches("<Placemark>").count(), 2);
    assert!(kml.contains("<name>Way 100</name>"));
    assert!(kml.contains("<coordinates>20,10,0 40,30,0 </coordinates>"));
    assert!(kml.contains("<name>Way 101</name>"));
    assert!(kml.contains("<coordinates>40,30,0 0.25,-1.5,0 40,30,0 </coordinates>"));
}

#[test]
fn missing_file_is_reported_and_the_rest_converted() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.osm");
    let input = write(dir.path(), "ways.osm", TWO_WAYS);

    let output = osmway2kml().arg(&missing).arg(&input).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains(&format!(
        "Error: File not found \"{}\"",
        missing.display()
    )));
    assert!(dir.path().join("ways.osm.kml").exists());
}

#[test]
fn dangling_reference_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(
        dir.path(),
        "broken.osm",
        r#"<osm><node id="1" lat="0" lon="0"/><way id="5"><nd ref="1"/><nd ref="77"/></way></osm>"#,
    );

    let output = osmway2kml().arg(&input).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("Way 5 references missing node 77"));
    assert!(!dir.path().join("broken.osm.kml").exists());
}

#[test]
fn directory_mode_converts_every_entry() {
    let dir = tempfile::tempdir().unwrap();
    for name in ["a.osm", "b.osm", "c.osm"] {
        write(dir.path(), name, TWO_WAYS);
    }

    osmway2kml().arg("-d").arg(dir.path()).assert().success();

    for name in ["a.osm.kml", "b.osm.kml", "c.osm.kml"] {
        assert!(dir.path().join(name).exists(), "{name} was not written");
    }
}

#[test]
fn repeated_runs_are_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(dir.path(), "ways.osm", TWO_WAYS);
    let kml_path = dir.path().join("ways.osm.kml");

    osmway2kml().arg(&input).assert().success();
    let first = fs::read(&kml_path).unwrap();
    osmway2kml().arg(&input).assert().success();
    assert_eq!(first, fs::read(&kml_path).unwrap());
}

#[test]
fn files_and_directory_conflict() {
    osmway2kml()
        .args(["-d", ".", "x.osm"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn requires_an_input() {
    osmway2kml().assert().failure().code(2);
}
