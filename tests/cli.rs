// Copyright (C) 2018 Stephane Raux. Distributed under the MIT license.

use assert_cmd::Command;
use std::io::Write;
use tempfile::NamedTempFile;

const REQUEST: &str = r#"{
    "center": {"latitude": "1.0", "longitude": "2.0"},
    "zoom": 10,
    "size": {"width": 300, "height": 150}
}"#;

fn file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn staticmap() -> Command {
    Command::cargo_bin("staticmap").unwrap()
}

#[test]
fn prints_url_for_stdin_request() {
    let output = staticmap()
        .args(&["--key", "K"])
        .write_stdin(REQUEST)
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.trim_end(), "https://maps.googleapis.com/maps/api/\
        staticmap?center=1.0,2.0&zoom=10&scale=1&size=300x150\
        &maptype=roadmap&format=png&key=K");
}

#[test]
fn config_supplies_key_and_scale() {
    let config = file(r#"{"apiKey": "CONF", "pixelRatio": 2.0}"#);
    let request = file(REQUEST);
    let output = staticmap()
        .arg("-c").arg(config.path())
        .arg("-r").arg(request.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("&scale=2&"), "{}", stdout);
    assert!(stdout.trim_end().ends_with("&key=CONF"), "{}", stdout);
}

#[test]
fn json_output_reports_warnings() {
    let output = staticmap()
        .args(&["--json", "-k", "K"])
        .write_stdin(r#"{"size": {"width": 10, "height": 10},
            "enableImplicitPositioning": true}"#)
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout)
        .unwrap();
    assert_eq!(json["warnings"][0], "ImplicitPositioningWithoutAnchor");
    assert!(!json["url"].as_str().unwrap().contains("center="));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Implicit positioning"), "{}", stderr);
}

#[test]
fn bad_request_fails_with_cause() {
    let output = staticmap()
        .write_stdin(r#"{"zoom": 3}"#)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Error: Bad map request"), "{}", stderr);
    assert!(stderr.contains("Because:"), "{}", stderr);
}

#[test]
fn bad_pixel_ratio_fails() {
    let output = staticmap()
        .args(&["-p", "retina"])
        .write_stdin(REQUEST)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Bad pixel ratio"), "{}", stderr);
}
