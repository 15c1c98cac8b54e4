//! Integration tests for the duration calculator
//!
//! Tests the public API end to end, including sample track files and YAML
//! configuration loaded from disk.

use std::fs;
use std::path::PathBuf;

use mmldur::{
    format_clock, total_seconds, track_duration, track_duration_from_file,
    track_duration_with_config, Config, DiagnosticKind, Event, MmlError, RestTiming,
};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {} seconds, got {}",
        expected,
        actual
    );
}

#[test]
fn test_rhythm_track() {
    // 8 quarters + 16 eighths + 8 sixteenths at 120 BPM = 4 + 4 + 1 seconds
    let report = track_duration_from_file(fixture("rhythm.mml"), &Config::default()).unwrap();
    assert_eq!(report.total_seconds, 9.0);
    assert_eq!(report.events.len(), 32);
    assert!(report.diagnostics.is_empty());
    assert_eq!(report.final_length, 16);
    assert_eq!(report.volume, Some(90));
    assert_eq!(report.clock(), "0:09.000");
}

#[test]
fn test_melody_track() {
    // 25 eighth-note events at 120 BPM, one chord overridden to 0.5s
    let report = track_duration_from_file(fixture("melody.mml"), &Config::default()).unwrap();
    assert_eq!(report.total_seconds, 6.5);
    assert_eq!(report.events.len(), 25);
    assert!(report.diagnostics.is_empty());

    let chords: Vec<_> = report
        .events
        .iter()
        .filter(|e| matches!(e.event, Event::Chord { .. }))
        .collect();
    assert_eq!(chords.len(), 3);
    assert!(chords[1].explicit);
    assert_eq!(chords[1].duration_seconds, 0.5);
}

#[test]
fn test_sfx_track_with_mistake() {
    let report = track_duration_from_file(fixture("sfx.mml"), &Config::default()).unwrap();
    // 7 quarters at 100 BPM plus one 2.4s override
    assert_close(report.total_seconds, 7.0 * 0.6 + 2.4);
    assert_eq!(report.diagnostics.len(), 1);

    let diagnostic = &report.diagnostics[0];
    assert_eq!(diagnostic.kind, DiagnosticKind::UnrecognizedToken);
    assert_eq!(diagnostic.token, "LENGTH:");
    assert_eq!(diagnostic.line, 6);
}

#[test]
fn test_missing_track_file() {
    let err = track_duration_from_file(fixture("missing.mml"), &Config::default()).unwrap_err();
    assert!(matches!(err, MmlError::Io { .. }));
    assert!(err.to_string().contains("missing.mml"));
}

#[test]
fn test_total_seconds_shortcut() {
    assert_eq!(total_seconds("TEMPO:120\nLENGTH:4\nR:4 R:4 R:4 R:4"), 2.0);
}

#[test]
fn test_explicit_duration_property() {
    for header in ["", "TEMPO:45\n", "LENGTH:32\n", "TEMPO:200\nLENGTH:1\n"] {
        let source = format!("{}X:bass01 1.5s", header);
        assert_eq!(total_seconds(&source), 1.5, "{:?}", source);
    }
}

#[test]
fn test_comment_transparency_on_every_line() {
    let lines = [
        "TEMPO:132",
        "LENGTH:16",
        "X:bass01 R:16 X:hhat01 0.1s",
        "CHORD:C,E,G sqr:A+",
        "LENGTH:4",
        "R:2 i25:B3",
    ];
    let plain = track_duration(&lines.join("\n"));

    for i in 0..lines.len() {
        let mut commented: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
        commented[i].push_str(" ; comment text");
        let report = track_duration(&commented.join("\n"));
        assert_eq!(report.total_seconds, plain.total_seconds, "line {}", i + 1);
        assert_eq!(report.diagnostics.len(), plain.diagnostics.len());
    }
}

#[test]
fn test_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mmldur.yaml");
    fs::write(
        &path,
        "initial-tempo: 60\ninitial-length: 8\nunpitched-labels: [drum]\nrest-timing: own-length\n",
    )
    .unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.initial_tempo, 60);
    assert_eq!(config.rest_timing, RestTiming::OwnLength);

    // drum:kick is a hit, R:2 uses its own length (2 beats), X:kick no longer parses
    let report = track_duration_with_config("drum:kick R:2 X:kick", &config);
    assert_eq!(report.total_seconds, 2.5);
    assert_eq!(report.diagnostics.len(), 1);
    assert_eq!(report.diagnostics[0].token, "X:kick");
}

#[test]
fn test_invalid_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.yaml");
    fs::write(&path, "initial-length: 12\n").unwrap();

    let err = Config::load(&path).unwrap_err();
    assert!(matches!(err, MmlError::ConfigError(_)));
}

#[test]
fn test_missing_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::load(dir.path().join("nope.yaml")).unwrap_err();
    assert!(matches!(err, MmlError::Io { .. }));
}

#[test]
fn test_long_track_clock() {
    // 240 quarter notes at 120 BPM is two minutes
    let source = format!("TEMPO:120\n{}", "R:4 ".repeat(240));
    let report = track_duration(&source);
    assert_eq!(report.total_seconds, 120.0);
    assert_eq!(format_clock(report.total_seconds), "2:00.000");
}
