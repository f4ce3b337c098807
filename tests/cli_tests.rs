//! CLI Tests
//!
//! Runs the built `halfband` binary and checks output and exit codes.

use std::path::Path;
use std::process::{Command, Output};

use halfband::audio::{load_wav, save_wav, AudioBuffer};
use tempfile::tempdir;

fn halfband(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_halfband"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run halfband")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

// === Plain Design Form ===

#[test]
fn test_prints_one_coefficient_per_line() {
    let output = halfband(&["4", "0.1"]);
    assert!(output.status.success());

    let text = stdout(&output);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    for line in &lines {
        let (_, digits) = line.split_once('.').unwrap();
        assert_eq!(digits.len(), 18);
        let value: f64 = line.parse().unwrap();
        assert!(value > 0.0 && value < 1.0);
    }
    assert!(lines[0].starts_with("0.0798664262363"));
}

#[test]
fn test_single_stage() {
    let output = halfband(&["1", "0.01"]);
    assert!(output.status.success());
    assert!(stdout(&output).starts_with("0.8590884928249"));
}

#[test]
fn test_zero_stages_prints_nothing() {
    let output = halfband(&["0", "0.2"]);
    assert!(output.status.success());
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_precision_flag() {
    let output = halfband(&["--precision", "4", "2", "0.1"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "0.2365\n0.7145\n");
}

#[test]
fn test_json_output() {
    let output = halfband(&["--format", "json", "3", "0.1"]);
    assert!(output.status.success());

    let doc: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(doc["order"], 7);
    assert_eq!(doc["transition"], 0.1);
    assert_eq!(doc["coefficients"].as_array().unwrap().len(), 3);
}

// === Error Handling ===

#[test]
fn test_wrong_argument_count() {
    for args in [&[][..], &["4"][..], &["4", "0.1", "7"][..]] {
        let output = halfband(args);
        assert_eq!(output.status.code(), Some(1), "args {:?}", args);
        assert!(stdout(&output).is_empty());
        assert!(stderr(&output).contains("usage"));
    }
}

#[test]
fn test_non_numeric_argument() {
    let output = halfband(&["4", "abc"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("argument 2"));

    let output = halfband(&["four", "0.1"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("argument 1"));
}

#[test]
fn test_transition_out_of_range() {
    let output = halfband(&["4", "0.5"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("(0, 0.5)"));
}

#[test]
fn test_huge_stage_count_fails_cleanly() {
    let output = halfband(&["18446744073709551615", "0.1"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("stage count"));

    let output = halfband(&["attenuation", "18446744073709551615", "0.1"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_help_exits_cleanly() {
    let output = halfband(&["--help"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("downsample"));
}

// === Subcommands ===

#[test]
fn test_attenuation_command() {
    let output = halfband(&["attenuation", "2", "0.1", "--precision", "2"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "36.24\n");
}

#[test]
fn test_spec_command() {
    let output = halfband(&["spec", "96", "0.01"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).lines().count(), 12);

    let output = halfband(&["spec", "-5", "0.01"]);
    assert_eq!(output.status.code(), Some(1));

    let output = halfband(&["spec", "4000", "0.1"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("attenuation"));
}

fn write_tone(path: &Path, sample_rate: u32) -> AudioBuffer {
    let tone = AudioBuffer::sine_wave(440.0, 0.1, sample_rate);
    save_wav(&tone, path).unwrap();
    tone
}

#[test]
fn test_downsample_command() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.wav");
    let low = dir.path().join("low.wav");
    let high = dir.path().join("high.wav");
    let tone = write_tone(&input, 48000);

    let output = halfband(&[
        "downsample",
        input.to_str().unwrap(),
        low.to_str().unwrap(),
        "--stages",
        "6",
        "--high",
        high.to_str().unwrap(),
    ]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let low = load_wav(&low).unwrap();
    let high = load_wav(&high).unwrap();
    assert_eq!(low.sample_rate(), 24000);
    assert_eq!(low.num_frames(), tone.num_frames() / 2);
    assert_eq!(high.num_frames(), low.num_frames());
}

#[test]
fn test_upsample_command() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.wav");
    let up = dir.path().join("up.wav");
    let tone = write_tone(&input, 22050);

    let output = halfband(&["upsample", input.to_str().unwrap(), up.to_str().unwrap()]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let up = load_wav(&up).unwrap();
    assert_eq!(up.sample_rate(), 44100);
    assert_eq!(up.num_frames(), tone.num_frames() * 2);
}

#[test]
fn test_missing_input_file() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing.wav");
    let out = dir.path().join("out.wav");

    let output = halfband(&["downsample", missing.to_str().unwrap(), out.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("cannot load"));
}
