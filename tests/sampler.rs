//! Frame sampler integration tests.
//!
//! Error-path tests run everywhere; extraction tests require the fixture
//! from `tests/fixtures/generate_fixtures.sh` and return early when it is
//! absent.

use std::path::Path;

use framegrab::sample;

fn sample_video_path() -> &'static str {
    // 5 seconds at 25 fps.
    "tests/fixtures/sample_video.mp4"
}

#[test]
fn missing_video_path() {
    let temporary_directory = tempfile::tempdir().expect("Failed to create temp dir");
    let missing = temporary_directory.path().join("no_such_video.mp4");

    let result = sample(&missing, temporary_directory.path().join("out"), 10.0);
    assert!(result.is_err());

    let error_message = result.unwrap_err().to_string();
    assert!(
        error_message.contains("Path not found"),
        "Error message should mention the missing path: {error_message}",
    );
}

#[test]
fn non_positive_interval_is_rejected() {
    let temporary_directory = tempfile::tempdir().expect("Failed to create temp dir");
    let output = temporary_directory.path().join("out");

    for interval in [0.0, -1.0, f64::NAN] {
        let result = sample("irrelevant.mp4", &output, interval);
        assert!(result.is_err(), "interval {interval} should be rejected");

        let error_message = result.unwrap_err().to_string();
        assert!(
            error_message.contains("greater than zero"),
            "Error message should mention the interval: {error_message}",
        );
    }

    // The rejected intervals never got as far as creating the output dir.
    assert!(!output.exists());
}

#[test]
fn unopenable_video() {
    // A file with garbage content cannot be opened by the decoder.
    let temporary_directory = tempfile::tempdir().expect("Failed to create temp dir");
    let invalid_file_path = temporary_directory.path().join("invalid.mp4");
    std::fs::write(&invalid_file_path, b"this is not a media file")
        .expect("Failed to write invalid file");

    let result = sample(
        &invalid_file_path,
        temporary_directory.path().join("out"),
        10.0,
    );
    assert!(result.is_err(), "Expected error for invalid media file");
}

#[test]
fn samples_at_fixed_intervals() {
    let path = sample_video_path();
    if !Path::new(path).exists() {
        return;
    }

    let output = tempfile::tempdir().expect("Failed to create temp dir");
    let summary = sample(path, output.path(), 2.0).expect("Failed to sample fixture video");

    // A 5-second video sampled every 2 seconds: attempts at 0, 2 and 4.
    assert!(summary.saved >= 1, "at least the t=0 frame should decode");
    assert!(summary.saved + summary.skipped <= 3);

    let mut names: Vec<String> = std::fs::read_dir(output.path())
        .expect("Failed to read output dir")
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();

    assert_eq!(names.len() as u64, summary.saved);
    for name in &names {
        assert!(
            name.starts_with("sample_video.mp4_") && name.ends_with(".jpg"),
            "unexpected output name: {name}",
        );
    }

    // Timestamp-derived names are strictly increasing, no duplicates.
    for pair in names.windows(2) {
        assert!(pair[0] < pair[1]);
    }
}

#[test]
fn interval_longer_than_video_yields_one_frame() {
    let path = sample_video_path();
    if !Path::new(path).exists() {
        return;
    }

    let output = tempfile::tempdir().expect("Failed to create temp dir");
    let summary = sample(path, output.path(), 60.0).expect("Failed to sample fixture video");

    assert_eq!(summary.saved, 1, "only the t=0 frame should be extracted");

    let names: Vec<String> = std::fs::read_dir(output.path())
        .expect("Failed to read output dir")
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["sample_video.mp4_00h00m00s000ms.jpg"]);
}

#[test]
fn output_directory_is_created_with_parents() {
    let path = sample_video_path();
    if !Path::new(path).exists() {
        return;
    }

    let temporary_directory = tempfile::tempdir().expect("Failed to create temp dir");
    let nested_output = temporary_directory.path().join("deeply").join("nested");

    sample(path, &nested_output, 60.0).expect("Failed to sample fixture video");
    assert!(nested_output.is_dir());
}
