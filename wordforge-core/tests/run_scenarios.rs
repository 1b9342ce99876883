//! End-to-end run scenarios against real sinks.
//!
//! These tests drive `RunController` the way a front end does: estimate,
//! confirm, stream to a file or socket, cancel from another thread, and
//! read the output back after the sink has been closed.

#![allow(clippy::expect_used)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::uninlined_format_args)]

use std::io::Read;
use std::net::TcpListener;
use std::sync::mpsc;
use wordforge_core::{
    CancellationToken, CharacterClass, GenerationOptions, RunController, RunStatus,
    SinkDescriptor, WordforgeError, build_alphabet,
};

fn controller(charset: &str, progress_interval: u64) -> RunController {
    RunController::new(
        GenerationOptions::new()
            .with_custom_charset(charset)
            .with_progress_interval(progress_interval),
    )
}

#[test]
fn test_file_sink_cancel_after_fifth_item() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("words.txt");
    let sink = SinkDescriptor::File(path.clone());

    let cancel = CancellationToken::new();
    let trigger = cancel.clone();

    let report = controller("ab", 1)
        .run(
            1..=3,
            &sink,
            |estimate| {
                assert_eq!(estimate.total_combinations, 14);
                true
            },
            &cancel,
            |progress| {
                if progress.items_written == 5 {
                    trigger.cancel();
                }
            },
        )
        .expect("Run should start");

    assert_eq!(report.status, RunStatus::Cancelled);
    assert_eq!(report.count, 5);
    assert_eq!(report.total_expected, 14);

    // The sink was closed, so the file is readable with all five lines
    let contents = std::fs::read_to_string(&path).expect("Output should be readable");
    assert_eq!(contents, "a\nb\naa\nab\nba\n");
}

#[test]
fn test_file_sink_digits_end_to_end() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("binary.txt");

    let digits = build_alphabet(&[CharacterClass::Digits]).expect("digits alphabet");
    assert!(digits.as_string().starts_with("01"));

    let mut events = Vec::new();
    let report = controller("01", 1000)
        .run(
            1..=2,
            &SinkDescriptor::File(path.clone()),
            |estimate| estimate.total_combinations == 6,
            &CancellationToken::new(),
            |progress| events.push(progress),
        )
        .expect("Run should start");

    assert_eq!(report.status, RunStatus::Completed);
    assert_eq!(report.count, 6);
    assert_eq!(report.destination, path.display().to_string());

    // Fewer items than the cadence: only the final event is delivered
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].items_written, 6);
    assert_eq!(events[0].total_expected, 6);

    let contents = std::fs::read_to_string(&path).expect("Output should be readable");
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines, ["0", "1", "00", "01", "10", "11"]);
    assert!(contents.ends_with('\n'));
}

#[test]
fn test_file_sink_not_created_for_empty_selection() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("never.txt");
    let controller = RunController::new(GenerationOptions::new().with_classes(Vec::new()));

    let result = controller.run(
        1..=3,
        &SinkDescriptor::File(path.clone()),
        |_| panic!("confirmation must not be requested"),
        &CancellationToken::new(),
        |_| {},
    );

    assert!(matches!(result, Err(WordforgeError::EmptyAlphabet)));
    assert!(!path.exists());
}

#[test]
fn test_file_sink_not_created_for_inverted_range() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("never.txt");

    let result = controller("ab", 1000).run(
        5..=2,
        &SinkDescriptor::File(path.clone()),
        |_| panic!("confirmation must not be requested"),
        &CancellationToken::new(),
        |_| {},
    );

    assert!(matches!(
        result,
        Err(WordforgeError::InvalidRange { min: 5, max: 2, .. })
    ));
    assert!(!path.exists());
}

#[test]
fn test_file_sink_untouched_when_declined() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("declined.txt");

    let report = controller("ab", 1000)
        .run(
            1..=3,
            &SinkDescriptor::File(path.clone()),
            |_| false,
            &CancellationToken::new(),
            |_| {},
        )
        .expect("Run should be prepared");

    assert_eq!(report.status, RunStatus::Cancelled);
    assert_eq!(report.count, 0);
    assert!(!path.exists());
}

#[test]
fn test_tcp_sink_streams_all_lines() {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind listener");
    let address = listener.local_addr().expect("local addr").to_string();

    let reader = std::thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept");
        let mut received = String::new();
        stream.read_to_string(&mut received).expect("read");
        received
    });

    let report = controller("xyz", 5)
        .run(
            2..=2,
            &SinkDescriptor::Tcp(address.clone()),
            |_| true,
            &CancellationToken::new(),
            |_| {},
        )
        .expect("Run should start");

    assert_eq!(report.status, RunStatus::Completed);
    assert_eq!(report.destination, format!("tcp://{}", address));

    // The writer dropped the stream, so the reader sees EOF
    let received = reader.join().expect("reader thread");
    assert_eq!(received.lines().count(), 9);
    assert!(received.starts_with("xx\nxy\nxz\nyx\n"));
}

#[test]
fn test_cancel_from_caller_thread() {
    let runner = RunController::new(
        GenerationOptions::new()
            .with_classes([CharacterClass::Digits])
            .with_progress_interval(1000),
    );
    let cancel = CancellationToken::new();
    let worker_cancel = cancel.clone();
    let (tx, rx) = mpsc::sync_channel(0);

    let worker = std::thread::spawn(move || {
        runner
            .run_to_writer(
                1..=7,
                std::io::sink(),
                "null",
                |_| true,
                &worker_cancel,
                move |progress| {
                    // Fails once the receiver is gone, which is fine
                    let _ = tx.send(progress.items_written);
                },
            )
            .expect("Run should start")
    });

    let first = rx.recv().expect("first progress event");
    assert_eq!(first, 1000);
    cancel.cancel();
    drop(rx);

    let report = worker.join().expect("worker thread");
    assert_eq!(report.status, RunStatus::Cancelled);
    assert!(report.count >= 1000);
    assert!(u128::from(report.count) < report.total_expected);
}
