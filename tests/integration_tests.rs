//! Integration tests for the recorder
//!
//! These tests verify:
//! - Append-only history and ordering
//! - Empty message rejection
//! - Console transcript of a full session
//! - Replay output
//! - Top-level error reporting

use log_recorder::appenders::ConsoleAppender;
use log_recorder::core::severity::{display_name, Severity};
use log_recorder::core::timestamp::TimestampFormat;
use log_recorder::{Appender, LogEntry, LogRecorder, LoggerError, Result};

type BufferRecorder = LogRecorder<ConsoleAppender<Vec<u8>, Vec<u8>>>;

fn recorder() -> BufferRecorder {
    LogRecorder::builder().writers(Vec::new(), Vec::new()).build()
}

fn split_output(recorder: BufferRecorder) -> (Vec<String>, Vec<String>) {
    let (_, appender) = recorder.into_parts();
    let (out, err) = appender.into_writers();
    let lines = |bytes: Vec<u8>| -> Vec<String> {
        String::from_utf8(bytes)
            .expect("utf-8 output")
            .lines()
            .map(String::from)
            .collect()
    };
    (lines(out), lines(err))
}

/// Strip the `[YYYY/MM/DDTHH:MM:SS.mmm]` prefix from a logged line
fn without_timestamp(line: &str) -> &str {
    assert_eq!(line.as_bytes()[0], b'[');
    assert_eq!(line.as_bytes()[24], b']', "unexpected timestamp shape: {}", line);
    &line[25..]
}

#[test]
fn test_console_session_transcript() {
    let mut recorder = recorder();

    let session = |recorder: &mut BufferRecorder| -> Result<()> {
        recorder.print("Application starting")?;
        recorder.log(Severity::Info, "Initialization complete.")?;
        recorder.log(Severity::Debug, "Debugging details...")?;
        recorder.log(Severity::Warn, "Potential issue detected.")?;
        recorder.log(Severity::Error, "An error has occurred")?;
        recorder.log(Severity::Fatal, "Critical failure!")?;
        recorder.log(Severity::Info, "")?;
        recorder.log(Severity::Info, "never reached")?;
        Ok(())
    };

    let err = session(&mut recorder).unwrap_err();
    assert!(matches!(err, LoggerError::InvalidArgument(_)));
    recorder.report_error(&err).expect("report");

    assert_eq!(recorder.len(), 5);
    let (out, err) = split_output(recorder);

    assert_eq!(out[0], "Application starting");
    let logged: Vec<&str> = out[1..].iter().map(|line| without_timestamp(line)).collect();
    assert_eq!(
        logged,
        vec![
            "[INFO]: Initialization complete.",
            "[DEBUG]: Debugging details...",
            "[WARN]: Potential issue detected.",
            "[ERROR]: An error has occurred",
            "[FATAL]: Critical failure!",
        ]
    );
    assert_eq!(
        err,
        vec![
            "[FATAL]: Critical error",
            "[ERROR]: Exception caught: Log message cannot be empty.",
        ]
    );
}

#[test]
fn test_info_fatal_then_print_all() {
    let mut recorder = recorder();
    recorder.log(Severity::Info, "Initialization complete.").expect("log");
    recorder.log(Severity::Fatal, "Critical failure!").expect("log");
    recorder.print_all().expect("print_all");

    let (out, err) = split_output(recorder);
    assert_eq!(out.len(), 4);
    assert_eq!(
        &out[2..],
        &["[INFO] Initialization complete.", "[FATAL] Critical failure!"]
    );
    assert_eq!(err, vec!["[FATAL]: Critical error"]);
}

#[test]
fn test_empty_message_keeps_prior_entries() {
    let mut recorder = recorder();
    recorder.info("first").expect("log");
    recorder.warn("second").expect("log");

    let err = recorder.log(Severity::Info, "").unwrap_err();
    assert!(err.is_invalid_argument());

    let messages: Vec<&str> = recorder.entries().iter().map(LogEntry::message).collect();
    assert_eq!(messages, vec!["first", "second"]);
}

#[test]
fn test_history_not_sorted_by_severity() {
    let mut recorder = recorder();
    let sequence = [
        Severity::Fatal,
        Severity::Debug,
        Severity::Error,
        Severity::Info,
        Severity::Warn,
    ];
    for (i, severity) in sequence.iter().enumerate() {
        recorder.log(*severity, format!("message {}", i)).expect("log");
    }

    let recorded: Vec<Severity> = recorder.entries().iter().map(LogEntry::severity).collect();
    assert_eq!(recorded, sequence.to_vec());

    let stamps: Vec<_> = recorder
        .entries()
        .iter()
        .map(|e| *e.timestamp().expect("stamped"))
        .collect();
    assert!(stamps.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_print_all_labels_match_severity_names() {
    let mut recorder = recorder();
    for severity in Severity::ALL {
        recorder.log(severity, "x").expect("log");
    }
    recorder.print_all().expect("print_all");

    let (out, _) = split_output(recorder);
    let replayed = &out[Severity::ALL.len()..];
    assert_eq!(replayed.len(), Severity::ALL.len());
    for (line, severity) in replayed.iter().zip(Severity::ALL) {
        assert_eq!(*line, format!("[{}] x", display_name(severity.ordinal())));
    }
}

#[test]
fn test_custom_appender() {
    // Appenders other than the console one plug into the same recorder
    #[derive(Default)]
    struct CountingAppender {
        appended: usize,
        replayed: usize,
    }

    impl Appender for CountingAppender {
        fn append(&mut self, _entry: &LogEntry) -> Result<()> {
            self.appended += 1;
            Ok(())
        }

        fn replay(&mut self, _entry: &LogEntry) -> Result<()> {
            self.replayed += 1;
            Ok(())
        }

        fn print(&mut self, _message: &str) -> Result<()> {
            Ok(())
        }

        fn report_error(&mut self, _error: &LoggerError) -> Result<()> {
            Ok(())
        }

        fn flush(&mut self) -> Result<()> {
            Ok(())
        }

        fn name(&self) -> &str {
            "counting"
        }
    }

    let mut recorder = LogRecorder::with_appender(CountingAppender::default());
    recorder.info("a").expect("log");
    recorder.error("b").expect("log");
    assert!(recorder.info("").is_err());
    recorder.print_all().expect("print_all");

    assert_eq!(recorder.appender().appended, 2);
    assert_eq!(recorder.appender().replayed, 2);
    assert_eq!(recorder.appender().name(), "counting");
}

#[test]
fn test_timestamp_format_support() {
    let mut recorder = LogRecorder::builder()
        .writers(Vec::new(), Vec::new())
        .timestamp_format(TimestampFormat::UnixMillis)
        .build();
    recorder.info("numeric").expect("log");

    let (out, _) = split_output(recorder);
    let (stamp, rest) = out[0][1..].split_once(']').expect("bracketed timestamp");
    assert!(stamp.parse::<i64>().is_ok(), "not numeric: {}", stamp);
    assert_eq!(rest, "[INFO]: numeric");
}

#[test]
fn test_multiline_message_renders_on_one_line() {
    let mut recorder = recorder();
    recorder
        .warn("User login\nERROR fake entry")
        .expect("log");
    recorder.print_all().expect("print_all");

    assert_eq!(recorder.entries()[0].message(), "User login\nERROR fake entry");
    let (out, _) = split_output(recorder);
    assert_eq!(out.len(), 2, "each entry must stay on a single line");
    assert_eq!(out[1], "[WARN] User login\\nERROR fake entry");
}

#[test]
fn test_multiline_print_renders_on_one_line() {
    let mut recorder = recorder();
    recorder
        .print("Application starting\n[ERROR]: forged")
        .expect("print");
    let err = LoggerError::invalid_argument("bad\ninput");
    recorder.report_error(&err).expect("report");
    recorder.flush().expect("flush");

    assert!(recorder.is_empty());
    let (out, err) = split_output(recorder);
    assert_eq!(out, vec!["Application starting\\n[ERROR]: forged"]);
    assert_eq!(err, vec!["[ERROR]: Exception caught: bad\\ninput"]);
}

#[test]
fn test_invalid_timestamp_pattern_is_rejected() {
    let err = LogRecorder::builder()
        .writers(Vec::new(), Vec::new())
        .timestamp_format(TimestampFormat::Custom("%Y %Q".to_string()))
        .try_build()
        .err()
        .expect("rejected");
    assert!(err.is_invalid_argument());

    let mut recorder = LogRecorder::builder()
        .writers(Vec::new(), Vec::new())
        .custom_timestamp("%H:%M:%S")
        .expect("valid pattern")
        .build();
    recorder.info("checked").expect("log");

    let (out, _) = split_output(recorder);
    assert!(out[0].ends_with("[INFO]: checked"));
}
