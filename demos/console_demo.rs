//! Console session example
//!
//! Prints a start-up message, logs one line per severity and then tries to
//! log an empty message. The resulting error is caught here and reported on
//! stderr.
//!
//! Run with: cargo run --example console_demo

use log_recorder::prelude::*;

fn run(recorder: &mut LogRecorder) -> Result<()> {
    recorder.print("Application starting")?;
    recorder.log(Severity::Info, "Initialization complete.")?;
    recorder.log(Severity::Debug, "Debugging details...")?;
    recorder.log(Severity::Warn, "Potential issue detected.")?;
    recorder.log(Severity::Error, "An error has occurred")?;
    recorder.log(Severity::Fatal, "Critical failure!")?;
    recorder.log(Severity::Info, "")?;
    Ok(())
}

fn main() -> Result<()> {
    let mut recorder = LogRecorder::new();

    if let Err(e) = run(&mut recorder) {
        recorder.report_error(&e)?;
    }

    recorder.flush()
}
