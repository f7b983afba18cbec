//! Recording and replay example
//!
//! Demonstrates the in-memory history: log a few entries, replay them with
//! `print_all`, export them as JSON and share the recorder with a worker
//! thread.
//!
//! Run with: cargo run --example replay_demo

use log_recorder::prelude::*;
use log_recorder::{info, warn};
use std::thread;

fn main() -> Result<()> {
    println!("=== Log Recorder - Replay Example ===\n");

    let mut recorder = LogRecorder::builder()
        .timestamp_format(TimestampFormat::Iso8601)
        .colors(true)
        .build();

    println!("1. Logging:");
    recorder.log(Severity::Info, "Initialization complete.")?;
    warn!(recorder, "Cache at {}% capacity", 85)?;
    recorder.log(Severity::Fatal, "Critical failure!")?;

    println!("\n2. Replay ({} entries):", recorder.len());
    recorder.print_all()?;

    println!("\n3. JSON export:");
    println!("{}", recorder.entries_json()?);

    println!("\n4. Shared between threads:");
    let shared = SharedRecorder::new(recorder);
    let worker = shared.clone();
    thread::spawn(move || worker.with(|r| info!(r, "Logged from {:?}", thread::current().id())))
        .join()
        .expect("worker thread panicked")?;
    println!("   History now holds {} entries", shared.len());

    println!("\n=== Example completed successfully! ===");
    Ok(())
}
