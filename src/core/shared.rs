//! Mutex-guarded recorder handle for use across threads

use super::{
    appender::Appender,
    error::{LoggerError, Result},
    log_entry::LogEntry,
    recorder::LogRecorder,
    severity::Severity,
};
use crate::appenders::ConsoleAppender;
use parking_lot::Mutex;
use std::sync::Arc;

/// Cloneable handle to one [`LogRecorder`].
///
/// Each call holds the lock across both the append and the console write, so
/// the order of recorded entries matches the order of written lines.
///
/// # Example
///
/// ```
/// use log_recorder::prelude::*;
///
/// let shared = SharedRecorder::new(
///     LogRecorder::builder().writers(Vec::new(), Vec::new()).build(),
/// );
/// let worker = shared.clone();
/// std::thread::spawn(move || worker.log(Severity::Info, "from worker"))
///     .join()
///     .unwrap()?;
/// assert_eq!(shared.len(), 1);
/// # Ok::<(), LoggerError>(())
/// ```
pub struct SharedRecorder<A: Appender = ConsoleAppender> {
    inner: Arc<Mutex<LogRecorder<A>>>,
}

impl<A: Appender> SharedRecorder<A> {
    pub fn new(recorder: LogRecorder<A>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(recorder)),
        }
    }

    /// Locked [`LogRecorder::log`].
    ///
    /// # Errors
    ///
    /// Same as [`LogRecorder::log`].
    pub fn log(&self, severity: Severity, message: impl Into<String>) -> Result<()> {
        self.inner.lock().log(severity, message)
    }

    pub fn print(&self, message: &str) -> Result<()> {
        self.inner.lock().print(message)
    }

    pub fn print_all(&self) -> Result<()> {
        self.inner.lock().print_all()
    }

    pub fn report_error(&self, error: &LoggerError) -> Result<()> {
        self.inner.lock().report_error(error)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Copy of the entries recorded so far
    pub fn snapshot(&self) -> Vec<LogEntry> {
        self.inner.lock().entries().to_vec()
    }

    /// Run `f` with exclusive access to the recorder
    pub fn with<R>(&self, f: impl FnOnce(&mut LogRecorder<A>) -> R) -> R {
        let mut recorder = self.inner.lock();
        f(&mut recorder)
    }

    /// Recover the recorder if this is the last handle
    pub fn try_unwrap(self) -> std::result::Result<LogRecorder<A>, Self> {
        Arc::try_unwrap(self.inner)
            .map(Mutex::into_inner)
            .map_err(|inner| Self { inner })
    }
}

impl<A: Appender> Clone for SharedRecorder<A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<A: Appender> From<LogRecorder<A>> for SharedRecorder<A> {
    fn from(recorder: LogRecorder<A>) -> Self {
        Self::new(recorder)
    }
}
