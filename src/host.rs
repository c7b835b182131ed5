//! Diagnostic log sink shared by every stub in the crate.
//!
//! The real host application writes add-on diagnostics into its own log
//! file. Outside the host there is no such file, so the stubs do two
//! things with each line instead:
//!
//! - forward it to the `log` facade (visible with e.g. `env_logger`)
//! - append it to an in-memory buffer that tests and harnesses can
//!   inspect with [`recorded`]

use chrono::{DateTime, Local};
use once_cell::sync::Lazy;
use parking_lot::Mutex;

/// One captured diagnostic line.
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub timestamp: DateTime<Local>,
    pub message: String,
}

static RECORDS: Lazy<Mutex<Vec<LogRecord>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Emit a diagnostic line.
///
/// The line is timestamped, kept in the capture buffer, and forwarded to
/// the `log` facade at debug level under the `addonstub` target.
pub fn log(message: impl Into<String>) {
    let message = message.into();
    log::debug!(target: "addonstub", "{}", message);

    RECORDS.lock().push(LogRecord {
        timestamp: Local::now(),
        message,
    });
}

/// Snapshot of every line captured so far, oldest first.
pub fn recorded() -> Vec<LogRecord> {
    RECORDS.lock().clone()
}

/// Drop all captured lines.
pub fn clear() {
    RECORDS.lock().clear();
}

/// True if any captured line contains `needle`.
///
/// Convenience for assertions; avoids racing other threads that append
/// to the shared buffer between a snapshot and a search.
pub fn recorded_contains(needle: &str) -> bool {
    RECORDS.lock().iter().any(|r| r.message.contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_emitted_lines_in_order() {
        log("host-test alpha 7481");
        log("host-test beta 7481");

        let lines: Vec<String> = recorded()
            .into_iter()
            .map(|r| r.message)
            .filter(|m| m.contains("7481"))
            .collect();
        assert_eq!(lines, vec!["host-test alpha 7481", "host-test beta 7481"]);
    }

    #[test]
    fn recorded_contains_matches_substring() {
        log("host-test needle 9923 end");
        assert!(recorded_contains("needle 9923"));
        assert!(!recorded_contains("needle 9924"));
    }
}
