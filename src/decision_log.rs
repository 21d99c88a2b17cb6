// Optional JSONL log of per-turn decisions
//
// One line per move request: turn ordinal, every candidate score in the
// order the selector ranked them, the chosen move, and timing. Useful for
// replaying why the snake picked a move after a lost game. Writes happen
// inline on the request path; the records are a few hundred bytes, and
// the engine itself is synchronous anyway.

use chrono::Utc;
use log::error;
use parking_lot::Mutex;
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::Write;

use crate::bot::Decision;
use crate::config::DebugConfig;
use crate::types::Direction;

/// Represents a single decision log entry
#[derive(Debug, Serialize)]
struct DecisionRecord<'a> {
    turn: i32,
    chosen: Direction,
    score: i32,
    candidates: &'a [(Direction, i32)],
    elapsed_ms: u64,
    timestamp: String,
}

/// File-backed decision logger; a disabled logger is a no-op
pub struct DecisionLog {
    file: Mutex<Option<File>>,
}

impl DecisionLog {
    /// Opens the log file named in the config, truncating any previous
    /// run's log. Falls back to a disabled logger if the file cannot be
    /// created; a missing log never takes the server down.
    pub fn open(config: &DebugConfig) -> Self {
        if !config.enabled {
            return Self::disabled();
        }

        match OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&config.log_file_path)
        {
            Ok(file) => {
                log::info!("Decision logging enabled: {}", config.log_file_path);
                DecisionLog {
                    file: Mutex::new(Some(file)),
                }
            }
            Err(e) => {
                error!(
                    "Failed to create decision log file '{}': {}",
                    config.log_file_path, e
                );
                Self::disabled()
            }
        }
    }

    /// Creates a disabled decision log (no-op)
    pub fn disabled() -> Self {
        DecisionLog {
            file: Mutex::new(None),
        }
    }

    /// Appends one turn's decision as a JSON line
    pub fn record(&self, turn: i32, decision: &Decision, elapsed_ms: u64) {
        let mut guard = self.file.lock();
        let file = match guard.as_mut() {
            Some(file) => file,
            None => return,
        };

        let entry = DecisionRecord {
            turn,
            chosen: decision.direction,
            score: decision.score,
            candidates: &decision.candidates,
            elapsed_ms,
            timestamp: Utc::now().to_rfc3339(),
        };

        match serde_json::to_string(&entry) {
            Ok(line) => {
                if let Err(e) = writeln!(file, "{}", line) {
                    error!("Failed to write decision log entry: {}", e);
                } else if let Err(e) = file.flush() {
                    error!("Failed to flush decision log: {}", e);
                }
            }
            Err(e) => {
                error!("Failed to serialize decision log entry: {}", e);
            }
        }
    }
}
