//! Run journal: the collaborator receiving one `(action, result)` record
//! per run. Callers treat a failing journal as a warning, never as a failed
//! run.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::value::quote;

/// Results longer than this many characters are cut before being written.
pub const RESULT_LIMIT: usize = 500;

pub trait Journal {
    fn record(&mut self, action: &str, result: &str) -> io::Result<()>;
}

impl<J> Journal for &mut J
where
    J: Journal + ?Sized,
{
    fn record(&mut self, action: &str, result: &str) -> io::Result<()> {
        <J as Journal>::record(self, action, result)
    }
}

impl<J> Journal for Box<J>
where
    J: Journal + ?Sized,
{
    fn record(&mut self, action: &str, result: &str) -> io::Result<()> {
        <J as Journal>::record(self, action, result)
    }
}

impl Journal for Vec<(String, String)> {
    fn record(&mut self, action: &str, result: &str) -> io::Result<()> {
        self.push((action.to_string(), result.to_string()));
        Ok(())
    }
}

pub struct NullJournal;

impl Journal for NullJournal {
    fn record(&mut self, _: &str, _: &str) -> io::Result<()> {
        Ok(())
    }
}

/// Appends tab separated `timestamp action result` lines to a file.
#[derive(Debug, Clone)]
pub struct FileJournal {
    path: PathBuf,
}

impl FileJournal {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileJournal { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Journal for FileJournal {
    fn record(&mut self, action: &str, result: &str) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let timestamp = Local::now().format("%Y-%m-%dT%H:%M:%S").to_string();
        writeln!(file, "{}", format_record(&timestamp, action, result))
    }
}

/// One record per line: the result is truncated and quoted, so embedded
/// newlines and tabs are escaped.
pub fn format_record(timestamp: &str, action: &str, result: &str) -> String {
    format!(
        "{}\t{}\t{}",
        timestamp,
        action,
        quote(truncate(result, RESULT_LIMIT))
    )
}

fn truncate(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
