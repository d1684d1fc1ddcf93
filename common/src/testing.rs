use std::cell::RefCell;

use crate::{Console, DataSet, LoadError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogEntry {
    Info(String),
    Data(String, DataSet),
    Warn(String),
    /// Message and the error's display text
    Error(String, String),
}

/// Console that keeps every line in memory.
#[derive(Debug, Default)]
pub struct RecordingConsole {
    entries: RefCell<Vec<LogEntry>>,
}

impl RecordingConsole {
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.borrow().clone()
    }

    pub fn logged_data(&self) -> Vec<DataSet> {
        self.entries
            .borrow()
            .iter()
            .filter_map(|e| match e {
                LogEntry::Data(_, data) => Some(data.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.entries
            .borrow()
            .iter()
            .filter_map(|e| match e {
                LogEntry::Warn(msg) => Some(msg.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn errors(&self) -> Vec<String> {
        self.entries
            .borrow()
            .iter()
            .filter_map(|e| match e {
                LogEntry::Error(_, err) => Some(err.clone()),
                _ => None,
            })
            .collect()
    }
}

impl Console for RecordingConsole {
    fn info(&self, message: &str) {
        self.entries
            .borrow_mut()
            .push(LogEntry::Info(message.to_owned()));
    }

    fn data(&self, message: &str, data: &DataSet) {
        self.entries
            .borrow_mut()
            .push(LogEntry::Data(message.to_owned(), data.clone()));
    }

    fn warn(&self, message: &str) {
        self.entries
            .borrow_mut()
            .push(LogEntry::Warn(message.to_owned()));
    }

    fn error(&self, message: &str, error: &LoadError) {
        self.entries
            .borrow_mut()
            .push(LogEntry::Error(message.to_owned(), error.to_string()));
    }
}
