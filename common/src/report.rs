use crate::{DataSet, LoadError};

pub const FETCH_STARTED: &str = "DOM Loaded, starting to fetch data...";
pub const LOAD_SUCCEEDED: &str = "Data loaded successfully:";
pub const DATA_EMPTY: &str = "Data is empty. Please check the file path or content.";
pub const LOAD_FAILED: &str = "Error loading data:";

/// Where load outcomes are reported. The browser build writes to the
/// developer console, native tools write to `tracing`.
pub trait Console {
    fn info(&self, message: &str);
    fn data(&self, message: &str, data: &DataSet);
    fn warn(&self, message: &str);
    fn error(&self, message: &str, error: &LoadError);
}

impl<C: Console + ?Sized> Console for &C {
    fn info(&self, message: &str) {
        (**self).info(message)
    }

    fn data(&self, message: &str, data: &DataSet) {
        (**self).data(message, data)
    }

    fn warn(&self, message: &str) {
        (**self).warn(message)
    }

    fn error(&self, message: &str, error: &LoadError) {
        (**self).error(message, error)
    }
}

/// Lifecycle of a single fetch. Both outcomes are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchState {
    Pending,
    Succeeded,
    Failed,
}

impl FetchState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, FetchState::Pending)
    }
}

/// Logs a finished load and returns the state it settled in.
///
/// An empty data set still counts as a success; it only adds a warning.
pub fn report_outcome<C>(console: &C, outcome: &Result<DataSet, LoadError>) -> FetchState
where
    C: Console + ?Sized,
{
    match outcome {
        Ok(data) => {
            console.data(LOAD_SUCCEEDED, data);
            if data.is_empty() {
                console.warn(DATA_EMPTY);
            }
            FetchState::Succeeded
        }
        Err(err) => {
            console.error(LOAD_FAILED, err);
            FetchState::Failed
        }
    }
}
