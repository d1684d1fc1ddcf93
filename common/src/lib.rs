mod data;
mod error;
mod report;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use data::{DataRow, DataSet, DataSetBuilder};
pub use error::LoadError;
pub use report::{
    report_outcome, Console, FetchState, DATA_EMPTY, FETCH_STARTED, LOAD_FAILED, LOAD_SUCCEEDED,
};
