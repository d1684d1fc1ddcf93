use std::path::Path;

use common::{Console, DataSet, DataSetBuilder, FETCH_STARTED, FetchState, LoadError, report_outcome};
use csv_async::AsyncReaderBuilder;
use futures::StreamExt;
use tokio::fs::File;
use tracing::debug;

/// Reads a CSV data file from disk with the same row rules the page uses.
pub async fn load_file(path: &Path) -> Result<DataSet, LoadError> {
    let file = File::open(path).await?;
    let mut reader = AsyncReaderBuilder::new()
        .flexible(true)
        .create_reader(file);

    let headers = reader.headers().await.map_err(csv_error)?;
    let mut builder = DataSetBuilder::from_headers(headers.iter());

    let mut records = reader.into_records();
    while let Some(record) = records.next().await {
        builder.push_record(record.map_err(csv_error)?.iter());
    }

    debug!(path = %path.display(), rows = builder.row_count(), "read data file");
    Ok(builder.finish())
}

pub async fn load_and_report<C>(console: &C, path: &Path) -> FetchState
where
    C: Console + ?Sized,
{
    console.info(FETCH_STARTED);
    let outcome = load_file(path).await;
    report_outcome(console, &outcome)
}

fn csv_error(err: csv_async::Error) -> LoadError {
    LoadError::Csv(err.to_string())
}
