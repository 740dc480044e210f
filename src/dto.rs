use std::path::Path;

use csv_async::AsyncReaderBuilder;
use serde::Deserialize;
use tokio::fs::File;
use tokio_stream::StreamExt;

/// One row of the seed account list: `name,id,balance`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct AccountSpec {
    pub name: String,
    pub id: u32,
    pub balance: i64,
}

/// Reads the seed account list from a CSV file.
pub fn read_accounts<P: AsRef<Path>>(path: P) -> csv::Result<Vec<AccountSpec>> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?
        .into_deserialize()
        .collect()
}

/// Streams the seed account list from a CSV file without blocking the
/// runtime. Used by the async runner.
pub async fn read_accounts_async<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<AccountSpec>, csv_async::Error> {
    let file = File::open(path).await?;
    let mut csv_reader = AsyncReaderBuilder::new()
        .has_headers(true)
        .trim(csv_async::Trim::All)
        .create_deserializer(file);

    let mut records = csv_reader.deserialize::<AccountSpec>();
    let mut specs = Vec::new();
    while let Some(result) = records.next().await {
        specs.push(result?);
    }
    Ok(specs)
}
