// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::utils::file::write_atomically;
use afdc::{StationRecord, StationsResponse};
use error::Error;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

/// Writes the filtered stations as `{"fuel_stations": [...]}`.
pub struct SnapshotWriter {
  path: PathBuf,
}

impl SnapshotWriter {
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into() }
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  #[instrument(skip(self, stations), fields(path = %self.path.display(), count = stations.len()))]
  pub async fn write(&self, stations: &[StationRecord]) -> Result<(), Error> {
    let snapshot = StationsResponse::new(stations.to_vec());
    let json = serde_json::to_vec_pretty(&snapshot)?;
    write_atomically(&self.path, &json).await?;
    info!("JSON saved to {}", self.path.display());
    Ok(())
  }

  pub async fn read(&self) -> Result<Vec<StationRecord>, Error> {
    let content = tokio::fs::read(&self.path).await?;
    let snapshot: StationsResponse = serde_json::from_slice(&content)?;
    Ok(snapshot.fuel_stations)
  }
}
