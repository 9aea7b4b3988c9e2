// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{dates::StationDates, models::station::StationRecord};
use chrono::{DateTime, Duration, Utc};
use tracing::{debug, instrument};

/// Fixed reference times of a run, computed once at start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunWindow {
  pub now: DateTime<Utc>,
  pub cutoff: DateTime<Utc>,
}

impl RunWindow {
  pub fn trailing_days(now: DateTime<Utc>, days: i64) -> Self {
    Self {
      now,
      cutoff: now - Duration::days(days),
    }
  }
}

#[derive(Debug, Clone)]
pub struct StationFilter {
  zip_prefixes: Vec<String>,
}

impl StationFilter {
  pub fn new<I, S>(zip_prefixes: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self {
      zip_prefixes: zip_prefixes.into_iter().map(Into::into).collect(),
    }
  }

  /// Exact, case-sensitive prefix match on the postal code text.
  pub fn in_region(&self, station: &StationRecord) -> bool {
    let zip = station.zip().unwrap_or_default();
    self
      .zip_prefixes
      .iter()
      .any(|prefix| zip.starts_with(prefix.as_str()))
  }

  pub fn is_recent(&self, station: &StationRecord, window: &RunWindow) -> bool {
    StationDates::from_record(station).any_since(window.cutoff)
  }

  pub fn matches(&self, station: &StationRecord, window: &RunWindow) -> bool {
    self.in_region(station) && self.is_recent(station, window)
  }

  /// Keeps matching stations in their original order.
  #[instrument(skip(self, stations), fields(total = stations.len()))]
  pub fn apply(&self, stations: Vec<StationRecord>, window: &RunWindow) -> Vec<StationRecord> {
    let kept: Vec<_> = stations
      .into_iter()
      .filter(|station| self.matches(station, window))
      .collect();
    debug!("{} stations passed the region and recency filter", kept.len());
    kept
  }
}
