// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
pub mod client;
pub mod dates;
pub mod filter;
pub mod models;

pub use client::{AfdcClient, StationSource};
pub use dates::{DateField, StationDates};
pub use filter::{RunWindow, StationFilter};
pub use models::{
  api::StationsResponse, station::StationRecord, summary::StationSummary,
};

pub mod constants {
  /// Top-level key holding the station list, both upstream and in snapshots.
  pub const STATIONS_KEY: &str = "fuel_stations";
  pub const DATE_FORMAT: &str = "%Y-%m-%d";
  pub const CONNECTORS_PLACEHOLDER: &str = "N/A";
  pub(crate) const STATUS_ALL: &str = "all";
  pub(crate) const LIMIT_ALL: &str = "all";
}
