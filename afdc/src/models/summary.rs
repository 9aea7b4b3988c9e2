// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use super::station::StationRecord;
use crate::{
  dates::{date_used, parse_timestamp},
  filter::RunWindow,
};
use chrono::{DateTime, Utc};
use error::Error;
use serde::Serialize;

/// Display values of one published station, shared by the feed item and the
/// chat notification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationSummary {
  pub id: String,
  pub name: String,
  pub address: String,
  pub connectors: String,
  pub date_used: String,
  pub published: DateTime<Utc>,
  pub link: String,
}

impl StationSummary {
  pub fn from_record(
    station: &StationRecord,
    window: &RunWindow,
    link_base: &str,
  ) -> Result<Self, Error> {
    // Only the name and some date are required; the rest render as text.
    let id = station.id().unwrap_or_default();
    let name = station
      .station_name()
      .ok_or_else(|| missing(&id, "station_name"))?
      .to_string();
    let street = station.street_address();
    let city = station.city();
    let zip = station.zip().unwrap_or_default();
    let date_used = date_used(station).ok_or_else(|| missing(&id, "updated_at"))?;
    let published = parse_timestamp(&date_used).unwrap_or(window.now);

    Ok(Self {
      link: format!("{link_base}{id}"),
      address: format!("{street}, {city}, {zip}"),
      connectors: station.connectors_label(),
      id,
      name,
      date_used,
      published,
    })
  }

  /// Feed item body.
  pub fn description(&self) -> String {
    format!(
      "Address: {}\nConnectors: {}\nAdded/Updated: {}",
      self.address, self.connectors, self.date_used
    )
  }
}

fn missing(station: &str, field: &'static str) -> Error {
  Error::MissingField {
    station: station.to_string(),
    field,
  }
}
