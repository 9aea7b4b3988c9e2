// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use super::station::StationRecord;
use serde::{Deserialize, Deserializer, Serialize};

/// Envelope of the alt-fuel-stations response; also the snapshot file layout.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationsResponse {
  #[serde(default, deserialize_with = "null_as_empty")]
  pub fuel_stations: Vec<StationRecord>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<StationRecord>, D::Error>
where
  D: Deserializer<'de>,
{
  Ok(Option::<Vec<StationRecord>>::deserialize(deserializer)?.unwrap_or_default())
}

impl StationsResponse {
  pub fn new(fuel_stations: Vec<StationRecord>) -> Self {
    Self { fuel_stations }
  }
}
