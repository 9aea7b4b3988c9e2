// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::constants::CONNECTORS_PLACEHOLDER;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One station exactly as the upstream API returned it.
///
/// The schema belongs to AFDC, so the object is kept whole and only the
/// fields this crate reads get typed accessors. Snapshots serialize it back
/// unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationRecord(Map<String, Value>);

impl StationRecord {
  pub fn id(&self) -> Option<String> {
    self.text("id")
  }

  pub fn station_name(&self) -> Option<&str> {
    self.str_field("station_name")
  }

  /// Street line as text, empty when missing or null.
  pub fn street_address(&self) -> String {
    self.text("street_address").unwrap_or_default()
  }

  pub fn city(&self) -> String {
    self.text("city").unwrap_or_default()
  }

  /// Postal code as text; AFDC sends strings but numbers are accepted too.
  pub fn zip(&self) -> Option<String> {
    self.text("zip")
  }

  pub fn open_date(&self) -> Option<&str> {
    self.str_field("open_date")
  }

  pub fn date_last_confirmed(&self) -> Option<&str> {
    self.str_field("date_last_confirmed")
  }

  pub fn updated_at(&self) -> Option<&str> {
    self.str_field("updated_at")
  }

  pub fn connector_types(&self) -> Vec<String> {
    match self.0.get("ev_connector_types") {
      Some(Value::Array(items)) => items.iter().filter_map(value_text).collect(),
      _ => Vec::new(),
    }
  }

  /// Comma-joined connector labels, or the placeholder when there are none.
  pub fn connectors_label(&self) -> String {
    let connectors = self.connector_types();
    if connectors.is_empty() {
      CONNECTORS_PLACEHOLDER.to_string()
    } else {
      connectors.join(", ")
    }
  }

  fn str_field(&self, key: &str) -> Option<&str> {
    self.0.get(key).and_then(Value::as_str)
  }

  fn text(&self, key: &str) -> Option<String> {
    self.0.get(key).and_then(value_text)
  }
}

fn value_text(value: &Value) -> Option<String> {
  match value {
    Value::String(s) => Some(s.clone()),
    Value::Number(n) => Some(n.to_string()),
    Value::Bool(b) => Some(b.to_string()),
    _ => None,
  }
}
