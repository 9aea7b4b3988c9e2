// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
//! Timestamp handling for the three AFDC date fields.
//!
//! AFDC mixes plain dates (`2024-01-05`) with full timestamps
//! (`2024-01-15T18:22:41Z`). Text containing `T`, `+` or a trailing `Z` is read
//! as a timestamp, anything else as a calendar date at UTC midnight.
use crate::{constants::DATE_FORMAT, models::station::StationRecord};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

const OFFSET_FORMATS: [&str; 3] = [
  "%Y-%m-%dT%H:%M:%S%.f%:z",
  "%Y-%m-%d %H:%M:%S%.f%:z",
  "%Y-%m-%dT%H:%M%:z",
];

// No offset at all: taken as UTC.
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Parses one AFDC date value into a UTC instant.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
  if raw.is_empty() {
    return None;
  }

  if raw.contains('T') || raw.contains('+') || raw.ends_with('Z') {
    let normalized = match raw.strip_suffix('Z') {
      Some(head) => format!("{head}+00:00"),
      None => raw.to_string(),
    };
    parse_datetime(&normalized)
  } else {
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
      .ok()
      .map(|date| Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)))
  }
}

fn parse_datetime(text: &str) -> Option<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(text)
    .ok()
    .or_else(|| {
      OFFSET_FORMATS
        .iter()
        .find_map(|format| DateTime::parse_from_str(text, format).ok())
    })
    .map(|dt| dt.with_timezone(&Utc))
    .or_else(|| {
      NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .map(|naive| Utc.from_utc_datetime(&naive))
    })
}

/// Outcome of reading one date field of a station.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateField {
  /// Missing, null or empty.
  Absent,
  /// Present but not a date this crate understands.
  Invalid(String),
  Valid(DateTime<Utc>),
}

impl DateField {
  pub fn from_raw(raw: Option<&str>) -> Self {
    match raw {
      None | Some("") => Self::Absent,
      Some(text) => match parse_timestamp(text) {
        Some(instant) => Self::Valid(instant),
        None => Self::Invalid(text.to_string()),
      },
    }
  }

  pub fn instant(&self) -> Option<DateTime<Utc>> {
    match self {
      Self::Valid(instant) => Some(*instant),
      _ => None,
    }
  }
}

/// The three date fields of a station, in `open_date`, `date_last_confirmed`,
/// `updated_at` order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationDates {
  pub open_date: DateField,
  pub date_last_confirmed: DateField,
  pub updated_at: DateField,
}

impl StationDates {
  pub fn from_record(station: &StationRecord) -> Self {
    Self {
      open_date: DateField::from_raw(station.open_date()),
      date_last_confirmed: DateField::from_raw(station.date_last_confirmed()),
      updated_at: DateField::from_raw(station.updated_at()),
    }
  }

  pub fn iter(&self) -> impl Iterator<Item = &DateField> {
    [&self.open_date, &self.date_last_confirmed, &self.updated_at].into_iter()
  }

  pub fn any_since(&self, cutoff: DateTime<Utc>) -> bool {
    self
      .iter()
      .filter_map(DateField::instant)
      .any(|instant| instant >= cutoff)
  }
}

/// Display date of a station: `open_date`, else `date_last_confirmed`, else
/// the leading `YYYY-MM-DD` of `updated_at`.
///
/// Returns `None` only when all three are missing.
pub fn date_used(station: &StationRecord) -> Option<String> {
  if let Some(date) = station.open_date().filter(|d| !d.is_empty()) {
    return Some(date.to_string());
  }
  if let Some(date) = station.date_last_confirmed().filter(|d| !d.is_empty()) {
    return Some(date.to_string());
  }
  station
    .updated_at()
    .map(|updated| updated.chars().take(10).collect())
}
