// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use afdc::{RunWindow, StationRecord, StationSource, StationSummary};
use async_trait::async_trait;
use chargefeed::{RunReport, ServiceRunner};
use chrono::{TimeZone, Utc};
use config::Config;
use discord::StationNotifier;
use error::Error;
use publish::SnapshotWriter;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

enum FakeSource {
  Stations(Vec<Value>),
  Failure(u16, &'static str),
}

#[async_trait]
impl StationSource for FakeSource {
  async fn fetch_stations(&self) -> Result<Vec<StationRecord>, Error> {
    match self {
      Self::Stations(values) => Ok(
        values
          .iter()
          .map(|v| serde_json::from_value(v.clone()).unwrap())
          .collect(),
      ),
      Self::Failure(status, body) => Err(Error::ApiError {
        status: *status,
        body: body.to_string(),
      }),
    }
  }
}

#[derive(Clone, Default)]
struct RecordingNotifier {
  sent: Arc<Mutex<Vec<String>>>,
  fail_on: Option<&'static str>,
}

#[async_trait]
impl StationNotifier for RecordingNotifier {
  async fn notify(&self, station: &StationSummary) -> Result<(), Error> {
    if self.fail_on == Some(station.id.as_str()) {
      return Err(Error::IoError(std::io::Error::other("connection reset")));
    }
    self.sent.lock().unwrap().push(station.id.clone());
    Ok(())
  }
}

struct Harness {
  dir: TempDir,
  config: Config,
}

impl Harness {
  fn new() -> Self {
    let dir = tempfile::tempdir().unwrap();
    let mut config = Config::default();
    config.afdc.api_key = "test".into();
    config.output.snapshot_path = dir.path().join("snapshot.json");
    config.output.feed_path = dir.path().join("feed.rss");
    Self { dir, config }
  }

  fn runner(&self, source: FakeSource, notifier: Option<RecordingNotifier>) -> ServiceRunner {
    ServiceRunner::with_parts(
      &self.config,
      Box::new(source),
      notifier.map(|n| Box::new(n) as Box<dyn StationNotifier>),
    )
  }

  fn snapshot_exists(&self) -> bool {
    self.config.output.snapshot_path.exists()
  }

  fn feed(&self) -> Option<String> {
    std::fs::read_to_string(&self.config.output.feed_path).ok()
  }

  fn leftover_files(&self) -> usize {
    std::fs::read_dir(self.dir.path()).unwrap().count()
  }
}

fn window() -> RunWindow {
  RunWindow::trailing_days(Utc.with_ymd_and_hms(2024, 1, 20, 12, 0, 0).unwrap(), 30)
}

fn station(id: u64, name: &str, zip: &str, open_date: &str) -> Value {
  json!({
    "id": id,
    "station_name": name,
    "street_address": format!("{id} Main St"),
    "city": "Hauppauge",
    "zip": zip,
    "ev_connector_types": ["J1772"],
    "open_date": open_date,
    "date_last_confirmed": null,
    "updated_at": "2019-03-03T10:00:00Z",
  })
}

#[tokio::test]
async fn publishes_recent_long_island_stations() {
  let harness = Harness::new();
  let notifier = RecordingNotifier::default();
  let source = FakeSource::Stations(vec![
    station(3, "Commack Plaza", "11725", "2024-01-12"),
    station(1, "Midtown Garage", "10001", "2024-01-12"),
    station(2, "Hicksville Station", "11801", "2024-01-05"),
    station(4, "Old Lot", "11550", "2018-01-01"),
  ]);

  let report = harness
    .runner(source, Some(notifier.clone()))
    .run(window())
    .await
    .unwrap();

  assert_eq!(
    report,
    RunReport {
      fetched: 4,
      published: 2,
      notified: 2,
    }
  );
  assert_eq!(*notifier.sent.lock().unwrap(), ["3", "2"]);

  let snapshot = SnapshotWriter::new(&harness.config.output.snapshot_path)
    .read()
    .await
    .unwrap();
  let ids: Vec<_> = snapshot.iter().filter_map(StationRecord::id).collect();
  assert_eq!(ids, ["3", "2"]);
  assert_eq!(
    serde_json::to_value(&snapshot[1]).unwrap(),
    station(2, "Hicksville Station", "11801", "2024-01-05")
  );

  let feed = harness.feed().unwrap();
  let commack = feed.find("<title>Commack Plaza</title>").unwrap();
  let hicksville = feed.find("<title>Hicksville Station</title>").unwrap();
  assert!(commack < hicksville);
  assert!(!feed.contains("Midtown Garage"));
  assert!(!feed.contains("Old Lot"));
}

#[tokio::test]
async fn nothing_recent_writes_nothing() {
  let harness = Harness::new();
  let notifier = RecordingNotifier::default();
  let source = FakeSource::Stations(vec![
    station(1, "Midtown Garage", "10001", "2024-01-12"),
    station(4, "Old Lot", "11550", "2018-01-01"),
  ]);

  let report = harness
    .runner(source, Some(notifier.clone()))
    .run(window())
    .await
    .unwrap();

  assert_eq!(report.fetched, 2);
  assert_eq!(report.published, 0);
  assert!(notifier.sent.lock().unwrap().is_empty());
  assert_eq!(harness.leftover_files(), 0);
}

#[tokio::test]
async fn fetch_failure_aborts_before_any_output() {
  let harness = Harness::new();
  let notifier = RecordingNotifier::default();

  let result = harness
    .runner(
      FakeSource::Failure(403, "API_KEY_INVALID"),
      Some(notifier.clone()),
    )
    .run(window())
    .await;

  match result {
    Err(Error::ApiError { status, body }) => {
      assert_eq!(status, 403);
      assert_eq!(body, "API_KEY_INVALID");
    }
    other => panic!("expected API error, got {other:?}"),
  }
  assert!(notifier.sent.lock().unwrap().is_empty());
  assert_eq!(harness.leftover_files(), 0);
}

#[tokio::test]
async fn missing_name_keeps_snapshot_but_writes_no_feed() {
  let harness = Harness::new();
  let notifier = RecordingNotifier::default();
  let mut nameless = station(9, "unused", "11743", "2024-01-10");
  nameless.as_object_mut().unwrap().remove("station_name");
  let source = FakeSource::Stations(vec![
    station(3, "Commack Plaza", "11725", "2024-01-12"),
    nameless,
  ]);

  let result = harness
    .runner(source, Some(notifier.clone()))
    .run(window())
    .await;

  assert!(matches!(
    result,
    Err(Error::MissingField { field: "station_name", .. })
  ));
  assert!(harness.snapshot_exists());
  assert!(harness.feed().is_none());
  assert!(notifier.sent.lock().unwrap().is_empty());
}

#[tokio::test]
async fn null_street_address_still_publishes() {
  let harness = Harness::new();
  let notifier = RecordingNotifier::default();
  let mut addressless = station(6, "Smithtown Library", "11787", "2024-01-14");
  addressless["street_address"] = Value::Null;
  let source = FakeSource::Stations(vec![addressless]);

  let report = harness
    .runner(source, Some(notifier.clone()))
    .run(window())
    .await
    .unwrap();

  assert_eq!(report.published, 1);
  assert_eq!(report.notified, 1);
  assert_eq!(*notifier.sent.lock().unwrap(), ["6"]);
  let feed = harness.feed().unwrap();
  assert!(feed.contains("<title>Smithtown Library</title>"));
  assert!(feed.contains("Address: , Hauppauge, 11787"));
}

#[tokio::test]
async fn transport_failure_stops_remaining_notifications() {
  let harness = Harness::new();
  let notifier = RecordingNotifier {
    fail_on: Some("2"),
    ..RecordingNotifier::default()
  };
  let source = FakeSource::Stations(vec![
    station(1, "Brentwood", "11717", "2024-01-11"),
    station(2, "Islip", "11751", "2024-01-12"),
    station(3, "Bay Shore", "11706", "2024-01-13"),
  ]);

  let result = harness
    .runner(source, Some(notifier.clone()))
    .run(window())
    .await;

  assert!(matches!(result, Err(Error::IoError(_))));
  assert_eq!(*notifier.sent.lock().unwrap(), ["1"]);
  assert!(harness.feed().is_some());
}

#[tokio::test]
async fn without_webhook_only_files_are_written() {
  let harness = Harness::new();
  let source = FakeSource::Stations(vec![station(5, "Riverhead", "11901", "2024-01-15")]);

  let report = harness.runner(source, None).run(window()).await.unwrap();

  assert_eq!(report.published, 1);
  assert_eq!(report.notified, 0);
  assert!(harness.snapshot_exists());
  assert!(harness.feed().unwrap().contains("<title>Riverhead</title>"));
}

#[test]
fn runner_without_webhook_builds_from_config() {
  let harness = Harness::new();
  assert!(ServiceRunner::new(&harness.config).is_ok());

  let mut config = harness.config.clone();
  config.afdc.api_key.clear();
  assert!(matches!(
    ServiceRunner::new(&config),
    Err(Error::ConfigError(_))
  ));
}
