// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use afdc::{constants::DATE_FORMAT, AfdcClient, RunWindow, StationFilter, StationSource, StationSummary};
use config::Config;
use discord::{DiscordClient, DiscordNotifier, StationNotifier};
use error::Error;
use publish::{FeedPublisher, SnapshotWriter};
use std::path::PathBuf;
use tracing::{debug, info, instrument};

/// What a completed run produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunReport {
  pub fetched: usize,
  pub published: usize,
  pub notified: usize,
}

pub struct ServiceRunner {
  source: Box<dyn StationSource>,
  notifier: Option<Box<dyn StationNotifier>>,
  filter: StationFilter,
  snapshot: SnapshotWriter,
  publisher: FeedPublisher,
  feed_path: PathBuf,
  station_link_base: String,
  title: String,
}

impl ServiceRunner {
  #[instrument(skip(config))]
  pub fn new(config: &Config) -> Result<Self, Error> {
    let source = Box::new(AfdcClient::new(&config.afdc)?);

    let notifier = match config.discord.webhook_url() {
      Some(url) => {
        let mut builder = DiscordClient::builder().webhook_url(url);
        if let Some(timeout) = config.discord.timeout() {
          builder = builder.timeout(timeout);
        }
        let notifier = DiscordNotifier::new(builder.build()?, config.discord.hashtags.clone());
        Some(Box::new(notifier) as Box<dyn StationNotifier>)
      }
      None => None,
    };

    Ok(Self::with_parts(config, source, notifier))
  }

  /// Builds a runner around any station source and notifier.
  pub fn with_parts(
    config: &Config,
    source: Box<dyn StationSource>,
    notifier: Option<Box<dyn StationNotifier>>,
  ) -> Self {
    Self {
      source,
      notifier,
      filter: StationFilter::new(config.filter.zip_prefixes.iter().cloned()),
      snapshot: SnapshotWriter::new(config.output.snapshot_path.clone()),
      publisher: FeedPublisher::new(config.feed.clone()),
      feed_path: config.output.feed_path.clone(),
      station_link_base: config.feed.station_link_base.clone(),
      title: config.feed.title.clone(),
    }
  }

  #[instrument(skip(self, window), fields(now = %window.now))]
  pub async fn run(&self, window: RunWindow) -> Result<RunReport, Error> {
    info!("{} - {}", self.title, window.now.format(DATE_FORMAT));
    info!("Fetching latest data from AFDC...");
    let stations = self.source.fetch_stations().await?;
    let fetched = stations.len();

    info!(
      "Filtering for region and last {} days...",
      (window.now - window.cutoff).num_days()
    );
    let recent = self.filter.apply(stations, &window);
    info!("Found {} new/recently-updated chargers!", recent.len());

    if recent.is_empty() {
      info!("No updates this run - skipping snapshot, RSS and notifications");
      return Ok(RunReport {
        fetched,
        ..RunReport::default()
      });
    }

    self.snapshot.write(&recent).await?;

    info!("Generating RSS feed...");
    let summaries = recent
      .iter()
      .map(|station| StationSummary::from_record(station, &window, &self.station_link_base))
      .collect::<Result<Vec<_>, _>>()?;
    self
      .publisher
      .publish(&self.feed_path, &summaries, window.now)
      .await?;

    let notified = self.notify_all(&summaries).await?;

    Ok(RunReport {
      fetched,
      published: summaries.len(),
      notified,
    })
  }

  async fn notify_all(&self, summaries: &[StationSummary]) -> Result<usize, Error> {
    let Some(notifier) = &self.notifier else {
      debug!("No webhook configured - skipping notifications");
      return Ok(0);
    };

    info!("Posting updates to Discord...");
    for station in summaries {
      notifier.notify(station).await?;
    }
    info!("Discord posts sent!");
    Ok(summaries.len())
  }
}
