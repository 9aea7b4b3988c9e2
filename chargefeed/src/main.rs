// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use afdc::RunWindow;
use anyhow::{Context, Result};
use chargefeed::ServiceRunner;
use chrono::Utc;
use config::{Config, CONFIG_PATH_ENV, DEFAULT_CONFIG_PATH};
use std::env;
use tracing::error;

#[cfg(debug_assertions)]
fn setup_logging() {
  tracing_subscriber::fmt()
    .with_file(true)
    .with_line_number(true)
    .with_thread_ids(true)
    .init();
}

#[cfg(not(debug_assertions))]
fn setup_logging() {
  tracing_subscriber::fmt().init();
}

#[tokio::main]
async fn main() -> Result<()> {
  let now = Utc::now();
  setup_logging();

  let config_path = env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.into());
  let config = Config::load(&config_path).context("Failed to load configuration")?;
  let window = RunWindow::trailing_days(now, config.filter.window_days);

  let runner = ServiceRunner::new(&config).context("Failed to set up services")?;

  if let Err(e) = runner.run(window).await {
    error!("Run aborted: {}", e);
    std::process::exit(1);
  }

  Ok(())
}
