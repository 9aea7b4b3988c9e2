// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::utils::file::write_atomically;
use afdc::StationSummary;
use chrono::{DateTime, Utc};
use config::FeedConfig;
use error::Error;
use quick_xml::{
  events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
  Writer,
};
use std::{io, path::Path};
use tracing::{info, instrument};

const RSS_VERSION: &str = "2.0";
const ATOM_NS: &str = "http://www.w3.org/2005/Atom";
const DOCS_URL: &str = "http://www.rssboard.org/rss-specification";
const GENERATOR: &str = concat!("chargefeed ", env!("CARGO_PKG_VERSION"));

/// Renders the filtered stations as an RSS 2.0 channel.
pub struct FeedPublisher {
  channel: FeedConfig,
}

impl FeedPublisher {
  pub fn new(channel: FeedConfig) -> Self {
    Self { channel }
  }

  /// Items follow the order of `stations`; `built` is the run start.
  pub fn render(&self, stations: &[StationSummary], built: DateTime<Utc>) -> Result<String, Error> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    writer.write_event(Event::Start(
      BytesStart::new("rss").with_attributes([("version", RSS_VERSION), ("xmlns:atom", ATOM_NS)]),
    ))?;
    writer.write_event(Event::Start(BytesStart::new("channel")))?;

    text_element(&mut writer, "title", &self.channel.title)?;
    text_element(&mut writer, "link", &self.channel.link)?;
    text_element(&mut writer, "description", &self.channel.description)?;
    writer.write_event(Event::Empty(BytesStart::new("atom:link").with_attributes([
      ("href", self.channel.id.as_str()),
      ("rel", "self"),
      ("type", "application/rss+xml"),
    ])))?;
    text_element(&mut writer, "docs", DOCS_URL)?;
    text_element(&mut writer, "generator", GENERATOR)?;
    text_element(&mut writer, "language", &self.channel.language)?;
    text_element(&mut writer, "lastBuildDate", &built.to_rfc2822())?;

    for station in stations {
      write_item(&mut writer, station)?;
    }

    writer.write_event(Event::End(BytesEnd::new("channel")))?;
    writer.write_event(Event::End(BytesEnd::new("rss")))?;

    String::from_utf8(writer.into_inner())
      .map_err(|e| Error::ParseError(format!("Feed is not valid UTF-8: {}", e)))
  }

  #[instrument(skip(self, stations, built), fields(path = %path.display(), count = stations.len()))]
  pub async fn publish(
    &self,
    path: &Path,
    stations: &[StationSummary],
    built: DateTime<Utc>,
  ) -> Result<(), Error> {
    let document = self.render(stations, built)?;
    write_atomically(path, document.as_bytes()).await?;
    info!("RSS saved to {}", path.display());
    Ok(())
  }
}

fn write_item(writer: &mut Writer<Vec<u8>>, station: &StationSummary) -> io::Result<()> {
  writer.write_event(Event::Start(BytesStart::new("item")))?;
  text_element(writer, "title", &station.name)?;
  text_element(writer, "link", &station.link)?;
  text_element(writer, "description", &station.description())?;
  writer.write_event(Event::Start(
    BytesStart::new("guid").with_attributes([("isPermaLink", "false")]),
  ))?;
  writer.write_event(Event::Text(BytesText::new(&station.id)))?;
  writer.write_event(Event::End(BytesEnd::new("guid")))?;
  text_element(writer, "pubDate", &station.published.to_rfc2822())?;
  writer.write_event(Event::End(BytesEnd::new("item")))
}

fn text_element(writer: &mut Writer<Vec<u8>>, name: &str, text: &str) -> io::Result<()> {
  writer.write_event(Event::Start(BytesStart::new(name)))?;
  writer.write_event(Event::Text(BytesText::new(text)))?;
  writer.write_event(Event::End(BytesEnd::new(name)))
}
