// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use error::Error;
use std::path::{Path, PathBuf};

/// Replaces `path` with `content` through a sibling temp file and a rename.
pub async fn write_atomically(path: &Path, content: &[u8]) -> Result<(), Error> {
  let temp_path = temp_sibling(path);
  tokio::fs::write(&temp_path, content).await?;
  tokio::fs::rename(&temp_path, path).await?;
  Ok(())
}

fn temp_sibling(path: &Path) -> PathBuf {
  let mut name = path.file_name().unwrap_or_default().to_os_string();
  name.push(".tmp");
  path.with_file_name(name)
}
