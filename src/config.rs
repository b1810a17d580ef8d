use super::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Config {
  pub(crate) base_url: String,
  pub(crate) log_file: Option<PathBuf>,
  pub(crate) page_size: usize,
}

impl Config {
  const DEFAULT_BASE_URL: &str = "http://localhost:8080";

  const DEFAULT_PAGE_SIZE: usize = 10;

  pub(crate) fn from_env() -> Result<Self> {
    Self::from_lookup(|key| env::var(key).ok())
  }

  pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let base_url = lookup("FEEDBOARD_URL")
      .map(|url| url.trim().trim_end_matches('/').to_string())
      .filter(|url| !url.is_empty())
      .unwrap_or_else(|| Self::DEFAULT_BASE_URL.to_string());

    let page_size = match lookup("FEEDBOARD_PAGE_SIZE") {
      Some(value) => {
        let page_size = value.trim().parse::<usize>().with_context(|| {
          format!("FEEDBOARD_PAGE_SIZE must be a positive integer, got `{value}`")
        })?;

        if page_size == 0 {
          bail!("FEEDBOARD_PAGE_SIZE must be at least 1");
        }

        page_size
      }
      None => Self::DEFAULT_PAGE_SIZE,
    };

    let log_file = lookup("FEEDBOARD_LOG")
      .filter(|path| !path.trim().is_empty())
      .map(PathBuf::from);

    Ok(Self {
      base_url,
      log_file,
      page_size,
    })
  }
}
