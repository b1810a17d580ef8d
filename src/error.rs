use super::*;

#[derive(Debug, Error)]
pub(crate) enum ClientError {
  #[error("could not build HTTP client")]
  Build(#[source] reqwest::Error),
  #[error("{method} {endpoint} returned {status}")]
  UnexpectedStatus {
    endpoint: &'static str,
    method: &'static str,
    status: StatusCode,
  },
}
