use super::*;

#[derive(Clone)]
pub(crate) struct Client {
  base_url: String,
  client: reqwest::Client,
  no_redirect: reqwest::Client,
}

impl Client {
  const ADMIN_PATH: &str = "/admin";

  const DATA_PATH: &str = "/data";

  const EDIT_PATH: &str = "/edit";

  pub(crate) fn base_url(&self) -> &str {
    &self.base_url
  }

  pub(crate) async fn delete_comments(&self, ids: &[String]) -> Result {
    debug!(count = ids.len(), "deleting comments");

    let response = self
      .client
      .post(self.url(Self::ADMIN_PATH))
      .json(ids)
      .send()
      .await
      .context("could not reach the admin endpoint")?;

    Self::ensure_success(response.status(), "POST", Self::ADMIN_PATH)?;

    Ok(())
  }

  /// Resolves `id` to its current position in the collection and posts the
  /// new text for that position.
  pub(crate) async fn edit_comment(
    &self,
    id: &str,
    text: &str,
  ) -> Result<EditOutcome> {
    let comments = self.fetch_comments().await?;

    let Some(index) = Self::index_of(&comments, id) else {
      debug!(id, "comment vanished before edit");
      return Ok(EditOutcome::NotFound);
    };

    debug!(id, index, "editing comment");

    let index = index.to_string();

    let response = self
      .client
      .post(self.url(Self::EDIT_PATH))
      .form(&[("index", index.as_str()), ("new-comment", text)])
      .send()
      .await
      .context("could not reach the edit endpoint")?;

    let status = response.status();

    EditOutcome::from_status(status).ok_or_else(|| {
      ClientError::UnexpectedStatus {
        endpoint: Self::EDIT_PATH,
        method: "POST",
        status,
      }
      .into()
    })
  }

  fn ensure_success(
    status: StatusCode,
    method: &'static str,
    endpoint: &'static str,
  ) -> Result {
    if status.is_success() {
      Ok(())
    } else {
      warn!(%status, endpoint, "unexpected response status");

      Err(
        ClientError::UnexpectedStatus {
          endpoint,
          method,
          status,
        }
        .into(),
      )
    }
  }

  pub(crate) async fn fetch_comments(&self) -> Result<Vec<Comment>> {
    let response = self
      .client
      .get(self.url(Self::DATA_PATH))
      .send()
      .await
      .context("could not reach the comments endpoint")?;

    Self::ensure_success(response.status(), "GET", Self::DATA_PATH)?;

    let comments = response
      .json::<Vec<Comment>>()
      .await
      .context("comments response was not valid JSON")?;

    debug!(count = comments.len(), "fetched comments");

    Ok(comments)
  }

  /// Position of `id` in the collection, which is what `/edit` addresses.
  fn index_of(comments: &[Comment], id: &str) -> Option<usize> {
    comments.iter().position(|comment| comment.id() == id)
  }

  pub(crate) fn new(base_url: &str) -> Result<Self> {
    let no_redirect = reqwest::Client::builder()
      .redirect(redirect::Policy::none())
      .build()
      .map_err(ClientError::Build)?;

    Ok(Self {
      base_url: base_url.trim_end_matches('/').to_string(),
      client: reqwest::Client::new(),
      no_redirect,
    })
  }

  pub(crate) async fn post_comment(
    &self,
    name: &str,
    text: &str,
  ) -> Result<PostOutcome> {
    debug!(name, "posting comment");

    let response = self
      .no_redirect
      .post(self.url(Self::DATA_PATH))
      .form(&[("user-name", name), ("user-comment", text)])
      .send()
      .await
      .context("could not reach the comments endpoint")?;

    let status = response.status();

    let body = response
      .text()
      .await
      .context("could not read the post response");

    Self::post_outcome(status, body)
  }

  fn post_outcome(
    status: StatusCode,
    body: Result<String>,
  ) -> Result<PostOutcome> {
    let body = body?;

    PostOutcome::from_response(status, &body).ok_or_else(|| {
      ClientError::UnexpectedStatus {
        endpoint: Self::DATA_PATH,
        method: "POST",
        status,
      }
      .into()
    })
  }

  fn url(&self, path: &str) -> String {
    format!("{}{path}", self.base_url)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn trailing_slashes_are_trimmed_from_base_url() {
    let client = Client::new("http://localhost:8080//").unwrap();

    assert_eq!(client.base_url(), "http://localhost:8080");
    assert_eq!(client.url(Client::DATA_PATH), "http://localhost:8080/data");
  }

  #[test]
  fn non_success_status_is_an_unexpected_status_error() {
    let error = Client::ensure_success(
      StatusCode::INTERNAL_SERVER_ERROR,
      "GET",
      Client::DATA_PATH,
    )
    .unwrap_err();

    assert_eq!(
      error.to_string(),
      "GET /data returned 500 Internal Server Error"
    );

    assert!(
      Client::ensure_success(StatusCode::OK, "GET", Client::DATA_PATH).is_ok()
    );
  }

  fn comment(key: Option<&str>, timestamp: i64) -> Comment {
    Comment {
      comment: "text".into(),
      email: None,
      key: key.map(str::to_string),
      name: "user".into(),
      sentiment_score: None,
      timestamp,
    }
  }

  #[test]
  fn index_of_finds_position_by_key() {
    let comments = vec![
      comment(Some("a"), 1),
      comment(Some("b"), 2),
      comment(Some("c"), 3),
    ];

    assert_eq!(Client::index_of(&comments, "a"), Some(0));
    assert_eq!(Client::index_of(&comments, "c"), Some(2));
  }

  #[test]
  fn index_of_missing_id_is_none() {
    let comments = vec![comment(Some("a"), 1), comment(Some("b"), 2)];

    assert_eq!(Client::index_of(&comments, "z"), None);
    assert_eq!(Client::index_of(&comments, "1"), None);
    assert_eq!(Client::index_of(&[], "a"), None);
  }

  #[test]
  fn index_of_matches_timestamp_when_keyless() {
    let comments = vec![
      comment(None, 1_593_000_000_000),
      comment(None, 1_593_000_000_500),
    ];

    assert_eq!(Client::index_of(&comments, "1593000000500"), Some(1));
  }

  #[test]
  fn unreadable_post_body_is_an_error() {
    let error = Client::post_outcome(
      StatusCode::OK,
      Err(
        anyhow!("connection reset").context("could not read the post response"),
      ),
    )
    .unwrap_err();

    assert_eq!(error.to_string(), "could not read the post response");
  }

  #[test]
  fn post_outcome_follows_status() {
    assert_eq!(
      Client::post_outcome(StatusCode::FOUND, Ok(String::new())).unwrap(),
      PostOutcome::Accepted
    );

    assert!(
      Client::post_outcome(StatusCode::INTERNAL_SERVER_ERROR, Ok(String::new()))
        .is_err()
    );
  }
}
