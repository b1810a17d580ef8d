use super::*;

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Comment {
  pub(crate) comment: String,
  #[serde(default)]
  pub(crate) email: Option<String>,
  #[serde(default)]
  pub(crate) key: Option<String>,
  pub(crate) name: String,
  #[serde(default)]
  pub(crate) sentiment_score: Option<f64>,
  pub(crate) timestamp: i64,
}

impl Comment {
  /// Moderation details the admin view shows under each comment.
  pub(crate) fn detail(&self) -> Option<String> {
    let email = self.email.as_deref().filter(|email| !email.is_empty());

    let sentiment = self
      .sentiment_score
      .map(|score| format!("sentiment {score:.2}"));

    match (email, sentiment) {
      (Some(email), Some(sentiment)) => Some(format!("{email} • {sentiment}")),
      (Some(email), None) => Some(email.to_string()),
      (None, Some(sentiment)) => Some(sentiment),
      (None, None) => None,
    }
  }

  pub(crate) fn header(&self) -> String {
    format!("{} on {}", self.name, format_timestamp(self.timestamp))
  }

  /// Server-issued key when the backend provides one, otherwise the
  /// millisecond timestamp the backend matches deletions on.
  pub(crate) fn id(&self) -> String {
    self
      .key
      .clone()
      .filter(|key| !key.is_empty())
      .unwrap_or_else(|| self.timestamp.to_string())
  }
}
