use super::*;

/// Status text shown until `expires_at`, after which the line goes back to
/// `restore`.
#[derive(Clone)]
pub(crate) struct TransientMessage {
  expires_at: Instant,
  restore: String,
  text: String,
}

impl TransientMessage {
  pub(crate) fn is_expired_at(&self, now: Instant) -> bool {
    now >= self.expires_at
  }

  pub(crate) fn new(text: String, restore: String, ttl: Duration) -> Self {
    Self {
      expires_at: Instant::now() + ttl,
      restore,
      text,
    }
  }

  pub(crate) fn restore(&self) -> &str {
    &self.restore
  }

  pub(crate) fn text(&self) -> &str {
    &self.text
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn reverts_once_ttl_elapses() {
    let message = TransientMessage::new(
      "Deleted 2 comments".into(),
      FEED_STATUS.into(),
      Duration::from_secs(3),
    );

    let now = Instant::now();

    assert!(!message.is_expired_at(now));
    assert!(message.is_expired_at(now + Duration::from_secs(3)));
    assert_eq!(message.text(), "Deleted 2 comments");
    assert_eq!(message.restore(), FEED_STATUS);
  }

  #[test]
  fn zero_ttl_expires_immediately() {
    let message = TransientMessage::new(
      "Comment posted".into(),
      "idle".into(),
      Duration::ZERO,
    );

    assert!(message.is_expired_at(Instant::now()));
  }
}
