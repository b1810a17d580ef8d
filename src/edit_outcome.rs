use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum EditOutcome {
  Forbidden,
  NotFound,
  Updated,
}

impl EditOutcome {
  pub(crate) fn from_status(status: StatusCode) -> Option<Self> {
    match status {
      StatusCode::FORBIDDEN => Some(Self::Forbidden),
      StatusCode::NOT_FOUND => Some(Self::NotFound),
      status if status.is_success() => Some(Self::Updated),
      _ => None,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn maps_edit_statuses() {
    assert_eq!(
      EditOutcome::from_status(StatusCode::OK),
      Some(EditOutcome::Updated)
    );

    assert_eq!(
      EditOutcome::from_status(StatusCode::NO_CONTENT),
      Some(EditOutcome::Updated)
    );

    assert_eq!(
      EditOutcome::from_status(StatusCode::NOT_FOUND),
      Some(EditOutcome::NotFound)
    );

    assert_eq!(
      EditOutcome::from_status(StatusCode::FORBIDDEN),
      Some(EditOutcome::Forbidden)
    );

    assert_eq!(
      EditOutcome::from_status(StatusCode::INTERNAL_SERVER_ERROR),
      None
    );
  }
}
