use super::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum PostOutcome {
  Accepted,
  Rejected(String),
}

impl PostOutcome {
  /// The backend redirects after storing a comment and answers with an
  /// HTML snippet explaining the refusal otherwise.
  pub(crate) fn from_response(status: StatusCode, body: &str) -> Option<Self> {
    if status.is_redirection() {
      return Some(Self::Accepted);
    }

    if !status.is_success() {
      return None;
    }

    let reason = html2text::from_read(body.as_bytes(), usize::MAX)
      .map(|text| text.trim().to_owned())
      .unwrap_or_else(|_| body.trim().to_owned());

    if reason.is_empty() {
      Some(Self::Accepted)
    } else {
      Some(Self::Rejected(reason))
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn redirect_means_accepted() {
    assert_eq!(
      PostOutcome::from_response(StatusCode::FOUND, ""),
      Some(PostOutcome::Accepted)
    );
  }

  #[test]
  fn html_body_becomes_rejection_reason() {
    assert_eq!(
      PostOutcome::from_response(
        StatusCode::OK,
        "<p>Please refrain from entering negative comments.</p>\n"
      ),
      Some(PostOutcome::Rejected(
        "Please refrain from entering negative comments.".to_string()
      ))
    );
  }

  #[test]
  fn empty_success_body_is_accepted() {
    assert_eq!(
      PostOutcome::from_response(StatusCode::OK, "  \n"),
      Some(PostOutcome::Accepted)
    );
  }

  #[test]
  fn server_error_is_not_an_outcome() {
    assert_eq!(
      PostOutcome::from_response(StatusCode::BAD_GATEWAY, "oops"),
      None
    );
  }
}
