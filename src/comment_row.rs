use super::*;

pub(crate) struct CommentRow {
  pub(crate) checked: bool,
  pub(crate) comment: Comment,
  pub(crate) id: String,
}

impl CommentRow {
  pub(crate) fn checkbox(&self) -> &'static str {
    if self.checked { "[x]" } else { "[ ]" }
  }

  pub(crate) fn new(comment: Comment) -> Self {
    Self {
      checked: false,
      id: comment.id(),
      comment,
    }
  }

  pub(crate) fn text(&self) -> &str {
    &self.comment.comment
  }
}
