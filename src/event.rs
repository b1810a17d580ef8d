use super::*;

pub(crate) enum Event {
  CommentEdited {
    id: String,
    request_id: u64,
    result: Result<EditOutcome>,
    text: String,
  },
  CommentPosted {
    request_id: u64,
    result: Result<PostOutcome>,
  },
  CommentsDeleted {
    ids: Vec<String>,
    request_id: u64,
    result: Result,
  },
  CommentsLoaded {
    request_id: u64,
    result: Result<Vec<Comment>>,
  },
}
