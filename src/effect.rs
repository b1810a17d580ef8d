#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Effect {
  DeleteComments {
    ids: Vec<String>,
    request_id: u64,
  },
  EditComment {
    id: String,
    request_id: u64,
    text: String,
  },
  FetchComments {
    request_id: u64,
  },
  OpenBoard,
  PostComment {
    name: String,
    request_id: u64,
    text: String,
  },
}
