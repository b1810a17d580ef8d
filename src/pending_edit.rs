pub(crate) struct PendingEdit {
  pub(crate) id: String,
  pub(crate) request_id: u64,
}
