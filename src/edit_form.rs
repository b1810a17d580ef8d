pub(crate) struct EditForm {
  pub(crate) buffer: String,
  pub(crate) id: String,
}

impl EditForm {
  pub(crate) fn new(id: String, text: &str) -> Self {
    Self {
      buffer: text.to_string(),
      id,
    }
  }

  pub(crate) fn prompt(&self) -> String {
    format!("Edit: {}", self.buffer)
  }
}
