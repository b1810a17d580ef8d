#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum ComposeField {
  Comment,
  #[default]
  Name,
}

#[derive(Default)]
pub(crate) struct ComposeForm {
  pub(crate) comment: String,
  pub(crate) field: ComposeField,
  pub(crate) name: String,
}

impl ComposeForm {
  pub(crate) fn buffer_mut(&mut self) -> &mut String {
    match self.field {
      ComposeField::Comment => &mut self.comment,
      ComposeField::Name => &mut self.name,
    }
  }

  pub(crate) fn prompt(&self) -> String {
    match self.field {
      ComposeField::Comment => format!("Comment: {}", self.comment),
      ComposeField::Name => format!("Name: {}", self.name),
    }
  }

  pub(crate) fn switch_field(&mut self) {
    self.field = match self.field {
      ComposeField::Comment => ComposeField::Name,
      ComposeField::Name => ComposeField::Comment,
    };
  }
}
