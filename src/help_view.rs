use super::*;

pub(crate) struct HelpView {
  saved_status: Option<String>,
  visible: bool,
}

impl HelpView {
  pub(crate) fn draw(&self, frame: &mut Frame) {
    if !self.visible {
      return;
    }

    let area = centered_area(frame.area(), HELP_TEXT);

    frame.render_widget(Clear, area);

    let help = Paragraph::new(HELP_TEXT)
      .block(Block::default().title(HELP_TITLE).borders(Borders::ALL))
      .wrap(Wrap { trim: true });

    frame.render_widget(help, area);
  }

  pub(crate) fn handle_key(key: KeyEvent) -> Command {
    match key.code {
      KeyCode::Char('?') | KeyCode::Esc => Command::HideHelp,
      KeyCode::Char('q' | 'Q') => Command::Quit,
      _ => Command::None,
    }
  }

  pub(crate) fn hide(&mut self, status: &mut String) {
    if !self.visible {
      return;
    }

    *status = self
      .saved_status
      .take()
      .unwrap_or_else(|| FEED_STATUS.into());

    self.visible = false;
  }

  pub(crate) fn is_visible(&self) -> bool {
    self.visible
  }

  pub(crate) fn new() -> Self {
    Self {
      saved_status: None,
      visible: false,
    }
  }

  pub(crate) fn show(&mut self, status: &mut String) {
    if self.visible {
      return;
    }

    self.saved_status = Some(mem::replace(status, HELP_STATUS.into()));

    self.visible = true;
  }
}
