use super::*;

/// Modal messages that block input until dismissed, shown oldest first.
#[derive(Default)]
pub(crate) struct AlertView {
  queue: VecDeque<String>,
}

impl AlertView {
  pub(crate) fn current(&self) -> Option<&str> {
    self.queue.front().map(String::as_str)
  }

  pub(crate) fn dismiss(&mut self) {
    self.queue.pop_front();
  }

  pub(crate) fn draw(&self, frame: &mut Frame) {
    let Some(text) = self.current() else {
      return;
    };

    let body = format!("{text}\n\n{ALERT_HINT}");

    let area = centered_area(frame.area(), &body);

    frame.render_widget(Clear, area);

    let alert = Paragraph::new(body)
      .style(Style::default().fg(Color::White))
      .block(
        Block::default()
          .title(ALERT_TITLE)
          .borders(Borders::ALL)
          .border_style(Style::default().fg(Color::Yellow)),
      )
      .wrap(Wrap { trim: true });

    frame.render_widget(alert, area);
  }

  pub(crate) fn handle_key(key: KeyEvent) -> Command {
    match key.code {
      KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => {
        Command::DismissAlert
      }
      _ => Command::None,
    }
  }

  pub(crate) fn is_visible(&self) -> bool {
    !self.queue.is_empty()
  }

  pub(crate) fn push(&mut self, text: impl Into<String>) {
    let text = text.into();

    info!(alert = %text, "raising alert");

    self.queue.push_back(text);
  }
}
