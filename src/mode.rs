use super::*;

pub(crate) enum Mode {
  Compose(ComposeForm),
  Edit(EditForm),
  Feed,
}

impl Mode {
  fn edit_buffer(buffer: &mut String, key: KeyEvent) {
    match key.code {
      KeyCode::Backspace => {
        buffer.pop();
      }
      KeyCode::Char(ch) => {
        let modifiers = key.modifiers;

        if modifiers.contains(KeyModifiers::CONTROL)
          || modifiers.contains(KeyModifiers::ALT)
          || modifiers.contains(KeyModifiers::SUPER)
        {
          return;
        }

        buffer.push(ch);
      }
      _ => {}
    }
  }

  pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Command {
    match self {
      Mode::Feed => {
        let modifiers = key.modifiers;

        match key.code {
          KeyCode::Char('q' | 'Q') | KeyCode::Esc => Command::Quit,
          KeyCode::Char('?') => Command::ShowHelp,
          KeyCode::Down | KeyCode::Char('j') => Command::SelectNext,
          KeyCode::Up | KeyCode::Char('k') => Command::SelectPrevious,
          KeyCode::PageDown => Command::PageDown,
          KeyCode::PageUp => Command::PageUp,
          KeyCode::Char('d') if modifiers.contains(KeyModifiers::CONTROL) => {
            Command::PageDown
          }
          KeyCode::Char('u') if modifiers.contains(KeyModifiers::CONTROL) => {
            Command::PageUp
          }
          KeyCode::Home | KeyCode::Char('g') => Command::SelectFirst,
          KeyCode::End | KeyCode::Char('G') => Command::SelectLast,
          KeyCode::Char(' ') => Command::ToggleChecked,
          KeyCode::Char('a') => Command::SelectAll,
          KeyCode::Char('d') | KeyCode::Delete => Command::DeleteSelected,
          KeyCode::Char('m') | KeyCode::Enter => Command::LoadMore,
          KeyCode::Char('e') => Command::StartEdit,
          KeyCode::Char('n') => Command::StartCompose,
          KeyCode::Char('r') => Command::Reload,
          KeyCode::Char('o' | 'O') => Command::OpenInBrowser,
          _ => Command::None,
        }
      }
      Mode::Edit(form) => match key.code {
        KeyCode::Esc => Command::CancelEdit,
        KeyCode::Enter => Command::SubmitEdit,
        _ => {
          Self::edit_buffer(&mut form.buffer, key);
          Command::None
        }
      },
      Mode::Compose(form) => match key.code {
        KeyCode::Esc => Command::CancelCompose,
        KeyCode::Enter => Command::SubmitCompose,
        KeyCode::Tab | KeyCode::BackTab => {
          form.switch_field();
          Command::None
        }
        _ => {
          Self::edit_buffer(form.buffer_mut(), key);
          Command::None
        }
      },
    }
  }

  pub(crate) fn status_prompt(&self) -> Option<String> {
    match self {
      Mode::Compose(form) => Some(form.prompt()),
      Mode::Edit(form) => Some(form.prompt()),
      Mode::Feed => None,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
  }

  #[test]
  fn feed_keys_map_to_commands() {
    let mut mode = Mode::Feed;

    assert_eq!(mode.handle_key(key(KeyCode::Char('m'))), Command::LoadMore);
    assert_eq!(mode.handle_key(key(KeyCode::Char('a'))), Command::SelectAll);
    assert_eq!(
      mode.handle_key(key(KeyCode::Char(' '))),
      Command::ToggleChecked
    );
    assert_eq!(
      mode.handle_key(key(KeyCode::Char('d'))),
      Command::DeleteSelected
    );
    assert_eq!(
      mode.handle_key(KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL)),
      Command::PageDown
    );
  }

  #[test]
  fn edit_mode_types_into_buffer() {
    let mut mode = Mode::Edit(EditForm::new("1".into(), "ab"));

    assert_eq!(mode.handle_key(key(KeyCode::Backspace)), Command::None);
    assert_eq!(mode.handle_key(key(KeyCode::Char('c'))), Command::None);
    assert_eq!(
      mode.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL)),
      Command::None
    );

    assert_eq!(mode.status_prompt().as_deref(), Some("Edit: ac"));

    assert_eq!(mode.handle_key(key(KeyCode::Enter)), Command::SubmitEdit);
    assert_eq!(mode.handle_key(key(KeyCode::Esc)), Command::CancelEdit);
  }

  #[test]
  fn compose_mode_tab_switches_field() {
    let mut mode = Mode::Compose(ComposeForm::default());

    mode.handle_key(key(KeyCode::Char('A')));
    mode.handle_key(key(KeyCode::Tab));
    mode.handle_key(key(KeyCode::Char('h')));
    mode.handle_key(key(KeyCode::Char('i')));

    let Mode::Compose(form) = &mode else {
      panic!("mode changed unexpectedly");
    };

    assert_eq!(form.name, "A");
    assert_eq!(form.comment, "hi");

    assert_eq!(mode.handle_key(key(KeyCode::Enter)), Command::SubmitCompose);
  }
}
