use super::*;

pub(crate) struct App {
  client: Client,
  event_rx: UnboundedReceiver<Event>,
  event_tx: UnboundedSender<Event>,
  handle: Handle,
  state: State,
}

impl App {
  fn comment_list_item(
    row: &CommentRow,
    editing: Option<&EditForm>,
    updating: bool,
    available_width: u16,
  ) -> ListItem<'static> {
    let mut header = vec![
      Span::raw(BASE_INDENT),
      Span::styled(
        row.checkbox(),
        Style::default().fg(if row.checked {
          Color::Yellow
        } else {
          Color::DarkGray
        }),
      ),
      Span::raw(" "),
      Span::styled(row.comment.header(), Style::default().fg(Color::White)),
    ];

    if updating {
      header.push(Span::styled(
        " (updating...)",
        Style::default().fg(Color::DarkGray),
      ));
    }

    let mut lines = vec![Line::from(header)];

    if let Some(detail) = row.comment.detail() {
      lines.push(Line::from(vec![
        Span::raw(format!("{BASE_INDENT}    ")),
        Span::styled(detail, Style::default().fg(Color::DarkGray)),
      ]));
    }

    let body_indent = format!("{BASE_INDENT}    ");
    let prefix_width = body_indent.chars().count();
    let wrap_width = usize::from(available_width)
      .saturating_sub(prefix_width)
      .max(1);

    match editing {
      Some(form) => {
        let text = format!("{}_", form.buffer);

        for line in wrap_text(&text, wrap_width) {
          lines.push(Line::from(vec![
            Span::raw(body_indent.clone()),
            Span::styled(line, Style::default().fg(Color::Cyan)),
          ]));
        }
      }
      None => {
        for line in wrap_text(row.text(), wrap_width) {
          lines.push(Line::from(vec![
            Span::raw(body_indent.clone()),
            Span::styled(line, Style::default().fg(Color::Gray)),
          ]));
        }
      }
    }

    lines.push(Line::from(Span::raw(BASE_INDENT)));

    ListItem::new(lines)
  }

  /// Runs one command through the state and executes its effects. Returns
  /// whether the app should exit.
  fn dispatch(&mut self, command: Command) -> bool {
    match self.state.dispatch_command(command) {
      Ok(dispatch) => {
        for effect in dispatch.effects {
          self.execute_effect(effect);
        }

        dispatch.should_exit
      }
      Err(error) => {
        self.state.clear_pending_effects();
        self.state.set_transient_message(format!("error: {error}"));
        false
      }
    }
  }

  fn draw(&mut self, frame: &mut Frame) {
    let layout = Layout::default()
      .direction(Direction::Vertical)
      .margin(1)
      .constraints([
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
      ])
      .split(frame.area());

    self.state.set_list_height(usize::from(layout[1].height));

    let feed = self.state.feed();

    let title = Line::from(vec![
      Span::styled(
        "COMMENTS",
        Style::default()
          .fg(Color::Cyan)
          .add_modifier(Modifier::BOLD),
      ),
      Span::raw("  "),
      Span::styled(
        truncate(self.client.base_url(), 60),
        Style::default().fg(Color::DarkGray),
      ),
      Span::raw("  "),
      Span::styled(
        if feed.all_selected() {
          "[x] all"
        } else {
          "[ ] all"
        },
        Style::default().fg(Color::DarkGray),
      ),
    ]);

    frame.render_widget(Paragraph::new(title), layout[0]);

    let editing = match self.state.mode() {
      Mode::Edit(form) => Some(form),
      _ => None,
    };

    let pending_edit = self.state.pending_edit_id();

    let rows = feed.rows();

    let list_items: Vec<ListItem> = if rows.is_empty() {
      let text = if self.state.is_loading() {
        LOADING_STATUS
      } else {
        "No comments yet."
      };

      vec![ListItem::new(Line::from(vec![
        Span::raw(BASE_INDENT),
        Span::raw(text),
      ]))]
    } else {
      rows
        .items()
        .iter()
        .map(|row| {
          Self::comment_list_item(
            row,
            editing.filter(|form| form.id == row.id),
            pending_edit == Some(row.id.as_str()),
            layout[1].width,
          )
        })
        .collect()
    };

    let mut list_state = ListState::default()
      .with_selected(rows.selected_index())
      .with_offset(rows.offset());

    let list = List::new(list_items)
      .highlight_style(
        Style::default()
          .fg(Color::Cyan)
          .add_modifier(Modifier::BOLD),
      )
      .highlight_symbol("");

    frame.render_stateful_widget(list, layout[1], &mut list_state);

    let footer = Self::load_more_line(feed, self.state.is_loading());

    frame.render_widget(
      Paragraph::new(footer).style(Style::default().fg(Color::DarkGray)),
      layout[2],
    );

    let status = self
      .state
      .mode()
      .status_prompt()
      .unwrap_or_else(|| self.state.message().to_string());

    frame.render_widget(
      Paragraph::new(status).style(Style::default().fg(Color::DarkGray)),
      layout[3],
    );

    self
      .state
      .feed_mut()
      .rows_mut()
      .set_offset(list_state.offset());

    self.state.help().draw(frame);
    self.state.alerts().draw(frame);
  }

  fn execute_effect(&mut self, effect: Effect) {
    let (client, sender) = (self.client.clone(), self.event_tx.clone());

    match effect {
      Effect::FetchComments { request_id } => {
        self.handle.spawn(async move {
          let _ = sender.send(Event::CommentsLoaded {
            request_id,
            result: client.fetch_comments().await,
          });
        });
      }
      Effect::DeleteComments { ids, request_id } => {
        self.handle.spawn(async move {
          let result = client.delete_comments(&ids).await;

          let _ = sender.send(Event::CommentsDeleted {
            ids,
            request_id,
            result,
          });
        });
      }
      Effect::EditComment {
        id,
        request_id,
        text,
      } => {
        self.handle.spawn(async move {
          let result = client.edit_comment(&id, &text).await;

          let _ = sender.send(Event::CommentEdited {
            id,
            request_id,
            result,
            text,
          });
        });
      }
      Effect::PostComment {
        name,
        request_id,
        text,
      } => {
        self.handle.spawn(async move {
          let _ = sender.send(Event::CommentPosted {
            request_id,
            result: client.post_comment(&name, &text).await,
          });
        });
      }
      Effect::OpenBoard => {
        let url = self.client.base_url().to_string();

        match webbrowser::open(&url) {
          Ok(()) => {
            self.state.set_transient_message(format!(
              "Opened in browser: {}",
              truncate(&url, 80)
            ));
          }
          Err(error) => {
            warn!(%error, "could not open browser");

            self
              .state
              .set_transient_message(format!("Could not open link: {error}"));
          }
        }
      }
    }
  }

  fn load_more_line(feed: &Feed, loading: bool) -> String {
    match (feed.has_more(), feed.total()) {
      _ if loading => LOADING_STATUS.to_string(),
      (true, Some(total)) => {
        format!("m load more • showing {} of {total}", feed.cursor())
      }
      (true, None) => "m load more".to_string(),
      (false, Some(total)) => {
        format!("All {} shown", plural(total, "comment"))
      }
      (false, None) => String::new(),
    }
  }

  pub(crate) fn new(client: Client, config: &Config) -> Self {
    let (event_tx, event_rx) = mpsc::unbounded_channel();

    Self {
      client,
      event_rx,
      event_tx,
      handle: Handle::current(),
      state: State::new(config.page_size),
    }
  }

  fn process_pending_events(&mut self) {
    self.state.update_transient_message();

    while let Ok(event) = self.event_rx.try_recv() {
      self.state.handle_event(event);
    }

    for effect in self.state.take_effects() {
      self.execute_effect(effect);
    }
  }

  pub(crate) fn run(
    &mut self,
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
  ) -> Result {
    self.dispatch(Command::LoadMore);

    loop {
      self.process_pending_events();

      terminal.draw(|frame| self.draw(frame))?;

      if !crossterm_event::poll(Duration::from_millis(200))? {
        continue;
      }

      let CrosstermEvent::Key(key) = crossterm_event::read()? else {
        continue;
      };

      if key.kind != KeyEventKind::Press {
        continue;
      }

      let command = if self.state.alert_is_visible() {
        AlertView::handle_key(key)
      } else if self.state.help_is_visible() {
        HelpView::handle_key(key)
      } else {
        self.state.mode_mut().handle_key(key)
      };

      if self.dispatch(command) {
        info!("exiting");
        break;
      }
    }

    Ok(())
  }
}
