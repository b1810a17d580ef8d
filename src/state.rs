use super::*;

pub(crate) struct State {
  alerts: AlertView,
  feed: Feed,
  help: HelpView,
  list_height: usize,
  load_outdated: bool,
  message: String,
  mode: Mode,
  next_request_id: u64,
  page_size: usize,
  pending_delete: Option<u64>,
  pending_edit: Option<PendingEdit>,
  pending_effects: Vec<Effect>,
  pending_load: Option<u64>,
  pending_post: Option<u64>,
  transient_message: Option<TransientMessage>,
}

impl State {
  pub(crate) fn alert_is_visible(&self) -> bool {
    self.alerts.is_visible()
  }

  pub(crate) fn alerts(&self) -> &AlertView {
    &self.alerts
  }

  fn cancel_compose(&mut self) {
    if matches!(self.mode, Mode::Compose(_)) {
      self.mode = Mode::Feed;
    }
  }

  fn cancel_edit(&mut self) {
    if let Mode::Edit(form) = &self.mode {
      debug!(id = %form.id, "edit cancelled");
      self.mode = Mode::Feed;
    }
  }

  pub(crate) fn clear_pending_effects(&mut self) {
    self.pending_effects.clear();
  }

  fn delete_selected(&mut self) {
    let ids = self.feed.selected_ids();

    if ids.is_empty() {
      self.alerts.push(NO_SELECTION_ALERT);
      return;
    }

    if self.pending_delete.is_some() {
      self.set_transient_message(DELETE_IN_PROGRESS_STATUS.into());
      return;
    }

    let request_id = self.next_request_id();

    info!(count = ids.len(), request_id, "requesting bulk delete");

    self.pending_delete = Some(request_id);

    self.set_status(format!("Deleting {}...", plural(ids.len(), "comment")));

    self
      .pending_effects
      .push(Effect::DeleteComments { ids, request_id });
  }

  pub(crate) fn dispatch_command(
    &mut self,
    command: Command,
  ) -> Result<CommandDispatch> {
    debug_assert!(
      self.pending_effects.is_empty(),
      "command dispatch should start without pending effects"
    );

    let mut should_exit = false;

    match command {
      Command::Quit => {
        should_exit = true;
      }
      Command::ShowHelp => self.help.show(&mut self.message),
      Command::HideHelp => self.help.hide(&mut self.message),
      Command::DismissAlert => self.alerts.dismiss(),
      Command::LoadMore => self.load_more(),
      Command::Reload => self.reload(),
      Command::SelectNext => self.feed.rows_mut().select_next(),
      Command::SelectPrevious => self.feed.rows_mut().select_previous(),
      Command::SelectFirst => self.feed.rows_mut().set_selected(0),
      Command::SelectLast => self.select_last(),
      Command::PageDown => self.page_down(),
      Command::PageUp => self.page_up(),
      Command::SelectAll => self.select_all(),
      Command::ToggleChecked => {
        self.feed.toggle_selected();
      }
      Command::DeleteSelected => self.delete_selected(),
      Command::StartEdit => self.start_edit(),
      Command::CancelEdit => self.cancel_edit(),
      Command::SubmitEdit => self.submit_edit(),
      Command::StartCompose => self.start_compose(),
      Command::CancelCompose => self.cancel_compose(),
      Command::SubmitCompose => self.submit_compose(),
      Command::OpenInBrowser => self.pending_effects.push(Effect::OpenBoard),
      Command::None => {}
    }

    Ok(CommandDispatch {
      effects: mem::take(&mut self.pending_effects),
      should_exit,
    })
  }

  pub(crate) fn feed(&self) -> &Feed {
    &self.feed
  }

  pub(crate) fn feed_mut(&mut self) -> &mut Feed {
    &mut self.feed
  }

  pub(crate) fn handle_event(&mut self, event: Event) {
    match event {
      Event::CommentsLoaded { request_id, result } => {
        if self.pending_load != Some(request_id) {
          debug!(request_id, "discarding stale comments response");
          return;
        }

        if self.load_outdated && result.is_ok() {
          debug!(request_id, "rows changed during load, fetching again");
          self.start_load();
          return;
        }

        self.pending_load = None;

        self.set_status(FEED_STATUS.into());

        match result {
          Ok(comments) => {
            let rendered = self.feed.apply_page(comments);

            if rendered > 0 {
              self.set_transient_message(format!(
                "Loaded {}",
                plural(rendered, "comment")
              ));
            }
          }
          Err(error) => {
            warn!(%error, "loading comments failed");

            self.set_transient_message(format!(
              "Could not load comments: {error}"
            ));
          }
        }
      }
      Event::CommentsDeleted {
        ids,
        request_id,
        result,
      } => {
        if self.pending_delete != Some(request_id) {
          return;
        }

        self.pending_delete = None;

        self.set_status(FEED_STATUS.into());

        match result {
          Ok(()) => {
            let removed = self.remove_rows(&ids);

            info!(requested = ids.len(), removed, "bulk delete completed");

            self.set_transient_message(format!(
              "Deleted {}",
              plural(ids.len(), "comment")
            ));
          }
          Err(error) => {
            warn!(%error, "bulk delete failed");

            self.alerts.push(format!("Could not delete comments: {error}"));
          }
        }
      }
      Event::CommentEdited {
        id,
        request_id,
        result,
        text,
      } => {
        if self
          .pending_edit
          .as_ref()
          .is_none_or(|pending| pending.request_id != request_id)
        {
          return;
        }

        self.pending_edit = None;

        self.set_status(FEED_STATUS.into());

        match result {
          Ok(EditOutcome::Updated) => {
            self.feed.patch_text(&id, &text);
            self.set_transient_message(EDIT_UPDATED_STATUS.into());
          }
          Ok(EditOutcome::NotFound) => {
            self.alerts.push(EDIT_NOT_FOUND_ALERT);
            self.remove_rows(&[id]);
          }
          Ok(EditOutcome::Forbidden) => {
            self.alerts.push(EDIT_FORBIDDEN_ALERT);
          }
          Err(error) => {
            warn!(%error, "edit failed");

            self.alerts.push(format!("Could not update comment: {error}"));
          }
        }
      }
      Event::CommentPosted { request_id, result } => {
        if self.pending_post != Some(request_id) {
          return;
        }

        self.pending_post = None;

        self.set_status(FEED_STATUS.into());

        match result {
          Ok(PostOutcome::Accepted) => {
            self.reload();
            self.set_transient_message(POSTED_STATUS.into());
          }
          Ok(PostOutcome::Rejected(reason)) => self.alerts.push(reason),
          Err(error) => {
            warn!(%error, "posting comment failed");

            self.alerts.push(format!("Could not post comment: {error}"));
          }
        }
      }
    }
  }

  pub(crate) fn help(&self) -> &HelpView {
    &self.help
  }

  pub(crate) fn help_is_visible(&self) -> bool {
    self.help.is_visible()
  }

  pub(crate) fn is_loading(&self) -> bool {
    self.pending_load.is_some()
  }

  fn load_more(&mut self) {
    if self.pending_load.is_some() {
      debug!("load already in flight");
      return;
    }

    if !self.feed.has_more() {
      return;
    }

    self.start_load();
  }

  pub(crate) fn message(&self) -> &str {
    &self.message
  }

  pub(crate) fn mode(&self) -> &Mode {
    &self.mode
  }

  pub(crate) fn mode_mut(&mut self) -> &mut Mode {
    &mut self.mode
  }

  pub(crate) fn new(page_size: usize) -> Self {
    Self {
      alerts: AlertView::default(),
      feed: Feed::new(page_size),
      help: HelpView::new(),
      list_height: 0,
      load_outdated: false,
      message: FEED_STATUS.into(),
      mode: Mode::Feed,
      next_request_id: 0,
      page_size,
      pending_delete: None,
      pending_edit: None,
      pending_effects: Vec::new(),
      pending_load: None,
      pending_post: None,
      transient_message: None,
    }
  }

  fn next_request_id(&mut self) -> u64 {
    let request_id = self.next_request_id;

    self.next_request_id = self.next_request_id.wrapping_add(1);

    request_id
  }

  fn page_down(&mut self) {
    let current = self.feed.rows().selected_index().unwrap_or(0);
    let jump = self.page_jump();

    self
      .feed
      .rows_mut()
      .set_selected(current.saturating_add(jump));
  }

  fn page_jump(&self) -> usize {
    self.list_height.saturating_sub(1).max(1)
  }

  fn page_up(&mut self) {
    let current = self.feed.rows().selected_index().unwrap_or(0);
    let jump = self.page_jump();

    self
      .feed
      .rows_mut()
      .set_selected(current.saturating_sub(jump));
  }

  pub(crate) fn pending_edit_id(&self) -> Option<&str> {
    self.pending_edit.as_ref().map(|pending| pending.id.as_str())
  }

  /// Drops every rendered row and starts over from the first page. Any load
  /// still in flight is superseded.
  fn reload(&mut self) {
    info!("reloading feed");

    self.feed = Feed::new(self.page_size);

    if matches!(self.mode, Mode::Edit(_)) {
      self.mode = Mode::Feed;
    }

    self.start_load();
  }

  /// Drops rows the server no longer has. A load already in flight may hold
  /// a snapshot from before the removal, so its response is refetched.
  fn remove_rows(&mut self, ids: &[String]) -> usize {
    if self.pending_load.is_some() {
      self.load_outdated = true;
    }

    self.feed.remove(ids)
  }

  fn select_all(&mut self) {
    let all_selected = self.feed.select_all();

    debug!(all_selected, "select all toggled");
  }

  fn select_last(&mut self) {
    let last = self.feed.rows().len().saturating_sub(1);

    self.feed.rows_mut().set_selected(last);
  }

  pub(crate) fn set_list_height(&mut self, height: usize) {
    self.list_height = height;
  }

  fn set_status(&mut self, message: String) {
    if !self.help.is_visible() {
      self.transient_message = None;
      self.message = message;
    }
  }

  pub(crate) fn set_transient_message(&mut self, message: String) {
    if self.help.is_visible() {
      return;
    }

    let restore = self.transient_message.as_ref().map_or_else(
      || self.message.clone(),
      |transient| transient.restore().to_string(),
    );

    self.transient_message = Some(TransientMessage::new(
      message.clone(),
      restore,
      TRANSIENT_MESSAGE_TTL,
    ));

    self.message = message;
  }

  fn start_compose(&mut self) {
    if self.pending_post.is_some() {
      self.set_transient_message(POST_IN_PROGRESS_STATUS.into());
      return;
    }

    self.mode = Mode::Compose(ComposeForm::default());
  }

  fn start_edit(&mut self) {
    if self.pending_edit.is_some() {
      self.set_transient_message(EDIT_IN_PROGRESS_STATUS.into());
      return;
    }

    let Some(row) = self.feed.selected_row() else {
      return;
    };

    debug!(id = %row.id, "editing row");

    self.mode = Mode::Edit(EditForm::new(row.id.clone(), row.text()));
  }

  fn start_load(&mut self) {
    let request_id = self.next_request_id();

    debug!(request_id, cursor = self.feed.cursor(), "loading comments");

    self.pending_load = Some(request_id);

    self.load_outdated = false;

    self.set_status(LOADING_STATUS.into());

    self
      .pending_effects
      .push(Effect::FetchComments { request_id });
  }

  fn submit_compose(&mut self) {
    let Mode::Compose(form) = &self.mode else {
      return;
    };

    let text = form.comment.trim().to_string();

    if text.is_empty() {
      self.alerts.push(EMPTY_COMMENT_ALERT);
      return;
    }

    let name = form.name.trim().to_string();

    if name.is_empty() {
      self.alerts.push(EMPTY_NAME_ALERT);
      return;
    }

    self.mode = Mode::Feed;

    let request_id = self.next_request_id();

    self.pending_post = Some(request_id);

    self.set_status(POSTING_STATUS.into());

    self.pending_effects.push(Effect::PostComment {
      name,
      request_id,
      text,
    });
  }

  fn submit_edit(&mut self) {
    let Mode::Edit(form) = &self.mode else {
      return;
    };

    let text = form.buffer.trim().to_string();

    if text.is_empty() {
      self.alerts.push(EMPTY_COMMENT_ALERT);
      return;
    }

    let id = form.id.clone();

    self.mode = Mode::Feed;

    let request_id = self.next_request_id();

    info!(%id, request_id, "submitting edit");

    self.pending_edit = Some(PendingEdit {
      id: id.clone(),
      request_id,
    });

    self.set_status(UPDATING_STATUS.into());

    self.pending_effects.push(Effect::EditComment {
      id,
      request_id,
      text,
    });
  }

  /// Effects queued while folding in events, such as the reload after an
  /// accepted post.
  pub(crate) fn take_effects(&mut self) -> Vec<Effect> {
    mem::take(&mut self.pending_effects)
  }

  pub(crate) fn update_transient_message(&mut self) {
    if let Some(transient) = self.transient_message.clone() {
      if self.message != transient.text() {
        self.transient_message = None;
      } else if transient.is_expired_at(Instant::now()) {
        self.message = transient.restore().to_string();
        self.transient_message = None;
      }
    }
  }
}
