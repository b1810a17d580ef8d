use super::*;

/// Rendered comments plus the pagination cursor into the server collection.
pub(crate) struct Feed {
  all_selected: bool,
  cursor: usize,
  page_size: usize,
  rows: ListView<CommentRow>,
  total: Option<usize>,
}

impl Feed {
  pub(crate) fn all_selected(&self) -> bool {
    self.all_selected
  }

  /// Appends the next page of `collection` after the cursor and returns how
  /// many rows were rendered. Comments whose id is already shown are skipped.
  pub(crate) fn apply_page(&mut self, collection: Vec<Comment>) -> usize {
    let total = collection.len();

    if self.cursor > total {
      warn!(
        cursor = self.cursor,
        total, "collection shrank below the cursor"
      );

      self.total = Some(self.cursor);

      return 0;
    }

    self.total = Some(total);

    let end = total.min(self.cursor.saturating_add(self.page_size));

    let page = collection
      .into_iter()
      .skip(self.cursor)
      .take(end - self.cursor)
      .map(CommentRow::new)
      .filter(|row| !self.rows.items().iter().any(|shown| shown.id == row.id))
      .collect::<Vec<_>>();

    let before = self.rows.len();

    self.rows.extend(page);

    let rendered = self.rows.len() - before;

    self.cursor = end;

    debug!(rendered, cursor = self.cursor, total, "applied page");

    rendered
  }

  pub(crate) fn cursor(&self) -> usize {
    self.cursor
  }

  pub(crate) fn has_more(&self) -> bool {
    self.total.is_none_or(|total| self.cursor < total)
  }

  pub(crate) fn new(page_size: usize) -> Self {
    Self {
      all_selected: false,
      cursor: 0,
      page_size: page_size.max(1),
      rows: ListView::default(),
      total: None,
    }
  }

  pub(crate) fn patch_text(&mut self, id: &str, text: &str) -> bool {
    match self.rows.items_mut().iter_mut().find(|row| row.id == id) {
      Some(row) => {
        row.comment.comment = text.to_string();
        true
      }
      None => false,
    }
  }

  /// Drops rows the server no longer has. The cursor keeps counting rendered
  /// rows, so it moves back by the number of rows removed.
  pub(crate) fn remove(&mut self, ids: &[String]) -> usize {
    let removed = self.rows.retain(|row| !ids.contains(&row.id));

    self.cursor = self.cursor.saturating_sub(removed);

    self.total = self.total.map(|total| total.saturating_sub(removed));

    removed
  }

  pub(crate) fn rows(&self) -> &ListView<CommentRow> {
    &self.rows
  }

  pub(crate) fn rows_mut(&mut self) -> &mut ListView<CommentRow> {
    &mut self.rows
  }

  /// Flips the select-all flag and applies it to every row.
  pub(crate) fn select_all(&mut self) -> bool {
    self.all_selected = !self.all_selected;

    for row in self.rows.items_mut() {
      row.checked = self.all_selected;
    }

    self.all_selected
  }

  pub(crate) fn selected_ids(&self) -> Vec<String> {
    self
      .rows
      .items()
      .iter()
      .filter(|row| row.checked)
      .map(|row| row.id.clone())
      .collect()
  }

  pub(crate) fn selected_row(&self) -> Option<&CommentRow> {
    self.rows.selected_item()
  }

  pub(crate) fn toggle_selected(&mut self) -> Option<bool> {
    let row = self.rows.selected_item_mut()?;

    row.checked = !row.checked;

    Some(row.checked)
  }

  pub(crate) fn total(&self) -> Option<usize> {
    self.total
  }
}

#[cfg(test)]
mod tests {
  use {super::*, std::collections::HashSet};

  fn comments(count: usize) -> Vec<Comment> {
    (0..count)
      .map(|i| Comment {
        comment: format!("comment {i}"),
        email: None,
        key: Some(format!("key-{i}")),
        name: format!("user {i}"),
        sentiment_score: None,
        timestamp: i64::try_from(i).unwrap(),
      })
      .collect()
  }

  fn texts(feed: &Feed) -> Vec<String> {
    feed
      .rows()
      .items()
      .iter()
      .map(|row| row.text().to_string())
      .collect()
  }

  #[test]
  fn each_load_renders_at_most_one_page() {
    for total in [0, 1, 9, 10, 11, 25, 30] {
      let mut feed = Feed::new(10);

      loop {
        let cursor = feed.cursor();
        let rendered = feed.apply_page(comments(total));

        assert_eq!(rendered, total.min(cursor + 10) - cursor);
        assert_eq!(feed.rows().len(), feed.cursor());
        assert!(feed.cursor() <= total);

        if !feed.has_more() {
          break;
        }
      }

      assert_eq!(feed.cursor(), total);
      assert_eq!(feed.apply_page(comments(total)), 0);
      assert_eq!(feed.cursor(), total);
    }
  }

  #[test]
  fn loads_never_re_render_shown_comments() {
    let mut feed = Feed::new(10);

    feed.apply_page(comments(15));
    feed.apply_page(comments(15));

    let expected = (0..15).map(|i| format!("comment {i}")).collect::<Vec<_>>();

    assert_eq!(texts(&feed), expected);
  }

  #[test]
  fn two_comment_example_hides_load_more() {
    let mut feed = Feed::new(10);

    assert!(feed.has_more());

    let rendered = feed.apply_page(vec![
      Comment {
        comment: "hi".into(),
        email: None,
        key: None,
        name: "A".into(),
        sentiment_score: None,
        timestamp: 1,
      },
      Comment {
        comment: "yo".into(),
        email: None,
        key: None,
        name: "B".into(),
        sentiment_score: None,
        timestamp: 2,
      },
    ]);

    assert_eq!(rendered, 2);
    assert_eq!(feed.cursor(), 2);
    assert!(!feed.has_more());
  }

  #[test]
  fn empty_collection_renders_nothing_and_hides_load_more() {
    let mut feed = Feed::new(10);

    assert_eq!(feed.apply_page(Vec::new()), 0);
    assert_eq!(feed.cursor(), 0);
    assert_eq!(feed.total(), Some(0));
    assert!(!feed.has_more());
  }

  #[test]
  fn shrunken_collection_keeps_cursor() {
    let mut feed = Feed::new(10);

    feed.apply_page(comments(10));

    assert_eq!(feed.apply_page(comments(4)), 0);
    assert_eq!(feed.cursor(), 10);
    assert_eq!(feed.total(), Some(10));
    assert!(!feed.has_more());
  }

  #[test]
  fn page_skips_comments_already_shown() {
    let mut feed = Feed::new(10);

    feed.apply_page(comments(30));
    feed.remove(&["key-0".to_string(), "key-1".to_string()]);

    assert_eq!(feed.apply_page(comments(30)), 8);

    let unique = feed
      .rows()
      .items()
      .iter()
      .map(|row| row.id.as_str())
      .collect::<HashSet<_>>();

    assert_eq!(feed.rows().len(), 16);
    assert_eq!(unique.len(), 16);
  }

  #[test]
  fn select_all_flips_rather_than_sets() {
    let mut feed = Feed::new(10);
    feed.apply_page(comments(3));

    assert!(feed.select_all());
    assert!(feed.rows().items().iter().all(|row| row.checked));

    assert!(!feed.select_all());
    assert!(feed.rows().items().iter().all(|row| !row.checked));
  }

  #[test]
  fn select_all_twice_does_not_restore_manual_changes() {
    let mut feed = Feed::new(10);
    feed.apply_page(comments(3));

    feed.rows_mut().set_selected(1);
    feed.toggle_selected();

    feed.select_all();
    feed.select_all();

    assert!(feed.selected_ids().is_empty());
  }

  #[test]
  fn selected_ids_are_returned_in_row_order() {
    let mut feed = Feed::new(10);
    feed.apply_page(comments(5));

    feed.rows_mut().set_selected(3);
    feed.toggle_selected();

    feed.rows_mut().set_selected(1);
    feed.toggle_selected();

    assert_eq!(feed.selected_ids(), vec!["key-1", "key-3"]);
  }

  #[test]
  fn toggle_on_empty_feed_is_a_no_op() {
    let mut feed = Feed::new(10);

    assert_eq!(feed.toggle_selected(), None);
    assert!(feed.selected_row().is_none());
  }

  #[test]
  fn remove_moves_cursor_back_by_removed_rows() {
    let mut feed = Feed::new(10);
    feed.apply_page(comments(12));

    let removed = feed.remove(&["key-2".to_string(), "key-5".to_string()]);

    assert_eq!(removed, 2);
    assert_eq!(feed.cursor(), 8);
    assert_eq!(feed.total(), Some(10));
    assert!(feed.has_more());

    let remaining = comments(12)
      .into_iter()
      .filter(|comment| comment.id() != "key-2" && comment.id() != "key-5")
      .collect();

    assert_eq!(feed.apply_page(remaining), 2);

    assert_eq!(feed.rows().len(), 10);
    assert!(!feed.has_more());
  }

  #[test]
  fn patch_text_updates_only_the_matching_row() {
    let mut feed = Feed::new(10);
    feed.apply_page(comments(3));

    assert!(feed.patch_text("key-1", "edited"));
    assert!(!feed.patch_text("missing", "edited"));

    assert_eq!(texts(&feed), vec!["comment 0", "edited", "comment 2"]);
  }
}
