use super::*;

/// A rectangle centred in `area`, sized to fit `text` plus a border.
pub(crate) fn centered_area(area: Rect, text: &str) -> Rect {
  fn saturating_usize_to_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
  }

  let (line_count, max_line_width) =
    text
      .lines()
      .fold((0usize, 0usize), |(count, width), line| {
        let updated_count = count.saturating_add(1);
        let line_width = line.chars().count();

        (updated_count, width.max(line_width))
      });

  let desired_width =
    saturating_usize_to_u16(max_line_width.saturating_add(2)).max(1);

  let desired_height =
    saturating_usize_to_u16(line_count.saturating_add(2)).max(1);

  let available_width = area.width.saturating_sub(2).max(1);
  let available_height = area.height.saturating_sub(2).max(1);

  let width = available_width.clamp(1, desired_width).min(area.width);
  let height = available_height.clamp(1, desired_height).min(area.height);

  let x = area.x + (area.width.saturating_sub(width)) / 2;
  let y = area.y + (area.height.saturating_sub(height)) / 2;

  Rect::new(x, y, width, height)
}

/// Formats milliseconds since the Unix epoch in local time.
pub(crate) fn format_timestamp(millis: i64) -> String {
  DateTime::from_timestamp_millis(millis).map_or_else(
    || "unknown date".to_string(),
    |utc| {
      utc
        .with_timezone(&Local)
        .format("%-m/%-d/%Y, %-I:%M:%S %p")
        .to_string()
    },
  )
}

pub(crate) fn plural(count: usize, noun: &str) -> String {
  match count {
    1 => format!("1 {noun}"),
    _ => format!("{count} {noun}s"),
  }
}

pub(crate) fn truncate(text: &str, max_chars: usize) -> String {
  if text.chars().count() <= max_chars {
    return text.to_string();
  }

  let mut result = String::new();

  for (idx, ch) in text.chars().enumerate() {
    if idx >= max_chars {
      result.push_str("...");
      break;
    }

    result.push(ch);
  }

  result.trim_end().to_string()
}

pub(crate) fn wrap_text(text: &str, width: usize) -> Vec<String> {
  if text.is_empty() {
    return Vec::new();
  }

  let mut lines = Vec::new();

  for paragraph in text.lines() {
    let mut current = String::new();
    let mut current_width = 0;

    for word in paragraph.split_whitespace() {
      let word_width = word.chars().count();

      if current.is_empty() {
        current.push_str(word);
        current_width = word_width;
      } else if current_width + 1 + word_width <= width {
        current.push(' ');
        current.push_str(word);
        current_width += 1 + word_width;
      } else {
        lines.push(mem::take(&mut current));
        current.push_str(word);
        current_width = word_width;
      }
    }

    lines.push(current);
  }

  lines
}
