use {
  alert_view::AlertView,
  anyhow::{Context, anyhow, bail},
  app::App,
  chrono::{DateTime, Local},
  client::Client,
  command::Command,
  command_dispatch::CommandDispatch,
  comment::Comment,
  comment_row::CommentRow,
  compose_form::ComposeForm,
  config::Config,
  crossterm::{
    event as crossterm_event,
    event::{
      Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
    },
    execute,
    style::Stylize,
    terminal::{
      EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
      enable_raw_mode,
    },
  },
  edit_form::EditForm,
  edit_outcome::EditOutcome,
  effect::Effect,
  error::ClientError,
  event::Event,
  feed::Feed,
  help_view::HelpView,
  list_view::ListView,
  mode::Mode,
  pending_edit::PendingEdit,
  post_outcome::PostOutcome,
  ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
      Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap,
    },
  },
  reqwest::{StatusCode, redirect},
  serde::Deserialize,
  state::State,
  std::{
    backtrace::BacktraceStatus,
    collections::VecDeque,
    env,
    fs::OpenOptions,
    io::{self, IsTerminal, Stdout},
    mem,
    path::{Path, PathBuf},
    process,
    sync::Mutex,
    time::{Duration, Instant},
  },
  thiserror::Error,
  tokio::{
    runtime::Handle,
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
  },
  tracing::{debug, info, warn},
  tracing_subscriber::EnvFilter,
  transient_message::TransientMessage,
  utils::{centered_area, format_timestamp, plural, truncate, wrap_text},
};

mod alert_view;
mod app;
mod client;
mod command;
mod command_dispatch;
mod comment;
mod comment_row;
mod compose_form;
mod config;
mod edit_form;
mod edit_outcome;
mod effect;
mod error;
mod event;
mod feed;
mod help_view;
mod list_view;
mod mode;
mod pending_edit;
mod post_outcome;
mod state;
mod transient_message;
mod utils;

const FEED_STATUS: &str = "↑/k up • ↓/j down • space check • a all • d delete • e edit • n new • m more • q quit • ? help";

const HELP_TITLE: &str = "Help";
const HELP_STATUS: &str = "Press ? or esc to close help";

const ALERT_TITLE: &str = "Alert";
const ALERT_HINT: &str = "Press enter to continue";

const LOADING_STATUS: &str = "Loading comments...";
const UPDATING_STATUS: &str = "Updating comment...";
const POSTING_STATUS: &str = "Posting comment...";

const DELETE_IN_PROGRESS_STATUS: &str = "A deletion is already in progress";
const EDIT_IN_PROGRESS_STATUS: &str = "Another edit is still being saved";
const POST_IN_PROGRESS_STATUS: &str = "A comment is still being posted";

const EDIT_UPDATED_STATUS: &str = "Comment updated";
const POSTED_STATUS: &str = "Comment posted";

const NO_SELECTION_ALERT: &str = "There are no comments to delete!";
const EMPTY_COMMENT_ALERT: &str = "Please enter a valid comment.";
const EMPTY_NAME_ALERT: &str = "Please enter your name.";
const EDIT_NOT_FOUND_ALERT: &str =
  "That comment no longer exists. It may have been deleted.";
const EDIT_FORBIDDEN_ALERT: &str = "You can only edit your own comments.";

const TRANSIENT_MESSAGE_TTL: Duration = Duration::from_secs(3);

const BASE_INDENT: &str = " ";

const HELP_TEXT: &str = "\
Navigation:
  ↑ / k   move selection up
  ↓ / j   move selection down
  pg↓     page down
  pg↑     page up
  ctrl+d  page down
  ctrl+u  page up
  home/g  jump to first comment
  end/G   jump to last comment

Comments:
  m       load the next page of comments
  enter   load the next page of comments
  r       reload from the first page
  space   check or uncheck the selected comment
  a       check or uncheck every comment
  d       delete the checked comments
  e       edit the selected comment
  n       write a new comment (tab switches field)
  o       open the board in your browser

Forms:
  enter   submit
  esc     cancel

  q       quit feedboard
  ?       toggle this help
";

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn initialize_logging(path: &Path) -> Result {
  let file = OpenOptions::new()
    .create(true)
    .append(true)
    .open(path)
    .with_context(|| format!("could not open log file {}", path.display()))?;

  let filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new("info"));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(Mutex::new(file))
    .with_ansi(false)
    .try_init()
    .map_err(|error| anyhow!("could not install log subscriber: {error}"))?;

  Ok(())
}

fn initialize_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
  enable_raw_mode()?;

  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen)?;

  Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(
  terminal: &mut Terminal<CrosstermBackend<Stdout>>,
) -> Result {
  disable_raw_mode()?;

  execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

  terminal.show_cursor()?;

  Ok(())
}

async fn run() -> Result {
  let config = Config::from_env().context("invalid configuration")?;

  if let Some(path) = &config.log_file {
    initialize_logging(path)?;
  }

  info!(base_url = %config.base_url, page_size = config.page_size, "starting");

  let client = Client::new(&config.base_url)?;

  let mut terminal = initialize_terminal()?;

  let mut app = App::new(client, &config);

  let result = app.run(&mut terminal);

  restore_terminal(&mut terminal)?;

  result
}

#[tokio::main]
async fn main() {
  if let Err(error) = run().await {
    let use_color = io::stderr().is_terminal();

    if use_color {
      eprintln!("{} {error}", "error:".bold().red());
    } else {
      eprintln!("error: {error}");
    }

    for (i, error) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();

        if use_color {
          eprintln!("{}", "because:".bold().red());
        } else {
          eprintln!("because:");
        }
      }

      if use_color {
        eprintln!("{} {error}", "-".bold().red());
      } else {
        eprintln!("- {error}");
      }
    }

    let backtrace = error.backtrace();

    if backtrace.status() == BacktraceStatus::Captured {
      if use_color {
        eprintln!("{}", "backtrace:".bold().red());
      } else {
        eprintln!("backtrace:");
      }

      eprintln!("{backtrace}");
    }

    process::exit(1);
  }
}
