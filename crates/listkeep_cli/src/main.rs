//! Terminal front end for listkeep.
//!
//! # Responsibility
//! - Translate stdin lines into session events.
//! - Print the projected list and the live notice after each event.

use anyhow::{Context, Result};
use clap::Parser;
use listkeep_core::db::open_db;
use listkeep_core::{
    init_logging, DurableStore, InteractionState, ItemRegistry, ItemSnapshotStore, ListSession, MemoryDurableStore,
    NoticeBoard, RowAction, SessionConfig, SessionEvent, Severity, SqliteDurableStore,
    StorageLocation, TextListView,
};
use log::info;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;

const HELP: &str = "\
Type text and press enter to submit it. Start it with `::` for a leading `:`.
In edit mode an empty line keeps the loaded value.
  :edit N     load row N into the form
  :delete N   remove row N
  :clear      remove every item
  :cancel     leave edit mode
  :list       show the list
  :help       show this help
  :quit       exit";

#[derive(Parser, Debug)]
#[command(name = "listkeep", version, about = "Keep a named list across sessions")]
struct Args {
    /// SQLite database file holding the list.
    #[arg(long, conflicts_with = "memory")]
    db: Option<PathBuf>,
    /// Keep the list in memory only.
    #[arg(long)]
    memory: bool,
    /// Directory for rolling log files (absolute).
    #[arg(long)]
    log_dir: Option<PathBuf>,
    /// Log level: trace|debug|info|warn|error.
    #[arg(long)]
    log_level: Option<String>,
    /// Disable file logging.
    #[arg(long)]
    no_log: bool,
    /// How long notices stay visible, in milliseconds.
    #[arg(long)]
    notice_ttl_ms: Option<u64>,
}

impl Args {
    fn into_config(self) -> SessionConfig {
        let mut config = SessionConfig::default();
        if self.memory {
            config.storage = StorageLocation::Memory;
        } else if let Some(db) = self.db {
            config.storage = StorageLocation::File(db);
        }
        if let Some(dir) = self.log_dir {
            config.log_dir = Some(dir);
        }
        if self.no_log {
            config.log_dir = None;
        }
        if let Some(level) = self.log_level {
            config.log_level = level;
        }
        if let Some(ms) = self.notice_ttl_ms {
            config.notice_ttl = Duration::from_millis(ms);
        }
        config
    }
}

fn main() -> Result<()> {
    let config = Args::parse().into_config();

    if let Some(log_dir) = &config.log_dir {
        init_logging(&config.log_level, log_dir).context("failed to initialize logging")?;
    }

    match &config.storage {
        StorageLocation::File(path) => {
            let conn = open_db(path)
                .with_context(|| format!("failed to open database `{}`", path.display()))?;
            run(&config, SqliteDurableStore::new(&conn))
        }
        StorageLocation::Memory => run(&config, MemoryDurableStore::new()),
    }
}

fn run<S: DurableStore>(config: &SessionConfig, store: S) -> Result<()> {
    let registry = ItemRegistry::new(ItemSnapshotStore::with_key(
        store,
        config.storage_key.as_str(),
    ));
    let mut session = ListSession::new(
        registry,
        TextListView::new(),
        NoticeBoard::new(config.notice_ttl),
    );
    if let SessionEvent::Loaded { item_count } = session.on_load() {
        info!("event=cli_start module=cli status=ok item_count={item_count}");
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    print_list(&mut stdout, &mut session)?;

    loop {
        print_prompt(&mut stdout, &session)?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim_end_matches(['\r', '\n']);

        match parse_command(line) {
            Command::Submit(value) => {
                let value = resolve_submission(value, session.interaction()).to_string();
                session.on_submit(&value);
            }
            Command::Row(position, action) => match session.view().trigger(position, action) {
                Some(trigger) => {
                    session.on_row_trigger(trigger);
                }
                None => writeln!(stdout, "no row {position}")?,
            },
            Command::Clear => {
                session.on_clear_all();
            }
            Command::Cancel => session.interaction_mut().cancel_to_default(),
            Command::List => {}
            Command::Help => {
                writeln!(stdout, "{HELP}")?;
                continue;
            }
            Command::Quit => break,
            Command::Unknown(input) => {
                writeln!(stdout, "unknown command `{input}`; try :help")?;
                continue;
            }
        }

        print_list(&mut stdout, &mut session)?;
    }

    info!("event=cli_exit module=cli status=ok");
    Ok(())
}

enum Command<'a> {
    Submit(&'a str),
    Row(usize, RowAction),
    Clear,
    Cancel,
    List,
    Help,
    Quit,
    Unknown(&'a str),
}

fn parse_command(line: &str) -> Command<'_> {
    if line.starts_with("::") {
        return Command::Submit(&line[1..]);
    }
    let Some(command) = line.strip_prefix(':') else {
        return Command::Submit(line);
    };

    let mut parts = command.split_whitespace();
    let name = parts.next().unwrap_or_default();
    let position = parts.next().and_then(|value| value.parse::<usize>().ok());

    match (name, position) {
        ("edit" | "e", Some(position)) => Command::Row(position, RowAction::Edit),
        ("delete" | "d", Some(position)) => Command::Row(position, RowAction::Delete),
        ("clear", None) => Command::Clear,
        ("cancel", None) => Command::Cancel,
        ("list" | "l", None) => Command::List,
        ("help" | "h", None) => Command::Help,
        ("quit" | "q", None) => Command::Quit,
        _ => Command::Unknown(line),
    }
}

/// An empty line in edit mode submits the primed value unchanged.
fn resolve_submission<'a>(line: &'a str, interaction: &'a InteractionState) -> &'a str {
    if line.is_empty() && interaction.is_editing() {
        interaction.working_value()
    } else {
        line
    }
}

fn print_list<S: DurableStore>(
    out: &mut impl Write,
    session: &mut ListSession<S, TextListView, NoticeBoard>,
) -> io::Result<()> {
    if let Some(notice) = session.notifier_mut().current() {
        let tag = match notice.severity {
            Severity::Success => "ok",
            Severity::Danger => "!!",
        };
        writeln!(out, "[{tag}] {}", notice.message)?;
    }
    let rendered = session.view().render();
    if rendered.is_empty() {
        writeln!(out, "(list is empty)")?;
    } else {
        write!(out, "{rendered}")?;
    }
    Ok(())
}

fn print_prompt<S: DurableStore>(
    out: &mut impl Write,
    session: &ListSession<S, TextListView, NoticeBoard>,
) -> io::Result<()> {
    let interaction = session.interaction();
    if interaction.is_editing() {
        write!(out, "{} [{}]> ", interaction.submit_label(), interaction.working_value())?;
    } else {
        write!(out, "{}> ", interaction.submit_label())?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::{parse_command, resolve_submission, Command};
    use listkeep_core::{
        InteractionState, ItemRegistry, ItemSnapshotStore, MemoryDurableStore, RowAction,
    };

    #[test]
    fn plain_lines_are_submissions() {
        assert!(matches!(parse_command("milk"), Command::Submit("milk")));
        assert!(matches!(parse_command(""), Command::Submit("")));
    }

    #[test]
    fn row_commands_need_a_position() {
        assert!(matches!(
            parse_command(":edit 2"),
            Command::Row(2, RowAction::Edit)
        ));
        assert!(matches!(
            parse_command(":d 1"),
            Command::Row(1, RowAction::Delete)
        ));
        assert!(matches!(parse_command(":edit"), Command::Unknown(_)));
        assert!(matches!(parse_command(":clear"), Command::Clear));
    }

    #[test]
    fn double_colon_submits_a_literal_leading_colon() {
        assert!(matches!(
            parse_command("::3 apples"),
            Command::Submit(":3 apples")
        ));
        assert!(matches!(parse_command(":3 apples"), Command::Unknown(_)));
    }

    #[test]
    fn empty_line_in_edit_mode_submits_primed_value() {
        let mut registry = ItemRegistry::new(ItemSnapshotStore::new(MemoryDurableStore::new()));
        let item = registry.create("milk").unwrap();
        let mut interaction = InteractionState::new();

        assert_eq!(resolve_submission("", &interaction), "");

        interaction.request_edit(&registry, &item.id);
        assert_eq!(resolve_submission("", &interaction), "milk");
        assert_eq!(resolve_submission("eggs", &interaction), "eggs");
    }
}
