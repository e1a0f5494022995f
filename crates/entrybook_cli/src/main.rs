//! Terminal front end for the entry manager.
//!
//! # Responsibility
//! - Read one command per stdin line and route it to the session.
//! - Render the form draft and entry table as plain text.
//!
//! # Invariants
//! - Validation failures are printed inline; the loop keeps running.
//! - Logging is optional and configured from `ENTRYBOOK_LOG_*` variables.

use entrybook_core::{EntryField, EntrySession, LoggingConfig, PageView};
use log::info;
use std::io::{self, BufRead, Write};
use uuid::Uuid;

const HELP: &str = "commands:
  set <name|email|phone|department> <value...>
  add                submit the form
  delete <id>        remove one entry
  reset              clear the form
  show               print the page
  help
  quit";

#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    /// Print this text and continue.
    Reply(String),
    Quit,
}

fn main() {
    if let Err(err) = LoggingConfig::from_env().apply() {
        eprintln!("logging disabled: {err}");
    }
    info!(
        "event=cli_start module=cli status=ok version={}",
        entrybook_core::core_version()
    );

    let mut session = EntrySession::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let _ = writeln!(stdout, "{}\n\n{HELP}", render_page(&session.page()));

    for line in stdin.lock().lines() {
        let Ok(line) = line else {
            break;
        };
        match execute(&mut session, &line) {
            Outcome::Reply(text) => {
                if writeln!(stdout, "{text}").is_err() {
                    break;
                }
            }
            Outcome::Quit => break,
        }
    }
}

fn execute(session: &mut EntrySession, line: &str) -> Outcome {
    let line = line.trim_start();
    let (command, rest) = line.split_once(' ').unwrap_or((line.trim_end(), ""));

    match command {
        "" => Outcome::Reply(String::new()),
        "set" => {
            let (field, value) = rest.split_once(' ').unwrap_or((rest, ""));
            match field.parse::<EntryField>() {
                Ok(field) => {
                    session.set_field(field, value);
                    Outcome::Reply(render_page(&session.page()))
                }
                Err(err) => Outcome::Reply(format!("error: {err}")),
            }
        }
        "add" => match session.submit() {
            Ok(entry) => Outcome::Reply(format!(
                "added {}\n{}",
                entry.id,
                render_page(&session.page())
            )),
            Err(err) => Outcome::Reply(format!("error: {err}")),
        },
        "delete" => match Uuid::parse_str(rest.trim()) {
            Ok(id) if session.remove(id) => Outcome::Reply(render_page(&session.page())),
            _ => Outcome::Reply("no matching entry".to_string()),
        },
        "reset" => {
            session.reset_form();
            Outcome::Reply(render_page(&session.page()))
        }
        "show" => Outcome::Reply(render_page(&session.page())),
        "help" => Outcome::Reply(HELP.to_string()),
        "quit" | "exit" => Outcome::Quit,
        other => Outcome::Reply(format!("unknown command `{other}`; try `help`")),
    }
}

fn render_page(page: &PageView) -> String {
    let mut out = format!("== {} ==\n{}\n\n", page.title, page.subtitle);

    out.push_str(&format!("-- {} --\n", page.form.heading));
    for field in &page.form.fields {
        let shown = if field.value.is_empty() {
            format!("<{}>", field.placeholder)
        } else {
            field.value.clone()
        };
        out.push_str(&format!("{:<11} {}\n", format!("{}:", field.label), shown));
    }
    out.push_str(&format!("[{}]\n\n", page.form.submit_label));

    let entries = &page.entries;
    out.push_str(&format!("-- {} --\n", entries.title));
    if let Some(message) = entries.empty_message {
        out.push_str(message);
        return out;
    }

    out.push_str(&entries.columns.join(" | "));
    for row in &entries.rows {
        out.push_str(&format!(
            "\n{} | {} | {} | {} | delete {}",
            row.name, row.email, row.phone, row.department, row.id
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{execute, Outcome};
    use entrybook_core::EntrySession;

    fn reply(session: &mut EntrySession, line: &str) -> String {
        match execute(session, line) {
            Outcome::Reply(text) => text,
            Outcome::Quit => panic!("unexpected quit for `{line}`"),
        }
    }

    #[test]
    fn empty_session_renders_empty_state() {
        let mut session = EntrySession::new();
        let text = reply(&mut session, "show");
        assert!(text.contains("Entries (0)"));
        assert!(text.contains("No entries yet. Add one to get started!"));
        assert!(text.contains("<Enter email>"));
    }

    #[test]
    fn set_keeps_spaces_inside_value() {
        let mut session = EntrySession::new();
        reply(&mut session, "set department Research and Development");
        assert_eq!(
            session.form.draft().department,
            "Research and Development"
        );
    }

    #[test]
    fn add_with_missing_field_prints_validation_message() {
        let mut session = EntrySession::new();
        reply(&mut session, "set name Ann");
        let text = reply(&mut session, "add");
        assert_eq!(text, "error: Please fill in all fields");
        assert_eq!(session.count(), 0);
        assert_eq!(session.form.draft().name, "Ann");
    }

    #[test]
    fn add_then_delete_round_trip() {
        let mut session = EntrySession::new();
        for line in [
            "set name Ann",
            "set email a@x.com",
            "set phone 555-0001",
            "set department Eng",
        ] {
            reply(&mut session, line);
        }
        let text = reply(&mut session, "add");
        assert!(text.contains("Entries (1)"));
        assert!(text.contains("Ann | a@x.com | 555-0001 | Eng"));

        let id = session.entries.list()[0].id;
        let text = reply(&mut session, &format!("delete {id}"));
        assert!(text.contains("Entries (0)"));
        assert_eq!(reply(&mut session, "delete nope"), "no matching entry");
    }

    #[test]
    fn unknown_field_and_command_are_reported() {
        let mut session = EntrySession::new();
        assert!(reply(&mut session, "set address x").starts_with("error: unknown entry field"));
        assert!(reply(&mut session, "frobnicate").contains("unknown command"));
        assert_eq!(execute(&mut session, "quit"), Outcome::Quit);
    }
}
