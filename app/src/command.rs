//! Line-oriented input for the terminal front end.
//!
//! Each line the user types is parsed into an [`Input`]. Lines that do not
//! start with a known verb are treated as text typed into the new-item input
//! followed by Enter.

use crate::reducer::TodoAction;
use crate::types::TodoId;
use std::num::ParseIntError;
use thiserror::Error;

/// Help text listing every verb
pub const HELP: &str = "\
commands:
  <text>         add an item (same as `add <text>`)
  add <text>     add an item, kept as typed even if only spaces
  toggle <id>    flip an item between done and not done
  rm <id>        remove an item
  clear          remove every completed item
  list           show the list (so does an empty or blank line)
  help           show this help
  quit           exit";

/// Errors produced while parsing a line
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// A verb that needs an argument was given none
    #[error("`{verb}` needs an item id")]
    MissingId {
        /// The verb that was typed
        verb: String,
    },

    /// The argument is not a valid item id
    #[error("`{input}` is not a valid item id")]
    InvalidId {
        /// The text that failed to parse
        input: String,
        /// Why it failed
        #[source]
        source: ParseIntError,
    },
}

/// What a line asks the application to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Send these actions to the store, in order
    Actions(Vec<TodoAction>),
    /// Show the list without changing it
    List,
    /// Show the help text
    Help,
    /// Leave the application
    Quit,
}

/// Parses one line of user input
///
/// Only the line terminator is stripped; item text is otherwise kept exactly
/// as typed.
///
/// A line that is empty or only whitespace shows the list rather than adding
/// an item. A whitespace-only title can still be added with `add`, e.g.
/// `"add   "` submits `"  "`.
///
/// # Errors
///
/// Returns an error if `toggle` or `rm` is missing its id or the id is not a
/// non-negative integer.
pub fn parse_line(line: &str) -> Result<Input, CommandError> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return Ok(Input::List);
    }

    let (verb, rest) = line.split_once(' ').unwrap_or((line, ""));
    let input = match verb {
        "add" => Input::Actions(vec![TodoAction::SubmitNewItem {
            text: rest.to_string(),
        }]),
        "toggle" | "t" => Input::Actions(vec![TodoAction::ToggleItem {
            id: parse_id(verb, rest)?,
        }]),
        "rm" | "remove" => Input::Actions(vec![TodoAction::RemoveItem {
            id: parse_id(verb, rest)?,
        }]),
        "clear" if rest.trim().is_empty() => Input::Actions(vec![TodoAction::ClearCompleted]),
        "list" | "ls" if rest.trim().is_empty() => Input::List,
        "help" | "?" if rest.trim().is_empty() => Input::Help,
        "quit" | "exit" | "q" if rest.trim().is_empty() => Input::Quit,
        _ => Input::Actions(vec![
            TodoAction::EditDraft {
                text: line.to_string(),
            },
            TodoAction::SubmitDraft,
        ]),
    };
    Ok(input)
}

fn parse_id(verb: &str, rest: &str) -> Result<TodoId, CommandError> {
    let rest = rest.trim();
    if rest.is_empty() {
        return Err(CommandError::MissingId {
            verb: verb.to_string(),
        });
    }
    rest.parse().map_err(|source| CommandError::InvalidId {
        input: rest.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actions(input: Input) -> Vec<TodoAction> {
        match input {
            Input::Actions(actions) => actions,
            other => panic!("expected actions, got {other:?}"),
        }
    }

    #[test]
    fn plain_text_types_then_submits() {
        let parsed = actions(parse_line("Buy milk\n").unwrap());
        assert_eq!(
            parsed,
            vec![
                TodoAction::EditDraft {
                    text: "Buy milk".to_string()
                },
                TodoAction::SubmitDraft,
            ]
        );
    }

    #[test]
    fn add_keeps_text_verbatim() {
        let parsed = actions(parse_line("add  two spaces").unwrap());
        assert_eq!(
            parsed,
            vec![TodoAction::SubmitNewItem {
                text: " two spaces".to_string()
            }]
        );
    }

    #[test]
    fn blank_line_lists_but_add_keeps_whitespace_title() {
        assert_eq!(parse_line("   \n").unwrap(), Input::List);
        assert_eq!(
            actions(parse_line("add   ").unwrap()),
            vec![TodoAction::SubmitNewItem {
                text: "  ".to_string()
            }]
        );
    }

    #[test]
    fn add_without_text_submits_empty() {
        let parsed = actions(parse_line("add").unwrap());
        assert_eq!(
            parsed,
            vec![TodoAction::SubmitNewItem {
                text: String::new()
            }]
        );
    }

    #[test]
    fn toggle_and_remove_parse_ids() {
        assert_eq!(
            actions(parse_line("toggle 3").unwrap()),
            vec![TodoAction::ToggleItem { id: TodoId::new(3) }]
        );
        assert_eq!(
            actions(parse_line("rm 0\r\n").unwrap()),
            vec![TodoAction::RemoveItem { id: TodoId::new(0) }]
        );
    }

    #[test]
    fn bad_ids_are_reported() {
        assert_eq!(
            parse_line("toggle").unwrap_err(),
            CommandError::MissingId {
                verb: "toggle".to_string()
            }
        );
        assert!(matches!(
            parse_line("rm two").unwrap_err(),
            CommandError::InvalidId { input, .. } if input == "two"
        ));
        assert!(matches!(
            parse_line("rm -1").unwrap_err(),
            CommandError::InvalidId { .. }
        ));
    }

    #[test]
    fn control_verbs() {
        assert_eq!(parse_line("").unwrap(), Input::List);
        assert_eq!(parse_line("list").unwrap(), Input::List);
        assert_eq!(parse_line("help").unwrap(), Input::Help);
        assert_eq!(parse_line("quit").unwrap(), Input::Quit);
        assert_eq!(
            actions(parse_line("clear").unwrap()),
            vec![TodoAction::ClearCompleted]
        );
    }

    #[test]
    fn verbs_followed_by_text_are_items() {
        let parsed = actions(parse_line("clear the gutters").unwrap());
        assert_eq!(parsed.len(), 2);
        assert_eq!(
            parsed[0],
            TodoAction::EditDraft {
                text: "clear the gutters".to_string()
            }
        );
    }
}
