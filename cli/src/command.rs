//! Parsing of the line-oriented commands typed at the `todoview` prompt.

use thiserror::Error;
use todoview_core::TodoId;

/// One user action at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    /// Submit the add input, optionally replacing its text first.
    Add(Option<String>),
    Draft(String),
    Edit(TodoId),
    Text(String),
    Save,
    Cancel,
    Remove(TodoId),
    Show(TodoId),
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command `{0}`")]
    Unknown(String),

    #[error("`{command}` needs {what}")]
    MissingArgument {
        command: &'static str,
        what: &'static str,
    },
}

pub const USAGE: &str = "\
commands:
  list              show the list
  add [text]        add an item (uses the pending draft when no text is given)
  draft <text>      set the pending draft without submitting
  edit <id>         start editing an item
  text <new text>   change the text of the item being edited
  save              commit the edit
  cancel            drop the edit
  rm <id>           delete an item
  show <id>         fetch one item from the server
  help              this message
  quit              leave";

impl Command {
    /// Returns `Ok(None)` for a blank line.
    pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
        let line = line.trim_start();
        if line.trim().is_empty() {
            return Ok(None);
        }
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim_start()),
            None => (line, ""),
        };

        let command = match word {
            "list" | "ls" => Command::List,
            "add" | "a" => Command::Add((!rest.is_empty()).then(|| rest.to_string())),
            "draft" => Command::Draft(rest.to_string()),
            "edit" | "e" => Command::Edit(id_arg("edit", rest)?),
            "text" | "t" => Command::Text(rest.to_string()),
            "save" | "s" => Command::Save,
            "cancel" | "c" => Command::Cancel,
            "rm" | "delete" => Command::Remove(id_arg("rm", rest)?),
            "show" => Command::Show(id_arg("show", rest)?),
            "help" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(Some(command))
    }
}

fn id_arg(command: &'static str, rest: &str) -> Result<TodoId, CommandError> {
    let raw = rest.trim();
    if raw.is_empty() {
        return Err(CommandError::MissingArgument {
            command,
            what: "an item id",
        });
    }
    match raw.parse::<TodoId>() {
        Ok(id) => Ok(id),
        Err(never) => match never {},
    }
}
