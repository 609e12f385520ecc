//! The read-eval-render loop behind the `todoview` prompt.

use std::io::{self, BufRead, Write};

use todoview_core::{TodoView, Transport};
use tracing::debug;

use crate::command::{Command, USAGE};
use crate::render::render;

/// Feed commands from `input` to `view` until EOF or `quit`.
///
/// The view is expected to be mounted already. Network failures never show
/// up here; they are logged by the view and the list simply stays as it was.
pub fn run_session<T, R, W>(view: &mut TodoView<T>, input: R, mut out: W) -> io::Result<()>
where
    T: Transport,
    R: BufRead,
    W: Write,
{
    out.write_all(render(view.state()).as_bytes())?;
    for line in input.lines() {
        let line = line?;
        match Command::parse(&line) {
            Ok(None) => continue,
            Ok(Some(Command::Quit)) => break,
            Ok(Some(command)) => {
                debug!(?command, "command");
                apply(view, command, &mut out)?;
            }
            Err(e) => writeln!(out, "{e} (type `help` for commands)")?,
        }
        out.flush()?;
    }
    Ok(())
}

fn apply<T: Transport, W: Write>(view: &mut TodoView<T>, command: Command, out: &mut W) -> io::Result<()> {
    match command {
        Command::List => {}
        Command::Add(text) => {
            if let Some(text) = text {
                view.set_draft(text);
            }
            view.submit();
        }
        Command::Draft(text) => view.set_draft(text),
        Command::Edit(id) => view.begin_edit(id),
        Command::Text(text) => view.set_edit_text(text),
        Command::Save => view.commit_edit(),
        Command::Cancel => view.cancel_edit(),
        Command::Remove(id) => view.delete(id),
        Command::Show(id) => {
            return match view.lookup(&id) {
                Ok(item) => writeln!(out, "{}: {}", item.id, item.text),
                Err(_) => writeln!(out, "{id}: unavailable"),
            };
        }
        Command::Help => return writeln!(out, "{USAGE}"),
        Command::Quit => return Ok(()),
    }
    out.write_all(render(view.state()).as_bytes())
}
