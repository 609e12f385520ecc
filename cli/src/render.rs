//! Plain-text rendering of the view state.

use std::fmt::Write;

use todoview_core::ViewState;

/// Render the list, marking the row being edited with its draft text.
pub fn render(state: &ViewState) -> String {
    let mut out = String::new();
    let count = state.items().len();
    let noun = if count == 1 { "item" } else { "items" };
    let _ = writeln!(out, "Todo App ({count} {noun})");
    if state.items().is_empty() {
        out.push_str("  (nothing to do)\n");
    }
    for item in state.items() {
        match state.editing().filter(|edit| edit.id == item.id) {
            Some(edit) => {
                let _ = writeln!(out, "> {:>4}  {}  [editing: save | cancel]", item.id, edit.text);
            }
            None => {
                let _ = writeln!(out, "  {:>4}  {}", item.id, item.text);
            }
        }
    }
    if !state.draft_text().is_empty() {
        let _ = writeln!(out, "  new:  {}", state.draft_text());
    }
    out
}
