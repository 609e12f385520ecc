//! View state and the reducer that drives it.
//!
//! # Design
//! `ViewState` is only ever changed by `ViewState::update`, which consumes the
//! old state and a `Msg` and returns the new state plus at most one `Effect`.
//! User intents produce effects; the list itself only moves when a resolution
//! message (`Loaded`, `Created`, `Updated`, `Deleted`) arrives with `Ok`.
//! Every `Err` resolution returns the state untouched.

use crate::error::ApiError;
use crate::types::{TodoId, TodoItem};

/// The one item currently being edited and its uncommitted text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDraft {
    pub id: TodoId,
    pub text: String,
}

/// Everything the todo view shows for the current session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    items: Vec<TodoItem>,
    draft_text: String,
    editing: Option<EditDraft>,
}

/// Inputs to the reducer: user intents and network resolutions.
#[derive(Debug)]
pub enum Msg {
    Mounted,
    Loaded(Result<Vec<TodoItem>, ApiError>),
    DraftChanged(String),
    /// Submit the add input. The id is minted by the caller so the reducer
    /// stays free of clock reads.
    Submit {
        candidate_id: TodoId,
    },
    Created(Result<TodoItem, ApiError>),
    BeginEdit(TodoId),
    EditTextChanged(String),
    CommitEdit,
    CancelEdit,
    Updated {
        id: TodoId,
        result: Result<TodoItem, ApiError>,
    },
    Delete(TodoId),
    Deleted {
        id: TodoId,
        result: Result<(), ApiError>,
    },
}

/// The network call a message asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Fetch,
    Create(TodoItem),
    Update(TodoItem),
    Delete(TodoId),
}

impl ViewState {
    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn draft_text(&self) -> &str {
        &self.draft_text
    }

    pub fn editing(&self) -> Option<&EditDraft> {
        self.editing.as_ref()
    }

    pub fn is_editing(&self, id: &TodoId) -> bool {
        self.editing.as_ref().is_some_and(|edit| &edit.id == id)
    }

    pub fn update(mut self, msg: Msg) -> (Self, Option<Effect>) {
        let effect = match msg {
            Msg::Mounted => Some(Effect::Fetch),
            Msg::Loaded(Ok(items)) => {
                self.items = items;
                None
            }
            Msg::DraftChanged(text) => {
                self.draft_text = text;
                None
            }
            Msg::Submit { candidate_id } => {
                let text = self.draft_text.trim();
                if text.is_empty() {
                    None
                } else {
                    Some(Effect::Create(TodoItem::new(candidate_id, text)))
                }
            }
            Msg::Created(Ok(item)) => {
                self.items.push(item);
                self.draft_text.clear();
                None
            }
            Msg::BeginEdit(id) => {
                if let Some(item) = self.items.iter().find(|item| item.id == id) {
                    self.editing = Some(EditDraft {
                        id: item.id.clone(),
                        text: item.text.clone(),
                    });
                }
                None
            }
            Msg::EditTextChanged(text) => {
                if let Some(edit) = self.editing.as_mut() {
                    edit.text = text;
                }
                None
            }
            Msg::CommitEdit => self
                .editing
                .as_ref()
                .filter(|edit| !edit.text.trim().is_empty())
                .map(|edit| Effect::Update(TodoItem::new(edit.id.clone(), edit.text.clone()))),
            Msg::CancelEdit => {
                self.editing = None;
                None
            }
            Msg::Updated { id, result: Ok(item) } => {
                for slot in self.items.iter_mut().filter(|slot| slot.id == id) {
                    *slot = item.clone();
                }
                if self.is_editing(&id) {
                    self.editing = None;
                }
                None
            }
            Msg::Delete(id) => {
                // Address the item by the id the server gave it.
                let id = self
                    .items
                    .iter()
                    .find(|item| item.id == id)
                    .map_or(id, |item| item.id.clone());
                Some(Effect::Delete(id))
            }
            Msg::Deleted { id, result: Ok(()) } => {
                self.items.retain(|item| item.id != id);
                if self.is_editing(&id) {
                    self.editing = None;
                }
                None
            }
            Msg::Loaded(Err(_))
            | Msg::Created(Err(_))
            | Msg::Updated { result: Err(_), .. }
            | Msg::Deleted { result: Err(_), .. } => None,
        };
        (self, effect)
    }
}
