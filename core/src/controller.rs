//! `TodoView`: the single owner of `ViewState`.
//!
//! # Design
//! Each public method turns one user action into a `Msg`, runs it through the
//! reducer, and if the reducer asks for an `Effect`, performs that call
//! through the `Transport` and feeds the resolution back in. The state is
//! therefore only touched twice per action: once for the intent (which never
//! changes `items`) and once when the call has resolved.
//!
//! Failures are logged and swallowed. There is no retry and nothing is
//! surfaced to the caller; the reducer leaves state as it was.

use tracing::{debug, error};

use crate::client::TodoClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse, Transport};
use crate::types::{TodoId, TodoItem};
use crate::view::{Effect, Msg, ViewState};

/// Controller for the todo list view, generic over how HTTP is executed.
pub struct TodoView<T> {
    client: TodoClient,
    transport: T,
    state: ViewState,
}

impl<T: Transport> TodoView<T> {
    pub fn new(client: TodoClient, transport: T) -> Self {
        Self {
            client,
            transport,
            state: ViewState::default(),
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Load the initial list. Call once, when the view is first shown.
    pub fn mount(&mut self) {
        self.dispatch(Msg::Mounted);
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.dispatch(Msg::DraftChanged(text.into()));
    }

    /// Create an item from the current draft. Blank drafts are ignored.
    pub fn submit(&mut self) {
        self.dispatch(Msg::Submit {
            candidate_id: TodoId::from_clock(),
        });
    }

    pub fn begin_edit(&mut self, id: TodoId) {
        self.dispatch(Msg::BeginEdit(id));
    }

    pub fn set_edit_text(&mut self, text: impl Into<String>) {
        self.dispatch(Msg::EditTextChanged(text.into()));
    }

    pub fn commit_edit(&mut self) {
        self.dispatch(Msg::CommitEdit);
    }

    pub fn cancel_edit(&mut self) {
        self.dispatch(Msg::CancelEdit);
    }

    pub fn delete(&mut self, id: TodoId) {
        self.dispatch(Msg::Delete(id));
    }

    /// Fetch one item straight from the backend. The view state is not
    /// consulted or changed.
    pub fn lookup(&self, id: &TodoId) -> Result<TodoItem, ApiError> {
        let result = self
            .send(Ok(self.client.build_get_todo(id)))
            .and_then(|response| self.client.parse_get_todo(response));
        if let Err(e) = &result {
            error!(%id, error = %e, "failed to look up todo");
        }
        result
    }

    fn dispatch(&mut self, msg: Msg) {
        let mut next = Some(msg);
        while let Some(msg) = next.take() {
            let (state, effect) = std::mem::take(&mut self.state).update(msg);
            self.state = state;
            next = effect.map(|effect| self.run(effect));
        }
    }

    fn run(&self, effect: Effect) -> Msg {
        debug!(?effect, "dispatching");
        match effect {
            Effect::Fetch => {
                let result = self
                    .send(Ok(self.client.build_list_todos()))
                    .and_then(|response| self.client.parse_list_todos(response));
                if let Err(e) = &result {
                    error!(error = %e, "failed to fetch todos");
                }
                Msg::Loaded(result)
            }
            Effect::Create(candidate) => {
                let result = self
                    .send(self.client.build_create_todo(&candidate))
                    .and_then(|response| self.client.parse_create_todo(response));
                if let Err(e) = &result {
                    error!(id = %candidate.id, error = %e, "failed to add todo");
                }
                Msg::Created(result)
            }
            Effect::Update(item) => {
                let result = self
                    .send(self.client.build_update_todo(&item))
                    .and_then(|response| self.client.parse_update_todo(response));
                if let Err(e) = &result {
                    error!(id = %item.id, error = %e, "failed to update todo");
                }
                Msg::Updated {
                    id: item.id,
                    result,
                }
            }
            Effect::Delete(id) => {
                let result = self
                    .send(Ok(self.client.build_delete_todo(&id)))
                    .and_then(|response| self.client.parse_delete_todo(response));
                if let Err(e) = &result {
                    error!(%id, error = %e, "failed to delete todo");
                }
                Msg::Deleted { id, result }
            }
        }
    }

    fn send(&self, request: Result<HttpRequest, ApiError>) -> Result<HttpResponse, ApiError> {
        let request = request?;
        debug!(method = request.method.as_str(), path = %request.path, "sending");
        self.transport.execute(request)
    }
}
