//! Client core for the todo list view.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). On top of that sits a pure
//! reducer over `ViewState` and the `TodoView` controller, which executes the
//! reducer's effects through a caller-supplied `Transport`.
//!
//! # Design
//! - `TodoClient` is stateless; it holds only `base_url`.
//! - Each operation is split into `build_*` (produces request) and `parse_*`
//!   (consumes response), so the I/O boundary is explicit.
//! - `ViewState::update` is the only place view state changes, and `items`
//!   only changes when a call has resolved successfully.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod controller;
pub mod error;
pub mod http;
pub mod types;
pub mod view;

pub use client::{TodoClient, DEFAULT_BASE_URL};
pub use controller::TodoView;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use types::{TodoId, TodoItem};
pub use view::{EditDraft, Effect, Msg, ViewState};
