//! Terminal front end for the todo list view.
//!
//! # Overview
//! Maps typed commands onto `TodoView` actions and re-renders the list after
//! each one. HTTP is executed with ureq through `UreqTransport`.

pub mod command;
pub mod render;
pub mod session;
pub mod transport;

pub use command::{Command, CommandError};
pub use render::render;
pub use session::run_session;
pub use transport::UreqTransport;
