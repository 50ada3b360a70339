//! # Project Board
//!
//! Kanban board for tracking software side-projects against a REST API.
//!
//! The crate holds the client-side core of the board: a typed client for
//! the project/todo API and the reconciliation engine that turns drag
//! gestures into optimistic column reorders, confirmed or rolled back by
//! the server. Rendering is left to the caller, which reads [`Board`] and
//! feeds gesture events into a [`BoardSession`].

pub mod api;
pub mod board;
pub mod config;
pub mod domain;
pub mod error;

// Re-export commonly used types
pub use api::BoardApi;
#[cfg(feature = "http")]
pub use api::HttpApi;
pub use board::{Board, BoardSession, DropOutcome, Placement};
pub use config::ApiConfig;
pub use domain::{Column, ColumnOrder, Project, ProjectDraft, ProjectId, Todo, TodoId};
pub use error::{BoardError, Result};
