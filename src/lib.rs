//! Terminal client for AI-assisted form filling and docx generation.
//!
//! Renders a form described by a JSON template, talks to the document
//! backend for suggestions, history auto-fill, field renames and docx
//! export, and keeps the UI responsive by running all HTTP calls on a
//! worker thread.

pub mod app;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod export;
pub mod form;
pub mod notify;
pub mod rename;
pub mod suggest;
pub mod theme;
pub mod widgets;

mod test_utils;

pub use app::App;
pub use error::FormfillError;
