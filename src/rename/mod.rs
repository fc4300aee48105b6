//! Inline field-name editing
//!
//! A modal flow over the selected field: `Idle → ModalOpen → Saving →
//! Idle`. Cancelling never touches the network; saving issues exactly one
//! `update_field_name` call and returns to `Idle` whether it succeeds or
//! fails. Nothing persists across runs.

mod rename_events;
mod rename_render;
mod state;

pub use rename_events::handle_rename_key;
pub use rename_render::render_rename_modal;
pub use state::{RenamePhase, RenameState};
