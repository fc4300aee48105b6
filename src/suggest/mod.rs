//! Per-field enhanced suggestions
//!
//! Requests candidate values for the selected field from the backend and
//! shows them in a popup list. The list is rebuilt fresh on every request;
//! selecting an entry writes it into the field.

mod state;
mod suggest_events;
mod suggest_render;

pub use state::SuggestState;
pub use suggest_events::handle_suggest_key;
pub use suggest_render::render_suggest_popup;
