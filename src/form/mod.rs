//! Form data model
//!
//! Fields are a tagged variant over text, boolean, and choice kinds; the
//! kind decides how suggested values are assigned. `FormState` holds the
//! rendered form for the lifetime of the run.

mod field;
mod form_state;
pub mod loader;

pub use field::{Field, FieldKind, FieldValue};
pub use form_state::{FormState, HIGHLIGHT_DURATION};
