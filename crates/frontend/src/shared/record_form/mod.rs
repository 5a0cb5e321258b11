//! Add/edit modal shared by every record page.
//!
//! MVVM split:
//! - model.rs: requests to the collection (save, delete)
//! - view_model.rs: form state and commands
//! - view.rs: the modal with its inputs

mod model;
mod view;
mod view_model;

pub use view::{FormField, InputKind, RecordActions, RecordFormModal};
pub use view_model::RecordFormViewModel;
