//! Validation layer: schemas checked before any request leaves the form.

pub mod issue;
pub mod messages;
pub mod schema;

pub use issue::{Issue, IssueCode};
pub use messages::{message_for, to_field_errors, FieldErrors};
pub use schema::{digits_regex, is_ascii_letters, is_email, FieldRule, Schema, ValidationError};
