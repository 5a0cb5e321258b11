pub mod api_error;
pub mod config;
pub mod form_state;
pub mod list_sync;
pub mod notification;
pub mod reports;
pub mod validation;
