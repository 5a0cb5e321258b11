use super::storage;
use contracts::system::session::Session;
use leptos::prelude::*;

/// Reads the role once and puts the session into context
pub fn provide_session() -> Session {
    let raw = storage::get_role();
    let session = Session::from_storage(raw.as_deref());
    log::info!("Session role: {}", session.role.as_str());
    provide_context(session);
    session
}

pub fn use_session() -> Session {
    use_context::<Session>().expect("Session not found in context")
}
