use contracts::system::session::ROLE_STORAGE_KEY;
use web_sys::window;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Raw role flag from localStorage
pub fn get_role() -> Option<String> {
    get_local_storage()?.get_item(ROLE_STORAGE_KEY).ok()?
}
