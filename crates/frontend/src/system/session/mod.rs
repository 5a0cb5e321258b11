//! Роль пользователя, прочитанная один раз при старте.
//!
//! Не является границей безопасности: роль выставляет страница входа,
//! а API её не проверяет.

pub mod context;
pub mod storage;

pub use context::{provide_session, use_session};
