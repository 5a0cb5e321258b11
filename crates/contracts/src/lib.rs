//! Shared contracts for the inventory dashboard.
//!
//! Everything here is platform independent: records exchanged with the
//! inventory API, validation schemas, the list/form state machines used by
//! every page, report requests and the session model. The wasm frontend
//! wraps these types in reactive signals.

pub mod domain;
pub mod shared;
pub mod system;
