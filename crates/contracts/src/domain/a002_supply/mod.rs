pub mod aggregate;

pub use aggregate::{Supply, SUPPLY_SCHEMA};
