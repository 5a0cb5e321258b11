pub mod aggregate;

pub use aggregate::{Supplier, SUPPLIER_SCHEMA};
