//! Add/edit modal for Insumo

mod view;

pub use view::{SupplyDetails, SUPPLY_FIELDS};
