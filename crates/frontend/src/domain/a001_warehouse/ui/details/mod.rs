//! Add/edit modal for Almacén

mod view;

pub use view::{WarehouseDetails, WAREHOUSE_FIELDS};
