mod view;

pub use view::{SupplierDetails, SUPPLIER_FIELDS};
