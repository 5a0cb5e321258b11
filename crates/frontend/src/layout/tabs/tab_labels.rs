//! Tab titles, taken from the record metadata in contracts.

use contracts::domain::a001_warehouse::Warehouse;
use contracts::domain::a002_supply::Supply;
use contracts::domain::a003_supplier::Supplier;
use contracts::domain::common::{EntityKind, ListRecord};

/// Readable title for a tab key; unknown keys get an empty title
pub fn tab_label_for_key(key: &str) -> &'static str {
    match EntityKind::from_key(key) {
        Some(EntityKind::Warehouse) => Warehouse::list_name(),
        Some(EntityKind::Supply) => Supply::list_name(),
        Some(EntityKind::Supplier) => Supplier::list_name(),
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(tab_label_for_key("a001_warehouse"), "Almacenes");
        assert_eq!(tab_label_for_key("a002_supply"), "Insumos");
        assert_eq!(tab_label_for_key("a003_supplier"), "Proveedores");
        assert_eq!(tab_label_for_key("a004_nomenclature"), "");
    }
}
