//! tab.key → View. Every tab key is resolved here.

use crate::domain::a001_warehouse::ui::list::WarehouseList;
use crate::domain::a002_supply::ui::list::SupplyList;
use crate::domain::a003_supplier::ui::list::SupplierList;
use contracts::domain::common::EntityKind;
use leptos::prelude::*;

pub fn render_tab_content(key: &str) -> AnyView {
    match EntityKind::from_key(key) {
        Some(EntityKind::Warehouse) => view! { <WarehouseList /> }.into_any(),
        Some(EntityKind::Supply) => view! { <SupplyList /> }.into_any(),
        Some(EntityKind::Supplier) => view! { <SupplierList /> }.into_any(),
        None => {
            log::warn!("Unknown tab type: {}", key);
            view! { <div class="placeholder">{"Página no encontrada"}</div> }.into_any()
        }
    }
}
