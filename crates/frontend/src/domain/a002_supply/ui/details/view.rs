use crate::shared::record_form::{FormField, InputKind, RecordFormModal, RecordFormViewModel};
use contracts::domain::a002_supply::Supply;
use leptos::prelude::*;

pub const SUPPLY_FIELDS: &[FormField] = &[
    FormField::new("nombre", "Nombre", InputKind::Text),
    FormField::new("descripcion", "Descripción", InputKind::Text),
    FormField::new("unidad_medida", "Unidad de medida", InputKind::Text),
    FormField::new("stock_actual", "Stock actual", InputKind::Integer),
    FormField::new("stock_minimo", "Stock mínimo", InputKind::Integer),
    FormField::new("stock_maximo", "Stock máximo", InputKind::Integer),
];

#[component]
pub fn SupplyDetails(vm: RecordFormViewModel<Supply>) -> impl IntoView {
    view! { <RecordFormModal vm=vm fields=SUPPLY_FIELDS /> }
}
