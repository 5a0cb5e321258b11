use crate::shared::record_form::{FormField, InputKind, RecordFormModal, RecordFormViewModel};
use contracts::domain::a001_warehouse::Warehouse;
use leptos::prelude::*;

pub const WAREHOUSE_FIELDS: &[FormField] = &[
    FormField::new("nombre_almacen", "Nombre del almacén", InputKind::Text),
    FormField::new("responsable", "Responsable", InputKind::Text),
    FormField::new("ciudad", "Ciudad", InputKind::Text),
    FormField::new("direccion", "Dirección", InputKind::Text),
    FormField::new("num_telefonico", "Número telefónico", InputKind::Tel),
    FormField::new("email_contacto", "Email de contacto", InputKind::Email),
];

#[component]
pub fn WarehouseDetails(vm: RecordFormViewModel<Warehouse>) -> impl IntoView {
    view! { <RecordFormModal vm=vm fields=WAREHOUSE_FIELDS /> }
}
