use crate::shared::record_form::{FormField, InputKind, RecordFormModal, RecordFormViewModel};
use contracts::domain::a003_supplier::Supplier;
use leptos::prelude::*;

pub const SUPPLIER_FIELDS: &[FormField] = &[
    FormField::new("nombre_empresa", "Nombre de la empresa", InputKind::Text),
    FormField::new("ruc", "RUC", InputKind::Text),
    FormField::new("nombre_contacto", "Nombre del contacto", InputKind::Text),
    FormField::new("telefono", "Teléfono", InputKind::Tel),
    FormField::new("email", "Email", InputKind::Email),
    FormField::new("direccion", "Dirección", InputKind::Text),
];

/// Add/edit modal for Proveedor
#[component]
pub fn SupplierDetails(vm: RecordFormViewModel<Supplier>) -> impl IntoView {
    view! { <RecordFormModal vm=vm fields=SUPPLIER_FIELDS /> }
}
