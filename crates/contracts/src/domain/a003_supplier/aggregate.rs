use crate::domain::common::serde_helpers::string_or_number;
use crate::domain::common::{EntityKind, ListRecord};
use crate::shared::list_sync::Filterable;
use crate::shared::validation::{digits_regex, is_ascii_letters, FieldRule, Schema};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// Proveedor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    #[serde(rename = "id_proveedor", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(rename = "nombre_empresa", default)]
    pub company_name: String,

    /// RUC, 11 digits
    #[serde(rename = "ruc", default, deserialize_with = "string_or_number")]
    pub tax_id: String,

    #[serde(rename = "nombre_contacto", default)]
    pub contact_name: String,

    #[serde(rename = "telefono", default, deserialize_with = "string_or_number")]
    pub phone: String,

    #[serde(rename = "email", default)]
    pub email: String,

    #[serde(rename = "direccion", default)]
    pub address: String,
}

impl Filterable for Supplier {
    fn filter_key(&self) -> &str {
        &self.company_name
    }
}

impl ListRecord for Supplier {
    fn record_id(&self) -> Option<String> {
        self.id.map(|id| id.to_string())
    }

    fn entity() -> EntityKind {
        EntityKind::Supplier
    }

    fn element_name() -> &'static str {
        "Proveedor"
    }

    fn list_name() -> &'static str {
        "Proveedores"
    }

    fn schema() -> &'static Schema {
        &SUPPLIER_SCHEMA
    }

    fn draft_template() -> Map<String, Value> {
        let template = json!({
            "nombre_empresa": "",
            "ruc": "",
            "nombre_contacto": "",
            "telefono": "",
            "email": "",
            "direccion": "",
        });
        template.as_object().cloned().unwrap_or_default()
    }
}

pub static SUPPLIER_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    Schema::new(
        "supplier",
        vec![
            FieldRule::text("nombre_empresa").min_len(3).max_len(30),
            FieldRule::text("ruc").pattern(digits_regex(11), "El RUC debe tener 11 dígitos"),
            FieldRule::text("nombre_contacto")
                .min_len(1)
                .max_len(30)
                .refine(
                    is_ascii_letters,
                    "El nombre del contacto debe contener solo letras",
                ),
            FieldRule::text("telefono").pattern(digits_regex(9), "Formato incorrecto"),
            FieldRule::text("email").email("Correo Invalido"),
            FieldRule::text("direccion").min_len(1).max_len(40),
        ],
    )
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_sync::derive_filtered;

    fn valid_draft() -> Map<String, Value> {
        json!({
            "nombre_empresa": "Molinos del Sur SAC",
            "ruc": "20123456789",
            "nombre_contacto": "Jorge",
            "telefono": "912345678",
            "email": "ventas@molinos.pe",
            "direccion": "Jr Union 455",
        })
        .as_object()
        .cloned()
        .unwrap()
    }

    #[test]
    fn test_valid_supplier() {
        assert!(SUPPLIER_SCHEMA.validate(&valid_draft()).is_ok());
    }

    #[test]
    fn test_ruc_and_email() {
        let mut draft = valid_draft();
        draft.insert("ruc".into(), json!("2012345678"));
        draft.insert("email".into(), json!("ventas molinos.pe"));
        let errors = SUPPLIER_SCHEMA.validate(&draft).unwrap_err().field_errors();
        assert_eq!(errors["ruc"], "El RUC debe tener 11 dígitos");
        assert_eq!(errors["email"], "Correo Invalido");
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_ruc_and_phone_reject_non_ascii_digits() {
        let mut draft = valid_draft();
        draft.insert("ruc".into(), json!("２０１２３４５６７８９"));
        draft.insert("telefono".into(), json!("९१२३४५६७८"));
        let errors = SUPPLIER_SCHEMA.validate(&draft).unwrap_err().field_errors();
        assert_eq!(errors["ruc"], "El RUC debe tener 11 dígitos");
        assert_eq!(errors["telefono"], "Formato incorrecto");
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_filter_by_company_name() {
        let suppliers: Vec<Supplier> = serde_json::from_value(json!([
            { "id_proveedor": 1, "nombre_empresa": "Molinos del Sur", "ruc": 20123456789u64 },
            { "id_proveedor": 2, "nombre_empresa": "Lacteos Norte" },
        ]))
        .unwrap();
        assert_eq!(suppliers[0].tax_id, "20123456789");
        let filtered = derive_filtered(&suppliers, "SUR");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, Some(1));
    }
}
