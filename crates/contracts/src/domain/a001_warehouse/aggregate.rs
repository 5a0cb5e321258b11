use crate::domain::common::serde_helpers::string_or_number;
use crate::domain::common::{EntityKind, ListRecord};
use crate::shared::list_sync::Filterable;
use crate::shared::validation::{digits_regex, is_ascii_letters, FieldRule, Schema};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

// ============================================================================
// Record
// ============================================================================

/// Almacén
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Warehouse {
    #[serde(rename = "id_almacen", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(rename = "nombre_almacen", default)]
    pub name: String,

    /// Responsable del almacén
    #[serde(rename = "responsable", default)]
    pub manager: String,

    #[serde(rename = "ciudad", default)]
    pub city: String,

    #[serde(rename = "direccion", default)]
    pub address: String,

    /// 9 цифр; API может вернуть число
    #[serde(rename = "num_telefonico", default, deserialize_with = "string_or_number")]
    pub phone: String,

    #[serde(rename = "email_contacto", default)]
    pub contact_email: String,
}

impl Filterable for Warehouse {
    fn filter_key(&self) -> &str {
        &self.name
    }
}

impl ListRecord for Warehouse {
    fn record_id(&self) -> Option<String> {
        self.id.map(|id| id.to_string())
    }

    fn entity() -> EntityKind {
        EntityKind::Warehouse
    }

    fn element_name() -> &'static str {
        "Almacén"
    }

    fn list_name() -> &'static str {
        "Almacenes"
    }

    fn schema() -> &'static Schema {
        &WAREHOUSE_SCHEMA
    }

    fn draft_template() -> Map<String, Value> {
        let template = json!({
            "nombre_almacen": "",
            "responsable": "",
            "ciudad": "",
            "direccion": "",
            "num_telefonico": 0,
            "email_contacto": "",
        });
        template.as_object().cloned().unwrap_or_default()
    }
}

// ============================================================================
// Validation
// ============================================================================

pub static WAREHOUSE_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    Schema::new(
        "warehouse",
        vec![
            FieldRule::text("nombre_almacen")
                .min_len(3)
                .max_len(20)
                .refine(is_ascii_letters, "El nombre debe contener solo letras"),
            FieldRule::text("responsable")
                .min_len(1)
                .max_len(30)
                .refine(
                    is_ascii_letters,
                    "El nombre del responsable debe contener solo letras",
                ),
            FieldRule::text("ciudad")
                .min_len(1)
                .max_len(20)
                .refine(is_ascii_letters, "La ciudad debe contener solo letras"),
            FieldRule::text("direccion").min_len(1).max_len(20),
            FieldRule::text("num_telefonico").pattern(digits_regex(9), "Formato incorrecto"),
            FieldRule::text("email_contacto").email("Correo Invalido"),
        ],
    )
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form_state::FormState;
    use crate::shared::validation::IssueCode;

    fn valid_draft() -> Map<String, Value> {
        json!({
            "nombre_almacen": "Central",
            "responsable": "Rosa",
            "ciudad": "Lima",
            "direccion": "Av Grau 123",
            "num_telefonico": "987654321",
            "email_contacto": "central@almacen.pe",
        })
        .as_object()
        .cloned()
        .unwrap()
    }

    #[test]
    fn test_valid_warehouse() {
        assert!(WAREHOUSE_SCHEMA.validate(&valid_draft()).is_ok());
    }

    #[test]
    fn test_short_name_fails_only_that_field() {
        let mut draft = valid_draft();
        draft.insert("nombre_almacen".into(), json!("ab"));
        let err = WAREHOUSE_SCHEMA.validate(&draft).unwrap_err();
        let errors = err.field_errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors["nombre_almacen"], "El valor es demasiado pequeño.");
    }

    #[test]
    fn test_short_name_blocks_submit() {
        let mut form = FormState::new(Warehouse::draft_template());
        form.open_create();
        for (field, value) in valid_draft() {
            form.on_field_change(&field, value);
        }
        form.on_field_change("nombre_almacen", json!("ab"));
        assert!(form.begin_submit(Warehouse::schema()).is_err());
        assert!(form.is_open());
        assert_eq!(form.errors().len(), 1);
    }

    #[test]
    fn test_untouched_template() {
        let err = WAREHOUSE_SCHEMA
            .validate(&Warehouse::draft_template())
            .unwrap_err();
        let errors = err.field_errors();
        // Телефон в шаблоне: число 0, а не строка
        assert_eq!(errors["num_telefonico"], "El tipo de dato es inválido.");
        assert_eq!(errors["nombre_almacen"], "El nombre debe contener solo letras");
        assert_eq!(errors["direccion"], "El valor es demasiado pequeño.");
        assert_eq!(errors["email_contacto"], "Correo Invalido");
        assert_eq!(errors.len(), 6);
    }

    #[test]
    fn test_letters_and_phone_rules() {
        let mut draft = valid_draft();
        draft.insert("ciudad".into(), json!("Lima 2"));
        draft.insert("num_telefonico".into(), json!("12345"));
        let err = WAREHOUSE_SCHEMA.validate(&draft).unwrap_err();
        let codes: Vec<(String, IssueCode)> = err
            .issues
            .iter()
            .map(|i| (i.path.clone(), i.code))
            .collect();
        assert_eq!(
            codes,
            vec![
                ("ciudad".to_string(), IssueCode::Custom),
                ("num_telefonico".to_string(), IssueCode::InvalidString),
            ]
        );
        assert_eq!(err.field_errors()["num_telefonico"], "Formato incorrecto");
    }

    #[test]
    fn test_phone_rejects_non_ascii_digits() {
        let mut draft = valid_draft();
        // Арабско-индийские цифры: девять «цифр», но не 0-9
        draft.insert("num_telefonico".into(), json!("١٢٣٤٥٦٧٨٩"));
        let errors = WAREHOUSE_SCHEMA.validate(&draft).unwrap_err().field_errors();
        assert_eq!(errors["num_telefonico"], "Formato incorrecto");
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_decode_from_api() {
        let raw = json!([
            {
                "id_almacen": 3,
                "nombre_almacen": "Central",
                "responsable": "Rosa",
                "ciudad": "Lima",
                "direccion": "Av Grau 123",
                "num_telefonico": 987654321,
                "email_contacto": "central@almacen.pe",
                "estado": true
            }
        ]);
        let items: Vec<Warehouse> = serde_json::from_value(raw).unwrap();
        assert_eq!(items[0].id, Some(3));
        assert_eq!(items[0].phone, "987654321");
        assert_eq!(items[0].record_id(), Some("3".to_string()));
        assert_eq!(items[0].filter_key(), "Central");
    }

    #[test]
    fn test_edit_draft_uses_wire_names() {
        let warehouse = Warehouse {
            id: Some(3),
            name: "Central".into(),
            manager: "Rosa".into(),
            city: "Lima".into(),
            address: "Av Grau".into(),
            phone: "987654321".into(),
            contact_email: "central@almacen.pe".into(),
        };
        let draft = crate::domain::common::draft_from_record(&warehouse);
        assert_eq!(draft["id_almacen"], json!(3));
        assert_eq!(draft["nombre_almacen"], json!("Central"));
        assert!(WAREHOUSE_SCHEMA.validate(&draft).is_ok());
    }
}
