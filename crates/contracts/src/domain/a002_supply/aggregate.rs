use crate::domain::common::serde_helpers::int_or_string;
use crate::domain::common::{EntityKind, ListRecord};
use crate::shared::list_sync::Filterable;
use crate::shared::validation::{is_ascii_letters, FieldRule, Schema};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// Insumo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supply {
    #[serde(rename = "id_insumo", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(rename = "nombre", default)]
    pub name: String,

    #[serde(rename = "descripcion", default)]
    pub description: String,

    /// Unidad de medida (kg, litros, unidades...)
    #[serde(rename = "unidad_medida", default)]
    pub unit: String,

    #[serde(rename = "stock_actual", default, deserialize_with = "int_or_string")]
    pub stock: i64,

    #[serde(rename = "stock_minimo", default, deserialize_with = "int_or_string")]
    pub min_stock: i64,

    #[serde(rename = "stock_maximo", default, deserialize_with = "int_or_string")]
    pub max_stock: i64,
}

impl Supply {
    /// Остаток ниже минимального
    pub fn is_stockout(&self) -> bool {
        self.stock < self.min_stock
    }

    /// Остаток выше максимального
    pub fn is_overstocked(&self) -> bool {
        self.max_stock > 0 && self.stock > self.max_stock
    }
}

impl Filterable for Supply {
    fn filter_key(&self) -> &str {
        &self.name
    }
}

impl ListRecord for Supply {
    fn record_id(&self) -> Option<String> {
        self.id.map(|id| id.to_string())
    }

    fn entity() -> EntityKind {
        EntityKind::Supply
    }

    fn element_name() -> &'static str {
        "Insumo"
    }

    fn list_name() -> &'static str {
        "Insumos"
    }

    fn schema() -> &'static Schema {
        &SUPPLY_SCHEMA
    }

    fn draft_template() -> Map<String, Value> {
        let template = json!({
            "nombre": "",
            "descripcion": "",
            "unidad_medida": "",
            "stock_actual": 0,
            "stock_minimo": 0,
            "stock_maximo": 0,
        });
        template.as_object().cloned().unwrap_or_default()
    }
}

pub static SUPPLY_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    Schema::new(
        "supply",
        vec![
            FieldRule::text("nombre")
                .min_len(3)
                .max_len(20)
                .refine(is_ascii_letters, "El nombre debe contener solo letras"),
            FieldRule::text("descripcion").min_len(1).max_len(50),
            FieldRule::text("unidad_medida")
                .min_len(1)
                .max_len(15)
                .refine(
                    is_ascii_letters,
                    "La unidad de medida debe contener solo letras",
                ),
            FieldRule::integer("stock_actual").min(0),
            FieldRule::integer("stock_minimo").min(0),
            FieldRule::integer("stock_maximo").min(1),
        ],
    )
});

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> Map<String, Value> {
        json!({
            "nombre": "Harina",
            "descripcion": "Harina de trigo",
            "unidad_medida": "kg",
            "stock_actual": 40,
            "stock_minimo": 10,
            "stock_maximo": 100,
        })
        .as_object()
        .cloned()
        .unwrap()
    }

    #[test]
    fn test_valid_supply() {
        assert!(SUPPLY_SCHEMA.validate(&valid_draft()).is_ok());
    }

    #[test]
    fn test_numeric_rules() {
        let mut draft = valid_draft();
        draft.insert("stock_actual".into(), json!(-3));
        draft.insert("stock_maximo".into(), json!(0));
        draft.insert("stock_minimo".into(), json!("diez"));
        let errors = SUPPLY_SCHEMA.validate(&draft).unwrap_err().field_errors();
        assert_eq!(errors["stock_actual"], "El valor es demasiado pequeño.");
        assert_eq!(errors["stock_maximo"], "El valor es demasiado pequeño.");
        assert_eq!(errors["stock_minimo"], "El tipo de dato es inválido.");
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_unit_letters_only() {
        let mut draft = valid_draft();
        draft.insert("unidad_medida".into(), json!("kg."));
        let errors = SUPPLY_SCHEMA.validate(&draft).unwrap_err().field_errors();
        assert_eq!(
            errors["unidad_medida"],
            "La unidad de medida debe contener solo letras"
        );
    }

    #[test]
    fn test_decode_and_stock_flags() {
        let raw = json!({
            "id_insumo": 8,
            "nombre": "Azucar",
            "descripcion": "Rubia",
            "unidad_medida": "kg",
            "stock_actual": "5",
            "stock_minimo": 10,
            "stock_maximo": 50
        });
        let supply: Supply = serde_json::from_value(raw).unwrap();
        assert_eq!(supply.stock, 5);
        assert!(supply.is_stockout());
        assert!(!supply.is_overstocked());
        assert_eq!(supply.record_id(), Some("8".to_string()));
    }
}
