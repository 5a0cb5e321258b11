use super::EntityKind;
use crate::shared::list_sync::Filterable;
use crate::shared::validation::Schema;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};

/// Трейт для записей, которые показываются списком с формой добавления
///
/// Объединяет данные конкретной записи (ID, поле фильтра) и статические
/// метаданные типа (схема валидации, шаблон черновика, названия для UI).
pub trait ListRecord: Filterable + Clone + Serialize + DeserializeOwned + 'static {
    // ============================================================================
    // Методы экземпляра
    // ============================================================================

    /// ID записи в виде строки (для URL изменения/удаления)
    fn record_id(&self) -> Option<String>;

    // ============================================================================
    // Метаданные типа
    // ============================================================================

    fn entity() -> EntityKind;

    /// Имя элемента для UI (единственное число, например, "Almacén")
    fn element_name() -> &'static str;

    /// Имя списка для UI (множественное число, например, "Almacenes")
    fn list_name() -> &'static str;

    /// Схема валидации формы
    fn schema() -> &'static Schema;

    /// Пустой черновик новой записи
    fn draft_template() -> Map<String, Value>;
}

/// Черновик формы редактирования из существующей записи
pub fn draft_from_record<R: ListRecord>(record: &R) -> Map<String, Value> {
    match serde_json::to_value(record) {
        Ok(Value::Object(map)) => map,
        _ => R::draft_template(),
    }
}
