use serde::{Deserialize, Serialize};

/// Сущность, которой управляет отдельная страница дашборда
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// Almacenes
    Warehouse,
    /// Insumos
    Supply,
    /// Proveedores
    Supplier,
}

impl EntityKind {
    pub const ALL: [EntityKind; 3] = [EntityKind::Warehouse, EntityKind::Supply, EntityKind::Supplier];

    /// Ключ таба / пункта меню (например, "a001_warehouse")
    pub fn key(&self) -> &'static str {
        match self {
            EntityKind::Warehouse => "a001_warehouse",
            EntityKind::Supply => "a002_supply",
            EntityKind::Supplier => "a003_supplier",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.key() == key)
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}
