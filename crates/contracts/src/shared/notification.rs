use serde::{Deserialize, Serialize};

pub const MSG_CREATED: &str = "Se agregó correctamente";
pub const MSG_UPDATED: &str = "Se actualizó correctamente";
pub const MSG_DELETED: &str = "Se eliminó correctamente";
pub const MSG_SAVE_FAILED: &str = "No se pudo guardar el registro";
pub const MSG_DELETE_FAILED: &str = "No se pudo eliminar el registro";
pub const MSG_REPORT_FAILED: &str = "No se pudo descargar el reporte";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
}

/// Сообщение для всплывающего уведомления
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }
}
