//! Состояние модальной формы добавления/редактирования записи.
//!
//! Отправка разбита на два шага, чтобы асинхронный код фронтенда оставался
//! тонким: `begin_submit` проверяет черновик и решает, нужен ли запрос,
//! `finish_submit` получает результат запроса и возвращает побочные эффекты
//! (перезагрузка списка, уведомление, закрытие окна).

use crate::shared::api_error::ApiError;
use crate::shared::notification::{
    Notification, MSG_CREATED, MSG_DELETED, MSG_DELETE_FAILED, MSG_SAVE_FAILED, MSG_UPDATED,
};
use crate::shared::validation::{FieldErrors, Schema, ValidationError};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { id: String },
}

/// Запрос, который форма просит отправить после успешной валидации
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitRequest {
    Create { payload: Value },
    Update { id: String, payload: Value },
}

/// Запрос вместе с номером отправки, который вернётся в `finish_submit`
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub ticket: u64,
    pub request: SubmitRequest,
}

/// Что должна сделать страница после завершения операции
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubmitEffects {
    pub reload: bool,
    pub notification: Option<Notification>,
    pub close: bool,
}

#[derive(Debug, Clone)]
pub struct FormState {
    template: Map<String, Value>,
    draft: Map<String, Value>,
    errors: FieldErrors,
    mode: FormMode,
    open: bool,
    /// Номер отправки, ответа на которую ждёт форма
    pending: Option<u64>,
    next_ticket: u64,
}

impl FormState {
    pub fn new(template: Map<String, Value>) -> Self {
        Self {
            draft: template.clone(),
            template,
            errors: FieldErrors::new(),
            mode: FormMode::Create,
            open: false,
            pending: None,
            next_ticket: 0,
        }
    }

    /// Opens the form for a new record. A draft left by a cancelled create
    /// is kept; a draft left by an edit is replaced by the template.
    pub fn open_create(&mut self) {
        if self.mode != FormMode::Create {
            self.draft = self.template.clone();
            self.mode = FormMode::Create;
        }
        self.errors.clear();
        self.pending = None;
        self.open = true;
    }

    /// Opens the form pre-filled with an existing record
    pub fn open_edit(&mut self, id: impl Into<String>, record: Map<String, Value>) {
        self.mode = FormMode::Edit { id: id.into() };
        self.draft = record;
        self.errors.clear();
        self.pending = None;
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.pending = None;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_submitting(&self) -> bool {
        self.pending.is_some()
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, FormMode::Edit { .. })
    }

    pub fn draft(&self) -> &Map<String, Value> {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// Текстовое представление поля для `<input>`
    pub fn text(&self, field: &str) -> String {
        match self.draft.get(field) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        }
    }

    /// Updates one draft field and clears its error
    pub fn on_field_change(&mut self, field: &str, value: Value) {
        self.draft.insert(field.to_string(), value);
        self.errors.remove(field);
    }

    /// Validates the draft.
    ///
    /// On failure the field errors are filled in, the form stays open and no
    /// request is produced. Reopening or closing the form forgets the ticket
    /// of a request still in flight.
    pub fn begin_submit(&mut self, schema: &Schema) -> Result<Submission, ValidationError> {
        if let Err(e) = schema.validate(&self.draft) {
            self.errors = e.field_errors();
            return Err(e);
        }
        self.errors.clear();
        self.next_ticket += 1;
        let ticket = self.next_ticket;
        self.pending = Some(ticket);
        let payload = Value::Object(self.draft.clone());
        let request = match &self.mode {
            FormMode::Create => SubmitRequest::Create { payload },
            FormMode::Edit { id } => SubmitRequest::Update {
                id: id.clone(),
                payload,
            },
        };
        Ok(Submission { ticket, request })
    }

    /// Applies the outcome of the create/update request.
    ///
    /// Success: one reload, one success notification, draft reset, form
    /// closed. Failure: the form stays open with the draft untouched.
    ///
    /// A response to a submission the form no longer waits for (the form was
    /// closed or reopened meanwhile) still reloads and notifies, but leaves
    /// the current draft alone.
    pub fn finish_submit(
        &mut self,
        submission: &Submission,
        result: Result<(), ApiError>,
    ) -> SubmitEffects {
        let current = self.pending == Some(submission.ticket);
        if current {
            self.pending = None;
        }
        match result {
            Ok(()) => {
                let message = match submission.request {
                    SubmitRequest::Create { .. } => MSG_CREATED,
                    SubmitRequest::Update { .. } => MSG_UPDATED,
                };
                if current {
                    self.draft = self.template.clone();
                    self.mode = FormMode::Create;
                    self.errors.clear();
                    self.open = false;
                }
                SubmitEffects {
                    reload: true,
                    notification: Some(Notification::success(message)),
                    close: current,
                }
            }
            Err(_) => SubmitEffects {
                reload: false,
                notification: Some(Notification::error(MSG_SAVE_FAILED)),
                close: false,
            },
        }
    }
}

/// Effects of a delete request
pub fn delete_effects(result: &Result<(), ApiError>) -> SubmitEffects {
    match result {
        Ok(()) => SubmitEffects {
            reload: true,
            // Показывается в стиле ошибки, как и раньше
            notification: Some(Notification::error(MSG_DELETED)),
            close: false,
        },
        Err(_) => SubmitEffects {
            reload: false,
            notification: Some(Notification::error(MSG_DELETE_FAILED)),
            close: false,
        },
    }
}

/// Значение числового поля: целое, если текст разбирается, иначе исходная строка
pub fn integer_input(text: &str) -> Value {
    match text.trim().parse::<i64>() {
        Ok(n) => Value::from(n),
        Err(_) => Value::String(text.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::notification::NotificationKind;
    use crate::shared::validation::{is_ascii_letters, FieldRule};
    use serde_json::json;

    fn schema() -> Schema {
        Schema::new(
            "test",
            vec![
                FieldRule::text("nombre").min_len(3).refine(is_ascii_letters, "solo letras"),
                FieldRule::integer("stock").min(0),
            ],
        )
    }

    fn template() -> Map<String, Value> {
        json!({ "nombre": "", "stock": 0 }).as_object().cloned().unwrap()
    }

    /// Drives one submit the way a page does, counting side effects.
    #[derive(Default)]
    struct Page {
        requests: Vec<SubmitRequest>,
        reloads: usize,
        notifications: Vec<Notification>,
    }

    impl Page {
        fn submit(&mut self, form: &mut FormState, response: Result<(), ApiError>) {
            let Ok(submission) = form.begin_submit(&schema()) else {
                return;
            };
            self.requests.push(submission.request.clone());
            let effects = form.finish_submit(&submission, response);
            if effects.reload {
                self.reloads += 1;
            }
            self.notifications.extend(effects.notification);
        }
    }

    #[test]
    fn test_invalid_draft_issues_no_request() {
        let mut form = FormState::new(template());
        form.open_create();
        form.on_field_change("nombre", json!("ab"));

        let mut page = Page::default();
        page.submit(&mut form, Ok(()));

        assert!(page.requests.is_empty());
        assert_eq!(page.reloads, 0);
        assert!(page.notifications.is_empty());
        assert!(form.is_open());
        assert_eq!(form.error("nombre"), Some("El valor es demasiado pequeño."));
        assert_eq!(form.error("stock"), None);
        assert_eq!(form.text("nombre"), "ab");
    }

    #[test]
    fn test_valid_draft_reloads_and_notifies_once() {
        let mut form = FormState::new(template());
        form.open_create();
        form.on_field_change("nombre", json!("Harina"));
        form.on_field_change("stock", integer_input("12"));

        let mut page = Page::default();
        page.submit(&mut form, Ok(()));

        assert_eq!(page.requests.len(), 1);
        assert_eq!(
            page.requests[0],
            SubmitRequest::Create {
                payload: json!({ "nombre": "Harina", "stock": 12 })
            }
        );
        assert_eq!(page.reloads, 1);
        assert_eq!(page.notifications, vec![Notification::success(MSG_CREATED)]);
        assert!(!form.is_open());
        assert_eq!(form.draft(), &template());
    }

    #[test]
    fn test_failed_request_keeps_form_open_and_draft() {
        let mut form = FormState::new(template());
        form.open_create();
        form.on_field_change("nombre", json!("Harina"));

        let mut page = Page::default();
        page.submit(&mut form, Err(ApiError::Http { status: 500 }));

        assert_eq!(page.requests.len(), 1);
        assert_eq!(page.reloads, 0);
        assert_eq!(page.notifications.len(), 1);
        assert_eq!(page.notifications[0].kind, NotificationKind::Error);
        assert!(form.is_open());
        assert!(!form.is_submitting());
        assert_eq!(form.text("nombre"), "Harina");
    }

    #[test]
    fn test_field_change_clears_only_that_error() {
        let mut form = FormState::new(template());
        form.open_create();
        form.on_field_change("stock", json!(-1));
        assert!(form.begin_submit(&schema()).is_err());
        assert!(form.error("nombre").is_some());
        assert!(form.error("stock").is_some());

        form.on_field_change("nombre", json!("Az"));
        assert!(form.error("nombre").is_none());
        assert!(form.error("stock").is_some());
    }

    #[test]
    fn test_edit_mode_produces_update() {
        let mut form = FormState::new(template());
        let record = json!({ "id_insumo": 7, "nombre": "Azucar", "stock": 3 });
        form.open_edit("7", record.as_object().cloned().unwrap());
        assert!(form.is_edit());

        let submission = form.begin_submit(&schema()).unwrap();
        assert_eq!(
            submission.request,
            SubmitRequest::Update {
                id: "7".to_string(),
                payload: record
            }
        );
        let effects = form.finish_submit(&submission, Ok(()));
        assert_eq!(effects.notification, Some(Notification::success(MSG_UPDATED)));
        assert_eq!(form.mode(), &FormMode::Create);
    }

    #[test]
    fn test_late_response_leaves_reopened_form_alone() {
        let mut form = FormState::new(template());
        form.open_create();
        form.on_field_change("nombre", json!("Harina"));
        let first = form.begin_submit(&schema()).unwrap();

        // Пользователь закрыл окно и открыл другую запись до ответа
        form.close();
        form.open_edit("3", json!({ "nombre": "Cafe", "stock": 1 }).as_object().cloned().unwrap());
        form.on_field_change("nombre", json!("Cacao"));

        let effects = form.finish_submit(&first, Ok(()));
        assert!(effects.reload);
        assert_eq!(effects.notification, Some(Notification::success(MSG_CREATED)));
        assert!(!effects.close);
        assert!(form.is_open());
        assert!(form.is_edit());
        assert_eq!(form.text("nombre"), "Cacao");

        // Ответ на текущую отправку закрывает форму как обычно
        let second = form.begin_submit(&schema()).unwrap();
        assert_ne!(first.ticket, second.ticket);
        let effects = form.finish_submit(&second, Ok(()));
        assert!(effects.close);
        assert!(!form.is_open());
    }

    #[test]
    fn test_cancelled_create_keeps_draft() {
        let mut form = FormState::new(template());
        form.open_create();
        form.on_field_change("nombre", json!("Sal"));
        form.close();
        form.open_create();
        assert_eq!(form.text("nombre"), "Sal");

        form.open_edit("1", json!({ "nombre": "Te" }).as_object().cloned().unwrap());
        form.close();
        form.open_create();
        assert_eq!(form.text("nombre"), "");
    }

    #[test]
    fn test_delete_effects() {
        let ok = delete_effects(&Ok(()));
        assert!(ok.reload);
        assert_eq!(ok.notification, Some(Notification::error(MSG_DELETED)));

        let failed = delete_effects(&Err(ApiError::Network("offline".into())));
        assert!(!failed.reload);
        assert_eq!(failed.notification, Some(Notification::error(MSG_DELETE_FAILED)));
    }

    #[test]
    fn test_integer_input() {
        assert_eq!(integer_input("42"), json!(42));
        assert_eq!(integer_input(" 5 "), json!(5));
        assert_eq!(integer_input("4a"), json!("4a"));
        assert_eq!(integer_input(""), json!(""));
    }

    #[test]
    fn test_text_of_number_field() {
        let form = FormState::new(template());
        assert_eq!(form.text("stock"), "0");
        assert_eq!(form.text("missing"), "");
    }
}
