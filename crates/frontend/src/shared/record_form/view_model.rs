use super::model;
use crate::shared::list_controller::ListController;
use crate::shared::toast::ToastService;
use contracts::domain::common::{draft_from_record, ListRecord};
use contracts::shared::form_state::{delete_effects, integer_input, FormState, SubmitEffects};
use leptos::prelude::*;
use serde_json::Value;

/// ViewModel модального окна добавления/редактирования
pub struct RecordFormViewModel<R: ListRecord + Send + Sync> {
    pub form: RwSignal<FormState>,
    list: ListController<R>,
    toasts: ToastService,
}

impl<R: ListRecord + Send + Sync> Clone for RecordFormViewModel<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: ListRecord + Send + Sync> Copy for RecordFormViewModel<R> {}

impl<R: ListRecord + Send + Sync> RecordFormViewModel<R> {
    pub fn new(list: ListController<R>, toasts: ToastService) -> Self {
        Self {
            form: RwSignal::new(FormState::new(R::draft_template())),
            list,
            toasts,
        }
    }

    pub fn is_open(&self) -> bool {
        self.form.with(|f| f.is_open())
    }

    pub fn is_edit(&self) -> bool {
        self.form.with(|f| f.is_edit())
    }

    pub fn is_submitting(&self) -> bool {
        self.form.with(|f| f.is_submitting())
    }

    pub fn title(&self) -> String {
        if self.is_edit() {
            format!("Editar {}", R::element_name())
        } else {
            format!("Agregar {}", R::element_name())
        }
    }

    pub fn text(&self, field: &str) -> String {
        self.form.with(|f| f.text(field))
    }

    pub fn error(&self, field: &str) -> Option<String> {
        self.form.with(|f| f.error(field).map(str::to_string))
    }

    pub fn set_text(&self, field: &str, value: String) {
        self.form.update(|f| f.on_field_change(field, Value::String(value)));
    }

    pub fn set_integer(&self, field: &str, value: &str) {
        self.form.update(|f| f.on_field_change(field, integer_input(value)));
    }

    pub fn open_create(&self) {
        self.form.update(|f| f.open_create());
    }

    pub fn open_edit(&self, record: &R) {
        let Some(id) = record.record_id() else {
            log::warn!("{} without id cannot be edited", R::element_name());
            return;
        };
        let draft = draft_from_record(record);
        self.form.update(|f| f.open_edit(id, draft));
    }

    pub fn close(&self) {
        self.form.update(|f| f.close());
    }

    /// Validates the draft and, if it passes, sends it
    pub fn submit_command(&self) {
        if self.is_submitting() {
            return;
        }
        let Some(outcome) = self.form.try_update(|f| f.begin_submit(R::schema())) else {
            return;
        };
        let submission = match outcome {
            Ok(submission) => submission,
            Err(e) => {
                log::debug!("{} draft rejected: {}", R::element_name(), e);
                return;
            }
        };

        let this = *self;
        let client = self.list.client();
        wasm_bindgen_futures::spawn_local(async move {
            let result = model::save(&client, &submission.request).await;
            if let Err(e) = &result {
                log::error!("Failed to save {} ({}): {}", R::element_name(), e.kind(), e);
            } else {
                log::info!("{} saved", R::element_name());
            }
            if let Some(effects) = this.form.try_update(|f| f.finish_submit(&submission, result)) {
                this.apply(effects);
            }
        });
    }

    pub fn delete_command(&self, record: &R) {
        let Some(id) = record.record_id() else {
            log::warn!("{} without id cannot be deleted", R::element_name());
            return;
        };
        let this = *self;
        let client = self.list.client();
        wasm_bindgen_futures::spawn_local(async move {
            let result = model::remove(&client, &id).await;
            match &result {
                Ok(()) => log::info!("{} {} deleted", R::element_name(), id),
                Err(e) => log::error!(
                    "Failed to delete {} {} ({}): {}",
                    R::element_name(),
                    id,
                    e.kind(),
                    e
                ),
            }
            this.apply(delete_effects(&result));
        });
    }

    fn apply(&self, effects: SubmitEffects) {
        if effects.reload {
            self.list.reload();
        }
        if let Some(notification) = effects.notification {
            self.toasts.notify(notification);
        }
    }
}
