use crate::shared::export::download_report;
use crate::shared::toast::ToastService;
use contracts::shared::notification::MSG_REPORT_FAILED;
use contracts::shared::reports::{parse_date_range, ReportKind, REPORT_NAME_SCHEMA};
use leptos::prelude::*;
use serde_json::json;

#[derive(Clone, Copy)]
pub struct SupplyReportsViewModel {
    pub downloading: RwSignal<bool>,

    pub name_open: RwSignal<bool>,
    pub name: RwSignal<String>,
    pub name_error: RwSignal<Option<String>>,

    pub date_open: RwSignal<bool>,
    pub start: RwSignal<String>,
    pub end: RwSignal<String>,
    pub date_error: RwSignal<Option<String>>,

    toasts: ToastService,
}

impl SupplyReportsViewModel {
    pub fn new(toasts: ToastService) -> Self {
        Self {
            downloading: RwSignal::new(false),
            name_open: RwSignal::new(false),
            name: RwSignal::new(String::new()),
            name_error: RwSignal::new(None),
            date_open: RwSignal::new(false),
            start: RwSignal::new(String::new()),
            end: RwSignal::new(String::new()),
            date_error: RwSignal::new(None),
            toasts,
        }
    }

    pub fn download_command(&self, kind: ReportKind) {
        let downloading = self.downloading;
        let toasts = self.toasts;
        downloading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = download_report(&kind).await {
                log::error!("Report '{}' failed ({}): {}", kind.file_name(), e.kind(), e);
                toasts.error(MSG_REPORT_FAILED);
            }
            downloading.set(false);
        });
    }

    pub fn open_name_dialog(&self) {
        self.name_error.set(None);
        self.name_open.set(true);
    }

    pub fn open_date_dialog(&self) {
        self.date_error.set(None);
        self.date_open.set(true);
    }

    pub fn set_name(&self, value: String) {
        self.name.set(value);
        self.name_error.set(None);
    }

    /// Validates the name and requests the report
    pub fn submit_name(&self) {
        let name = self.name.get_untracked();
        if let Err(e) = REPORT_NAME_SCHEMA.validate_value(&json!({ "nombre": name })) {
            self.name_error.set(e.field_errors().remove("nombre"));
            return;
        }
        self.name_open.set(false);
        self.download_command(ReportKind::ByName { name });
    }

    /// Requests the report only once both dates are set
    pub fn submit_dates(&self) {
        let start = self.start.get_untracked();
        let end = self.end.get_untracked();
        match parse_date_range(&start, &end) {
            Ok(kind) => {
                self.date_error.set(None);
                self.date_open.set(false);
                self.download_command(kind);
            }
            Err(e) => self.date_error.set(Some(e.to_string())),
        }
    }
}
