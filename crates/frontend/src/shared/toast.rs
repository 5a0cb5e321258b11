//! Всплывающие уведомления.
//!
//! `ToastService` кладётся в контекст в `App`; каждое уведомление само
//! исчезает через `ui.toast_timeout_ms`.

use crate::shared::config::app_config;
use crate::shared::icons::icon;
use contracts::shared::notification::{Notification, NotificationKind};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub notification: Notification,
}

#[derive(Clone, Copy)]
pub struct ToastService {
    pub toasts: RwSignal<Vec<Toast>>,
    timeout_ms: u32,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            timeout_ms: app_config().ui.toast_timeout_ms,
        }
    }

    pub fn error(&self, message: impl Into<String>) {
        self.notify(Notification::error(message));
    }

    pub fn notify(&self, notification: Notification) {
        let id = Uuid::new_v4();
        log::debug!("toast {:?}: {}", notification.kind, notification.message);
        self.toasts.update(|list| list.push(Toast { id, notification }));

        let this = *self;
        Timeout::new(self.timeout_ms, move || this.dismiss(id)).forget();
    }

    pub fn dismiss(&self, id: Uuid) {
        self.toasts.update(|list| list.retain(|t| t.id != id));
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_toasts() -> ToastService {
    use_context::<ToastService>().expect("ToastService not found in context")
}

/// Renders the active toasts in the top right corner
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="toast-host">
            <For
                each=move || toasts.toasts.get()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    let class = match toast.notification.kind {
                        NotificationKind::Success => "toast toast--success",
                        NotificationKind::Error => "toast toast--error",
                    };
                    view! {
                        <div class=class role="status">
                            <span class="toast__message">{toast.notification.message}</span>
                            <button class="button button--icon toast__close" on:click=move |_| toasts.dismiss(id)>
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
