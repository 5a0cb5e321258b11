use super::view_model::SupplyReportsViewModel;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::shared::toast::use_toasts;
use contracts::shared::reports::PLAIN_REPORTS;
use leptos::prelude::*;
use thaw::*;

/// Кнопки отчётов по инсумам и диалоги параметров
#[component]
pub fn SupplyReports() -> impl IntoView {
    let vm = SupplyReportsViewModel::new(use_toasts());

    view! {
        <div class="report-toolbar">
            {PLAIN_REPORTS
                .into_iter()
                .map(|kind| {
                    let label = kind.label();
                    view! {
                        <Button
                            appearance=ButtonAppearance::Secondary
                            disabled=vm.downloading
                            on_click=move |_| vm.download_command(kind.clone())
                        >
                            {icon("download")}
                            {label}
                        </Button>
                    }
                })
                .collect_view()}
            <Button
                appearance=ButtonAppearance::Secondary
                disabled=vm.downloading
                on_click=move |_| vm.open_name_dialog()
            >
                {icon("download")}
                "Estado por Nombre"
            </Button>
            <Button
                appearance=ButtonAppearance::Secondary
                disabled=vm.downloading
                on_click=move |_| vm.open_date_dialog()
            >
                {icon("download")}
                "Estado por fecha"
            </Button>
        </div>

        <Show when=move || vm.name_open.get()>
            <Modal
                title="Reporte por nombre".to_string()
                on_close=Callback::new(move |_| vm.name_open.set(false))
            >
                <div class="form-group" class:form-group--error=move || vm.name_error.get().is_some()>
                    <label for="report-nombre">"Nombre del insumo"</label>
                    <input
                        type="text"
                        id="report-nombre"
                        prop:value=move || vm.name.get()
                        on:input=move |ev| vm.set_name(event_target_value(&ev))
                    />
                    {move || vm.name_error.get().map(|e| view! { <div class="form-error">{e}</div> })}
                </div>
                <div class="modal-footer">
                    <button class="btn btn-primary" on:click=move |_| vm.submit_name()>
                        {icon("download")}
                        {"Descargar"}
                    </button>
                    <button class="btn btn-secondary" on:click=move |_| vm.name_open.set(false)>
                        {"Cancelar"}
                    </button>
                </div>
            </Modal>
        </Show>

        <Show when=move || vm.date_open.get()>
            <Modal
                title="Reporte por fecha".to_string()
                on_close=Callback::new(move |_| vm.date_open.set(false))
            >
                <div class="form-group">
                    <label for="report-fecha-inicio">"Fecha de inicio"</label>
                    <input
                        type="date"
                        id="report-fecha-inicio"
                        prop:value=move || vm.start.get()
                        on:input=move |ev| vm.start.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="report-fecha-fin">"Fecha de fin"</label>
                    <input
                        type="date"
                        id="report-fecha-fin"
                        prop:value=move || vm.end.get()
                        on:input=move |ev| vm.end.set(event_target_value(&ev))
                    />
                </div>
                {move || vm.date_error.get().map(|e| view! { <div class="form-error">{e}</div> })}
                <div class="modal-footer">
                    <button class="btn btn-primary" on:click=move |_| vm.submit_dates()>
                        {icon("download")}
                        {"Descargar"}
                    </button>
                    <button class="btn btn-secondary" on:click=move |_| vm.date_open.set(false)>
                        {"Cancelar"}
                    </button>
                </div>
            </Modal>
        </Show>
    }
}
