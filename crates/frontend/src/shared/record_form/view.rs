use super::view_model::RecordFormViewModel;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use contracts::domain::common::ListRecord;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Integer,
    Email,
    Tel,
}

impl InputKind {
    fn html_type(&self) -> &'static str {
        match self {
            InputKind::Text => "text",
            InputKind::Integer => "number",
            InputKind::Email => "email",
            InputKind::Tel => "tel",
        }
    }
}

/// One input of the add/edit form, keyed by its wire name
#[derive(Debug, Clone, Copy)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: InputKind,
}

impl FormField {
    pub const fn new(name: &'static str, label: &'static str, kind: InputKind) -> Self {
        Self { name, label, kind }
    }
}

#[component]
pub fn RecordFormModal<R>(vm: RecordFormViewModel<R>, fields: &'static [FormField]) -> impl IntoView
where
    R: ListRecord + Send + Sync,
{
    view! {
        <Show when=move || vm.is_open()>
            <Modal
                title=Signal::derive(move || vm.title())
                on_close=Callback::new(move |_| vm.close())
            >
                <div class="details-form">
                    {fields
                        .iter()
                        .map(|field| view! { <FieldInput vm=vm field=*field /> })
                        .collect_view()}
                </div>
                <div class="modal-footer">
                    <button
                        class="btn btn-primary"
                        on:click=move |_| vm.submit_command()
                        disabled=move || vm.is_submitting()
                    >
                        {icon("save")}
                        {"Guardar"}
                    </button>
                    <button class="btn btn-secondary" on:click=move |_| vm.close()>
                        {"Cancelar"}
                    </button>
                </div>
            </Modal>
        </Show>
    }
}

#[component]
fn FieldInput<R>(vm: RecordFormViewModel<R>, field: FormField) -> impl IntoView
where
    R: ListRecord + Send + Sync,
{
    let name = field.name;
    let kind = field.kind;

    view! {
        <div class="form-group" class:form-group--error=move || vm.error(name).is_some()>
            <label for=name>{field.label}</label>
            <input
                type=kind.html_type()
                id=name
                prop:value=move || vm.text(name)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    match kind {
                        InputKind::Integer => vm.set_integer(name, &value),
                        _ => vm.set_text(name, value),
                    }
                }
            />
            {move || vm.error(name).map(|e| view! { <div class="form-error">{e}</div> })}
        </div>
    }
}

/// Edit and delete buttons of one table row
#[component]
pub fn RecordActions<R>(vm: RecordFormViewModel<R>, record: R) -> impl IntoView
where
    R: ListRecord + Send + Sync,
{
    let record = StoredValue::new(record);

    view! {
        <div class="table__actions">
            <button
                class="button button--icon"
                title="Editar"
                on:click=move |_| record.with_value(|r| vm.open_edit(r))
            >
                {icon("edit")}
            </button>
            <button
                class="button button--icon button--danger"
                title="Eliminar"
                on:click=move |_| record.with_value(|r| vm.delete_command(r))
            >
                {icon("trash")}
            </button>
        </div>
    }
}
