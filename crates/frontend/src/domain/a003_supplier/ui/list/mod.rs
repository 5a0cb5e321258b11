use crate::domain::a003_supplier::ui::details::SupplierDetails;
use crate::layout::global_context::use_global_context;
use crate::shared::components::list_toolbar::ListToolbar;
use crate::shared::icons::icon;
use crate::shared::list_controller::ListController;
use crate::shared::list_utils::highlight_matches;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::record_form::{RecordActions, RecordFormViewModel};
use crate::shared::toast::use_toasts;
use crate::system::session::use_session;
use contracts::domain::a003_supplier::Supplier;
use contracts::domain::common::EntityKind;
use leptos::prelude::*;
use thaw::*;

/// Suppliers are visible to validators only; everyone else is sent to the
/// supplies page
#[component]
pub fn SupplierList() -> impl IntoView {
    let session = use_session();
    let tabs_store = use_global_context();

    if !session.can_access_suppliers() {
        Effect::new(move |_| {
            log::debug!(
                "Role {} may not open suppliers, redirecting",
                session.role.as_str()
            );
            tabs_store.close_tab(EntityKind::Supplier.key());
            tabs_store.open_entity(EntityKind::Supply);
        });
        return ().into_any();
    }

    view! { <SupplierTable /> }.into_any()
}

#[component]
fn SupplierTable() -> impl IntoView {
    let list = ListController::<Supplier>::new();
    let vm = RecordFormViewModel::new(list, use_toasts());

    Effect::new(move |_| list.load_if_needed());

    view! {
        <PageFrame page_id="a003_supplier--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Lista de Proveedores"</h1>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| vm.open_create()>
                        {icon("plus")}
                        "Agregar Proveedor"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <ListToolbar list=list placeholder="Buscar proveedor" />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Empresa"</TableHeaderCell>
                                <TableHeaderCell>"RUC"</TableHeaderCell>
                                <TableHeaderCell>"Contacto"</TableHeaderCell>
                                <TableHeaderCell>"Teléfono"</TableHeaderCell>
                                <TableHeaderCell>"Email"</TableHeaderCell>
                                <TableHeaderCell>"Dirección"</TableHeaderCell>
                                <TableHeaderCell>"Acciones"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                let filter = list.filter_text().get();
                                list.page_rows()
                                    .get()
                                    .into_iter()
                                    .map(|item| {
                                        let company = highlight_matches(&item.company_name, &filter);
                                        let record = item.clone();
                                        let Supplier { tax_id, contact_name, phone, email, address, .. } = item;
                                        view! {
                                            <TableRow>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>{company}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>{tax_id}</TableCell>
                                                <TableCell>{contact_name}</TableCell>
                                                <TableCell>{phone}</TableCell>
                                                <TableCell>{email}</TableCell>
                                                <TableCell>{address}</TableCell>
                                                <TableCell>
                                                    <RecordActions vm=vm record=record />
                                                </TableCell>
                                            </TableRow>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </TableBody>
                    </Table>
                </div>
            </div>

            <SupplierDetails vm=vm />
        </PageFrame>
    }
}
