use crate::domain::a001_warehouse::ui::details::WarehouseDetails;
use crate::shared::components::list_toolbar::ListToolbar;
use crate::shared::icons::icon;
use crate::shared::list_controller::ListController;
use crate::shared::list_utils::highlight_matches;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::record_form::{RecordActions, RecordFormViewModel};
use crate::shared::toast::use_toasts;
use crate::system::session::use_session;
use contracts::domain::a001_warehouse::Warehouse;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn WarehouseList() -> impl IntoView {
    let session = use_session();
    let list = ListController::<Warehouse>::new();
    let vm = RecordFormViewModel::new(list, use_toasts());

    Effect::new(move |_| list.load_if_needed());

    // Операторы не добавляют склады, вместо кнопки ссылка на главную
    let header_action = if session.can_create_warehouse() {
        view! {
            <Button appearance=ButtonAppearance::Primary on_click=move |_| vm.open_create()>
                {icon("plus")}
                "Agregar Almacén"
            </Button>
        }
        .into_any()
    } else {
        view! {
            <a href="/home" class="link">
                {icon("home")}
                "Ir a Home"
            </a>
        }
        .into_any()
    };

    view! {
        <PageFrame page_id="a001_warehouse--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Lista de Almacenes"</h1>
                </div>
                <div class="page__header-right">{header_action}</div>
            </div>

            <div class="page__content">
                <ListToolbar list=list placeholder="Buscar almacén" />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Nombre"</TableHeaderCell>
                                <TableHeaderCell>"Responsable"</TableHeaderCell>
                                <TableHeaderCell>"Ciudad"</TableHeaderCell>
                                <TableHeaderCell>"Dirección"</TableHeaderCell>
                                <TableHeaderCell>"Teléfono"</TableHeaderCell>
                                <TableHeaderCell>"Email"</TableHeaderCell>
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
                                        let name = highlight_matches(&item.name, &filter);
                                        let record = item.clone();
                                        let Warehouse { manager, city, address, phone, contact_email, .. } = item;
                                        view! {
                                            <TableRow>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>
                                                        {name}
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>{manager}</TableCell>
                                                <TableCell>{city}</TableCell>
                                                <TableCell>{address}</TableCell>
                                                <TableCell>{phone}</TableCell>
                                                <TableCell>{contact_email}</TableCell>
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

            <WarehouseDetails vm=vm />
        </PageFrame>
    }
}
