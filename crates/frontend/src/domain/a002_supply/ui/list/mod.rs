use crate::domain::a002_supply::ui::details::SupplyDetails;
use crate::domain::a002_supply::ui::reports::SupplyReports;
use crate::shared::components::list_toolbar::ListToolbar;
use crate::shared::icons::icon;
use crate::shared::list_controller::ListController;
use crate::shared::list_utils::highlight_matches;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::record_form::{RecordActions, RecordFormViewModel};
use crate::shared::toast::use_toasts;
use contracts::domain::a002_supply::Supply;
use leptos::prelude::*;
use thaw::*;

/// Бейдж состояния остатка
fn stock_badge(supply: &Supply) -> Option<AnyView> {
    if supply.is_stockout() {
        Some(view! { <span class="badge badge--error">"Stockout"</span> }.into_any())
    } else if supply.is_overstocked() {
        Some(view! { <span class="badge badge--warning">"Sobreabastecido"</span> }.into_any())
    } else {
        None
    }
}

#[component]
pub fn SupplyList() -> impl IntoView {
    let list = ListController::<Supply>::new();
    let vm = RecordFormViewModel::new(list, use_toasts());

    Effect::new(move |_| list.load_if_needed());

    view! {
        <PageFrame page_id="a002_supply--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Lista de Insumos"</h1>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| vm.open_create()>
                        {icon("plus")}
                        "Agregar Insumo"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <SupplyReports />
                <ListToolbar list=list placeholder="Buscar insumo" />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Nombre"</TableHeaderCell>
                                <TableHeaderCell>"Descripción"</TableHeaderCell>
                                <TableHeaderCell>"Unidad"</TableHeaderCell>
                                <TableHeaderCell>"Stock actual"</TableHeaderCell>
                                <TableHeaderCell>"Stock mínimo"</TableHeaderCell>
                                <TableHeaderCell>"Stock máximo"</TableHeaderCell>
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
                                        let badge = stock_badge(&item);
                                        let record = item.clone();
                                        let Supply { description, unit, stock, min_stock, max_stock, .. } = item;
                                        view! {
                                            <TableRow>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>{name}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>{description}</TableCell>
                                                <TableCell>{unit}</TableCell>
                                                <TableCell>
                                                    <span class="table__number">{stock}</span>
                                                    {badge}
                                                </TableCell>
                                                <TableCell>
                                                    <span class="table__number">{min_stock}</span>
                                                </TableCell>
                                                <TableCell>
                                                    <span class="table__number">{max_stock}</span>
                                                </TableCell>
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

            <SupplyDetails vm=vm />
        </PageFrame>
    }
}
