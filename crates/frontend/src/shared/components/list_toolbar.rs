use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::config::app_config;
use crate::shared::icons::icon;
use crate::shared::list_controller::ListController;
use crate::shared::list_utils::SearchInput;
use contracts::domain::common::ListRecord;
use leptos::prelude::*;
use thaw::*;

/// Search, pagination and refresh above a record table, plus the load error
#[component]
pub fn ListToolbar<R>(
    list: ListController<R>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView
where
    R: ListRecord + Send + Sync,
{
    let page_size_options = app_config().ui.rows_per_page_options.clone();

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div class="filter-panel-header__left">
                    <SearchInput
                        value=list.filter_text()
                        on_change=Callback::new(move |text| list.set_filter_text(text))
                        placeholder=placeholder
                    />
                </div>
                <div class="filter-panel-header__center">
                    <PaginationControls
                        current_page=list.page()
                        total_pages=list.page_count()
                        total_count=list.filtered_count()
                        page_size=list.rows_per_page()
                        on_page_change=Callback::new(move |page| list.set_page(page))
                        on_page_size_change=Callback::new(move |rows| list.set_rows_per_page(rows))
                        page_size_options=page_size_options
                    />
                </div>
                <div class="filter-panel-header__right">
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| list.reload()>
                        {icon("refresh")}
                        "Actualizar"
                    </Button>
                </div>
            </div>
        </div>

        {move || {
            list.load_error()
                .get()
                .map(|err| view! {
                    <div class="alert alert--error">
                        {format!("No se pudo cargar {}: {}", R::list_name(), err)}
                    </div>
                })
        }}
    }
}
