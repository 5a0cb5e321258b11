//! Sidebar: one item per inventory page

use crate::layout::global_context::use_global_context;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use contracts::domain::common::EntityKind;
use leptos::prelude::*;

fn menu_icon(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Warehouse => "warehouse",
        EntityKind::Supply => "supply",
        EntityKind::Supplier => "supplier",
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_global_context();

    view! {
        <div class="app-sidebar__content">
            <div class="app-sidebar__title">"Inventario"</div>
            {EntityKind::ALL
                .into_iter()
                .map(|kind| {
                    let key = kind.key();
                    view! {
                        <div
                            class="app-sidebar__item"
                            class:app-sidebar__item--active=move || {
                                ctx.active.get().as_deref() == Some(key)
                            }
                            on:click=move |_| ctx.open_entity(kind)
                        >
                            <div class="app-sidebar__item-content">
                                {icon(menu_icon(kind))}
                                <span>{tab_label_for_key(key)}</span>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
