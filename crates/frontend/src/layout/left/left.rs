use crate::layout::global_context::use_global_context;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Left(children: Children) -> impl IntoView {
    let ctx = use_global_context();
    let is_open = move || ctx.left_open.get();

    view! {
        <div data-zone="left" class="left" class:left--collapsed=move || !is_open()>
            <button class="left__toggle" on:click=move |_| ctx.toggle_left() title="Menú">
                {move || if is_open() { icon("chevron-left") } else { icon("chevron-right") }}
            </button>
            <div class="left__content" class:hidden=move || !is_open()>
                {children()}
            </div>
        </div>
    }
}
