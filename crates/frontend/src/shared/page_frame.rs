//! PageFrame: root wrapper for every page rendered inside a tab.
//!
//! Sets `id = "{entity}--{category}"` (e.g. `"a001_warehouse--list"`) and
//! `data-page-category` on the root element.

use leptos::prelude::*;

pub const PAGE_CAT_LIST: &str = "list";

#[component]
pub fn PageFrame(
    page_id: &'static str,
    category: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div id=page_id class="page" data-page-category=category>
            {children()}
        </div>
    }
}
