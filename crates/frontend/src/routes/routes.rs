use crate::layout::center::tabs::Tabs;
use crate::layout::global_context::use_global_context;
use crate::layout::left::Sidebar;
use crate::layout::Shell;
use crate::shared::toast::ToastHost;
use leptos::prelude::*;

#[component]
fn MainLayout() -> impl IntoView {
    let tabs_store = use_global_context();

    // Opens the tab named in ?active= (or the default one) and keeps the URL in sync
    tabs_store.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <Tabs /> }.into_any()
        />
        <ToastHost />
    }
}

/// No login screen: the role comes from localStorage
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! { <MainLayout /> }
}
