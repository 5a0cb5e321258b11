use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::toast::ToastService;
use crate::system::session::provide_session;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Tabs and sidebar state
    provide_context(AppGlobalContext::new());

    provide_context(ToastService::new());

    // Role is read once from localStorage
    provide_session();

    view! {
        <AppRoutes />
    }
}
