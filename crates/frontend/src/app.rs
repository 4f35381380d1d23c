use crate::layout::pages::Page;
use crate::layout::Shell;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // One signal drives the whole navigation; every page owns its own
    // filter/sort/tab state and drops it when the user navigates away.
    let active_page = RwSignal::new(Page::WorkOrders);
    provide_context(active_page);

    view! {
        <Shell />
    }
}
