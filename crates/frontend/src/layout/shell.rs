use crate::layout::pages::{render_page, Page};
use crate::layout::sidebar::Sidebar;
use leptos::prelude::*;

/// Application shell: header bar, navigation sidebar, page content.
#[component]
pub fn Shell() -> impl IntoView {
    let active_page =
        use_context::<RwSignal<Page>>().expect("active page signal not found in context");

    view! {
        <div class="shell">
            <header class="shell__header">
                <span class="shell__brand">"Facility Desk"</span>
            </header>
            <div class="shell__body">
                <Sidebar />
                <main class="shell__content">
                    {move || render_page(active_page.get())}
                </main>
            </div>
        </div>
    }
}
