use crate::layout::pages::Page;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let active_page =
        use_context::<RwSignal<Page>>().expect("active page signal not found in context");

    view! {
        <nav class="sidebar">
            {Page::ALL
                .into_iter()
                .map(|page| {
                    view! {
                        <button
                            class=move || {
                                if active_page.get() == page {
                                    "sidebar__item sidebar__item--active"
                                } else {
                                    "sidebar__item"
                                }
                            }
                            on:click=move |_| active_page.set(page)
                        >
                            {icon(page.icon_name())}
                            <span>{page.label()}</span>
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
