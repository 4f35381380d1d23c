use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use leptos::prelude::*;

/// Column header that toggles sorting on click and renders the
/// asc/desc/neutral indicator.
#[component]
pub fn SortableHeaderCell(
    /// Column caption
    label: &'static str,
    /// Sort field key of this column
    field: &'static str,
    #[prop(into)] sort_field: Signal<String>,
    #[prop(into)] sort_ascending: Signal<bool>,
    /// Invoked with the column's field key
    on_sort: Callback<&'static str>,
) -> impl IntoView {
    view! {
        <th class="resizable">
            <div class="table__sortable-header" on:click=move |_| on_sort.run(field)>
                {label}
                <span class=move || get_sort_class(&sort_field.get(), field)>
                    {move || get_sort_indicator(&sort_field.get(), field, sort_ascending.get())}
                </span>
            </div>
        </th>
    }
}
