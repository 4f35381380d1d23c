use contracts::domain::f003_work_order::aggregate::WorkOrderHistoryEntry;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::f003_work_order::api;
use crate::shared::date_utils::format_datetime;
use crate::shared::modal::Modal;
use crate::shared::status_badge::StatusBadge;

/// Status history of one work order.
///
/// The fetch is guarded: a response arriving after the modal was closed
/// is discarded instead of being applied to a dead view.
#[component]
pub fn WorkOrderHistoryModal(
    order_id: String,
    order_code: String,
    on_close: Callback<()>,
) -> impl IntoView {
    let (entries, set_entries) = signal::<Vec<WorkOrderHistoryEntry>>(Vec::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);

    let is_open = StoredValue::new(true);

    {
        let order_id = order_id.clone();
        spawn_local(async move {
            let result = api::fetch_history(&order_id).await;
            if !is_open.get_value() {
                return;
            }
            match result {
                Ok(list) => {
                    set_entries.set(list);
                    set_loading.set(false);
                }
                Err(e) => {
                    set_error.set(Some(format!("Failed to load history: {}", e)));
                    set_loading.set(false);
                }
            }
        });
    }

    let close = Callback::new(move |_: ()| {
        is_open.set_value(false);
        on_close.run(());
    });

    view! {
        <Modal title=format!("History: {}", order_code) on_close=close>
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            {move || if loading.get() {
                view! { <div class="form__loading">"Loading..."</div> }.into_any()
            } else if entries.get().is_empty() {
                view! { <div class="history__empty">"No history yet"</div> }.into_any()
            } else {
                view! {
                    <ul class="history">
                        {entries.get().into_iter().map(|entry| {
                            view! {
                                <li class="history__entry">
                                    <StatusBadge status=Some(entry.status.clone()) />
                                    <span class="history__date">{format_datetime(&entry.changed_at)}</span>
                                    {entry.note.clone().map(|note| view! {
                                        <span class="history__note">{note}</span>
                                    })}
                                </li>
                            }
                        }).collect_view()}
                    </ul>
                }.into_any()
            }}
        </Modal>
    }
}
