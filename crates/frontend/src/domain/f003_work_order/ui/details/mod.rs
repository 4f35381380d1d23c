use contracts::domain::f001_location::aggregate::Location;
use contracts::domain::f003_work_order::aggregate::WorkOrderDto;
use contracts::shared::validation::ValidationErrors;
use contracts::system::users::User;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::f003_work_order::api;
use crate::shared::components::field_error::FieldError;
use crate::shared::modal::Modal;

/// Create/edit form for one work order.
///
/// With `order_id` set the record is fetched and the form pre-filled;
/// otherwise a new order is created on save. Field-level validation
/// messages from the server render inline under the matching inputs.
#[component]
pub fn WorkOrderForm(
    order_id: Option<String>,
    locations: RwSignal<Vec<Location>>,
    users: RwSignal<Vec<User>>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let is_edit = order_id.is_some();
    let existing_id = StoredValue::new(order_id.clone());

    let code = RwSignal::new(String::new());
    let title = RwSignal::new(String::new());
    let category = RwSignal::new("Compliance".to_string());
    let priority = RwSignal::new("Medium".to_string());
    let status = RwSignal::new("Open".to_string());
    let location_ref = RwSignal::new(String::new());
    let assignee_ref = RwSignal::new(String::new());
    let due_date = RwSignal::new(String::new());
    let comment = RwSignal::new(String::new());

    let (error, set_error) = signal::<Option<String>>(None);
    let validation: RwSignal<Option<ValidationErrors>> = RwSignal::new(None);
    let (saving, set_saving) = signal(false);
    let (loading_existing, set_loading_existing) = signal(is_edit);

    // Pre-fill when editing
    if let Some(id) = order_id.clone() {
        spawn_local(async move {
            match api::fetch_work_order(&id).await {
                Ok(order) => {
                    code.set(order.base.code);
                    title.set(order.base.description);
                    category.set(order.category);
                    priority.set(order.priority.unwrap_or_default());
                    status.set(order.status.unwrap_or_else(|| "Open".to_string()));
                    location_ref.set(order.location_ref.unwrap_or_default());
                    assignee_ref.set(order.assignee_ref.unwrap_or_default());
                    due_date.set(order.due_date.unwrap_or_default());
                    comment.set(order.base.comment.unwrap_or_default());
                    set_loading_existing.set(false);
                }
                Err(e) => {
                    set_error.set(Some(format!("Failed to load work order: {}", e)));
                    set_loading_existing.set(false);
                }
            }
        });
    }

    let opt = |value: String| {
        if value.trim().is_empty() {
            None
        } else {
            Some(value)
        }
    };

    let on_save = move |_| {
        if saving.get() {
            return;
        }
        set_saving.set(true);
        set_error.set(None);
        validation.set(None);

        let dto = WorkOrderDto {
            id: existing_id.get_value(),
            code: opt(code.get()),
            description: title.get(),
            category: category.get(),
            priority: opt(priority.get()),
            status: opt(status.get()),
            location_ref: opt(location_ref.get()),
            assignee_ref: opt(assignee_ref.get()),
            due_date: opt(due_date.get()),
            comment: opt(comment.get()),
        };

        spawn_local(async move {
            match api::upsert_work_order(dto).await {
                Ok(_) => on_saved.run(()),
                Err(e) => {
                    match e.validation() {
                        Some(errors) => validation.set(Some(errors.clone())),
                        None => set_error.set(Some(format!("Failed to save: {}", e))),
                    }
                    set_saving.set(false);
                }
            }
        });
    };

    let validation_signal = Signal::derive(move || validation.get());
    let modal_title = if is_edit {
        "Edit work order".to_string()
    } else {
        "New work order".to_string()
    };

    view! {
        <Modal title=modal_title on_close=on_close>
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            {move || if loading_existing.get() {
                view! { <div class="form__loading">"Loading..."</div> }.into_any()
            } else {
                view! { <></> }.into_any()
            }}

            <div class="form__group">
                <Label>"Title"</Label>
                <Input value=title disabled=Signal::derive(move || saving.get()) />
                <FieldError errors=validation_signal field="description" />
            </div>

            <Flex gap=FlexGap::Small>
                <div class="form__group" style="flex: 1;">
                    <Label>"Category"</Label>
                    <select
                        class="form__select"
                        prop:value=move || category.get()
                        on:change=move |ev| category.set(event_target_value(&ev))
                    >
                        <option value="Compliance">"Compliance"</option>
                        <option value="Safety">"Safety"</option>
                    </select>
                    <FieldError errors=validation_signal field="category" />
                </div>
                <div class="form__group" style="flex: 1;">
                    <Label>"Priority"</Label>
                    <select
                        class="form__select"
                        prop:value=move || priority.get()
                        on:change=move |ev| priority.set(event_target_value(&ev))
                    >
                        <option value="Low">"Low"</option>
                        <option value="Medium">"Medium"</option>
                        <option value="High">"High"</option>
                        <option value="Critical">"Critical"</option>
                    </select>
                </div>
                <div class="form__group" style="flex: 1;">
                    <Label>"Status"</Label>
                    <select
                        class="form__select"
                        prop:value=move || status.get()
                        on:change=move |ev| status.set(event_target_value(&ev))
                    >
                        <option value="Open">"Open"</option>
                        <option value="In Progress">"In Progress"</option>
                        <option value="Completed">"Completed"</option>
                    </select>
                </div>
            </Flex>

            <Flex gap=FlexGap::Small>
                <div class="form__group" style="flex: 1;">
                    <Label>"Location"</Label>
                    <select
                        class="form__select"
                        prop:value=move || location_ref.get()
                        on:change=move |ev| location_ref.set(event_target_value(&ev))
                    >
                        <option value="">"Unassigned"</option>
                        {move || locations.get().into_iter().map(|l| {
                            view! {
                                <option value={l.to_string_id()}>{l.base.description.clone()}</option>
                            }
                        }).collect_view()}
                    </select>
                </div>
                <div class="form__group" style="flex: 1;">
                    <Label>"Assignee"</Label>
                    <select
                        class="form__select"
                        prop:value=move || assignee_ref.get()
                        on:change=move |ev| assignee_ref.set(event_target_value(&ev))
                    >
                        <option value="">"Unassigned"</option>
                        {move || users.get().into_iter().map(|u| {
                            let name = u.full_name.clone().unwrap_or_else(|| u.username.clone());
                            view! {
                                <option value={u.id.clone()}>{name}</option>
                            }
                        }).collect_view()}
                    </select>
                </div>
                <div class="form__group" style="flex: 1;">
                    <Label>"Due date"</Label>
                    <input
                        type="date"
                        class="form__date"
                        prop:value=move || due_date.get()
                        on:input=move |ev| due_date.set(event_target_value(&ev))
                    />
                    <FieldError errors=validation_signal field="dueDate" />
                </div>
            </Flex>

            <div class="form__group">
                <Label>"Comment"</Label>
                <textarea
                    class="form__textarea"
                    prop:value=move || comment.get()
                    on:input=move |ev| comment.set(event_target_value(&ev))
                ></textarea>
            </div>

            <div class="modal-footer">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_close.run(())
                    disabled=Signal::derive(move || saving.get())
                >
                    "Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=on_save
                    disabled=Signal::derive(move || saving.get() || loading_existing.get())
                >
                    {move || if saving.get() { "Saving..." } else { "Save" }}
                </Button>
            </div>
        </Modal>
    }
}
