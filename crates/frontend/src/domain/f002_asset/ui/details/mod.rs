use contracts::domain::f001_location::aggregate::Location;
use contracts::domain::f002_asset::aggregate::AssetDto;
use contracts::domain::f002_asset::schedule::{format_schedule, MaintenanceSchedule};
use contracts::shared::validation::ValidationErrors;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::f002_asset::api;
use crate::shared::components::field_error::FieldError;
use crate::shared::modal::Modal;

const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Create/edit form for one asset, including the preventive-maintenance
/// schedule editor with a live preview of the recurrence phrase.
#[component]
pub fn AssetForm(
    asset_id: Option<String>,
    locations: RwSignal<Vec<Location>>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let is_edit = asset_id.is_some();
    let existing_id = StoredValue::new(asset_id.clone());

    let code = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let category = RwSignal::new("HVAC".to_string());
    let serial_number = RwSignal::new(String::new());
    let location_ref = RwSignal::new(String::new());
    let status = RwSignal::new("Operational".to_string());
    let comment = RwSignal::new(String::new());

    // Schedule editor state
    let schedule_unit = RwSignal::new("none".to_string());
    let weekly_interval = RwSignal::new("1".to_string());
    let monthly_ordinal = RwSignal::new("1".to_string());
    let monthly_weekday = RwSignal::new("Monday".to_string());
    let yearly_month = RwSignal::new("1".to_string());
    let yearly_day = RwSignal::new("1".to_string());

    let (error, set_error) = signal::<Option<String>>(None);
    let validation: RwSignal<Option<ValidationErrors>> = RwSignal::new(None);
    let (saving, set_saving) = signal(false);
    let (loading_existing, set_loading_existing) = signal(is_edit);

    if let Some(id) = asset_id.clone() {
        spawn_local(async move {
            match api::fetch_asset(&id).await {
                Ok(asset) => {
                    code.set(asset.base.code);
                    name.set(asset.base.description);
                    category.set(asset.category);
                    serial_number.set(asset.serial_number);
                    location_ref.set(asset.location_ref.unwrap_or_default());
                    status.set(asset.status.unwrap_or_else(|| "Operational".to_string()));
                    comment.set(asset.base.comment.unwrap_or_default());
                    match asset.maintenance {
                        Some(MaintenanceSchedule::Weekly { interval }) => {
                            schedule_unit.set("weekly".to_string());
                            weekly_interval.set(interval.to_string());
                        }
                        Some(MaintenanceSchedule::Monthly {
                            week_ordinal,
                            weekday,
                        }) => {
                            schedule_unit.set("monthly".to_string());
                            monthly_ordinal.set(week_ordinal.to_string());
                            monthly_weekday.set(weekday);
                        }
                        Some(MaintenanceSchedule::Yearly { month, day }) => {
                            schedule_unit.set("yearly".to_string());
                            yearly_month.set(month.to_string());
                            yearly_day.set(day.to_string());
                        }
                        None => schedule_unit.set("none".to_string()),
                    }
                    set_loading_existing.set(false);
                }
                Err(e) => {
                    set_error.set(Some(format!("Failed to load asset: {}", e)));
                    set_loading_existing.set(false);
                }
            }
        });
    }

    let build_schedule = move || -> Option<MaintenanceSchedule> {
        match schedule_unit.get().as_str() {
            "weekly" => Some(MaintenanceSchedule::Weekly {
                interval: weekly_interval.get().trim().parse().unwrap_or(0),
            }),
            "monthly" => Some(MaintenanceSchedule::Monthly {
                week_ordinal: monthly_ordinal.get().trim().parse().unwrap_or(0),
                weekday: monthly_weekday.get(),
            }),
            "yearly" => Some(MaintenanceSchedule::Yearly {
                month: yearly_month.get().trim().parse().unwrap_or(0),
                day: yearly_day.get().trim().parse().unwrap_or(0),
            }),
            _ => None,
        }
    };

    let schedule_preview = move || format_schedule(build_schedule().as_ref());

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

        let dto = AssetDto {
            id: existing_id.get_value(),
            code: opt(code.get()),
            description: name.get(),
            category: category.get(),
            serial_number: serial_number.get(),
            location_ref: opt(location_ref.get()),
            status: opt(status.get()),
            maintenance: build_schedule(),
            comment: opt(comment.get()),
        };

        spawn_local(async move {
            match api::upsert_asset(dto).await {
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
        "Edit asset".to_string()
    } else {
        "New asset".to_string()
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
                <Label>"Name"</Label>
                <Input value=name disabled=Signal::derive(move || saving.get()) />
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
                        <option value="HVAC">"HVAC"</option>
                        <option value="Electrical">"Electrical"</option>
                        <option value="Plumbing">"Plumbing"</option>
                        <option value="Elevator">"Elevator"</option>
                    </select>
                    <FieldError errors=validation_signal field="category" />
                </div>
                <div class="form__group" style="flex: 1;">
                    <Label>"Serial number"</Label>
                    <Input value=serial_number />
                </div>
                <div class="form__group" style="flex: 1;">
                    <Label>"Status"</Label>
                    <select
                        class="form__select"
                        prop:value=move || status.get()
                        on:change=move |ev| status.set(event_target_value(&ev))
                    >
                        <option value="Operational">"Operational"</option>
                        <option value="Under Maintenance">"Under Maintenance"</option>
                        <option value="Retired">"Retired"</option>
                    </select>
                </div>
            </Flex>

            <div class="form__group">
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

            <div class="form__group">
                <Label>"Preventive maintenance"</Label>
                <Flex gap=FlexGap::Small align=FlexAlign::End>
                    <select
                        class="form__select"
                        prop:value=move || schedule_unit.get()
                        on:change=move |ev| schedule_unit.set(event_target_value(&ev))
                    >
                        <option value="none">"No schedule"</option>
                        <option value="weekly">"Weekly"</option>
                        <option value="monthly">"Monthly"</option>
                        <option value="yearly">"Yearly"</option>
                    </select>

                    {move || match schedule_unit.get().as_str() {
                        "weekly" => view! {
                            <label class="form__inline-label">"Every"</label>
                            <input
                                type="number"
                                class="form__number"
                                min="1"
                                prop:value=move || weekly_interval.get()
                                on:input=move |ev| weekly_interval.set(event_target_value(&ev))
                            />
                            <label class="form__inline-label">"week(s)"</label>
                        }.into_any(),
                        "monthly" => view! {
                            <select
                                class="form__select"
                                prop:value=move || monthly_ordinal.get()
                                on:change=move |ev| monthly_ordinal.set(event_target_value(&ev))
                            >
                                <option value="1">"1st"</option>
                                <option value="2">"2nd"</option>
                                <option value="3">"3rd"</option>
                                <option value="4">"4th"</option>
                                <option value="5">"5th"</option>
                            </select>
                            <select
                                class="form__select"
                                prop:value=move || monthly_weekday.get()
                                on:change=move |ev| monthly_weekday.set(event_target_value(&ev))
                            >
                                {WEEKDAYS.into_iter().map(|d| {
                                    view! { <option value=d>{d}</option> }
                                }).collect_view()}
                            </select>
                        }.into_any(),
                        "yearly" => view! {
                            <select
                                class="form__select"
                                prop:value=move || yearly_month.get()
                                on:change=move |ev| yearly_month.set(event_target_value(&ev))
                            >
                                {MONTHS.iter().enumerate().map(|(i, m)| {
                                    view! { <option value={(i + 1).to_string()}>{*m}</option> }
                                }).collect_view()}
                            </select>
                            <input
                                type="number"
                                class="form__number"
                                min="1"
                                max="31"
                                prop:value=move || yearly_day.get()
                                on:input=move |ev| yearly_day.set(event_target_value(&ev))
                            />
                        }.into_any(),
                        _ => view! { <></> }.into_any(),
                    }}
                </Flex>
                <div class="form__hint">{schedule_preview}</div>
                <FieldError errors=validation_signal field="maintenance" />
            </div>

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
