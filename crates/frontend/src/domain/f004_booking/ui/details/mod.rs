use contracts::domain::f001_location::aggregate::{Location, LocationDto};
use contracts::domain::f004_booking::aggregate::BookingDto;
use contracts::shared::validation::ValidationErrors;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::f001_location::api as location_api;
use crate::domain::f004_booking::api;
use crate::shared::components::field_error::FieldError;
use crate::shared::modal::Modal;

/// Create/edit form for one booking.
///
/// Includes ad-hoc venue creation: a quick inline form posts a new
/// location and selects it without leaving the booking dialog.
#[component]
pub fn BookingForm(
    booking_id: Option<String>,
    locations: RwSignal<Vec<Location>>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let is_edit = booking_id.is_some();
    let existing_id = StoredValue::new(booking_id.clone());

    let code = RwSignal::new(String::new());
    let event = RwSignal::new(String::new());
    let venue_ref = RwSignal::new(String::new());
    let organizer = RwSignal::new(String::new());
    let contact_email = RwSignal::new(String::new());
    let starts_at = RwSignal::new(String::new());
    let ends_at = RwSignal::new(String::new());
    let attendees = RwSignal::new(String::new());
    let status = RwSignal::new("Pending".to_string());
    let comment = RwSignal::new(String::new());

    let (error, set_error) = signal::<Option<String>>(None);
    let validation: RwSignal<Option<ValidationErrors>> = RwSignal::new(None);
    let (saving, set_saving) = signal(false);
    let (loading_existing, set_loading_existing) = signal(is_edit);

    // Quick "new venue" sub-form
    let (show_new_venue, set_show_new_venue) = signal(false);
    let new_venue_name = RwSignal::new(String::new());
    let new_venue_building = RwSignal::new(String::new());
    let (adding_venue, set_adding_venue) = signal(false);

    if let Some(id) = booking_id.clone() {
        spawn_local(async move {
            match api::fetch_booking(&id).await {
                Ok(booking) => {
                    code.set(booking.base.code);
                    event.set(booking.base.description);
                    venue_ref.set(booking.venue_ref.unwrap_or_default());
                    organizer.set(booking.organizer);
                    contact_email.set(booking.contact_email.unwrap_or_default());
                    starts_at.set(booking.starts_at.unwrap_or_default());
                    ends_at.set(booking.ends_at.unwrap_or_default());
                    attendees.set(
                        booking
                            .attendees
                            .map(|n| n.to_string())
                            .unwrap_or_default(),
                    );
                    status.set(booking.status.unwrap_or_else(|| "Pending".to_string()));
                    comment.set(booking.base.comment.unwrap_or_default());
                    set_loading_existing.set(false);
                }
                Err(e) => {
                    set_error.set(Some(format!("Failed to load booking: {}", e)));
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

    let add_venue = move |_| {
        if adding_venue.get() {
            return;
        }
        set_adding_venue.set(true);
        set_error.set(None);
        let dto = LocationDto {
            id: None,
            code: None,
            description: new_venue_name.get(),
            building: new_venue_building.get(),
            floor: None,
            capacity: None,
            comment: None,
        };
        spawn_local(async move {
            match location_api::upsert_location(dto).await {
                Ok(id) => {
                    // re-fetch the lookup so the new venue shows up everywhere
                    if let Ok(list) = location_api::fetch_locations().await {
                        locations.set(list);
                    }
                    venue_ref.set(id);
                    new_venue_name.set(String::new());
                    new_venue_building.set(String::new());
                    set_show_new_venue.set(false);
                    set_adding_venue.set(false);
                }
                Err(e) => {
                    set_error.set(Some(format!("Failed to create venue: {}", e)));
                    set_adding_venue.set(false);
                }
            }
        });
    };

    let on_save = move |_| {
        if saving.get() {
            return;
        }
        set_saving.set(true);
        set_error.set(None);
        validation.set(None);

        let dto = BookingDto {
            id: existing_id.get_value(),
            code: opt(code.get()),
            description: event.get(),
            venue_ref: opt(venue_ref.get()),
            organizer: organizer.get(),
            contact_email: opt(contact_email.get()),
            starts_at: opt(starts_at.get()),
            ends_at: opt(ends_at.get()),
            attendees: attendees.get().trim().parse::<i32>().ok(),
            status: opt(status.get()),
            comment: opt(comment.get()),
        };

        spawn_local(async move {
            match api::upsert_booking(dto).await {
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
        "Edit booking".to_string()
    } else {
        "New booking".to_string()
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
                <Label>"Event"</Label>
                <Input value=event disabled=Signal::derive(move || saving.get()) />
                <FieldError errors=validation_signal field="description" />
            </div>

            <div class="form__group">
                <Label>"Venue"</Label>
                <Flex gap=FlexGap::Small>
                    <select
                        class="form__select"
                        style="flex: 1;"
                        prop:value=move || venue_ref.get()
                        on:change=move |ev| venue_ref.set(event_target_value(&ev))
                    >
                        <option value="">"TBA"</option>
                        {move || locations.get().into_iter().map(|l| {
                            view! {
                                <option value={l.to_string_id()}>{l.base.description.clone()}</option>
                            }
                        }).collect_view()}
                    </select>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| set_show_new_venue.update(|v| *v = !*v)
                    >
                        "+ New venue"
                    </Button>
                </Flex>
            </div>

            {move || if show_new_venue.get() {
                view! {
                    <div class="form__subform">
                        <Flex gap=FlexGap::Small align=FlexAlign::End>
                            <div class="form__group" style="flex: 1;">
                                <Label>"Venue name"</Label>
                                <Input value=new_venue_name />
                            </div>
                            <div class="form__group" style="flex: 1;">
                                <Label>"Building"</Label>
                                <Input value=new_venue_building />
                            </div>
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=add_venue
                                disabled=Signal::derive(move || adding_venue.get())
                            >
                                {move || if adding_venue.get() { "Adding..." } else { "Add" }}
                            </Button>
                        </Flex>
                    </div>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}

            <Flex gap=FlexGap::Small>
                <div class="form__group" style="flex: 1;">
                    <Label>"Organizer"</Label>
                    <Input value=organizer disabled=Signal::derive(move || saving.get()) />
                    <FieldError errors=validation_signal field="organizer" />
                </div>
                <div class="form__group" style="flex: 1;">
                    <Label>"Contact email"</Label>
                    <Input value=contact_email input_type=InputType::Email />
                </div>
            </Flex>

            <Flex gap=FlexGap::Small>
                <div class="form__group" style="flex: 1;">
                    <Label>"Starts"</Label>
                    <input
                        type="datetime-local"
                        class="form__date"
                        prop:value=move || starts_at.get()
                        on:input=move |ev| starts_at.set(event_target_value(&ev))
                    />
                </div>
                <div class="form__group" style="flex: 1;">
                    <Label>"Ends"</Label>
                    <input
                        type="datetime-local"
                        class="form__date"
                        prop:value=move || ends_at.get()
                        on:input=move |ev| ends_at.set(event_target_value(&ev))
                    />
                    <FieldError errors=validation_signal field="endsAt" />
                </div>
                <div class="form__group">
                    <Label>"Attendees"</Label>
                    <input
                        type="number"
                        class="form__number"
                        min="0"
                        prop:value=move || attendees.get()
                        on:input=move |ev| attendees.set(event_target_value(&ev))
                    />
                    <FieldError errors=validation_signal field="attendees" />
                </div>
                <div class="form__group">
                    <Label>"Status"</Label>
                    <select
                        class="form__select"
                        prop:value=move || status.get()
                        on:change=move |ev| status.set(event_target_value(&ev))
                    >
                        <option value="Pending">"Pending"</option>
                        <option value="Confirmed">"Confirmed"</option>
                        <option value="Cancelled">"Cancelled"</option>
                    </select>
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
