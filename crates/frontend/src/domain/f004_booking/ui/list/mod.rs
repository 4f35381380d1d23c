mod state;

use contracts::domain::f001_location::aggregate::Location;
use contracts::domain::f004_booking::aggregate::Booking;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashMap;
use thaw::*;

use crate::domain::f001_location::api as location_api;
use crate::domain::f004_booking::api;
use crate::domain::f004_booking::ui::details::BookingForm;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    apply_list_query, page_count, page_slice, ListQuery, SearchInput, Filterable, Searchable,
    SortValue, Sortable, TabPartition,
};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::status_badge::StatusBadge;
use state::create_state;

/// Placeholder for a booking whose venue is not settled yet
const VENUE_TBA: &str = "TBA";

// ============================================================================
// Tabs
// ============================================================================

/// Status tabs of the booking list; same rule as work orders: no
/// catch-all tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingTab {
    Pending,
    Confirmed,
    Cancelled,
}

impl BookingTab {
    pub const ALL: [BookingTab; 3] = [
        BookingTab::Pending,
        BookingTab::Confirmed,
        BookingTab::Cancelled,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BookingTab::Pending => "Pending",
            BookingTab::Confirmed => "Confirmed",
            BookingTab::Cancelled => "Cancelled",
        }
    }
}

// ============================================================================
// Row
// ============================================================================

/// Flattened booking row with the venue name resolved
#[derive(Debug, Clone, PartialEq)]
pub struct BookingRow {
    pub id: String,
    pub code: String,
    pub event: String,
    pub venue_ref: Option<String>,
    pub venue_name: String,
    pub organizer: String,
    pub contact_email: Option<String>,
    pub starts_at: Option<String>,
    pub ends_at: Option<String>,
    pub attendees: Option<i32>,
    pub status: Option<String>,
    pub created_at: String,
}

impl BookingRow {
    fn from_booking(booking: Booking, location_map: &HashMap<String, String>) -> Self {
        let venue_name = booking
            .venue_ref
            .as_ref()
            .and_then(|id| location_map.get(id).cloned())
            .unwrap_or_else(|| VENUE_TBA.to_string());

        Self {
            id: booking.to_string_id(),
            code: booking.base.code,
            event: booking.base.description,
            venue_ref: booking.venue_ref,
            venue_name,
            organizer: booking.organizer,
            contact_email: booking.contact_email,
            starts_at: booking.starts_at,
            ends_at: booking.ends_at,
            attendees: booking.attendees,
            status: booking.status,
            created_at: booking.base.metadata.created_at.to_rfc3339(),
        }
    }
}

impl TabPartition for BookingRow {
    type Tab = BookingTab;

    fn tab(&self) -> Option<BookingTab> {
        let status = self.status.as_deref()?.trim();
        BookingTab::ALL
            .into_iter()
            .find(|tab| status.eq_ignore_ascii_case(tab.label()))
    }
}

impl Searchable for BookingRow {
    fn matches_filter(&self, filter: &str) -> bool {
        let query = filter.to_lowercase();

        self.code.to_lowercase().contains(&query)
            || self.event.to_lowercase().contains(&query)
            || self.organizer.to_lowercase().contains(&query)
            || self.venue_name.to_lowercase().contains(&query)
            || self
                .contact_email
                .as_deref()
                .unwrap_or("")
                .to_lowercase()
                .contains(&query)
            || self
                .status
                .as_deref()
                .unwrap_or("")
                .to_lowercase()
                .contains(&query)
    }
}

impl Filterable for BookingRow {
    fn field_value(&self, field: &str) -> Option<String> {
        match field {
            "venue_ref" => self.venue_ref.clone(),
            _ => None,
        }
    }
}

impl Sortable for BookingRow {
    fn sort_value(&self, field: &str) -> SortValue {
        match field {
            "code" => SortValue::text(&self.code),
            "event" => SortValue::text(&self.event),
            "venue_name" => SortValue::text(&self.venue_name),
            "organizer" => SortValue::text(&self.organizer),
            "attendees" => match self.attendees {
                Some(n) => SortValue::number(n as f64),
                None => SortValue::Missing,
            },
            "starts_at" => SortValue::date_opt(self.starts_at.as_deref()),
            "created_at" => SortValue::date(&self.created_at),
            _ => SortValue::Missing,
        }
    }
}

// ============================================================================
// Page
// ============================================================================

#[component]
pub fn BookingList() -> impl IntoView {
    let state = create_state();
    let all_rows: RwSignal<Vec<BookingRow>> = RwSignal::new(Vec::new());
    let locations: RwSignal<Vec<Location>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let (show_create_form, set_show_create_form) = signal(false);
    let (editing_id, set_editing_id) = signal::<Option<String>>(None);
    let (deleting_id, set_deleting_id) = signal::<Option<String>>(None);

    let load_generation = StoredValue::new(0u64);

    let refresh_view = move || {
        let data = all_rows.get_untracked();
        state.update(|s| {
            let filtered = {
                let query = ListQuery {
                    tab: Some(s.active_tab),
                    search: &s.search_query,
                    filters: &s.filters,
                    sort_field: &s.sort_field,
                    sort_ascending: s.sort_ascending,
                };
                apply_list_query(data, &query)
            };
            s.total_count = filtered.len();
            s.total_pages = page_count(s.total_count, s.page_size);
            if s.page >= s.total_pages {
                s.page = s.total_pages.saturating_sub(1);
            }
            s.items = page_slice(&filtered, s.page, s.page_size);
        });
    };

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        let generation = load_generation.get_value() + 1;
        load_generation.set_value(generation);
        spawn_local(async move {
            let bookings = api::fetch_bookings().await;
            let location_list = location_api::fetch_locations().await.unwrap_or_default();

            if load_generation.get_value() != generation {
                return;
            }

            match bookings {
                Ok(list) => {
                    let location_map: HashMap<String, String> = location_list
                        .iter()
                        .map(|l| (l.to_string_id(), l.base.description.clone()))
                        .collect();
                    let rows: Vec<BookingRow> = list
                        .into_iter()
                        .map(|b| BookingRow::from_booking(b, &location_map))
                        .collect();
                    all_rows.set(rows);
                    locations.set(location_list);
                    state.update(|s| {
                        s.page = 0;
                        s.is_loaded = true;
                    });
                    refresh_view();
                    set_loading.set(false);
                }
                Err(e) => {
                    set_error.set(Some(format!("Failed to load bookings: {}", e)));
                    set_loading.set(false);
                }
            }
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_data();
        }
    });

    let switch_tab = move |tab: BookingTab| {
        state.update(|s| {
            s.active_tab = tab;
            s.page = 0;
        });
        refresh_view();
    };

    let apply_search = move |query: String| {
        state.update(|s| {
            s.search_query = query;
            s.page = 0;
        });
        refresh_view();
    };

    let set_venue_filter = move |value: String| {
        state.update(|s| {
            s.filters.insert("venue_ref".to_string(), value);
            s.page = 0;
        });
        refresh_view();
    };

    let toggle_sort = move |field: &'static str| {
        state.update(|s| {
            if s.sort_field == field {
                s.sort_ascending = !s.sort_ascending;
            } else {
                s.sort_field = field.to_string();
                s.sort_ascending = true;
            }
        });
        refresh_view();
    };

    let go_to_page = move |page: usize| {
        state.update(|s| s.page = page);
        refresh_view();
    };

    let change_page_size = move |size: usize| {
        state.update(|s| {
            s.page_size = size;
            s.page = 0;
        });
        refresh_view();
    };

    // disable-on-submit: one delete in flight at a time
    let delete_booking = move |id: String| {
        if deleting_id.get_untracked().is_some() {
            return;
        }
        set_deleting_id.set(Some(id.clone()));
        spawn_local(async move {
            match api::delete_booking(&id).await {
                Ok(()) => {
                    set_deleting_id.set(None);
                    load_data();
                }
                Err(e) => {
                    set_error.set(Some(format!("Failed to delete booking: {}", e)));
                    set_deleting_id.set(None);
                }
            }
        });
    };

    let on_saved = move || {
        set_show_create_form.set(false);
        set_editing_id.set(None);
        load_data();
    };

    view! {
        <PageFrame page_id="f004_booking--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Bookings"</h1>
                    <Badge>
                        {move || state.get().total_count.to_string()}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| set_show_create_form.set(true)
                    >
                        {icon("plus")}
                        " New booking"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_data()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Loading..." } else { " Refresh" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! {
                    <div class="alert alert--error">
                        <span>{e}</span>
                        <button class="alert__dismiss" on:click=move |_| set_error.set(None)>
                            {icon("x")}
                        </button>
                    </div>
                })}

                <div class="page-tabs">
                    {BookingTab::ALL
                        .into_iter()
                        .map(|tab| {
                            view! {
                                <button
                                    class=move || {
                                        if state.with(|s| s.active_tab) == tab {
                                            "page-tabs__item page-tabs__item--active"
                                        } else {
                                            "page-tabs__item"
                                        }
                                    }
                                    on:click=move |_| switch_tab(tab)
                                >
                                    {tab.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="filter-panel">
                    <div class="filter-panel-header">
                        <div class="filter-panel-header__left">
                            {icon("filter")}
                            <span class="filter-panel__title">"Search"</span>
                        </div>
                        <div class="filter-panel-header__center">
                            <PaginationControls
                                current_page=Signal::derive(move || state.get().page)
                                total_pages=Signal::derive(move || state.get().total_pages)
                                total_count=Signal::derive(move || state.get().total_count)
                                page_size=Signal::derive(move || state.get().page_size)
                                on_page_change=Callback::new(go_to_page)
                                on_page_size_change=Callback::new(change_page_size)
                            />
                        </div>
                        <div class="filter-panel-header__right">
                        </div>
                    </div>

                    <div class="filter-panel-content">
                        <Flex gap=FlexGap::Small align=FlexAlign::End>
                            <SearchInput
                                value=Signal::derive(move || state.with(|s| s.search_query.clone()))
                                on_change=Callback::new(apply_search)
                                placeholder="Code, event, organizer or venue..."
                            />
                            <div class="filter-field">
                                <label class="filter-field__label">"Venue"</label>
                                <select
                                    class="filter-field__select"
                                    on:change=move |ev| set_venue_filter(event_target_value(&ev))
                                >
                                    <option value="all">"All"</option>
                                    {move || locations.get().into_iter().map(|l| {
                                        view! {
                                            <option value={l.to_string_id()}>{l.base.description.clone()}</option>
                                        }
                                    }).collect_view()}
                                </select>
                            </div>
                        </Flex>
                    </div>
                </div>

                <div class="table-wrapper">
                    <table class="data-table" id="f004-booking-table">
                        <thead>
                            <tr>
                                <SortableHeaderCell
                                    label="Code" field="code"
                                    sort_field=Signal::derive(move || state.with(|s| s.sort_field.clone()))
                                    sort_ascending=Signal::derive(move || state.with(|s| s.sort_ascending))
                                    on_sort=Callback::new(toggle_sort)
                                />
                                <SortableHeaderCell
                                    label="Event" field="event"
                                    sort_field=Signal::derive(move || state.with(|s| s.sort_field.clone()))
                                    sort_ascending=Signal::derive(move || state.with(|s| s.sort_ascending))
                                    on_sort=Callback::new(toggle_sort)
                                />
                                <SortableHeaderCell
                                    label="Venue" field="venue_name"
                                    sort_field=Signal::derive(move || state.with(|s| s.sort_field.clone()))
                                    sort_ascending=Signal::derive(move || state.with(|s| s.sort_ascending))
                                    on_sort=Callback::new(toggle_sort)
                                />
                                <SortableHeaderCell
                                    label="Organizer" field="organizer"
                                    sort_field=Signal::derive(move || state.with(|s| s.sort_field.clone()))
                                    sort_ascending=Signal::derive(move || state.with(|s| s.sort_ascending))
                                    on_sort=Callback::new(toggle_sort)
                                />
                                <SortableHeaderCell
                                    label="Starts" field="starts_at"
                                    sort_field=Signal::derive(move || state.with(|s| s.sort_field.clone()))
                                    sort_ascending=Signal::derive(move || state.with(|s| s.sort_ascending))
                                    on_sort=Callback::new(toggle_sort)
                                />
                                <SortableHeaderCell
                                    label="Attendees" field="attendees"
                                    sort_field=Signal::derive(move || state.with(|s| s.sort_field.clone()))
                                    sort_ascending=Signal::derive(move || state.with(|s| s.sort_ascending))
                                    on_sort=Callback::new(toggle_sort)
                                />
                                <th>"Status"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || state.get().items
                                key=|row| row.id.clone()
                                children=move |row| {
                                    let edit_id = row.id.clone();
                                    let del_id = row.id.clone();
                                    let starts = row
                                        .starts_at
                                        .as_deref()
                                        .map(format_datetime)
                                        .unwrap_or_else(|| VENUE_TBA.to_string());
                                    let attendees = row
                                        .attendees
                                        .map(|n| n.to_string())
                                        .unwrap_or_else(|| "-".to_string());
                                    view! {
                                        <tr>
                                            <td class="data-table__code">{row.code.clone()}</td>
                                            <td>{row.event.clone()}</td>
                                            <td>{row.venue_name.clone()}</td>
                                            <td>{row.organizer.clone()}</td>
                                            <td>{starts}</td>
                                            <td>{attendees}</td>
                                            <td><StatusBadge status=row.status.clone() /></td>
                                            <td class="data-table__actions">
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| set_editing_id.set(Some(edit_id.clone()))
                                                    attr:title="Edit"
                                                >
                                                    {icon("edit")}
                                                </Button>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| delete_booking(del_id.clone())
                                                    disabled=Signal::derive(move || deleting_id.get().is_some())
                                                    attr:title="Delete"
                                                >
                                                    {icon("trash")}
                                                </Button>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>

                {move || if show_create_form.get() {
                    view! {
                        <BookingForm
                            booking_id=None
                            locations=locations
                            on_close=Callback::new(move |_| set_show_create_form.set(false))
                            on_saved=Callback::new(move |_| on_saved())
                        />
                    }.into_any()
                } else {
                    view! { <></> }.into_any()
                }}

                {move || editing_id.get().map(|id| view! {
                    <BookingForm
                        booking_id=Some(id)
                        locations=locations
                        on_close=Callback::new(move |_| set_editing_id.set(None))
                        on_saved=Callback::new(move |_| on_saved())
                    />
                })}
            </div>
        </PageFrame>
    }
}
