mod state;

use contracts::domain::f001_location::aggregate::Location;
use contracts::domain::f002_asset::aggregate::Asset;
use contracts::domain::f002_asset::schedule::format_schedule;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashMap;
use thaw::*;

use crate::domain::f001_location::api as location_api;
use crate::domain::f002_asset::api;
use crate::domain::f002_asset::ui::details::AssetForm;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    apply_list_query, page_count, page_slice, ListQuery, SearchInput, Filterable, Searchable,
    SortValue, Sortable, TabPartition,
};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::status_badge::StatusBadge;
use state::create_state;

const UNASSIGNED: &str = "Unassigned";

/// Asset categories offered in filters and forms
const CATEGORIES: [&str; 4] = ["HVAC", "Electrical", "Plumbing", "Elevator"];

// ============================================================================
// Row
// ============================================================================

/// Flattened asset row; the maintenance phrase is rendered once per load
#[derive(Debug, Clone, PartialEq)]
pub struct AssetRow {
    pub id: String,
    pub code: String,
    pub name: String,
    pub category: String,
    pub serial_number: String,
    pub location_ref: Option<String>,
    pub location_name: String,
    pub status: Option<String>,
    pub schedule_text: String,
    pub created_at: String,
}

impl AssetRow {
    fn from_asset(asset: Asset, location_map: &HashMap<String, String>) -> Self {
        let location_name = asset
            .location_ref
            .as_ref()
            .and_then(|id| location_map.get(id).cloned())
            .unwrap_or_else(|| UNASSIGNED.to_string());
        let schedule_text = format_schedule(asset.maintenance.as_ref());

        Self {
            id: asset.to_string_id(),
            code: asset.base.code,
            name: asset.base.description,
            category: asset.category,
            serial_number: asset.serial_number,
            location_ref: asset.location_ref,
            location_name,
            status: asset.status,
            schedule_text,
            created_at: asset.base.metadata.created_at.to_rfc3339(),
        }
    }
}

// The asset list has no tabs; the unit tab keeps the pipeline uniform.
impl TabPartition for AssetRow {
    type Tab = ();

    fn tab(&self) -> Option<()> {
        Some(())
    }
}

impl Searchable for AssetRow {
    fn matches_filter(&self, filter: &str) -> bool {
        let query = filter.to_lowercase();

        self.code.to_lowercase().contains(&query)
            || self.name.to_lowercase().contains(&query)
            || self.category.to_lowercase().contains(&query)
            || self.serial_number.to_lowercase().contains(&query)
            || self.location_name.to_lowercase().contains(&query)
            || self.schedule_text.to_lowercase().contains(&query)
            || self
                .status
                .as_deref()
                .unwrap_or("")
                .to_lowercase()
                .contains(&query)
    }
}

impl Filterable for AssetRow {
    fn field_value(&self, field: &str) -> Option<String> {
        match field {
            "category" => Some(self.category.clone()),
            "status" => self.status.clone(),
            "location_ref" => self.location_ref.clone(),
            _ => None,
        }
    }
}

impl Sortable for AssetRow {
    fn sort_value(&self, field: &str) -> SortValue {
        match field {
            "code" => SortValue::text(&self.code),
            "name" => SortValue::text(&self.name),
            "category" => SortValue::text(&self.category),
            "serial_number" => SortValue::text(&self.serial_number),
            "location_name" => SortValue::text(&self.location_name),
            "status" => SortValue::text_opt(self.status.as_deref()),
            "created_at" => SortValue::date(&self.created_at),
            _ => SortValue::Missing,
        }
    }
}

// ============================================================================
// Page
// ============================================================================

#[component]
pub fn AssetList() -> impl IntoView {
    let state = create_state();
    let all_rows: RwSignal<Vec<AssetRow>> = RwSignal::new(Vec::new());
    let locations: RwSignal<Vec<Location>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let (show_create_form, set_show_create_form) = signal(false);
    let (editing_id, set_editing_id) = signal::<Option<String>>(None);
    let filters_expanded = RwSignal::new(false);

    let load_generation = StoredValue::new(0u64);

    let refresh_view = move || {
        let data = all_rows.get_untracked();
        state.update(|s| {
            let filtered = {
                let query = ListQuery::<()> {
                    tab: None,
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
            let assets = api::fetch_assets().await;
            let location_list = location_api::fetch_locations().await.unwrap_or_default();

            if load_generation.get_value() != generation {
                return;
            }

            match assets {
                Ok(list) => {
                    let location_map: HashMap<String, String> = location_list
                        .iter()
                        .map(|l| (l.to_string_id(), l.base.description.clone()))
                        .collect();
                    let rows: Vec<AssetRow> = list
                        .into_iter()
                        .map(|a| AssetRow::from_asset(a, &location_map))
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
                    set_error.set(Some(format!("Failed to load assets: {}", e)));
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

    let apply_search = move |query: String| {
        state.update(|s| {
            s.search_query = query;
            s.page = 0;
        });
        refresh_view();
    };

    let set_filter = move |field: &'static str, value: String| {
        state.update(|s| {
            s.filters.insert(field.to_string(), value);
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

    let active_filter_count = Signal::derive(move || {
        state.with(|s| crate::shared::list_utils::active_filter_count(&s.filters))
    });

    let on_saved = move || {
        set_show_create_form.set(false);
        set_editing_id.set(None);
        load_data();
    };

    view! {
        <PageFrame page_id="f002_asset--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Assets"</h1>
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
                        " New asset"
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

                <FilterPanel
                    is_expanded=filters_expanded
                    active_filters_count=active_filter_count
                    pagination_controls=move || view! {
                        <PaginationControls
                            current_page=Signal::derive(move || state.get().page)
                            total_pages=Signal::derive(move || state.get().total_pages)
                            total_count=Signal::derive(move || state.get().total_count)
                            page_size=Signal::derive(move || state.get().page_size)
                            on_page_change=Callback::new(go_to_page)
                            on_page_size_change=Callback::new(change_page_size)
                        />
                    }.into_any()
                    filter_content=move || view! {
                        <Flex gap=FlexGap::Small align=FlexAlign::End>
                            <SearchInput
                                value=Signal::derive(move || state.with(|s| s.search_query.clone()))
                                on_change=Callback::new(apply_search)
                                placeholder="Code, name, serial or location..."
                            />
                            <div class="filter-field">
                                <label class="filter-field__label">"Category"</label>
                                <select
                                    class="filter-field__select"
                                    on:change=move |ev| set_filter("category", event_target_value(&ev))
                                >
                                    <option value="all">"All"</option>
                                    {CATEGORIES.into_iter().map(|c| {
                                        view! { <option value=c>{c}</option> }
                                    }).collect_view()}
                                </select>
                            </div>
                            <div class="filter-field">
                                <label class="filter-field__label">"Status"</label>
                                <select
                                    class="filter-field__select"
                                    on:change=move |ev| set_filter("status", event_target_value(&ev))
                                >
                                    <option value="all">"All"</option>
                                    <option value="Operational">"Operational"</option>
                                    <option value="Under Maintenance">"Under Maintenance"</option>
                                    <option value="Retired">"Retired"</option>
                                </select>
                            </div>
                            <div class="filter-field">
                                <label class="filter-field__label">"Location"</label>
                                <select
                                    class="filter-field__select"
                                    on:change=move |ev| set_filter("location_ref", event_target_value(&ev))
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
                    }.into_any()
                />

                <div class="table-wrapper">
                    <table class="data-table" id="f002-asset-table">
                        <thead>
                            <tr>
                                <SortableHeaderCell
                                    label="Code" field="code"
                                    sort_field=Signal::derive(move || state.with(|s| s.sort_field.clone()))
                                    sort_ascending=Signal::derive(move || state.with(|s| s.sort_ascending))
                                    on_sort=Callback::new(toggle_sort)
                                />
                                <SortableHeaderCell
                                    label="Name" field="name"
                                    sort_field=Signal::derive(move || state.with(|s| s.sort_field.clone()))
                                    sort_ascending=Signal::derive(move || state.with(|s| s.sort_ascending))
                                    on_sort=Callback::new(toggle_sort)
                                />
                                <SortableHeaderCell
                                    label="Category" field="category"
                                    sort_field=Signal::derive(move || state.with(|s| s.sort_field.clone()))
                                    sort_ascending=Signal::derive(move || state.with(|s| s.sort_ascending))
                                    on_sort=Callback::new(toggle_sort)
                                />
                                <SortableHeaderCell
                                    label="Serial" field="serial_number"
                                    sort_field=Signal::derive(move || state.with(|s| s.sort_field.clone()))
                                    sort_ascending=Signal::derive(move || state.with(|s| s.sort_ascending))
                                    on_sort=Callback::new(toggle_sort)
                                />
                                <SortableHeaderCell
                                    label="Location" field="location_name"
                                    sort_field=Signal::derive(move || state.with(|s| s.sort_field.clone()))
                                    sort_ascending=Signal::derive(move || state.with(|s| s.sort_ascending))
                                    on_sort=Callback::new(toggle_sort)
                                />
                                <th>"Maintenance"</th>
                                <SortableHeaderCell
                                    label="Status" field="status"
                                    sort_field=Signal::derive(move || state.with(|s| s.sort_field.clone()))
                                    sort_ascending=Signal::derive(move || state.with(|s| s.sort_ascending))
                                    on_sort=Callback::new(toggle_sort)
                                />
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || state.get().items
                                key=|row| row.id.clone()
                                children=move |row| {
                                    let edit_id = row.id.clone();
                                    view! {
                                        <tr>
                                            <td class="data-table__code">{row.code.clone()}</td>
                                            <td>{row.name.clone()}</td>
                                            <td>{row.category.clone()}</td>
                                            <td>{row.serial_number.clone()}</td>
                                            <td>{row.location_name.clone()}</td>
                                            <td>{row.schedule_text.clone()}</td>
                                            <td><StatusBadge status=row.status.clone() /></td>
                                            <td class="data-table__actions">
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| set_editing_id.set(Some(edit_id.clone()))
                                                    attr:title="Edit"
                                                >
                                                    {icon("edit")}
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
                        <AssetForm
                            asset_id=None
                            locations=locations
                            on_close=Callback::new(move |_| set_show_create_form.set(false))
                            on_saved=Callback::new(move |_| on_saved())
                        />
                    }.into_any()
                } else {
                    view! { <></> }.into_any()
                }}

                {move || editing_id.get().map(|id| view! {
                    <AssetForm
                        asset_id=Some(id)
                        locations=locations
                        on_close=Callback::new(move |_| set_editing_id.set(None))
                        on_saved=Callback::new(move |_| on_saved())
                    />
                })}
            </div>
        </PageFrame>
    }
}
