mod state;

use contracts::domain::f001_location::aggregate::Location;
use contracts::domain::f003_work_order::aggregate::WorkOrder;
use contracts::system::users::User;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashMap;
use thaw::*;

use crate::domain::f001_location::api as location_api;
use crate::domain::f003_work_order::api;
use crate::domain::f003_work_order::ui::details::WorkOrderForm;
use crate::domain::f003_work_order::ui::history::WorkOrderHistoryModal;
use crate::shared::components::filter_panel::{FilterPanel, FilterTag};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    apply_list_query, page_count, page_slice, partition_by_tab, ListQuery, SearchInput,
    Filterable, Searchable, SortValue, Sortable, TabPartition, FILTER_ALL,
};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::status_badge::{PriorityBadge, StatusBadge};
use crate::system::users::api as users_api;
use state::create_state;

const UNASSIGNED: &str = "Unassigned";

// ============================================================================
// Tabs
// ============================================================================

/// Status tabs of the work order list. No catch-all: an order whose
/// status matches none of the tabs is not shown on any of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkOrderTab {
    Open,
    InProgress,
    Completed,
}

impl WorkOrderTab {
    pub const ALL: [WorkOrderTab; 3] = [
        WorkOrderTab::Open,
        WorkOrderTab::InProgress,
        WorkOrderTab::Completed,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            WorkOrderTab::Open => "Open",
            WorkOrderTab::InProgress => "In Progress",
            WorkOrderTab::Completed => "Completed",
        }
    }
}

// ============================================================================
// Row
// ============================================================================

/// Flattened work order row with resolved lookup names
#[derive(Debug, Clone, PartialEq)]
pub struct WorkOrderRow {
    pub id: String,
    pub code: String,
    pub title: String,
    pub category: String,
    pub priority: Option<String>,
    pub status: Option<String>,
    pub location_ref: Option<String>,
    pub location_name: String,
    pub assignee_ref: Option<String>,
    pub assignee_name: String,
    pub due_date: Option<String>,
    pub created_at: String,
}

impl WorkOrderRow {
    fn from_order(
        order: WorkOrder,
        location_map: &HashMap<String, String>,
        user_map: &HashMap<String, String>,
    ) -> Self {
        let location_name = order
            .location_ref
            .as_ref()
            .and_then(|id| location_map.get(id).cloned())
            .unwrap_or_else(|| UNASSIGNED.to_string());

        let assignee_name = order
            .assignee_ref
            .as_ref()
            .and_then(|id| user_map.get(id).cloned())
            .unwrap_or_else(|| UNASSIGNED.to_string());

        Self {
            id: order.to_string_id(),
            code: order.base.code,
            title: order.base.description,
            category: order.category,
            priority: order.priority,
            status: order.status,
            location_ref: order.location_ref,
            location_name,
            assignee_ref: order.assignee_ref,
            assignee_name,
            due_date: order.due_date,
            created_at: order.base.metadata.created_at.to_rfc3339(),
        }
    }
}

impl TabPartition for WorkOrderRow {
    type Tab = WorkOrderTab;

    fn tab(&self) -> Option<WorkOrderTab> {
        let status = self.status.as_deref()?.trim();
        WorkOrderTab::ALL
            .into_iter()
            .find(|tab| status.eq_ignore_ascii_case(tab.label()))
    }
}

impl Searchable for WorkOrderRow {
    fn matches_filter(&self, filter: &str) -> bool {
        let query = filter.to_lowercase();

        self.code.to_lowercase().contains(&query)
            || self.title.to_lowercase().contains(&query)
            || self.category.to_lowercase().contains(&query)
            || self.location_name.to_lowercase().contains(&query)
            || self.assignee_name.to_lowercase().contains(&query)
            || self
                .status
                .as_deref()
                .unwrap_or("")
                .to_lowercase()
                .contains(&query)
            || self
                .priority
                .as_deref()
                .unwrap_or("")
                .to_lowercase()
                .contains(&query)
    }
}

impl Filterable for WorkOrderRow {
    fn field_value(&self, field: &str) -> Option<String> {
        match field {
            "category" => Some(self.category.clone()),
            "priority" => self.priority.clone(),
            "location_ref" => self.location_ref.clone(),
            _ => None,
        }
    }
}

impl Sortable for WorkOrderRow {
    fn sort_value(&self, field: &str) -> SortValue {
        match field {
            "code" => SortValue::text(&self.code),
            "title" => SortValue::text(&self.title),
            "category" => SortValue::text(&self.category),
            "priority" => SortValue::text_opt(self.priority.as_deref()),
            "location_name" => SortValue::text(&self.location_name),
            "assignee_name" => SortValue::text(&self.assignee_name),
            "due_date" => SortValue::date_opt(self.due_date.as_deref()),
            "created_at" => SortValue::date(&self.created_at),
            _ => SortValue::Missing,
        }
    }
}

// ============================================================================
// Page
// ============================================================================

#[component]
pub fn WorkOrderList() -> impl IntoView {
    let state = create_state();
    let all_rows: RwSignal<Vec<WorkOrderRow>> = RwSignal::new(Vec::new());
    let locations: RwSignal<Vec<Location>> = RwSignal::new(Vec::new());
    let users: RwSignal<Vec<User>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let (show_create_form, set_show_create_form) = signal(false);
    let (editing_id, set_editing_id) = signal::<Option<String>>(None);
    let (history_for, set_history_for) = signal::<Option<(String, String)>>(None);
    let filters_expanded = RwSignal::new(false);

    // Stale-response guard: only the newest load may apply its result.
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
            let orders = api::fetch_work_orders().await;
            let location_list = location_api::fetch_locations().await.unwrap_or_default();
            let user_list = users_api::fetch_users().await.unwrap_or_default();

            if load_generation.get_value() != generation {
                // a newer load finished first; drop this result
                return;
            }

            match orders {
                Ok(list) => {
                    let location_map: HashMap<String, String> = location_list
                        .iter()
                        .map(|l| (l.to_string_id(), l.base.description.clone()))
                        .collect();
                    let user_map: HashMap<String, String> = user_list
                        .iter()
                        .map(|u| {
                            let name = u
                                .full_name
                                .clone()
                                .unwrap_or_else(|| u.username.clone());
                            (u.id.clone(), name)
                        })
                        .collect();

                    let rows: Vec<WorkOrderRow> = list
                        .into_iter()
                        .map(|order| WorkOrderRow::from_order(order, &location_map, &user_map))
                        .collect();
                    all_rows.set(rows);
                    locations.set(location_list);
                    users.set(user_list);
                    state.update(|s| {
                        s.page = 0;
                        s.is_loaded = true;
                    });
                    refresh_view();
                    set_loading.set(false);
                }
                Err(e) => {
                    set_error.set(Some(format!("Failed to load work orders: {}", e)));
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

    let switch_tab = move |tab: WorkOrderTab| {
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

    let set_filter = move |field: &'static str, value: String| {
        state.update(|s| {
            s.filters.insert(field.to_string(), value);
            s.page = 0;
        });
        refresh_view();
    };

    let clear_filter = move |field: String| {
        state.update(|s| {
            s.filters.insert(field, FILTER_ALL.to_string());
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

    let tab_count = move |tab: WorkOrderTab| {
        partition_by_tab(all_rows.get(), tab).len()
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
        <PageFrame page_id="f003_work_order--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Work orders"</h1>
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
                        " New work order"
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
                    {WorkOrderTab::ALL
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
                                    <span class="page-tabs__count">{move || tab_count(tab)}</span>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

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
                                placeholder="Code, title, location or assignee..."
                            />
                            <div class="filter-field">
                                <label class="filter-field__label">"Category"</label>
                                <select
                                    class="filter-field__select"
                                    on:change=move |ev| set_filter("category", event_target_value(&ev))
                                >
                                    <option value="all">"All"</option>
                                    <option value="Compliance">"Compliance"</option>
                                    <option value="Safety">"Safety"</option>
                                </select>
                            </div>
                            <div class="filter-field">
                                <label class="filter-field__label">"Priority"</label>
                                <select
                                    class="filter-field__select"
                                    on:change=move |ev| set_filter("priority", event_target_value(&ev))
                                >
                                    <option value="all">"All"</option>
                                    <option value="Low">"Low"</option>
                                    <option value="Medium">"Medium"</option>
                                    <option value="High">"High"</option>
                                    <option value="Critical">"Critical"</option>
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
                    filter_tags=move || view! {
                        <div class="filter-tags">
                            {move || {
                                let active: Vec<(String, String)> = state.with(|s| {
                                    s.filters
                                        .iter()
                                        .filter(|(_, v)| !v.is_empty() && v.as_str() != FILTER_ALL)
                                        .map(|(f, v)| (f.clone(), v.clone()))
                                        .collect()
                                });
                                active
                                    .into_iter()
                                    .map(|(field, value)| {
                                        // Location filters carry an id; show the name instead
                                        let display = if field == "location_ref" {
                                            locations
                                                .get()
                                                .iter()
                                                .find(|l| l.to_string_id() == value)
                                                .map(|l| l.base.description.clone())
                                                .unwrap_or(value)
                                        } else {
                                            value
                                        };
                                        let label = format!("{}: {}", field.replace('_', " "), display);
                                        let field_for_remove = field.clone();
                                        view! {
                                            <FilterTag
                                                label=label
                                                on_remove=Callback::new(move |_| clear_filter(field_for_remove.clone()))
                                            />
                                        }
                                    })
                                    .collect_view()
                            }}
                        </div>
                    }.into_any()
                />

                <div class="table-wrapper">
                    <table class="data-table" id="f003-work-order-table">
                        <thead>
                            <tr>
                                <SortableHeaderCell
                                    label="Code" field="code"
                                    sort_field=Signal::derive(move || state.with(|s| s.sort_field.clone()))
                                    sort_ascending=Signal::derive(move || state.with(|s| s.sort_ascending))
                                    on_sort=Callback::new(toggle_sort)
                                />
                                <SortableHeaderCell
                                    label="Title" field="title"
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
                                    label="Priority" field="priority"
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
                                <SortableHeaderCell
                                    label="Assignee" field="assignee_name"
                                    sort_field=Signal::derive(move || state.with(|s| s.sort_field.clone()))
                                    sort_ascending=Signal::derive(move || state.with(|s| s.sort_ascending))
                                    on_sort=Callback::new(toggle_sort)
                                />
                                <SortableHeaderCell
                                    label="Due" field="due_date"
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
                                    let history_id = row.id.clone();
                                    let history_code = row.code.clone();
                                    let due = row
                                        .due_date
                                        .as_deref()
                                        .map(format_date)
                                        .unwrap_or_else(|| "-".to_string());
                                    view! {
                                        <tr>
                                            <td class="data-table__code">{row.code.clone()}</td>
                                            <td>{row.title.clone()}</td>
                                            <td>{row.category.clone()}</td>
                                            <td><PriorityBadge priority=row.priority.clone() /></td>
                                            <td>{row.location_name.clone()}</td>
                                            <td>{row.assignee_name.clone()}</td>
                                            <td>{due}</td>
                                            <td><StatusBadge status=row.status.clone() /></td>
                                            <td class="data-table__actions">
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| set_history_for.set(Some((history_id.clone(), history_code.clone())))
                                                    attr:title="History"
                                                >
                                                    {icon("clock")}
                                                </Button>
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
                        <WorkOrderForm
                            order_id=None
                            locations=locations
                            users=users
                            on_close=Callback::new(move |_| set_show_create_form.set(false))
                            on_saved=Callback::new(move |_| on_saved())
                        />
                    }.into_any()
                } else {
                    view! { <></> }.into_any()
                }}

                {move || editing_id.get().map(|id| view! {
                    <WorkOrderForm
                        order_id=Some(id)
                        locations=locations
                        users=users
                        on_close=Callback::new(move |_| set_editing_id.set(None))
                        on_saved=Callback::new(move |_| on_saved())
                    />
                })}

                {move || history_for.get().map(|(id, code)| view! {
                    <WorkOrderHistoryModal
                        order_id=id
                        order_code=code
                        on_close=Callback::new(move |_| set_history_for.set(None))
                    />
                })}
            </div>
        </PageFrame>
    }
}
