mod state;

use contracts::system::users::{ReviewUserDto, User};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    apply_list_query, get_sort_class, get_sort_indicator, page_count, page_slice, ListQuery,
    SearchInput, Filterable, Searchable, SortValue, Sortable, TabPartition,
};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::shared::status_badge::StatusBadge;
use crate::system::users::api;
use crate::system::users::ui::details::UserForm;
use state::create_state;

// ============================================================================
// Tabs
// ============================================================================

/// Internal/External split of the user directory.
///
/// Classification is the department/work-group/staff-type presence
/// heuristic from `User::is_internal`; every record lands in exactly one
/// of the two tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserTab {
    Internal,
    External,
}

impl UserTab {
    pub const ALL: [UserTab; 2] = [UserTab::Internal, UserTab::External];

    pub fn label(&self) -> &'static str {
        match self {
            UserTab::Internal => "Internal",
            UserTab::External => "External",
        }
    }
}

impl TabPartition for User {
    type Tab = UserTab;

    fn tab(&self) -> Option<UserTab> {
        if self.is_internal() {
            Some(UserTab::Internal)
        } else {
            Some(UserTab::External)
        }
    }
}

impl Searchable for User {
    fn matches_filter(&self, filter: &str) -> bool {
        let query = filter.to_lowercase();

        self.id.to_lowercase().contains(&query)
            || self.username.to_lowercase().contains(&query)
            || self
                .full_name
                .as_deref()
                .unwrap_or("")
                .to_lowercase()
                .contains(&query)
            || self
                .email
                .as_deref()
                .unwrap_or("")
                .to_lowercase()
                .contains(&query)
            || self
                .contact_phone
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
            || self
                .roles
                .iter()
                .any(|role| role.to_lowercase().contains(&query))
    }
}

impl Filterable for User {
    fn field_value(&self, field: &str) -> Option<String> {
        match field {
            "status" => self.status.clone(),
            "staff_type" => self.staff_type.clone(),
            "department" => self.department.clone(),
            _ => None,
        }
    }
}

impl Sortable for User {
    fn sort_value(&self, field: &str) -> SortValue {
        match field {
            "username" => SortValue::text(&self.username),
            "full_name" => SortValue::text_opt(self.full_name.as_deref()),
            "email" => SortValue::text_opt(self.email.as_deref()),
            "department" => SortValue::text_opt(self.department.as_deref()),
            "status" => SortValue::text_opt(self.status.as_deref()),
            "created_at" => SortValue::date(&self.created_at),
            _ => SortValue::text(&self.username),
        }
    }
}

// ============================================================================
// Page
// ============================================================================

#[component]
pub fn UsersList() -> impl IntoView {
    let state = create_state();
    let all_users: RwSignal<Vec<User>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let (show_register_form, set_show_register_form) = signal(false);
    let editing_user: RwSignal<Option<User>> = RwSignal::new(None);
    let (reviewing_id, set_reviewing_id) = signal::<Option<String>>(None);

    let load_generation = StoredValue::new(0u64);

    let refresh_view = move || {
        let data = all_users.get_untracked();
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
            let result = api::fetch_users().await;
            if load_generation.get_value() != generation {
                return;
            }
            match result {
                Ok(data) => {
                    all_users.set(data);
                    state.update(|s| {
                        s.page = 0;
                        s.is_loaded = true;
                    });
                    refresh_view();
                    set_loading.set(false);
                }
                Err(e) => {
                    set_error.set(Some(format!("Failed to load users: {}", e)));
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

    let switch_tab = move |tab: UserTab| {
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

    let toggle_sort = move |field: &'static str| {
        move |_| {
            state.update(|s| {
                if s.sort_field == field {
                    s.sort_ascending = !s.sort_ascending;
                } else {
                    s.sort_field = field.to_string();
                    s.sort_ascending = true;
                }
            });
            refresh_view();
        }
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

    // disable-on-submit: one review decision in flight at a time
    let review = move |user_id: String, decision: &'static str| {
        if reviewing_id.get_untracked().is_some() {
            return;
        }
        set_reviewing_id.set(Some(user_id.clone()));
        spawn_local(async move {
            let dto = ReviewUserDto {
                user_id,
                decision: decision.to_string(),
                note: None,
            };
            match api::review_user(dto).await {
                Ok(()) => {
                    set_reviewing_id.set(None);
                    load_data();
                }
                Err(e) => {
                    set_error.set(Some(format!("Failed to submit decision: {}", e)));
                    set_reviewing_id.set(None);
                }
            }
        });
    };

    let on_saved = move || {
        set_show_register_form.set(false);
        editing_user.set(None);
        load_data();
    };

    let sort_header = move |label: &'static str, field: &'static str| {
        view! {
            <div class="table__sortable-header" style="cursor:pointer;" on:click=toggle_sort(field)>
                {label}
                <span class=move || state.with(|s| get_sort_class(&s.sort_field, field))>
                    {move || get_sort_indicator(&state.with(|s| s.sort_field.clone()), field, state.with(|s| s.sort_ascending))}
                </span>
            </div>
        }
    };

    view! {
        <PageFrame page_id="sys_users--list" category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Users"</h1>
                    <Badge>
                        {move || state.get().total_count.to_string()}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| set_show_register_form.set(true)
                    >
                        {icon("plus")}
                        " Register"
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
                    {UserTab::ALL
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
                                placeholder="Username, name, email or role..."
                            />
                            <div class="filter-field">
                                <label class="filter-field__label">"Status"</label>
                                <select
                                    class="filter-field__select"
                                    on:change=move |ev| set_filter("status", event_target_value(&ev))
                                >
                                    <option value="all">"All"</option>
                                    <option value="Pending">"Pending"</option>
                                    <option value="Approved">"Approved"</option>
                                    <option value="Rejected">"Rejected"</option>
                                </select>
                            </div>
                            <div class="filter-field">
                                <label class="filter-field__label">"Staff type"</label>
                                <select
                                    class="filter-field__select"
                                    on:change=move |ev| set_filter("staff_type", event_target_value(&ev))
                                >
                                    <option value="all">"All"</option>
                                    <option value="Employee">"Employee"</option>
                                    <option value="Contractor">"Contractor"</option>
                                </select>
                            </div>
                        </Flex>
                    </div>
                </div>

                <div class="table-wrapper">
                    <Table attr:id="sys-users-table" attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=140.0>
                                    {sort_header("Username", "username")}
                                </TableHeaderCell>
                                <TableHeaderCell min_width=160.0>
                                    {sort_header("Full name", "full_name")}
                                </TableHeaderCell>
                                <TableHeaderCell min_width=160.0>
                                    {sort_header("Email", "email")}
                                </TableHeaderCell>
                                <TableHeaderCell min_width=130.0>
                                    {sort_header("Department", "department")}
                                </TableHeaderCell>
                                <TableHeaderCell min_width=130.0>
                                    "Roles"
                                </TableHeaderCell>
                                <TableHeaderCell min_width=130.0>
                                    {sort_header("Registered", "created_at")}
                                </TableHeaderCell>
                                <TableHeaderCell min_width=100.0>
                                    {sort_header("Status", "status")}
                                </TableHeaderCell>
                                <TableHeaderCell min_width=140.0>
                                </TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || state.get().items
                                key=|u| u.id.clone()
                                children=move |user| {
                                    let user_for_edit = user.clone();
                                    let approve_id = user.id.clone();
                                    let reject_id = user.id.clone();
                                    let is_pending = user
                                        .status
                                        .as_deref()
                                        .map(|s| s.eq_ignore_ascii_case("pending"))
                                        .unwrap_or(true);
                                    let registered = format_datetime(&user.created_at);
                                    let roles = if user.roles.is_empty() {
                                        "-".to_string()
                                    } else {
                                        user.roles.join(", ")
                                    };
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{user.username.clone()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {user.full_name.clone().unwrap_or_default()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {user.email.clone().unwrap_or_default()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {user.department.clone().unwrap_or_else(|| "-".to_string())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{roles}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{registered}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <StatusBadge status=user.status.clone() />
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                {if is_pending {
                                                    view! {
                                                        <Button
                                                            appearance=ButtonAppearance::Subtle
                                                            on_click=move |_| review(approve_id.clone(), "approve")
                                                            disabled=Signal::derive(move || reviewing_id.get().is_some())
                                                            attr:title="Approve"
                                                        >
                                                            {icon("check")}
                                                        </Button>
                                                        <Button
                                                            appearance=ButtonAppearance::Subtle
                                                            on_click=move |_| review(reject_id.clone(), "reject")
                                                            disabled=Signal::derive(move || reviewing_id.get().is_some())
                                                            attr:title="Reject"
                                                        >
                                                            {icon("x")}
                                                        </Button>
                                                    }.into_any()
                                                } else {
                                                    view! { <></> }.into_any()
                                                }}
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| editing_user.set(Some(user_for_edit.clone()))
                                                    attr:title="Edit"
                                                >
                                                    {icon("edit")}
                                                </Button>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>

                {move || if show_register_form.get() {
                    view! {
                        <UserForm
                            user=None
                            on_close=Callback::new(move |_| set_show_register_form.set(false))
                            on_saved=Callback::new(move |_| on_saved())
                        />
                    }.into_any()
                } else {
                    view! { <></> }.into_any()
                }}

                {move || editing_user.get().map(|user| view! {
                    <UserForm
                        user=Some(user)
                        on_close=Callback::new(move |_| editing_user.set(None))
                        on_saved=Callback::new(move |_| on_saved())
                    />
                })}
            </div>
        </PageFrame>
    }
}
