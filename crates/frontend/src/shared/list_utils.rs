//! Reusable list view controller shared by every management page.
//!
//! Composition order, leaves first: record set -> tab partition ->
//! free-text search -> column filters -> sort -> rendered rows. Every
//! stage is a pure function of its input plus the page's current state;
//! nothing here holds state of its own.

use crate::shared::date_utils::parse_instant_ms;
use gloo_timers::future::TimeoutFuture;
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Sentinel filter value meaning "unconstrained"
pub const FILTER_ALL: &str = "all";

/// Free-text search over a fixed per-type set of fields
pub trait Searchable {
    /// Case-insensitive substring match against the searchable fields
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Exact-match column filters.
///
/// The per-type `match` on the field key is the accessor registry: a
/// record with no value at the field returns `None`, which never matches
/// an active constraint.
pub trait Filterable {
    fn field_value(&self, field: &str) -> Option<String>;
}

/// Mutually exclusive tab classification.
///
/// `None` excludes the record from every tab; pages without a catch-all
/// tab therefore hide such records, which mirrors the shipped behavior.
pub trait TabPartition {
    type Tab: Copy + PartialEq;
    fn tab(&self) -> Option<Self::Tab>;
}

// ============================================================================
// Sorting
// ============================================================================

/// Sort key of one field of one record.
///
/// Variant order defines the order of mixed values in an ascending sort:
/// missing values first, then date fields that failed to parse (kept
/// deterministic, by raw text), then everything comparable.
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue {
    Missing,
    BadDate(String),
    Bool(bool),
    Number(f64),
    /// Epoch milliseconds of a parsed date field
    Instant(i64),
    Text(String),
}

impl SortValue {
    /// Case-insensitive text key
    pub fn text(value: &str) -> Self {
        SortValue::Text(value.to_lowercase())
    }

    pub fn text_opt(value: Option<&str>) -> Self {
        match value {
            Some(v) if !v.trim().is_empty() => Self::text(v),
            _ => SortValue::Missing,
        }
    }

    /// Key for a known date field. Unparsable input becomes `BadDate`,
    /// never a silent zero.
    pub fn date(raw: &str) -> Self {
        match parse_instant_ms(raw) {
            Some(ms) => SortValue::Instant(ms),
            None => SortValue::BadDate(raw.to_string()),
        }
    }

    pub fn date_opt(raw: Option<&str>) -> Self {
        match raw {
            Some(r) if !r.trim().is_empty() => Self::date(r),
            _ => SortValue::Missing,
        }
    }

    pub fn number(value: f64) -> Self {
        SortValue::Number(value)
    }

    fn rank(&self) -> u8 {
        match self {
            SortValue::Missing => 0,
            SortValue::BadDate(_) => 1,
            SortValue::Bool(_) => 2,
            SortValue::Number(_) => 3,
            SortValue::Instant(_) => 4,
            SortValue::Text(_) => 5,
        }
    }

    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortValue::Missing, SortValue::Missing) => Ordering::Equal,
            (SortValue::BadDate(a), SortValue::BadDate(b)) => a.cmp(b),
            (SortValue::Bool(a), SortValue::Bool(b)) => a.cmp(b),
            (SortValue::Number(a), SortValue::Number(b)) => {
                a.partial_cmp(b).unwrap_or(Ordering::Equal)
            }
            (SortValue::Instant(a), SortValue::Instant(b)) => a.cmp(b),
            (SortValue::Text(a), SortValue::Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }

    fn is_bad_date(&self) -> bool {
        matches!(self, SortValue::BadDate(_))
    }
}

/// Per-field sort key extraction
pub trait Sortable {
    fn sort_value(&self, field: &str) -> SortValue;
}

/// Sort the list by one field.
///
/// `slice::sort_by` is stable, so ties keep their input order and the
/// result is reproducible. Date fields that failed to parse are reported
/// once per pass and ordered ahead of every valid instant.
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    let bad_dates = items
        .iter()
        .filter(|item| item.sort_value(field).is_bad_date())
        .count();
    if bad_dates > 0 {
        log::warn!(
            "sort by '{}': {} record(s) with unparsable dates ordered first",
            field,
            bad_dates
        );
    }

    items.sort_by(|a, b| {
        let cmp = a.sort_value(field).compare(&b.sort_value(field));
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

// ============================================================================
// Filtering
// ============================================================================

/// Reduce the list to records matching the search query.
/// An empty (or whitespace-only) query returns the input unchanged.
pub fn filter_list<T: Searchable>(items: Vec<T>, filter: &str) -> Vec<T> {
    let query = filter.trim();
    if query.is_empty() {
        return items;
    }
    items
        .into_iter()
        .filter(|item| item.matches_filter(query))
        .collect()
}

/// Apply the conjunction of per-field equality constraints.
/// Empty values and the "all" sentinel are unconstrained.
pub fn apply_column_filters<T: Filterable>(
    items: Vec<T>,
    filters: &HashMap<String, String>,
) -> Vec<T> {
    let active: Vec<(&str, &str)> = filters
        .iter()
        .filter(|(_, value)| !value.is_empty() && value.as_str() != FILTER_ALL)
        .map(|(field, value)| (field.as_str(), value.as_str()))
        .collect();
    if active.is_empty() {
        return items;
    }
    items
        .into_iter()
        .filter(|item| {
            active
                .iter()
                .all(|(field, value)| item.field_value(field).as_deref() == Some(*value))
        })
        .collect()
}

/// Number of constraints that actually narrow the list
pub fn active_filter_count(filters: &HashMap<String, String>) -> usize {
    filters
        .values()
        .filter(|value| !value.is_empty() && value.as_str() != FILTER_ALL)
        .count()
}

/// Keep only the records classified into the given tab
pub fn partition_by_tab<T: TabPartition>(items: Vec<T>, tab: T::Tab) -> Vec<T> {
    items
        .into_iter()
        .filter(|item| item.tab() == Some(tab))
        .collect()
}

// ============================================================================
// Composition
// ============================================================================

/// Snapshot of the UI state one list render depends on
pub struct ListQuery<'a, Tab: Copy + PartialEq> {
    pub tab: Option<Tab>,
    pub search: &'a str,
    pub filters: &'a HashMap<String, String>,
    pub sort_field: &'a str,
    pub sort_ascending: bool,
}

/// Run the whole pipeline: partition -> search -> column filters -> sort.
pub fn apply_list_query<T, Tab>(items: Vec<T>, query: &ListQuery<'_, Tab>) -> Vec<T>
where
    Tab: Copy + PartialEq,
    T: TabPartition<Tab = Tab> + Searchable + Filterable + Sortable,
{
    let mut data = match query.tab {
        Some(tab) => partition_by_tab(items, tab),
        None => items,
    };
    data = filter_list(data, query.search);
    data = apply_column_filters(data, query.filters);
    sort_list(&mut data, query.sort_field, query.sort_ascending);
    data
}

// ============================================================================
// Pagination
// ============================================================================

/// Total pages for a record count; an empty list still renders one page
pub fn page_count(total: usize, page_size: usize) -> usize {
    if total == 0 {
        1
    } else {
        (total + page_size - 1) / page_size
    }
}

/// Slice of the current page
pub fn page_slice<T: Clone>(items: &[T], page: usize, page_size: usize) -> Vec<T> {
    let start = page * page_size;
    let end = (start + page_size).min(items.len());
    items.get(start..end).unwrap_or(&[]).to_vec()
}

// ============================================================================
// UI helpers
// ============================================================================

/// Sort indicator for a column header
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

/// CSS class of the sort indicator span
pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

/// Search input with debounce and a clear button
#[component]
pub fn SearchInput(
    /// Current applied filter value
    #[prop(into)]
    value: Signal<String>,
    /// Callback invoked after the debounce delay
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    // Local input state, ahead of the debounce
    let (input_value, set_input_value) = signal(String::new());

    // Only the latest keystroke's timer may fire the callback
    let debounce_generation = StoredValue::new(0u64);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());

        let generation = debounce_generation.get_value() + 1;
        debounce_generation.set_value(generation);

        spawn_local(async move {
            TimeoutFuture::new(300).await;
            if debounce_generation.get_value() == generation {
                on_change.run(new_value.clone());
            }
        });
    };

    let clear_filter = move |_: MouseEvent| {
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                class=move || {
                    if value.get().trim().is_empty() {
                        "search-input__field"
                    } else {
                        "search-input__field search-input__field--active"
                    }
                }
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| {
                    handle_input_change(event_target_value(&ev));
                }
            />
            {move || {
                if input_value.get().is_empty() {
                    view! { <></> }.into_any()
                } else {
                    view! {
                        <button
                            class="search-input__clear"
                            on:click=clear_filter
                            title="Clear"
                        >
                            {crate::shared::icons::icon("x")}
                        </button>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Side {
        Internal,
        External,
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: u32,
        name: String,
        status: Option<String>,
        department: Option<String>,
        created_at: String,
    }

    fn row(id: u32, name: &str, status: Option<&str>, department: Option<&str>, created: &str) -> Row {
        Row {
            id,
            name: name.to_string(),
            status: status.map(Into::into),
            department: department.map(Into::into),
            created_at: created.to_string(),
        }
    }

    impl Searchable for Row {
        fn matches_filter(&self, filter: &str) -> bool {
            let query = filter.to_lowercase();
            self.id.to_string().contains(&query)
                || self.name.to_lowercase().contains(&query)
                || self
                    .status
                    .as_deref()
                    .unwrap_or("")
                    .to_lowercase()
                    .contains(&query)
        }
    }

    impl Filterable for Row {
        fn field_value(&self, field: &str) -> Option<String> {
            match field {
                "status" => self.status.clone(),
                "department" => self.department.clone(),
                _ => None,
            }
        }
    }

    impl TabPartition for Row {
        type Tab = Side;
        fn tab(&self) -> Option<Side> {
            match &self.department {
                Some(d) if !d.trim().is_empty() => Some(Side::Internal),
                _ => Some(Side::External),
            }
        }
    }

    impl Sortable for Row {
        fn sort_value(&self, field: &str) -> SortValue {
            match field {
                "name" => SortValue::text(&self.name),
                "status" => SortValue::text_opt(self.status.as_deref()),
                "created_at" => SortValue::date(&self.created_at),
                _ => SortValue::Missing,
            }
        }
    }

    fn sample() -> Vec<Row> {
        vec![
            row(1, "Boiler room", Some("Pending"), Some("Maintenance"), "2024-01-01"),
            row(2, "Atrium", Some("Approved"), None, "2024-03-01"),
            row(3, "Dock", None, Some("Logistics"), "2024-02-01"),
        ]
    }

    #[test]
    fn partition_is_mutually_exclusive() {
        let internal = partition_by_tab(sample(), Side::Internal);
        let external = partition_by_tab(sample(), Side::External);
        for item in &internal {
            assert!(!external.iter().any(|e| e.id == item.id));
        }
        assert_eq!(internal.len() + external.len(), sample().len());
    }

    #[test]
    fn search_matches_status_substring() {
        let kept = filter_list(sample(), "pending");
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].status.as_deref(), Some("Pending"));

        let none = filter_list(sample(), "approved")
            .iter()
            .any(|r| r.status.as_deref() == Some("Pending"));
        assert!(!none);
    }

    #[test]
    fn empty_search_is_identity() {
        assert_eq!(filter_list(sample(), "   "), sample());
    }

    #[test]
    fn column_filters_compose_order_independently() {
        let mut f1 = HashMap::new();
        f1.insert("status".to_string(), "Pending".to_string());
        let mut f2 = HashMap::new();
        f2.insert("department".to_string(), "Maintenance".to_string());
        let mut merged = HashMap::new();
        merged.extend(f1.clone());
        merged.extend(f2.clone());

        let sequential = apply_column_filters(apply_column_filters(sample(), &f1), &f2);
        let reversed = apply_column_filters(apply_column_filters(sample(), &f2), &f1);
        let at_once = apply_column_filters(sample(), &merged);
        assert_eq!(sequential, at_once);
        assert_eq!(reversed, at_once);
    }

    #[test]
    fn all_sentinel_and_empty_are_unconstrained() {
        let mut filters = HashMap::new();
        filters.insert("status".to_string(), FILTER_ALL.to_string());
        filters.insert("department".to_string(), String::new());
        assert_eq!(apply_column_filters(sample(), &filters), sample());
        assert_eq!(active_filter_count(&filters), 0);
    }

    #[test]
    fn missing_field_never_matches() {
        let mut filters = HashMap::new();
        filters.insert("status".to_string(), "Pending".to_string());
        let kept = apply_column_filters(sample(), &filters);
        // the record with no status at all is dropped, not treated as equal
        assert!(kept.iter().all(|r| r.status.is_some()));
    }

    #[test]
    fn descending_is_reverse_of_ascending_without_ties() {
        let mut asc = sample();
        sort_list(&mut asc, "created_at", true);
        let mut desc = sample();
        sort_list(&mut desc, "created_at", false);
        let mut reversed = asc.clone();
        reversed.reverse();
        assert_eq!(desc, reversed);
    }

    #[test]
    fn sort_by_created_at_descending() {
        let mut items = sample();
        sort_list(&mut items, "created_at", false);
        let dates: Vec<&str> = items.iter().map(|r| r.created_at.as_str()).collect();
        assert_eq!(dates, vec!["2024-03-01", "2024-02-01", "2024-01-01"]);
    }

    #[test]
    fn sort_is_stable_for_ties() {
        let mut items = vec![
            row(1, "same", None, None, "2024-01-01"),
            row(2, "same", None, None, "2024-01-01"),
            row(3, "same", None, None, "2024-01-01"),
        ];
        sort_list(&mut items, "name", true);
        let ids: Vec<u32> = items.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn bad_dates_order_before_valid_instants() {
        let mut items = vec![
            row(1, "a", None, None, "2024-02-01"),
            row(2, "b", None, None, "not-a-date"),
            row(3, "c", None, None, "2024-01-01"),
        ];
        sort_list(&mut items, "created_at", true);
        let ids: Vec<u32> = items.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn pipeline_is_idempotent() {
        let mut filters = HashMap::new();
        filters.insert("status".to_string(), FILTER_ALL.to_string());
        let query = ListQuery {
            tab: Some(Side::Internal),
            search: "o",
            filters: &filters,
            sort_field: "name",
            sort_ascending: true,
        };
        let once = apply_list_query(sample(), &query);
        let twice = apply_list_query(once.clone(), &query);
        assert_eq!(once, twice);
    }

    #[test]
    fn pagination_rounds_up_and_clamps() {
        assert_eq!(page_count(0, 50), 1);
        assert_eq!(page_count(50, 50), 1);
        assert_eq!(page_count(51, 50), 2);

        let items: Vec<u32> = (0..5).collect();
        assert_eq!(page_slice(&items, 1, 2), vec![2, 3]);
        assert_eq!(page_slice(&items, 2, 2), vec![4]);
        assert_eq!(page_slice(&items, 9, 2), Vec::<u32>::new());
    }
}
