use super::{BookingRow, BookingTab};
use leptos::prelude::*;
use std::collections::HashMap;

#[derive(Clone, Debug)]
pub struct BookingListState {
    pub items: Vec<BookingRow>,
    pub active_tab: BookingTab,
    pub search_query: String,
    pub filters: HashMap<String, String>,
    pub sort_field: String,
    pub sort_ascending: bool,
    pub page: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: usize,
    pub is_loaded: bool,
}

impl Default for BookingListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            active_tab: BookingTab::Pending,
            search_query: String::new(),
            filters: HashMap::new(),
            sort_field: "starts_at".to_string(),
            sort_ascending: true,
            page: 0,
            page_size: 50,
            total_count: 0,
            total_pages: 1,
            is_loaded: false,
        }
    }
}

pub fn create_state() -> RwSignal<BookingListState> {
    RwSignal::new(BookingListState::default())
}
