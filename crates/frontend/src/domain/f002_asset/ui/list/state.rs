use super::AssetRow;
use leptos::prelude::*;
use std::collections::HashMap;

#[derive(Clone, Debug)]
pub struct AssetListState {
    pub items: Vec<AssetRow>,
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

impl Default for AssetListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            search_query: String::new(),
            filters: HashMap::new(),
            sort_field: "name".to_string(),
            sort_ascending: true,
            page: 0,
            page_size: 50,
            total_count: 0,
            total_pages: 1,
            is_loaded: false,
        }
    }
}

pub fn create_state() -> RwSignal<AssetListState> {
    RwSignal::new(AssetListState::default())
}
