pub mod field_error;
pub mod filter_panel;
pub mod pagination_controls;
pub mod table;
