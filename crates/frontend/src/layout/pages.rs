//! Page registry: the single source of truth for the page.key -> View
//! mapping. All navigable pages are declared here in one place.

use crate::domain::f002_asset::ui::list::AssetList;
use crate::domain::f003_work_order::ui::list::WorkOrderList;
use crate::domain::f004_booking::ui::list::BookingList;
use crate::system::users::ui::list::UsersList;
use leptos::prelude::*;

/// Navigable top-level pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    WorkOrders,
    Bookings,
    Assets,
    Users,
}

impl Page {
    /// Pages in sidebar order
    pub const ALL: [Page; 4] = [Page::WorkOrders, Page::Bookings, Page::Assets, Page::Users];

    pub fn label(&self) -> &'static str {
        match self {
            Page::WorkOrders => "Work orders",
            Page::Bookings => "Bookings",
            Page::Assets => "Assets",
            Page::Users => "Users",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            Page::WorkOrders => "clipboard",
            Page::Bookings => "calendar",
            Page::Assets => "wrench",
            Page::Users => "users",
        }
    }
}

/// Resolve the active page to its root component
pub fn render_page(page: Page) -> AnyView {
    match page {
        Page::WorkOrders => view! { <WorkOrderList /> }.into_any(),
        Page::Bookings => view! { <BookingList /> }.into_any(),
        Page::Assets => view! { <AssetList /> }.into_any(),
        Page::Users => view! { <UsersList /> }.into_any(),
    }
}
