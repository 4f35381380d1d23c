use axum::{
    routing::{get, post},
    Router,
};

use crate::api::handlers;

/// Route configuration for the whole application
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // SYSTEM USERS (registration + review)
        // ========================================
        .route(
            "/api/system/users",
            get(handlers::users::list).post(handlers::users::register),
        )
        .route(
            "/api/system/users/:id",
            get(handlers::users::get_by_id)
                .put(handlers::users::update)
                .delete(handlers::users::delete),
        )
        .route(
            "/api/system/users/:id/review",
            post(handlers::users::review),
        )
        // ========================================
        // F001 Locations
        // ========================================
        .route(
            "/api/locations",
            get(handlers::f001_location::list_all).post(handlers::f001_location::upsert),
        )
        .route(
            "/api/locations/:id",
            get(handlers::f001_location::get_by_id).delete(handlers::f001_location::delete),
        )
        .route(
            "/api/locations/testdata",
            post(handlers::f001_location::insert_test_data),
        )
        // ========================================
        // F002 Assets
        // ========================================
        .route(
            "/api/assets",
            get(handlers::f002_asset::list_all).post(handlers::f002_asset::upsert),
        )
        .route(
            "/api/assets/:id",
            get(handlers::f002_asset::get_by_id).delete(handlers::f002_asset::delete),
        )
        // ========================================
        // F003 Work orders
        // ========================================
        .route(
            "/api/work_orders",
            get(handlers::f003_work_order::list_all).post(handlers::f003_work_order::upsert),
        )
        .route(
            "/api/work_orders/:id",
            get(handlers::f003_work_order::get_by_id).delete(handlers::f003_work_order::delete),
        )
        .route(
            "/api/work_orders/:id/history",
            get(handlers::f003_work_order::history),
        )
        // ========================================
        // F004 Bookings
        // ========================================
        .route(
            "/api/bookings",
            get(handlers::f004_booking::list_all).post(handlers::f004_booking::upsert),
        )
        .route(
            "/api/bookings/:id",
            get(handlers::f004_booking::get_by_id).delete(handlers::f004_booking::delete),
        )
}
