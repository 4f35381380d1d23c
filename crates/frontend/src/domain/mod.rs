pub mod f001_location;
pub mod f002_asset;
pub mod f003_work_order;
pub mod f004_booking;
