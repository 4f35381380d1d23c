//! Shared contracts between frontend and backend: domain aggregates,
//! DTOs and the validation-error map exchanged over the wire.

pub mod domain;
pub mod shared;
pub mod system;
