//! Custom Axum extractors.

mod acting_user;

pub use acting_user::ActingUser;
