//! Session (video) domain entities.

pub mod model;
pub mod view;

pub use model::{Session, SessionState};
pub use view::SessionView;
