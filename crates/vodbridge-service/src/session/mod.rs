//! Session lookup and presentation.

mod service;

pub use service::SessionDirectory;
