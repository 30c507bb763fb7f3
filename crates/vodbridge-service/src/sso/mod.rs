//! Identity-provider single sign-on handshake.

mod service;

pub use service::{SsoRequest, SsoService};
