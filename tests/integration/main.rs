//! Integration tests: the real router wired over a scripted remote
//! platform.

mod helpers;

mod browse_test;
mod health_test;
mod search_test;
mod session_test;
mod sso_test;
