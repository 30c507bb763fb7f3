//! Cache key builders.
//!
//! Centralising key construction prevents typos and makes it easy to find
//! every key the application uses.

/// Prefix applied to all VodBridge cache keys.
const PREFIX: &str = "vodbridge";

/// Cache key for the root-level folder/session tree.
pub fn root_tree() -> String {
    format!("{PREFIX}:tree:root")
}
