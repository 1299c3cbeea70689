//! Process environment adapter.

use crate::domain::ports::Environment;

/// Reads variables from the current process environment.
///
/// Variables holding non-UTF-8 data are treated as unset.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}
