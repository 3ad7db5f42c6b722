//! Capabilities the current user holds on the server being viewed.

#[cfg(test)]
#[path = "permissions_test.rs"]
mod permissions_test;

/// Capability required to change startup variables.
pub const STARTUP_UPDATE: &str = "startup.update";

/// Granted capability strings as reported by the panel (`"*"` grants all).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PermissionState {
    pub granted: Vec<String>,
}

impl PermissionState {
    pub fn new(granted: Vec<String>) -> Self {
        Self { granted }
    }

    /// Whether `action` is granted. A trailing `*` in `action` matches any
    /// granted capability with that prefix (`"startup.*"`).
    pub fn has(&self, action: &str) -> bool {
        if self.granted.iter().any(|p| p == "*") {
            return true;
        }
        match action.strip_suffix('*') {
            Some(prefix) => self.granted.iter().any(|p| p.starts_with(prefix)),
            None => self.granted.iter().any(|p| p == action),
        }
    }

    /// Whether every one of `actions` is granted.
    pub fn has_all(&self, actions: &[&str]) -> bool {
        actions.iter().all(|a| self.has(a))
    }
}
