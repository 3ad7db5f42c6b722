//! Keyed flash messages.
//!
//! DESIGN
//! ======
//! Messages carry an optional scope key (e.g. `server:startup:MOTD`) so each
//! variable box renders and clears only its own errors while other boxes on
//! the same page keep theirs.

#[cfg(test)]
#[path = "flash_test.rs"]
mod flash_test;

use leptos::prelude::{RwSignal, Update};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlashMessage {
    pub id: u64,
    pub key: Option<String>,
    pub title: Option<String>,
    pub message: String,
}

/// All flash messages currently shown on the page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FlashState {
    pub items: Vec<FlashMessage>,
    next_id: u64,
}

impl FlashState {
    /// Append a message and return its id.
    fn add(&mut self, key: Option<&str>, title: Option<&str>, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        self.items.push(FlashMessage {
            id: self.next_id,
            key: key.map(str::to_owned),
            title: title.map(str::to_owned),
            message: message.into(),
        });
        self.next_id
    }

    /// Drop every message scoped to `key`.
    pub fn clear(&mut self, key: &str) {
        self.items.retain(|m| m.key.as_deref() != Some(key));
    }

    /// Drop every message, e.g. when the page switches server.
    pub fn clear_all(&mut self) {
        self.items.clear();
    }

    /// Replace whatever is under `key` with a single error.
    pub fn clear_and_add_error(&mut self, key: &str, message: impl Into<String>) -> u64 {
        self.clear(key);
        self.add(Some(key), Some("Error"), message)
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|m| m.id != id);
    }

    /// Messages scoped to `key`, oldest first. `None` selects unscoped ones.
    pub fn by_key(&self, key: Option<&str>) -> Vec<FlashMessage> {
        self.items
            .iter()
            .filter(|m| m.key.as_deref() == key)
            .cloned()
            .collect()
    }
}

/// Sink the edit pipeline reports into.
pub trait FlashSink {
    fn clear(&self, key: &str);

    fn add_error(&self, key: &str, message: String);
}

impl FlashSink for RwSignal<FlashState> {
    fn clear(&self, key: &str) {
        self.update(|f| f.clear(key));
    }

    fn add_error(&self, key: &str, message: String) {
        self.update(|f| {
            f.clear_and_add_error(key, message);
        });
    }
}
