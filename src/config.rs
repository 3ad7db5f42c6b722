//! Runtime configuration for the startup page.
//!
//! Provided once by `App` as Leptos context; components fall back to the
//! defaults when none was provided.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use leptos::prelude::use_context;

use crate::util::debounce::DEFAULT_WINDOW;

const DEFAULT_API_BASE: &str = "/api/client";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PanelConfig {
    /// Prefix for client API routes, without trailing slash.
    pub api_base: String,
    /// Quiet period before a variable edit is sent.
    pub debounce: Duration,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            debounce: DEFAULT_WINDOW,
        }
    }
}

impl PanelConfig {
    /// Config from the current reactive context, or the defaults.
    pub fn from_context() -> Self {
        use_context::<Self>().unwrap_or_default()
    }
}
