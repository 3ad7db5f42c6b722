//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the startup page's cards and chrome while reading and
//! writing shared state from Leptos context providers.

pub mod flash_message;
pub mod input_spinner;
pub mod variable_box;
