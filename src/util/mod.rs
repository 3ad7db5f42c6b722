//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure logic lives here so components stay thin and the rules can be tested
//! without a browser.

pub mod control_kind;
pub mod debounce;
