//! Networking modules for the panel's REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs HTTP calls, `types` defines the wire schema, and `error`
//! turns failed responses into user-facing messages.

pub mod api;
pub mod error;
pub mod types;
