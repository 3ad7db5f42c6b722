//! Routed page components.

pub mod startup;
