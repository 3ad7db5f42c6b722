//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`startup`, `flash`, `permissions`) so each
//! component depends on small focused models. `variable_edit` holds the edit
//! pipeline that writes into them.

pub mod flash;
pub mod permissions;
pub mod startup;
pub mod variable_edit;
