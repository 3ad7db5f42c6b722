//! Startup-page state: the server's variable list and derived invocation.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the local projection of `GET …/startup`. The page fetch fills it,
//! and variable edits patch single entries from the server's response without
//! refetching. Bumping `revalidate_seq` asks the page to refetch.

#[cfg(test)]
#[path = "startup_test.rs"]
mod startup_test;

use std::collections::BTreeMap;

use leptos::prelude::{RwSignal, Update, WithUntracked};

use crate::net::types::{ServerVariable, StartupData, VariableUpdate};

/// Variable collection plus startup command for one server.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StartupState {
    /// Server the data belongs to (UUID string).
    pub server_uuid: String,
    /// Variables in server order, one per `env_variable`.
    pub variables: Vec<ServerVariable>,
    /// Startup command with current values substituted.
    pub invocation: String,
    /// Startup command template with `{{VAR}}` placeholders.
    pub raw_startup_command: String,
    /// Egg docker images, display name → image.
    pub docker_images: BTreeMap<String, String>,
    pub loading: bool,
    pub error: Option<String>,
    /// Incremented to request a remote refetch.
    pub revalidate_seq: u64,
}

impl StartupState {
    pub fn for_server(server_uuid: impl Into<String>) -> Self {
        Self {
            server_uuid: server_uuid.into(),
            loading: true,
            ..Self::default()
        }
    }

    /// Replace everything fetched from the server.
    pub fn load(&mut self, data: StartupData) {
        self.variables = data.variables;
        self.invocation = data.invocation;
        self.raw_startup_command = data.raw_startup_command;
        self.docker_images = data.docker_images;
        self.loading = false;
        self.error = None;
    }

    /// Swap in the server's canonical record for the matching variable and
    /// take the new invocation. Returns whether an entry was replaced.
    pub fn apply_variable_update(&mut self, update: &VariableUpdate) -> bool {
        self.invocation.clone_from(&update.invocation);
        if let Some(raw) = &update.raw_startup_command {
            self.raw_startup_command.clone_from(raw);
        }
        match self
            .variables
            .iter_mut()
            .find(|v| v.env_variable == update.variable.env_variable)
        {
            Some(slot) => {
                *slot = update.variable.clone();
                true
            }
            None => false,
        }
    }

    pub fn variable(&self, env_variable: &str) -> Option<&ServerVariable> {
        self.variables.iter().find(|v| v.env_variable == env_variable)
    }
}

/// Handle onto the shared startup state.
///
/// `revalidate = true` additionally asks the owner to refetch from the server.
pub trait StartupStore {
    fn server_uuid(&self) -> String;

    fn mutate(&self, update: &mut dyn FnMut(&mut StartupState), revalidate: bool);

    fn replace(&self, state: StartupState, revalidate: bool) {
        let mut next = Some(state);
        self.mutate(
            &mut |current| {
                if let Some(state) = next.take() {
                    *current = state;
                }
            },
            revalidate,
        );
    }
}

impl StartupStore for RwSignal<StartupState> {
    fn server_uuid(&self) -> String {
        self.with_untracked(|s| s.server_uuid.clone())
    }

    fn mutate(&self, update: &mut dyn FnMut(&mut StartupState), revalidate: bool) {
        self.update(|s| {
            update(s);
            if revalidate {
                s.revalidate_seq += 1;
            }
        });
    }
}
