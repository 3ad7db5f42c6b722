//! Edit pipeline for one startup variable.
//!
//! SYSTEM CONTEXT
//! ==============
//! `VariableBox` forwards control events here. The editor gates them on
//! permission and editability, debounces them, submits the latest value
//! through `StartupApi`, and reconciles the response into the shared
//! `StartupStore` without refetching.
//!
//! ERROR HANDLING
//! ==============
//! Update failures never escape: they are logged and posted as a flash under
//! the variable's own key. The loading flag always clears once the newest
//! edit settles.
//!
//! ORDERING
//! ========
//! Two sequences are kept. `edits` implements the debounce: a pending edit
//! proceeds only if no newer edit arrived during its window. `submissions`
//! tags outbound calls. An accepted value is applied unless a newer
//! submission was already applied, so a failed newer save never hides an
//! older one the server kept. Errors are reported only for the newest
//! submission.

#[cfg(test)]
#[path = "variable_edit_test.rs"]
mod variable_edit_test;

use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

use leptos::prelude::{RwSignal, Set};

use crate::net::error::ApiError;
use crate::net::types::{ServerVariable, VariableUpdate};
use crate::state::flash::FlashSink;
use crate::state::startup::StartupStore;
use crate::util::control_kind::{ControlKind, EditEvent};
use crate::util::debounce::{Clock, DEFAULT_WINDOW, Sequence};

/// Remote update call for a single variable.
#[allow(async_fn_in_trait)]
pub trait StartupApi {
    async fn update_variable(
        &self,
        server_uuid: &str,
        env_variable: &str,
        value: &str,
    ) -> Result<VariableUpdate, ApiError>;
}

/// Pending indicator shown over the control.
pub trait LoadingFlag {
    fn set_loading(&self, loading: bool);
}

impl LoadingFlag for RwSignal<bool> {
    fn set_loading(&self, loading: bool) {
        self.set(loading);
    }
}

/// Flash scope for a variable's errors.
pub fn flash_key(env_variable: &str) -> String {
    format!("server:startup:{env_variable}")
}

/// How a single edit ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditOutcome {
    /// A newer edit arrived inside the debounce window; nothing was sent.
    Superseded,
    /// The server accepted the value and the store was patched.
    Updated,
    /// The call failed; the error was posted under the variable's key.
    Failed(ApiError),
    /// The call completed after a newer result was already applied, or it
    /// failed after a newer one was issued; result dropped.
    Stale,
}

/// Debounced editor bound to one variable.
pub struct VariableEditor<A, C> {
    env_variable: String,
    flash_key: String,
    window: Duration,
    api: A,
    clock: C,
    store: Rc<dyn StartupStore>,
    flashes: Rc<dyn FlashSink>,
    loading: Rc<dyn LoadingFlag>,
    edits: Sequence,
    submissions: Sequence,
    /// Submission token of the last response written into the store.
    applied: Cell<u64>,
}

impl<A, C> VariableEditor<A, C>
where
    A: StartupApi + 'static,
    C: Clock + 'static,
{
    pub fn new(
        env_variable: impl Into<String>,
        api: A,
        clock: C,
        store: Rc<dyn StartupStore>,
        flashes: Rc<dyn FlashSink>,
        loading: Rc<dyn LoadingFlag>,
    ) -> Self {
        let env_variable = env_variable.into();
        Self {
            flash_key: flash_key(&env_variable),
            env_variable,
            window: DEFAULT_WINDOW,
            api,
            clock,
            store,
            flashes,
            loading,
            edits: Sequence::default(),
            submissions: Sequence::default(),
            applied: Cell::new(0),
        }
    }

    #[must_use]
    pub fn with_window(mut self, window: Duration) -> Self {
        self.window = window;
        self
    }

    pub fn flash_key(&self) -> &str {
        &self.flash_key
    }

    /// Turn a control event into a pending submission.
    ///
    /// Returns `None` (and does nothing) when the user lacks the update
    /// capability, the variable is read-only, or the event does not apply to
    /// the variable's control kind.
    pub fn handle(
        self: &Rc<Self>,
        variable: &ServerVariable,
        can_update: bool,
        event: EditEvent,
    ) -> Option<impl Future<Output = EditOutcome> + use<A, C>> {
        if !can_update || !variable.is_editable {
            return None;
        }
        let kind = ControlKind::classify(&variable.rules);
        let value = event.submission_value(&kind, &variable.server_value)?;
        Some(self.submit(value))
    }

    /// Queue `value` for submission after the debounce window.
    ///
    /// The loading flag is raised before this returns. The returned future
    /// must be driven (e.g. with `spawn_local`) for anything to be sent.
    pub fn submit(self: &Rc<Self>, value: String) -> impl Future<Output = EditOutcome> + use<A, C> {
        self.loading.set_loading(true);
        let token = self.edits.next();
        let this = Rc::clone(self);
        async move {
            this.clock.sleep(this.window).await;
            if !this.edits.is_latest(token) {
                return EditOutcome::Superseded;
            }
            this.send(token, value).await
        }
    }

    async fn send(&self, edit_token: u64, value: String) -> EditOutcome {
        self.flashes.clear(&self.flash_key);
        let submission = self.submissions.next();
        let server_uuid = self.store.server_uuid();

        let result = self
            .api
            .update_variable(&server_uuid, &self.env_variable, &value)
            .await;

        let outcome = match result {
            Ok(update) if submission > self.applied.get() => {
                self.applied.set(submission);
                self.store.mutate(
                    &mut |state| {
                        state.apply_variable_update(&update);
                    },
                    false,
                );
                EditOutcome::Updated
            }
            Err(err) if self.submissions.is_latest(submission) => {
                leptos::logging::error!(
                    "startup variable update failed: variable={} error={err}",
                    self.env_variable
                );
                self.flashes.add_error(&self.flash_key, err.to_string());
                EditOutcome::Failed(err)
            }
            Ok(_) | Err(_) => {
                leptos::logging::log!(
                    "dropping stale startup update: variable={} value={value}",
                    self.env_variable
                );
                EditOutcome::Stale
            }
        };

        // A newer edit still waiting out its window owns the flag now.
        if self.edits.is_latest(edit_token) {
            self.loading.set_loading(false);
        }
        outcome
    }
}
