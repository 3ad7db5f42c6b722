//! Editor card for one startup variable.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered once per variable by the startup page. The control is picked from
//! the variable's rules (`ControlKind`); edits are handed to a
//! `VariableEditor` that debounces them, saves through the HTTP API and
//! patches the shared `StartupState`. Errors land in this card's own flash
//! slot.

#[cfg(test)]
#[path = "variable_box_test.rs"]
mod variable_box_test;

use std::rc::Rc;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::flash_message::FlashMessageRender;
use crate::components::input_spinner::InputSpinner;
use crate::config::PanelConfig;
use crate::net::api::HttpStartupApi;
use crate::net::types::ServerVariable;
use crate::state::flash::FlashState;
use crate::state::permissions::{PermissionState, STARTUP_UPDATE};
use crate::state::startup::StartupState;
use crate::state::variable_edit::{EditOutcome, VariableEditor};
use crate::util::control_kind::{ControlKind, EditEvent};
use crate::util::debounce::BrowserClock;

/// Whether interactions with the control are suppressed.
fn is_locked(can_update: bool, variable: &ServerVariable) -> bool {
    !can_update || !variable.is_editable
}

/// Whether the control may now show a value the store never took.
fn needs_resync(outcome: &EditOutcome) -> bool {
    matches!(outcome, EditOutcome::Failed(_))
}

fn read_only_badge(variable: &ServerVariable) -> Option<&'static str> {
    (!variable.is_editable).then_some("Read Only")
}

/// One variable's label, control, spinner and description.
///
/// `variable` should only notify when the record actually changed; the
/// startup page passes a per-variable `Memo` for that.
#[component]
pub fn VariableBox(#[prop(into)] variable: Signal<ServerVariable>) -> impl IntoView {
    let startup = expect_context::<RwSignal<StartupState>>();
    let flashes = expect_context::<RwSignal<FlashState>>();
    let permissions = expect_context::<RwSignal<PermissionState>>();
    let config = PanelConfig::from_context();

    let loading = RwSignal::new(false);
    let name = variable.with_untracked(|v| v.env_variable.clone());
    let editor = VariableEditor::new(
        name.clone(),
        HttpStartupApi::new(config.api_base),
        BrowserClock,
        Rc::new(startup),
        Rc::new(flashes),
        Rc::new(loading),
    )
    .with_window(config.debounce);
    let flash_key = editor.flash_key().to_owned();
    let editor = StoredValue::new_local(Rc::new(editor));

    let can_update = Memo::new(move |_| permissions.with(|p| p.has_all(&[STARTUP_UPDATE])));
    let resync = RwSignal::new(0_u64);
    let kind = Memo::new(move |_| variable.with(|v| ControlKind::classify(&v.rules)));
    let locked = move || variable.with(|v| is_locked(can_update.get(), v));

    let on_edit = move |event: EditEvent| {
        let current = variable.get_untracked();
        let pending = editor.with_value(|e| e.handle(&current, can_update.get_untracked(), event));
        if let Some(pending) = pending {
            leptos::task::spawn_local(async move {
                if needs_resync(&pending.await) {
                    resync.update(|n| *n += 1);
                }
            });
        }
    };

    // Initial values are read untracked: the text and select controls are
    // uncontrolled so a store patch never resets what the user is typing.
    let control = move || {
        let name = name.clone();
        match kind.get() {
            ControlKind::Boolean { .. } => view! {
                <label class="variable-box__switch">
                    <input
                        type="checkbox"
                        role="switch"
                        name=name
                        prop:checked=move || {
                            resync.track();
                            kind.with(|k| variable.with(|v| k.is_checked(&v.server_value)))
                        }
                        disabled=locked
                        on:change=move |_| on_edit(EditEvent::Toggle)
                    />
                    <span class="variable-box__switch-track"></span>
                </label>
            }
            .into_any(),
            ControlKind::Enumerated { options } => {
                let initial = variable.with_untracked(|v| v.server_value.clone());
                view! {
                    <select
                        class="variable-box__select"
                        name=name
                        disabled=locked
                        on:change=move |ev| on_edit(EditEvent::Select(event_target_value(&ev)))
                    >
                        {options
                            .into_iter()
                            .map(|option| {
                                let selected = option == initial;
                                let label = option.clone();
                                view! {
                                    <option value=option selected=selected>
                                        {label}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                }
                .into_any()
            }
            ControlKind::Text => {
                let (initial, placeholder) =
                    variable.with_untracked(|v| (v.server_value.clone(), v.default_value.clone()));
                view! {
                    <input
                        type="text"
                        class="variable-box__input"
                        name=name
                        value=initial
                        placeholder=placeholder
                        readonly=locked
                        on:keyup=move |ev| on_edit(EditEvent::Input(event_target_value(&ev)))
                    />
                }
                .into_any()
            }
        }
    };

    view! {
        <div class="variable-box">
            <FlashMessageRender by_key=flash_key/>
            <div class="variable-box__label">
                {move || {
                    variable
                        .with(read_only_badge)
                        .map(|badge| view! { <span class="variable-box__badge">{badge}</span> })
                }}
                {move || variable.with(|v| v.name.clone())}
            </div>
            <InputSpinner visible=loading>{control}</InputSpinner>
            <p class="variable-box__description">{move || variable.with(|v| v.description.clone())}</p>
        </div>
    }
}
