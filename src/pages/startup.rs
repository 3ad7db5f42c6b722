//! Startup page: startup command plus one editor card per variable.
//!
//! SYSTEM CONTEXT
//! ==============
//! Routed at `/server/{id}/startup`. Fetches the startup data and the user's
//! permissions whenever the server changes or `revalidate_seq` is bumped,
//! then renders a `VariableBox` per variable.
//!
//! DESIGN
//! ======
//! Each card receives a per-variable `Memo`, so a patch to one variable (or
//! to the invocation) does not re-run any other card's reactive closures.

#[cfg(test)]
#[path = "startup_test.rs"]
mod startup_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::flash_message::FlashMessageRender;
use crate::components::variable_box::VariableBox;
use crate::net::error::ApiError;
use crate::net::types::StartupData;
use crate::state::flash::FlashState;
use crate::state::permissions::PermissionState;
use crate::state::startup::{StartupState, StartupStore};

/// Whether `state` belongs to a different server than `server_uuid`.
fn server_changed(state: &StartupState, server_uuid: &str) -> bool {
    state.server_uuid != server_uuid
}

/// Fold a startup fetch into `state`, ignoring results for another server.
fn apply_startup_result(state: &mut StartupState, server_uuid: &str, result: Result<StartupData, ApiError>) {
    if server_changed(state, server_uuid) {
        return;
    }
    match result {
        Ok(data) => state.load(data),
        Err(e) => {
            state.loading = false;
            state.error = Some(e.to_string());
        }
    }
}

/// A failed permission fetch leaves the user with no capabilities.
fn permissions_from_result(result: Result<Vec<String>, ApiError>) -> PermissionState {
    PermissionState::new(result.unwrap_or_default())
}

#[component]
pub fn StartupPage() -> impl IntoView {
    let startup = expect_context::<RwSignal<StartupState>>();
    let permissions = expect_context::<RwSignal<PermissionState>>();
    let flashes = expect_context::<RwSignal<FlashState>>();
    let params = use_params_map();

    let server_uuid = Memo::new(move |_| params.with(|p| p.get("id").unwrap_or_default()));
    let revalidate = Memo::new(move |_| startup.with(|s| s.revalidate_seq));

    Effect::new(move || {
        let uuid = server_uuid.get();
        revalidate.track();
        if uuid.is_empty() {
            return;
        }
        if startup.with_untracked(|s| server_changed(s, &uuid)) {
            startup.replace(StartupState::for_server(uuid.clone()), false);
            permissions.set(PermissionState::default());
            flashes.update(FlashState::clear_all);
        } else {
            startup.update(|s| s.loading = true);
        }

        #[cfg(feature = "hydrate")]
        {
            let api_base = crate::config::PanelConfig::from_context().api_base;
            leptos::task::spawn_local(async move {
                let result = crate::net::api::fetch_startup(&api_base, &uuid).await;
                if let Err(e) = &result {
                    leptos::logging::warn!("startup fetch failed: server={uuid} error={e}");
                }
                startup.update(|s| apply_startup_result(s, &uuid, result));

                let result = crate::net::api::fetch_permissions(&api_base, &uuid).await;
                if let Err(e) = &result {
                    leptos::logging::warn!("permission fetch failed: server={uuid} error={e}");
                }
                if startup.with_untracked(|s| !server_changed(s, &uuid)) {
                    permissions.set(permissions_from_result(result));
                }
            });
        }
    });

    let keys = Memo::new(move |_| {
        startup.with(|s| {
            s.variables
                .iter()
                .map(|v| v.env_variable.clone())
                .collect::<Vec<_>>()
        })
    });
    let invocation = Memo::new(move |_| startup.with(|s| s.invocation.clone()));
    let raw_command = Memo::new(move |_| startup.with(|s| s.raw_startup_command.clone()));
    let docker_images = Memo::new(move |_| {
        startup.with(|s| {
            s.docker_images
                .iter()
                .map(|(name, image)| (name.clone(), image.clone()))
                .collect::<Vec<_>>()
        })
    });

    view! {
        <div class="startup-page">
            <FlashMessageRender/>
            <section class="startup-page__command">
                <h2>"Startup Command"</h2>
                <pre class="startup-page__invocation" title=move || raw_command.get()>
                    {move || invocation.get()}
                </pre>
            </section>

            <Show when=move || !docker_images.with(Vec::is_empty)>
                <section class="startup-page__images">
                    <h2>"Docker Images"</h2>
                    <ul>
                        <For
                            each=move || docker_images.get()
                            key=|(name, _)| name.clone()
                            children=|(name, image)| {
                                view! {
                                    <li>
                                        <span class="startup-page__image-name">{name}</span>
                                        <code>{image}</code>
                                    </li>
                                }
                            }
                        />
                    </ul>
                </section>
            </Show>

            <Show when=move || startup.with(|s| s.loading && s.variables.is_empty())>
                <p class="startup-page__status">"Loading…"</p>
            </Show>
            <Show when=move || startup.with(|s| s.error.is_some())>
                <p class="startup-page__status startup-page__status--error">
                    {move || startup.with(|s| s.error.clone().unwrap_or_default())}
                </p>
            </Show>

            <div class="startup-page__variables">
                <For
                    each=move || keys.get()
                    key=Clone::clone
                    children=move |env_variable: String| {
                        let variable = Memo::new(move |_| {
                            startup.with(|s| s.variable(&env_variable).cloned().unwrap_or_default())
                        });
                        view! { <VariableBox variable=variable/> }
                    }
                />
            </div>
        </div>
    }
}
