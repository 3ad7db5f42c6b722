//! Inline renderer for flash messages of one scope key.

use leptos::prelude::*;

use crate::state::flash::{FlashMessage, FlashState};

/// Render the flash messages under `by_key` (unscoped ones when omitted).
#[component]
pub fn FlashMessageRender(#[prop(into, optional)] by_key: Option<String>) -> impl IntoView {
    let flashes = expect_context::<RwSignal<FlashState>>();
    let messages = Memo::new(move |_| flashes.with(|f| f.by_key(by_key.as_deref())));

    view! {
        <Show when=move || messages.with(|m| !m.is_empty())>
            <div class="flash-messages">
                <For
                    each=move || messages.get()
                    key=|m| m.id
                    children=move |message: FlashMessage| {
                        let id = message.id;
                        view! {
                            <div class="flash flash--error" role="alert">
                                {message
                                    .title
                                    .map(|title| view! { <strong class="flash__title">{title}</strong> })}
                                <span class="flash__message">{message.message}</span>
                                <button
                                    class="flash__dismiss"
                                    title="Dismiss"
                                    on:click=move |_| flashes.update(|f| f.dismiss(id))
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    }
                />
            </div>
        </Show>
    }
}
