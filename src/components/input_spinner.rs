//! Overlay spinner shown over an input while a save is in flight.

use leptos::prelude::*;

#[component]
pub fn InputSpinner(#[prop(into)] visible: Signal<bool>, children: Children) -> impl IntoView {
    view! {
        <div class="input-spinner">
            <Show when=move || visible.get()>
                <div class="input-spinner__overlay">
                    <span class="spinner" aria-label="Saving"></span>
                </div>
            </Show>
            {children()}
        </div>
    }
}
