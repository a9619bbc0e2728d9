//! Inline error banner for auth forms.

use leptos::prelude::*;

/// Renders `message` when it is non-empty.
#[component]
pub fn FormError(message: RwSignal<String>) -> impl IntoView {
    view! {
        <Show when=move || !message.get().is_empty()>
            <div class="form-error" role="alert">{move || message.get()}</div>
        </Show>
    }
}
