//! Full-screen placeholder while a session check or profile fetch is pending.

use leptos::prelude::*;

#[component]
pub fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="loading-screen">
            <div class="loading-screen__label">"Loading..."</div>
        </div>
    }
}
