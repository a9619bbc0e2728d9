//! Portal name and optional tagline shown atop every screen.

use leptos::prelude::*;

pub const PORTAL_NAME: &str = "eStores WorkHub";

#[component]
pub fn BrandHeader(#[prop(optional)] subtitle: Option<&'static str>) -> impl IntoView {
    view! {
        <div class="brand-header">
            <div class="brand-header__mark" aria-hidden="true">"WH"</div>
            <h1 class="brand-header__title">{PORTAL_NAME}</h1>
            {subtitle.map(|text| view! { <p class="brand-header__subtitle">{text}</p> })}
        </div>
    }
}
