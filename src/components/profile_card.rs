//! Profile details grid shown on the dashboard.

#[cfg(test)]
#[path = "profile_card_test.rs"]
mod profile_card_test;

use leptos::prelude::*;

use crate::net::types::AuthUser;

pub const ACCOUNT_STATUS_NOTE: &str =
    "Your account is active and ready to use. You can access all features available for your role.";

/// Label/value pairs in display order.
pub(crate) fn profile_rows(user: &AuthUser) -> Vec<(&'static str, String)> {
    vec![
        ("Name", user.full_name()),
        ("Email", user.email.clone()),
        ("Phone", user.phone.clone()),
        ("Role", user.role.label().to_owned()),
    ]
}

#[component]
pub fn ProfileCard(user: AuthUser) -> impl IntoView {
    let rows = profile_rows(&user);
    view! {
        <div class="profile-card">
            <div class="profile-card__grid">
                {rows
                    .into_iter()
                    .map(|(label, value)| {
                        view! {
                            <div class="profile-card__field">
                                <p class="profile-card__label">{label}</p>
                                <p class="profile-card__value">{value}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="profile-card__status">
                <h3>"Account Status"</h3>
                <p>{ACCOUNT_STATUS_NOTE}</p>
            </div>
        </div>
    }
}
