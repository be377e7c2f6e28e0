use leptos::prelude::*;

use crate::state::AppState;

/// Transient notification; auto-dismissed by [`AppState::show_toast`].
#[component]
pub fn Toast() -> impl IntoView {
    let state = expect_context::<AppState>();

    view! {
        {move || {
            state.toast.get().map(|message| {
                view! {
                    <div class="toast">{message}</div>
                }
            })
        }}
    }
}
