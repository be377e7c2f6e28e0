mod api;
mod components;
mod state;
mod storage;

use leptos::mount::mount_to_body;
use leptos::prelude::*;

use components::sidebar::Sidebar;
use components::toast::Toast;
use components::workspace::Workspace;
use state::AppState;

/// Root application component.
#[component]
fn App() -> impl IntoView {
    let state = AppState::provide();

    // Startup: share-link fragment first, persisted session otherwise.
    state.load();

    view! {
        <div class="app-container">
            <Sidebar />
            <Workspace />
        </div>
        <Toast />
    }
}

fn main() {
    console_log::init_with_level(log::Level::Debug).expect("Failed to init logger");
    mount_to_body(App);
}
