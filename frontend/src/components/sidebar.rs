use leptos::ev;
use leptos::prelude::*;

use crate::state::AppState;

/// Sidebar showing the chat list with per-chat delete, and a "New page"
/// button.
#[component]
pub fn Sidebar() -> impl IntoView {
    let state = expect_context::<AppState>();

    let on_new = {
        let state = state.clone();
        move |_| state.new_chat()
    };

    view! {
        <aside class="sidebar" class:collapsed=move || !state.sidebar_open.get()>
            <div class="sidebar-header">
                <h2>"Pagecraft"</h2>
                <button class="new-chat-btn" on:click=on_new>
                    "+ New page"
                </button>
            </div>
            <div class="chat-list">
                {
                    let state = state.clone();
                    move || {
                    let chats = state.session.get().chats;
                    if chats.is_empty() {
                        view! {
                            <div class="chat-list-empty">
                                "No pages yet"
                            </div>
                        }.into_any()
                    } else {
                        let state = state.clone();
                        view! {
                            <For
                                each=move || state.session.get().chats
                                key=|c| c.id.clone()
                                let:chat
                            >
                                {
                                    let state = state.clone();
                                    let id = chat.id.clone();
                                    let title = chat.title.clone();
                                    let id_click = id.clone();
                                    let id_active = id.clone();
                                    let id_delete = id.clone();
                                    let state_delete = state.clone();
                                    view! {
                                        <div
                                            class="chat-item"
                                            class:active=move || {
                                                state.session.get().active_chat_id.as_deref()
                                                    == Some(id_active.as_str())
                                            }
                                            on:click=move |_| {
                                                state.select_chat(id_click.clone());
                                            }
                                        >
                                            <span class="chat-title">{title}</span>
                                            <button
                                                class="delete-chat-btn"
                                                title="Delete chat"
                                                on:click=move |ev: ev::MouseEvent| {
                                                    ev.stop_propagation();
                                                    state_delete.delete_chat(id_delete.clone());
                                                }
                                            >
                                                "×"
                                            </button>
                                        </div>
                                    }
                                }
                            </For>
                        }.into_any()
                    }
                }
                }
            </div>
        </aside>
    }
}
