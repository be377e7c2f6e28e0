use leptos::ev;
use leptos::prelude::*;

use pagecraft::prompts::EXAMPLE_PROMPTS;
use pagecraft::OutputTarget;

use crate::components::preview::PreviewPane;
use crate::state::AppState;

/// Main area: toolbar, error banner, code panel + live preview, prompt bar.
#[component]
pub fn Workspace() -> impl IntoView {
    let state = expect_context::<AppState>();

    view! {
        <main class="workspace">
            <Toolbar />

            // Error banner
            {move || {
                state.error.get().map(|err| {
                    view! {
                        <div class="error-banner">{err}</div>
                    }
                })
            }}

            <div class="panes">
                <CodePanel />
                <PreviewPane />
            </div>

            <PromptBar />
        </main>
    }
}

/// Toolbar: sidebar toggle, output target selector, API key field, copy and
/// share actions.
#[component]
fn Toolbar() -> impl IntoView {
    let state = expect_context::<AppState>();

    let on_target = {
        let state = state.clone();
        move |ev: ev::Event| {
            if let Ok(target) = event_target_value(&ev).parse::<OutputTarget>() {
                state.set_target.set(target);
            }
        }
    };

    let state_toggle = state.clone();
    let state_key = state.clone();
    let state_copy = state.clone();
    let state_share = state.clone();

    view! {
        <div class="toolbar">
            <button
                class="icon-btn"
                title="Toggle sidebar"
                on:click=move |_| state_toggle.toggle_sidebar()
            >
                "☰"
            </button>

            <select class="target-select" on:change=on_target prop:value=move || state.target.get().as_str().to_string()>
                {OutputTarget::ALL
                    .iter()
                    .map(|t| view! { <option value=t.as_str()>{t.label()}</option> })
                    .collect_view()}
            </select>

            <input
                class="api-key-input"
                type="password"
                placeholder="API key"
                prop:value=move || state.api_key.get()
                on:change=move |ev| {
                    state_key.update_api_key(event_target_value(&ev));
                }
            />

            <div class="toolbar-actions">
                <button class="icon-btn" on:click=move |_| state_copy.copy_code()>
                    "Copy"
                </button>
                <button class="icon-btn" on:click=move |_| state_share.share()>
                    "Share"
                </button>
            </div>
        </div>
    }
}

/// The code display: a plain text box with the generated source. Edits feed
/// straight back into displayed code, so the preview re-projects live.
#[component]
fn CodePanel() -> impl IntoView {
    let state = expect_context::<AppState>();

    view! {
        <div class="code-panel">
            <textarea
                class="code-editor"
                spellcheck="false"
                wrap="off"
                prop:value=move || state.code.get()
                on:input=move |ev| {
                    state.set_code.set(event_target_value(&ev));
                }
            ></textarea>
        </div>
    }
}

/// Prompt input with generate button, plus the starter-prompt gallery when
/// no conversation is active.
#[component]
fn PromptBar() -> impl IntoView {
    let state = expect_context::<AppState>();
    let is_generating = {
        let state = state.clone();
        move || state.is_generating.get()
    };

    let generate = {
        let state = state.clone();
        move || state.generate()
    };

    let generate_key = generate.clone();
    let on_keydown = move |ev: ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            generate_key();
        }
    };

    let show_gallery = {
        let state = state.clone();
        move || state.session.get().active_chat_id.is_none() && !state.is_generating.get()
    };

    view! {
        <div class="prompt-bar">
            {
                let state = state.clone();
                move || {
                    show_gallery().then(|| {
                        let state = state.clone();
                        view! {
                            <div class="example-gallery">
                                {EXAMPLE_PROMPTS
                                    .iter()
                                    .map(|example| {
                                        let state = state.clone();
                                        view! {
                                            <button
                                                class="example-chip"
                                                on:click=move |_| {
                                                    state.set_prompt.set(example.to_string());
                                                }
                                            >
                                                {*example}
                                            </button>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                    })
                }
            }
            <div class="prompt-row">
                <textarea
                    rows="1"
                    placeholder="Describe the page you want… (Enter to generate, Shift+Enter for newline)"
                    prop:value=move || state.prompt.get()
                    on:input=move |ev| {
                        state.set_prompt.set(event_target_value(&ev));
                    }
                    on:keydown=on_keydown
                    disabled=is_generating.clone()
                />
                <button
                    class="generate-btn"
                    on:click=move |_| generate()
                    disabled=is_generating.clone()
                >
                    {
                        let is_generating = is_generating.clone();
                        move || if is_generating() { "Generating…" } else { "Generate" }
                    }
                </button>
            </div>
        </div>
    }
}
