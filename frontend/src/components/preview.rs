use leptos::prelude::*;

use pagecraft::OutputTarget;

use crate::state::AppState;

/// Live preview surface. The sandboxed frame's whole document is replaced
/// on every change of (displayed code, target): HTML output is projected
/// verbatim, component targets get a fixed placeholder document. There is
/// no data channel back to the host.
#[component]
pub fn PreviewPane() -> impl IntoView {
    let state = expect_context::<AppState>();

    let document = Memo::new(move |_| {
        let target = state.target.get();
        if target.is_renderable() {
            state.code.get()
        } else {
            placeholder_document(target)
        }
    });

    view! {
        <div class="preview-pane">
            <iframe
                class="preview-frame"
                title="Live preview"
                sandbox="allow-scripts"
                srcdoc=move || document.get()
            ></iframe>
        </div>
    }
}

fn placeholder_document(target: OutputTarget) -> String {
    format!(
        "<!DOCTYPE html>\
         <html><head><style>\
         body{{display:flex;align-items:center;justify-content:center;height:100vh;\
         margin:0;font-family:sans-serif;color:#8a8a9a;background:#1a1a2e}}\
         p{{max-width:28rem;text-align:center;line-height:1.6}}\
         </style></head><body>\
         <p>Live preview is not available for {} components. \
         Copy the generated code into your own dev environment to run it.</p>\
         </body></html>",
        target.label()
    )
}
