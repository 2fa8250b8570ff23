//! Connection Error Component
//!
//! Blocking state shown when the todo collection cannot be loaded.

use leptos::prelude::*;

use crate::context::use_app_context;

/// Recent diagnostic lines shown under the error
const DIAGNOSTIC_LINES: usize = 5;

#[component]
pub fn ConnectionError(message: String) -> impl IntoView {
    let ctx = use_app_context();
    let diagnostics = rolling_logger::recent(DIAGNOSTIC_LINES);

    view! {
        <div class="connection-error">
            <h2>"Connection Error"</h2>
            <p>"Failed to load data. Make sure the todo server is running."</p>
            <p class="error-detail">{message}</p>

            <ul class="diagnostics">
                {diagnostics.into_iter().map(|line| view! { <li>{line}</li> }).collect_view()}
            </ul>

            <button class="retry-btn" on:click=move |_| ctx.reload()>"Retry"</button>
        </div>
    }
}
