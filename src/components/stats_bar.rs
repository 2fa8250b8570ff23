//! Stats Bar Component
//!
//! Total and per-lane counts from the server's statistics endpoint.

use leptos::prelude::*;

use crate::board::BOARD_COLUMNS;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn StatsBar() -> impl IntoView {
    let store = use_app_store();

    view! {
        {move || store.stats().get().map(|stats| view! {
            <div class="stats-bar">
                <div class="stat-card total">
                    <span class="stat-value">{stats.total}</span>
                    <span class="stat-label">"Total"</span>
                </div>
                {BOARD_COLUMNS.iter().map(|&status| view! {
                    <div class=format!("stat-card status-{}", status.as_str())>
                        <span class="stat-value">{stats.count_for(status)}</span>
                        <span class="stat-label">{status.label()}</span>
                    </div>
                }).collect_view()}
            </div>
        })}
    }
}
