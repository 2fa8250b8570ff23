//! Filter Bar Component
//!
//! Search, status, priority, assignee and type filters feeding the board fetch.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::models::{FilterOptions, Priority, TodoStatus, TODO_TYPES};
use crate::store::{use_app_store, AppStateStoreFields};

/// Quiet period before typed search text is committed
const SEARCH_DEBOUNCE_MS: u32 = 300;

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[component]
pub fn FilterBar() -> impl IntoView {
    let store = use_app_store();

    let (search_text, set_search_text) = signal(String::new());
    // Bumped on every keystroke; only the latest pending search commits
    let (search_generation, set_search_generation) = signal(0u32);

    let on_search_input = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        set_search_text.set(value.clone());
        let generation = search_generation.get_untracked().wrapping_add(1);
        set_search_generation.set(generation);

        spawn_local(async move {
            TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            if search_generation.get_untracked() == generation {
                store.filters().update(|f| f.search = non_empty(value));
            }
        });
    };

    let on_status = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        store.filters().update(|f| f.status = TodoStatus::from_key(&value));
    };

    let on_priority = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        store.filters().update(|f| f.priority = Priority::from_key(&value));
    };

    let on_assignee = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        store.filters().update(|f| f.assignee = non_empty(value));
    };

    let on_type = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        store.filters().update(|f| f.todo_type = non_empty(value));
    };

    let clear = move |_| {
        set_search_generation.update(|g| *g = g.wrapping_add(1));
        set_search_text.set(String::new());
        store.filters().set(FilterOptions::default());
    };

    view! {
        <div class="filter-bar">
            <input
                type="text"
                class="filter-search"
                placeholder="Search todos..."
                prop:value=move || search_text.get()
                on:input=on_search_input
            />

            <select
                prop:value=move || store.filters().read().status.map(|s| s.as_str()).unwrap_or("")
                on:change=on_status
            >
                <option value="">"All Statuses"</option>
                {TodoStatus::ALL.iter().map(|status| view! {
                    <option value=status.as_str()>{status.label()}</option>
                }).collect_view()}
            </select>

            <select
                prop:value=move || store.filters().read().priority.map(|p| p.as_str()).unwrap_or("")
                on:change=on_priority
            >
                <option value="">"All Priorities"</option>
                {Priority::ALL.iter().map(|priority| view! {
                    <option value=priority.as_str()>{priority.as_str()}</option>
                }).collect_view()}
            </select>

            <input
                type="text"
                class="filter-assignee"
                placeholder="Assignee"
                prop:value=move || store.filters().read().assignee.clone().unwrap_or_default()
                on:change=on_assignee
            />

            <select
                prop:value=move || store.filters().read().todo_type.clone().unwrap_or_default()
                on:change=on_type
            >
                <option value="">"All Types"</option>
                {TODO_TYPES.iter().map(|todo_type| view! {
                    <option value=*todo_type>{*todo_type}</option>
                }).collect_view()}
            </select>

            <button
                class="filter-clear"
                disabled=move || store.filters().read().is_empty() && search_text.read().is_empty()
                on:click=clear
            >
                "Clear"
            </button>
        </div>
    }
}
