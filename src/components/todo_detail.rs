//! Todo Detail Component
//!
//! Side panel for the selected todo. Fetches the record fresh from the
//! server and offers deletion; a delete triggers a full board reload.

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{error, info};

use crate::api::TodoApi;
use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::models::Todo;
use crate::store::{use_app_store, AppStateStoreFields};

#[derive(Clone, Debug, PartialEq)]
enum DetailState {
    Loading,
    Loaded(Todo),
    Failed(String),
}

#[component]
pub fn TodoDetail() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (detail, set_detail) = signal(DetailState::Loading);
    let (deleting, set_deleting) = signal(false);

    // Fetch whenever the selection changes
    Effect::new(move |_| {
        let Some(id) = store.selected_todo().get() else {
            return;
        };
        set_detail.set(DetailState::Loading);
        let api = ctx.api();
        spawn_local(async move {
            let result = api.get_todo(&id).await;
            // The user may have opened another todo meanwhile
            if store.selected_todo().get_untracked().as_deref() != Some(id.as_str()) {
                return;
            }
            match result {
                Ok(todo) => set_detail.set(DetailState::Loaded(todo)),
                Err(e) => {
                    error!("[APP] Failed to load todo {}: {}", id, e);
                    set_detail.set(DetailState::Failed(e.to_string()));
                }
            }
        });
    });

    let close = move |_| store.selected_todo().set(None);

    let on_delete = Callback::new(move |_| {
        let Some(id) = store.selected_todo().get_untracked() else {
            return;
        };
        set_deleting.set(true);
        let api = ctx.api();
        spawn_local(async move {
            match api.delete_todo(&id).await {
                Ok(()) => {
                    info!("[APP] Deleted todo {}", id);
                    store.selected_todo().set(None);
                    ctx.reload();
                }
                Err(e) => {
                    error!("[APP] Failed to delete todo {}: {}", id, e);
                    set_detail.set(DetailState::Failed(e.to_string()));
                }
            }
            set_deleting.set(false);
        });
    });

    view! {
        <Show when=move || store.selected_todo().read().is_some()>
            <aside class="todo-detail">
                <div class="todo-detail-header">
                    <h2>"Todo Details"</h2>
                    <button class="close-btn" on:click=close>"×"</button>
                </div>

                {move || match detail.get() {
                    DetailState::Loading => view! {
                        <div class="detail-loading"><span class="spinner"></span></div>
                    }.into_any(),
                    DetailState::Failed(message) => view! {
                        <p class="error-detail">{message}</p>
                    }.into_any(),
                    DetailState::Loaded(todo) => view! {
                        <DetailFields todo=todo />
                        <div class="todo-detail-actions">
                            <DeleteConfirmButton
                                button_class="delete-btn"
                                on_confirm=on_delete
                                busy=deleting
                            />
                        </div>
                    }.into_any(),
                }}
            </aside>
        </Show>
    }
}

fn format_date(date: Option<chrono::DateTime<chrono::Utc>>) -> String {
    date.map(|d| d.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn or_dash(value: String) -> String {
    if value.is_empty() { "-".to_string() } else { value }
}

#[component]
fn DetailFields(todo: Todo) -> impl IntoView {
    let location = todo.location();
    let estimate = todo
        .estimate
        .map(|minutes| format!("{} min", minutes))
        .unwrap_or_else(|| "-".to_string());
    let created = format_date(todo.created_at);
    let updated = format_date(todo.updated_at);
    let due = format_date(todo.due_date);

    let rows = vec![
        ("Type", todo.todo_type),
        ("Status", todo.status.label().to_string()),
        ("Priority", todo.priority.as_str().to_string()),
        ("Location", location),
        ("Author", or_dash(todo.author)),
        ("Email", or_dash(todo.email)),
        ("Assignee", or_dash(todo.assignee)),
        ("Category", or_dash(todo.category)),
        ("Due", due),
        ("Estimate", estimate),
        ("Created", created),
        ("Updated", updated),
        ("Hash", or_dash(todo.hash)),
    ];

    view! {
        <p class="todo-detail-content">{todo.content}</p>
        <dl class="todo-detail-fields">
            {rows.into_iter().map(|(label, value)| view! {
                <dt>{label}</dt>
                <dd>{value}</dd>
            }).collect_view()}
        </dl>
    }
}
