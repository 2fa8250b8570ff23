//! Todo Board App
//!
//! Root component: provides the store and context, loads the board.

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{error, info, warn};
use reactive_stores::Store;

use crate::api::{fetch_board, ApiConfig, HttpTodoApi, TodoApi};
use crate::components::{FilterBar, KanbanBoard, StatsBar, TodoDetail};
use crate::context::AppContext;
use crate::models::FilterOptions;
use crate::store::{store_replace_todos, AppState, AppStateStoreFields, AppStore, LoadSequence, LoadState, LoadTicket};

/// Fetch todos and stats for `filters` and publish them, unless a newer
/// load started while the requests were in flight.
async fn load_board(
    store: AppStore,
    api: HttpTodoApi,
    filters: FilterOptions,
    loads: StoredValue<LoadSequence>,
    ticket: LoadTicket,
) {
    store.load_state().set(LoadState::Loading);

    let (todos, stats) = futures::join!(fetch_board(&api, &filters), api.stats());

    if !loads.with_value(|l| l.is_current(ticket)) {
        info!("[APP] Discarding stale load {:?} for {:?}", ticket, filters);
        return;
    }

    match stats {
        Ok(stats) => store.stats().set(Some(stats)),
        Err(e) => {
            warn!("[APP] Failed to load stats: {}", e);
            store.stats().set(None);
        }
    }

    match todos {
        Ok(todos) => {
            info!("[APP] Loaded {} todos", todos.len());
            store_replace_todos(&store, todos);
            store.load_state().set(LoadState::Ready);
        }
        Err(e) => {
            error!("[APP] Failed to load todos: {}", e);
            store.load_state().set(LoadState::Failed(e.to_string()));
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);

    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let api = HttpTodoApi::new(ApiConfig::from_window());
    info!("[APP] Using todo server at {}", api.base_url());
    let ctx = AppContext::new((reload_trigger, set_reload_trigger), api);
    provide_context(ctx);

    let loads = StoredValue::new(LoadSequence::default());

    // Load todos when filters or trigger change
    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        let filters = store.filters().get();
        let ticket = loads.try_update_value(LoadSequence::next).unwrap_or_default();
        info!("[APP] Loading board, trigger={}, filters={:?}", trigger, filters);
        spawn_local(load_board(store, ctx.api(), filters, loads, ticket));
    });

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"Kanban Board"</h1>
                <p class="subtitle">"Drag cards between columns to change their status"</p>
            </header>

            <StatsBar />
            <FilterBar />

            <main class="main-content">
                <KanbanBoard />
            </main>

            <TodoDetail />
        </div>
    }
}
