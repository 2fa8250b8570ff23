//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::HttpTodoApi;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload todos from the server - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload todos from the server - write
    set_reload_trigger: WriteSignal<u32>,
    /// Remote accessor shared by every component
    api: StoredValue<HttpTodoApi, LocalStorage>,
}

impl AppContext {
    pub fn new(reload_trigger: (ReadSignal<u32>, WriteSignal<u32>), api: HttpTodoApi) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            api: StoredValue::new_local(api),
        }
    }

    /// Trigger a reload of todos (full collection replace)
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    pub fn api(&self) -> HttpTodoApi {
        self.api.get_value()
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
