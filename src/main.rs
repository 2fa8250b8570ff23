#![allow(warnings)]
//! Todo Board Frontend Entry Point

mod models;
mod api;
mod board;
mod context;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;
use log::LevelFilter;

fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { LevelFilter::Debug } else { LevelFilter::Info };
    let _ = rolling_logger::init(level);
    mount_to_body(App);
}
