// src/main.rs
//
// Fleet Command - power generation fleet dashboard
//

mod app;
mod components;
mod data;
mod rollup;
mod state;

use leptos::*;

fn main() {
    // Better panic messages in browser console
    console_error_panic_hook::set_once();

    // Initialize logging
    let _ = console_log::init_with_level(log::Level::Debug);

    log::info!("⚡ Fleet Command dashboard starting...");

    // Mount Leptos app
    mount_to_body(|| {
        view! { <app::App /> }
    });
}
