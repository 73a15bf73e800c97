// src/app.rs
//
// Fleet Command - Main Application Component
//

use leptos::*;

use crate::components::{DetailView, FleetView, Header};
use crate::state::{AppState, View};

#[component]
pub fn App() -> impl IntoView {
    let state = AppState::new();

    view! {
        <div class="fleet-app">
            <Header />

            <main class="dashboard">
                {move || {
                    let nav = state.nav.get();
                    match (nav.view, nav.selected) {
                        (View::Detail, Some(site)) => {
                            view! { <DetailView state=state site=site /> }.into_view()
                        }
                        // A detail view with no selection falls back to the fleet
                        _ => view! { <FleetView state=state /> }.into_view(),
                    }
                }}
            </main>

            <footer class="footer">
                <span class="footer-brand">"⚡ Fleet Command"</span>
                <span class="footer-tagline">"Outages, budgets and the 2-year lookahead"</span>
            </footer>
        </div>
    }
}
