// src/components/header.rs
//
// Fleet Command - Header Component
//

use leptos::*;

use crate::data;
use crate::state::SiteStatus;

#[component]
pub fn Header() -> impl IntoView {
    let fleet = data::fleet();
    let running = fleet
        .iter()
        .filter(|s| s.status == SiteStatus::Running)
        .count();
    let planned = fleet
        .iter()
        .filter(|s| s.status == SiteStatus::PlannedOutage)
        .count();
    let unplanned = fleet
        .iter()
        .filter(|s| s.status == SiteStatus::UnplannedMaintenance)
        .count();

    view! {
        <header class="header">
            <div class="header-brand">
                <span class="header-icon">"⚡"</span>
                <h1 class="header-title">"FLEET COMMAND"</h1>
                <span class="header-subtitle">"Generation Fleet Monitoring"</span>
            </div>

            <div class="header-status">
                <StatusIndicator name="Running" count=running class_name="status-running" />
                <StatusIndicator name="Planned" count=planned class_name="status-planned" />
                <StatusIndicator name="Unplanned" count=unplanned class_name="status-unplanned" />
            </div>
        </header>
    }
}

#[component]
fn StatusIndicator(
    name: &'static str,
    count: usize,
    class_name: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("status-indicator {}", class_name)>
            <span class="status-dot"></span>
            <span class="status-name">{name}</span>
            <span class="status-count">{count}</span>
        </div>
    }
}
