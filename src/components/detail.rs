// src/components/detail.rs
//
// Fleet Command - Site Detail View
// Dispatches on the selected site's status: planned outages get the
// full tabbed workspace, forced outages the incident panel, running
// sites the nominal panel.
//

use leptos::*;

use crate::components::assets::AssetsTab;
use crate::components::financials::FinancialsTab;
use crate::components::gantt::ScheduleTab;
use crate::components::incident::IncidentPanel;
use crate::components::nominal::NominalPanel;
use crate::components::overview::OverviewTab;
use crate::state::{AppState, DetailKind, Site};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DetailTab {
    Overview,
    Assets,
    Financials,
    Schedule,
}

const TABS: [(DetailTab, &str); 4] = [
    (DetailTab::Overview, "📊 Overview"),
    (DetailTab::Assets, "🏭 Asset Drill-Down"),
    (DetailTab::Financials, "💰 Financials"),
    (DetailTab::Schedule, "🗓️ Schedule"),
];

#[component]
pub fn DetailView(state: AppState, site: Site) -> impl IntoView {
    let title = format!("{} Dashboard", site.name);

    view! {
        <div class="detail-view">
            <div class="detail-nav">
                <button class="btn btn-home" on:click=move |_| state.go_home()>
                    "⬅ HOME"
                </button>
                <h2 class="detail-title">{title}</h2>
            </div>
            <hr class="section-divider" />

            {match DetailKind::for_status(site.status) {
                DetailKind::Tabbed => view! { <OutageWorkspace site=site /> }.into_view(),
                DetailKind::Incident => view! { <IncidentPanel site=site /> }.into_view(),
                DetailKind::Nominal => view! { <NominalPanel /> }.into_view(),
            }}
        </div>
    }
}

/// Tabbed workspace for a site in planned outage
#[component]
fn OutageWorkspace(site: Site) -> impl IntoView {
    let (tab, set_tab) = create_signal(DetailTab::Overview);

    let tab_bar = TABS
        .iter()
        .map(|&(which, label)| {
            view! {
                <button
                    class=move || {
                        if tab.get() == which { "tab tab-active" } else { "tab" }
                    }
                    on:click=move |_| set_tab.set(which)
                >
                    {label}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="outage-workspace">
            <div class="tab-bar">{tab_bar}</div>

            <div class="tab-content">
                {move || match tab.get() {
                    DetailTab::Overview => view! { <OverviewTab site=site.clone() /> }.into_view(),
                    DetailTab::Assets => view! { <AssetsTab /> }.into_view(),
                    DetailTab::Financials => view! { <FinancialsTab /> }.into_view(),
                    DetailTab::Schedule => view! { <ScheduleTab /> }.into_view(),
                }}
            </div>
        </div>
    }
}
