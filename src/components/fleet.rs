// src/components/fleet.rs
//
// Fleet Command - Fleet Overview Cards
// Priority outage cards up top, compact running cards below.
//

use leptos::*;

use crate::components::timeline::FleetTimeline;
use crate::data;
use crate::rollup::{budget_ratio, clamp_pct};
use crate::state::{AppState, Site, SiteStatus};

#[component]
pub fn FleetView(state: AppState) -> impl IntoView {
    let outage_sites: Vec<Site> = data::fleet()
        .iter()
        .filter(|s| s.status.is_outage())
        .cloned()
        .collect();
    let running_sites: Vec<Site> = data::fleet()
        .iter()
        .filter(|s| s.status == SiteStatus::Running)
        .cloned()
        .collect();

    view! {
        <div class="fleet-view">
            <h2 class="section-title">"⚠️ Active Attention Required"</h2>
            <div class="outage-grid">
                <For
                    each=move || outage_sites.clone()
                    key=|site| site.id.clone()
                    children=move |site| view! { <OutageCard state=state site=site /> }
                />
            </div>

            <h2 class="section-title">"🟢 Operational Fleet"</h2>
            <div class="running-grid">
                <For
                    each=move || running_sites.clone()
                    key=|site| site.id.clone()
                    children=move |site| view! { <RunningCard state=state site=site /> }
                />
            </div>

            <hr class="section-divider" />
            <h2 class="section-title">"🗓️ 2-Year Fleet Schedule"</h2>
            <FleetTimeline />
        </div>
    }
}

/// Large priority card for a site in outage
#[component]
fn OutageCard(state: AppState, site: Site) -> impl IntoView {
    let accent = match site.status {
        SiteStatus::UnplannedMaintenance => "accent-unplanned",
        _ => "accent-planned",
    };
    let badge = match site.status {
        SiteStatus::UnplannedMaintenance => "badge badge-unplanned",
        _ => "badge badge-planned",
    };

    let spend_pct = clamp_pct(budget_ratio(site.spend, site.budget)) * 100.0;
    let alert = site.alert.clone().unwrap_or_default();
    let nav_site = site.clone();

    view! {
        <div class=format!("card-container card-large {}", accent)>
            <div class="card-head">
                <h3 class="card-title">{site.name.clone()}</h3>
                <span class=badge>{site.status.label()}</span>
            </div>

            <div class="card-facts">
                <div class="card-fact">
                    <span class="fact-label">"Type"</span>
                    <span class="fact-value">{site.plant_type.clone()}</span>
                </div>
                <div class="card-fact">
                    <span class="fact-label">"Alert"</span>
                    <span class="fact-value fact-alert">{alert}</span>
                </div>
                <div class="card-fact fact-right">
                    <span class="fact-label">"Budget"</span>
                    <span class="fact-value">
                        {format_usd_k(site.spend)}" / "{format_usd_k(site.budget)}
                    </span>
                </div>
            </div>

            <div class="spend-bar">
                <div class="spend-bar-fill" style=format!("width: {:.1}%", spend_pct) />
            </div>

            <button class="btn btn-manage" on:click=move |_| state.open_site(nav_site.clone())>
                {format!("Manage {} →", site.name)}
            </button>
        </div>
    }
}

/// Compact card for a running site
#[component]
fn RunningCard(state: AppState, site: Site) -> impl IntoView {
    let nav_site = site.clone();

    view! {
        <div class="card-container card-small">
            <h4 class="card-title-small">{site.name.clone()}</h4>
            <p class="card-region">{site.region.clone()}</p>
            <span class="badge badge-running">"RUNNING"</span>
            <hr class="card-divider" />
            <p class="card-capacity">"Output: " <strong>{site.capacity.clone()}</strong></p>
            <button class="btn btn-view" on:click=move |_| state.open_site(nav_site.clone())>
                "View"
            </button>
        </div>
    }
}

/// Format a currency value in grouped thousands, e.g. "$6,487k"
fn format_usd_k(v: f64) -> String {
    let thousands = (v / 1000.0).round() as u64;
    let s = thousands.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    format!("${}k", result)
}
