// src/components/incident.rs
//
// Fleet Command - Forced Outage Incident Panel
//

use leptos::*;

use crate::state::Site;

#[component]
pub fn IncidentPanel(site: Site) -> impl IntoView {
    let alert = site.alert.clone().unwrap_or_else(|| "Unknown Fault".to_string());

    // Checklist state is render-local only; it resets with the view
    let (lockdown, set_lockdown) = create_signal(true);
    let (assessment, set_assessment) = create_signal(true);

    view! {
        <div class="incident-panel">
            <div class="incident-banner">
                {format!("🚨 ACTIVE INCIDENT: {}", alert)}
            </div>

            <div class="incident-grid">
                <div class="incident-metrics">
                    <div class="metric-card metric-alarm">
                        <span class="metric-value">"$45,000 / hr"</span>
                        <span class="metric-label">"Estimated Loss"</span>
                    </div>
                    <div class="metric-card metric-alarm">
                        <span class="metric-value">"14h 30m"</span>
                        <span class="metric-label">"Time Offline"</span>
                    </div>
                </div>

                <div class="incident-checklist">
                    <h3 class="panel-title">"Recovery Actions"</h3>
                    <label class="checklist-item">
                        <input
                            type="checkbox"
                            prop:checked=lockdown
                            on:change=move |ev| set_lockdown.set(event_target_checked(&ev))
                        />
                        "Safety Lockdown"
                    </label>
                    <label class="checklist-item">
                        <input
                            type="checkbox"
                            prop:checked=assessment
                            on:change=move |ev| set_assessment.set(event_target_checked(&ev))
                        />
                        "Damage Assessment"
                    </label>
                </div>
            </div>
        </div>
    }
}
