// src/components/assets.rs
//
// Fleet Command - Asset Drill-Down Tab
// System/subsystem cascade over the project book, with a status donut
// and per-project budget bars.
//

use leptos::*;

use crate::data;
use crate::rollup::{budget_ratio, clamp_pct, status_counts};
use crate::state::{Project, System};

#[component]
pub fn AssetsTab() -> impl IntoView {
    let (system, set_system) = create_signal(System::GasTurbine);
    let (subsystem, set_subsystem) =
        create_signal(System::GasTurbine.subsystems()[0].to_string());

    let subset = create_memo(move |_| {
        data::projects()
            .iter()
            .filter(|p| p.system == system.get() && p.subsystem == subsystem.get())
            .cloned()
            .collect::<Vec<Project>>()
    });

    let system_options = System::ALL
        .iter()
        .map(|&sys| {
            view! {
                <option value=sys.label() selected=move || system.get() == sys>
                    {sys.label()}
                </option>
            }
        })
        .collect_view();

    view! {
        <div class="assets-tab">
            <h3 class="panel-title">"🔍 Asset Hierarchy Manager"</h3>

            <div class="asset-filters">
                <div class="filter-field">
                    <label class="filter-label">"1. Select System"</label>
                    <select
                        class="filter-select"
                        on:change=move |ev| {
                            if let Some(sys) = System::from_label(&event_target_value(&ev)) {
                                set_system.set(sys);
                                set_subsystem.set(sys.subsystems()[0].to_string());
                            }
                        }
                    >
                        {system_options}
                    </select>
                </div>

                <div class="filter-field">
                    <label class="filter-label">"2. Select Sub-System"</label>
                    <select
                        class="filter-select"
                        on:change=move |ev| set_subsystem.set(event_target_value(&ev))
                    >
                        {move || {
                            system
                                .get()
                                .subsystems()
                                .iter()
                                .map(|&sub| {
                                    view! {
                                        <option
                                            value=sub
                                            selected=move || subsystem.get() == sub
                                        >
                                            {sub}
                                        </option>
                                    }
                                })
                                .collect_view()
                        }}
                    </select>
                </div>

                <div class="filter-breakdown">
                    {move || status_donut(&subset.get())}
                    <div class="breakdown-caption">
                        <strong>{move || subsystem.get()}</strong>
                        " Breakdown"
                        <p class="breakdown-count">
                            "Total Tasks: " {move || subset.get().len()}
                        </p>
                    </div>
                </div>
            </div>

            <hr class="section-divider" />

            {move || {
                let projects = subset.get();
                if projects.is_empty() {
                    view! { <div class="empty-note">"No projects found."</div> }.into_view()
                } else {
                    projects
                        .into_iter()
                        .map(|p| view! { <ProjectRow project=p /> })
                        .collect_view()
                }
            }}
        </div>
    }
}

const DONUT_R: f64 = 34.0;
const DONUT_STROKE: f64 = 13.0;

/// Donut of status counts for the filtered subset
fn status_donut(projects: &[Project]) -> impl IntoView {
    let counts = status_counts(projects);
    let total = projects.len();
    let circumference = 2.0 * std::f64::consts::PI * DONUT_R;

    let mut offset = 0.0;
    let segments = counts
        .iter()
        .filter(|(_, count)| *count > 0)
        .map(|&(status, count)| {
            let color = match status.label() {
                "Completed" => "#059669",
                "In Progress" => "#d97706",
                _ => "#dc2626",
            };
            let frac = count as f64 / total.max(1) as f64;
            let seg = frac * circumference;
            let dash = format!("{:.2} {:.2}", seg, circumference - seg);
            let seg_offset = -offset;
            offset += seg;

            view! {
                <circle
                    cx="45"
                    cy="45"
                    r=DONUT_R
                    fill="none"
                    stroke=color
                    stroke-width=DONUT_STROKE
                    stroke-dasharray=dash
                    stroke-dashoffset=seg_offset
                    transform="rotate(-90 45 45)"
                >
                    <title>{format!("{}: {}", status.label(), count)}</title>
                </circle>
            }
        })
        .collect_view();

    view! {
        <svg class="donut-svg" viewBox="0 0 90 90">
            <circle cx="45" cy="45" r=DONUT_R fill="none" stroke="#2d3b50" stroke-width=DONUT_STROKE />
            {segments}
            <text x="45" y="50" class="donut-count" text-anchor="middle">{total}</text>
        </svg>
    }
}

/// Expandable row for a single maintenance project
#[component]
fn ProjectRow(project: Project) -> impl IntoView {
    let summary = format!(
        "{}: {} ({})",
        project.id,
        project.name,
        project.status.label()
    );
    let critical = if project.critical { "🔴 Yes" } else { "No" };

    let labor_pct = clamp_pct(budget_ratio(project.actual_labor, project.budget_labor)) * 100.0;
    let mat_pct = clamp_pct(budget_ratio(project.actual_mat, project.budget_mat)) * 100.0;
    let labor_text = format!(
        "{} / {}",
        format_usd(project.actual_labor),
        format_usd(project.budget_labor)
    );
    let mat_text = format!(
        "{} / {}",
        format_usd(project.actual_mat),
        format_usd(project.budget_mat)
    );

    view! {
        <details class="project-row">
            <summary class="project-summary">{summary}</summary>
            <div class="project-body">
                <div class="project-cell">
                    <span class="fact-label">"Critical Path"</span>
                    <span class="fact-value">{critical}</span>
                </div>
                <div class="project-cell">
                    <span class="fact-label">"Labor Budget"</span>
                    <div class="budget-bar">
                        <div class="budget-bar-fill" style=format!("width: {:.1}%", labor_pct) />
                    </div>
                    <span class="budget-text">{labor_text}</span>
                </div>
                <div class="project-cell">
                    <span class="fact-label">"Material Budget"</span>
                    <div class="budget-bar">
                        <div class="budget-bar-fill" style=format!("width: {:.1}%", mat_pct) />
                    </div>
                    <span class="budget-text">{mat_text}</span>
                </div>
            </div>
        </details>
    }
}

/// Format a currency value with thousands separators
fn format_usd(v: f64) -> String {
    let whole = v.round() as i64;
    let s = whole.abs().to_string();
    let mut grouped = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.insert(0, ',');
        }
        grouped.insert(0, c);
    }
    if whole < 0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}
