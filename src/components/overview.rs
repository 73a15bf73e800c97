// src/components/overview.rs
//
// Fleet Command - Outage Overview Tab
// KPI cards plus actual spend by system (stacked bar) and the
// project status summary.
//

use leptos::*;

use crate::data;
use crate::rollup::{status_counts, system_costs, SystemCost};
use crate::state::Site;

#[component]
pub fn OverviewTab(site: Site) -> impl IntoView {
    let score = "88/100".to_string();
    let risk = "Low".to_string();
    let completion = site
        .progress
        .map(|p| format!("{}%", p))
        .unwrap_or_else(|| "0%".to_string());
    let spend = format_usd(site.spend);

    view! {
        <div class="overview-tab">
            <div class="metric-grid">
                <MetricCard label="Maverick Score" value=score />
                <MetricCard label="Completion" value=completion />
                <MetricCard label="Spend" value=spend />
                <MetricCard label="Risk" value=risk />
            </div>

            <div class="overview-charts">
                <div class="panel chart-panel">
                    <h3 class="panel-title">"Actual Spend by System"</h3>
                    <SystemCostChart />
                </div>
                <div class="panel chart-panel">
                    <h3 class="panel-title">"Project Status"</h3>
                    <StatusSummary />
                </div>
            </div>
        </div>
    }
}

#[component]
fn MetricCard(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="metric-card">
            <span class="metric-value">{value}</span>
            <span class="metric-label">{label}</span>
        </div>
    }
}

const CHART_W: f64 = 420.0;
const CHART_H: f64 = 240.0;
const BASELINE: f64 = 206.0;
const PLOT_H: f64 = 180.0;
const BAR_W: f64 = 48.0;

/// Stacked bar: actual labor + material cost per plant system
#[component]
fn SystemCostChart() -> impl IntoView {
    let costs = system_costs(data::projects());
    let max_total = costs
        .iter()
        .map(SystemCost::total)
        .fold(1.0_f64, f64::max);

    let bars = costs
        .iter()
        .enumerate()
        .map(|(i, cost)| {
            let cx = 40.0 + i as f64 * 78.0;
            let labor_h = cost.labor_actual / max_total * PLOT_H;
            let mat_h = cost.material_actual / max_total * PLOT_H;
            let labor_y = BASELINE - labor_h;
            let mat_y = labor_y - mat_h;
            let total_label = format!("${:.0}k", cost.total() / 1000.0);
            let tooltip = format!(
                "{}: labor ${:.0}k, material ${:.0}k",
                cost.system.label(),
                cost.labor_actual / 1000.0,
                cost.material_actual / 1000.0
            );

            view! {
                <g>
                    <rect x=cx y=labor_y width=BAR_W height=labor_h fill="#3b82f6">
                        <title>{tooltip.clone()}</title>
                    </rect>
                    <rect x=cx y=mat_y width=BAR_W height=mat_h fill="#f59e0b">
                        <title>{tooltip}</title>
                    </rect>
                    <text x={cx + BAR_W / 2.0} y={mat_y - 6.0} class="bar-label" text-anchor="middle">
                        {total_label}
                    </text>
                    <text x={cx + BAR_W / 2.0} y={BASELINE + 18.0} class="axis-label" text-anchor="middle">
                        {cost.system.short_label()}
                    </text>
                </g>
            }
        })
        .collect_view();

    view! {
        <svg class="chart-svg" viewBox=format!("0 0 {} {}", CHART_W, CHART_H)>
            <line x1="20" y1=BASELINE x2={CHART_W - 10.0} y2=BASELINE class="grid-line" />
            {bars}

            // Series legend
            <g>
                <rect x="280" y="6" width="10" height="10" rx="2" fill="#3b82f6" />
                <text x="294" y="15" class="legend-label">"Labor"</text>
                <rect x="345" y="6" width="10" height="10" rx="2" fill="#f59e0b" />
                <text x="359" y="15" class="legend-label">"Material"</text>
            </g>
        </svg>
    }
}

/// Project counts per status, all categories always listed
#[component]
fn StatusSummary() -> impl IntoView {
    let counts = status_counts(data::projects());

    let rows = counts
        .iter()
        .map(|&(status, count)| {
            let pill = match status.label() {
                "Completed" => "pill pill-completed",
                "In Progress" => "pill pill-progress",
                _ => "pill pill-notstarted",
            };
            view! {
                <tr>
                    <td><span class=pill>{status.label()}</span></td>
                    <td class="num-cell">{count}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <table class="status-table">
            <thead>
                <tr><th>"Status"</th><th class="num-cell">"Projects"</th></tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
    }
}

/// Format a currency value with thousands separators, e.g. "$657,375"
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
