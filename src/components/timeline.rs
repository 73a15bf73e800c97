// src/components/timeline.rs
//
// Fleet Command - 2-Year Schedule Timeline
// Hand-built SVG gantt: one lane per site, one bar per outage window,
// with a dashed "Today" rule.
//

use chrono::{Duration, Local, NaiveDate};
use leptos::*;

use crate::data;
use crate::state::OutageCategory;

const WIDTH: f64 = 960.0;
const GUTTER: f64 = 140.0;
const RIGHT_PAD: f64 = 10.0;
const TOP: f64 = 26.0;
const LANE_H: f64 = 30.0;
const BAR_H: f64 = 16.0;
const AXIS_H: f64 = 26.0;

// Visible window: 60 days back, 700 days forward
const DAYS_BACK: i64 = 60;
const DAYS_FORWARD: i64 = 700;

fn category_color(category: OutageCategory) -> &'static str {
    match category {
        OutageCategory::ActivePlanned => "#d97706",
        OutageCategory::ActiveUnplanned => "#dc2626",
        OutageCategory::FuturePlanned => "#059669",
    }
}

#[component]
pub fn FleetTimeline() -> impl IntoView {
    let today = Local::now().date_naive();
    let sites = data::fleet();
    let entries = data::schedule();

    let height = TOP + sites.len() as f64 * LANE_H + AXIS_H;
    let domain_start = today - Duration::days(DAYS_BACK);
    let domain_days = (DAYS_BACK + DAYS_FORWARD) as f64;
    let plot_w = WIDTH - GUTTER - RIGHT_PAD;

    let x = move |date: NaiveDate| -> f64 {
        GUTTER + (date - domain_start).num_days() as f64 / domain_days * plot_w
    };

    // Site lane labels
    let labels = sites
        .iter()
        .enumerate()
        .map(|(i, site)| {
            let y = TOP + i as f64 * LANE_H + LANE_H / 2.0 + 4.0;
            view! {
                <text x="8" y=y class="lane-label">{site.name.clone()}</text>
            }
        })
        .collect_view();

    // Alternating lane backgrounds
    let lanes = (0..sites.len())
        .map(|i| {
            let y = TOP + i as f64 * LANE_H;
            let fill = if i % 2 == 0 { "#1e293b" } else { "#16202f" };
            view! {
                <rect x=GUTTER y=y width=plot_w height=LANE_H fill=fill />
            }
        })
        .collect_view();

    // Outage window bars
    let bars = entries
        .iter()
        .filter_map(|entry| {
            let lane = sites.iter().position(|s| s.name == entry.site)?;
            let bar_x = x(entry.start).max(GUTTER);
            let bar_w = (x(entry.finish) - bar_x).max(2.0);
            let bar_y = TOP + lane as f64 * LANE_H + (LANE_H - BAR_H) / 2.0;
            let tooltip = format!(
                "{}: {} ({})",
                entry.site,
                entry.category.label(),
                entry.duration_label
            );
            Some(view! {
                <rect
                    class="timeline-bar"
                    x=bar_x
                    y=bar_y
                    width=bar_w
                    height=BAR_H
                    rx="3"
                    fill=category_color(entry.category)
                >
                    <title>{tooltip}</title>
                </rect>
            })
        })
        .collect_view();

    // Quarterly axis ticks
    let ticks = (0..=6)
        .map(|k| {
            let date = domain_start + Duration::days(k * 120);
            let tick_x = x(date);
            let label = date.format("%b %Y").to_string();
            let label_y = height - 8.0;
            view! {
                <g>
                    <line
                        x1=tick_x y1=TOP x2=tick_x y2={height - AXIS_H}
                        class="grid-line"
                    />
                    <text x=tick_x y=label_y class="axis-label" text-anchor="middle">
                        {label}
                    </text>
                </g>
            }
        })
        .collect_view();

    // Legend across the top
    let legend = [
        OutageCategory::ActivePlanned,
        OutageCategory::ActiveUnplanned,
        OutageCategory::FuturePlanned,
    ]
    .iter()
    .enumerate()
    .map(|(i, &category)| {
        let lx = GUTTER + i as f64 * 150.0;
        view! {
            <g>
                <rect x=lx y="6" width="12" height="12" rx="2" fill=category_color(category) />
                <text x={lx + 18.0} y="16" class="legend-label">{category.label()}</text>
            </g>
        }
    })
    .collect_view();

    let today_x = x(today);

    view! {
        <div class="panel timeline-panel">
            <svg
                class="timeline-svg"
                viewBox=format!("0 0 {} {}", WIDTH, height)
                preserveAspectRatio="xMidYMid meet"
            >
                {lanes}
                {labels}
                {ticks}
                {bars}
                {legend}

                // Today marker
                <line
                    x1=today_x y1=TOP x2=today_x y2={height - AXIS_H}
                    stroke="#f8fafc"
                    stroke-width="2"
                    stroke-dasharray="5 4"
                />
                <text x=today_x y={TOP - 6.0} class="today-label" text-anchor="middle">
                    "Today"
                </text>
            </svg>
        </div>
    }
}
