// src/components/gantt.rs
//
// Fleet Command - Project Schedule Tab
// SVG gantt of the full project book, sorted by start date and
// colored by plant system.
//

use chrono::{Local, NaiveDate};
use leptos::*;

use crate::data;
use crate::state::{Project, System};

const WIDTH: f64 = 960.0;
const GUTTER: f64 = 190.0;
const RIGHT_PAD: f64 = 10.0;
const TOP: f64 = 24.0;
const ROW_H: f64 = 11.0;
const BAR_H: f64 = 7.0;
const AXIS_H: f64 = 22.0;

fn system_color(system: System) -> &'static str {
    match system {
        System::GasTurbine => "#3b82f6",
        System::SteamTurbine => "#8b5cf6",
        System::Hrsg => "#f59e0b",
        System::Generator => "#10b981",
        System::Bop => "#ef4444",
    }
}

#[component]
pub fn ScheduleTab() -> impl IntoView {
    let today = Local::now().date_naive();

    let mut projects: Vec<Project> = data::projects().to_vec();
    projects.sort_by_key(|p| p.start);

    let domain_days = projects
        .iter()
        .map(|p| (p.end - today).num_days())
        .max()
        .unwrap_or(60)
        .max(1) as f64;
    let plot_w = WIDTH - GUTTER - RIGHT_PAD;
    let height = TOP + projects.len() as f64 * ROW_H + AXIS_H;

    let x = move |date: NaiveDate| -> f64 {
        GUTTER + (date - today).num_days() as f64 / domain_days * plot_w
    };

    let rows = projects
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let row_y = TOP + i as f64 * ROW_H;
            let bar_x = x(p.start);
            let bar_w = (x(p.end) - bar_x).max(2.0);
            let label_y = row_y + ROW_H / 2.0 + 2.5;
            let tooltip = format!(
                "{} [{}] {} to {}",
                p.full_name,
                p.system.label(),
                p.start.format("%Y-%m-%d"),
                p.end.format("%Y-%m-%d")
            );

            view! {
                <g>
                    <text x="4" y=label_y class="gantt-label">{p.name.clone()}</text>
                    <rect
                        x=bar_x
                        y={row_y + (ROW_H - BAR_H) / 2.0}
                        width=bar_w
                        height=BAR_H
                        rx="2"
                        fill=system_color(p.system)
                    >
                        <title>{tooltip}</title>
                    </rect>
                </g>
            }
        })
        .collect_view();

    // Weekly grid lines
    let ticks = (0..=(domain_days as i64 / 7))
        .map(|week| {
            let date = today + chrono::Duration::days(week * 7);
            let tick_x = x(date);
            view! {
                <g>
                    <line x1=tick_x y1=TOP x2=tick_x y2={height - AXIS_H} class="grid-line" />
                    <text
                        x=tick_x
                        y={height - 6.0}
                        class="axis-label"
                        text-anchor="middle"
                    >
                        {format!("+{}w", week)}
                    </text>
                </g>
            }
        })
        .collect_view();

    let legend = System::ALL
        .iter()
        .enumerate()
        .map(|(i, &system)| {
            let lx = GUTTER + i as f64 * 130.0;
            view! {
                <g>
                    <rect x=lx y="5" width="10" height="10" rx="2" fill=system_color(system) />
                    <text x={lx + 15.0} y="14" class="legend-label">{system.label()}</text>
                </g>
            }
        })
        .collect_view();

    view! {
        <div class="schedule-tab">
            <h3 class="panel-title">"Outage Work Schedule"</h3>
            <div class="gantt-scroll">
                <svg
                    class="gantt-svg"
                    viewBox=format!("0 0 {} {}", WIDTH, height)
                    preserveAspectRatio="xMidYMin meet"
                >
                    {ticks}
                    {legend}
                    {rows}
                </svg>
            </div>
        </div>
    }
}
