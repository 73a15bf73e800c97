// src/components/nominal.rs
//
// Fleet Command - Nominal Status Panel
// Output trace is re-rolled on every render: a deliberate liveness
// effect, not cached alongside the fleet tables.
//

use leptos::*;

use crate::data::nominal_sparkline;

const CHART_W: f64 = 400.0;
const CHART_H: f64 = 120.0;
const PADDING: f64 = 6.0;

// Y domain around the 90-100% output band
const Y_MIN: f64 = 88.0;
const Y_MAX: f64 = 102.0;

#[component]
pub fn NominalPanel() -> impl IntoView {
    let points = nominal_sparkline(&mut rand::thread_rng());
    let current = points.last().copied().unwrap_or(0.0);

    view! {
        <div class="nominal-panel">
            <div class="nominal-banner">"✅ Operational - Nominal Status"</div>

            <div class="panel chart-panel">
                <div class="nominal-current">
                    <span class="nominal-value">{format!("{:.1}%", current)}</span>
                    <span class="nominal-unit">"of rated output"</span>
                </div>

                <svg class="chart-svg" viewBox=format!("0 0 {} {}", CHART_W, CHART_H) preserveAspectRatio="none">
                    <line x1="0" y1="30" x2=CHART_W y2="30" class="grid-line" />
                    <line x1="0" y1="60" x2=CHART_W y2="60" class="grid-line" />
                    <line x1="0" y1="90" x2=CHART_W y2="90" class="grid-line" />

                    <path
                        class="chart-area"
                        d=generate_area(&points)
                        fill="url(#output-gradient)"
                        opacity="0.3"
                    />
                    <path
                        class="chart-line"
                        d=generate_path(&points)
                        fill="none"
                        stroke="#34d399"
                        stroke-width="2"
                    />

                    <defs>
                        <linearGradient id="output-gradient" x1="0%" y1="0%" x2="0%" y2="100%">
                            <stop offset="0%" stop-color="#34d399" stop-opacity="0.8" />
                            <stop offset="100%" stop-color="#34d399" stop-opacity="0.0" />
                        </linearGradient>
                    </defs>
                </svg>

                <div class="chart-labels">
                    <span>"-24h"</span>
                    <span>"-12h"</span>
                    <span>"now"</span>
                </div>
            </div>
        </div>
    }
}

fn scale(points: &[f64]) -> Vec<(f64, f64)> {
    points
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let x = i as f64 / (points.len().max(2) - 1) as f64 * CHART_W;
            let y = CHART_H - PADDING
                - ((value - Y_MIN) / (Y_MAX - Y_MIN)) * (CHART_H - PADDING * 2.0);
            (x, y)
        })
        .collect()
}

/// SVG path for the output line
fn generate_path(points: &[f64]) -> String {
    let scaled = scale(points);
    let Some(first) = scaled.first() else {
        return String::new();
    };

    let joined = scaled
        .iter()
        .map(|(x, y)| format!("{:.1},{:.1}", x, y))
        .collect::<Vec<_>>()
        .join(" L ");

    format!("M {:.1},{:.1} L {}", first.0, first.1, joined)
}

/// SVG path for the area fill under the line
fn generate_area(points: &[f64]) -> String {
    let scaled = scale(points);
    let Some(first) = scaled.first() else {
        return String::new();
    };

    let mut parts = scaled
        .iter()
        .map(|(x, y)| format!("{:.1},{:.1}", x, y))
        .collect::<Vec<_>>();
    parts.push(format!("{:.1},{:.1}", CHART_W, CHART_H));
    parts.push(format!("0,{:.1}", CHART_H));

    format!("M {:.1},{:.1} L {} Z", first.0, first.1, parts.join(" L "))
}
