// src/components/financials.rs
//
// Fleet Command - Cost Control Tab
// Per-project budget vs actual with variance, filterable by status.
//

use leptos::*;

use crate::data;
use crate::rollup::financial_rows;
use crate::state::ProjectStatus;

const FILTER_OPTIONS: [&str; 4] = ["All", "In Progress", "Completed", "Not Started"];

#[component]
pub fn FinancialsTab() -> impl IntoView {
    let (filter, set_filter) = create_signal("All".to_string());

    let rows = create_memo(move |_| {
        let all = financial_rows(data::projects());
        match ProjectStatus::from_label(&filter.get()) {
            Some(status) => all.into_iter().filter(|r| r.status == status).collect(),
            None => all,
        }
    });

    let options = FILTER_OPTIONS
        .iter()
        .map(|&opt| {
            view! {
                <option value=opt selected=move || filter.get() == opt>{opt}</option>
            }
        })
        .collect_view();

    view! {
        <div class="financials-tab">
            <h3 class="panel-title">"💰 Cost Control Tower"</h3>

            <div class="filter-field">
                <label class="filter-label">"Filter by Status"</label>
                <select
                    class="filter-select"
                    on:change=move |ev| set_filter.set(event_target_value(&ev))
                >
                    {options}
                </select>
            </div>

            <table class="financial-table">
                <thead>
                    <tr>
                        <th>"Project Name"</th>
                        <th>"Status"</th>
                        <th class="num-cell">"Total Budget"</th>
                        <th class="num-cell">"Total Actual"</th>
                        <th class="num-cell">"Variance"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || rows.get()
                        key=|row| row.full_name.clone()
                        children=move |row| {
                            let pill = match row.status {
                                ProjectStatus::Completed => "pill pill-completed",
                                ProjectStatus::InProgress => "pill pill-progress",
                                ProjectStatus::NotStarted => "pill pill-notstarted",
                            };
                            let variance_class = if row.variance < 0.0 {
                                "num-cell variance-over"
                            } else {
                                "num-cell"
                            };
                            view! {
                                <tr>
                                    <td>{row.full_name.clone()}</td>
                                    <td><span class=pill>{row.status.label()}</span></td>
                                    <td class="num-cell">{format_usd(row.total_budget)}</td>
                                    <td class="num-cell">{format_usd(row.total_actual)}</td>
                                    <td class=variance_class>{format_usd(row.variance)}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
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
