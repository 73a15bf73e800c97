// src/rollup.rs
//
// Fleet Command - Aggregation Layer
// Pure rollups over the project book feeding the charts and tables.
//

use crate::state::{Project, ProjectStatus, System};

/// Summed actual spend per plant system (stacked bar input)
#[derive(Debug, Clone, PartialEq)]
pub struct SystemCost {
    pub system: System,
    pub labor_actual: f64,
    pub material_actual: f64,
}

impl SystemCost {
    pub fn total(&self) -> f64 {
        self.labor_actual + self.material_actual
    }
}

/// Actual labor/material cost per system, in fixed system order.
/// Systems with no projects still appear with zero totals.
pub fn system_costs(projects: &[Project]) -> Vec<SystemCost> {
    System::ALL
        .iter()
        .map(|&system| {
            let (labor, material) = projects
                .iter()
                .filter(|p| p.system == system)
                .fold((0.0, 0.0), |(l, m), p| {
                    (l + p.actual_labor, m + p.actual_mat)
                });
            SystemCost {
                system,
                labor_actual: labor,
                material_actual: material,
            }
        })
        .collect()
}

/// Project count per status. All three categories are always present,
/// zero counts included, so summary views keep a stable shape.
pub fn status_counts(projects: &[Project]) -> [(ProjectStatus, usize); 3] {
    ProjectStatus::ALL.map(|status| {
        let count = projects.iter().filter(|p| p.status == status).count();
        (status, count)
    })
}

/// One row of the cost control table
#[derive(Debug, Clone, PartialEq)]
pub struct FinancialRow {
    pub full_name: String,
    pub status: ProjectStatus,
    pub total_budget: f64,
    pub total_actual: f64,
    /// budget minus actual; negative signals overrun
    pub variance: f64,
}

/// Financial rollup per project: labor + material, budget vs actual.
pub fn financial_rows(projects: &[Project]) -> Vec<FinancialRow> {
    projects
        .iter()
        .map(|p| {
            let total_budget = p.budget_labor + p.budget_mat;
            let total_actual = p.actual_labor + p.actual_mat;
            FinancialRow {
                full_name: p.full_name.clone(),
                status: p.status,
                total_budget,
                total_actual,
                variance: total_budget - total_actual,
            }
        })
        .collect()
}

/// actual/budget ratio, 0.0 when the budget is zero (keeps NaN out of
/// the render path). Unclamped: overruns come back > 1.0.
pub fn budget_ratio(actual: f64, budget: f64) -> f64 {
    if budget <= 0.0 {
        0.0
    } else {
        actual / budget
    }
}

/// Clamp a ratio to [0, 1] for progress-bar widths. Display values
/// stay unclamped; only the bar geometry is bounded.
pub fn clamp_pct(ratio: f64) -> f64 {
    ratio.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::generate_projects;
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample_projects() -> Vec<Project> {
        let today = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
        generate_projects(today, &mut StdRng::seed_from_u64(42))
    }

    #[test]
    fn test_financial_rollup_conserves_totals() {
        let projects = sample_projects();
        let rows = financial_rows(&projects);
        assert_eq!(rows.len(), projects.len());

        let budget_sum: f64 = rows.iter().map(|r| r.total_budget).sum();
        let labor_sum: f64 = projects.iter().map(|p| p.budget_labor).sum();
        let mat_sum: f64 = projects.iter().map(|p| p.budget_mat).sum();
        assert!((budget_sum - (labor_sum + mat_sum)).abs() < 1e-6);

        let actual_sum: f64 = rows.iter().map(|r| r.total_actual).sum();
        let actual_parts: f64 = projects
            .iter()
            .map(|p| p.actual_labor + p.actual_mat)
            .sum();
        assert!((actual_sum - actual_parts).abs() < 1e-6);

        for row in &rows {
            assert!((row.variance - (row.total_budget - row.total_actual)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_completed_rows_land_near_budget() {
        let projects = sample_projects();
        for row in financial_rows(&projects)
            .iter()
            .filter(|r| r.status == ProjectStatus::Completed)
        {
            // Combined noise bounds: labor 0.95..1.05, material 0.9..1.1
            let ratio = row.total_actual / row.total_budget;
            assert!((0.9..1.1).contains(&ratio), "ratio {}", ratio);
        }
    }

    #[test]
    fn test_system_costs_cover_all_systems() {
        let projects = sample_projects();
        let costs = system_costs(&projects);
        assert_eq!(costs.len(), System::ALL.len());

        let rollup_total: f64 = costs.iter().map(|c| c.total()).sum();
        let direct_total: f64 = projects
            .iter()
            .map(|p| p.actual_labor + p.actual_mat)
            .sum();
        assert!((rollup_total - direct_total).abs() < 1e-6);

        // Empty input still yields every system, zeroed
        let empty = system_costs(&[]);
        assert_eq!(empty.len(), 5);
        assert!(empty.iter().all(|c| c.total() == 0.0));
    }

    #[test]
    fn test_status_counts_keep_all_categories() {
        let projects = sample_projects();
        let counts = status_counts(&projects);
        assert_eq!(counts.len(), 3);
        assert_eq!(counts.iter().map(|(_, n)| n).sum::<usize>(), projects.len());

        let counts = status_counts(&[]);
        assert!(counts.iter().all(|(_, n)| *n == 0));
    }

    #[test]
    fn test_budget_ratio_guards() {
        assert_eq!(budget_ratio(500.0, 0.0), 0.0);
        assert_eq!(budget_ratio(500.0, -1.0), 0.0);
        assert_eq!(budget_ratio(500.0, 1000.0), 0.5);

        // Overrun stays visible in the ratio, bounded in the bar
        let overrun = budget_ratio(1500.0, 1000.0);
        assert_eq!(overrun, 1.5);
        assert_eq!(clamp_pct(overrun), 1.0);
        assert_eq!(clamp_pct(-0.2), 0.0);
    }
}
