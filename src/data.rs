// src/data.rs
//
// Fleet Command - Synthetic Data Generator
// Builds the fleet roster, 2-year outage schedule and maintenance
// project book once per session; the view layer only ever reads them.
//

use chrono::{Duration, Local, NaiveDate};
use once_cell::sync::Lazy;
use rand::Rng;

use crate::state::{OutageCategory, Project, ProjectStatus, ScheduleEntry, Site, SiteStatus, System};

/// Fixed 7-site fleet: 2 sites in outage, 5 running
pub fn generate_fleet() -> Vec<Site> {
    vec![
        Site {
            id: "SITE-01".to_string(),
            name: "North Substation".to_string(),
            region: "North".to_string(),
            plant_type: "Combined Cycle".to_string(),
            capacity: "650MW".to_string(),
            status: SiteStatus::PlannedOutage,
            budget: 6_487_261.0,
            spend: 657_375.0,
            progress: Some(32),
            alert: Some("Rotor Lift".to_string()),
        },
        Site {
            id: "SITE-02".to_string(),
            name: "South Gen Unit 1".to_string(),
            region: "South".to_string(),
            plant_type: "Gas Turbine".to_string(),
            capacity: "220MW".to_string(),
            status: SiteStatus::UnplannedMaintenance,
            budget: 1_200_000.0,
            spend: 980_000.0,
            progress: Some(85),
            alert: Some("GSU Failure".to_string()),
        },
        Site {
            id: "SITE-03".to_string(),
            name: "Metro Hydro".to_string(),
            region: "Metro".to_string(),
            plant_type: "Hydro".to_string(),
            capacity: "450MW".to_string(),
            status: SiteStatus::Running,
            budget: 3_500_000.0,
            spend: 1_200_000.0,
            progress: None,
            alert: None,
        },
        Site {
            id: "SITE-04".to_string(),
            name: "Rural Solar".to_string(),
            region: "Rural".to_string(),
            plant_type: "Solar".to_string(),
            capacity: "150MW".to_string(),
            status: SiteStatus::Running,
            budget: 800_000.0,
            spend: 450_000.0,
            progress: None,
            alert: None,
        },
        Site {
            id: "SITE-05".to_string(),
            name: "East Peaker".to_string(),
            region: "East".to_string(),
            plant_type: "Gas".to_string(),
            capacity: "180MW".to_string(),
            status: SiteStatus::Running,
            budget: 2_100_000.0,
            spend: 1_800_000.0,
            progress: None,
            alert: None,
        },
        Site {
            id: "SITE-06".to_string(),
            name: "West Valley".to_string(),
            region: "West".to_string(),
            plant_type: "CCGT".to_string(),
            capacity: "600MW".to_string(),
            status: SiteStatus::Running,
            budget: 5_100_000.0,
            spend: 2_100_000.0,
            progress: None,
            alert: None,
        },
        Site {
            id: "SITE-07".to_string(),
            name: "Coast Wind".to_string(),
            region: "Coast".to_string(),
            plant_type: "Wind".to_string(),
            capacity: "300MW".to_string(),
            status: SiteStatus::Running,
            budget: 1_500_000.0,
            spend: 600_000.0,
            progress: None,
            alert: None,
        },
    ]
}

// Seasonal outage windows on the lookahead: Fall 2026, Spring 2027, Fall 2027
const SEASON_OFFSET_DAYS: [i64; 3] = [240, 420, 600];

// Standard outage durations: minor, standard, major overhaul
const OUTAGE_DURATIONS: [i64; 3] = [28, 45, 120];

/// 2-year lookahead schedule for the whole fleet.
///
/// Sites in outage get one active window anchored on `today`; every site
/// then gets exactly one future window in a random seasonal slot, with
/// +/-15 days of stagger so the fleet does not line up artificially.
pub fn generate_schedule(fleet: &[Site], today: NaiveDate, rng: &mut impl Rng) -> Vec<ScheduleEntry> {
    let mut schedule = Vec::new();

    for site in fleet {
        match site.status {
            SiteStatus::PlannedOutage => schedule.push(ScheduleEntry {
                site: site.name.clone(),
                start: today - Duration::days(15),
                finish: today + Duration::days(30),
                category: OutageCategory::ActivePlanned,
                duration_label: "45 Days".to_string(),
            }),
            SiteStatus::UnplannedMaintenance => schedule.push(ScheduleEntry {
                site: site.name.clone(),
                start: today - Duration::days(2),
                finish: today + Duration::days(5),
                category: OutageCategory::ActiveUnplanned,
                duration_label: "7 Days".to_string(),
            }),
            SiteStatus::Running => {}
        }

        let season = SEASON_OFFSET_DAYS[rng.gen_range(0..SEASON_OFFSET_DAYS.len())];
        let duration = OUTAGE_DURATIONS[rng.gen_range(0..OUTAGE_DURATIONS.len())];
        let outage_type = if duration == 120 {
            "Major Overhaul"
        } else {
            "Planned Maintenance"
        };

        let stagger = rng.gen_range(-15..=15);
        let start = today + Duration::days(season + stagger);

        schedule.push(ScheduleEntry {
            site: site.name.clone(),
            start,
            finish: start + Duration::days(duration),
            category: OutageCategory::FuturePlanned,
            duration_label: format!("{} Days ({})", duration, outage_type),
        });
    }

    schedule
}

/// Number of maintenance projects in the outage scope
pub const PROJECT_COUNT: usize = 85;

// Status draw pool: In Progress is twice as likely as the others
const STATUS_POOL: [ProjectStatus; 4] = [
    ProjectStatus::NotStarted,
    ProjectStatus::InProgress,
    ProjectStatus::InProgress,
    ProjectStatus::Completed,
];

/// Synthetic maintenance project book: 85 rows across the 5 plant systems.
///
/// Actuals derive from budget x completion fraction x a noise factor,
/// so Completed projects land near budget and Not Started ones at zero.
pub fn generate_projects(today: NaiveDate, rng: &mut impl Rng) -> Vec<Project> {
    let mut projects = Vec::with_capacity(PROJECT_COUNT);

    for i in 1..=PROJECT_COUNT {
        let system = System::ALL[rng.gen_range(0..System::ALL.len())];
        let subsystems = system.subsystems();
        let subsystem = subsystems[rng.gen_range(0..subsystems.len())];

        let budget_labor = rng.gen_range(20_000..=100_000) as f64;
        let budget_mat = rng.gen_range(10_000..=150_000) as f64;
        let status = STATUS_POOL[rng.gen_range(0..STATUS_POOL.len())];

        let pct = match status {
            ProjectStatus::Completed => 1.0,
            ProjectStatus::InProgress => rng.gen_range(0.1..0.9),
            ProjectStatus::NotStarted => 0.0,
        };

        let id = format!("PRJ-{}", 1000 + i);
        let name = format!("{} Task {}", subsystem, i);
        let full_name = format!("{}: {}", id, name);

        let start = today + Duration::days(rng.gen_range(0..=40));
        let end = start + Duration::days(rng.gen_range(5..=15));

        projects.push(Project {
            id,
            name,
            full_name,
            system,
            subsystem: subsystem.to_string(),
            status,
            critical: rng.gen_range(0..3) == 0,
            budget_labor,
            actual_labor: budget_labor * pct * rng.gen_range(0.95..1.05),
            budget_mat,
            actual_mat: budget_mat * pct * rng.gen_range(0.9..1.1),
            start,
            end,
        });
    }

    projects
}

/// 24-point output trace for the nominal panel, percent of rated output.
///
/// Deliberately regenerated on every render (liveness simulation) and
/// therefore NOT memoized below.
pub fn nominal_sparkline(rng: &mut impl Rng) -> Vec<f64> {
    (0..24).map(|_| rng.gen_range(90.0..100.0)).collect()
}

// Session-lifetime caches. Lazy init is lock protected, so concurrent
// first access cannot race two generations of the random tables.
static FLEET: Lazy<Vec<Site>> = Lazy::new(generate_fleet);

static SCHEDULE: Lazy<Vec<ScheduleEntry>> = Lazy::new(|| {
    generate_schedule(&FLEET, Local::now().date_naive(), &mut rand::thread_rng())
});

static PROJECTS: Lazy<Vec<Project>> =
    Lazy::new(|| generate_projects(Local::now().date_naive(), &mut rand::thread_rng()));

pub fn fleet() -> &'static [Site] {
    &FLEET
}

pub fn schedule() -> &'static [ScheduleEntry] {
    &SCHEDULE
}

pub fn projects() -> &'static [Project] {
    &PROJECTS
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 7).unwrap()
    }

    #[test]
    fn test_fleet_composition() {
        let fleet = generate_fleet();
        assert_eq!(fleet.len(), 7);

        let outages: Vec<_> = fleet.iter().filter(|s| s.status.is_outage()).collect();
        let running: Vec<_> = fleet
            .iter()
            .filter(|s| s.status == SiteStatus::Running)
            .collect();
        assert_eq!(outages.len(), 2);
        assert_eq!(running.len(), 5);

        // Outage rows carry the incident fields, running rows do not
        for site in &outages {
            assert!(site.progress.is_some());
            assert!(site.alert.is_some());
        }
        for site in &running {
            assert!(site.progress.is_none());
            assert!(site.alert.is_none());
        }
    }

    #[test]
    fn test_site_02_forced_outage() {
        let fleet = generate_fleet();
        let site = fleet.iter().find(|s| s.id == "SITE-02").unwrap();
        assert_eq!(site.status, SiteStatus::UnplannedMaintenance);
        assert_eq!(site.alert.as_deref(), Some("GSU Failure"));
    }

    #[test]
    fn test_schedule_active_windows() {
        let fleet = generate_fleet();
        let mut rng = StdRng::seed_from_u64(7);
        let schedule = generate_schedule(&fleet, today(), &mut rng);

        let planned = schedule
            .iter()
            .find(|e| e.category == OutageCategory::ActivePlanned)
            .unwrap();
        assert_eq!(planned.start, today() - Duration::days(15));
        assert_eq!(planned.finish, today() + Duration::days(30));
        assert_eq!(planned.duration_label, "45 Days");

        let unplanned = schedule
            .iter()
            .find(|e| e.category == OutageCategory::ActiveUnplanned)
            .unwrap();
        assert_eq!(unplanned.start, today() - Duration::days(2));
        assert_eq!(unplanned.finish, today() + Duration::days(5));
        assert_eq!(unplanned.duration_label, "7 Days");
    }

    #[test]
    fn test_schedule_entry_counts() {
        let fleet = generate_fleet();
        let mut rng = StdRng::seed_from_u64(11);
        let schedule = generate_schedule(&fleet, today(), &mut rng);

        // 2 active windows + one future window per site
        assert_eq!(schedule.len(), fleet.len() + 2);

        for site in &fleet {
            let futures = schedule
                .iter()
                .filter(|e| e.site == site.name && e.category == OutageCategory::FuturePlanned)
                .count();
            assert_eq!(futures, 1, "site {} future windows", site.name);
        }
    }

    #[test]
    fn test_future_windows_duration_and_label() {
        let fleet = generate_fleet();
        // Sweep seeds so all three durations show up
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let schedule = generate_schedule(&fleet, today(), &mut rng);

            for entry in schedule
                .iter()
                .filter(|e| e.category == OutageCategory::FuturePlanned)
            {
                let days = (entry.finish - entry.start).num_days();
                assert!(OUTAGE_DURATIONS.contains(&days), "duration {} days", days);
                if days == 120 {
                    assert!(entry.duration_label.contains("Major Overhaul"));
                } else {
                    assert!(entry.duration_label.contains("Planned Maintenance"));
                }

                // Window sits in a seasonal slot: base offset +/- 15 days
                let offset = (entry.start - today()).num_days();
                assert!(SEASON_OFFSET_DAYS
                    .iter()
                    .any(|base| (offset - base).abs() <= 15));
            }
        }
    }

    #[test]
    fn test_schedule_deterministic_under_seed() {
        let fleet = generate_fleet();
        let a = generate_schedule(&fleet, today(), &mut StdRng::seed_from_u64(3));
        let b = generate_schedule(&fleet, today(), &mut StdRng::seed_from_u64(3));
        assert_eq!(a, b);
    }

    #[test]
    fn test_project_count_and_ids() {
        let mut rng = StdRng::seed_from_u64(42);
        let projects = generate_projects(today(), &mut rng);
        assert_eq!(projects.len(), PROJECT_COUNT);
        assert_eq!(projects[0].id, "PRJ-1001");
        assert_eq!(projects[84].id, "PRJ-1085");
        assert_eq!(projects[0].full_name, format!("PRJ-1001: {}", projects[0].name));
    }

    #[test]
    fn test_project_actuals_track_status() {
        let mut rng = StdRng::seed_from_u64(42);
        let projects = generate_projects(today(), &mut rng);

        for p in &projects {
            match p.status {
                ProjectStatus::NotStarted => {
                    assert_eq!(p.actual_labor, 0.0);
                    assert_eq!(p.actual_mat, 0.0);
                }
                ProjectStatus::Completed => {
                    let labor_ratio = p.actual_labor / p.budget_labor;
                    let mat_ratio = p.actual_mat / p.budget_mat;
                    assert!((0.95..1.05).contains(&labor_ratio), "labor {}", labor_ratio);
                    assert!((0.9..1.1).contains(&mat_ratio), "material {}", mat_ratio);
                }
                ProjectStatus::InProgress => {
                    assert!(p.actual_labor > 0.0);
                    assert!(p.actual_labor < p.budget_labor * 0.9 * 1.05 + 1.0);
                }
            }
        }
    }

    #[test]
    fn test_project_dates_and_subsystems() {
        let mut rng = StdRng::seed_from_u64(9);
        let projects = generate_projects(today(), &mut rng);

        for p in &projects {
            let offset = (p.start - today()).num_days();
            let duration = (p.end - p.start).num_days();
            assert!((0..=40).contains(&offset));
            assert!((5..=15).contains(&duration));
            assert!(p.system.subsystems().contains(&p.subsystem.as_str()));
            assert!((20_000.0..=100_000.0).contains(&p.budget_labor));
            assert!((10_000.0..=150_000.0).contains(&p.budget_mat));
        }
    }

    #[test]
    fn test_sparkline_shape() {
        let mut rng = StdRng::seed_from_u64(1);
        let points = nominal_sparkline(&mut rng);
        assert_eq!(points.len(), 24);
        assert!(points.iter().all(|v| (90.0..100.0).contains(v)));

        // Reproducible under the same seed, fresh values otherwise
        let again = nominal_sparkline(&mut StdRng::seed_from_u64(1));
        assert_eq!(points, again);
    }

    #[test]
    fn test_cached_tables_are_stable() {
        assert_eq!(fleet().len(), 7);
        assert_eq!(projects().len(), PROJECT_COUNT);
        // Same slice every call within a session
        assert!(std::ptr::eq(fleet(), fleet()));
        assert!(std::ptr::eq(schedule(), schedule()));
        assert!(std::ptr::eq(projects(), projects()));
    }
}
