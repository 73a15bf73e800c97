// src/state.rs
//
// Fleet Command - Data Model & Navigation State
//

use chrono::NaiveDate;
use leptos::*;
use serde::{Deserialize, Serialize};

/// Operating status of a generation site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SiteStatus {
    Running,
    PlannedOutage,
    UnplannedMaintenance,
}

impl SiteStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SiteStatus::Running => "Running",
            SiteStatus::PlannedOutage => "Planned Outage",
            SiteStatus::UnplannedMaintenance => "Unplanned Maintenance",
        }
    }

    pub fn is_outage(&self) -> bool {
        !matches!(self, SiteStatus::Running)
    }
}

/// A monitored generation site
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
    pub id: String,
    pub name: String,
    pub region: String,
    pub plant_type: String,
    pub capacity: String,
    pub status: SiteStatus,
    pub budget: f64,
    pub spend: f64,
    /// Outage completion percent, only populated for sites in outage
    pub progress: Option<u32>,
    /// Active alert description, only populated for sites in outage
    pub alert: Option<String>,
}

/// Category of a schedule window on the 2-year lookahead
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutageCategory {
    ActivePlanned,
    ActiveUnplanned,
    FuturePlanned,
}

impl OutageCategory {
    pub fn label(&self) -> &'static str {
        match self {
            OutageCategory::ActivePlanned => "Active Planned",
            OutageCategory::ActiveUnplanned => "Active Unplanned",
            OutageCategory::FuturePlanned => "Future Planned",
        }
    }
}

/// One outage window on the fleet schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub site: String,
    pub start: NaiveDate,
    pub finish: NaiveDate,
    pub category: OutageCategory,
    pub duration_label: String,
}

/// Plant system a maintenance project belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum System {
    GasTurbine,
    SteamTurbine,
    Hrsg,
    Generator,
    Bop,
}

impl System {
    pub const ALL: [System; 5] = [
        System::GasTurbine,
        System::SteamTurbine,
        System::Hrsg,
        System::Generator,
        System::Bop,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            System::GasTurbine => "Gas Turbine",
            System::SteamTurbine => "Steam Turbine",
            System::Hrsg => "HRSG",
            System::Generator => "Generator",
            System::Bop => "BOP",
        }
    }

    /// Abbreviated label for chart axes
    pub fn short_label(&self) -> &'static str {
        match self {
            System::GasTurbine => "GT",
            System::SteamTurbine => "ST",
            System::Hrsg => "HRSG",
            System::Generator => "GEN",
            System::Bop => "BOP",
        }
    }

    pub fn from_label(label: &str) -> Option<System> {
        System::ALL.iter().copied().find(|s| s.label() == label)
    }

    /// Fixed subsystem breakdown per system
    pub fn subsystems(&self) -> &'static [&'static str] {
        match self {
            System::GasTurbine => &["Combustion", "Compressor", "Turbine", "Rotor"],
            System::SteamTurbine => &["HP Section", "IP/LP Section", "Valves", "Bearings"],
            System::Hrsg => &["Pressure Parts", "Duct Burners", "SCR/CO", "Casing"],
            System::Generator => &["Stator", "Rotor", "Exciter"],
            System::Bop => &["Cooling Water", "Compressed Air", "Fuel Gas"],
        }
    }
}

/// Execution status of a maintenance project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectStatus {
    NotStarted,
    InProgress,
    Completed,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 3] = [
        ProjectStatus::NotStarted,
        ProjectStatus::InProgress,
        ProjectStatus::Completed,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::NotStarted => "Not Started",
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::Completed => "Completed",
        }
    }

    pub fn from_label(label: &str) -> Option<ProjectStatus> {
        ProjectStatus::ALL.iter().copied().find(|s| s.label() == label)
    }
}

/// A maintenance project within the planned outage scope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub full_name: String,
    pub system: System,
    pub subsystem: String,
    pub status: ProjectStatus,
    pub critical: bool,
    pub budget_labor: f64,
    pub actual_labor: f64,
    pub budget_mat: f64,
    pub actual_mat: f64,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Top-level screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Fleet,
    Detail,
}

/// Navigation state machine: Fleet <-> Detail, Detail carries a copy
/// of the selected site row. Session-scoped, never persisted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NavState {
    pub view: View,
    pub selected: Option<Site>,
}

impl NavState {
    pub fn new() -> Self {
        Self {
            view: View::Fleet,
            selected: None,
        }
    }

    pub fn open_site(&mut self, site: Site) {
        self.view = View::Detail;
        self.selected = Some(site);
    }

    pub fn close_detail(&mut self) {
        self.view = View::Fleet;
        self.selected = None;
    }
}

/// Which detail panel a site's status maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailKind {
    /// Full tabbed outage workspace (planned outages)
    Tabbed,
    /// Forced-outage incident panel
    Incident,
    /// Nominal operations panel
    Nominal,
}

impl DetailKind {
    pub fn for_status(status: SiteStatus) -> DetailKind {
        match status {
            SiteStatus::PlannedOutage => DetailKind::Tabbed,
            SiteStatus::UnplannedMaintenance => DetailKind::Incident,
            SiteStatus::Running => DetailKind::Nominal,
        }
    }
}

/// Main application state
/// The nav signal is Copy, so AppState is Copy and can move into closures
#[derive(Clone, Copy)]
pub struct AppState {
    pub nav: RwSignal<NavState>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            nav: create_rw_signal(NavState::new()),
        }
    }

    pub fn open_site(&self, site: Site) {
        log::info!("navigate: detail view for {}", site.id);
        self.nav.update(|nav| nav.open_site(site));
    }

    pub fn go_home(&self) {
        log::info!("navigate: fleet view");
        self.nav.update(|nav| nav.close_detail());
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dummy_site(status: SiteStatus) -> Site {
        Site {
            id: "SITE-99".to_string(),
            name: "Test Site".to_string(),
            region: "North".to_string(),
            plant_type: "Gas".to_string(),
            capacity: "100MW".to_string(),
            status,
            budget: 1_000_000.0,
            spend: 250_000.0,
            progress: None,
            alert: None,
        }
    }

    #[test]
    fn test_nav_round_trip_is_identity() {
        let mut nav = NavState::new();
        nav.open_site(dummy_site(SiteStatus::PlannedOutage));
        nav.close_detail();
        assert_eq!(nav, NavState::new());
    }

    #[test]
    fn test_open_site_carries_selection() {
        let mut nav = NavState::new();
        let site = dummy_site(SiteStatus::Running);
        nav.open_site(site.clone());
        assert_eq!(nav.view, View::Detail);
        assert_eq!(nav.selected, Some(site));
    }

    #[test]
    fn test_detail_kind_dispatch() {
        assert_eq!(
            DetailKind::for_status(SiteStatus::PlannedOutage),
            DetailKind::Tabbed
        );
        assert_eq!(
            DetailKind::for_status(SiteStatus::UnplannedMaintenance),
            DetailKind::Incident
        );
        assert_eq!(
            DetailKind::for_status(SiteStatus::Running),
            DetailKind::Nominal
        );
    }

    #[test]
    fn test_subsystem_mapping_is_fixed() {
        assert_eq!(
            System::GasTurbine.subsystems(),
            &["Combustion", "Compressor", "Turbine", "Rotor"]
        );
        assert_eq!(System::Generator.subsystems().len(), 3);
        for system in System::ALL {
            assert!(!system.subsystems().is_empty());
        }
    }

    #[test]
    fn test_status_label_round_trip() {
        for status in ProjectStatus::ALL {
            assert_eq!(ProjectStatus::from_label(status.label()), Some(status));
        }
        for system in System::ALL {
            assert_eq!(System::from_label(system.label()), Some(system));
        }
    }
}
