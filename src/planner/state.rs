use chrono::NaiveDate;
use log::{info, warn};

use crate::data::Dataset;
use crate::models::employee::Employee;
use crate::models::file::ImportRecord;
use crate::models::view::{Tab, ViewMode};
use crate::planner::calendar::{self, CalendarView, Direction, Week};
use crate::planner::roster::{filter_roster, DepartmentSelector};
use crate::planner::stats::{self, DashboardStats, DepartmentHeadcount};

/// The single owner of dashboard view state. Every change goes through one of
/// the named transitions below; views are derived on each read.
#[derive(Debug, Clone)]
pub struct PlannerState {
    dataset: Dataset,
    active_tab: Tab,
    search: String,
    department: DepartmentSelector,
    home_date: NaiveDate,
    reference_date: NaiveDate,
    view_mode: ViewMode,
    imports: Vec<ImportRecord>,
}

impl PlannerState {
    pub fn new(dataset: Dataset, reference_date: NaiveDate) -> Self {
        Self {
            dataset,
            active_tab: Tab::default(),
            search: String::new(),
            department: DepartmentSelector::All,
            home_date: reference_date,
            reference_date,
            view_mode: ViewMode::default(),
            imports: Vec::new(),
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn department(&self) -> &DepartmentSelector {
        &self.department
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn imports(&self) -> &[ImportRecord] {
        &self.imports
    }

    /// Returns whether the active tab changed.
    pub fn set_tab(&mut self, tab: Tab) -> bool {
        if self.active_tab == tab {
            return false;
        }
        info!("Active tab {} -> {}", self.active_tab, tab);
        self.active_tab = tab;
        true
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        info!("Roster search set to '{}'", self.search);
    }

    pub fn set_department(&mut self, department: DepartmentSelector) {
        info!("Department filter set to '{}'", department.as_str());
        self.department = department;
    }

    pub fn set_reference_date(&mut self, date: NaiveDate) {
        info!("Calendar reference date set to {}", date);
        self.reference_date = date;
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        info!("Calendar view mode set to {}", mode);
        self.view_mode = mode;
    }

    /// Steps the reference date one period back or forth. Leaves the state
    /// untouched and returns `None` when the step would leave the supported
    /// calendar range.
    pub fn navigate(&mut self, direction: Direction) -> Option<NaiveDate> {
        let moved = calendar::step(self.reference_date, self.view_mode, direction)?;
        self.set_reference_date(moved);
        Some(moved)
    }

    /// Back to the date the service started on.
    pub fn return_home(&mut self) -> NaiveDate {
        self.set_reference_date(self.home_date);
        self.home_date
    }

    pub fn record_import(&mut self, record: ImportRecord) {
        info!("Recorded import of '{}' ({} bytes)", record.file_name, record.size_bytes);
        self.imports.push(record);
    }

    pub fn roster(&self) -> Vec<&Employee> {
        filter_roster(&self.dataset.employees, &self.search, &self.department)
    }

    pub fn week(&self) -> Week {
        calendar::week_days(self.reference_date)
    }

    pub fn calendar(&self) -> CalendarView {
        calendar::calendar_view(&self.dataset, self.reference_date, self.view_mode)
    }

    pub fn stats(&self) -> DashboardStats {
        stats::dashboard_stats(&self.dataset, self.reference_date)
    }

    pub fn headcounts(&self) -> Vec<DepartmentHeadcount> {
        stats::department_headcounts(&self.dataset)
    }

    /// Logs every department whose declared head count disagrees with the
    /// roster. Returns how many drift.
    pub fn report_headcount_drift(&self) -> usize {
        let drifting: Vec<_> = self.headcounts().into_iter().filter(|entry| entry.drifts()).collect();
        for entry in &drifting {
            warn!(
                "Department '{}' declares {} employees but the roster lists {}",
                entry.department.name, entry.department.employee_count, entry.roster_count
            );
        }
        drifting.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sample_dataset;
    use chrono::Utc;
    use uuid::Uuid;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn state() -> PlannerState {
        PlannerState::new(sample_dataset(), date(2024, 1, 17))
    }

    #[test]
    fn starts_on_dashboard_with_open_filter() {
        let state = state();
        assert_eq!(state.active_tab(), Tab::Dashboard);
        assert_eq!(state.search(), "");
        assert_eq!(state.department(), &DepartmentSelector::All);
        assert_eq!(state.view_mode(), ViewMode::Week);
        assert_eq!(state.roster().len(), 3);
    }

    #[test]
    fn exactly_one_tab_after_any_sequence() {
        let mut state = state();
        let sequence = [Tab::Planning, Tab::Employees, Tab::Employees, Tab::Dashboard, Tab::Departments];
        for tab in sequence {
            state.set_tab(tab);
            assert_eq!(state.active_tab(), tab);
            assert_eq!(Tab::ALL.iter().filter(|t| **t == state.active_tab()).count(), 1);
        }
    }

    #[test]
    fn reselecting_active_tab_is_a_no_op() {
        let mut state = state();
        assert!(state.set_tab(Tab::Planning));
        let before = state.clone();
        assert!(!state.set_tab(Tab::Planning));
        assert_eq!(state.active_tab(), before.active_tab());
        assert_eq!(state.reference_date(), before.reference_date());
    }

    #[test]
    fn roster_follows_filter_transitions() {
        let mut state = state();
        state.set_search("MAR");
        assert_eq!(state.roster().len(), 2);

        state.set_department(DepartmentSelector::from("Maintenance"));
        let roster = state.roster();
        assert_eq!(roster.len(), 1);
        assert_eq!(roster[0].name, "Jean Martin");

        state.set_department(DepartmentSelector::from("Logistique"));
        assert!(state.roster().is_empty());
    }

    #[test]
    fn navigation_respects_view_mode() {
        let mut state = state();
        assert_eq!(state.week()[0], date(2024, 1, 15));

        assert_eq!(state.navigate(Direction::Next), Some(date(2024, 1, 24)));
        assert_eq!(state.week()[0], date(2024, 1, 22));

        state.set_view_mode(ViewMode::Month);
        assert_eq!(state.navigate(Direction::Previous), Some(date(2023, 12, 24)));

        assert_eq!(state.return_home(), date(2024, 1, 17));
        assert_eq!(state.reference_date(), date(2024, 1, 17));
    }

    #[test]
    fn navigation_stops_at_range_edge() {
        let mut state = PlannerState::new(sample_dataset(), date(1900, 1, 3));
        assert_eq!(state.navigate(Direction::Previous), None);
        assert_eq!(state.reference_date(), date(1900, 1, 3));
    }

    #[test]
    fn sample_departments_all_drift() {
        assert_eq!(state().report_headcount_drift(), 4);
    }

    #[test]
    fn imports_are_kept_in_arrival_order() {
        let mut state = state();
        for name in ["planning.xlsx", "equipes.csv"] {
            state.record_import(ImportRecord {
                id: Uuid::new_v4(),
                file_name: name.to_string(),
                size_bytes: 10,
                detected_mime: None,
                received_at: Utc::now(),
            });
        }
        let names: Vec<_> = state.imports().iter().map(|r| r.file_name.as_str()).collect();
        assert_eq!(names, vec!["planning.xlsx", "equipes.csv"]);
    }
}
