use serde::Serialize;
use chrono::NaiveDate;

use crate::data::Dataset;
use crate::models::department::Department;
use crate::planner::calendar::week_days;

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_employees: usize,
    pub departments: usize,
    pub week_start: NaiveDate,
    pub active_shifts: usize,
    pub planned_hours: f64,
}

/// Head-line figures for the week containing `reference`. Cancelled shifts
/// count neither as active nor toward planned hours.
pub fn dashboard_stats(dataset: &Dataset, reference: NaiveDate) -> DashboardStats {
    let week = week_days(reference);
    let active: Vec<_> = dataset
        .shifts
        .iter()
        .filter(|shift| week.contains(&shift.date) && !shift.is_cancelled())
        .collect();
    let planned_minutes: i64 = active.iter().map(|shift| shift.duration().num_minutes()).sum();

    DashboardStats {
        total_employees: dataset.employees.len(),
        departments: dataset.departments.len(),
        week_start: week[0],
        active_shifts: active.len(),
        planned_hours: planned_minutes as f64 / 60.0,
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentHeadcount {
    #[serde(flatten)]
    pub department: Department,
    pub roster_count: u32,
}

impl DepartmentHeadcount {
    pub fn drifts(&self) -> bool {
        self.department.employee_count != self.roster_count
    }
}

/// Declared head count next to the number of roster entries naming the
/// department. Nothing is reconciled.
pub fn department_headcounts(dataset: &Dataset) -> Vec<DepartmentHeadcount> {
    dataset
        .departments
        .iter()
        .map(|department| DepartmentHeadcount {
            department: department.clone(),
            roster_count: dataset
                .employees
                .iter()
                .filter(|employee| employee.department == department.name)
                .count() as u32,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sample_dataset;
    use crate::models::shift::ShiftStatus;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn sample_week_totals() {
        let stats = dashboard_stats(&sample_dataset(), date(2024, 1, 21));
        assert_eq!(stats.total_employees, 3);
        assert_eq!(stats.departments, 4);
        assert_eq!(stats.week_start, date(2024, 1, 15));
        assert_eq!(stats.active_shifts, 2);
        assert_eq!(stats.planned_hours, 16.0);
    }

    #[test]
    fn cancelled_and_out_of_week_shifts_are_ignored() {
        let mut dataset = sample_dataset();
        dataset.shifts[1].status = ShiftStatus::Cancelled;
        let stats = dashboard_stats(&dataset, date(2024, 1, 15));
        assert_eq!(stats.active_shifts, 1);
        assert_eq!(stats.planned_hours, 8.0);

        let stats = dashboard_stats(&dataset, date(2024, 1, 22));
        assert_eq!(stats.active_shifts, 0);
        assert_eq!(stats.planned_hours, 0.0);
    }

    #[test]
    fn headcount_reports_drift_without_fixing_it() {
        let counts = department_headcounts(&sample_dataset());
        let production = &counts[0];
        assert_eq!(production.department.name, "Production");
        assert_eq!(production.department.employee_count, 25);
        assert_eq!(production.roster_count, 1);
        assert!(production.drifts());

        let logistique = &counts[3];
        assert_eq!(logistique.roster_count, 0);
    }

    #[test]
    fn headcount_serializes_flat() {
        let counts = department_headcounts(&sample_dataset());
        let json = serde_json::to_value(&counts[1]).unwrap();
        assert_eq!(json["name"], "Maintenance");
        assert_eq!(json["employeeCount"], 8);
        assert_eq!(json["rosterCount"], 1);
    }
}
