use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;
use chrono::{NaiveDate, NaiveTime};
use log::info;

use crate::models::department::Department;
use crate::models::employee::{Employee, EmployeeStatus};
use crate::models::shift::{Shift, ShiftStatus, ShiftType};

/// Immutable records backing every view.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(default)]
    pub employees: Vec<Employee>,
    #[serde(default)]
    pub departments: Vec<Department>,
    #[serde(default)]
    pub shifts: Vec<Shift>,
}

impl Dataset {
    pub fn employee(&self, id: &str) -> Option<&Employee> {
        self.employees.iter().find(|employee| employee.id == id)
    }
}

/// Reads a JSON dataset from `path`, or falls back to the built-in sample.
pub async fn load_dataset(path: Option<&Path>) -> io::Result<Dataset> {
    let Some(path) = path else {
        info!("Using built-in sample dataset");
        return Ok(sample_dataset());
    };

    let raw = tokio::fs::read_to_string(path).await?;
    let dataset: Dataset = serde_json::from_str(&raw).map_err(|err| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("Invalid dataset {}: {}", path.display(), err),
        )
    })?;

    info!(
        "Loaded dataset from {} ({} employees, {} departments, {} shifts)",
        path.display(),
        dataset.employees.len(),
        dataset.departments.len(),
        dataset.shifts.len()
    );
    Ok(dataset)
}

#[allow(clippy::too_many_arguments)]
fn employee(
    id: &str,
    name: &str,
    email: &str,
    phone: &str,
    department: &str,
    position: &str,
    location: &str,
    status: EmployeeStatus,
) -> Employee {
    Employee {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        department: department.to_string(),
        position: position.to_string(),
        location: location.to_string(),
        status,
    }
}

fn department(id: &str, name: &str, color: &str, manager: &str, employee_count: u32) -> Department {
    Department {
        id: id.to_string(),
        name: name.to_string(),
        color: color.to_string(),
        manager: manager.to_string(),
        employee_count,
    }
}

fn sample_shift(id: &str, employee_id: &str, start: u32, end: u32, status: ShiftStatus) -> Option<Shift> {
    Some(Shift {
        id: id.to_string(),
        employee_id: employee_id.to_string(),
        date: NaiveDate::from_ymd_opt(2024, 1, 15)?,
        start_time: NaiveTime::from_hms_opt(start, 0, 0)?,
        end_time: NaiveTime::from_hms_opt(end, 0, 0)?,
        shift_type: ShiftType::Normal,
        status,
        notes: None,
    })
}

pub fn sample_dataset() -> Dataset {
    let employees = vec![
        employee(
            "1",
            "Marie Dubois",
            "marie.dubois@gmsi.fr",
            "+33 1 23 45 67 89",
            "Production",
            "Opératrice",
            "Atelier A",
            EmployeeStatus::Active,
        ),
        employee(
            "2",
            "Jean Martin",
            "jean.martin@gmsi.fr",
            "+33 1 23 45 67 90",
            "Maintenance",
            "Technicien",
            "Atelier B",
            EmployeeStatus::Active,
        ),
        employee(
            "3",
            "Sophie Laurent",
            "sophie.laurent@gmsi.fr",
            "+33 1 23 45 67 91",
            "Qualité",
            "Contrôleuse",
            "Laboratoire",
            EmployeeStatus::Vacation,
        ),
    ];

    let departments = vec![
        department("1", "Production", "bg-blue-500", "Pierre Durand", 25),
        department("2", "Maintenance", "bg-green-500", "Alain Moreau", 8),
        department("3", "Qualité", "bg-purple-500", "Catherine Blanc", 6),
        department("4", "Logistique", "bg-orange-500", "Michel Roux", 12),
    ];

    let shifts = [
        sample_shift("1", "1", 8, 16, ShiftStatus::Scheduled),
        sample_shift("2", "2", 14, 22, ShiftStatus::Confirmed),
    ]
    .into_iter()
    .flatten()
    .collect();

    Dataset { employees, departments, shifts }
}
