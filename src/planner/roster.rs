use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::models::employee::Employee;

pub const ALL_DEPARTMENTS: &str = "all";

/// Department filter: the `all` sentinel or an exact department name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DepartmentSelector {
    #[default]
    All,
    Named(String),
}

impl DepartmentSelector {
    pub fn matches(&self, department: &str) -> bool {
        match self {
            DepartmentSelector::All => true,
            DepartmentSelector::Named(name) => name == department,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            DepartmentSelector::All => ALL_DEPARTMENTS,
            DepartmentSelector::Named(name) => name,
        }
    }
}

impl From<&str> for DepartmentSelector {
    fn from(value: &str) -> Self {
        if value == ALL_DEPARTMENTS {
            DepartmentSelector::All
        } else {
            DepartmentSelector::Named(value.to_string())
        }
    }
}

impl Serialize for DepartmentSelector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for DepartmentSelector {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(DepartmentSelector::from(raw.as_str()))
    }
}

/// Employees whose name or email contains `search` (case-insensitive) and
/// whose department passes `selector`, in input order.
pub fn filter_roster<'a>(
    employees: &'a [Employee],
    search: &str,
    selector: &DepartmentSelector,
) -> Vec<&'a Employee> {
    let needle = search.to_lowercase();
    employees
        .iter()
        .filter(|employee| matches_search(employee, &needle) && selector.matches(&employee.department))
        .collect()
}

fn matches_search(employee: &Employee, needle: &str) -> bool {
    employee.name.to_lowercase().contains(needle) || employee.email.to_lowercase().contains(needle)
}
