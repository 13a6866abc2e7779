use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EmployeeStatus {
    Active,
    Inactive,
    Vacation,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Department name; matched by exact string, there is no foreign key.
    pub department: String,
    pub position: String,
    pub location: String,
    pub status: EmployeeStatus,
}

impl Employee {
    /// Compact label used on calendar blocks: "Marie Dubois" becomes "Marie D.".
    pub fn short_label(&self) -> String {
        let mut parts = self.name.split_whitespace();
        match (parts.next(), parts.last()) {
            (Some(first), Some(last)) => match last.chars().next() {
                Some(initial) => format!("{} {}.", first, initial),
                None => first.to_string(),
            },
            (Some(first), None) => first.to_string(),
            _ => self.id.clone(),
        }
    }
}
