use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: String,
    pub name: String,
    pub color: String,
    pub manager: String,
    /// Declared head count. Not derived from the roster and may drift.
    pub employee_count: u32,
}
