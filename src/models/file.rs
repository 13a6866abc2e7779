use serde::Serialize;
use uuid::Uuid;
use chrono::{DateTime, Utc};

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ImportRecord {
    pub id: Uuid,
    pub file_name: String,
    pub size_bytes: usize,
    pub detected_mime: Option<String>,
    pub received_at: DateTime<Utc>,
}
