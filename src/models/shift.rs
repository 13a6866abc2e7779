use serde::{Deserialize, Serialize};
use chrono::{Duration, NaiveDate, NaiveTime, Timelike};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ShiftType {
    Normal,
    Overtime,
    Night,
    Weekend,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ShiftStatus {
    Scheduled,
    Confirmed,
    Completed,
    Cancelled,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Shift {
    pub id: String,
    /// Unvalidated reference to `Employee::id`.
    pub employee_id: String,
    pub date: NaiveDate,
    #[serde(with = "hh_mm")]
    pub start_time: NaiveTime,
    #[serde(with = "hh_mm")]
    pub end_time: NaiveTime,
    #[serde(rename = "type")]
    pub shift_type: ShiftType,
    pub status: ShiftStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Shift {
    /// An end time that is not after the start time belongs to the next day.
    pub fn duration(&self) -> Duration {
        let span = self.end_time.signed_duration_since(self.start_time);
        if span > Duration::zero() {
            span
        } else {
            span + Duration::days(1)
        }
    }

    pub fn start_hour(&self) -> u32 {
        self.start_time.hour()
    }

    pub fn is_cancelled(&self) -> bool {
        self.status == ShiftStatus::Cancelled
    }

    pub fn time_label(&self) -> String {
        format!(
            "{}-{}",
            self.start_time.format(hh_mm::FORMAT),
            self.end_time.format(hh_mm::FORMAT)
        )
    }
}

/// Wall-clock times travel as `HH:MM`.
pub mod hh_mm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%H:%M";

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&time.format(FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shift(start: &str, end: &str) -> Shift {
        Shift {
            id: "s".to_string(),
            employee_id: "1".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            start_time: NaiveTime::parse_from_str(start, hh_mm::FORMAT).unwrap(),
            end_time: NaiveTime::parse_from_str(end, hh_mm::FORMAT).unwrap(),
            shift_type: ShiftType::Normal,
            status: ShiftStatus::Scheduled,
            notes: None,
        }
    }

    #[test]
    fn day_shift_duration() {
        assert_eq!(shift("08:00", "16:00").duration(), Duration::hours(8));
    }

    #[test]
    fn overnight_shift_rolls_into_next_day() {
        assert_eq!(shift("22:00", "06:00").duration(), Duration::hours(8));
        assert_eq!(shift("06:00", "06:00").duration(), Duration::hours(24));
    }

    #[test]
    fn wire_format_uses_hours_and_minutes() {
        let json = serde_json::to_value(shift("14:00", "22:00")).unwrap();
        assert_eq!(json["startTime"], "14:00");
        assert_eq!(json["endTime"], "22:00");
        assert_eq!(json["date"], "2024-01-15");
        assert_eq!(json["type"], "normal");
        assert!(json.get("notes").is_none());
    }
}
