use serde::Serialize;
use chrono::{Datelike, Days, Months, NaiveDate, Weekday};

use crate::data::Dataset;
use crate::models::shift::{ShiftStatus, ShiftType};
use crate::models::view::ViewMode;

pub const MIN_YEAR: i32 = 1900;
pub const MAX_YEAR: i32 = 2999;

pub type Week = [NaiveDate; 7];

/// Reference dates accepted from callers. Keeps week and month arithmetic
/// far away from chrono's representable bounds.
pub fn in_supported_range(date: NaiveDate) -> bool {
    (MIN_YEAR..=MAX_YEAR).contains(&date.year())
}

/// Monday..Sunday of the week containing `reference`. A Sunday belongs to
/// the week that started six days earlier.
///
/// `reference` must satisfy [`in_supported_range`]; weeks touching chrono's
/// `NaiveDate::MIN`/`MAX` overflow and panic.
pub fn week_days(reference: NaiveDate) -> Week {
    let monday = reference.week(Weekday::Mon).first_day();
    std::array::from_fn(|offset| monday + Days::new(offset as u64))
}

/// Monday-start weeks that together cover every day of the reference month.
pub fn month_weeks(reference: NaiveDate) -> Vec<Week> {
    let first = reference.with_day(1).unwrap_or(reference);
    let last = first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(first);

    let mut weeks = Vec::with_capacity(6);
    let mut week = week_days(first);
    loop {
        weeks.push(week);
        if week[6] >= last {
            break;
        }
        week = week_days(week[6] + Days::new(1));
    }
    weeks
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// Moves the reference date by one period of `mode`. Month steps clamp the
/// day to the length of the target month. `None` once the result would
/// leave the supported range.
pub fn step(reference: NaiveDate, mode: ViewMode, direction: Direction) -> Option<NaiveDate> {
    let moved = match (mode, direction) {
        (ViewMode::Week, Direction::Previous) => reference.checked_sub_days(Days::new(7)),
        (ViewMode::Week, Direction::Next) => reference.checked_add_days(Days::new(7)),
        (ViewMode::Month, Direction::Previous) => reference.checked_sub_months(Months::new(1)),
        (ViewMode::Month, Direction::Next) => reference.checked_add_months(Months::new(1)),
    }?;
    in_supported_range(moved).then_some(moved)
}

/// Slot labels of the calendar grid, `00:00` to `23:00`.
pub fn hour_axis() -> Vec<String> {
    (0..24).map(|hour| format!("{:02}:00", hour)).collect()
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CalendarBlock {
    pub shift_id: String,
    pub employee_id: String,
    pub employee_label: String,
    pub date: NaiveDate,
    pub hour: u32,
    pub time_label: String,
    #[serde(rename = "type")]
    pub shift_type: ShiftType,
    pub status: ShiftStatus,
}

/// Places each shift dated within `days` in the cell of its start hour.
pub fn bind_shifts(dataset: &Dataset, days: &[NaiveDate]) -> Vec<CalendarBlock> {
    let mut blocks: Vec<CalendarBlock> = dataset
        .shifts
        .iter()
        .filter(|shift| days.contains(&shift.date))
        .map(|shift| CalendarBlock {
            shift_id: shift.id.clone(),
            employee_id: shift.employee_id.clone(),
            employee_label: dataset
                .employee(&shift.employee_id)
                .map(|employee| employee.short_label())
                .unwrap_or_else(|| shift.employee_id.clone()),
            date: shift.date,
            hour: shift.start_hour(),
            time_label: shift.time_label(),
            shift_type: shift.shift_type,
            status: shift.status,
        })
        .collect();
    blocks.sort_by(|a, b| (a.date, a.hour).cmp(&(b.date, b.hour)));
    blocks
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CalendarView {
    pub reference_date: NaiveDate,
    pub view_mode: ViewMode,
    pub weeks: Vec<Week>,
    pub hours: Vec<String>,
    pub blocks: Vec<CalendarBlock>,
}

pub fn calendar_view(dataset: &Dataset, reference: NaiveDate, mode: ViewMode) -> CalendarView {
    let weeks = match mode {
        ViewMode::Week => vec![week_days(reference)],
        ViewMode::Month => month_weeks(reference),
    };
    let days: Vec<NaiveDate> = weeks.iter().flatten().copied().collect();

    CalendarView {
        reference_date: reference,
        view_mode: mode,
        blocks: bind_shifts(dataset, &days),
        hours: hour_axis(),
        weeks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sample_dataset;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn span(from: NaiveDate) -> Week {
        std::array::from_fn(|i| from + Days::new(i as u64))
    }

    #[test]
    fn monday_reference_starts_its_own_week() {
        assert_eq!(week_days(date(2024, 1, 15)), span(date(2024, 1, 15)));
    }

    #[test]
    fn sunday_reference_stays_in_preceding_week() {
        assert_eq!(week_days(date(2024, 1, 21)), span(date(2024, 1, 15)));
    }

    #[test]
    fn week_crosses_year_boundary() {
        assert_eq!(week_days(date(2024, 1, 1)), span(date(2024, 1, 1)));
        assert_eq!(week_days(date(2023, 1, 1)), span(date(2022, 12, 26)));
    }

    #[test]
    fn every_reference_yields_seven_consecutive_days_containing_it() {
        let mut reference = date(2023, 12, 1);
        while reference <= date(2024, 3, 31) {
            let week = week_days(reference);
            assert_eq!(week, week_days(reference));
            assert_eq!(week[0].weekday(), Weekday::Mon);
            assert!(week.windows(2).all(|pair| pair[0].succ_opt() == Some(pair[1])));
            assert!(week.contains(&reference));
            reference = reference.succ_opt().unwrap();
        }
    }

    #[test]
    fn month_grid_covers_whole_month() {
        let weeks = month_weeks(date(2024, 2, 14));
        assert_eq!(weeks.len(), 5);
        assert_eq!(weeks[0][0], date(2024, 1, 29));
        assert_eq!(weeks[4][6], date(2024, 3, 3));

        // Starts on a Monday, ends on a Sunday: four exact weeks.
        let weeks = month_weeks(date(2021, 2, 1));
        assert_eq!(weeks.len(), 4);
        assert_eq!(weeks[0][0], date(2021, 2, 1));
        assert_eq!(weeks[3][6], date(2021, 2, 28));
    }

    #[test]
    fn stepping_by_week_and_month() {
        assert_eq!(step(date(2024, 1, 15), ViewMode::Week, Direction::Next), Some(date(2024, 1, 22)));
        assert_eq!(step(date(2024, 1, 15), ViewMode::Week, Direction::Previous), Some(date(2024, 1, 8)));
        assert_eq!(step(date(2024, 1, 31), ViewMode::Month, Direction::Next), Some(date(2024, 2, 29)));
        assert_eq!(step(date(2024, 3, 31), ViewMode::Month, Direction::Previous), Some(date(2024, 2, 29)));
        assert_eq!(step(date(2999, 12, 31), ViewMode::Week, Direction::Next), None);
    }

    #[test]
    fn hour_axis_lists_full_day() {
        let hours = hour_axis();
        assert_eq!(hours.len(), 24);
        assert_eq!(hours[0], "00:00");
        assert_eq!(hours[8], "08:00");
        assert_eq!(hours[23], "23:00");
    }

    #[test]
    fn sample_shifts_land_on_monday_cells() {
        let dataset = sample_dataset();
        let view = calendar_view(&dataset, date(2024, 1, 18), ViewMode::Week);

        let cells: Vec<_> = view
            .blocks
            .iter()
            .map(|block| (block.date, block.hour, block.employee_label.as_str(), block.time_label.as_str()))
            .collect();
        assert_eq!(
            cells,
            vec![
                (date(2024, 1, 15), 8, "Marie D.", "08:00-16:00"),
                (date(2024, 1, 15), 14, "Jean M.", "14:00-22:00"),
            ]
        );
    }

    #[test]
    fn shifts_outside_displayed_days_are_skipped() {
        let dataset = sample_dataset();
        let view = calendar_view(&dataset, date(2024, 1, 22), ViewMode::Week);
        assert!(view.blocks.is_empty());

        let view = calendar_view(&dataset, date(2024, 1, 2), ViewMode::Month);
        assert_eq!(view.blocks.len(), 2);
    }

    #[test]
    fn unknown_employee_falls_back_to_raw_id() {
        let mut dataset = sample_dataset();
        dataset.shifts[0].employee_id = "99".to_string();
        let blocks = bind_shifts(&dataset, &week_days(date(2024, 1, 15)));
        assert_eq!(blocks[0].employee_label, "99");
    }
}
