//! Decorative date strip model.
//!
//! The strip is a literal run of day numbers with exactly one marked as
//! selected. No calendar arithmetic happens here.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDay {
    pub day_number: u32,
    pub is_selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarStripError {
    #[error("Calendar strip needs at least one day")]
    Empty,
    #[error("Selected day {0} is not part of the strip")]
    SelectedDayMissing(u32),
    #[error("Day {0} appears more than once in the strip")]
    DuplicateDay(u32),
}

/// Day numbers shown on the dashboard
pub const DASHBOARD_DAYS: [u32; 7] = [13, 14, 15, 16, 17, 18, 19];
/// The day highlighted on the dashboard
pub const DASHBOARD_SELECTED_DAY: u32 = 18;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarStrip {
    days: Vec<CalendarDay>,
}

impl CalendarStrip {
    /// Build a strip marking `selected` as the single selected day.
    pub fn new(day_numbers: &[u32], selected: u32) -> Result<Self, CalendarStripError> {
        if day_numbers.is_empty() {
            return Err(CalendarStripError::Empty);
        }
        for (i, day) in day_numbers.iter().enumerate() {
            if day_numbers[..i].contains(day) {
                return Err(CalendarStripError::DuplicateDay(*day));
            }
        }
        if !day_numbers.contains(&selected) {
            return Err(CalendarStripError::SelectedDayMissing(selected));
        }

        let days = day_numbers
            .iter()
            .map(|&day_number| CalendarDay {
                day_number,
                is_selected: day_number == selected,
            })
            .collect();
        Ok(Self { days })
    }

    /// The fixed week shown on the dashboard (13–19, 18 selected).
    pub fn dashboard_week() -> Self {
        Self {
            days: DASHBOARD_DAYS
                .iter()
                .map(|&day_number| CalendarDay {
                    day_number,
                    is_selected: day_number == DASHBOARD_SELECTED_DAY,
                })
                .collect(),
        }
    }

    pub fn days(&self) -> &[CalendarDay] {
        &self.days
    }

    pub fn selected(&self) -> Option<&CalendarDay> {
        self.days.iter().find(|day| day.is_selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_week_has_one_selected_day() {
        let strip = CalendarStrip::dashboard_week();
        assert_eq!(strip.days().len(), 7);
        assert_eq!(strip.days().iter().filter(|d| d.is_selected).count(), 1);
        assert_eq!(strip.selected().map(|d| d.day_number), Some(18));
    }

    #[test]
    fn test_dashboard_week_is_consecutive() {
        let strip = CalendarStrip::dashboard_week();
        for pair in strip.days().windows(2) {
            assert_eq!(pair[1].day_number, pair[0].day_number + 1);
        }
    }

    #[test]
    fn test_new_rejects_missing_selection() {
        assert_eq!(
            CalendarStrip::new(&[1, 2, 3], 9),
            Err(CalendarStripError::SelectedDayMissing(9))
        );
    }

    #[test]
    fn test_new_rejects_empty_and_duplicates() {
        assert_eq!(CalendarStrip::new(&[], 1), Err(CalendarStripError::Empty));
        assert_eq!(
            CalendarStrip::new(&[4, 5, 4], 5),
            Err(CalendarStripError::DuplicateDay(4))
        );
    }

    #[test]
    fn test_new_matches_dashboard_week() {
        let strip = CalendarStrip::new(&DASHBOARD_DAYS, DASHBOARD_SELECTED_DAY).unwrap();
        assert_eq!(strip, CalendarStrip::dashboard_week());
    }
}
