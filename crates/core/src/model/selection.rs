use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::EndField;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SelectionError {
    #[error("not a valid end time: {raw}")]
    InvalidEndTime { raw: String },
}

/// The raw selected text of each end-time list, as a form would post it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndTimeSelection {
    year: String,
    month: String,
    day: String,
    hour: String,
    minute: String,
    second: String,
}

impl Default for EndTimeSelection {
    /// Every list starts on its first offered value.
    fn default() -> Self {
        Self {
            year: EndField::Year.first_value(),
            month: EndField::Month.first_value(),
            day: EndField::Day.first_value(),
            hour: EndField::Hour.first_value(),
            minute: EndField::Minute.first_value(),
            second: EndField::Second.first_value(),
        }
    }
}

impl EndTimeSelection {
    pub fn set(&mut self, field: EndField, value: impl Into<String>) {
        let value = value.into();
        match field {
            EndField::Year => self.year = value,
            EndField::Month => self.month = value,
            EndField::Day => self.day = value,
            EndField::Hour => self.hour = value,
            EndField::Minute => self.minute = value,
            EndField::Second => self.second = value,
        }
    }

    #[must_use]
    pub fn get(&self, field: EndField) -> &str {
        match field {
            EndField::Year => &self.year,
            EndField::Month => &self.month,
            EndField::Day => &self.day,
            EndField::Hour => &self.hour,
            EndField::Minute => &self.minute,
            EndField::Second => &self.second,
        }
    }

    /// Compose the selection into a timestamp.
    ///
    /// Each component is zero-padded to two digits, joined with `-`, and
    /// parsed as `%Y-%m-%d-%H-%M-%S`.
    ///
    /// # Errors
    ///
    /// Returns `SelectionError::InvalidEndTime` when the combination is not a
    /// real calendar date/time. The lists do offer such combinations: day 30
    /// in February, hour 24, minute or second 60.
    pub fn end_timestamp(&self) -> Result<NaiveDateTime, SelectionError> {
        let raw = EndField::ALL
            .into_iter()
            .map(|field| format!("{:0>2}", self.get(field)))
            .collect::<Vec<_>>()
            .join("-");
        NaiveDateTime::parse_from_str(&raw, "%Y-%m-%d-%H-%M-%S")
            .map_err(|_| SelectionError::InvalidEndTime { raw })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    #[test]
    fn default_selection_is_the_first_value_of_every_list() {
        let selection = EndTimeSelection::default();

        assert_eq!(selection.get(EndField::Year), "2017");
        assert_eq!(selection.get(EndField::Month), "1");
        assert_eq!(selection.get(EndField::Day), "1");
        assert_eq!(selection.get(EndField::Hour), "0");
        assert_eq!(selection.get(EndField::Minute), "0");
        assert_eq!(selection.get(EndField::Second), "0");
    }

    #[test]
    fn default_selection_composes_to_the_first_offered_instant() {
        let at = EndTimeSelection::default().end_timestamp().unwrap();

        let expected = NaiveDate::from_ymd_opt(2017, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(at, expected);
    }

    #[test]
    fn single_digit_components_are_zero_padded() {
        let mut selection = EndTimeSelection::default();
        selection.set(EndField::Month, "9");
        selection.set(EndField::Day, "8");
        selection.set(EndField::Hour, "7");

        let at = selection.end_timestamp().unwrap();

        let expected = NaiveDate::from_ymd_opt(2017, 9, 8)
            .unwrap()
            .and_hms_opt(7, 0, 0)
            .unwrap();
        assert_eq!(at, expected);
    }

    #[test]
    fn hour_24_is_offered_but_rejected() {
        let mut selection = EndTimeSelection::default();
        selection.set(EndField::Hour, "24");

        let err = selection.end_timestamp().unwrap_err();
        assert_eq!(
            err,
            SelectionError::InvalidEndTime {
                raw: "2017-01-01-24-00-00".to_string()
            }
        );
    }

    #[test]
    fn minute_and_second_60_are_offered_but_rejected() {
        let mut selection = EndTimeSelection::default();
        selection.set(EndField::Minute, "60");
        assert!(selection.end_timestamp().is_err());

        let mut selection = EndTimeSelection::default();
        selection.set(EndField::Second, "60");
        assert!(selection.end_timestamp().is_err());
    }

    #[test]
    fn impossible_calendar_dates_are_rejected() {
        let mut selection = EndTimeSelection::default();
        selection.set(EndField::Year, "2018");
        selection.set(EndField::Month, "2");
        selection.set(EndField::Day, "30");

        assert!(selection.end_timestamp().is_err());
    }

    #[test]
    fn leap_day_2020_is_accepted() {
        let mut selection = EndTimeSelection::default();
        selection.set(EndField::Year, "2020");
        selection.set(EndField::Month, "2");
        selection.set(EndField::Day, "29");
        selection.set(EndField::Hour, "23");

        let at = selection.end_timestamp().unwrap();
        assert_eq!(at.hour(), 23);
    }
}
