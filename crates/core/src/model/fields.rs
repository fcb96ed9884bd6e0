use serde::{Deserialize, Serialize};

use crate::model::SelectField;

/// The six end-time components, in the order they appear in the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EndField {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

impl EndField {
    pub const ALL: [EndField; 6] = [
        EndField::Year,
        EndField::Month,
        EndField::Day,
        EndField::Hour,
        EndField::Minute,
        EndField::Second,
    ];

    /// The form name of the component's selection list.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            EndField::Year => "endyear",
            EndField::Month => "endmonth",
            EndField::Day => "endday",
            EndField::Hour => "endhour",
            EndField::Minute => "endmin",
            EndField::Second => "endsec",
        }
    }

    /// Inclusive bounds of the offered values.
    ///
    /// Day stops at 30 and hour reaches 24; combinations that are not real
    /// timestamps are rejected by `EndTimeSelection::end_timestamp`, not here.
    #[must_use]
    pub const fn bounds(self) -> (i32, i32) {
        match self {
            EndField::Year => (2017, 2020),
            EndField::Month => (1, 12),
            EndField::Day => (1, 30),
            EndField::Hour => (0, 24),
            EndField::Minute => (0, 60),
            EndField::Second => (0, 60),
        }
    }

    /// The offered values in ascending order, as text.
    #[must_use]
    pub fn values(self) -> Vec<String> {
        let (lo, hi) = self.bounds();
        (lo..=hi).map(|value| value.to_string()).collect()
    }

    /// The first offered value, which a fresh list starts on.
    #[must_use]
    pub fn first_value(self) -> String {
        self.bounds().0.to_string()
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }

    /// A freshly built, populated selection list for this component.
    #[must_use]
    pub fn field(self) -> SelectField {
        let mut field = SelectField::new(self.name());
        field.push_options(self.values());
        field
    }
}

/// All six selection lists, populated, in form order.
#[must_use]
pub fn end_time_fields() -> Vec<SelectField> {
    EndField::ALL.into_iter().map(EndField::field).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SelectOption;

    #[test]
    fn year_offers_exactly_2017_through_2020() {
        let field = EndField::Year.field();

        let values: Vec<&str> = field.options().iter().map(SelectOption::value).collect();
        assert_eq!(values, ["2017", "2018", "2019", "2020"]);
    }

    #[test]
    fn option_counts_match_the_fixed_ranges() {
        assert_eq!(EndField::Year.field().len(), 4);
        assert_eq!(EndField::Month.field().len(), 12);
        assert_eq!(EndField::Day.field().len(), 30);
        assert_eq!(EndField::Hour.field().len(), 25);
        assert_eq!(EndField::Minute.field().len(), 61);
        assert_eq!(EndField::Second.field().len(), 61);
    }

    #[test]
    fn month_runs_from_1_to_12() {
        let field = EndField::Month.field();

        assert_eq!(field.options()[0].value(), "1");
        assert_eq!(field.options()[11].value(), "12");
    }

    #[test]
    fn end_time_fields_come_in_form_order() {
        let names: Vec<String> = end_time_fields()
            .iter()
            .map(|field| field.name().to_string())
            .collect();

        assert_eq!(
            names,
            ["endyear", "endmonth", "endday", "endhour", "endmin", "endsec"]
        );
    }

    #[test]
    fn from_name_round_trips_every_field() {
        for field in EndField::ALL {
            assert_eq!(EndField::from_name(field.name()), Some(field));
        }
        assert_eq!(EndField::from_name("endmillis"), None);
    }
}
