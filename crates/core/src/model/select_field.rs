use serde::{Deserialize, Serialize};

/// One selectable entry in a list.
///
/// The underlying value and the displayed label are always the text form of
/// the source value. Entries have no identity beyond that text; duplicates
/// are kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    value: String,
    label: String,
}

impl SelectOption {
    #[must_use]
    pub fn new(value: impl ToString) -> Self {
        let text = value.to_string();
        Self {
            value: text.clone(),
            label: text,
        }
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// A named selection list holding an ordered sequence of options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectField {
    name: String,
    options: Vec<SelectOption>,
}

impl SelectField {
    /// A list with the given name and no options yet.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: Vec::new(),
        }
    }

    /// Append one option per value, in input order.
    ///
    /// Appends only; options already in the list stay untouched. An empty
    /// sequence appends nothing.
    pub fn push_options<I>(&mut self, values: I)
    where
        I: IntoIterator,
        I::Item: ToString,
    {
        for value in values {
            self.options.push(SelectOption::new(value));
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_options_appends_one_option_per_value_in_order() {
        let mut field = SelectField::new("endday");
        field.push_options(1..=3);

        assert_eq!(field.len(), 3);
        let values: Vec<&str> = field.options().iter().map(SelectOption::value).collect();
        assert_eq!(values, ["1", "2", "3"]);
        for option in field.options() {
            assert_eq!(option.value(), option.label());
        }
    }

    #[test]
    fn push_options_accumulates_without_clearing() {
        let mut field = SelectField::new("endhour");
        field.push_options(["0", "1"]);
        field.push_options(["2"]);

        let values: Vec<&str> = field.options().iter().map(SelectOption::value).collect();
        assert_eq!(values, ["0", "1", "2"]);
    }

    #[test]
    fn push_options_keeps_duplicates() {
        let mut field = SelectField::new("endmin");
        field.push_options([7, 7]);

        assert_eq!(field.len(), 2);
        assert_eq!(field.options()[0], field.options()[1]);
    }

    #[test]
    fn push_options_with_empty_input_appends_nothing() {
        let mut field = SelectField::new("endsec");
        field.push_options(Vec::<u32>::new());

        assert!(field.is_empty());
    }
}
