use serde::{Deserialize, Serialize};

use crate::model::{SelectField, end_time_fields};

/// Literal label shown ahead of the six selection lists.
pub const LIMIT_LABEL: &str = "Set a time limit";

/// Non-breaking space rendered between the label and the first list.
pub const LIMIT_LABEL_SEPARATOR: char = '\u{a0}';

/// The container a time-limit checkbox owns.
///
/// Holds either nothing at all, or the label plus all six end-time lists in
/// fixed order. No intermediate shape is ever observable from outside.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeLimitFieldset {
    fields: Vec<SelectField>,
}

impl TimeLimitFieldset {
    /// An empty container.
    #[must_use]
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Mirror the checkbox state.
    ///
    /// Checked rebuilds the label and all six lists from scratch; unchecked
    /// removes every child. Syncing twice with the same flag produces the
    /// same structure as syncing once.
    pub fn sync(&mut self, limited: bool) {
        self.fields.clear();
        if limited {
            self.fields = end_time_fields();
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    #[must_use]
    pub fn fields(&self) -> &[SelectField] {
        &self.fields
    }

    /// The label with its trailing separator, present only when populated.
    #[must_use]
    pub fn label(&self) -> Option<String> {
        if self.fields.is_empty() {
            None
        } else {
            Some(format!("{LIMIT_LABEL}{LIMIT_LABEL_SEPARATOR}"))
        }
    }

    /// 0 when empty, 7 when populated (1 label + 6 lists).
    #[must_use]
    pub fn child_count(&self) -> usize {
        if self.fields.is_empty() {
            0
        } else {
            self.fields.len() + 1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_names(fieldset: &TimeLimitFieldset) -> Vec<&str> {
        fieldset.fields().iter().map(SelectField::name).collect()
    }

    #[test]
    fn starts_empty() {
        let fieldset = TimeLimitFieldset::new();

        assert!(fieldset.is_empty());
        assert_eq!(fieldset.child_count(), 0);
        assert_eq!(fieldset.label(), None);
    }

    #[test]
    fn sync_checked_builds_label_and_six_lists_in_order() {
        let mut fieldset = TimeLimitFieldset::new();
        fieldset.sync(true);

        assert_eq!(fieldset.child_count(), 7);
        assert_eq!(
            fieldset.label().as_deref(),
            Some("Set a time limit\u{a0}")
        );
        assert_eq!(
            field_names(&fieldset),
            ["endyear", "endmonth", "endday", "endhour", "endmin", "endsec"]
        );
    }

    #[test]
    fn sync_unchecked_removes_every_child() {
        let mut fieldset = TimeLimitFieldset::new();
        fieldset.sync(true);
        fieldset.sync(false);

        assert!(fieldset.is_empty());
        assert_eq!(fieldset.child_count(), 0);
        assert_eq!(fieldset.label(), None);
    }

    #[test]
    fn toggling_twice_ends_in_the_same_structure_as_once() {
        let mut once = TimeLimitFieldset::new();
        once.sync(true);

        let mut twice = TimeLimitFieldset::new();
        twice.sync(true);
        twice.sync(false);
        twice.sync(true);

        assert_eq!(once, twice);
    }

    #[test]
    fn sync_checked_is_a_rebuild_not_an_append() {
        let mut fieldset = TimeLimitFieldset::new();
        fieldset.sync(true);
        fieldset.sync(true);

        assert_eq!(fieldset.child_count(), 7);
    }
}
