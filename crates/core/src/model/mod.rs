mod fields;
mod fieldset;
mod select_field;
mod selection;

pub use fields::{EndField, end_time_fields};
pub use fieldset::{LIMIT_LABEL, LIMIT_LABEL_SEPARATOR, TimeLimitFieldset};
pub use select_field::{SelectField, SelectOption};
pub use selection::{EndTimeSelection, SelectionError};
