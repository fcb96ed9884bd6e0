mod limit_vm;
mod time_fmt;

pub use limit_vm::{LimitFieldsetVm, OptionVm, SelectVm, map_limit_fieldset};
pub use time_fmt::format_end_time;
