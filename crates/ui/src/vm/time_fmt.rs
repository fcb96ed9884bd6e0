use chrono::NaiveDateTime;

#[must_use]
pub fn format_end_time(value: NaiveDateTime) -> String {
    value.format("%Y-%m-%d %H:%M:%S").to_string()
}
