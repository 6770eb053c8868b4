use std::fmt::Display;

use crate::model::CallInfo;

/// Placeholder for an empty telemetry list.
pub const EMPTY_PLACEHOLDER: &str = "–";

/// Tooltip text for a callsign, one line per telemetry list.
pub fn format_call_info(info: &CallInfo) -> String {
    format!(
        "Frequencies (kHz): {}\nWPM: {}\ndB: {}",
        join_values(&info.frequencies),
        join_values(&info.wpm),
        join_values(&info.db),
    )
}

fn join_values<T: Display>(values: &[T]) -> String {
    if values.is_empty() {
        return EMPTY_PLACEHOLDER.to_string();
    }

    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
