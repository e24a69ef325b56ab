use std::fmt;

pub const DEFAULT_LABEL: &str = "00:00:00 000";

const MS_PER_SECOND: u64 = 1000;
const MS_PER_MINUTE: u64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: u64 = 60 * MS_PER_MINUTE;

/// Renders a millisecond count as `HH:MM:SS mmm`
///
/// The hour field wraps at 60 rather than growing, so 61 hours reads as `01:...`. Negative values
/// (an overrun countdown) get a leading `-` in front of the formatted magnitude.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TimeDisplay(pub i64);

impl fmt::Display for TimeDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < 0 {
            f.write_str("-")?;
        }

        let ms = self.0.unsigned_abs();
        let hours = (ms / MS_PER_HOUR) % 60;
        let minutes = (ms / MS_PER_MINUTE) % 60;
        let seconds = (ms / MS_PER_SECOND) % 60;
        let millis = ms % MS_PER_SECOND;

        write!(f, "{hours:02}:{minutes:02}:{seconds:02} {millis:03}")
    }
}

pub fn format_duration(ms: i64) -> String {
    TimeDisplay(ms).to_string()
}
