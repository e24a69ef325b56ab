use anyhow::{bail, Context, Result};

use std::{str::FromStr, time::Duration};

/// Seconds entered in the countdown field
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct CountdownSeconds(u32);

impl CountdownSeconds {
    pub fn as_duration(&self) -> Duration {
        Duration::from_secs(self.0.into())
    }
}

impl FromStr for CountdownSeconds {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        // Leading zero so that an empty field reads as 0
        let padded = format!("0{s}");
        if !padded.bytes().all(|b| b.is_ascii_digit()) {
            bail!("Countdown seconds should only contain digits: {:?}", s);
        }

        let seconds = padded
            .parse()
            .with_context(|| format!("Countdown seconds out of range: {}", s))?;

        Ok(CountdownSeconds(seconds))
    }
}
