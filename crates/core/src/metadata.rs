/// Capture time as it appears in the "date/time original" field.
///
/// Components are kept as the literal strings from the metadata so that the
/// prefix is a plain concatenation with no reformatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureTimestamp {
    pub year: String,
    pub month: String,
    pub day: String,
    pub hour: String,
    pub minute: String,
    pub second: String,
}

impl CaptureTimestamp {
    /// Splits a `YYYY:MM:DD HH:MM:SS` string. Returns `None` when the shape
    /// (two whitespace-separated halves of three `:`-separated parts) does
    /// not match; component contents are not validated.
    pub fn parse(raw: &str) -> Option<Self> {
        let mut halves = raw.split_whitespace();
        let (date, time) = (halves.next()?, halves.next()?);
        if halves.next().is_some() {
            return None;
        }

        let [year, month, day] = split_three(date)?;
        let [hour, minute, second] = split_three(time)?;
        Some(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        })
    }

    pub fn prefix(&self) -> String {
        format!(
            "{}{}{}{}{}{}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

fn split_three(input: &str) -> Option<[String; 3]> {
    let mut parts = input.split(':');
    let out = [
        parts.next()?.to_string(),
        parts.next()?.to_string(),
        parts.next()?.to_string(),
    ];
    if parts.next().is_some() {
        return None;
    }
    Some(out)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureLookup {
    Found(CaptureTimestamp),
    NotFound,
}
