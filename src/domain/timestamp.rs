use chrono::{DateTime, Datelike, FixedOffset, SecondsFormat};

// en-US short date, the same shape a browser prints with toLocaleDateString
const UPDATED_FORMAT: &str = "%-m/%-d/%Y";

/// The instant a page was generated, already shifted into the display offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimestampView {
    instant: DateTime<FixedOffset>,
}

impl TimestampView {
    pub fn new(instant: DateTime<FixedOffset>) -> Self {
        Self { instant }
    }

    pub fn updated_label(&self) -> String {
        self.instant.format(UPDATED_FORMAT).to_string()
    }

    // for the datetime attribute of <time>
    pub fn iso(&self) -> String {
        self.instant.to_rfc3339_opts(SecondsFormat::Secs, true)
    }

    pub fn copyright_year(&self) -> i32 {
        self.instant.year()
    }
}
