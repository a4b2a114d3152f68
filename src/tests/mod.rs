mod unit_escape;
mod unit_page_composer;
mod unit_structured_data;

use crate::clock::Clock;
use chrono::{DateTime, FixedOffset, TimeZone, Utc};

// a clock frozen at one instant
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

pub fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
}

pub fn at_offset(instant: DateTime<Utc>, minutes: i32) -> DateTime<FixedOffset> {
    instant.with_timezone(&FixedOffset::east_opt(minutes * 60).unwrap())
}

// pull the body of the one JSON-LD script out of a rendered page
pub fn json_ld_block(html: &str) -> &str {
    let open = r#"<script type="application/ld+json">"#;
    let start = html.find(open).expect("page should have a JSON-LD block") + open.len();
    let end = start + html[start..].find("</script>").expect("JSON-LD block should be closed");
    &html[start..end]
}
