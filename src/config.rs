use chrono::{FixedOffset, Offset, Utc};
use std::path::PathBuf;
use tracing::warn;

// one minute short of a full day, the widest offset chrono accepts
const MAX_OFFSET_MINUTES: i32 = 24 * 60 - 1;

#[derive(Clone, Debug)]
pub struct PlantCareConfig {
    pub bind_addr: String,
    pub public_dir: PathBuf,
    // the "updated" date and the copyright year are computed in this offset
    pub display_offset: FixedOffset,
}

impl PlantCareConfig {
    pub fn from_env() -> Self {
        let bind_addr =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        let public_dir =
            PathBuf::from(std::env::var("PUBLIC_DIR").unwrap_or_else(|_| "./public".to_string()));

        let display_offset =
            parse_display_offset(std::env::var("DISPLAY_UTC_OFFSET_MINUTES").ok().as_deref());

        Self {
            bind_addr,
            public_dir,
            display_offset,
        }
    }
}

/// Minutes east of UTC; anything missing, unparsable or out of range means UTC.
pub fn parse_display_offset(raw: Option<&str>) -> FixedOffset {
    let utc = Utc.fix();

    let Some(raw) = raw else {
        return utc;
    };

    let minutes = match raw.trim().parse::<i32>() {
        Ok(minutes) => minutes,
        Err(e) => {
            warn!("Config: DISPLAY_UTC_OFFSET_MINUTES={:?} is not a number ({}), using UTC", raw, e);
            return utc;
        }
    };

    if minutes.abs() > MAX_OFFSET_MINUTES {
        warn!("Config: DISPLAY_UTC_OFFSET_MINUTES={} is out of range, using UTC", minutes);
        return utc;
    }

    FixedOffset::east_opt(minutes * 60).unwrap_or(utc)
}
