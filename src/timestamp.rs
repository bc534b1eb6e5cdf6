//! Collection-wide modification stamp: local wall-clock time plus the whole-hour
//! UTC offset, e.g. `Thu Feb 10 22:10:37 2022 -0800`.

use std::fmt;

use chrono::{DateTime, Local, Offset, TimeZone};

/// C-locale `%c` layout.
const LOCAL_TIME_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionTimestamp {
    pub local_time: String,
    /// Local minus UTC, truncated toward zero to whole hours.
    pub utc_offset_hours: i32,
}

impl CollectionTimestamp {
    pub fn now() -> Self {
        Self::from_datetime(&Local::now())
    }

    pub fn from_datetime<Tz: TimeZone>(at: &DateTime<Tz>) -> Self
    where
        Tz::Offset: fmt::Display,
    {
        let offset_seconds = at.offset().fix().local_minus_utc();
        Self {
            local_time: at.format(LOCAL_TIME_FORMAT).to_string(),
            utc_offset_hours: offset_seconds / 3600,
        }
    }

    /// Three-digit signed hour followed by a fixed `00` minute field.
    /// West-of-UTC offsets spend one of the three digits on the sign: `-7` -> `-0700`.
    pub fn offset_field(&self) -> String {
        format!("{:03}00", self.utc_offset_hours)
    }
}

impl fmt::Display for CollectionTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.local_time, self.offset_field())
    }
}

#[cfg(test)]
mod tests {
    use chrono::FixedOffset;

    use super::*;

    fn stamp_at(offset_seconds: i32) -> CollectionTimestamp {
        let zone = FixedOffset::east_opt(offset_seconds).unwrap();
        let at = zone.with_ymd_and_hms(2022, 2, 10, 22, 10, 37).unwrap();
        CollectionTimestamp::from_datetime(&at)
    }

    #[test]
    fn renders_local_time_in_c_locale_layout() {
        let stamp = stamp_at(0);
        assert_eq!(stamp.local_time, "Thu Feb 10 22:10:37 2022");
        assert_eq!(stamp.to_string(), "Thu Feb 10 22:10:37 2022 00000");
    }

    #[test]
    fn east_of_utc_offsets_are_zero_padded() {
        assert_eq!(stamp_at(4 * 3600).offset_field(), "00400");
        assert_eq!(stamp_at(10 * 3600).offset_field(), "01000");
    }

    #[test]
    fn west_of_utc_offsets_carry_the_sign_in_the_hour_field() {
        assert_eq!(stamp_at(-7 * 3600).offset_field(), "-0700");
        assert_eq!(stamp_at(-10 * 3600).offset_field(), "-1000");
    }

    #[test]
    fn fractional_hour_offsets_truncate_toward_zero() {
        assert_eq!(stamp_at(5 * 3600 + 1800).utc_offset_hours, 5);
        assert_eq!(stamp_at(-(3 * 3600 + 1800)).utc_offset_hours, -3);
        assert_eq!(stamp_at(-(3 * 3600 + 1800)).offset_field(), "-0300");
    }
}
