use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Upper bound (inclusive) of the "expiring soon" window, in days.
pub const EXPIRING_SOON_DAYS: i64 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExpiryBucket {
    Unknown,
    Expired,
    ExpiringToday,
    ExpiringTomorrow,
    ExpiringSoon,
    Fresh,
}

impl ExpiryBucket {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpiryBucket::Unknown => "unknown",
            ExpiryBucket::Expired => "expired",
            ExpiryBucket::ExpiringToday => "expiring-today",
            ExpiryBucket::ExpiringTomorrow => "expiring-tomorrow",
            ExpiryBucket::ExpiringSoon => "expiring-soon",
            ExpiryBucket::Fresh => "fresh",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpiryStatus {
    pub days_until: Option<i64>,
    pub bucket: ExpiryBucket,
    pub phrase: Option<String>,
}

/// Whole days from `now` until the start (00:00 UTC) of `expiry_date`,
/// rounded up.
///
/// The fractional day is ceiled rather than compared per calendar day, so the
/// result depends on the time of day of `now`. Callers rely on this exact
/// rounding; do not normalize `now` to midnight.
pub fn days_until(expiry_date: NaiveDate, now: DateTime<Utc>) -> i64 {
    let expiry = expiry_date.and_time(NaiveTime::MIN).and_utc();
    let millis = (expiry - now).num_milliseconds() as f64;

    // `as` maps -0.0 to 0
    (millis / MILLIS_PER_DAY).ceil() as i64
}

impl ExpiryStatus {
    pub fn classify(expiry_date: Option<NaiveDate>, now: DateTime<Utc>) -> Self {
        let Some(expiry_date) = expiry_date else {
            return Self {
                days_until: None,
                bucket: ExpiryBucket::Unknown,
                phrase: None,
            };
        };

        let days = days_until(expiry_date, now);
        let (bucket, phrase) = match days {
            d if d < 0 => {
                let ago = d.abs();
                let unit = if ago == 1 { "day" } else { "days" };
                (ExpiryBucket::Expired, format!("Expired {ago} {unit} ago"))
            }
            0 => (ExpiryBucket::ExpiringToday, "Expires today".to_string()),
            1 => (ExpiryBucket::ExpiringTomorrow, "Expires tomorrow".to_string()),
            d if d <= EXPIRING_SOON_DAYS => (ExpiryBucket::ExpiringSoon, format!("{d} days left")),
            d => (ExpiryBucket::Fresh, format!("{d} days left")),
        };

        Self {
            days_until: Some(days),
            bucket,
            phrase: Some(phrase),
        }
    }

    pub fn counts_as_expiring_soon(&self) -> bool {
        matches!(self.days_until, Some(d) if (0..=EXPIRING_SOON_DAYS).contains(&d))
    }
}

pub fn count_expiring_soon<I>(expiry_dates: I, now: DateTime<Utc>) -> usize
where
    I: IntoIterator<Item = Option<NaiveDate>>,
{
    expiry_dates
        .into_iter()
        .filter(|date| ExpiryStatus::classify(*date, now).counts_as_expiring_soon())
        .count()
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    #[test]
    fn test_missing_date_is_unknown() {
        let status = ExpiryStatus::classify(None, at(2025, 3, 10, 9, 0));
        assert_eq!(status.bucket, ExpiryBucket::Unknown);
        assert_eq!(status.phrase, None);
        assert_eq!(status.days_until, None);
        assert!(!status.counts_as_expiring_soon());
    }

    #[test]
    fn test_same_day_is_today_regardless_of_hour() {
        for hour in [0, 8, 13, 23] {
            let status = ExpiryStatus::classify(Some(date(2025, 3, 10)), at(2025, 3, 10, hour, 30));
            assert_eq!(status.bucket, ExpiryBucket::ExpiringToday, "hour {hour}");
            assert_eq!(status.phrase.as_deref(), Some("Expires today"));
        }
    }

    #[test]
    fn test_exact_now_is_today() {
        let status = ExpiryStatus::classify(Some(date(2025, 3, 10)), at(2025, 3, 10, 0, 0));
        assert_eq!(status.days_until, Some(0));
        assert_eq!(status.bucket, ExpiryBucket::ExpiringToday);
    }

    #[test]
    fn test_yesterday_is_singular() {
        let status = ExpiryStatus::classify(Some(date(2025, 3, 9)), at(2025, 3, 10, 12, 0));
        assert_eq!(status.bucket, ExpiryBucket::Expired);
        assert_eq!(status.phrase.as_deref(), Some("Expired 1 day ago"));
    }

    #[test]
    fn test_two_days_ago_is_plural() {
        let status = ExpiryStatus::classify(Some(date(2025, 3, 8)), at(2025, 3, 10, 12, 0));
        assert_eq!(status.days_until, Some(-2));
        assert_eq!(status.phrase.as_deref(), Some("Expired 2 days ago"));
    }

    #[test]
    fn test_tomorrow() {
        let status = ExpiryStatus::classify(Some(date(2025, 3, 11)), at(2025, 3, 10, 18, 0));
        assert_eq!(status.bucket, ExpiryBucket::ExpiringTomorrow);
        assert_eq!(status.phrase.as_deref(), Some("Expires tomorrow"));
    }

    #[test]
    fn test_soon_and_fresh_boundaries() {
        let now = at(2025, 3, 10, 7, 0);

        let soon = ExpiryStatus::classify(Some(date(2025, 3, 13)), now);
        assert_eq!(soon.days_until, Some(3));
        assert_eq!(soon.bucket, ExpiryBucket::ExpiringSoon);
        assert_eq!(soon.phrase.as_deref(), Some("3 days left"));

        let fresh = ExpiryStatus::classify(Some(date(2025, 3, 14)), now);
        assert_eq!(fresh.days_until, Some(4));
        assert_eq!(fresh.bucket, ExpiryBucket::Fresh);
        assert_eq!(fresh.phrase.as_deref(), Some("4 days left"));
    }

    #[test]
    fn test_ceiling_quirk_at_midnight() {
        // At exactly midnight there is no fractional day left to round up,
        // so a date two days out reads as 2 while one minute earlier it reads as 3.
        let expiry = date(2025, 3, 12);
        assert_eq!(days_until(expiry, at(2025, 3, 10, 0, 0)), 2);
        assert_eq!(days_until(expiry, at(2025, 3, 10, 0, 0) - Duration::minutes(1)), 3);
    }

    #[test]
    fn test_expiring_soon_window() {
        let now = at(2025, 3, 10, 10, 0);
        let dates = [
            None,
            Some(date(2025, 3, 9)),
            Some(date(2025, 3, 10)),
            Some(date(2025, 3, 11)),
            Some(date(2025, 3, 13)),
            Some(date(2025, 3, 14)),
        ];

        assert_eq!(count_expiring_soon(dates, now), 3);
    }
}
