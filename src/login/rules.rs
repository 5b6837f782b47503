//! Business rules that turn raw account and character rows into what the
//! client displays.

use chrono::{DateTime, NaiveTime, Utc};

/// Seconds in one day.
pub const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Vocation names indexed by vocation ID.
const VOCATION_NAMES: [&str; 9] = [
    "None",
    "Sorcerer",
    "Druid",
    "Paladin",
    "Knight",
    "Master Sorcerer",
    "Elder Druid",
    "Royal Paladin",
    "Elite Knight",
];

/// Resolve a vocation ID to the name the client shows.
///
/// IDs outside the table resolve to "None".
///
/// # Examples
///
/// ```
/// use kaplar_login::login::vocation_name;
///
/// assert_eq!(vocation_name(4), "Knight");
/// assert_eq!(vocation_name(8), "Elite Knight");
/// assert_eq!(vocation_name(42), "None");
/// ```
pub fn vocation_name(vocation_id: i64) -> &'static str {
    usize::try_from(vocation_id)
        .ok()
        .and_then(|i| VOCATION_NAMES.get(i))
        .copied()
        .unwrap_or(VOCATION_NAMES[0])
}

/// Daily reward state code: 1 if a reward is waiting, else 0.
pub fn daily_reward_state(pending_reward: bool) -> i64 {
    if pending_reward {
        1
    } else {
        0
    }
}

/// Premium expiry as a unix timestamp, or 0 for free accounts.
///
/// Paid days count from the start of the current UTC day.
pub fn premium_expiry(premium_days: i64, now: DateTime<Utc>) -> i64 {
    if premium_days <= 0 {
        return 0;
    }
    let start_of_day = now.date_naive().and_time(NaiveTime::MIN).and_utc().timestamp();
    start_of_day.saturating_add(premium_days.saturating_mul(SECONDS_PER_DAY))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_vocation_names() {
        let expected = [
            (0, "None"),
            (1, "Sorcerer"),
            (2, "Druid"),
            (3, "Paladin"),
            (4, "Knight"),
            (5, "Master Sorcerer"),
            (6, "Elder Druid"),
            (7, "Royal Paladin"),
            (8, "Elite Knight"),
        ];
        for (id, name) in expected {
            assert_eq!(vocation_name(id), name, "vocation {id}");
        }
    }

    #[test]
    fn test_unknown_vocation_is_none() {
        assert_eq!(vocation_name(9), "None");
        assert_eq!(vocation_name(-1), "None");
        assert_eq!(vocation_name(i64::MAX), "None");
        assert_eq!(vocation_name(i64::MIN), "None");
    }

    #[test]
    fn test_daily_reward_state() {
        assert_eq!(daily_reward_state(true), 1);
        assert_eq!(daily_reward_state(false), 0);
    }

    #[test]
    fn test_premium_expiry_free_account() {
        let now = Utc::now();
        assert_eq!(premium_expiry(0, now), 0);
        assert_eq!(premium_expiry(-5, now), 0);
    }

    #[test]
    fn test_premium_expiry_counts_from_start_of_day() {
        let now = Utc.with_ymd_and_hms(2024, 3, 10, 15, 30, 0).unwrap();
        let midnight = Utc.with_ymd_and_hms(2024, 3, 10, 0, 0, 0).unwrap();

        assert_eq!(
            premium_expiry(30, now),
            midnight.timestamp() + 30 * SECONDS_PER_DAY
        );
    }

    #[test]
    fn test_premium_expiry_is_in_the_future() {
        let now = Utc.with_ymd_and_hms(2024, 3, 10, 23, 59, 59).unwrap();
        assert!(premium_expiry(1, now) > now.timestamp());
    }

    #[test]
    fn test_premium_expiry_saturates() {
        let now = Utc::now();
        assert_eq!(premium_expiry(i64::MAX, now), i64::MAX);
    }
}
