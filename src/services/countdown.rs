//! Countdown to the wedding, with flip-card change tracking.
//!
//! The page polls a fragment endpoint once a second, passing the values
//! it currently shows; [`FlipState`] compares them against the fresh
//! ones so only the cards that changed animate.

use chrono::{DateTime, NaiveDateTime, Utc};

/// Remaining time, already formatted as zero-padded display strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeLeft {
    pub days: String,
    pub hours: String,
    pub minutes: String,
    pub seconds: String,
}

impl TimeLeft {
    pub fn zero() -> Self {
        Self {
            days: "00".into(),
            hours: "00".into(),
            minutes: "00".into(),
            seconds: "00".into(),
        }
    }

    pub fn is_zero(&self) -> bool {
        self == &Self::zero()
    }

    /// Compact `DD:HH:MM:SS` form carried in the poll query string.
    pub fn encode(&self) -> String {
        format!(
            "{}:{}:{}:{}",
            self.days, self.hours, self.minutes, self.seconds
        )
    }

    pub fn decode(encoded: &str) -> Option<Self> {
        let mut parts = encoded.split(':');
        let days = parts.next()?.to_string();
        let hours = parts.next()?.to_string();
        let minutes = parts.next()?.to_string();
        let seconds = parts.next()?.to_string();
        if parts.next().is_some() {
            return None;
        }
        Some(Self {
            days,
            hours,
            minutes,
            seconds,
        })
    }
}

/// Time left until `target`, clamped to zero once the moment passes.
pub fn remaining(target: DateTime<Utc>, now: DateTime<Utc>) -> TimeLeft {
    let delta = target - now;
    let total = delta.num_seconds();
    if total <= 0 {
        return TimeLeft::zero();
    }

    let days = total / 86_400;
    let hours = (total % 86_400) / 3_600;
    let minutes = (total % 3_600) / 60;
    let seconds = total % 60;

    TimeLeft {
        days: format!("{days:02}"),
        hours: format!("{hours:02}"),
        minutes: format!("{minutes:02}"),
        seconds: format!("{seconds:02}"),
    }
}

/// Previous and current display values for the four cards.
#[derive(Debug, Clone)]
pub struct FlipState {
    pub previous: TimeLeft,
    pub current: TimeLeft,
}

impl FlipState {
    /// Starting state: both sides show the same values, nothing flips.
    pub fn initial(current: TimeLeft) -> Self {
        Self {
            previous: current.clone(),
            current,
        }
    }

    /// Moves to the next tick, remembering what was shown before.
    pub fn advance(previous: Option<TimeLeft>, current: TimeLeft) -> Self {
        Self {
            previous: previous.unwrap_or_else(|| current.clone()),
            current,
        }
    }

    /// Which of days/hours/minutes/seconds changed since the last tick.
    pub fn flips(&self) -> [bool; 4] {
        [
            self.previous.days != self.current.days,
            self.previous.hours != self.current.hours,
            self.previous.minutes != self.current.minutes,
            self.previous.seconds != self.current.seconds,
        ]
    }
}

/// Parses an edited countdown target. Accepts RFC 3339 and the bare
/// `YYYY-MM-DDTHH:MM:SS` form, which is read as UTC.
pub fn parse_target(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn counts_down_with_two_digit_padding() {
        let target = at("2026-09-15T19:00:00+07:00");
        let now = target - Duration::days(3) - Duration::hours(4) - Duration::minutes(5)
            - Duration::seconds(6);
        let left = remaining(target, now);
        assert_eq!(left.days, "03");
        assert_eq!(left.hours, "04");
        assert_eq!(left.minutes, "05");
        assert_eq!(left.seconds, "06");
    }

    #[test]
    fn clamps_to_zero_after_the_event() {
        let target = Utc.with_ymd_and_hms(2026, 9, 15, 12, 0, 0).unwrap();
        assert!(remaining(target, target).is_zero());
        assert!(remaining(target, target + Duration::hours(1)).is_zero());
    }

    #[test]
    fn three_digit_day_counts_survive_encoding() {
        let target = Utc.with_ymd_and_hms(2027, 1, 1, 0, 0, 0).unwrap();
        let now = target - Duration::days(123);
        let left = remaining(target, now);
        assert_eq!(left.days, "123");
        assert_eq!(TimeLeft::decode(&left.encode()), Some(left));
    }

    #[test]
    fn decode_rejects_malformed_input() {
        assert!(TimeLeft::decode("01:02:03").is_none());
        assert!(TimeLeft::decode("01:02:03:04:05").is_none());
        assert_eq!(
            TimeLeft::decode("01:02:03:04"),
            Some(TimeLeft {
                days: "01".into(),
                hours: "02".into(),
                minutes: "03".into(),
                seconds: "04".into(),
            })
        );
    }

    #[test]
    fn only_changed_cards_flip() {
        let prev = TimeLeft::decode("02:11:59:58").unwrap();
        let curr = TimeLeft::decode("02:11:59:59").unwrap();
        let state = FlipState::advance(Some(prev), curr);
        assert_eq!(state.flips(), [false, false, false, true]);

        let prev = TimeLeft::decode("02:11:59:59").unwrap();
        let curr = TimeLeft::decode("02:12:00:00").unwrap();
        let state = FlipState::advance(Some(prev), curr);
        assert_eq!(state.flips(), [false, true, true, true]);
    }

    #[test]
    fn first_tick_never_flips() {
        let curr = TimeLeft::decode("10:00:00:00").unwrap();
        let state = FlipState::advance(None, curr.clone());
        assert_eq!(state.flips(), [false; 4]);
        assert_eq!(FlipState::initial(curr).flips(), [false; 4]);
    }

    #[test]
    fn parses_both_target_forms() {
        assert_eq!(
            parse_target("2026-09-15T19:00:00+07:00"),
            Some(at("2026-09-15T19:00:00+07:00"))
        );
        assert_eq!(
            parse_target("2026-09-15T12:00:00"),
            Some(Utc.with_ymd_and_hms(2026, 9, 15, 12, 0, 0).unwrap())
        );
        assert_eq!(parse_target(""), None);
        assert_eq!(parse_target("soon"), None);
    }
}
