use chrono::{DateTime, Duration, Utc};

/// Returns the timestamp to store as `updated_at` for a row last touched at
/// `previous`.
///
/// Uses the current time unless the clock has not moved past `previous`, in
/// which case the value is bumped one microsecond so successive updates stay
/// strictly ordered.
pub fn next_updated_at(previous: DateTime<Utc>) -> DateTime<Utc> {
    let now = Utc::now();

    if now > previous {
        now
    } else {
        previous + Duration::microseconds(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_current_time_when_clock_advanced() {
        let previous = Utc::now() - Duration::seconds(10);

        let next = next_updated_at(previous);

        assert!(next > previous + Duration::seconds(5));
    }

    #[test]
    fn bumps_past_a_timestamp_from_the_future() {
        let previous = Utc::now() + Duration::hours(1);

        let next = next_updated_at(previous);

        assert_eq!(next, previous + Duration::microseconds(1));
    }
}
