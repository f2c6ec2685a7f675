//! Coarse travel-time estimates from a distance alone, without calling a
//! routing service. Used as a cheap preview; a real routed duration can
//! replace these strings whenever one is available.

/// Average walking speed assumed for estimates.
pub const WALKING_SPEED_KMH: f64 = 5.0;

/// Average urban driving speed assumed for estimates.
pub const DRIVING_SPEED_KMH: f64 = 30.0;

pub fn estimate_walking_time(distance_km: f64) -> String {
    estimate_travel_time(distance_km, WALKING_SPEED_KMH)
}

pub fn estimate_driving_time(distance_km: f64) -> String {
    estimate_travel_time(distance_km, DRIVING_SPEED_KMH)
}

/// Estimate at a caller-chosen constant speed. Negative or NaN distances
/// (and nonsense speeds) land in the `< 1 min` bucket instead of
/// propagating NaN into display.
pub fn estimate_travel_time(distance_km: f64, speed_kmh: f64) -> String {
    format_minutes(distance_km / speed_kmh * 60.0)
}

pub fn format_duration_from_seconds(seconds: f64) -> String {
    format_minutes(seconds / 60.0)
}

/// `< 1 min`, then `{m} min` below an hour, then `{h}h {m}m` with the
/// `0m` part omitted. Bucketing happens on the rounded minute count, so a
/// value that rounds to exactly 60 formats as `1h`, not `60 min`.
pub fn format_minutes(minutes: f64) -> String {
    // NaN, negatives and anything rounding below one minute fall through
    // to the first bucket.
    if !minutes.is_finite() || minutes < 0.5 {
        return "< 1 min".to_owned();
    }
    let rounded = minutes.round() as i64;
    if rounded < 60 {
        return format!("{rounded} min");
    }
    let hours = rounded / 60;
    let rest = rounded % 60;
    if rest == 0 {
        format!("{hours}h")
    } else {
        format!("{hours}h {rest}m")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_distance_is_under_a_minute() {
        assert_eq!(estimate_walking_time(0.0), "< 1 min");
    }

    #[test]
    fn invalid_distances_never_reach_display() {
        assert_eq!(estimate_walking_time(f64::NAN), "< 1 min");
        assert_eq!(estimate_walking_time(-3.0), "< 1 min");
        assert_eq!(estimate_travel_time(1.0, 0.0), "< 1 min");
    }

    #[test]
    fn short_walks_format_in_minutes() {
        // 2 km at 5 km/h = 24 min
        assert_eq!(estimate_walking_time(2.0), "24 min");
        // 4.9 km at 5 km/h = 58.8 min
        assert_eq!(estimate_walking_time(4.9), "59 min");
    }

    #[test]
    fn exactly_sixty_minutes_formats_as_one_hour() {
        // 5 km at 5 km/h is the boundary case; it rolls over into hours.
        assert_eq!(estimate_walking_time(5.0), "1h");
    }

    #[test]
    fn long_durations_split_into_hours_and_minutes() {
        // 7.5 km at 5 km/h = 90 min
        assert_eq!(estimate_walking_time(7.5), "1h 30m");
        // 60 km at 30 km/h = 2h exactly, no trailing 0m
        assert_eq!(estimate_driving_time(60.0), "2h");
    }

    #[test]
    fn routed_seconds_share_the_same_buckets() {
        assert_eq!(format_duration_from_seconds(20.0), "< 1 min");
        assert_eq!(format_duration_from_seconds(660.0), "11 min");
        assert_eq!(format_duration_from_seconds(3600.0), "1h");
    }
}
