use std::fmt;

/// Whole hours and leftover whole minutes of a span of seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoursMinutes {
    pub hours: u64,
    pub minutes: u64,
}

impl HoursMinutes {
    pub fn from_seconds(seconds: f64) -> Self {
        // negative or NaN spans never come out of the model, clamp them anyway
        let s = if seconds.is_finite() { seconds.max(0.0) } else { 0.0 };
        Self {
            hours: (s / 3600.0).floor() as u64,
            minutes: ((s % 3600.0) / 60.0).floor() as u64,
        }
    }
}

impl fmt::Display for HoursMinutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h {}m", self.hours, self.minutes)
    }
}

pub fn format_hours_minutes(seconds: f64) -> String {
    HoursMinutes::from_seconds(seconds).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floors_hours_and_minutes() {
        assert_eq!(format_hours_minutes(3661.0), "1h 1m");
        assert_eq!(format_hours_minutes(100.1), "0h 1m");
        assert_eq!(format_hours_minutes(400.4), "0h 6m");
        assert_eq!(format_hours_minutes(59.99), "0h 0m");
        assert_eq!(format_hours_minutes(0.0), "0h 0m");
        assert_eq!(format_hours_minutes(90000.0), "25h 0m");
    }

    #[test]
    fn split_is_exposed() {
        let hm = HoursMinutes::from_seconds(7325.0);
        assert_eq!(hm, HoursMinutes { hours: 2, minutes: 2 });
    }
}
